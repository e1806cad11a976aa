// SPDX-License-Identifier: MPL-2.0
//! `lumen_shell` is the navigation and localization core of the Lumen client UI.
//!
//! It provides the declarative route table consumed by the navigation engine
//! and a locale resolver that fetches translation bundles on demand, registers
//! them for rendering, and persists the user's language choice across sessions.

#![doc(html_root_url = "https://docs.rs/lumen_shell/0.1.0")]

pub mod config;
pub mod error;
pub mod i18n;
pub mod navigation;
