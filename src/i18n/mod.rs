// SPDX-License-Identifier: MPL-2.0
//! Internationalization (i18n) support for the shell.
//!
//! This module owns the answer to "what language is the UI rendered in".
//! Translation bundles are plain key-to-string maps fetched on demand from a
//! bundle source; the active choice is persisted across sessions.
//!
//! # Features
//!
//! - Lazy, network-backed loading of translation bundles
//! - Runtime language switching with a persisted preference
//! - Per-tag load-state introspection
//! - Single-fallback lookup when a key is missing from the active bundle

mod http;
mod resolver;
mod translator;

pub use http::HttpBundleSource;
pub use resolver::{BundleSource, BundleState, LocaleResolver, Presentation};
pub use translator::Translator;

use std::collections::HashMap;

/// A translation bundle: mapping from translation key to localized string.
pub type Bundle = HashMap<String, String>;
