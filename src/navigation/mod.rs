// SPDX-License-Identifier: MPL-2.0
//! Declarative navigation data for the shell.
//!
//! The route table is pure data: the navigation engine owns traversal and
//! rendering, this module only answers lookups against the static table.

mod routes;

pub use routes::{by_name, full_paths, resolve, RouteEntry, ViewId, ROUTES};
