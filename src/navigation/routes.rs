// SPDX-License-Identifier: MPL-2.0
//! Static route table mapping URL paths to view handles.

/// Views the navigation engine can render.
///
/// Opaque handles only; the rendering side decides what each one looks like.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewId {
    Home,
    Settings,
    SettingsNetwork,
    SettingsRuntime,
    SettingsSecurity,
    SettingsLanguage,
    SettingsAppearance,
    SettingsAbout,
    Add,
}

/// One entry of the route table.
///
/// Top-level paths are absolute; child paths are segments relative to their
/// parent. `name` is optional and unique across the whole table when present.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RouteEntry {
    pub path: &'static str,
    pub name: Option<&'static str>,
    pub view: ViewId,
    pub children: &'static [RouteEntry],
}

/// The application route table.
pub static ROUTES: &[RouteEntry] = &[
    RouteEntry {
        path: "/",
        name: Some("home"),
        view: ViewId::Home,
        children: &[],
    },
    RouteEntry {
        path: "/settings",
        name: Some("settings"),
        view: ViewId::Settings,
        children: &[
            RouteEntry {
                path: "network",
                name: None,
                view: ViewId::SettingsNetwork,
                children: &[],
            },
            RouteEntry {
                path: "runtime",
                name: None,
                view: ViewId::SettingsRuntime,
                children: &[],
            },
            RouteEntry {
                path: "security",
                name: None,
                view: ViewId::SettingsSecurity,
                children: &[],
            },
            RouteEntry {
                path: "language",
                name: None,
                view: ViewId::SettingsLanguage,
                children: &[],
            },
            RouteEntry {
                path: "appearance",
                name: None,
                view: ViewId::SettingsAppearance,
                children: &[],
            },
            RouteEntry {
                path: "about",
                name: None,
                view: ViewId::SettingsAbout,
                children: &[],
            },
        ],
    },
    RouteEntry {
        path: "/add",
        name: Some("add"),
        view: ViewId::Add,
        children: &[],
    },
];

fn join(parent: &str, child: &str) -> String {
    if child.starts_with('/') || parent.is_empty() {
        child.to_string()
    } else if parent.ends_with('/') {
        format!("{parent}{child}")
    } else {
        format!("{parent}/{child}")
    }
}

/// Resolves an absolute path to its route entry.
///
/// Child routes resolve through their parent (`/settings/network`); a
/// container path (`/settings`) resolves to the container itself.
pub fn resolve(path: &str) -> Option<&'static RouteEntry> {
    fn walk(
        entries: &'static [RouteEntry],
        prefix: &str,
        path: &str,
    ) -> Option<&'static RouteEntry> {
        for entry in entries {
            let full = join(prefix, entry.path);
            if full == path {
                return Some(entry);
            }
            if let Some(found) = walk(entry.children, &full, path) {
                return Some(found);
            }
        }
        None
    }
    walk(ROUTES, "", path)
}

/// Looks a route up by its unique name.
pub fn by_name(name: &str) -> Option<&'static RouteEntry> {
    fn walk(entries: &'static [RouteEntry], name: &str) -> Option<&'static RouteEntry> {
        for entry in entries {
            if entry.name == Some(name) {
                return Some(entry);
            }
            if let Some(found) = walk(entry.children, name) {
                return Some(found);
            }
        }
        None
    }
    walk(ROUTES, name)
}

/// Every addressable absolute path in the table.
pub fn full_paths() -> Vec<String> {
    fn walk(entries: &'static [RouteEntry], prefix: &str, out: &mut Vec<String>) {
        for entry in entries {
            let full = join(prefix, entry.path);
            out.push(full.clone());
            walk(entry.children, &full, out);
        }
    }
    let mut paths = Vec::new();
    walk(ROUTES, "", &mut paths);
    paths
}
