// SPDX-License-Identifier: MPL-2.0
use lumen_shell::config::{self, ConfigStore, PreferenceStore};
use lumen_shell::error::BundleLoadError;
use lumen_shell::i18n::{Bundle, BundleSource, LocaleResolver, Translator};
use lumen_shell::navigation::{self, ViewId};
use std::collections::HashMap;
use tempfile::tempdir;
use unic_langid::LanguageIdentifier;

fn tag(s: &str) -> LanguageIdentifier {
    s.parse().expect("valid locale tag")
}

/// Serves bundles from an in-memory map; unknown tags answer 404.
struct MapSource(HashMap<String, Bundle>);

impl MapSource {
    fn new(entries: &[(&str, &[(&str, &str)])]) -> Self {
        Self(
            entries
                .iter()
                .map(|(locale, pairs)| {
                    let bundle = pairs
                        .iter()
                        .map(|(k, v)| (k.to_string(), v.to_string()))
                        .collect();
                    (locale.to_string(), bundle)
                })
                .collect(),
        )
    }
}

impl BundleSource for MapSource {
    async fn fetch(&self, locale: &LanguageIdentifier) -> Result<Bundle, BundleLoadError> {
        self.0
            .get(&locale.to_string())
            .cloned()
            .ok_or(BundleLoadError::Status(404))
    }
}

fn sources() -> MapSource {
    MapSource::new(&[
        ("en", &[("hello", "Hello")]),
        ("fr", &[("hello", "Bonjour")]),
    ])
}

#[tokio::test]
async fn language_change_persists_across_resolver_lifetimes() {
    let dir = tempdir().expect("failed to create temporary directory");
    let prefs_path = dir.path().join("prefs.toml");

    // First run: nothing persisted, the fallback loads, then the user
    // switches to French.
    {
        let translator = Translator::new(tag("en"));
        let resolver = LocaleResolver::new(
            sources(),
            ConfigStore::at(&prefs_path),
            translator.clone(),
            tag("en"),
        );
        resolver.initialize().await.expect("initial load");
        assert_eq!(resolver.active_locale(), tag("en"));
        assert_eq!(translator.tr("hello"), "Hello");

        resolver.switch_locale(tag("fr")).await.expect("switch to fr");
        assert_eq!(translator.tr("hello"), "Bonjour");
    }

    let prefs = config::load_from_path(&prefs_path).expect("failed to load preferences");
    assert_eq!(prefs.language, Some("fr".to_string()));

    // Second run: the persisted choice drives initialization.
    {
        let translator = Translator::new(tag("en"));
        let resolver = LocaleResolver::new(
            sources(),
            ConfigStore::at(&prefs_path),
            translator.clone(),
            tag("en"),
        );
        resolver.initialize().await.expect("initial load");
        assert_eq!(resolver.active_locale(), tag("fr"));
        assert_eq!(translator.tr("hello"), "Bonjour");
    }

    dir.close().expect("failed to close temporary directory");
}

#[tokio::test]
async fn failed_switch_keeps_the_previous_locale_rendering() {
    let dir = tempdir().expect("failed to create temporary directory");
    let prefs_path = dir.path().join("prefs.toml");

    let translator = Translator::new(tag("en"));
    let store = ConfigStore::at(&prefs_path);
    let resolver = LocaleResolver::new(sources(), store.clone(), translator.clone(), tag("en"));

    resolver.initialize().await.expect("initial load");
    let err = resolver
        .switch_locale(tag("xx"))
        .await
        .expect_err("unknown locale should fail");

    assert!(err.is_not_found());
    assert_eq!(resolver.active_locale(), tag("en"));
    assert_eq!(translator.tr("hello"), "Hello");
    assert_eq!(store.get(), Some("en".to_string()));
}

#[test]
fn settings_panels_are_reachable_from_the_route_table() {
    let language = navigation::resolve("/settings/language").expect("language route");
    assert_eq!(language.view, ViewId::SettingsLanguage);

    let about = navigation::resolve("/settings/about").expect("about route");
    assert_eq!(about.view, ViewId::SettingsAbout);

    let settings = navigation::by_name("settings").expect("named settings route");
    assert_eq!(settings.children.len(), 6);
}
