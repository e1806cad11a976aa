// SPDX-License-Identifier: MPL-2.0
//! Bundle registry consulted by rendering code.

use super::resolver::Presentation;
use super::Bundle;
use std::collections::HashMap;
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};
use unic_langid::LanguageIdentifier;

/// Shared registry of translation bundles and the locale rendering reads.
///
/// Cloning is cheap and every clone sees the same registry, so one handle
/// can live inside the locale resolver (for registration) while others live
/// in view code (for lookups).
#[derive(Clone)]
pub struct Translator {
    inner: Arc<RwLock<Registry>>,
}

struct Registry {
    bundles: HashMap<LanguageIdentifier, Bundle>,
    current: LanguageIdentifier,
    fallback: LanguageIdentifier,
}

impl Translator {
    /// Creates an empty registry rendering in `fallback` until a bundle is
    /// registered and activated.
    #[must_use]
    pub fn new(fallback: LanguageIdentifier) -> Self {
        Self {
            inner: Arc::new(RwLock::new(Registry {
                bundles: HashMap::new(),
                current: fallback.clone(),
                fallback,
            })),
        }
    }

    /// Looks `key` up in the current bundle, then the fallback bundle.
    /// Returns the key itself when neither has it.
    pub fn tr(&self, key: &str) -> String {
        let registry = self.read();
        if let Some(value) = registry
            .bundles
            .get(&registry.current)
            .and_then(|bundle| bundle.get(key))
        {
            return value.clone();
        }
        if let Some(value) = registry
            .bundles
            .get(&registry.fallback)
            .and_then(|bundle| bundle.get(key))
        {
            return value.clone();
        }
        key.to_string()
    }

    /// The locale lookups currently read from.
    pub fn current_locale(&self) -> LanguageIdentifier {
        self.read().current.clone()
    }

    /// Whether a bundle is registered for `locale`.
    pub fn has_bundle(&self, locale: &LanguageIdentifier) -> bool {
        self.read().bundles.contains_key(locale)
    }

    fn read(&self) -> RwLockReadGuard<'_, Registry> {
        self.inner.read().expect("translator lock poisoned")
    }

    fn write(&self) -> RwLockWriteGuard<'_, Registry> {
        self.inner.write().expect("translator lock poisoned")
    }
}

impl Presentation for Translator {
    fn register(&mut self, locale: LanguageIdentifier, bundle: Bundle) {
        self.write().bundles.insert(locale, bundle);
    }

    fn set_active(&mut self, locale: LanguageIdentifier) {
        self.write().current = locale;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tag(s: &str) -> LanguageIdentifier {
        s.parse().expect("valid locale tag")
    }

    fn bundle(pairs: &[(&str, &str)]) -> Bundle {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn tr_reads_the_active_bundle() {
        let mut translator = Translator::new(tag("en"));
        translator.register(tag("en"), bundle(&[("hello", "Hello")]));
        translator.register(tag("fr"), bundle(&[("hello", "Bonjour")]));
        translator.set_active(tag("fr"));

        assert_eq!(translator.tr("hello"), "Bonjour");
        assert_eq!(translator.current_locale(), tag("fr"));
    }

    #[test]
    fn missing_key_falls_back_to_the_fallback_bundle() {
        let mut translator = Translator::new(tag("en"));
        translator.register(tag("en"), bundle(&[("hello", "Hello"), ("bye", "Bye")]));
        translator.register(tag("fr"), bundle(&[("hello", "Bonjour")]));
        translator.set_active(tag("fr"));

        assert_eq!(translator.tr("bye"), "Bye");
    }

    #[test]
    fn unknown_key_renders_as_itself() {
        let translator = Translator::new(tag("en"));
        assert_eq!(translator.tr("settings-title"), "settings-title");
    }

    #[test]
    fn registering_overwrites_the_previous_bundle() {
        let mut translator = Translator::new(tag("en"));
        translator.register(tag("en"), bundle(&[("hello", "Hello")]));
        translator.register(tag("en"), bundle(&[("hello", "Hi")]));
        translator.set_active(tag("en"));

        assert_eq!(translator.tr("hello"), "Hi");
    }

    #[test]
    fn clones_share_one_registry() {
        let translator = Translator::new(tag("en"));
        let mut writer = translator.clone();
        writer.register(tag("en"), bundle(&[("hello", "Hello")]));
        writer.set_active(tag("en"));

        assert!(translator.has_bundle(&tag("en")));
        assert_eq!(translator.tr("hello"), "Hello");
    }
}
