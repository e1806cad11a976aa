// SPDX-License-Identifier: MPL-2.0
//! Locale resolution: the single source of truth for the active language.
//!
//! [`LocaleResolver`] decides which locale is active, loads the matching
//! bundle lazily through a [`BundleSource`], hands it to the rendering side
//! through a [`Presentation`], and keeps the persisted preference in sync.
//!
//! # Design Notes
//!
//! - The resolver is an explicit context object, not a global. Share it
//!   behind an `Arc` wherever translations can be switched.
//! - State lives behind a mutex that is held only across synchronous
//!   sections, never across the fetch await. Overlapping switches therefore
//!   interleave freely and the last fetch to *complete* wins the active
//!   locale, which may not be the last one requested. Callers that need
//!   strict request ordering must serialize switches themselves.

use super::Bundle;
use crate::config::PreferenceStore;
use crate::error::BundleLoadError;
use std::collections::{HashMap, HashSet};
use std::sync::{Mutex, MutexGuard};
use unic_langid::LanguageIdentifier;

/// Produces translation bundles for locale tags.
///
/// One call means one request; caching is the resolver's responsibility.
#[allow(async_fn_in_trait)]
pub trait BundleSource {
    /// Fetches the bundle for `locale`.
    ///
    /// # Errors
    ///
    /// Returns a [`BundleLoadError`] when the request fails or the response
    /// is not a key-to-string mapping.
    async fn fetch(&self, locale: &LanguageIdentifier) -> Result<Bundle, BundleLoadError>;
}

/// Registration surface of the rendering layer.
pub trait Presentation {
    /// Makes `bundle` available for rendering under `locale`.
    fn register(&mut self, locale: LanguageIdentifier, bundle: Bundle);

    /// Points rendering at `locale`.
    fn set_active(&mut self, locale: LanguageIdentifier);
}

/// Load state of one locale's bundle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BundleState {
    /// No bundle loaded and no fetch in flight.
    #[default]
    Absent,
    /// A fetch is in flight.
    Loading,
    /// A bundle is loaded and registered.
    Present,
}

/// Process-wide locale state and the operations that mutate it.
///
/// Created once at startup and kept for the lifetime of the application.
/// `S` is the bundle transport, `P` the persisted preference store, `R` the
/// presentation layer receiving loaded bundles.
pub struct LocaleResolver<S, P, R> {
    source: S,
    fallback: LanguageIdentifier,
    supported: Vec<LanguageIdentifier>,
    state: Mutex<ResolverState<P, R>>,
}

struct ResolverState<P, R> {
    active: LanguageIdentifier,
    bundles: HashMap<LanguageIdentifier, Bundle>,
    loading: HashSet<LanguageIdentifier>,
    store: P,
    presentation: R,
}

impl<S, P, R> LocaleResolver<S, P, R>
where
    S: BundleSource,
    P: PreferenceStore,
    R: Presentation,
{
    /// Creates a resolver with `fallback` as the initial active locale.
    #[must_use]
    pub fn new(source: S, store: P, presentation: R, fallback: LanguageIdentifier) -> Self {
        Self {
            source,
            fallback: fallback.clone(),
            supported: Vec::new(),
            state: Mutex::new(ResolverState {
                active: fallback,
                bundles: HashMap::new(),
                loading: HashSet::new(),
                store,
                presentation,
            }),
        }
    }

    /// Advertises the locales a language picker should offer.
    ///
    /// Purely informational: [`switch_locale`](Self::switch_locale) accepts
    /// any tag and lets the bundle source decide whether it exists.
    #[must_use]
    pub fn with_supported_locales(mut self, locales: Vec<LanguageIdentifier>) -> Self {
        self.supported = locales;
        self
    }

    /// The locale the UI is currently rendered in.
    pub fn active_locale(&self) -> LanguageIdentifier {
        self.lock().active.clone()
    }

    /// The locale used when no preference is recorded or resolvable.
    pub fn fallback_locale(&self) -> &LanguageIdentifier {
        &self.fallback
    }

    /// Locales advertised for a language picker.
    pub fn supported_locales(&self) -> &[LanguageIdentifier] {
        &self.supported
    }

    /// Load state of the bundle for `locale`.
    pub fn bundle_state(&self, locale: &LanguageIdentifier) -> BundleState {
        let state = self.lock();
        if state.loading.contains(locale) {
            BundleState::Loading
        } else if state.bundles.contains_key(locale) {
            BundleState::Present
        } else {
            BundleState::Absent
        }
    }

    /// The cached bundle for `locale`, if one has been loaded.
    pub fn bundle(&self, locale: &LanguageIdentifier) -> Option<Bundle> {
        self.lock().bundles.get(locale).cloned()
    }

    /// Switches the UI to `locale`.
    ///
    /// Fetches the bundle (the sole suspension point), caches it, registers
    /// it with the presentation layer, marks `locale` active and persists
    /// the choice. No dedup is performed: switching to an already-loaded
    /// locale re-fetches and overwrites the cache entry.
    ///
    /// # Errors
    ///
    /// Returns the [`BundleLoadError`] from the fetch. On failure the active
    /// locale, the cache and the persisted preference are all left
    /// untouched.
    pub async fn switch_locale(&self, locale: LanguageIdentifier) -> Result<(), BundleLoadError> {
        self.lock().loading.insert(locale.clone());

        // The state lock is not held across the fetch, so another switch
        // may start and finish while this one is in flight; the last fetch
        // to complete wins the active locale.
        let fetched = self.source.fetch(&locale).await;

        let mut state = self.lock();
        state.loading.remove(&locale);
        let bundle = fetched?;

        state.bundles.insert(locale.clone(), bundle.clone());
        state.presentation.register(locale.clone(), bundle);
        state.presentation.set_active(locale.clone());
        state.active = locale.clone();
        if let Err(error) = state.store.set(&locale.to_string()) {
            eprintln!("Failed to persist locale preference: {error:?}");
        }
        Ok(())
    }

    /// Resolves the startup locale and loads its bundle.
    ///
    /// Reads the persisted preference and falls back to the fallback locale
    /// when it is absent or not a valid tag, then delegates to
    /// [`switch_locale`](Self::switch_locale).
    ///
    /// # Errors
    ///
    /// Propagates the [`BundleLoadError`] of the initial switch. In that
    /// case no bundle is registered and the presentation layer renders raw
    /// keys until a later switch succeeds.
    pub async fn initialize(&self) -> Result<(), BundleLoadError> {
        let stored = self.lock().store.get();
        let locale = stored
            .and_then(|tag| tag.parse::<LanguageIdentifier>().ok())
            .unwrap_or_else(|| self.fallback.clone());
        self.switch_locale(locale).await
    }

    fn lock(&self) -> MutexGuard<'_, ResolverState<P, R>> {
        self.state.lock().expect("resolver state lock poisoned")
    }
}
