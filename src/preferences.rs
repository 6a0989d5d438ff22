//! Stored-versus-effective resolution for the shell preferences that can
//! defer to the platform.
//!
//! A stored preference is either an explicit supported value or the sentinel
//! `"system"`. Resolution never fails: the sentinel is answered by probing
//! the platform, and a probed value outside the supported set falls back to
//! the domain's default.

use serde::Serialize;

use crate::change_events::{ChangeNotifier, PreferenceChange, SubscriptionId};
use crate::error::Result;
use crate::settings_store::SettingsStore;
use crate::system_probe::{LocaleProbe, SystemProbe, ThemeProbe};

/// Stored value meaning "defer to the platform's current setting".
pub const SYSTEM_SENTINEL: &str = "system";

pub const SUPPORTED_LANGUAGES: &[&str] = &["en", "es"];
pub const SUPPORTED_THEMES: &[&str] = &["light", "dark"];

const FALLBACK_LANGUAGE: &str = "en";
const FALLBACK_THEME: &str = "light";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PreferenceKind {
    Language,
    Theme,
}

impl PreferenceKind {
    /// Key the preference is persisted under.
    pub fn key(self) -> &'static str {
        match self {
            Self::Language => "language",
            Self::Theme => "theme",
        }
    }

    /// Explicit values a user may select, sentinel excluded.
    pub fn supported(self) -> &'static [&'static str] {
        match self {
            Self::Language => SUPPORTED_LANGUAGES,
            Self::Theme => SUPPORTED_THEMES,
        }
    }

    /// Value used when the platform probe answers outside the supported set.
    pub fn fallback(self) -> &'static str {
        match self {
            Self::Language => FALLBACK_LANGUAGE,
            Self::Theme => FALLBACK_THEME,
        }
    }
}

/// One resolution shape shared by both preference kinds: the same store,
/// probe, and fallback chain, parameterized by the value domain.
pub struct PreferenceResolver<S> {
    kind: PreferenceKind,
    store: S,
    probe: Box<dyn SystemProbe>,
    observers: ChangeNotifier,
}

impl<S: SettingsStore> PreferenceResolver<S> {
    pub fn new(kind: PreferenceKind, store: S, probe: Box<dyn SystemProbe>) -> Self {
        Self {
            kind,
            store,
            probe,
            observers: ChangeNotifier::new(),
        }
    }

    /// Language resolver backed by the OS locale probe.
    pub fn language(store: S) -> Self {
        Self::new(PreferenceKind::Language, store, Box::new(LocaleProbe))
    }

    /// Theme resolver backed by the OS color-scheme probe.
    pub fn theme(store: S) -> Self {
        Self::new(PreferenceKind::Theme, store, Box::new(ThemeProbe))
    }

    pub fn kind(&self) -> PreferenceKind {
        self.kind
    }

    /// Last persisted preference, or the sentinel when nothing is stored.
    pub fn stored(&self) -> String {
        self.store
            .get(self.kind.key())
            .unwrap_or_else(|| SYSTEM_SENTINEL.to_string())
    }

    /// Effective value for the current stored preference.
    pub fn effective(&self) -> String {
        self.resolve_effective(&self.stored())
    }

    /// Resolves a stored preference to the value actually applied. Explicit
    /// values pass through unchanged; the sentinel re-probes the platform on
    /// every call so external changes are observed on the next resolution.
    pub fn resolve_effective(&self, stored: &str) -> String {
        if stored != SYSTEM_SENTINEL {
            return stored.to_string();
        }

        let probed = self.probe.current();
        if self.kind.supported().contains(&probed.as_str()) {
            probed
        } else {
            self.kind.fallback().to_string()
        }
    }

    /// Persists a new preference and notifies observers of the effective
    /// value now in force. `Ok(false)` rejects a candidate outside the
    /// supported set (sentinel included) without touching the store; `Err` is
    /// a store write failure.
    pub fn set_preference(&mut self, candidate: &str) -> Result<bool> {
        if candidate != SYSTEM_SENTINEL && !self.kind.supported().contains(&candidate) {
            tracing::debug!(
                "rejecting unsupported {} preference '{candidate}'",
                self.kind.key()
            );
            return Ok(false);
        }

        tracing::info!("setting {} preference to {candidate}", self.kind.key());
        self.store.set(self.kind.key(), candidate)?;

        let effective = self.resolve_effective(candidate);
        self.observers.emit(&PreferenceChange {
            kind: self.kind,
            effective,
        });
        Ok(true)
    }

    pub fn subscribe(
        &mut self,
        observer: impl Fn(&PreferenceChange) + 'static,
    ) -> SubscriptionId {
        self.observers.subscribe(observer)
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.observers.unsubscribe(id)
    }
}
