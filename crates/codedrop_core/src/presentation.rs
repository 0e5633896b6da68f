//! Session-wide presentation state: theme, locale, and translation lookup.
//!
//! Views receive a `&PresentationContext`, which only exists after hydration,
//! so rendering before the stored preferences are applied is unrepresentable.

use crate::constants::{LOCALE_KEY, THEME_KEY};
use crate::i18n;
use crate::preferences::{Locale, PreferenceStore, Theme};
use tracing::{debug, warn};

/// Hydrated theme/locale state plus the store it writes back to.
pub struct PresentationContext {
    theme: Theme,
    locale: Locale,
    store: Box<dyn PreferenceStore>,
}

impl std::fmt::Debug for PresentationContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PresentationContext")
            .field("theme", &self.theme)
            .field("locale", &self.locale)
            .finish_non_exhaustive()
    }
}

impl PresentationContext {
    /// Resolve the initial theme and locale from `store`.
    ///
    /// Theme order: stored value, then the `ambient` signal from the host
    /// (OS color scheme), then light. Locale: stored value, then English.
    pub fn hydrate(store: Box<dyn PreferenceStore>, ambient: Option<Theme>) -> Self {
        let theme = store.theme().or(ambient).unwrap_or_default();
        let locale = store.locale().unwrap_or_default();
        debug!(
            theme = theme.as_str(),
            locale = locale.as_str(),
            "presentation hydrated"
        );
        Self {
            theme,
            locale,
            store,
        }
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn locale(&self) -> Locale {
        self.locale
    }

    /// Flip the theme and persist it.
    ///
    /// A failed write is logged; the session still switches.
    pub fn toggle_theme(&mut self) -> Theme {
        self.theme = self.theme.toggled();
        self.persist(THEME_KEY, self.theme.as_str());
        self.theme
    }

    /// Flip the locale and persist it.
    ///
    /// A failed write is logged; the session still switches.
    pub fn toggle_locale(&mut self) -> Locale {
        self.locale = self.locale.toggled();
        self.persist(LOCALE_KEY, self.locale.as_str());
        self.locale
    }

    /// Translate `key` for the active locale, or return `key` when unknown.
    pub fn translate<'a>(&self, key: &'a str) -> &'a str {
        i18n::translate(self.locale, key)
    }

    /// Give back the underlying store (used to simulate a restart).
    pub fn into_store(self) -> Box<dyn PreferenceStore> {
        self.store
    }

    fn persist(&mut self, key: &str, value: &str) {
        if let Err(err) = self.store.set(key, value) {
            warn!("failed to persist preference {}={}: {}", key, value, err);
        }
    }
}

/// Two-phase startup: preferences are read once, before the first paint.
pub enum Startup {
    Uninitialized(Box<dyn PreferenceStore>),
    Ready(PresentationContext),
}

impl Default for Startup {
    /// Uninitialized over an empty in-memory store.
    fn default() -> Self {
        Startup::Uninitialized(Box::new(crate::preferences::MemoryPreferenceStore::new()))
    }
}

impl Startup {
    /// Start in the uninitialized phase with `store` pending hydration.
    pub fn new(store: Box<dyn PreferenceStore>) -> Self {
        Startup::Uninitialized(store)
    }

    pub fn is_ready(&self) -> bool {
        matches!(self, Startup::Ready(_))
    }

    /// Hydrated context, if startup has completed.
    pub fn context(&self) -> Option<&PresentationContext> {
        match self {
            Startup::Ready(ctx) => Some(ctx),
            Startup::Uninitialized(_) => None,
        }
    }

    /// Hydrate on first call and return the ready context.
    ///
    /// `ambient` is only consulted during the transition.
    pub fn ensure_ready(
        &mut self,
        ambient: impl FnOnce() -> Option<Theme>,
    ) -> &mut PresentationContext {
        if let Startup::Uninitialized(store) = self {
            let store = std::mem::replace(
                store,
                Box::new(crate::preferences::MemoryPreferenceStore::new()),
            );
            *self = Startup::Ready(PresentationContext::hydrate(store, ambient()));
        }
        match self {
            Startup::Ready(ctx) => ctx,
            Startup::Uninitialized(_) => unreachable!("startup hydrated above"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AppError;
    use crate::preferences::MemoryPreferenceStore;

    struct ReadOnlyStore;

    impl PreferenceStore for ReadOnlyStore {
        fn get(&self, _key: &str) -> Option<String> {
            None
        }

        fn set(&mut self, _key: &str, _value: &str) -> Result<(), AppError> {
            Err(AppError::Config("read-only".to_string()))
        }
    }

    #[test]
    fn hydrate_prefers_stored_theme_over_ambient() {
        let store = MemoryPreferenceStore::with_entries([(THEME_KEY, "light")]);
        let ctx = PresentationContext::hydrate(Box::new(store), Some(Theme::Dark));
        assert_eq!(ctx.theme(), Theme::Light);
    }

    #[test]
    fn hydrate_uses_ambient_then_light() {
        let ctx = PresentationContext::hydrate(Box::new(MemoryPreferenceStore::new()), Some(Theme::Dark));
        assert_eq!(ctx.theme(), Theme::Dark);

        let ctx = PresentationContext::hydrate(Box::new(MemoryPreferenceStore::new()), None);
        assert_eq!(ctx.theme(), Theme::Light);
        assert_eq!(ctx.locale(), Locale::En);
    }

    #[test]
    fn hydrate_ignores_unrecognized_stored_values() {
        let store = MemoryPreferenceStore::with_entries([(THEME_KEY, "sepia"), (LOCALE_KEY, "fr")]);
        let ctx = PresentationContext::hydrate(Box::new(store), None);
        assert_eq!(ctx.theme(), Theme::Light);
        assert_eq!(ctx.locale(), Locale::En);
    }

    #[test]
    fn theme_toggle_survives_simulated_reload() {
        let mut ctx = PresentationContext::hydrate(Box::new(MemoryPreferenceStore::new()), None);
        assert_eq!(ctx.toggle_theme(), Theme::Dark);

        let store = ctx.into_store();
        let mut startup = Startup::new(store);
        assert!(!startup.is_ready());
        let reloaded = startup.ensure_ready(|| Some(Theme::Light));
        assert_eq!(reloaded.theme(), Theme::Dark);
    }

    #[test]
    fn locale_toggle_switches_translations() {
        let mut ctx = PresentationContext::hydrate(Box::new(MemoryPreferenceStore::new()), None);
        assert_eq!(ctx.translate("copy"), "Copy");
        assert_eq!(ctx.toggle_locale(), Locale::Ru);
        assert_eq!(ctx.translate("copy"), "Копировать");
        assert_eq!(ctx.translate("unknownKey"), "unknownKey");
    }

    #[test]
    fn persist_failure_still_switches_session_value() {
        let mut ctx = PresentationContext::hydrate(Box::new(ReadOnlyStore), None);
        assert_eq!(ctx.toggle_theme(), Theme::Dark);
        assert_eq!(ctx.toggle_locale(), Locale::Ru);
    }

    #[test]
    fn ensure_ready_consults_ambient_once() {
        let mut startup = Startup::new(Box::new(MemoryPreferenceStore::new()));
        let mut calls = 0;
        startup.ensure_ready(|| {
            calls += 1;
            Some(Theme::Dark)
        });
        startup.ensure_ready(|| {
            calls += 1;
            Some(Theme::Light)
        });
        assert_eq!(calls, 1);
        assert_eq!(startup.context().map(|ctx| ctx.theme()), Some(Theme::Dark));
    }
}
