use yew::prelude::*;
use web_sys::window;

use crate::config;
use crate::translations;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Language {
    #[default]
    Sv,
    En,
}

impl Language {
    pub fn code(self) -> &'static str {
        match self {
            Language::Sv => "sv",
            Language::En => "en",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code.trim() {
            "sv" => Some(Language::Sv),
            "en" => Some(Language::En),
            _ => None,
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Language::Sv => Language::En,
            Language::En => Language::Sv,
        }
    }

    /// The toggle button advertises the language it switches to.
    pub fn toggle_label(self) -> &'static str {
        match self {
            Language::Sv => "EN",
            Language::En => "SV",
        }
    }

    pub fn text(self, tag: &'static str) -> &'static str {
        translations::text(self, tag)
    }
}

/// Key/value storage the language preference is persisted in.
pub trait PreferenceStore {
    fn load(&self, key: &str) -> Option<String>;
    fn save(&self, key: &str, value: &str);
}

/// `window.localStorage`. Missing or disabled storage reads as empty and
/// drops writes.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserStorage;

impl PreferenceStore for BrowserStorage {
    fn load(&self, key: &str) -> Option<String> {
        window()
            .and_then(|w| w.local_storage().ok())
            .flatten()
            .and_then(|storage| storage.get_item(key).ok())
            .flatten()
    }

    fn save(&self, key: &str, value: &str) {
        if let Some(storage) = window().and_then(|w| w.local_storage().ok()).flatten() {
            if storage.set_item(key, value).is_err() {
                log::warn!("Could not persist {} preference", key);
            }
        }
    }
}

/// The visitor's language, read once when the page starts and written
/// through on every toggle.
pub struct LanguagePreference<S> {
    store: S,
    current: Language,
}

impl<S: PreferenceStore> LanguagePreference<S> {
    pub fn load(store: S) -> Self {
        let current = store
            .load(config::LANGUAGE_STORAGE_KEY)
            .and_then(|code| Language::from_code(&code))
            .unwrap_or_default();
        Self { store, current }
    }

    pub fn current(&self) -> Language {
        self.current
    }

    pub fn toggle(&mut self) -> Language {
        self.current = self.current.toggled();
        self.store.save(config::LANGUAGE_STORAGE_KEY, self.current.code());
        self.current
    }
}

#[derive(Clone, PartialEq)]
pub struct LanguageContext {
    pub language: Language,
    pub toggle: Callback<()>,
}

#[hook]
pub fn use_language() -> Language {
    use_context::<LanguageContext>()
        .map(|ctx| ctx.language)
        .unwrap_or_default()
}

/// Mirrors the language on `<html lang>`.
pub fn set_document_language(language: Language) {
    if let Some(root) = window()
        .and_then(|w| w.document())
        .and_then(|d| d.document_element())
    {
        let _ = root.set_attribute("lang", language.code());
    }
}
