use std::collections::HashMap;
use gloo_storage::{LocalStorage, Storage};
use leptos::*;
use rivet_core::date::{DateHelper, DateLocale};

/// Translation data loaded from JSON files
type Translations = HashMap<String, String>;

const LANGUAGE_KEY: &str = "rivet_language";

/// I18n context that provides translation functions and the date locale
#[derive(Clone)]
pub struct I18nContext {
    pub language: RwSignal<String>,
    translations: RwSignal<Translations>,
}

impl I18nContext {
    /// Create a new I18nContext with the specified language
    pub fn new(language: String) -> Self {
        let translations = load_translations(&language);
        Self {
            language: create_rw_signal(language),
            translations: create_rw_signal(translations),
        }
    }

    /// Translate a key to the current language
    /// Returns the key itself if translation is not found
    pub fn t(&self, key: &str) -> String {
        self.translations
            .get()
            .get(key)
            .cloned()
            .unwrap_or_else(|| key.to_string())
    }

    /// Change the current language and remember it for the next visit
    pub fn set_language(&self, lang: &str) {
        let translations = load_translations(lang);
        LocalStorage::set(LANGUAGE_KEY, lang).ok();
        self.language.set(lang.to_string());
        self.translations.set(translations);
    }

    /// Get the current language code
    pub fn current_language(&self) -> String {
        self.language.get()
    }

    pub fn date_locale(&self) -> DateLocale {
        locale_for(&self.language.get())
    }

    pub fn date_helper(&self) -> DateHelper {
        DateHelper::new(self.date_locale())
    }

    /// Full month name, `month` in 1..=12
    pub fn month_name(&self, month: u32) -> String {
        self.t(&format!("date.month.{}", month))
    }

    /// Short weekday name, Monday is 1
    pub fn weekday_name(&self, weekday: u32) -> String {
        self.t(&format!("date.weekday.{}", weekday))
    }
}

fn locale_for(lang: &str) -> DateLocale {
    lang.parse().unwrap_or_default()
}

/// Load translations for a language from embedded JSON
fn load_translations(lang: &str) -> Translations {
    let json = match lang.split('-').next().unwrap_or(lang) {
        "de" => include_str!("../../translations/de.json"),
        "fr" => include_str!("../../translations/fr.json"),
        _ => include_str!("../../translations/en.json"),
    };

    serde_json::from_str(json).unwrap_or_default()
}

/// Provide I18n context to the application.
/// A language stored by an earlier visit wins over `language`.
pub fn provide_i18n(language: String) {
    let stored: Option<String> = LocalStorage::get(LANGUAGE_KEY).ok();
    let ctx = I18nContext::new(stored.unwrap_or(language));
    provide_context(ctx);
}

/// Use the I18n context from within a component
pub fn use_i18n() -> I18nContext {
    expect_context::<I18nContext>()
}

/// Get the list of supported languages
pub fn supported_languages() -> Vec<(&'static str, &'static str)> {
    vec![
        ("en", "English (UK)"),
        ("en-us", "English (US)"),
        ("de", "Deutsch"),
        ("fr", "Français"),
    ]
}
