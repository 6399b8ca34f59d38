//! Locale selection and namespaced string lookup.

use std::fmt;
use std::rc::Rc;

use web_sys::window;
use yew::prelude::*;

use crate::config::LANGUAGE_STORAGE_KEY;
use crate::document::{DocumentEffects, NoopDocument};
use crate::services::Services;
use crate::storage::{MemoryStorage, PreferenceStore};

mod en;
mod es;
mod ru;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Locale {
    En,
    Ru,
    Es,
}

impl Locale {
    pub const ALL: [Locale; 3] = [Locale::En, Locale::Ru, Locale::Es];

    pub fn code(self) -> &'static str {
        match self {
            Locale::En => "en",
            Locale::Ru => "ru",
            Locale::Es => "es",
        }
    }

    pub fn native_name(self) -> &'static str {
        match self {
            Locale::En => "English",
            Locale::Ru => "Русский",
            Locale::Es => "Español",
        }
    }

    /// Accepts bare codes and region tags (`ru-RU`, `es_419`), any case.
    pub fn from_code(code: &str) -> Option<Locale> {
        let primary = code
            .trim()
            .split(['-', '_'])
            .next()
            .unwrap_or_default()
            .to_ascii_lowercase();
        Locale::ALL.into_iter().find(|l| l.code() == primary)
    }

    /// The word the user must type to confirm account deletion.
    pub fn delete_confirmation_word(self) -> &'static str {
        match self {
            Locale::En => "DELETE",
            Locale::Ru => "УДАЛИТЬ",
            Locale::Es => "ELIMINAR",
        }
    }

    fn thousands_separator(self) -> char {
        match self {
            Locale::En => ',',
            Locale::Ru => '\u{a0}',
            Locale::Es => '.',
        }
    }

    fn lookup(self, ns: &str, key: &str) -> Option<&'static str> {
        let entries = match self {
            Locale::En => en::ENTRIES,
            Locale::Ru => ru::ENTRIES,
            Locale::Es => es::ENTRIES,
        };
        entries
            .iter()
            .find(|(n, k, _)| *n == ns && *k == key)
            .map(|(_, _, v)| *v)
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Thousands-grouped integer, e.g. `12,345` (en) or `12 345` (ru).
pub fn format_count(locale: Locale, n: u64) -> String {
    let digits = n.to_string();
    let sep = locale.thousands_separator();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(sep);
        }
        out.push(ch);
    }
    out
}

#[derive(Clone)]
pub struct LanguageStore {
    locale: Locale,
    storage: Rc<dyn PreferenceStore>,
    document: Rc<dyn DocumentEffects>,
}

impl PartialEq for LanguageStore {
    fn eq(&self, other: &Self) -> bool {
        self.locale == other.locale
    }
}

impl fmt::Debug for LanguageStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LanguageStore")
            .field("locale", &self.locale)
            .finish()
    }
}

impl LanguageStore {
    /// Stored choice, then the browser language, then English.
    pub fn new(
        storage: Rc<dyn PreferenceStore>,
        document: Rc<dyn DocumentEffects>,
        browser_language: Option<&str>,
    ) -> Self {
        let locale = storage
            .get(LANGUAGE_STORAGE_KEY)
            .as_deref()
            .and_then(Locale::from_code)
            .or_else(|| browser_language.and_then(Locale::from_code))
            .unwrap_or(Locale::En);
        document.apply_language(locale);
        Self {
            locale,
            storage,
            document,
        }
    }

    /// Fixed locale with nothing behind it.
    pub fn detached(locale: Locale) -> Self {
        Self {
            locale,
            storage: Rc::new(MemoryStorage::new()),
            document: Rc::new(NoopDocument),
        }
    }

    pub fn language(&self) -> Locale {
        self.locale
    }

    pub fn set_language(&mut self, locale: Locale) {
        self.locale = locale;
        self.document.apply_language(locale);
        if let Err(e) = self.storage.set(LANGUAGE_STORAGE_KEY, locale.code()) {
            log::warn!("could not save language: {e}");
        }
    }

    /// Translated string for `namespace.key`. Falls back to English, then to
    /// the key path itself.
    pub fn t(&self, ns: &str, key: &str) -> String {
        self.locale
            .lookup(ns, key)
            .or_else(|| Locale::En.lookup(ns, key))
            .map(str::to_string)
            .unwrap_or_else(|| {
                log::debug!("missing translation {ns}.{key}");
                format!("{ns}.{key}")
            })
    }

    pub fn delete_confirmation_word(&self) -> &'static str {
        self.locale.delete_confirmation_word()
    }

    pub fn format_count(&self, n: u64) -> String {
        format_count(self.locale, n)
    }
}

pub enum LanguageAction {
    Set(Locale),
}

impl Reducible for LanguageStore {
    type Action = LanguageAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            LanguageAction::Set(locale) => next.set_language(locale),
        }
        next.into()
    }
}

pub type LanguageContext = UseReducerHandle<LanguageStore>;

fn browser_language() -> Option<String> {
    window()?.navigator().language()
}

#[derive(Properties, PartialEq)]
pub struct LanguageProviderProps {
    pub services: Services,
    pub children: Children,
}

#[function_component(LanguageProvider)]
pub fn language_provider(props: &LanguageProviderProps) -> Html {
    let store = {
        let storage = props.services.storage.clone();
        let document = props.services.document.clone();
        use_reducer(move || LanguageStore::new(storage, document, browser_language().as_deref()))
    };

    html! {
        <ContextProvider<LanguageContext> context={store}>
            { props.children.clone() }
        </ContextProvider<LanguageContext>>
    }
}

#[hook]
pub fn use_language() -> LanguageContext {
    use_context::<LanguageContext>().expect("use_language must be used within a LanguageProvider")
}
