//! Side effects on the global document: root theme class, `theme-color`
//! meta and `<html lang>`.

use std::cell::RefCell;

use web_sys::window;

use crate::i18n::Locale;
use crate::theme::Theme;

pub trait DocumentEffects {
    fn apply_theme(&self, theme: Theme);
    fn apply_language(&self, locale: Locale);
}

#[derive(Debug, Default, Clone, Copy)]
pub struct DomDocument;

impl DocumentEffects for DomDocument {
    fn apply_theme(&self, theme: Theme) {
        let Some(doc) = window().and_then(|w| w.document()) else {
            return;
        };
        if let Some(root) = doc.document_element() {
            let classes = root.class_list();
            let _ = classes.remove_2(Theme::Light.class_name(), Theme::Dark.class_name());
            let _ = classes.add_1(theme.class_name());
        }
        if let Ok(Some(meta)) = doc.query_selector("meta[name=\"theme-color\"]") {
            let _ = meta.set_attribute("content", theme.meta_color());
        }
    }

    fn apply_language(&self, locale: Locale) {
        if let Some(root) = window()
            .and_then(|w| w.document())
            .and_then(|d| d.document_element())
        {
            let _ = root.set_attribute("lang", locale.code());
        }
    }
}

/// Used off-browser. Does nothing.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopDocument;

impl DocumentEffects for NoopDocument {
    fn apply_theme(&self, _theme: Theme) {}
    fn apply_language(&self, _locale: Locale) {}
}

/// Records every effect, in order.
#[derive(Debug, Default)]
pub struct RecordingDocument {
    pub themes: RefCell<Vec<Theme>>,
    pub languages: RefCell<Vec<Locale>>,
}

impl DocumentEffects for RecordingDocument {
    fn apply_theme(&self, theme: Theme) {
        self.themes.borrow_mut().push(theme);
    }

    fn apply_language(&self, locale: Locale) {
        self.languages.borrow_mut().push(locale);
    }
}
