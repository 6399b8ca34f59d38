//! Light/dark theme, persisted in `localStorage` and reconciled with the
//! OS `prefers-color-scheme` setting.

use std::fmt;
use std::rc::Rc;

use gloo::events::EventListener;
use wasm_bindgen::JsCast;
use web_sys::{window, MediaQueryList, MediaQueryListEvent};
use yew::prelude::*;

use crate::config::THEME_STORAGE_KEY;
use crate::document::DocumentEffects;
use crate::services::Services;
use crate::storage::PreferenceStore;

const DARK_QUERY: &str = "(prefers-color-scheme: dark)";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn parse(s: &str) -> Option<Theme> {
        match s {
            "light" => Some(Theme::Light),
            "dark" => Some(Theme::Dark),
            _ => None,
        }
    }

    pub fn opposite(self) -> Theme {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    pub fn class_name(self) -> &'static str {
        self.as_str()
    }

    pub fn meta_color(self) -> &'static str {
        match self {
            Theme::Light => "#ffffff",
            Theme::Dark => "#0a0a0a",
        }
    }

    /// `None` means the OS signal is unavailable, which resolves to dark.
    pub fn from_system(prefers_dark: Option<bool>) -> Theme {
        match prefers_dark {
            Some(false) => Theme::Light,
            Some(true) | None => Theme::Dark,
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Current theme plus the storage and document it writes through to.
#[derive(Clone)]
pub struct ThemeStore {
    theme: Theme,
    /// Set once the user picks a theme, whether or not it was persisted.
    explicit: bool,
    storage: Rc<dyn PreferenceStore>,
    document: Rc<dyn DocumentEffects>,
}

impl PartialEq for ThemeStore {
    fn eq(&self, other: &Self) -> bool {
        self.theme == other.theme
    }
}

impl fmt::Debug for ThemeStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ThemeStore").field("theme", &self.theme).finish()
    }
}

impl ThemeStore {
    /// Resolve the initial theme (stored, then OS, then dark) and apply it.
    pub fn new(
        storage: Rc<dyn PreferenceStore>,
        document: Rc<dyn DocumentEffects>,
        system_prefers_dark: Option<bool>,
    ) -> Self {
        let theme = stored_theme(storage.as_ref())
            .unwrap_or_else(|| Theme::from_system(system_prefers_dark));
        document.apply_theme(theme);
        Self {
            theme,
            explicit: false,
            storage,
            document,
        }
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    /// Switch and persist. A failed write is logged; the switch still
    /// happens.
    pub fn set_theme(&mut self, theme: Theme) {
        self.explicit = true;
        self.enter(theme);
        if let Err(e) = self.storage.set(THEME_STORAGE_KEY, theme.as_str()) {
            log::warn!("could not save theme: {e}");
        }
    }

    pub fn toggle_theme(&mut self) -> Theme {
        let next = self.theme.opposite();
        self.set_theme(next);
        next
    }

    /// OS preference changed. Followed only while the user has made no
    /// choice, in this session or stored. Returns whether the theme changed.
    pub fn follow_system(&mut self, prefers_dark: bool) -> bool {
        if self.explicit || stored_theme(self.storage.as_ref()).is_some() {
            return false;
        }
        let next = Theme::from_system(Some(prefers_dark));
        if next == self.theme {
            return false;
        }
        self.enter(next);
        true
    }

    fn enter(&mut self, theme: Theme) {
        self.theme = theme;
        self.document.apply_theme(theme);
    }
}

fn stored_theme(storage: &dyn PreferenceStore) -> Option<Theme> {
    storage.get(THEME_STORAGE_KEY).as_deref().and_then(Theme::parse)
}

pub enum ThemeAction {
    Set(Theme),
    Toggle,
    System(bool),
}

impl Reducible for ThemeStore {
    type Action = ThemeAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            ThemeAction::Set(theme) => next.set_theme(theme),
            ThemeAction::Toggle => {
                next.toggle_theme();
            }
            ThemeAction::System(prefers_dark) => {
                if !next.follow_system(prefers_dark) {
                    return self;
                }
            }
        }
        next.into()
    }
}

pub type ThemeContext = UseReducerHandle<ThemeStore>;

fn dark_media_query() -> Option<MediaQueryList> {
    window()?.match_media(DARK_QUERY).ok().flatten()
}

pub fn system_prefers_dark() -> Option<bool> {
    dark_media_query().map(|mq| mq.matches())
}

#[derive(Properties, PartialEq)]
pub struct ThemeProviderProps {
    pub services: Services,
    pub children: Children,
}

#[function_component(ThemeProvider)]
pub fn theme_provider(props: &ThemeProviderProps) -> Html {
    let store = {
        let storage = props.services.storage.clone();
        let document = props.services.document.clone();
        use_reducer(move || ThemeStore::new(storage, document, system_prefers_dark()))
    };

    // Follow OS changes for as long as the provider is mounted.
    {
        let store = store.clone();
        use_effect_with((), move |_| {
            let listener = dark_media_query().map(|mq| {
                EventListener::new(&mq, "change", move |event| {
                    if let Some(event) = event.dyn_ref::<MediaQueryListEvent>() {
                        store.dispatch(ThemeAction::System(event.matches()));
                    }
                })
            });
            move || drop(listener)
        });
    }

    html! {
        <ContextProvider<ThemeContext> context={store}>
            { props.children.clone() }
        </ContextProvider<ThemeContext>>
    }
}

#[hook]
pub fn use_theme() -> ThemeContext {
    use_context::<ThemeContext>().expect("use_theme must be used within a ThemeProvider")
}
