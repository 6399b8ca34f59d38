use yew::prelude::*;

use crate::i18n::use_language;
use crate::theme::{use_theme, Theme, ThemeAction};

#[derive(Properties, PartialEq)]
pub struct ThemeToggleProps {
    #[prop_or_default]
    pub class: Classes,
}

#[function_component(ThemeToggle)]
pub fn theme_toggle(props: &ThemeToggleProps) -> Html {
    let theme = use_theme();
    let i18n = use_language();

    let onclick = {
        let theme = theme.clone();
        Callback::from(move |_: MouseEvent| theme.dispatch(ThemeAction::Toggle))
    };

    let (label, glyph) = match theme.theme() {
        Theme::Dark => (i18n.t("theme", "switchToLight"), "\u{2600}"),
        Theme::Light => (i18n.t("theme", "switchToDark"), "\u{263E}"),
    };

    html! {
        <button
            class={classes!("theme-toggle", props.class.clone())}
            {onclick}
            aria-label={label.clone()}
            title={label}
            data-testid="theme-toggle"
        >
            { glyph }
        </button>
    }
}
