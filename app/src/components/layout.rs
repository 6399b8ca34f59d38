use yew::prelude::*;

use crate::components::{LanguageSwitcher, SwitcherVariant, ThemeToggle};
use crate::i18n::use_language;
use crate::route::Route;

#[derive(Properties, PartialEq)]
pub struct LayoutProps {
    pub children: Children,
}

/// Side navigation plus the theme and language controls.
#[function_component(Layout)]
pub fn layout(props: &LayoutProps) -> Html {
    let i18n = use_language();

    html! {
        <div class="layout">
            <aside class="sidebar">
                <a class="brand" href={Route::Home.href()}>{ "mus.link" }</a>
                <nav>
                    <a href={Route::Home.href()}>{ i18n.t("nav", "home") }</a>
                    <a href={Route::Settings.href()}>{ i18n.t("nav", "settings") }</a>
                    <a href={Route::Faq.href()}>{ i18n.t("nav", "faq") }</a>
                </nav>
                <div class="sidebar-controls">
                    <LanguageSwitcher variant={SwitcherVariant::Compact} />
                    <ThemeToggle />
                </div>
            </aside>
            <main class="content">
                { props.children.clone() }
            </main>
        </div>
    }
}
