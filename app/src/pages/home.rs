use yew::prelude::*;

use crate::components::{LanguageSwitcher, SwitcherVariant};
use crate::i18n::use_language;
use crate::route::Route;
use crate::services::use_services;
use crate::session::use_session;
use crate::subdomain::{get_subdomain, main_domain_url};

#[function_component(HomePage)]
pub fn home_page() -> Html {
    let services = use_services();
    let session = use_session();
    let i18n = use_language();

    if let Some(artist) = get_subdomain(&services.config) {
        return html! {
            <div class="home artist-context" data-testid="artist-context">
                <p class="muted">{ i18n.t("nav", "artistPage") }</p>
                <h1>{ artist }</h1>
                <a class="btn btn-ghost" href={main_domain_url(&services.config, "/")}>
                    { i18n.t("nav", "mainSite") }
                </a>
            </div>
        };
    }

    html! {
        <div class="home">
            <h1>{ "mus.link" }</h1>
            <p class="lead">{ i18n.t("nav", "welcome") }</p>
            <LanguageSwitcher variant={SwitcherVariant::Inline} />
            <nav class="home-links">
                if session.is_some() {
                    <a href={Route::Settings.href()}>{ i18n.t("nav", "settings") }</a>
                }
                <a href={Route::Faq.href()}>{ i18n.t("nav", "faq") }</a>
            </nav>
        </div>
    }
}
