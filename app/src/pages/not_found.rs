use yew::prelude::*;

use crate::i18n::use_language;
use crate::route::Route;

#[function_component(NotFoundPage)]
pub fn not_found_page() -> Html {
    let i18n = use_language();
    html! {
        <div class="page-center">
            <h1>{ "404" }</h1>
            <p class="muted">{ i18n.t("common", "notFound") }</p>
            <a href={Route::Home.href()}>{ i18n.t("nav", "home") }</a>
        </div>
    }
}
