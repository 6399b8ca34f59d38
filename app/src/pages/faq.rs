use yew::prelude::*;

use crate::components::Accordion;
use crate::faq::categories;
use crate::i18n::use_language;
use crate::services::use_services;

#[function_component(FaqPage)]
pub fn faq_page() -> Html {
    let services = use_services();
    let i18n = use_language();
    let support = services.config.support_email.clone();

    html! {
        <div class="faq-page">
            <header class="page-header">
                <h1>{ i18n.t("faq", "title") }</h1>
                <p class="muted">{ i18n.t("faq", "subtitle") }</p>
            </header>
            { for categories(i18n.language()).iter().enumerate().map(|(i, category)| html! {
                <section key={i} class="faq-category">
                    <h2>{ category.title }</h2>
                    <p class="muted">{ category.subtitle }</p>
                    <Accordion category={i} items={category.items} />
                </section>
            }) }
            <footer class="card faq-contact">
                <h3>{ i18n.t("faq", "contactTitle") }</h3>
                <p>
                    { i18n.t("faq", "contactText") }{ " " }
                    <a href={format!("mailto:{support}")}>{ support.clone() }</a>
                </p>
            </footer>
        </div>
    }
}
