use std::cell::Cell;
use std::rc::Rc;

use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::analytics::{
    click_through_rate, load_analytics, percent_label, pie_slices, platform_info, share_width,
    top_cities, top_countries, AnalyticsView, GeoRow,
};
use crate::api::{AnalyticsReport, ApiClient};
use crate::components::PieChart;
use crate::i18n::{use_language, LanguageStore};
use crate::route::Route;
use crate::services::use_services;
use crate::session::use_session;
use crate::subdomain::main_domain_url;
use crate::toast::use_toaster;

const UPGRADE_PATH: &str = "/pricing";

#[derive(Debug, Clone, PartialEq)]
enum LoadState {
    Loading,
    Ready(AnalyticsView),
    Failed,
}

#[derive(Properties, PartialEq)]
pub struct AnalyticsPageProps {
    pub page_id: String,
}

#[function_component(AnalyticsPage)]
pub fn analytics_page(props: &AnalyticsPageProps) -> Html {
    let services = use_services();
    let session = use_session();
    let i18n = use_language();
    let toaster = use_toaster();
    let state = use_state(|| LoadState::Loading);

    {
        let state = state.clone();
        let config = services.config.clone();
        let session = (*session).clone();
        let i18n = i18n.clone();
        use_effect_with(props.page_id.clone(), move |page_id| {
            // Cleared on teardown or when the page id changes.
            let alive = Rc::new(Cell::new(true));
            state.set(LoadState::Loading);

            let page_id = page_id.clone();
            let guard = alive.clone();
            spawn_local(async move {
                let token = session.as_ref().map(|s| s.token.clone());
                let plan = session.as_ref().map(|s| s.user.plan.clone());
                let api = ApiClient::new(&config, token);
                let result = load_analytics(&api, &config, plan.as_deref(), &page_id).await;

                if !guard.get() {
                    log::debug!("discarding analytics for page {page_id}");
                    return;
                }
                match result {
                    Ok(view) => state.set(LoadState::Ready(view)),
                    Err(e) => {
                        log::warn!("analytics for page {page_id} failed: {e}");
                        toaster.error(i18n.t("errors", "loadFailed"));
                        state.set(LoadState::Failed);
                    }
                }
            });

            move || alive.set(false)
        });
    }

    let view = match &*state {
        LoadState::Loading => {
            return html! {
                <div class="page-center">
                    <div class="spinner" aria-label={i18n.t("common", "loading")} />
                </div>
            };
        }
        LoadState::Failed => {
            return html! {
                <div class="page-center">
                    <p class="muted">{ i18n.t("analytics", "notFound") }</p>
                </div>
            };
        }
        LoadState::Ready(view) => view,
    };

    let report = &view.report;
    let upgrade_href = main_domain_url(&services.config, UPGRADE_PATH);

    html! {
        <div class="analytics-page">
            <header class="page-header">
                <a class="back" href={Route::Home.href()}>{ "\u{2190} " }{ i18n.t("common", "back") }</a>
                <h1>{ i18n.t("analytics", "title") }</h1>
            </header>

            <div class="stat-grid">
                { stat_card(&i18n.t("analytics", "views"), i18n.format_count(report.views), "page-views") }
                { stat_card(&i18n.t("analytics", "totalClicks"), i18n.format_count(report.total_clicks), "total-clicks") }
                { stat_card(&i18n.t("analytics", "clickRate"), format!("{}%", click_through_rate(report)), "click-rate") }
            </div>

            <section>
                <h2>{ i18n.t("analytics", "byPlatform") }</h2>
                { platform_rows(report, &i18n) }
            </section>

            if view.advanced {
                <section>
                    <h2>{ i18n.t("analytics", "geography") }</h2>
                    { geography(report, &i18n) }
                </section>
                <section>
                    <h2>{ i18n.t("analytics", "platformShare") }</h2>
                    <PieChart slices={pie_slices(&report.links)} />
                </section>
            } else {
                <section class="locked">
                    <div class="locked-preview" aria-hidden="true">
                        <div class="bar" style="width: 70%" />
                        <div class="bar" style="width: 45%" />
                        <div class="bar" style="width: 30%" />
                    </div>
                    <div class="locked-overlay">
                        <h2>{ i18n.t("analytics", "lockedTitle") }</h2>
                        <p>{ i18n.t("analytics", "lockedText") }</p>
                        <a class="btn btn-primary" href={upgrade_href} data-testid="upgrade-cta">
                            { i18n.t("analytics", "upgrade") }
                        </a>
                    </div>
                </section>
            }
        </div>
    }
}

fn stat_card(label: &str, value: String, testid: &'static str) -> Html {
    html! {
        <div class="stat-card">
            <span class="muted">{ label }</span>
            <p class="stat-value" data-testid={testid}>{ value }</p>
        </div>
    }
}

fn platform_rows(report: &AnalyticsReport, i18n: &LanguageStore) -> Html {
    if report.links.is_empty() {
        return html! { <p class="muted">{ i18n.t("analytics", "noPlatformData") }</p> };
    }
    html! {
        <div class="platform-list">
            { for report.links.iter().map(|link| {
                let platform = platform_info(&link.platform);
                let width = share_width(link.clicks, report.total_clicks);
                html! {
                    <div key={link.id.clone()} class="platform-row" data-testid={format!("platform-stat-{}", link.platform)}>
                        <div class="platform-head">
                            <span class="swatch" style={format!("background-color: {}", platform.color)} />
                            <span class="platform-name">{ platform.name }</span>
                            <span class="platform-clicks">{ i18n.format_count(link.clicks) }</span>
                            <span class="muted">{ format!("{}%", percent_label(link.clicks, report.total_clicks)) }</span>
                        </div>
                        <div class="progress">
                            <div class="progress-fill" style={format!("width: {width:.1}%; background-color: {}", platform.color)} />
                        </div>
                    </div>
                }
            }) }
        </div>
    }
}

fn geography(report: &AnalyticsReport, i18n: &LanguageStore) -> Html {
    let countries = report.by_country.as_deref().map(top_countries).unwrap_or_default();
    let cities = report.by_city.as_deref().map(top_cities).unwrap_or_default();
    if countries.is_empty() && cities.is_empty() {
        return html! { <p class="muted">{ i18n.t("analytics", "noGeoData") }</p> };
    }
    html! {
        <div class="geo-grid">
            { geo_list(&i18n.t("analytics", "byCountry"), &countries, i18n) }
            { geo_list(&i18n.t("analytics", "byCity"), &cities, i18n) }
        </div>
    }
}

fn geo_list(title: &str, rows: &[GeoRow], i18n: &LanguageStore) -> Html {
    html! {
        <div class="geo-list">
            <h3>{ title }</h3>
            <ol>
                { for rows.iter().map(|row| html! {
                    <li key={row.label.clone()}>
                        <span>{ row.label.clone() }</span>
                        <span class="muted">{ i18n.format_count(row.clicks) }</span>
                    </li>
                }) }
            </ol>
        </div>
    }
}
