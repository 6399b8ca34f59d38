use yew::prelude::*;

use crate::components::Layout;
use crate::i18n::LanguageProvider;
use crate::pages::{AnalyticsPage, FaqPage, HomePage, NotFoundPage, SettingsPage};
use crate::route::Route;
use crate::services::Services;
use crate::session::{load_session, SessionContext};
use crate::theme::ThemeProvider;
use crate::toast::ToastProvider;

#[derive(Properties, PartialEq)]
pub struct AppProps {
    pub services: Services,
}

fn switch(route: Route) -> Html {
    match route {
        Route::Home => html! { <HomePage /> },
        Route::Analytics { page_id } => html! { <AnalyticsPage {page_id} /> },
        Route::Settings => html! { <SettingsPage /> },
        Route::Faq => html! { <FaqPage /> },
        Route::NotFound => html! { <NotFoundPage /> },
    }
}

#[function_component(App)]
pub fn app(props: &AppProps) -> Html {
    let session = use_state(load_session);
    let route = use_memo((), |_| Route::current());

    html! {
        <ContextProvider<Services> context={props.services.clone()}>
            <ThemeProvider services={props.services.clone()}>
                <LanguageProvider services={props.services.clone()}>
                    <ToastProvider>
                        <ContextProvider<SessionContext> context={session}>
                            <Layout>
                                { switch((*route).clone()) }
                            </Layout>
                        </ContextProvider<SessionContext>>
                    </ToastProvider>
                </LanguageProvider>
            </ThemeProvider>
        </ContextProvider<Services>>
    }
}
