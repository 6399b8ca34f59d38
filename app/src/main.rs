use muslink::config::AppConfig;
use muslink::services::Services;
use muslink::{App, AppProps};

fn main() {
    console_error_panic_hook::set_once();
    if let Err(e) = console_log::init_with_level(log::Level::Info) {
        web_sys::console::error_1(&format!("logger init failed: {e}").into());
    }

    let config = AppConfig::load();
    log::info!("mus.link client starting for {}", config.main_domain);

    let props = AppProps {
        services: Services::browser(config),
    };
    match gloo::utils::document().get_element_by_id("root") {
        Some(root) => yew::Renderer::<App>::with_root_and_props(root, props).render(),
        None => yew::Renderer::<App>::with_props(props).render(),
    };
}
