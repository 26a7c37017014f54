use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;
use yew_router::prelude::*;

mod components;
mod config;
mod content;
mod context;
mod hooks;
mod pages;
mod router;
mod services;

use config::AppConfig;
use context::SiteContext;
use hooks::use_site;
use router::{switch, Route};
use services::{logging, Logger};

/// Reports client-side navigations; the landing page view is sent when
/// analytics initializes.
#[function_component(RouteTracker)]
fn route_tracker() -> Html {
    let analytics = use_site().analytics;
    let location = use_location();
    let path = location.map(|location| location.path().to_string());
    let first = use_mut_ref(|| true);

    use_effect_with(path, move |path| {
        let is_first = std::mem::replace(&mut *first.borrow_mut(), false);
        if let (false, Some(path)) = (is_first, path) {
            analytics.navigated(path);
            services::dom::scroll_to_top();
        }
        || ()
    });

    html! {}
}

#[function_component(App)]
fn app() -> Html {
    let site = use_state(|| {
        let config = AppConfig::from_env();
        logging::init(config.log_level);
        Logger::info_with_component("app", &format!("API at {}", config.api_base_url));
        SiteContext::new(config)
    });

    {
        let site = site.clone();
        use_effect_with((), move |_| {
            spawn_local(async move {
                let public_config = site.api.public_config().await;
                match public_config.google_analytics_id.as_deref() {
                    Some(id) if !id.trim().is_empty() => site.analytics.initialize(id),
                    _ => Logger::warn_with_component("app", "No analytics id configured"),
                }
                site.set(site.with_public_config(public_config));
            });
            || ()
        });
    }

    html! {
        <ContextProvider<SiteContext> context={(*site).clone()}>
            <BrowserRouter>
                <RouteTracker />
                <Switch<Route> render={switch} />
            </BrowserRouter>
        </ContextProvider<SiteContext>>
    }
}

fn main() {
    yew::Renderer::<App>::new().render();
}
