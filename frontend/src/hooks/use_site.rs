use shared::theme::{self, Theme};
use yew::prelude::*;

use crate::config::AppConfig;
use crate::context::{Analytics, SiteContext};

/// Site services from the nearest `ContextProvider<SiteContext>`
/// (components rendered outside the provider get their own services).
#[hook]
pub fn use_site() -> SiteContext {
    let provided = use_context::<SiteContext>();
    let fallback = use_memo(provided.is_some(), |provided| standalone_site(*provided));
    provided
        .or_else(|| (*fallback).clone())
        .unwrap_or_else(|| SiteContext::new(AppConfig::from_env()))
}

/// Services are only built when no provider supplies them
fn standalone_site(provided: bool) -> Option<SiteContext> {
    (!provided).then(|| SiteContext::new(AppConfig::from_env()))
}

#[hook]
pub fn use_analytics() -> Analytics {
    use_site().analytics
}

/// Theme for the current month, resolved once per component
#[hook]
pub fn use_theme() -> &'static Theme {
    let theme = use_state(theme::current_theme);
    *theme
}

#[cfg(test)]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_standalone_site_only_without_provider() {
        assert!(standalone_site(true).is_none());
        assert!(standalone_site(false).is_some());
    }
}
