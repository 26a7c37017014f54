//! Build-time configuration for the site.
//!
//! Values come from environment variables read by the compiler, so a Trunk
//! build picks them up with `LUMEN_API_URL=... trunk build --release`.

use log::LevelFilter;

const DEFAULT_API_BASE_URL: &str = "http://localhost:3000/api";
const DEFAULT_PARENTS_PORTAL_URL: &str = "https://padres.liceolumen.com/#/login";

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// Base URL of the configuration/contact API, without trailing slash
    pub api_base_url: String,
    /// Root the static assets are served from
    pub assets_base: String,
    pub parents_portal_url: String,
    pub log_level: LevelFilter,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            assets_base: "/assets".to_string(),
            parents_portal_url: DEFAULT_PARENTS_PORTAL_URL.to_string(),
            log_level: LevelFilter::Info,
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            api_base_url: option_env!("LUMEN_API_URL")
                .map(|url| url.trim_end_matches('/').to_string())
                .unwrap_or(defaults.api_base_url),
            parents_portal_url: option_env!("LUMEN_PARENTS_PORTAL_URL")
                .map(str::to_string)
                .unwrap_or(defaults.parents_portal_url),
            log_level: option_env!("LUMEN_LOG")
                .and_then(|level| level.parse().ok())
                .unwrap_or(defaults.log_level),
            ..defaults
        }
    }

    /// URL of a file under the assets root, e.g. `asset("data/galeria.json")`
    pub fn asset(&self, path: &str) -> String {
        format!("{}/{}", self.assets_base, path.trim_start_matches('/'))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_config_default() {
        let config = AppConfig::default();
        assert_eq!(config.api_base_url, "http://localhost:3000/api");
        assert_eq!(config.log_level, LevelFilter::Info);
    }

    #[wasm_bindgen_test]
    fn test_asset_path() {
        let config = AppConfig::default();
        assert_eq!(config.asset("data/galeria.json"), "/assets/data/galeria.json");
        assert_eq!(config.asset("/images/logo.png"), "/assets/images/logo.png");
    }
}
