//! Configuration overrides from the page URL.
//!
//! `?backend=http://api.example.com&mock=false&max_length=300&mock_delay=500`
//! Unknown parameters are ignored. An invalid value is logged and the
//! defaults are kept.

use web_sys::UrlSearchParams;

use jobly_types::config::AppConfig;

/// Query parameters understood by [`AppConfig::apply_overrides`]
pub const OVERRIDE_KEYS: [&str; 4] = ["backend", "mock", "max_length", "mock_delay"];

/// Config for the current page: defaults plus `location.search` overrides.
pub fn load_config() -> AppConfig {
    let search = gloo_utils::window().location().search().unwrap_or_default();
    config_from_query(&search)
}

pub fn config_from_query(search: &str) -> AppConfig {
    let defaults = AppConfig::default();
    let params = match UrlSearchParams::new_with_str(search) {
        Ok(params) => params,
        Err(e) => {
            log::warn!("Ignoring unreadable query string: {:?}", e);
            return defaults;
        }
    };

    let pairs: Vec<(&str, String)> = OVERRIDE_KEYS
        .iter()
        .filter_map(|key| params.get(key).map(|value| (*key, value)))
        .collect();
    if pairs.is_empty() {
        return defaults;
    }

    let mut config = defaults.clone();
    match config.apply_overrides(pairs.iter().map(|(k, v)| (*k, v.as_str()))) {
        Ok(()) => {
            log::info!(
                "URL overrides applied: backend={} mock={}",
                config.backend_url,
                config.use_mock_data
            );
            config
        }
        Err(e) => {
            log::warn!("Ignoring URL overrides: {}", e);
            defaults
        }
    }
}
