// web_app/api/config.rs - Brands API configuration
//
// The base URL is read from the environment (or a .env file) so the server
// can be pointed at another backend without a rebuild.

use std::env;

pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:5000";
pub const BASE_URL_VAR: &str = "BRANDS_API_URL";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiConfig {
    pub base_url: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }
}

impl ApiConfig {
    /// Load `.env` if present, then read `BRANDS_API_URL`.
    pub fn from_env() -> Self {
        dotenv::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        match lookup(BASE_URL_VAR).filter(|url| !url.trim().is_empty()) {
            Some(base_url) => Self { base_url },
            None => Self::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_points_at_local_backend() {
        assert_eq!(ApiConfig::default().base_url, "http://127.0.0.1:5000");
    }

    #[test]
    fn test_lookup_overrides_base_url() {
        let config = ApiConfig::from_lookup(|key| {
            (key == BASE_URL_VAR).then(|| "http://brands.internal:8080".to_string())
        });
        assert_eq!(config.base_url, "http://brands.internal:8080");
    }

    #[test]
    fn test_blank_value_falls_back_to_default() {
        let config = ApiConfig::from_lookup(|_| Some("   ".to_string()));
        assert_eq!(config, ApiConfig::default());
    }
}
