//! API Configuration
//!
//! The base URL is baked in at compile time; a browser bundle has no
//! environment or config files to read at runtime.

/// Fallback when `FOOD_API_URL` is not set at build time
pub const DEFAULT_API_URL: &str = "http://localhost:3333";

/// Where the food catalog API lives
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    base_url: String,
}

impl ApiConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Join the base URL and an API path with exactly one slash
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::new(option_env!("FOOD_API_URL").unwrap_or(DEFAULT_API_URL))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trailing_slashes_are_stripped() {
        let config = ApiConfig::new("http://api.example.com//");
        assert_eq!(config.base_url(), "http://api.example.com");
    }

    #[test]
    fn test_endpoint_joins_with_single_slash() {
        let config = ApiConfig::new("http://api.example.com/");
        assert_eq!(config.endpoint("/foods"), "http://api.example.com/foods");
        assert_eq!(config.endpoint("foods/3"), "http://api.example.com/foods/3");
    }

    #[test]
    fn test_default_is_not_empty() {
        assert!(!ApiConfig::default().base_url().is_empty());
    }
}
