//! Shop Configuration
//!
//! The browser has no process environment, so overrides are read from the
//! build environment (`SHOP_API_URL`, `SHOP_TOKEN_KEY`, `SHOP_SKELETON_COUNT`).

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShopConfig {
    /// Base URL of the REST API, always ending in `/`.
    #[serde(default = "default_api_url")]
    pub api_url: String,
    /// localStorage key holding the bearer token.
    #[serde(default = "default_token_key")]
    pub token_key: String,
    /// Placeholder cards rendered while the catalog loads.
    #[serde(default = "default_skeleton_count")]
    pub skeleton_count: usize,
}

fn default_api_url() -> String {
    "http://localhost:8000/api/".to_string()
}

fn default_token_key() -> String {
    "authToken".to_string()
}

fn default_skeleton_count() -> usize {
    12
}

impl Default for ShopConfig {
    fn default() -> Self {
        Self {
            api_url: default_api_url(),
            token_key: default_token_key(),
            skeleton_count: default_skeleton_count(),
        }
    }
}

impl ShopConfig {
    pub fn from_build_env() -> Self {
        Self::from_values(
            option_env!("SHOP_API_URL"),
            option_env!("SHOP_TOKEN_KEY"),
            option_env!("SHOP_SKELETON_COUNT"),
        )
    }

    fn from_values(api_url: Option<&str>, token_key: Option<&str>, skeletons: Option<&str>) -> Self {
        let defaults = Self::default();
        let config = Self {
            api_url: api_url
                .filter(|url| !url.trim().is_empty())
                .map(str::to_string)
                .unwrap_or(defaults.api_url),
            token_key: token_key
                .filter(|key| !key.trim().is_empty())
                .map(str::to_string)
                .unwrap_or(defaults.token_key),
            skeleton_count: skeletons
                .and_then(|n| n.trim().parse().ok())
                .unwrap_or(defaults.skeleton_count),
        };
        config.normalized()
    }

    /// Trim the base URL and make sure relative paths join under it
    pub fn normalized(mut self) -> Self {
        let trimmed = self.api_url.trim();
        self.api_url = if trimmed.ends_with('/') {
            trimmed.to_string()
        } else {
            format!("{}/", trimmed)
        };
        self
    }

    pub fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.api_url, path.trim_start_matches('/'))
    }
}
