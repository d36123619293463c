//! Dashboard configuration.
//!
//! Defaults match the same-origin deployment. Builds can override the API base
//! and the request timeout through `FAREVIEW_API_BASE` / `FAREVIEW_TIMEOUT_MS`
//! at compile time, or deserialize a full config from JSON.

use serde::{Deserialize, Serialize};

use crate::charts::ScatterMode;

pub const SUMMARY_PATH: &str = "/analytics/price-summary";
pub const TRIPS_PATH: &str = "/analytics/trips";
pub const ZONES_PATH: &str = "/analytics/zones";

pub const DEFAULT_PAGE_SIZE: u32 = 100;
pub const DEFAULT_THEME_KEY: &str = "theme";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    /// Prefix for every endpoint; empty means same origin.
    pub api_base: String,
    /// `limit` sent with the trips request.
    pub page_size: u32,
    /// Storage key holding `"light"` / `"dark"`.
    pub theme_storage_key: String,
    /// Client-side timeout for the combined data fetch. `None` waits forever.
    pub request_timeout_ms: Option<u64>,
    pub scatter_mode: ScatterMode,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            api_base: String::new(),
            page_size: DEFAULT_PAGE_SIZE,
            theme_storage_key: DEFAULT_THEME_KEY.to_string(),
            request_timeout_ms: None,
            scatter_mode: ScatterMode::default(),
        }
    }
}

impl DashboardConfig {
    /// Defaults plus any compile-time overrides.
    pub fn from_env() -> Self {
        Self::with_overrides(option_env!("FAREVIEW_API_BASE"), option_env!("FAREVIEW_TIMEOUT_MS"))
    }

    fn with_overrides(api_base: Option<&str>, timeout_ms: Option<&str>) -> Self {
        let mut config = Self::default();

        if let Some(base) = api_base {
            config.api_base = base.trim().trim_end_matches('/').to_string();
        }

        if let Some(raw) = timeout_ms {
            match raw.trim().parse::<u64>() {
                Ok(0) => config.request_timeout_ms = None,
                Ok(ms) => config.request_timeout_ms = Some(ms),
                Err(err) => {
                    tracing::warn!(value = raw, %err, "ignoring invalid FAREVIEW_TIMEOUT_MS");
                }
            }
        }

        config
    }

    pub fn from_json(raw: &str) -> Result<Self, serde_json::Error> {
        let mut config: Self = serde_json::from_str(raw)?;
        config.api_base = config.api_base.trim_end_matches('/').to_string();
        Ok(config)
    }

    pub fn endpoint(&self, path: &str) -> String {
        format!("{}{path}", self.api_base)
    }
}
