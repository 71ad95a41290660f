//! # Configuration
//!
//! Juzzt configuration is loaded by [`clapfig`] from layered TOML files and
//! environment variables, with defaults declared through [`confique`].
//!
//! ## Resolution Order
//!
//! 1. **Environment variables**: `JUZZT__API_URL`, `JUZZT__PAGE_SIZE`, ...
//! 2. **Data directory**: `<data dir>/juzzt.toml`
//! 3. **Global config**: `juzzt.toml` in the OS config directory
//! 4. **Compiled defaults**
//!
//! ## Available Settings
//!
//! | Key              | Default                 | Description                              |
//! |------------------|-------------------------|------------------------------------------|
//! | `api_url`        | `http://localhost:8080` | Storefront API base URL                  |
//! | `records_path`   | `/records`              | Catalog endpoint, relative to `api_url`  |
//! | `page_size`      | `9`                     | Records per catalog page                 |
//! | `price_max`      | `200`                   | Upper bound of the default price filter  |
//! | `sale_threshold` | `20.0`                  | Records strictly cheaper are "on sale"   |
//! | `timeout_secs`   | `30`                    | HTTP request timeout                     |

use crate::catalog::{CatalogState, PriceRange, DEFAULT_PAGE_SIZE, DEFAULT_SALE_THRESHOLD};
use confique::Config;
use serde::{Deserialize, Serialize};

/// Configuration for juzzt, stored in `juzzt.toml`.
#[derive(Config, Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct JuzztConfig {
    /// Base URL of the storefront API.
    #[config(default = "http://localhost:8080")]
    pub api_url: String,

    /// Path of the record listing endpoint. Some deployments serve it under
    /// "/api/records".
    #[config(default = "/records")]
    pub records_path: String,

    /// Records per catalog page.
    #[config(default = 9)]
    pub page_size: usize,

    /// Upper bound of the default price filter.
    #[config(default = 200.0)]
    pub price_max: f64,

    /// Records priced strictly below this are listed by `juzzt sale`.
    #[config(default = 20.0)]
    pub sale_threshold: f64,

    /// HTTP timeout in seconds.
    #[config(default = 30)]
    pub timeout_secs: u64,
}

impl Default for JuzztConfig {
    fn default() -> Self {
        Self {
            api_url: "http://localhost:8080".to_string(),
            records_path: "/records".to_string(),
            page_size: DEFAULT_PAGE_SIZE,
            price_max: PriceRange::DEFAULT_MAX,
            sale_threshold: DEFAULT_SALE_THRESHOLD,
            timeout_secs: 30,
        }
    }
}

impl JuzztConfig {
    /// Fresh catalog state honouring the configured page size and price cap.
    pub fn catalog_state(&self) -> CatalogState {
        CatalogState::new(self.page_size).with_price_range(PriceRange::up_to(self.price_max))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = JuzztConfig::default();
        assert_eq!(config.api_url, "http://localhost:8080");
        assert_eq!(config.records_path, "/records");
        assert_eq!(config.page_size, 9);
        assert_eq!(config.price_max, 200.0);
        assert_eq!(config.sale_threshold, 20.0);
        assert_eq!(config.timeout_secs, 30);
    }

    #[test]
    fn test_catalog_state_from_config() {
        let config = JuzztConfig {
            page_size: 12,
            price_max: 50.0,
            ..Default::default()
        };
        let state = config.catalog_state();
        assert_eq!(state.page_size(), 12);
        assert_eq!(state.price(), PriceRange::new(0.0, 50.0));
        assert_eq!(state.page(), 1);
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config: JuzztConfig = JuzztConfig::builder()
            .preloaded(toml::from_str("page_size = 6\n").unwrap())
            .load()
            .unwrap();
        assert_eq!(config.page_size, 6);
        assert_eq!(config.api_url, "http://localhost:8080");
    }
}
