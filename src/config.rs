// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use std::path::Path;

use serde::{Deserialize, Serialize};
use url::Url;

use crate::error::ConfigError;

const HOUR: u64 = 60 * 60;

/// Settings for a site build
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Base URL of the content API
    pub api_base_url: Url,
    /// Public URL the generated site is served from
    pub site_url: Url,
    /// Title used in page heads and the RSS feed
    pub site_title: String,
    /// Number of episodes requested for the listing page
    pub listing_limit: usize,
    /// Number of listing episodes highlighted as latest releases
    pub latest_count: usize,
    /// Regeneration interval of the listing page
    pub listing_revalidate_secs: u64,
    /// Regeneration interval of episode detail pages
    pub detail_revalidate_secs: u64,
    /// Maximum number of detail pages fetched concurrently
    pub max_concurrent: usize,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            api_base_url: Url::parse("http://localhost:3333/").expect("valid default URL"),
            site_url: Url::parse("http://localhost:3000/").expect("valid default URL"),
            site_title: "Podcastr".to_string(),
            listing_limit: 12,
            latest_count: 2,
            listing_revalidate_secs: 8 * HOUR,
            detail_revalidate_secs: 24 * HOUR,
            max_concurrent: 3,
        }
    }
}

impl SiteConfig {
    /// Load a TOML config file; keys that are absent keep their defaults
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::ReadFailed {
            path: path.to_path_buf(),
            source: e,
        })?;

        let config: SiteConfig = toml::from_str(&content).map_err(|e| ConfigError::ParseFailed {
            path: path.to_path_buf(),
            source: e,
        })?;

        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_concurrent == 0 {
            return Err(ConfigError::Invalid(
                "max_concurrent must be at least 1".to_string(),
            ));
        }
        if self.api_base_url.cannot_be_a_base() {
            return Err(ConfigError::Invalid(format!(
                "api_base_url '{}' cannot be used as a base URL",
                self.api_base_url
            )));
        }
        Ok(())
    }
}
