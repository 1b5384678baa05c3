// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use crate::api::fetch_episode;
use crate::config::SiteConfig;
use crate::episode::{Episode, normalize_episode};
use crate::error::PageError;
use crate::http::HttpClient;

use super::{Fallback, Revalidate, StaticPaths};

/// A generated episode detail page
#[derive(Debug, Clone)]
pub struct EpisodePage {
    pub props: Episode,
    pub revalidate: Revalidate,
}

pub fn episode_route(id: &str) -> String {
    format!("/episodes/{id}")
}

/// No detail route is declared up front; every one is generated on first request
pub fn static_paths() -> StaticPaths {
    StaticPaths {
        paths: Vec::new(),
        fallback: Fallback::Blocking,
    }
}

/// Content generation for the detail page of `slug`
pub async fn get_episode_page<C: HttpClient>(
    client: &C,
    config: &SiteConfig,
    slug: &str,
) -> Result<EpisodePage, PageError> {
    let record = fetch_episode(client, &config.api_base_url, slug).await?;
    let props = normalize_episode(&record).map_err(|source| PageError::Normalize {
        id: slug.to_string(),
        source,
    })?;

    log::info!("Detail page built for {}", episode_route(slug));

    Ok(EpisodePage {
        props,
        revalidate: Revalidate::from_secs(config.detail_revalidate_secs),
    })
}
