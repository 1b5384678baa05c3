// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use serde::Serialize;

use crate::api::{ListQuery, fetch_episodes};
use crate::config::SiteConfig;
use crate::episode::{Episode, normalize_episodes};
use crate::error::{PageError, PlayerError};
use crate::http::HttpClient;
use crate::player::Player;

use super::Revalidate;

pub const HOME_ROUTE: &str = "/";

/// Props of the listing page: the newest releases and everything after them
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HomeProps {
    pub latest_episodes: Vec<Episode>,
    pub all_episodes: Vec<Episode>,
}

impl HomeProps {
    /// Split an ordered listing after the first `latest_count` episodes
    pub fn from_episodes(mut episodes: Vec<Episode>, latest_count: usize) -> Self {
        let all_episodes = episodes.split_off(latest_count.min(episodes.len()));
        Self {
            latest_episodes: episodes,
            all_episodes,
        }
    }

    /// The combined play queue, latest releases first
    pub fn episode_list(&self) -> Vec<Episode> {
        self.episodes().cloned().collect()
    }

    pub fn episodes(&self) -> impl Iterator<Item = &Episode> {
        self.latest_episodes.iter().chain(self.all_episodes.iter())
    }

    /// Position in [`Self::episode_list`] of the `index`-th entry of the full table
    pub fn all_play_index(&self, index: usize) -> usize {
        self.latest_episodes.len() + index
    }

    /// Play button of the `index`-th latest release
    pub fn play_latest(&self, player: &mut Player, index: usize) -> Result<(), PlayerError> {
        if index >= self.latest_episodes.len() {
            return Err(PlayerError::IndexOutOfRange {
                index,
                len: self.latest_episodes.len(),
            });
        }
        player.play_list(self.episode_list(), index)
    }

    /// Play button of the `index`-th row of the full table
    pub fn play_from_all(&self, player: &mut Player, index: usize) -> Result<(), PlayerError> {
        if index >= self.all_episodes.len() {
            return Err(PlayerError::IndexOutOfRange {
                index,
                len: self.all_episodes.len(),
            });
        }
        player.play_list(self.episode_list(), self.all_play_index(index))
    }
}

/// A generated listing page
#[derive(Debug, Clone)]
pub struct HomePage {
    pub props: HomeProps,
    pub revalidate: Revalidate,
}

/// Content generation for the listing page
pub async fn get_home_page<C: HttpClient>(
    client: &C,
    config: &SiteConfig,
) -> Result<HomePage, PageError> {
    let query = ListQuery::latest(config.listing_limit);
    let records = fetch_episodes(client, &config.api_base_url, &query).await?;
    let episodes = normalize_episodes(&records)?;

    log::info!("Listing page built with {} episodes", episodes.len());

    Ok(HomePage {
        props: HomeProps::from_episodes(episodes, config.latest_count),
        revalidate: Revalidate::from_secs(config.listing_revalidate_secs),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::episode::fixtures::episode;
    use crate::http::HttpResponse;
    use async_trait::async_trait;
    use bytes::Bytes;

    fn props(ids: &[&str], latest_count: usize) -> HomeProps {
        HomeProps::from_episodes(ids.iter().map(|id| episode(id)).collect(), latest_count)
    }

    fn ids(episodes: &[Episode]) -> Vec<&str> {
        episodes.iter().map(Episode::id).collect()
    }

    #[test]
    fn splits_latest_from_the_rest() {
        let props = props(&["a", "b", "c", "d"], 2);
        assert_eq!(ids(&props.latest_episodes), ["a", "b"]);
        assert_eq!(ids(&props.all_episodes), ["c", "d"]);
        assert_eq!(ids(&props.episode_list()), ["a", "b", "c", "d"]);
    }

    #[test]
    fn short_listing_has_no_rest() {
        let props = props(&["a"], 2);
        assert_eq!(ids(&props.latest_episodes), ["a"]);
        assert!(props.all_episodes.is_empty());
    }

    #[test]
    fn play_from_all_offsets_by_latest_count() {
        let props = props(&["a", "b", "c", "d"], 2);
        let mut player = Player::new();

        assert_eq!(props.all_play_index(1), 3);
        props.play_from_all(&mut player, 1).unwrap();
        assert_eq!(player.current().map(Episode::id), Some("d"));
        assert_eq!(player.queue().len(), 4);

        props.play_latest(&mut player, 1).unwrap();
        assert_eq!(player.current().map(Episode::id), Some("b"));
        assert!(player.has_next());
    }

    #[test]
    fn play_hooks_reject_rows_that_do_not_exist() {
        let props = props(&["a", "b", "c"], 2);
        let mut player = Player::new();

        assert_eq!(
            props.play_latest(&mut player, 2),
            Err(PlayerError::IndexOutOfRange { index: 2, len: 2 })
        );
        assert_eq!(
            props.play_from_all(&mut player, 1),
            Err(PlayerError::IndexOutOfRange { index: 1, len: 1 })
        );
    }

    struct ListingClient(&'static str);

    #[async_trait]
    impl HttpClient for ListingClient {
        async fn get(&self, _url: &str) -> Result<HttpResponse, reqwest::Error> {
            Ok(HttpResponse {
                status: 200,
                body: Bytes::from_static(self.0.as_bytes()),
            })
        }
    }

    const LISTING: &str = r#"[
        {"id": "new", "title": "Newest", "thumbnail": "t1", "members": "A",
         "published_at": "2021-05-10T00:00:00Z", "description": "<p>1</p>",
         "file": {"duration": 61, "url": "new.mp3"}},
        {"id": "old", "title": "Older", "thumbnail": "t2", "members": "B",
         "published_at": "2021-04-01T00:00:00Z", "description": "<p>2</p>",
         "file": {"duration": "3661", "url": "old.mp3"}},
        {"id": "oldest", "title": "Oldest", "thumbnail": "t3", "members": "C",
         "published_at": "2020-12-24 10:00:00", "description": "<p>3</p>",
         "file": {"duration": 0, "url": "oldest.mp3"}}
    ]"#;

    #[tokio::test]
    async fn builds_listing_page() {
        let page = get_home_page(&ListingClient(LISTING), &SiteConfig::default())
            .await
            .unwrap();

        assert_eq!(page.revalidate.as_secs(), 28_800);
        assert_eq!(ids(&page.props.latest_episodes), ["new", "old"]);
        assert_eq!(ids(&page.props.all_episodes), ["oldest"]);

        let old = &page.props.latest_episodes[1];
        assert_eq!(old.duration_as_string(), "01:01:01");
        assert_eq!(old.published_at(), "1 abr 21");
        assert_eq!(page.props.all_episodes[0].published_at(), "24 dez 20");
    }

    #[tokio::test]
    async fn one_bad_record_fails_the_whole_page() {
        let listing = r#"[
            {"id": "ok", "title": "T", "thumbnail": "t", "members": "A",
             "published_at": "2021-05-10T00:00:00Z", "description": "",
             "file": {"duration": 1, "url": "a.mp3"}},
            {"id": "broken", "title": "T", "thumbnail": "t", "members": "A",
             "published_at": "2021-05-10T00:00:00Z", "description": ""}
        ]"#;

        let err = get_home_page(&ListingClient(listing), &SiteConfig::default())
            .await
            .unwrap_err();

        assert!(matches!(err, PageError::Normalize { ref id, .. } if id == "broken"));
    }
}
