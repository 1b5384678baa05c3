// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use std::fmt;

use serde::de::DeserializeOwned;
use url::Url;

use crate::error::ApiError;
use crate::http::HttpClient;

use super::record::RawEpisodeRecord;

const EPISODES_PATH: &str = "episodes";

/// Sort direction understood by the listing endpoint
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    Asc,
    Desc,
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SortOrder::Asc => write!(f, "asc"),
            SortOrder::Desc => write!(f, "desc"),
        }
    }
}

/// Query parameters of the episode listing endpoint
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListQuery {
    pub limit: usize,
    pub sort: String,
    pub order: SortOrder,
}

impl ListQuery {
    /// The newest `limit` episodes by publish date
    pub fn latest(limit: usize) -> Self {
        Self {
            limit,
            sort: "published_at".to_string(),
            order: SortOrder::Desc,
        }
    }
}

fn episodes_base(base_url: &Url) -> Result<Url, ApiError> {
    let mut url = base_url.clone();
    url.path_segments_mut()
        .map_err(|_| ApiError::InvalidUrl(url::ParseError::RelativeUrlWithCannotBeABaseBase))?
        .pop_if_empty()
        .push(EPISODES_PATH);
    Ok(url)
}

/// Build the listing URL, e.g. `{base}/episodes?_limit=12&_sort=published_at&_order=desc`
pub fn episodes_url(base_url: &Url, query: &ListQuery) -> Result<Url, ApiError> {
    let mut url = episodes_base(base_url)?;
    url.query_pairs_mut()
        .append_pair("_limit", &query.limit.to_string())
        .append_pair("_sort", &query.sort)
        .append_pair("_order", &query.order.to_string());
    Ok(url)
}

/// Build the URL of a single episode; the id is percent-encoded as one path segment
pub fn episode_url(base_url: &Url, id: &str) -> Result<Url, ApiError> {
    let mut url = episodes_base(base_url)?;
    url.path_segments_mut()
        .map_err(|_| ApiError::InvalidUrl(url::ParseError::RelativeUrlWithCannotBeABaseBase))?
        .push(id);
    Ok(url)
}

async fn get_json<C: HttpClient, T: DeserializeOwned>(client: &C, url: &Url) -> Result<T, ApiError> {
    log::debug!("GET {url}");

    let response = client
        .get(url.as_str())
        .await
        .map_err(|e| ApiError::FetchFailed {
            url: url.to_string(),
            source: e,
        })?;

    if !response.is_success() {
        return Err(ApiError::HttpStatus {
            url: url.to_string(),
            status: response.status,
        });
    }

    serde_json::from_slice(&response.body).map_err(|e| ApiError::JsonParseFailed {
        url: url.to_string(),
        source: e,
    })
}

/// Fetch the raw episode listing
pub async fn fetch_episodes<C: HttpClient>(
    client: &C,
    base_url: &Url,
    query: &ListQuery,
) -> Result<Vec<RawEpisodeRecord>, ApiError> {
    let url = episodes_url(base_url, query)?;
    let records: Vec<RawEpisodeRecord> = get_json(client, &url).await?;
    log::debug!("{} episode records received from {url}", records.len());
    Ok(records)
}

/// Fetch one raw episode by its identifier
pub async fn fetch_episode<C: HttpClient>(
    client: &C,
    base_url: &Url,
    id: &str,
) -> Result<RawEpisodeRecord, ApiError> {
    let url = episode_url(base_url, id)?;
    get_json(client, &url).await
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::http::HttpResponse;
    use async_trait::async_trait;
    use bytes::Bytes;
    use std::sync::Mutex;

    struct StaticClient {
        status: u16,
        body: &'static str,
        requested: Mutex<Vec<String>>,
    }

    impl StaticClient {
        fn new(status: u16, body: &'static str) -> Self {
            Self {
                status,
                body,
                requested: Mutex::new(Vec::new()),
            }
        }
    }

    #[async_trait]
    impl HttpClient for StaticClient {
        async fn get(&self, url: &str) -> Result<HttpResponse, reqwest::Error> {
            self.requested.lock().unwrap().push(url.to_string());
            Ok(HttpResponse {
                status: self.status,
                body: Bytes::from_static(self.body.as_bytes()),
            })
        }
    }

    fn base() -> Url {
        Url::parse("http://localhost:3333").unwrap()
    }

    #[test]
    fn listing_url_carries_limit_sort_and_order() {
        let url = episodes_url(&base(), &ListQuery::latest(12)).unwrap();
        assert_eq!(
            url.as_str(),
            "http://localhost:3333/episodes?_limit=12&_sort=published_at&_order=desc"
        );
    }

    #[test]
    fn listing_url_keeps_base_path() {
        let with_slash = Url::parse("https://api.example.com/v1/").unwrap();
        let without_slash = Url::parse("https://api.example.com/v1").unwrap();
        let query = ListQuery {
            limit: 5,
            sort: "title".to_string(),
            order: SortOrder::Asc,
        };

        let expected = "https://api.example.com/v1/episodes?_limit=5&_sort=title&_order=asc";
        assert_eq!(episodes_url(&with_slash, &query).unwrap().as_str(), expected);
        assert_eq!(episodes_url(&without_slash, &query).unwrap().as_str(), expected);
    }

    #[test]
    fn episode_url_encodes_id() {
        let url = episode_url(&base(), "a b/c").unwrap();
        assert_eq!(url.as_str(), "http://localhost:3333/episodes/a%20b%2Fc");
    }

    #[test]
    fn cannot_be_a_base_url_is_rejected() {
        let base = Url::parse("mailto:someone@example.com").unwrap();
        assert!(matches!(
            episode_url(&base, "1"),
            Err(ApiError::InvalidUrl(_))
        ));
    }

    #[tokio::test]
    async fn fetch_episodes_decodes_array() {
        let client = StaticClient::new(200, r#"[{"id": "1"}, {"id": "2"}]"#);
        let records = fetch_episodes(&client, &base(), &ListQuery::latest(2))
            .await
            .unwrap();

        assert_eq!(records.len(), 2);
        assert_eq!(records[1].display_id(), "2");
        assert_eq!(
            client.requested.lock().unwrap().as_slice(),
            ["http://localhost:3333/episodes?_limit=2&_sort=published_at&_order=desc"]
        );
    }

    #[tokio::test]
    async fn fetch_episode_reports_http_status() {
        let client = StaticClient::new(404, "{}");
        let err = fetch_episode(&client, &base(), "missing").await.unwrap_err();

        match err {
            ApiError::HttpStatus { url, status } => {
                assert_eq!(status, 404);
                assert_eq!(url, "http://localhost:3333/episodes/missing");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[tokio::test]
    async fn fetch_episode_reports_bad_json() {
        let client = StaticClient::new(200, "<html>not json</html>");
        let err = fetch_episode(&client, &base(), "1").await.unwrap_err();
        assert!(matches!(err, ApiError::JsonParseFailed { .. }));
    }
}
