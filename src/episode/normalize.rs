// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use serde::Serialize;

use crate::api::{RawDuration, RawEpisodeRecord};
use crate::duration::format_duration;
use crate::error::{NormalizeError, PageError};
use crate::html::TrustedHtml;

use super::date::{format_published_at, parse_published_at};

/// Display-ready episode handed to the rendering layer.
///
/// Built once per content-generation cycle by [`normalize_episode`] and never
/// mutated afterwards, hence the read-only accessors.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Episode {
    id: String,
    title: String,
    thumbnail: String,
    members: String,
    published_at: String,
    duration: u64,
    duration_as_string: String,
    description: TrustedHtml,
    url: String,
    #[serde(skip)]
    media_type: Option<String>,
}

impl Episode {
    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn thumbnail(&self) -> &str {
        &self.thumbnail
    }

    pub fn members(&self) -> &str {
        &self.members
    }

    /// Publish date formatted as `d MMM yy` in Brazilian Portuguese
    pub fn published_at(&self) -> &str {
        &self.published_at
    }

    /// Duration in whole seconds
    pub fn duration(&self) -> u64 {
        self.duration
    }

    /// Duration formatted as `HH:MM:SS`
    pub fn duration_as_string(&self) -> &str {
        &self.duration_as_string
    }

    pub fn description(&self) -> &TrustedHtml {
        &self.description
    }

    /// Playable media URL
    pub fn url(&self) -> &str {
        &self.url
    }

    /// MIME type of the media file as reported by the API, if any
    pub fn media_type(&self) -> Option<&str> {
        self.media_type.as_deref()
    }
}

fn required<'a>(value: &'a Option<String>, field: &'static str) -> Result<&'a str, NormalizeError> {
    value
        .as_deref()
        .ok_or(NormalizeError::MissingField { field })
}

/// Coerce a raw duration into whole seconds.
///
/// Numbers and numeric strings are accepted, fractional seconds are
/// truncated. Negative, non-finite, empty and non-numeric values fail.
pub fn coerce_duration(raw: &RawDuration) -> Result<u64, NormalizeError> {
    let malformed = || NormalizeError::MalformedDuration {
        value: raw.to_string(),
    };

    let seconds = match raw {
        RawDuration::Number(n) => *n,
        RawDuration::Text(s) => s.trim().parse::<f64>().map_err(|_| malformed())?,
    };

    if !seconds.is_finite() || seconds < 0.0 || seconds > u64::MAX as f64 {
        return Err(malformed());
    }

    Ok(seconds.trunc() as u64)
}

/// Map one raw API record to an [`Episode`] view model
pub fn normalize_episode(raw: &RawEpisodeRecord) -> Result<Episode, NormalizeError> {
    let id = raw
        .id
        .as_ref()
        .ok_or(NormalizeError::MissingField { field: "id" })?
        .to_string();
    let title = required(&raw.title, "title")?;
    let thumbnail = required(&raw.thumbnail, "thumbnail")?;
    let members = required(&raw.members, "members")?;
    let published_at_raw = required(&raw.published_at, "published_at")?;
    let description = required(&raw.description, "description")?;

    let file = raw
        .file
        .as_ref()
        .ok_or(NormalizeError::MissingField { field: "file" })?;
    let url = required(&file.url, "file.url")?;
    let raw_duration = file
        .duration
        .as_ref()
        .ok_or(NormalizeError::MissingField {
            field: "file.duration",
        })?;

    let published_at = parse_published_at(published_at_raw)
        .map(|dt| format_published_at(&dt))
        .ok_or_else(|| NormalizeError::InvalidDate {
            date_str: published_at_raw.to_string(),
        })?;

    let duration = coerce_duration(raw_duration)?;
    let media_type = file
        .mime_type
        .as_deref()
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(str::to_string);

    Ok(Episode {
        id,
        title: title.to_string(),
        thumbnail: thumbnail.to_string(),
        members: members.to_string(),
        published_at,
        duration,
        duration_as_string: format_duration(duration),
        description: TrustedHtml::from_trusted_source(description),
        url: url.to_string(),
        media_type,
    })
}

/// Map every record in order, failing on the first record that cannot be normalized
pub fn normalize_episodes(raws: &[RawEpisodeRecord]) -> Result<Vec<Episode>, PageError> {
    raws.iter()
        .map(|raw| {
            normalize_episode(raw).map_err(|source| {
                log::warn!("Episode '{}' rejected: {source}", raw.display_id());
                PageError::Normalize {
                    id: raw.display_id(),
                    source,
                }
            })
        })
        .collect()
}
