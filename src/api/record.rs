// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Episode data exactly as returned by the content API.
///
/// Every field is optional here so that the normalizer can report precisely
/// which one is missing instead of failing inside the JSON decoder.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawEpisodeRecord {
    pub id: Option<RawId>,
    pub title: Option<String>,
    pub thumbnail: Option<String>,
    pub members: Option<String>,
    pub published_at: Option<String>,
    pub file: Option<RawMediaFile>,
    pub description: Option<String>,
}

/// The media descriptor nested in a raw record
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawMediaFile {
    pub duration: Option<RawDuration>,
    pub url: Option<String>,
    #[serde(rename = "type")]
    pub mime_type: Option<String>,
}

/// Record identifiers are slugs on most deployments but plain numbers on some
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawId {
    Text(String),
    Number(i64),
}

impl fmt::Display for RawId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RawId::Text(s) => f.write_str(s),
            RawId::Number(n) => write!(f, "{n}"),
        }
    }
}

/// Duration in seconds, sent either as a JSON number or as a numeric string
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawDuration {
    Number(f64),
    Text(String),
}

impl fmt::Display for RawDuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RawDuration::Number(n) => write!(f, "{n}"),
            RawDuration::Text(s) => f.write_str(s),
        }
    }
}

impl RawEpisodeRecord {
    /// Identifier for log and error messages, even when the record has none
    pub fn display_id(&self) -> String {
        self.id
            .as_ref()
            .map(ToString::to_string)
            .unwrap_or_else(|| "<unknown>".to_string())
    }
}
