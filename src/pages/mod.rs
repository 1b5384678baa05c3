// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

mod detail;
mod home;

pub use detail::{EpisodePage, episode_route, get_episode_page, static_paths};
pub use home::{HOME_ROUTE, HomePage, HomeProps, get_home_page};

use serde::Serialize;

/// How long the hosting layer may serve a generated page before regenerating it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Revalidate {
    seconds: u64,
}

impl Revalidate {
    pub fn from_secs(seconds: u64) -> Self {
        Self { seconds }
    }

    pub fn as_secs(&self) -> u64 {
        self.seconds
    }
}

/// What the hosting layer does for detail routes that were not pre-rendered
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Fallback {
    /// Unknown routes are a 404
    None,
    /// Unknown routes are generated on first request before responding
    Blocking,
}

/// Routes declared up front for a dynamic page type
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StaticPaths {
    pub paths: Vec<String>,
    pub fallback: Fallback,
}
