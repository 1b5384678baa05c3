// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use chrono::Utc;
use serde::Serialize;
use sha2::{Digest, Sha256};

use crate::pages::{Revalidate, StaticPaths};

pub const MANIFEST_FILENAME: &str = "manifest.json";

/// SHA-256 of a rendered artifact, usable as an ETag
pub fn content_hash(contents: &[u8]) -> String {
    format!("sha256:{:x}", Sha256::digest(contents))
}

/// One generated page as seen by the hosting cache layer
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ManifestEntry {
    pub route: String,
    pub file: String,
    pub props_file: String,
    pub revalidate: Revalidate,
    pub content_hash: String,
}

/// A dynamic route and how requests for paths that were not generated are handled
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DynamicRoute {
    pub pattern: String,
    #[serde(flatten)]
    pub static_paths: StaticPaths,
    pub revalidate: Revalidate,
}

/// Index of a build's output for the hosting layer
#[derive(Debug, Clone, Serialize)]
pub struct Manifest {
    pub generated_at: String,
    pub pages: Vec<ManifestEntry>,
    pub dynamic_routes: Vec<DynamicRoute>,
}

impl Manifest {
    pub fn new() -> Self {
        Self {
            generated_at: Utc::now().to_rfc3339(),
            pages: Vec::new(),
            dynamic_routes: Vec::new(),
        }
    }

    pub fn add_page(
        &mut self,
        route: impl Into<String>,
        file: impl Into<String>,
        props_file: impl Into<String>,
        revalidate: Revalidate,
        contents: &[u8],
    ) {
        self.pages.push(ManifestEntry {
            route: route.into(),
            file: file.into(),
            props_file: props_file.into(),
            revalidate,
            content_hash: content_hash(contents),
        });
    }

    pub fn add_dynamic_route(
        &mut self,
        pattern: impl Into<String>,
        static_paths: StaticPaths,
        revalidate: Revalidate,
    ) {
        self.dynamic_routes.push(DynamicRoute {
            pattern: pattern.into(),
            static_paths,
            revalidate,
        });
    }
}

impl Default for Manifest {
    fn default() -> Self {
        Self::new()
    }
}
