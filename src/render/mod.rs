// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

mod feed;
mod html;
mod manifest;

pub use feed::render_feed;
pub use html::{render_episode_page, render_home_page};
pub use manifest::{DynamicRoute, MANIFEST_FILENAME, Manifest, ManifestEntry, content_hash};

use std::path::PathBuf;

use serde::Serialize;

use crate::error::RenderError;

/// A rendered artifact, relative to the output directory
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedFile {
    pub path: PathBuf,
    pub contents: Vec<u8>,
}

impl RenderedFile {
    pub fn new(path: impl Into<PathBuf>, contents: impl Into<Vec<u8>>) -> Self {
        Self {
            path: path.into(),
            contents: contents.into(),
        }
    }
}

/// Serialize page props as pretty JSON for client-side hydration
pub fn render_props<T: Serialize>(props: &T) -> Result<Vec<u8>, RenderError> {
    Ok(serde_json::to_vec_pretty(props)?)
}

/// File stem for a detail page; ids come from the remote API and may not be path-safe
pub fn episode_file_stem(id: &str) -> String {
    let stem = sanitize_filename::sanitize(id);
    if stem.is_empty() || stem.starts_with('.') {
        format!("_{stem}")
    } else {
        stem
    }
}
