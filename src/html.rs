// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use std::fmt;

use scraper::Html;
use serde::{Deserialize, Serialize};

/// An HTML fragment that is emitted into pages without escaping.
///
/// The content API is trusted to deliver pre-sanitized markup for episode
/// descriptions. Wrapping the fragment in this type marks the trust boundary:
/// every other string that reaches the renderer is escaped, only values of
/// this type are inserted verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TrustedHtml(String);

impl TrustedHtml {
    /// Mark a fragment received from the trusted content API
    pub fn from_trusted_source(fragment: impl Into<String>) -> Self {
        Self(fragment.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Text content of the fragment, e.g. for meta descriptions.
    ///
    /// Entities come back decoded.
    pub fn to_plain_text(&self) -> String {
        let fragment = Html::parse_fragment(&self.0);
        let text: String = fragment.root_element().text().collect();
        text.trim().to_string()
    }
}

impl fmt::Display for TrustedHtml {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
