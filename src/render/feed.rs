// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use rss::{ChannelBuilder, EnclosureBuilder, GuidBuilder, Item, ItemBuilder};

use crate::config::SiteConfig;
use crate::episode::Episode;
use crate::error::RenderError;
use crate::pages::episode_route;

/// Guess the enclosure MIME type from the media URL's extension, for
/// records where the API gave none
fn audio_mime_type(url: &str) -> &'static str {
    let path = url.split(['?', '#']).next().unwrap_or(url);
    let extension = path.rsplit_once('.').map(|(_, ext)| ext.to_ascii_lowercase());

    match extension.as_deref() {
        Some("m4a") | Some("mp4") | Some("aac") => "audio/x-m4a",
        Some("ogg") | Some("oga") => "audio/ogg",
        Some("opus") => "audio/opus",
        Some("wav") => "audio/wav",
        _ => "audio/mpeg",
    }
}

fn feed_item(episode: &Episode, config: &SiteConfig) -> Item {
    let link = config
        .site_url
        .join(episode_route(episode.id()).trim_start_matches('/'))
        .map(|u| u.to_string())
        .ok();

    let mime_type = episode
        .media_type()
        .unwrap_or_else(|| audio_mime_type(episode.url()));

    ItemBuilder::default()
        .title(episode.title().to_string())
        .link(link)
        .author(episode.members().to_string())
        .description(episode.description().as_str().to_string())
        .guid(
            GuidBuilder::default()
                .value(episode.id().to_string())
                .permalink(false)
                .build(),
        )
        .enclosure(
            EnclosureBuilder::default()
                .url(episode.url().to_string())
                // The API does not report file sizes
                .length("0".to_string())
                .mime_type(mime_type.to_string())
                .build(),
        )
        .build()
}

/// Render an RSS 2.0 feed of the given episodes
pub fn render_feed<'a>(
    episodes: impl IntoIterator<Item = &'a Episode>,
    config: &SiteConfig,
) -> Result<Vec<u8>, RenderError> {
    let items: Vec<Item> = episodes
        .into_iter()
        .map(|episode| feed_item(episode, config))
        .collect();

    let channel = ChannelBuilder::default()
        .title(config.site_title.clone())
        .link(config.site_url.to_string())
        .description(format!("{} episodes", config.site_title))
        .language(Some("pt-BR".to_string()))
        .items(items)
        .build();

    Ok(channel.write_to(Vec::new())?)
}
