// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use std::fmt::Write;

use html_escape::{encode_double_quoted_attribute as attr, encode_text as text};

use crate::config::SiteConfig;
use crate::episode::Episode;
use crate::pages::{EpisodePage, HOME_ROUTE, HomePage, episode_route};

fn document(page_title: &str, config: &SiteConfig, meta_description: Option<&str>, body: &str) -> String {
    let mut html = String::new();
    html.push_str("<!DOCTYPE html>\n<html lang=\"pt-BR\">\n<head>\n<meta charset=\"utf-8\">\n");
    let _ = writeln!(
        html,
        "<title>{} | {}</title>",
        text(page_title),
        text(&config.site_title)
    );
    if let Some(description) = meta_description {
        let _ = writeln!(html, "<meta name=\"description\" content=\"{}\">", attr(description));
    }
    let _ = writeln!(
        html,
        "<link rel=\"alternate\" type=\"application/rss+xml\" href=\"/feed.xml\" title=\"{}\">",
        attr(&config.site_title)
    );
    html.push_str("</head>\n<body>\n");
    html.push_str(body);
    html.push_str("</body>\n</html>\n");
    html
}

fn play_button(index: usize) -> String {
    format!(
        "<button type=\"button\" data-play-index=\"{index}\"><img src=\"/play-green.svg\" alt=\"Tocar episódio\"></button>"
    )
}

fn thumbnail(episode: &Episode, width: u32, height: u32) -> String {
    format!(
        "<img width=\"{width}\" height=\"{height}\" src=\"{}\" alt=\"{}\">",
        attr(episode.thumbnail()),
        attr(episode.title())
    )
}

fn episode_link(episode: &Episode) -> String {
    format!(
        "<a href=\"{}\">{}</a>",
        attr(&episode_route(episode.id())),
        text(episode.title())
    )
}

/// Render the listing page: latest releases as cards, the rest as a table
pub fn render_home_page(page: &HomePage, config: &SiteConfig) -> String {
    let props = &page.props;
    let mut body = String::new();

    body.push_str("<div class=\"homepage\">\n<section class=\"latest-episodes\">\n<h2>Últimos lançamentos</h2>\n<ul>\n");
    for (index, episode) in props.latest_episodes.iter().enumerate() {
        let _ = writeln!(
            body,
            "<li>{}<div class=\"episode-details\">{}<p>{}</p><span>{}</span><span>{}</span></div>{}</li>",
            thumbnail(episode, 192, 192),
            episode_link(episode),
            text(episode.members()),
            text(episode.published_at()),
            text(episode.duration_as_string()),
            play_button(index)
        );
    }
    body.push_str("</ul>\n</section>\n");

    body.push_str("<section class=\"all-episodes\">\n<h2>Todos os episódios</h2>\n<table>\n<thead><tr><th></th><th>Podcast</th><th>Integrantes</th><th>Data</th><th>Duração</th><th></th></tr></thead>\n<tbody>\n");
    for (index, episode) in props.all_episodes.iter().enumerate() {
        let _ = writeln!(
            body,
            "<tr><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td></tr>",
            thumbnail(episode, 120, 120),
            episode_link(episode),
            text(episode.members()),
            text(episode.published_at()),
            text(episode.duration_as_string()),
            play_button(props.all_play_index(index))
        );
    }
    body.push_str("</tbody>\n</table>\n</section>\n</div>\n");

    document("Home", config, None, &body)
}

/// Render an episode detail page. The description is emitted verbatim.
pub fn render_episode_page(page: &EpisodePage, config: &SiteConfig) -> String {
    let episode = &page.props;
    let mut body = String::new();

    let _ = writeln!(
        body,
        "<div class=\"episode\">\n<div class=\"thumbnail-container\"><a href=\"{}\"><img src=\"/arrow-left.svg\" alt=\"Voltar\"></a>{}{}</div>",
        attr(HOME_ROUTE),
        thumbnail(episode, 700, 160),
        play_button(0)
    );
    let _ = writeln!(
        body,
        "<header><h1>{}</h1><span>{}</span><span>{}</span><span>{}</span></header>",
        text(episode.title()),
        text(episode.members()),
        text(episode.published_at()),
        text(episode.duration_as_string())
    );
    let _ = writeln!(
        body,
        "<div class=\"description\">{}</div>\n</div>",
        episode.description()
    );

    let summary = episode.description().to_plain_text();
    document(
        episode.title(),
        config,
        Some(summary.as_str()).filter(|s| !s.is_empty()),
        &body,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::episode::fixtures::{episode, raw_record};
    use crate::episode::normalize_episode;
    use crate::pages::{HomeProps, Revalidate};

    fn home(ids: &[&str]) -> HomePage {
        HomePage {
            props: HomeProps::from_episodes(ids.iter().map(|id| episode(id)).collect(), 2),
            revalidate: Revalidate::from_secs(60),
        }
    }

    #[test]
    fn home_lists_every_episode_with_play_indices() {
        let html = render_home_page(&home(&["a", "b", "c"]), &SiteConfig::default());

        assert!(html.contains("<title>Home | Podcastr</title>"));
        for id in ["a", "b", "c"] {
            assert!(html.contains(&format!("href=\"/episodes/{id}\"")));
        }
        assert!(html.contains("data-play-index=\"0\""));
        assert!(html.contains("data-play-index=\"1\""));
        // First table row continues after the latest releases
        assert!(html.contains("data-play-index=\"2\""));
        assert!(html.contains("01:06:21"));
        assert!(html.contains("22 jan 21"));
    }

    #[test]
    fn home_escapes_api_strings() {
        let mut record = raw_record("x", 10);
        record.title = Some("<script>alert(1)</script>".to_string());
        record.members = Some("Tom & Jerry".to_string());
        let page = HomePage {
            props: HomeProps::from_episodes(vec![normalize_episode(&record).unwrap()], 2),
            revalidate: Revalidate::from_secs(60),
        };

        let html = render_home_page(&page, &SiteConfig::default());

        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;"));
        assert!(html.contains("Tom &amp; Jerry"));
    }

    #[test]
    fn detail_embeds_trusted_description_verbatim() {
        let mut record = raw_record("x", 10);
        record.title = Some("A & B".to_string());
        record.description = Some("<p>Olá <em>pessoal</em></p>".to_string());
        let page = EpisodePage {
            props: normalize_episode(&record).unwrap(),
            revalidate: Revalidate::from_secs(60),
        };

        let html = render_episode_page(&page, &SiteConfig::default());

        assert!(html.contains("<div class=\"description\"><p>Olá <em>pessoal</em></p></div>"));
        assert!(html.contains("<h1>A &amp; B</h1>"));
        assert!(html.contains("<title>A &amp; B | Podcastr</title>"));
        assert!(html.contains("<meta name=\"description\" content=\"Olá pessoal\">"));
        assert!(html.contains("00:00:10"));
    }
}
