// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use std::collections::HashSet;
use std::path::Path;

use futures::{StreamExt, TryStreamExt, stream};

use crate::api::{ListQuery, episodes_url};
use crate::config::SiteConfig;
use crate::error::{BuildError, OutputError, PageError, RenderError};
use crate::http::HttpClient;
use crate::pages::{
    EpisodePage, HOME_ROUTE, HomePage, Revalidate, episode_route, get_episode_page,
    get_home_page, static_paths,
};
use crate::progress::{ProgressEvent, SharedProgressReporter};
use crate::render::{
    MANIFEST_FILENAME, Manifest, RenderedFile, episode_file_stem, render_episode_page,
    render_feed, render_home_page, render_props,
};

const EPISODES_DIR: &str = "episodes";
const FEED_FILENAME: &str = "feed.xml";

/// Options for a site build
#[derive(Debug, Clone, Default)]
pub struct BuildOptions {
    /// Detail pages to generate in addition to the episodes on the listing page
    pub extra_episode_ids: Vec<String>,
}

/// Result of a successful build
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildSummary {
    /// Number of episodes on the listing page
    pub listed_episodes: usize,
    /// Number of generated pages, listing included
    pub page_count: usize,
    /// Number of files written to the output directory
    pub file_count: usize,
}

fn page_error(route: String) -> impl FnOnce(PageError) -> BuildError {
    move |source| BuildError::Page { route, source }
}

/// Listing ids first, then extra ids, each once
fn detail_ids(home: &HomePage, extra: &[String]) -> Vec<String> {
    let mut seen = HashSet::new();
    home.props
        .episodes()
        .map(|episode| episode.id().to_string())
        .chain(extra.iter().cloned())
        .filter(|id| seen.insert(id.clone()))
        .collect()
}

/// Render every artifact of a build in memory
pub fn render_site(
    home: &HomePage,
    details: &[EpisodePage],
    config: &SiteConfig,
) -> Result<Vec<RenderedFile>, RenderError> {
    let mut files = Vec::new();
    let mut manifest = Manifest::new();

    let home_html = render_home_page(home, config);
    manifest.add_page(
        HOME_ROUTE,
        "index.html",
        "index.json",
        home.revalidate,
        home_html.as_bytes(),
    );
    files.push(RenderedFile::new("index.html", home_html));
    files.push(RenderedFile::new("index.json", render_props(&home.props)?));

    let mut used_stems = HashSet::new();
    for page in details {
        let id = page.props.id();
        let mut stem = episode_file_stem(id);
        if !used_stems.insert(stem.clone()) {
            // Distinct ids can sanitize to the same file name
            let mut n = 2;
            while !used_stems.insert(format!("{stem}-{n}")) {
                n += 1;
            }
            stem = format!("{stem}-{n}");
            log::warn!("Episode '{id}' written as {stem}.html to avoid a file name clash");
        }

        let html_file = format!("{EPISODES_DIR}/{stem}.html");
        let props_file = format!("{EPISODES_DIR}/{stem}.json");
        let html = render_episode_page(page, config);

        manifest.add_page(
            episode_route(id),
            html_file.as_str(),
            props_file.as_str(),
            page.revalidate,
            html.as_bytes(),
        );
        files.push(RenderedFile::new(html_file, html));
        files.push(RenderedFile::new(props_file, render_props(&page.props)?));
    }

    manifest.add_dynamic_route(
        format!("/{EPISODES_DIR}/[slug]"),
        static_paths(),
        Revalidate::from_secs(config.detail_revalidate_secs),
    );

    files.push(RenderedFile::new(
        FEED_FILENAME,
        render_feed(home.props.episodes(), config)?,
    ));
    files.push(RenderedFile::new(MANIFEST_FILENAME, render_props(&manifest)?));

    Ok(files)
}

/// Write rendered artifacts below `output_dir`, creating directories as needed
pub async fn write_output(output_dir: &Path, files: &[RenderedFile]) -> Result<(), OutputError> {
    for file in files {
        let path = output_dir.join(&file.path);
        if let Some(parent) = path.parent() {
            tokio::fs::create_dir_all(parent)
                .await
                .map_err(|e| OutputError::CreateDirectoryFailed {
                    path: parent.to_path_buf(),
                    source: e,
                })?;
        }

        tokio::fs::write(&path, &file.contents)
            .await
            .map_err(|e| OutputError::WriteFailed { path, source: e })?;
    }
    Ok(())
}

/// Run one content-generation cycle and write the site to `output_dir`.
///
/// Every page is generated before anything is written: when the listing or
/// any detail page fails, the build aborts and the output directory is left
/// untouched.
pub async fn build_site<C: HttpClient>(
    client: &C,
    config: &SiteConfig,
    output_dir: &Path,
    options: &BuildOptions,
    reporter: SharedProgressReporter,
) -> Result<BuildSummary, BuildError> {
    let listing_url = episodes_url(&config.api_base_url, &ListQuery::latest(config.listing_limit))
        .map_err(|e| BuildError::Page {
            route: HOME_ROUTE.to_string(),
            source: PageError::Api(e),
        })?;
    reporter.report(ProgressEvent::FetchingListing {
        url: listing_url.to_string(),
    });

    let home = get_home_page(client, config)
        .await
        .map_err(page_error(HOME_ROUTE.to_string()))?;

    reporter.report(ProgressEvent::ListingReady {
        latest_count: home.props.latest_episodes.len(),
        total_episodes: home.props.episodes().count(),
    });

    let ids = detail_ids(&home, &options.extra_episode_ids);
    let total = ids.len();
    let reporter_ref = &reporter;

    let details: Vec<EpisodePage> = stream::iter(ids.iter().enumerate())
        .map(move |(index, id)| async move {
            reporter_ref.report(ProgressEvent::FetchingEpisode {
                id: id.clone(),
                index,
                total,
            });

            let page = get_episode_page(client, config, id)
                .await
                .map_err(page_error(episode_route(id)))?;

            reporter_ref.report(ProgressEvent::EpisodeReady {
                id: id.clone(),
                title: page.props.title().to_string(),
            });
            Ok::<_, BuildError>(page)
        })
        .buffered(config.max_concurrent.max(1))
        .try_collect()
        .await?;

    let files = render_site(&home, &details, config)?;

    reporter.report(ProgressEvent::WritingOutput {
        file_count: files.len(),
    });
    write_output(output_dir, &files).await?;

    let summary = BuildSummary {
        listed_episodes: home.props.episodes().count(),
        page_count: details.len() + 1,
        file_count: files.len(),
    };

    log::info!(
        "Built {} pages ({} files) into {}",
        summary.page_count,
        summary.file_count,
        output_dir.display()
    );
    reporter.report(ProgressEvent::BuildCompleted {
        page_count: summary.page_count,
        file_count: summary.file_count,
    });

    Ok(summary)
}
