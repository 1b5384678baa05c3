use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use console::Emoji;
use indicatif::{ProgressBar, ProgressStyle};
use url::Url;

use podcastr::{
    BuildOptions, Episode, NoopReporter, Player, ProgressEvent, ProgressReporter, ReqwestClient,
    SharedProgressReporter, SiteConfig, build_site, get_episode_page, get_home_page,
};

// Emoji with fallback for terminals without Unicode support
static MICROPHONE: Emoji<'_, '_> = Emoji("🎙️  ", "");
static SEARCH: Emoji<'_, '_> = Emoji("🔍 ", "[~] ");
static HEADPHONES: Emoji<'_, '_> = Emoji("🎧 ", "[i] ");
static PAGE: Emoji<'_, '_> = Emoji("📄 ", "[p] ");
static SAVE: Emoji<'_, '_> = Emoji("💾 ", "[w] ");
static PARTY: Emoji<'_, '_> = Emoji("🎉 ", "[*] ");
static FOLDER: Emoji<'_, '_> = Emoji("📁 ", "");
static PLAY: Emoji<'_, '_> = Emoji("▶️  ", "> ");

/// Build a podcast episode site from a JSON content API
#[derive(Parser, Debug)]
#[command(name = "podcastr")]
#[command(about = "Build a podcast episode site from a JSON content API")]
#[command(version)]
struct Args {
    /// Base URL of the content API (overrides the config file)
    #[arg(long, global = true)]
    api: Option<Url>,

    /// Path to a TOML config file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Number of episodes requested for the listing
    #[arg(short, long, global = true)]
    limit: Option<usize>,

    /// Quiet mode - suppress progress output
    #[arg(short, long, global = true)]
    quiet: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Generate the listing, detail pages, feed and manifest
    Build {
        /// Output directory for the generated site
        output_dir: PathBuf,

        /// Maximum number of detail pages fetched concurrently
        #[arg(short = 'c', long)]
        concurrent: Option<usize>,

        /// Additional episode id to generate a detail page for (repeatable)
        #[arg(short, long = "episode")]
        episodes: Vec<String>,
    },

    /// Print the episode listing
    List,

    /// Print a single episode
    Show {
        /// Episode id
        id: String,
    },

    /// Queue the listing and start playback at a position
    Play {
        /// Zero-based position in the listing
        index: usize,
    },
}

/// Progress reporter using an indicatif spinner for terminal output
struct SpinnerReporter {
    bar: ProgressBar,
}

impl SpinnerReporter {
    fn new() -> Self {
        let style = ProgressStyle::default_spinner()
            .template("{spinner:.green} {wide_msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner());

        let bar = ProgressBar::new_spinner();
        bar.set_style(style);
        bar.enable_steady_tick(std::time::Duration::from_millis(100));

        Self { bar }
    }
}

impl ProgressReporter for SpinnerReporter {
    fn report(&self, event: ProgressEvent) {
        match event {
            ProgressEvent::FetchingListing { url } => {
                self.bar
                    .set_message(format!("{SEARCH}Fetching listing: {}", url.cyan()));
            }

            ProgressEvent::ListingReady {
                latest_count,
                total_episodes,
            } => {
                self.bar.println(format!(
                    "{HEADPHONES}Listing ready: {} episodes, {} latest",
                    total_episodes.to_string().cyan(),
                    latest_count.to_string().yellow()
                ));
            }

            ProgressEvent::FetchingEpisode { id, index, total } => {
                self.bar.set_message(format!(
                    "{PAGE}[{}/{}] {}",
                    (index + 1).to_string().cyan(),
                    total.to_string().cyan(),
                    id
                ));
            }

            ProgressEvent::EpisodeReady { title, .. } => {
                self.bar.set_message(format!("{PAGE}{}", title.green()));
            }

            ProgressEvent::WritingOutput { file_count } => {
                self.bar.set_message(format!(
                    "{SAVE}Writing {} files",
                    file_count.to_string().cyan()
                ));
            }

            ProgressEvent::BuildCompleted {
                page_count,
                file_count,
            } => {
                self.bar.finish_and_clear();
                println!(
                    "\n{PARTY}{} {} pages, {} files",
                    "Build complete:".bold().green(),
                    page_count.to_string().green().bold(),
                    file_count.to_string().cyan()
                );
            }
        }
    }
}

fn load_config(args: &Args) -> Result<SiteConfig> {
    let mut config = match &args.config {
        Some(path) => SiteConfig::load(path)
            .with_context(|| format!("Failed to load config {}", path.display()))?,
        None => SiteConfig::default(),
    };

    if let Some(api) = &args.api {
        config.api_base_url = api.clone();
    }
    if let Some(limit) = args.limit {
        config.listing_limit = limit;
    }
    if let Command::Build {
        concurrent: Some(concurrent),
        ..
    } = &args.command
    {
        config.max_concurrent = *concurrent;
    }

    config.validate().context("Invalid configuration")?;
    Ok(config)
}

fn print_episode_row(position: usize, episode: &Episode) {
    println!(
        "  {:>2}. {}  {}  {}  {}",
        position,
        episode.title().bold(),
        episode.members().dimmed(),
        episode.published_at().cyan(),
        episode.duration_as_string().yellow()
    );
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = Args::parse();
    let config = load_config(&args)?;
    let client = ReqwestClient::new();

    if !args.quiet {
        println!(
            "\n{}{} {}\n",
            MICROPHONE,
            config.site_title.bold().magenta(),
            "- Episode Site Builder".dimmed()
        );
    }

    match &args.command {
        Command::Build {
            output_dir,
            episodes,
            ..
        } => {
            let reporter: SharedProgressReporter = if args.quiet {
                NoopReporter::shared()
            } else {
                Arc::new(SpinnerReporter::new())
            };

            let options = BuildOptions {
                extra_episode_ids: episodes.clone(),
            };

            build_site(&client, &config, output_dir, &options, reporter)
                .await
                .context("Failed to build site")?;

            if !args.quiet {
                println!(
                    "\n{FOLDER}Output: {}\n",
                    output_dir.display().to_string().cyan()
                );
            }
        }

        Command::List => {
            let home = get_home_page(&client, &config)
                .await
                .context("Failed to build listing")?;

            println!("{}", "Últimos lançamentos".bold().green());
            for (index, episode) in home.props.latest_episodes.iter().enumerate() {
                print_episode_row(index, episode);
            }
            println!("\n{}", "Todos os episódios".bold().green());
            for (index, episode) in home.props.all_episodes.iter().enumerate() {
                print_episode_row(home.props.all_play_index(index), episode);
            }
        }

        Command::Show { id } => {
            let page = get_episode_page(&client, &config, id)
                .await
                .with_context(|| format!("Failed to build episode {id}"))?;
            let episode = &page.props;

            println!("{}", episode.title().bold());
            println!("{} • {} • {}", episode.members(), episode.published_at(), episode.duration_as_string());
            println!("{}\n", episode.url().cyan());
            println!("{}", episode.description().to_plain_text());
        }

        Command::Play { index } => {
            let home = get_home_page(&client, &config)
                .await
                .context("Failed to build listing")?;

            let mut player = Player::new();
            let latest = home.props.latest_episodes.len();
            if *index < latest {
                home.props.play_latest(&mut player, *index)?;
            } else {
                home.props.play_from_all(&mut player, index - latest)?;
            }

            if let Some(current) = player.current() {
                println!("{PLAY}{}", current.title().bold().green());
                println!("   {}", current.url().cyan());
            }
            if !player.upcoming().is_empty() {
                println!("\n{}", "Up next:".bold());
                for (offset, episode) in player.upcoming().iter().enumerate() {
                    print_episode_row(player.current_index() + 1 + offset, episode);
                }
            }
        }
    }

    Ok(())
}
