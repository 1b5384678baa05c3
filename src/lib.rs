pub mod api;
pub mod build;
pub mod config;
pub mod duration;
pub mod episode;
pub mod error;
pub mod html;
pub mod http;
pub mod pages;
pub mod player;
pub mod progress;
pub mod render;

// Re-export main types for convenience
pub use api::{ListQuery, RawDuration, RawEpisodeRecord, RawId, RawMediaFile, SortOrder};
pub use build::{BuildOptions, BuildSummary, build_site};
pub use config::SiteConfig;
pub use duration::format_duration;
pub use episode::{Episode, normalize_episode, normalize_episodes};
pub use error::{
    ApiError, BuildError, ConfigError, NormalizeError, OutputError, PageError, PlayerError,
    RenderError,
};
pub use html::TrustedHtml;
pub use http::{HttpClient, HttpResponse, ReqwestClient};
pub use pages::{EpisodePage, HomePage, HomeProps, Revalidate, get_episode_page, get_home_page};
pub use player::Player;
pub use progress::{NoopReporter, ProgressEvent, ProgressReporter, SharedProgressReporter};
