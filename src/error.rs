use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur when turning a raw API record into an episode
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NormalizeError {
    #[error("Episode record is missing required field '{field}'")]
    MissingField { field: &'static str },

    #[error("Episode duration '{value}' is not a non-negative number of seconds")]
    MalformedDuration { value: String },

    #[error("Failed to parse publish date '{date_str}'")]
    InvalidDate { date_str: String },
}

/// Errors that can occur when talking to the content API
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Invalid API URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error("Failed to fetch {url}: {source}")]
    FetchFailed {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("HTTP error {status} for {url}")]
    HttpStatus { url: String, status: u16 },

    #[error("Failed to parse API response from {url}: {source}")]
    JsonParseFailed {
        url: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Errors that abort the content generation of a single page
#[derive(Error, Debug)]
pub enum PageError {
    #[error("Content API error: {0}")]
    Api(#[from] ApiError),

    #[error("Episode '{id}' could not be normalized: {source}")]
    Normalize {
        id: String,
        #[source]
        source: NormalizeError,
    },
}

/// Errors that can occur while rendering page artifacts
#[derive(Error, Debug)]
pub enum RenderError {
    #[error("Failed to serialize page props: {0}")]
    PropsSerializeFailed(#[from] serde_json::Error),

    #[error("Failed to write RSS feed: {0}")]
    FeedFailed(#[from] rss::Error),
}

/// Errors that can occur when writing the output directory
#[derive(Error, Debug)]
pub enum OutputError {
    #[error("Failed to create directory {path}: {source}")]
    CreateDirectoryFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write file {path}: {source}")]
    WriteFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Errors that can occur when loading the site configuration
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {source}")]
    ReadFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file {path}: {source}")]
    ParseFailed {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Top-level errors for a site build
#[derive(Error, Debug)]
pub enum BuildError {
    #[error("Page {route} failed: {source}")]
    Page {
        route: String,
        #[source]
        source: PageError,
    },

    #[error("Render error: {0}")]
    Render(#[from] RenderError),

    #[error("Output error: {0}")]
    Output(#[from] OutputError),
}

/// Errors raised by the playback queue
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PlayerError {
    #[error("Cannot start playback at index {index} of a queue with {len} episodes")]
    IndexOutOfRange { index: usize, len: usize },
}
