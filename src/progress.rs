use std::sync::Arc;

/// Events emitted during a site build for progress reporting
#[derive(Debug, Clone)]
pub enum ProgressEvent {
    /// The episode listing is being fetched
    FetchingListing { url: String },

    /// The listing page has been generated
    ListingReady {
        latest_count: usize,
        total_episodes: usize,
    },

    /// A detail page is being generated
    FetchingEpisode {
        id: String,
        /// Position of this page among all detail pages
        index: usize,
        total: usize,
    },

    /// A detail page has been generated
    EpisodeReady { id: String, title: String },

    /// Rendered artifacts are being written to the output directory
    WritingOutput { file_count: usize },

    /// Build finished and the output directory is up to date
    BuildCompleted {
        page_count: usize,
        file_count: usize,
    },
}

/// Trait for reporting progress events during a build.
///
/// Implementations can use this to display spinners, log messages,
/// or collect statistics.
pub trait ProgressReporter: Send + Sync {
    /// Report a progress event
    fn report(&self, event: ProgressEvent);
}

/// A shared reference to a progress reporter
pub type SharedProgressReporter = Arc<dyn ProgressReporter>;

/// A no-op progress reporter that silently ignores all events.
/// Useful for tests or quiet mode.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopReporter;

impl ProgressReporter for NoopReporter {
    fn report(&self, _event: ProgressEvent) {}
}

impl NoopReporter {
    /// Create a new NoopReporter wrapped in an Arc
    pub fn shared() -> SharedProgressReporter {
        Arc::new(Self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn noop_reporter_handles_all_events() {
        let reporter = NoopReporter::shared();

        reporter.report(ProgressEvent::FetchingListing {
            url: "http://localhost:3333/episodes".to_string(),
        });
        reporter.report(ProgressEvent::ListingReady {
            latest_count: 2,
            total_episodes: 12,
        });
        reporter.report(ProgressEvent::FetchingEpisode {
            id: "faladev-30".to_string(),
            index: 0,
            total: 12,
        });
        reporter.report(ProgressEvent::EpisodeReady {
            id: "faladev-30".to_string(),
            title: "Faladev #30".to_string(),
        });
        reporter.report(ProgressEvent::WritingOutput { file_count: 27 });
        reporter.report(ProgressEvent::BuildCompleted {
            page_count: 13,
            file_count: 27,
        });
    }
}
