mod fetch;
mod record;

pub use fetch::{ListQuery, SortOrder, episode_url, episodes_url, fetch_episode, fetch_episodes};
pub use record::{RawDuration, RawEpisodeRecord, RawId, RawMediaFile};
