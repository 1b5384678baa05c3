mod date;
mod normalize;

pub use date::{format_published_at, parse_published_at};
pub use normalize::{Episode, coerce_duration, normalize_episode, normalize_episodes};

#[cfg(test)]
pub(crate) mod fixtures {
    use crate::api::{RawDuration, RawEpisodeRecord, RawId, RawMediaFile};

    /// A complete raw record whose fields are derived from `id`
    pub fn raw_record(id: &str, duration_secs: u64) -> RawEpisodeRecord {
        RawEpisodeRecord {
            id: Some(RawId::Text(id.to_string())),
            title: Some(format!("Episode {id}")),
            thumbnail: Some(format!("https://cdn.example.com/{id}.jpg")),
            members: Some("Diego e Richard".to_string()),
            published_at: Some("2021-01-22 19:00:00".to_string()),
            file: Some(RawMediaFile {
                duration: Some(RawDuration::Number(duration_secs as f64)),
                url: Some(format!("https://cdn.example.com/{id}.m4a")),
                mime_type: Some("audio/x-m4a".to_string()),
            }),
            description: Some(format!("<p>About {id}</p>")),
        }
    }

    pub fn episode(id: &str) -> super::Episode {
        super::normalize_episode(&raw_record(id, 3981)).unwrap()
    }
}
