// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use crate::episode::Episode;
use crate::error::PlayerError;

/// Playback queue shared by everything on a page that can start or steer playback.
///
/// The state holder is passed explicitly to its consumers; all mutation goes
/// through the methods below.
#[derive(Debug, Clone, Default)]
pub struct Player {
    queue: Vec<Episode>,
    current_index: usize,
    is_playing: bool,
    is_looping: bool,
}

impl Player {
    pub fn new() -> Self {
        Self::default()
    }

    /// Play a single episode, replacing the queue
    pub fn play(&mut self, episode: Episode) {
        self.queue = vec![episode];
        self.current_index = 0;
        self.is_playing = true;
    }

    /// Replace the queue and start playing at `start_index`
    pub fn play_list(&mut self, episodes: Vec<Episode>, start_index: usize) -> Result<(), PlayerError> {
        if start_index >= episodes.len() {
            return Err(PlayerError::IndexOutOfRange {
                index: start_index,
                len: episodes.len(),
            });
        }

        self.queue = episodes;
        self.current_index = start_index;
        self.is_playing = true;
        Ok(())
    }

    pub fn toggle_play(&mut self) {
        if !self.queue.is_empty() {
            self.is_playing = !self.is_playing;
        }
    }

    /// Sync the playing flag with the audio backend (e.g. paused from a media key)
    pub fn set_playing_state(&mut self, playing: bool) {
        self.is_playing = playing && !self.queue.is_empty();
    }

    pub fn toggle_loop(&mut self) {
        self.is_looping = !self.is_looping;
    }

    pub fn has_next(&self) -> bool {
        self.current_index + 1 < self.queue.len()
    }

    pub fn has_previous(&self) -> bool {
        !self.queue.is_empty() && self.current_index > 0
    }

    /// Advance to the next episode; returns whether the position changed
    pub fn play_next(&mut self) -> bool {
        if !self.has_next() {
            return false;
        }
        self.current_index += 1;
        true
    }

    /// Step back to the previous episode; returns whether the position changed
    pub fn play_previous(&mut self) -> bool {
        if !self.has_previous() {
            return false;
        }
        self.current_index -= 1;
        true
    }

    /// Called when the current episode finished playing
    pub fn episode_ended(&mut self) {
        if self.is_looping {
            return;
        }
        if !self.play_next() {
            self.clear();
        }
    }

    /// Drop the queue and stop playback; the loop setting is kept
    pub fn clear(&mut self) {
        self.queue.clear();
        self.current_index = 0;
        self.is_playing = false;
    }

    pub fn current(&self) -> Option<&Episode> {
        self.queue.get(self.current_index)
    }

    /// Episodes queued after the current one
    pub fn upcoming(&self) -> &[Episode] {
        self.queue.get(self.current_index + 1..).unwrap_or(&[])
    }

    pub fn queue(&self) -> &[Episode] {
        &self.queue
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn is_playing(&self) -> bool {
        self.is_playing
    }

    pub fn is_looping(&self) -> bool {
        self.is_looping
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::episode::fixtures::episode;

    fn queue_of(ids: &[&str]) -> Vec<Episode> {
        ids.iter().map(|id| episode(id)).collect()
    }

    fn current_id(player: &Player) -> Option<&str> {
        player.current().map(Episode::id)
    }

    #[test]
    fn new_player_is_idle() {
        let player = Player::new();
        assert!(player.current().is_none());
        assert!(!player.is_playing());
        assert!(!player.has_next());
        assert!(!player.has_previous());
        assert!(player.upcoming().is_empty());
    }

    #[test]
    fn play_list_starts_at_index() {
        let mut player = Player::new();
        player.play_list(queue_of(&["a", "b", "c"]), 1).unwrap();

        assert_eq!(current_id(&player), Some("b"));
        assert!(player.is_playing());
        assert!(player.has_next());
        assert!(player.has_previous());
        assert_eq!(player.upcoming().len(), 1);
    }

    #[test]
    fn play_list_rejects_out_of_range_index() {
        let mut player = Player::new();
        player.play(episode("x"));

        assert_eq!(
            player.play_list(queue_of(&["a", "b"]), 2),
            Err(PlayerError::IndexOutOfRange { index: 2, len: 2 })
        );
        assert_eq!(
            player.play_list(Vec::new(), 0),
            Err(PlayerError::IndexOutOfRange { index: 0, len: 0 })
        );
        // Previous state untouched
        assert_eq!(current_id(&player), Some("x"));
    }

    #[test]
    fn play_replaces_queue_with_single_episode() {
        let mut player = Player::new();
        player.play_list(queue_of(&["a", "b"]), 0).unwrap();
        player.play(episode("z"));

        assert_eq!(player.queue().len(), 1);
        assert_eq!(current_id(&player), Some("z"));
        assert!(!player.has_next());
    }

    #[test]
    fn next_and_previous_stop_at_bounds() {
        let mut player = Player::new();
        player.play_list(queue_of(&["a", "b"]), 0).unwrap();

        assert!(!player.play_previous());
        assert!(player.play_next());
        assert_eq!(current_id(&player), Some("b"));
        assert!(!player.play_next());
        assert!(player.play_previous());
        assert_eq!(current_id(&player), Some("a"));
    }

    #[test]
    fn toggle_play_requires_a_queue() {
        let mut player = Player::new();
        player.toggle_play();
        assert!(!player.is_playing());

        player.play(episode("a"));
        player.toggle_play();
        assert!(!player.is_playing());
        player.set_playing_state(true);
        assert!(player.is_playing());
    }

    #[test]
    fn ended_episode_advances_or_clears() {
        let mut player = Player::new();
        player.play_list(queue_of(&["a", "b"]), 0).unwrap();

        player.episode_ended();
        assert_eq!(current_id(&player), Some("b"));

        player.episode_ended();
        assert!(player.current().is_none());
        assert!(!player.is_playing());
    }

    #[test]
    fn looping_repeats_current_episode() {
        let mut player = Player::new();
        player.play_list(queue_of(&["a", "b"]), 0).unwrap();
        player.toggle_loop();

        player.episode_ended();
        assert_eq!(current_id(&player), Some("a"));
        assert!(player.is_looping());

        player.clear();
        assert!(player.is_looping());
    }
}
