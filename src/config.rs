use serde::Serialize;

use crate::bindings::KeyBindings;
use crate::settings::BootstrapSettings;
use crate::song::Song;

/// Everything the player receives at startup.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlaybackConfig {
    pub bindings: KeyBindings,
    pub songs: Vec<Song>,
    pub volume: u8,
}

impl PlaybackConfig {
    /// One-song playlist with the standard key bindings.
    pub fn for_song(song: Song, settings: &BootstrapSettings) -> Self {
        Self {
            bindings: KeyBindings::standard(),
            songs: vec![song],
            volume: settings.effective_volume(),
        }
    }

    pub fn song(&self) -> Option<&Song> {
        self.songs.first()
    }
}
