use serde::Deserialize;

#[cfg(target_arch = "wasm32")]
use gloo_storage::{LocalStorage, Storage};

#[cfg(target_arch = "wasm32")]
const SETTINGS_KEY: &str = "songplayer.settings";

pub const MAX_VOLUME: u8 = 100;

/// Where the bootstrapper finds things on the page, and how loud to start.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct BootstrapSettings {
    #[serde(default = "default_song_info_element_id")]
    pub song_info_element_id: String,
    #[serde(default = "default_song_info_attribute")]
    pub song_info_attribute: String,
    #[serde(default = "default_progress_selector")]
    pub progress_selector: String,
    #[serde(default = "default_volume")]
    pub volume: u8,
}

fn default_song_info_element_id() -> String {
    "songInfo".to_string()
}

fn default_song_info_attribute() -> String {
    "data-song-info".to_string()
}

fn default_progress_selector() -> String {
    ".amplitude-song-played-progress".to_string()
}

fn default_volume() -> u8 {
    MAX_VOLUME
}

impl Default for BootstrapSettings {
    fn default() -> Self {
        Self {
            song_info_element_id: default_song_info_element_id(),
            song_info_attribute: default_song_info_attribute(),
            progress_selector: default_progress_selector(),
            volume: default_volume(),
        }
    }
}

impl BootstrapSettings {
    pub fn effective_volume(&self) -> u8 {
        self.volume.min(MAX_VOLUME)
    }

    /// Load settings from browser storage, falling back to defaults.
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        use gloo_storage::errors::StorageError;

        let stored =
            LocalStorage::get::<BootstrapSettings>(SETTINGS_KEY).map_err(|err| match err {
                StorageError::KeyNotFound(_) => None,
                other => Some(other),
            });
        let (settings, source) = Self::from_stored(stored);
        crate::diagnostics::log_event("settings", &source);
        settings
    }

    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Self {
        Self::default()
    }

    /// Pick stored settings or defaults, with a line saying which.
    /// `Err(None)` means nothing was stored.
    #[cfg_attr(not(target_arch = "wasm32"), allow(dead_code))]
    fn from_stored<E: std::fmt::Display>(
        stored: std::result::Result<Self, Option<E>>,
    ) -> (Self, String) {
        match stored {
            Ok(settings) => (settings, "loaded from local storage".to_string()),
            Err(None) => (Self::default(), "using defaults (nothing stored)".to_string()),
            Err(Some(err)) => (
                Self::default(),
                format!("using defaults (stored settings unreadable: {err})"),
            ),
        }
    }
}
