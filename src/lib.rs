//! Song page player bootstrapper.
//! Reads the song embedded in the page, starts the Amplitude player with it,
//! and lets listeners seek by clicking the played-progress bar.

pub mod bindings;
pub mod bootstrap;
pub mod config;
pub mod diagnostics;
pub mod error;
pub mod page;
pub mod player;
pub mod seek;
pub mod settings;
pub mod song;

pub use bindings::{KeyBindings, TransportAction};
pub use bootstrap::{Bootstrapper, PlayerSession};
pub use config::PlaybackConfig;
pub use error::{BootstrapError, Result};
pub use page::{ProgressBar, SongPage};
pub use player::AudioPlayer;
pub use seek::{checked_played_percentage, played_percentage, ProgressClick};
pub use settings::BootstrapSettings;
pub use song::{parse_song_info, Song};

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

/// Page entry point. Failures are logged and leave the player untouched.
#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn start() {
    if let Err(err) = run() {
        diagnostics::log_failure("player", &format!("setup did not complete: {err}"));
    }
}

#[cfg(target_arch = "wasm32")]
fn run() -> Result<()> {
    let page = page::DomPage::current()?;
    let bootstrapper = Bootstrapper::new(BootstrapSettings::load());
    let session = bootstrapper.initialize(&page, player::AmplitudePlayer::new())?;
    bootstrapper.attach_seek(&page, session)
}
