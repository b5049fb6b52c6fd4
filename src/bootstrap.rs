use crate::config::PlaybackConfig;
use crate::diagnostics::{log_event, log_failure};
use crate::error::Result;
use crate::page::{ProgressBar, SongPage};
use crate::player::AudioPlayer;
use crate::seek::ProgressClick;
use crate::settings::BootstrapSettings;
use crate::song::parse_song_info;

/// Reads the page and starts the player.
#[derive(Debug, Clone, Default)]
pub struct Bootstrapper {
    settings: BootstrapSettings,
}

impl Bootstrapper {
    pub fn new(settings: BootstrapSettings) -> Self {
        Self { settings }
    }

    pub fn settings(&self) -> &BootstrapSettings {
        &self.settings
    }

    /// Parse the embedded song, build the configuration and call
    /// `player.init` once. Nothing reaches the player if any step before
    /// that fails.
    pub fn initialize<P: AudioPlayer>(
        &self,
        page: &impl SongPage,
        mut player: P,
    ) -> Result<PlayerSession<P>> {
        let raw = page.song_info(&self.settings)?;
        let song = parse_song_info(&raw)?;
        let config = PlaybackConfig::for_song(song, &self.settings);

        player.init(&config)?;
        if let Some(song) = config.song() {
            log_event(
                "player",
                &format!(
                    "initialized \"{}\" ({}) at volume {}",
                    song.label(),
                    song.url,
                    config.volume
                ),
            );
        }

        Ok(PlayerSession { player, config })
    }

    /// Hand `session` to the progress-bar listener so clicks seek the player.
    /// Without the bar there is no seeking, and the session is dropped.
    pub fn attach_seek<P: AudioPlayer + 'static>(
        &self,
        page: &impl ProgressBar,
        mut session: PlayerSession<P>,
    ) -> Result<()> {
        page.on_progress_click(&self.settings.progress_selector, move |click| {
            session.handle_progress_click(click);
        })
    }
}

/// An initialized player together with the configuration it was given.
#[derive(Debug)]
pub struct PlayerSession<P> {
    player: P,
    config: PlaybackConfig,
}

impl<P: AudioPlayer> PlayerSession<P> {
    pub fn config(&self) -> &PlaybackConfig {
        &self.config
    }

    pub fn player(&self) -> &P {
        &self.player
    }

    /// Seek to where the progress bar was clicked. Returns the percentage
    /// sent to the player, or `None` if the bar had no usable width.
    pub fn handle_progress_click(&mut self, click: ProgressClick) -> Option<f64> {
        let Some(percentage) = click.percentage() else {
            log_failure(
                "seek",
                &format!("ignored click on progress bar of width {}", click.width),
            );
            return None;
        };
        self.player.set_song_played_percentage(percentage);
        Some(percentage)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::BootstrapError;

    #[derive(Debug, Default)]
    struct CountingPlayer {
        inits: usize,
        seeks: Vec<f64>,
        reject: bool,
    }

    impl AudioPlayer for CountingPlayer {
        fn init(&mut self, _config: &PlaybackConfig) -> Result<()> {
            self.inits += 1;
            if self.reject {
                return Err(BootstrapError::PlayerInit("rejected".to_string()));
            }
            Ok(())
        }

        fn set_song_played_percentage(&mut self, percentage: f64) {
            self.seeks.push(percentage);
        }
    }

    struct StaticPage(&'static str);

    impl SongPage for StaticPage {
        fn attribute(&self, _element_id: &str, _attribute: &str) -> Result<Option<String>> {
            Ok(Some(self.0.to_string()))
        }
    }

    #[test]
    fn player_rejection_is_surfaced() {
        let player = CountingPlayer {
            reject: true,
            ..CountingPlayer::default()
        };
        let err = Bootstrapper::default()
            .initialize(&StaticPage(r#"{"url":"a.mp3"}"#), player)
            .unwrap_err();
        assert!(matches!(err, BootstrapError::PlayerInit(_)));
    }

    #[test]
    fn zero_width_click_does_not_seek() {
        let mut session = Bootstrapper::default()
            .initialize(&StaticPage(r#"{"url":"a.mp3"}"#), CountingPlayer::default())
            .unwrap();
        assert_eq!(session.handle_progress_click(ProgressClick::new(5.0, 5.0, 0.0)), None);
        assert!(session.player().seeks.is_empty());
        assert_eq!(session.player().inits, 1);
    }

    #[test]
    fn configured_volume_reaches_the_player() {
        let bootstrapper = Bootstrapper::new(BootstrapSettings {
            volume: 35,
            ..BootstrapSettings::default()
        });
        let session = bootstrapper
            .initialize(&StaticPage(r#"{"url":"a.mp3"}"#), CountingPlayer::default())
            .unwrap();
        assert_eq!(session.config().volume, 35);
    }
}
