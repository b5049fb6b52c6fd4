//! The external player library as seen from the bootstrapper.
//! Native builds only ever see the trait; the Amplitude binding is wasm-only.

use crate::config::PlaybackConfig;
use crate::error::Result;

/// Operations the bootstrapper needs from the audio player.
pub trait AudioPlayer {
    /// Hand the player its configuration. Called once per session.
    fn init(&mut self, config: &PlaybackConfig) -> Result<()>;

    /// Seek to a percentage of the current song. Range checks are the
    /// player's business.
    fn set_song_played_percentage(&mut self, percentage: f64);
}

#[cfg(target_arch = "wasm32")]
pub use web::AmplitudePlayer;

#[cfg(target_arch = "wasm32")]
mod web {
    use super::*;
    use crate::error::BootstrapError;
    use serde::Serialize;
    use wasm_bindgen::prelude::*;

    #[wasm_bindgen]
    extern "C" {
        #[wasm_bindgen(js_namespace = Amplitude, js_name = init, catch)]
        fn amplitude_init(config: &JsValue) -> std::result::Result<(), JsValue>;

        #[wasm_bindgen(js_namespace = Amplitude, js_name = setSongPlayedPercentage)]
        fn amplitude_set_song_played_percentage(percentage: f64);
    }

    /// Handle to the page's global `Amplitude` object.
    #[derive(Debug, Default)]
    pub struct AmplitudePlayer {
        _private: (),
    }

    impl AmplitudePlayer {
        pub fn new() -> Self {
            Self::default()
        }
    }

    impl AudioPlayer for AmplitudePlayer {
        fn init(&mut self, config: &PlaybackConfig) -> Result<()> {
            let serializer = serde_wasm_bindgen::Serializer::json_compatible();
            let js_config = config
                .serialize(&serializer)
                .map_err(|err| BootstrapError::PlayerInit(err.to_string()))?;
            amplitude_init(&js_config).map_err(|err| {
                BootstrapError::PlayerInit(
                    err.as_string()
                        .or_else(|| {
                            js_sys::Reflect::get(&err, &"message".into())
                                .ok()
                                .and_then(|message| message.as_string())
                        })
                        .unwrap_or_else(|| "Amplitude.init threw".to_string()),
                )
            })
        }

        fn set_song_played_percentage(&mut self, percentage: f64) {
            amplitude_set_song_played_percentage(percentage);
        }
    }
}
