use engine::audio::MusicPlayer;
use log::{info, warn};

use crate::settings::AudioSettings;

/// Where the looped background track is looked up when no other path is configured.
pub const DEFAULT_MUSIC_PATH: &str = "assets/music/puzzle-loop.mp3";

/// Default background music volume (0.0..=1.0).
pub const MUSIC_VOLUME: f32 = 0.5;

/// Starts the background loop if enabled. Any failure is logged and the game runs silent.
pub fn start_music(audio: &AudioSettings) -> Option<MusicPlayer> {
    if !audio.music_enabled {
        info!("music disabled by settings");
        return None;
    }
    match MusicPlayer::play_looped(&audio.music_path, audio.music_volume) {
        Ok(player) => Some(player),
        Err(err) => {
            warn!("music disabled: {err:#}");
            None
        }
    }
}
