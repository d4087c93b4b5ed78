use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::time::Duration;

use log::warn;
use serde::{Deserialize, Serialize};

use crate::game::DEFAULT_BASE_FALL;
use crate::sfx::{DEFAULT_MUSIC_PATH, MUSIC_VOLUME};

pub const MAX_TARGET_FPS: u32 = 240;
/// Slowest accepted level-1 fall, in seconds per row.
pub const MAX_BASE_FALL_SECONDS: f64 = 60.0;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct AudioSettings {
    pub music_path: PathBuf,
    pub music_volume: f32,
    pub music_enabled: bool,
}

impl Default for AudioSettings {
    fn default() -> Self {
        Self {
            music_path: PathBuf::from(DEFAULT_MUSIC_PATH),
            music_volume: MUSIC_VOLUME,
            music_enabled: true,
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct VideoSettings {
    pub target_fps: u32,
}

impl Default for VideoSettings {
    fn default() -> Self {
        Self { target_fps: 90 }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct GameplaySettings {
    /// Seconds per row at level 1.
    pub base_fall_seconds: f64,
    /// Fixed piece sequence; a random seed is picked at startup when unset.
    pub seed: Option<u64>,
}

impl Default for GameplaySettings {
    fn default() -> Self {
        Self {
            base_fall_seconds: 0.8,
            seed: None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Settings {
    #[serde(default = "default_version")]
    pub version: u32,
    #[serde(default)]
    pub audio: AudioSettings,
    #[serde(default)]
    pub video: VideoSettings,
    #[serde(default)]
    pub gameplay: GameplaySettings,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            version: default_version(),
            audio: AudioSettings::default(),
            video: VideoSettings::default(),
            gameplay: GameplaySettings::default(),
        }
    }
}

impl Settings {
    pub fn sanitized(mut self) -> Self {
        let defaults = Settings::default();
        self.version = default_version();
        self.audio.music_volume = if self.audio.music_volume.is_finite() {
            self.audio.music_volume.clamp(0.0, 1.0)
        } else {
            defaults.audio.music_volume
        };
        self.video.target_fps = self.video.target_fps.clamp(1, MAX_TARGET_FPS);
        let fall = self.gameplay.base_fall_seconds;
        if !(fall.is_finite() && fall > 0.0 && fall <= MAX_BASE_FALL_SECONDS) {
            self.gameplay.base_fall_seconds = defaults.gameplay.base_fall_seconds;
        }
        self
    }

    /// Applies `OMBLOCKS_*` overrides read through `lookup`. Unparseable values are ignored.
    pub fn apply_env(mut self, lookup: impl Fn(&str) -> Option<String>) -> Self {
        if let Some(path) = lookup("OMBLOCKS_MUSIC") {
            self.audio.music_path = PathBuf::from(path);
        }
        if let Some(enabled) = lookup("OMBLOCKS_MUSIC_ENABLED").and_then(|v| parse_flag(&v)) {
            self.audio.music_enabled = enabled;
        }
        if let Some(seed) = lookup("OMBLOCKS_SEED").and_then(|v| v.trim().parse().ok()) {
            self.gameplay.seed = Some(seed);
        }
        if let Some(fps) = lookup("OMBLOCKS_FPS").and_then(|v| v.trim().parse().ok()) {
            self.video.target_fps = fps;
        }
        self.sanitized()
    }

    /// Falls back to the default pace for values that were never sanitized.
    pub fn base_fall(&self) -> Duration {
        Duration::try_from_secs_f64(self.gameplay.base_fall_seconds)
            .ok()
            .filter(|fall| !fall.is_zero())
            .unwrap_or(DEFAULT_BASE_FALL)
    }
}

fn default_version() -> u32 {
    1
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

#[derive(Debug, Clone)]
pub struct SettingsStore {
    path: PathBuf,
}

impl SettingsStore {
    pub fn from_env() -> Self {
        if let Some(explicit) = std::env::var_os("OMBLOCKS_SETTINGS_PATH") {
            return Self::at(explicit);
        }

        let base = std::env::var_os("XDG_CONFIG_HOME")
            .map(PathBuf::from)
            .or_else(|| {
                std::env::var_os("HOME").map(|home| {
                    let mut p = PathBuf::from(home);
                    p.push(".config");
                    p
                })
            })
            .unwrap_or_else(|| PathBuf::from("."));

        let mut path = base;
        path.push("omblocks");
        path.push("settings.json");
        Self { path }
    }

    pub fn at(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Never fails: a missing file means defaults, a malformed one is reported and replaced by
    /// defaults.
    pub fn load(&self) -> Settings {
        let bytes = match fs::read(&self.path) {
            Ok(bytes) => bytes,
            Err(err) if err.kind() == io::ErrorKind::NotFound => return Settings::default(),
            Err(err) => {
                warn!("cannot read settings {}: {err}", self.path.display());
                return Settings::default();
            }
        };
        match serde_json::from_slice::<Settings>(&bytes) {
            Ok(settings) => settings.sanitized(),
            Err(err) => {
                warn!("ignoring malformed settings {}: {err}", self.path.display());
                Settings::default()
            }
        }
    }
}
