use std::error::Error;
use std::time::Duration;

use engine::app::{AppConfig, GameApp, InputFrame, run_game};
use engine::audio::MusicPlayer;
use engine::graphics::Renderer2d;
use log::{debug, info};

use omblocks::game::{Game, GameEffect};
use omblocks::input::frame_inputs;
use omblocks::logging::{init_logging, level_from_env};
use omblocks::settings::{Settings, SettingsStore};
use omblocks::sfx::start_music;
use omblocks::view::{WINDOW_SIZE, draw_game};

struct BlocksApp {
    seed: u64,
    base_fall: Duration,
    // Held only to keep the music playing.
    _music: Option<MusicPlayer>,
}

impl GameApp for BlocksApp {
    type State = Game;
    type Effect = GameEffect;

    fn init_state(&mut self) -> Game {
        Game::new(self.seed, self.base_fall)
    }

    fn update_state(
        &mut self,
        state: &mut Game,
        input: &InputFrame,
        dt: Duration,
    ) -> Vec<GameEffect> {
        frame_inputs(&input.keys_pressed, dt)
            .into_iter()
            .flat_map(|step| state.apply(step))
            .collect()
    }

    fn render(&mut self, state: &Game, renderer: &mut dyn Renderer2d) {
        draw_game(renderer, state);
    }

    fn handle_effects(&mut self, _state: &Game, effects: Vec<GameEffect>) {
        for effect in effects {
            match effect {
                GameEffect::LinesCleared { rows, points, level } => {
                    info!("cleared {rows} line(s) for {points} points at level {level}");
                }
                GameEffect::LevelUp(level) => info!("level {level}"),
                GameEffect::BoardReset {
                    final_score,
                    final_lines,
                } => info!("board topped out at score {final_score} ({final_lines} lines); starting over"),
                GameEffect::Paused => debug!("paused"),
                GameEffect::Resumed => debug!("resumed"),
                GameEffect::Moved | GameEffect::Rotated | GameEffect::Locked { .. } => {}
            }
        }
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    let _log = init_logging(level_from_env())?;

    let store = SettingsStore::from_env();
    let settings: Settings = store.load().apply_env(|name| std::env::var(name).ok());
    let seed = settings.gameplay.seed.unwrap_or_else(rand::random);
    info!("settings from {}, seed {seed}", store.path().display());

    let app = BlocksApp {
        seed,
        base_fall: settings.base_fall(),
        _music: start_music(&settings.audio),
    };

    let config = AppConfig {
        title: "Om Blocks".to_string(),
        size: WINDOW_SIZE,
        target_fps: settings.video.target_fps,
        resizable: false,
    };
    run_game(config, app)
}
