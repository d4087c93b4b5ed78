use std::time::Duration;

use engine::regression::render_hashes;
use omblocks::game::{BlocksLogic, GameInput, Key};
use omblocks::view::{WINDOW_SIZE, draw_game};

fn session() -> Vec<GameInput> {
    let tick = GameInput::Tick(Duration::from_millis(16));
    let mut inputs = vec![tick; 10];
    inputs.extend([
        GameInput::Key(Key::Left),
        GameInput::Key(Key::Up),
        tick,
        GameInput::Key(Key::Space),
        GameInput::Key(Key::Right),
        GameInput::Key(Key::Right),
        GameInput::Key(Key::Down),
        GameInput::Key(Key::Pause),
        tick,
        GameInput::Key(Key::Pause),
        GameInput::Tick(Duration::from_secs(1)),
    ]);
    inputs
}

fn hashes(seed: u64) -> Vec<String> {
    render_hashes(BlocksLogic::new(seed), session(), WINDOW_SIZE, |game, gfx| {
        draw_game(gfx, game)
    })
}

#[test]
fn same_seed_and_inputs_render_identically() {
    let first = hashes(2024);
    let second = hashes(2024);
    assert_eq!(first.len(), session().len() + 1);
    assert_eq!(first, second);
}

#[test]
fn hard_drop_changes_the_frame() {
    let hashes = hashes(2024);
    // Index of the Space input, plus one for the initial frame.
    let drop = 10 + 3 + 1;
    assert_ne!(hashes[drop - 1], hashes[drop]);
}

#[test]
fn pausing_shows_a_banner_and_resuming_removes_it() {
    let hashes = hashes(7);
    let (pause, resume) = (10 + 7 + 1, 10 + 9 + 1);
    assert_ne!(hashes[pause - 1], hashes[pause]);
    // A tick while paused changes nothing.
    assert_eq!(hashes[pause], hashes[pause + 1]);
    assert_eq!(hashes[resume], hashes[pause - 1]);
}
