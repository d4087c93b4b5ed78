//! Render-hash helpers for determinism checks.
//!
//! A game is run headlessly, each state is drawn with the CPU renderer into an offscreen surface,
//! and every frame is reduced to a SHA-256 digest. Two runs with the same inputs must agree.

use sha2::{Digest, Sha256};

use crate::{
    GameLogic, HeadlessRunner,
    graphics::{CpuRenderer, Renderer2d},
    surface::{RgbaBufferSurface, SurfaceSize},
};

pub fn rgba_sha256_hex(rgba: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(rgba);
    hex::encode(hasher.finalize())
}

fn render_hash<S, R>(state: &S, surface: &mut RgbaBufferSurface, render: &mut R) -> String
where
    R: FnMut(&S, &mut dyn Renderer2d),
{
    let size = surface.size();
    {
        let mut gfx = CpuRenderer::new(surface.frame_mut(), size);
        render(state, &mut gfx);
    }
    rgba_sha256_hex(surface.frame())
}

/// Hashes of the initial state followed by the state after each input.
pub fn render_hashes<G, I, R>(game: G, inputs: I, size: SurfaceSize, mut render: R) -> Vec<String>
where
    G: GameLogic,
    I: IntoIterator<Item = G::Input>,
    R: FnMut(&G::State, &mut dyn Renderer2d),
{
    let mut runner = HeadlessRunner::new(game);
    let mut surface = RgbaBufferSurface::new(size);

    let mut hashes = vec![render_hash(runner.state(), &mut surface, &mut render)];
    for input in inputs {
        runner.step(input);
        hashes.push(render_hash(runner.state(), &mut surface, &mut render));
    }
    hashes
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sha256_of_empty_input_is_the_known_digest() {
        assert_eq!(
            rgba_sha256_hex(&[]),
            "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
        );
    }
}
