use std::error::Error;
use std::time::{Duration, Instant};

use log::{error, info};
use pixels::{PixelsBuilder, SurfaceTexture};
use winit::dpi::LogicalSize;
use winit::event::{ElementState, Event, KeyboardInput, VirtualKeyCode, WindowEvent};
use winit::event_loop::{ControlFlow, EventLoop};
use winit::window::WindowBuilder;

use crate::graphics::Renderer2d;
use crate::pixels_renderer::PixelsRenderer2d;
use crate::surface::SurfaceSize;

pub struct AppConfig {
    pub title: String,
    /// Logical size of both the window and the drawing buffer.
    pub size: SurfaceSize,
    pub target_fps: u32,
    pub resizable: bool,
}

impl AppConfig {
    pub fn frame_interval(&self) -> Duration {
        Duration::from_secs_f64(1.0 / self.target_fps.max(1) as f64)
    }
}

/// Everything the window delivered since the previous frame.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InputFrame {
    /// Key-down events in arrival order. OS auto-repeat shows up as repeated presses.
    pub keys_pressed: Vec<VirtualKeyCode>,
}

impl InputFrame {
    pub fn clear(&mut self) {
        self.keys_pressed.clear();
    }
}

/// A game driven by [`run_game`].
///
/// The host calls, once per paced frame: `update_state`, `render`, present, `handle_effects`.
pub trait GameApp {
    type State;
    type Effect;

    fn init_state(&mut self) -> Self::State;

    fn update_state(
        &mut self,
        state: &mut Self::State,
        input: &InputFrame,
        dt: Duration,
    ) -> Vec<Self::Effect>;

    fn render(&mut self, state: &Self::State, renderer: &mut dyn Renderer2d);

    fn handle_effects(&mut self, _state: &Self::State, _effects: Vec<Self::Effect>) {}
}

pub fn run_game<G: GameApp + 'static>(config: AppConfig, mut game: G) -> Result<(), Box<dyn Error>> {
    let event_loop = EventLoop::new();
    let window = WindowBuilder::new()
        .with_title(config.title.as_str())
        .with_inner_size(LogicalSize::new(config.size.width, config.size.height))
        .with_resizable(config.resizable)
        .build(&event_loop)?;

    let physical = window.inner_size();
    let surface_texture = SurfaceTexture::new(physical.width, physical.height, &window);
    let pixels = PixelsBuilder::new(config.size.width, config.size.height, surface_texture)
        .enable_vsync(false)
        .build()?;
    let mut renderer = PixelsRenderer2d::new(pixels, config.size)?;

    info!(
        "window {}x{} (physical {}x{}), {} fps",
        config.size.width,
        config.size.height,
        physical.width,
        physical.height,
        config.target_fps
    );

    let frame_interval = config.frame_interval();
    let mut state = game.init_state();
    let mut input = InputFrame::default();
    let mut last_frame = Instant::now();
    let mut next_frame = last_frame;

    event_loop.run(move |event, _, control_flow| match event {
        Event::WindowEvent { event, .. } => match event {
            WindowEvent::CloseRequested => *control_flow = ControlFlow::Exit,
            WindowEvent::Resized(size) => {
                if let Err(err) = renderer.resize_surface(SurfaceSize::new(size.width, size.height)) {
                    error!("resize failed: {err}");
                }
            }
            WindowEvent::KeyboardInput {
                input:
                    KeyboardInput {
                        state: ElementState::Pressed,
                        virtual_keycode: Some(key),
                        ..
                    },
                ..
            } => input.keys_pressed.push(key),
            _ => {}
        },
        Event::MainEventsCleared => {
            if *control_flow == ControlFlow::Exit {
                return;
            }
            let now = Instant::now();
            if now >= next_frame {
                window.request_redraw();
                next_frame += frame_interval;
                if next_frame <= now {
                    // Fell behind (e.g. the window was dragged); don't try to catch up.
                    next_frame = now + frame_interval;
                }
            }
            *control_flow = ControlFlow::WaitUntil(next_frame);
        }
        Event::RedrawRequested(_) => {
            let now = Instant::now();
            let dt = now.saturating_duration_since(last_frame);
            last_frame = now;

            let effects = game.update_state(&mut state, &input, dt);
            input.clear();

            renderer.draw_frame(|gfx| game.render(&state, gfx));
            if let Err(err) = renderer.present() {
                error!("present failed: {err}");
            }

            game.handle_effects(&state, effects);
        }
        _ => {}
    });
}
