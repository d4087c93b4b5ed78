pub mod board;
pub mod game;
pub mod input;
pub mod logging;
pub mod piece;
pub mod settings;
pub mod sfx;
pub mod shapes;
pub mod view;
