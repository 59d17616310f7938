pub mod config;
pub mod difficulty;
pub mod error;
pub mod food;
pub mod game;
pub mod input;
pub mod logging;
pub mod obstacles;
pub mod renderer;
pub mod scheduler;
pub mod settings;
pub mod snake;
pub mod terminal_runtime;
pub mod ui;
