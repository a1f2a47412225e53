//! Interactive console for scoring a game of cricket darts.

pub mod config;
pub mod console;
pub mod error;
pub mod render;

pub use config::ConsoleConfig;
pub use console::Console;
