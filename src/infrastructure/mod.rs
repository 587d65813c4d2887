//! Infrastructure layer - External I/O and persistence

pub mod config;
pub mod console;
pub mod logging;
pub mod repository;

pub use config::Config;
pub use console::{Console, Terminal};
#[cfg(test)]
pub use console::ScriptedConsole;
pub use logging::init_logging;
pub use repository::{NoteRepository, YamlRepository};
