//! CLI layer - Command-line interface

pub mod commands;
pub mod output;

pub use commands::{Cli, Command, Invocation};
pub use output::{format_category_list, format_note_list, format_store};
