//! ntz - Terminal note keeper
//!
//! Remembers short text notes grouped into categories, stored in a single
//! YAML file mapping each category to its ordered list of notes.

pub mod application;
pub mod cli;
pub mod domain;
pub mod error;
pub mod infrastructure;

pub use error::NtzError;
