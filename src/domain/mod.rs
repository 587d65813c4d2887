//! Domain layer - Note store and answer parsing

pub mod confirmation;
pub mod store;

pub use confirmation::{parse_index, Answer, Target};
pub use store::{CategoryEntry, NoteStore, FALLBACK_CATEGORY};
