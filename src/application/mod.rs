//! Application layer - Use cases and orchestration

pub mod categories;
pub mod clear;
pub mod edit;
pub mod forget;
pub mod prompts;
pub mod remember;

use crate::cli::Command;
use crate::error::Result;
use crate::infrastructure::{Console, NoteRepository};
use log::info;

/// Whether a flow modified the store
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Changed,
    Unchanged,
}

/// Runs one command against the repository: load, run the flow, save if changed
pub struct Dispatcher<R: NoteRepository> {
    repository: R,
}

impl<R: NoteRepository> Dispatcher<R> {
    pub fn new(repository: R) -> Self {
        Dispatcher { repository }
    }

    #[cfg(test)]
    fn repository(&self) -> &R {
        &self.repository
    }

    /// Execute `command`. The file is written only after the whole flow succeeds.
    pub fn execute(&self, command: &Command, console: &mut dyn Console) -> Result<Outcome> {
        let mut store = self.repository.load()?;

        let outcome = match command {
            Command::ListAll => categories::list_all(&store, console)?,
            Command::ListCategory { category } => {
                categories::list_category(&store, category.as_deref(), console)?
            }
            Command::QuickRemember { note, category } => {
                remember::quick_remember(&mut store, note, category, console)?
            }
            Command::Remember { note } => remember::remember(&mut store, note.as_deref(), console)?,
            Command::CreateCategory { name } => {
                categories::create_category(&mut store, name.as_deref(), console)?
            }
            Command::Edit => edit::edit(&mut store, console)?,
            Command::Forget => forget::forget(&mut store, console)?,
            Command::Clear => clear::clear(&mut store, console)?,
        };

        if outcome == Outcome::Changed {
            self.repository.save(&store)?;
            info!(
                "event=command_applied command={:?} path={}",
                command,
                self.repository.path().display()
            );
        }

        Ok(outcome)
    }
}
