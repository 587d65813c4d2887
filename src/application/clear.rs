//! Forget everything after confirmation

use crate::application::Outcome;
use crate::domain::{Answer, NoteStore};
use crate::error::Result;
use crate::infrastructure::Console;

/// Clear the store once the user answers yes. Any other answer does nothing.
pub fn clear(store: &mut NoteStore, console: &mut dyn Console) -> Result<Outcome> {
    let answer = console.ask("Forget all notes and categories? (y/n) ")?;

    if !matches!(Answer::parse(&answer), Ok(Answer::Yes)) {
        return Ok(Outcome::Unchanged);
    }

    store.clear();
    console.say("All notes forgotten")?;
    Ok(Outcome::Changed)
}
