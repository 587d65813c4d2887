//! Forget a note or a whole category

use crate::application::prompts::{pick_category, pick_note};
use crate::application::Outcome;
use crate::domain::{NoteStore, Target};
use crate::error::Result;
use crate::infrastructure::Console;

pub fn forget(store: &mut NoteStore, console: &mut dyn Console) -> Result<Outcome> {
    let choice = console.ask("Forget (1) a note or (2) a category? ")?;

    match Target::parse(&choice) {
        Some(Target::Note) => {
            let category = pick_category(store, console)?;
            let index = pick_note(store, &category, console)?;
            let removed = store.forget_note(&category, index)?;
            console.say(&format!("Forgot '{}'", removed))?;
            Ok(Outcome::Changed)
        }
        Some(Target::Category) => {
            let category = pick_category(store, console)?;
            let removed = store.forget_category(&category)?;
            console.say(&format!(
                "Forgot category '{}' and {} note(s)",
                category,
                removed.len()
            ))?;
            Ok(Outcome::Changed)
        }
        None => {
            console.say("Invalid selection")?;
            Ok(Outcome::Unchanged)
        }
    }
}
