//! Edit a note's text or a category's name

use crate::application::prompts::{pick_category, pick_note};
use crate::application::Outcome;
use crate::domain::{NoteStore, Target};
use crate::error::Result;
use crate::infrastructure::Console;

pub fn edit(store: &mut NoteStore, console: &mut dyn Console) -> Result<Outcome> {
    let choice = console.ask("Edit (1) a note or (2) a category? ")?;

    match Target::parse(&choice) {
        Some(Target::Note) => {
            let category = pick_category(store, console)?;
            let index = pick_note(store, &category, console)?;
            let text = console.ask("New text: ")?;
            store.edit_note(&category, index, &text)?;
            console.say(&format!("Updated note {} in '{}'", index, category))?;
            Ok(Outcome::Changed)
        }
        Some(Target::Category) => {
            let old = pick_category(store, console)?;
            let new = console.ask("New name: ")?;
            let new = new.trim();
            store.edit_category_name(&old, new)?;
            console.say(&format!("Renamed '{}' to '{}'", old, new))?;
            Ok(Outcome::Changed)
        }
        None => {
            console.say("Invalid selection")?;
            Ok(Outcome::Unchanged)
        }
    }
}
