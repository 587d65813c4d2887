//! Prompt helpers shared by the interactive flows

use crate::cli::output::{format_category_list, format_note_list};
use crate::domain::{parse_index, NoteStore};
use crate::error::{NtzError, Result};
use crate::infrastructure::Console;

/// Show the categories and ask for one. An unknown name fails.
pub fn pick_category(store: &NoteStore, console: &mut dyn Console) -> Result<String> {
    console.say(format_category_list(&store.list_categories()).trim_end())?;
    let name = console.ask("Category: ")?;
    let name = name.trim();

    if !store.contains(name) {
        return Err(NtzError::CategoryNotFound(name.to_string()));
    }
    Ok(name.to_string())
}

/// Keep asking until an existing category is named.
///
/// An empty line cancels and yields `None`.
pub fn choose_category(store: &NoteStore, console: &mut dyn Console) -> Result<Option<String>> {
    loop {
        console.say(format_category_list(&store.list_categories()).trim_end())?;
        let name = console.ask("Category (empty line to cancel): ")?;
        let name = name.trim();

        if name.is_empty() {
            return Ok(None);
        }
        if store.contains(name) {
            return Ok(Some(name.to_string()));
        }
        console.say(&format!("No category named '{}'", name))?;
    }
}

/// Show the numbered notes of `category` and ask for one, validating the number
pub fn pick_note(store: &NoteStore, category: &str, console: &mut dyn Console) -> Result<usize> {
    let notes = store.list_notes(category)?;
    console.say(format_note_list(notes).trim_end())?;

    let index = parse_index(&console.ask("Note number: ")?)?;
    store.note(category, index)?;
    Ok(index)
}

/// Take `given` or ask for it
pub fn given_or_ask(given: Option<&str>, prompt: &str, console: &mut dyn Console) -> Result<String> {
    match given {
        Some(value) => Ok(value.to_string()),
        None => console.ask(prompt),
    }
}
