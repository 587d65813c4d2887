//! Create categories and show their contents

use crate::application::prompts::given_or_ask;
use crate::application::Outcome;
use crate::cli::output::{format_note_list, format_store};
use crate::domain::NoteStore;
use crate::error::Result;
use crate::infrastructure::Console;

/// Create a category, asking for its name unless given.
///
/// An existing category of the same name is emptied.
pub fn create_category(
    store: &mut NoteStore,
    name: Option<&str>,
    console: &mut dyn Console,
) -> Result<Outcome> {
    let name = given_or_ask(name, "Category name: ", console)?;
    let name = name.trim();
    store.create_category(name);
    console.say(&format!("Created category '{}'", name))?;
    Ok(Outcome::Changed)
}

/// Print every category with its notes
pub fn list_all(store: &NoteStore, console: &mut dyn Console) -> Result<Outcome> {
    console.say(format_store(store).trim_end())?;
    Ok(Outcome::Unchanged)
}

/// Print the notes of one category, asking for it unless given
pub fn list_category(
    store: &NoteStore,
    category: Option<&str>,
    console: &mut dyn Console,
) -> Result<Outcome> {
    let category = given_or_ask(category, "Category: ", console)?;
    let notes = store.list_notes(category.trim())?;
    console.say(format_note_list(notes).trim_end())?;
    Ok(Outcome::Unchanged)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::prompts::pick_category;
    use crate::domain::CategoryEntry;
    use crate::error::NtzError;
    use crate::infrastructure::ScriptedConsole;

    #[test]
    fn test_create_category_prompts_for_name() {
        let mut store = NoteStore::new();
        let mut console = ScriptedConsole::new(&["ideas"]);

        create_category(&mut store, None, &mut console).unwrap();
        assert_eq!(store.list_categories(), vec!["ideas"]);
        assert!(console.output().contains("Created category 'ideas'"));
    }

    #[test]
    fn test_padded_category_name_can_be_picked_later() {
        let mut store = NoteStore::new();
        let mut console = ScriptedConsole::new(&["  work ", " work"]);

        create_category(&mut store, None, &mut console).unwrap();
        assert_eq!(store.list_categories(), vec!["work"]);
        assert_eq!(pick_category(&store, &mut console).unwrap(), "work");
    }

    #[test]
    fn test_create_category_resets_existing() {
        let mut store =
            NoteStore::from_entries(vec![CategoryEntry::new("x", vec!["a".to_string()])]);
        let mut console = ScriptedConsole::new(&[]);

        create_category(&mut store, Some("x"), &mut console).unwrap();
        assert!(store.list_notes("x").unwrap().is_empty());
    }

    #[test]
    fn test_list_all_empty() {
        let mut console = ScriptedConsole::new(&[]);
        list_all(&NoteStore::new(), &mut console).unwrap();
        assert_eq!(console.output(), "No notes found");
    }

    #[test]
    fn test_list_category() {
        let store = NoteStore::from_entries(vec![CategoryEntry::new(
            "work",
            vec!["a".to_string(), "b".to_string()],
        )]);

        let mut console = ScriptedConsole::new(&[]);
        list_category(&store, Some("work"), &mut console).unwrap();
        assert_eq!(console.output(), "1. a\n2. b");

        let mut console = ScriptedConsole::new(&["home"]);
        assert!(matches!(
            list_category(&store, None, &mut console),
            Err(NtzError::CategoryNotFound(_))
        ));
    }
}
