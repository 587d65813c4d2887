//! Remember a note, interactively or directly

use crate::application::prompts::{choose_category, given_or_ask};
use crate::application::Outcome;
use crate::domain::{Answer, NoteStore, FALLBACK_CATEGORY};
use crate::error::{NtzError, Result};
use crate::infrastructure::Console;

/// Ask for the note (unless given) and where to put it.
///
/// An unrecognized yes/no answer leaves the store untouched without comment.
pub fn remember(
    store: &mut NoteStore,
    note: Option<&str>,
    console: &mut dyn Console,
) -> Result<Outcome> {
    let note = given_or_ask(note, "Note: ", console)?;
    let answer = console.ask("Add it to a category? (y/n) ")?;

    let category = match Answer::parse(&answer) {
        Ok(Answer::No) => None,
        Ok(Answer::Yes) => match choose_category(store, console)? {
            Some(category) => Some(category),
            None => {
                console.say("Cancelled")?;
                return Ok(Outcome::Unchanged);
            }
        },
        Err(NtzError::InvalidConfirmation(_)) => return Ok(Outcome::Unchanged),
        Err(e) => return Err(e),
    };

    store.remember(&note, category.as_deref())?;
    console.say(&format!(
        "Remembered in '{}'",
        category.as_deref().unwrap_or(FALLBACK_CATEGORY)
    ))?;
    Ok(Outcome::Changed)
}

/// Append `note` to `category`, creating the category if needed
pub fn quick_remember(
    store: &mut NoteStore,
    note: &str,
    category: &str,
    console: &mut dyn Console,
) -> Result<Outcome> {
    let category = category.trim();
    store.create_and_remember(category, note);
    console.say(&format!("Remembered in '{}'", category))?;
    Ok(Outcome::Changed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::CategoryEntry;
    use crate::infrastructure::ScriptedConsole;

    fn store() -> NoteStore {
        NoteStore::from_entries(vec![CategoryEntry::new("work", vec!["a".to_string()])])
    }

    #[test]
    fn test_remember_without_category() {
        let mut store = store();
        let mut console = ScriptedConsole::new(&["buy milk", "n"]);

        assert_eq!(remember(&mut store, None, &mut console).unwrap(), Outcome::Changed);
        assert_eq!(store.list_notes("other").unwrap(), &["buy milk".to_string()][..]);
        assert_eq!(store.list_categories(), vec!["other", "work"]);
    }

    #[test]
    fn test_remember_into_chosen_category() {
        let mut store = store();
        let mut console = ScriptedConsole::new(&["yes", "nope", "work"]);

        let outcome = remember(&mut store, Some("b"), &mut console).unwrap();
        assert_eq!(outcome, Outcome::Changed);
        assert_eq!(
            store.list_notes("work").unwrap(),
            &["a".to_string(), "b".to_string()][..]
        );
        assert!(console.output().contains("No category named 'nope'"));
    }

    #[test]
    fn test_remember_cancelled_by_empty_line() {
        let mut store = store();
        let before = store.clone();
        let mut console = ScriptedConsole::new(&["1", ""]);

        let outcome = remember(&mut store, Some("b"), &mut console).unwrap();
        assert_eq!(outcome, Outcome::Unchanged);
        assert_eq!(store, before);
    }

    #[test]
    fn test_remember_unrecognized_answer_is_silent_noop() {
        let mut store = store();
        let before = store.clone();
        let mut console = ScriptedConsole::new(&["b", "perhaps"]);

        let outcome = remember(&mut store, None, &mut console).unwrap();
        assert_eq!(outcome, Outcome::Unchanged);
        assert_eq!(store, before);
        assert_eq!(console.output(), "Note: \nAdd it to a category? (y/n) ");
    }

    #[test]
    fn test_quick_remember_trims_category() {
        let mut store = store();
        let mut console = ScriptedConsole::new(&[]);

        quick_remember(&mut store, "b", " work ", &mut console).unwrap();
        assert_eq!(store.list_categories(), vec!["work"]);
        assert_eq!(
            store.list_notes("work").unwrap(),
            &["a".to_string(), "b".to_string()][..]
        );
    }

    #[test]
    fn test_quick_remember_creates_category() {
        let mut store = NoteStore::new();
        let mut console = ScriptedConsole::new(&[]);

        quick_remember(&mut store, "finish report", "work", &mut console).unwrap();
        quick_remember(&mut store, "email client", "work", &mut console).unwrap();
        assert_eq!(
            store.list_notes("work").unwrap(),
            &["finish report".to_string(), "email client".to_string()][..]
        );
    }
}
