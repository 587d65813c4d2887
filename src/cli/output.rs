//! Output formatting utilities

use crate::domain::{CategoryEntry, NoteStore};

/// Format every category with its notes for display
pub fn format_store(store: &NoteStore) -> String {
    let Some(entries) = store.list_all() else {
        return "No notes found".to_string();
    };

    entries
        .iter()
        .map(format_entry)
        .collect::<Vec<_>>()
        .join("\n")
}

fn format_entry(entry: &CategoryEntry) -> String {
    let mut output = format!("{}:\n", entry.name);
    if entry.notes.is_empty() {
        output.push_str("  (empty)\n");
    }
    for (i, note) in entry.notes.iter().enumerate() {
        output.push_str(&format!("  {}. {}\n", i + 1, note));
    }
    output
}

/// Format notes numbered from 1, as used when choosing one to edit or forget
pub fn format_note_list(notes: &[String]) -> String {
    if notes.is_empty() {
        return "No notes found".to_string();
    }

    let mut output = String::new();
    for (i, note) in notes.iter().enumerate() {
        output.push_str(&format!("{}. {}\n", i + 1, note));
    }
    output
}

/// Format category names, one per line
pub fn format_category_list(categories: &[&str]) -> String {
    if categories.is_empty() {
        return "No categories found".to_string();
    }

    let mut output = String::new();
    for category in categories {
        output.push_str(&format!("- {}\n", category));
    }
    output
}
