//! In-memory note store: categories mapped to ordered note lists

use crate::error::{NtzError, Result};

/// Category used when a note is remembered without choosing one
pub const FALLBACK_CATEGORY: &str = "other";

/// A category together with its notes, in display order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryEntry {
    pub name: String,
    pub notes: Vec<String>,
}

impl CategoryEntry {
    pub fn new(name: impl Into<String>, notes: Vec<String>) -> Self {
        CategoryEntry {
            name: name.into(),
            notes,
        }
    }
}

/// The full category → notes mapping.
///
/// Entries keep the order they were loaded or inserted in. Operations that add
/// or rename a category re-sort by name; deletions leave the order alone.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NoteStore {
    entries: Vec<CategoryEntry>,
}

impl NoteStore {
    pub fn new() -> Self {
        NoteStore::default()
    }

    /// Build a store from entries, keeping their order.
    ///
    /// A repeated category name replaces the earlier one in place.
    pub fn from_entries(entries: impl IntoIterator<Item = CategoryEntry>) -> Self {
        let mut store = NoteStore::new();
        for entry in entries {
            match store.position(&entry.name) {
                Some(pos) => store.entries[pos].notes = entry.notes,
                None => store.entries.push(entry),
            }
        }
        store
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn contains(&self, category: &str) -> bool {
        self.position(category).is_some()
    }

    /// All categories with their notes, or `None` when there is nothing to show
    pub fn list_all(&self) -> Option<&[CategoryEntry]> {
        if self.entries.is_empty() {
            None
        } else {
            Some(&self.entries)
        }
    }

    pub fn list_categories(&self) -> Vec<&str> {
        self.entries.iter().map(|e| e.name.as_str()).collect()
    }

    pub fn list_notes(&self, category: &str) -> Result<&[String]> {
        self.entry(category).map(|e| e.notes.as_slice())
    }

    /// The note at 1-based `index` in `category`
    pub fn note(&self, category: &str, index: usize) -> Result<&str> {
        let entry = self.entry(category)?;
        let slot = Self::slot(index, entry.notes.len())?;
        Ok(&entry.notes[slot])
    }

    /// Create `name` with no notes. An existing category of that name is reset.
    pub fn create_category(&mut self, name: &str) {
        match self.position(name) {
            Some(pos) => self.entries[pos].notes.clear(),
            None => self.entries.push(CategoryEntry::new(name, Vec::new())),
        }
        self.sort_in_place();
    }

    /// Append a note to `category`, or to the fallback category when `None`.
    pub fn remember(&mut self, note: &str, category: Option<&str>) -> Result<()> {
        match category {
            Some(name) => {
                self.entry_mut(name)?.notes.push(note.to_string());
                Ok(())
            }
            None => {
                self.create_and_remember(FALLBACK_CATEGORY, note);
                Ok(())
            }
        }
    }

    /// Append to `category`, creating it with this single note if missing
    pub fn create_and_remember(&mut self, category: &str, note: &str) {
        match self.position(category) {
            Some(pos) => self.entries[pos].notes.push(note.to_string()),
            None => {
                self.entries
                    .push(CategoryEntry::new(category, vec![note.to_string()]));
                self.sort_in_place();
            }
        }
    }

    /// Replace the note at 1-based `index` in `category`
    pub fn edit_note(&mut self, category: &str, index: usize, text: &str) -> Result<()> {
        let entry = self.entry_mut(category)?;
        let slot = Self::slot(index, entry.notes.len())?;
        entry.notes[slot] = text.to_string();
        self.sort_in_place();
        Ok(())
    }

    /// Rename `old` to `new`, keeping its notes. An existing `new` is overwritten.
    pub fn edit_category_name(&mut self, old: &str, new: &str) -> Result<()> {
        let pos = self
            .position(old)
            .ok_or_else(|| NtzError::CategoryNotFound(old.to_string()))?;
        if old == new {
            return Ok(());
        }

        let mut entry = self.entries.remove(pos);
        entry.name = new.to_string();
        self.entries.retain(|e| e.name != new);
        self.entries.push(entry);
        self.sort_in_place();
        Ok(())
    }

    /// Remove the note at 1-based `index`, returning it
    pub fn forget_note(&mut self, category: &str, index: usize) -> Result<String> {
        let entry = self.entry_mut(category)?;
        let slot = Self::slot(index, entry.notes.len())?;
        Ok(entry.notes.remove(slot))
    }

    /// Remove `category` and all of its notes, returning them
    pub fn forget_category(&mut self, category: &str) -> Result<Vec<String>> {
        let pos = self
            .position(category)
            .ok_or_else(|| NtzError::CategoryNotFound(category.to_string()))?;
        Ok(self.entries.remove(pos).notes)
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Return the store with categories in ascending name order
    pub fn sorted(mut self) -> Self {
        self.sort_in_place();
        self
    }

    fn sort_in_place(&mut self) {
        self.entries.sort_by(|a, b| a.name.cmp(&b.name));
    }

    fn position(&self, category: &str) -> Option<usize> {
        self.entries.iter().position(|e| e.name == category)
    }

    fn entry(&self, category: &str) -> Result<&CategoryEntry> {
        self.entries
            .iter()
            .find(|e| e.name == category)
            .ok_or_else(|| NtzError::CategoryNotFound(category.to_string()))
    }

    fn entry_mut(&mut self, category: &str) -> Result<&mut CategoryEntry> {
        self.entries
            .iter_mut()
            .find(|e| e.name == category)
            .ok_or_else(|| NtzError::CategoryNotFound(category.to_string()))
    }

    /// Convert a 1-based index into a vector slot
    fn slot(index: usize, len: usize) -> Result<usize> {
        if index == 0 || index > len {
            return Err(NtzError::IndexOutOfRange { index, len });
        }
        Ok(index - 1)
    }
}

impl<'a> IntoIterator for &'a NoteStore {
    type Item = &'a CategoryEntry;
    type IntoIter = std::slice::Iter<'a, CategoryEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
