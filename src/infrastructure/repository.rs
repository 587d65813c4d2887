//! YAML file repository for the note store

use crate::domain::{CategoryEntry, NoteStore};
use crate::error::{NtzError, Result};
use log::{debug, info};
use serde_yaml::{Mapping, Value};
use std::fs;
use std::path::{Path, PathBuf};

/// Abstract storage for the note store
pub trait NoteRepository {
    /// Location of the backing file
    fn path(&self) -> &Path;

    /// Read a fresh snapshot of the whole store
    fn load(&self) -> Result<NoteStore>;

    /// Replace the stored snapshot with `store`
    fn save(&self, store: &NoteStore) -> Result<()>;

    /// Check if the backing file exists
    fn exists(&self) -> bool;

    /// Create an empty store if none exists yet. Returns true when a file was created.
    fn initialize(&self) -> Result<bool>;
}

/// YAML file implementation of NoteRepository
#[derive(Debug, Clone)]
pub struct YamlRepository {
    path: PathBuf,
}

impl YamlRepository {
    /// Create a repository backed by the given file
    pub fn new(path: PathBuf) -> Self {
        YamlRepository { path }
    }

    /// Parse YAML text into a store, validating its shape
    pub fn parse(&self, contents: &str) -> Result<NoteStore> {
        let value: Value = serde_yaml::from_str(contents)
            .map_err(|e| NtzError::storage(&self.path, format!("malformed YAML: {}", e)))?;

        let mapping = match value {
            Value::Null => return Ok(NoteStore::new()),
            Value::Mapping(mapping) => mapping,
            _ => {
                return Err(NtzError::storage(
                    &self.path,
                    "top level must map category names to note lists",
                ))
            }
        };

        let mut entries = Vec::with_capacity(mapping.len());
        for (key, value) in mapping {
            let name = match key {
                Value::String(name) => name,
                other => {
                    return Err(NtzError::storage(
                        &self.path,
                        format!("category name must be text, found {:?}", other),
                    ))
                }
            };
            let notes = self.parse_notes(&name, value)?;
            entries.push(CategoryEntry::new(name, notes));
        }

        Ok(NoteStore::from_entries(entries))
    }

    fn parse_notes(&self, category: &str, value: Value) -> Result<Vec<String>> {
        match value {
            Value::Null => Ok(Vec::new()),
            Value::Sequence(items) => items
                .into_iter()
                .map(|item| match item {
                    Value::String(note) => Ok(note),
                    other => Err(NtzError::storage(
                        &self.path,
                        format!("note in '{}' must be text, found {:?}", category, other),
                    )),
                })
                .collect(),
            _ => Err(NtzError::storage(
                &self.path,
                format!("category '{}' must hold a list of notes", category),
            )),
        }
    }

    /// Render a store as YAML text
    pub fn render(&self, store: &NoteStore) -> Result<String> {
        let mut mapping = Mapping::new();
        for entry in store {
            let notes = entry.notes.iter().cloned().map(Value::String).collect();
            mapping.insert(Value::String(entry.name.clone()), Value::Sequence(notes));
        }

        serde_yaml::to_string(&Value::Mapping(mapping))
            .map_err(|e| NtzError::storage(&self.path, format!("cannot serialize notes: {}", e)))
    }

    /// Write through a sibling temp file so the target is never half-written
    fn write_atomic(&self, contents: &str) -> std::io::Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent)?;
            }
        }

        let tmp_name = format!(
            "{}.ntz-tmp-{}",
            self.path
                .file_name()
                .and_then(|s| s.to_str())
                .unwrap_or("note_storage.yaml"),
            std::process::id()
        );
        let tmp_path = self.path.with_file_name(tmp_name);

        if let Err(e) = fs::write(&tmp_path, contents) {
            let _ = fs::remove_file(&tmp_path);
            return Err(e);
        }

        // rename does not replace an existing file on Windows
        #[cfg(windows)]
        if self.path.exists() {
            fs::remove_file(&self.path)?;
        }

        fs::rename(&tmp_path, &self.path).inspect_err(|_| {
            let _ = fs::remove_file(&tmp_path);
        })
    }
}

impl NoteRepository for YamlRepository {
    fn path(&self) -> &Path {
        &self.path
    }

    fn load(&self) -> Result<NoteStore> {
        let contents = fs::read_to_string(&self.path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                NtzError::storage(&self.path, "file not found")
            } else {
                NtzError::storage(&self.path, e)
            }
        })?;

        let store = self.parse(&contents)?;
        debug!(
            "event=store_load path={} categories={}",
            self.path.display(),
            store.list_categories().len()
        );
        Ok(store)
    }

    fn save(&self, store: &NoteStore) -> Result<()> {
        let contents = self.render(store)?;
        self.write_atomic(&contents)
            .map_err(|e| NtzError::storage(&self.path, e))?;

        debug!(
            "event=store_save path={} categories={}",
            self.path.display(),
            store.list_categories().len()
        );
        Ok(())
    }

    fn exists(&self) -> bool {
        self.path.is_file()
    }

    fn initialize(&self) -> Result<bool> {
        if self.path.exists() {
            return Ok(false);
        }

        self.save(&NoteStore::new())?;
        info!("event=store_init path={}", self.path.display());
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn repo_in(temp: &TempDir) -> YamlRepository {
        YamlRepository::new(temp.path().join("note_storage.yaml"))
    }

    fn notes(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_load_missing_file() {
        let temp = TempDir::new().unwrap();
        let repo = repo_in(&temp);

        assert!(!repo.exists());
        match repo.load().unwrap_err() {
            NtzError::StorageUnavailable { reason, .. } => assert!(reason.contains("not found")),
            other => panic!("Expected StorageUnavailable, got {:?}", other),
        }
    }

    #[test]
    fn test_load_keeps_file_order() {
        let temp = TempDir::new().unwrap();
        let repo = repo_in(&temp);
        fs::write(
            repo.path(),
            "groceries:\n  - milk\n  - eggs\nother:\n  - remember to call back\n",
        )
        .unwrap();

        let store = repo.load().unwrap();
        assert_eq!(store.list_categories(), vec!["groceries", "other"]);
        assert_eq!(store.list_notes("groceries").unwrap(), &notes(&["milk", "eggs"])[..]);
    }

    #[test]
    fn test_empty_document_is_empty_store() {
        let temp = TempDir::new().unwrap();
        let repo = repo_in(&temp);
        fs::write(repo.path(), "").unwrap();

        assert!(repo.load().unwrap().is_empty());
    }

    #[test]
    fn test_null_category_is_empty_list() {
        let temp = TempDir::new().unwrap();
        let repo = repo_in(&temp);
        fs::write(repo.path(), "todo:\n").unwrap();

        let store = repo.load().unwrap();
        assert!(store.list_notes("todo").unwrap().is_empty());
    }

    #[test]
    fn test_malformed_shapes_rejected() {
        let temp = TempDir::new().unwrap();
        let repo = repo_in(&temp);

        for bad in [
            "- just\n- a list\n",
            "work: finish report\n",
            "work:\n  - nested: map\n",
            "42:\n  - numeric key\n",
            "work: [unclosed\n",
        ] {
            fs::write(repo.path(), bad).unwrap();
            assert!(
                matches!(repo.load(), Err(NtzError::StorageUnavailable { .. })),
                "expected rejection of {:?}",
                bad
            );
        }
    }

    #[test]
    fn test_save_then_load_round_trip() {
        let temp = TempDir::new().unwrap();
        let repo = repo_in(&temp);
        let store = NoteStore::from_entries(vec![
            CategoryEntry::new("zeta", notes(&["last", "yes", "123"])),
            CategoryEntry::new("alpha", Vec::new()),
            CategoryEntry::new("other", notes(&["call back: tomorrow"])),
        ]);

        repo.save(&store).unwrap();
        assert_eq!(repo.load().unwrap(), store);
    }

    #[test]
    fn test_empty_store_round_trip() {
        let temp = TempDir::new().unwrap();
        let repo = repo_in(&temp);

        repo.save(&NoteStore::new()).unwrap();
        assert!(repo.load().unwrap().is_empty());
    }

    #[test]
    fn test_save_leaves_no_temp_files() {
        let temp = TempDir::new().unwrap();
        let repo = repo_in(&temp);
        repo.save(&NoteStore::new()).unwrap();

        let names: Vec<_> = fs::read_dir(temp.path())
            .unwrap()
            .map(|e| e.unwrap().file_name())
            .collect();
        assert_eq!(names.len(), 1);
    }

    #[test]
    fn test_initialize_does_not_overwrite() {
        let temp = TempDir::new().unwrap();
        let repo = repo_in(&temp);

        assert!(repo.initialize().unwrap());
        assert!(repo.exists());

        fs::write(repo.path(), "work:\n  - keep me\n").unwrap();
        assert!(!repo.initialize().unwrap());
        assert_eq!(repo.load().unwrap().list_notes("work").unwrap().len(), 1);
    }
}
