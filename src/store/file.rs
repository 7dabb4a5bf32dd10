use super::Store;
use anyhow::{Context, Result};
use atomic_write_file::AtomicWriteFile;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs::{self, File};
use std::path::{Path, PathBuf};

const STORE_VERSION: u32 = 1;

/// Get the default store file path (~/.config/car-scout/store.json)
pub fn get_store_path() -> Result<PathBuf> {
    Ok(crate::config::get_config_dir()?.join("store.json"))
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct StoreDocument {
    version: u32,
    #[serde(default)]
    updated_at: Option<DateTime<Utc>>,
    #[serde(default)]
    entries: BTreeMap<String, Vec<String>>,
}

impl StoreDocument {
    fn new() -> Self {
        Self {
            version: STORE_VERSION,
            updated_at: None,
            entries: BTreeMap::new(),
        }
    }
}

/// Store backed by a JSON file. Every `set` rewrites the file atomically.
#[derive(Debug)]
pub struct FileStore {
    path: PathBuf,
    doc: StoreDocument,
}

impl FileStore {
    /// Open the store at `path`
    ///
    /// If the file doesn't exist, starts empty; nothing is written until the
    /// first `set`. If the file exists but has an unsupported version, returns
    /// an error.
    pub fn open(path: &Path) -> Result<Self> {
        if !path.exists() {
            log::debug!("No store at {}, starting empty", path.display());
            return Ok(Self {
                path: path.to_path_buf(),
                doc: StoreDocument::new(),
            });
        }

        let file = File::open(path)
            .with_context(|| format!("Failed to open store file at {}", path.display()))?;

        let doc: StoreDocument =
            serde_json::from_reader(file).context("Failed to load store")?;

        if doc.version != STORE_VERSION {
            anyhow::bail!("Unsupported store version: {}", doc.version);
        }

        Ok(Self {
            path: path.to_path_buf(),
            doc,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// When the store was last written, if ever
    pub fn updated_at(&self) -> Option<DateTime<Utc>> {
        self.doc.updated_at
    }

    fn save(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent).with_context(|| {
                    format!("Failed to create store directory at {}", parent.display())
                })?;
            }
        }

        let mut file = AtomicWriteFile::open(&self.path).with_context(|| {
            format!("Failed to open atomic write file at {}", self.path.display())
        })?;

        serde_json::to_writer_pretty(&mut file, &self.doc).context("Failed to serialize store")?;

        file.commit().context("Failed to save store")?;

        Ok(())
    }
}

impl Store for FileStore {
    fn get(&self, key: &str) -> Result<Vec<String>> {
        Ok(self.doc.entries.get(key).cloned().unwrap_or_default())
    }

    fn set(&mut self, key: &str, ids: &[String]) -> Result<()> {
        self.doc.entries.insert(key.to_string(), ids.to_vec());
        self.doc.updated_at = Some(Utc::now());
        self.save()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_open_missing_file_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::open(&dir.path().join("store.json")).unwrap();
        assert!(store.get("favorites").unwrap().is_empty());
        assert!(store.updated_at().is_none());
        // Opening alone must not create the file
        assert!(!dir.path().join("store.json").exists());
    }

    #[test]
    fn test_set_and_reopen_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("store.json");

        let mut store = FileStore::open(&path).unwrap();
        store
            .set("favorites", &["vw-golf".to_string(), "renault-zoe".to_string()])
            .unwrap();
        store.set("comparison", &["bmw-320d".to_string()]).unwrap();

        let reopened = FileStore::open(&path).unwrap();
        assert_eq!(
            reopened.get("favorites").unwrap(),
            vec!["vw-golf", "renault-zoe"]
        );
        assert_eq!(reopened.get("comparison").unwrap(), vec!["bmw-320d"]);
        assert!(reopened.updated_at().is_some());
    }

    #[test]
    fn test_unsupported_version_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("store.json");
        fs::write(&path, r#"{"version": 2, "entries": {}}"#).unwrap();

        let err = FileStore::open(&path).unwrap_err();
        assert!(err.to_string().contains("Unsupported store version: 2"));
    }

    #[test]
    fn test_corrupt_file_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("store.json");
        fs::write(&path, "not json").unwrap();

        let err = FileStore::open(&path).unwrap_err();
        assert!(err.to_string().contains("Failed to load store"));
    }
}
