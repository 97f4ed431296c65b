use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;

use super::{validate_key, KeyValueStore, StorageError};

/// One `<key>.json` file per key under a root directory.
#[derive(Debug, Clone)]
pub struct FileStore {
    root: PathBuf,
}

impl FileStore {
    /// Open (and create if needed) a store rooted at `root`.
    pub fn open(root: impl Into<PathBuf>) -> Result<Self, StorageError> {
        let root = root.into();
        fs::create_dir_all(&root)?;
        Ok(Self { root })
    }

    fn path_for(&self, key: &str) -> Result<PathBuf, StorageError> {
        validate_key(key)?;
        Ok(self.root.join(format!("{key}.json")))
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        let path = self.path_for(key)?;
        match fs::read_to_string(&path) {
            Ok(content) => Ok(Some(content)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let path = self.path_for(key)?;
        let temp_path = self.root.join(format!("{key}.json.tmp"));

        // Atomic write
        fs::write(&temp_path, value)?;
        fs::rename(&temp_path, &path)?;
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        let path = self.path_for(key)?;
        match fs::remove_file(&path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_get_remove() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::open(dir.path()).unwrap();

        assert_eq!(store.get("taxi_config").unwrap(), None);
        store.set("taxi_config", "{\"address\":\"x\"}").unwrap();
        assert_eq!(store.get("taxi_config").unwrap().as_deref(), Some("{\"address\":\"x\"}"));
        assert!(dir.path().join("taxi_config.json").exists());
        assert!(!dir.path().join("taxi_config.json.tmp").exists());

        store.remove("taxi_config").unwrap();
        store.remove("taxi_config").unwrap();
        assert_eq!(store.get("taxi_config").unwrap(), None);
    }

    #[test]
    fn test_rejects_path_like_keys() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::open(dir.path()).unwrap();
        assert!(matches!(store.set("../escape", "x"), Err(StorageError::InvalidKey(_))));
        assert!(matches!(store.get(""), Err(StorageError::InvalidKey(_))));
    }

    #[test]
    fn test_open_creates_nested_root() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("a").join("b");
        let store = FileStore::open(&nested).unwrap();
        assert!(nested.is_dir());

        store.set("cloud_settings", "{}").unwrap();
        assert!(nested.join("cloud_settings.json").exists());
    }
}
