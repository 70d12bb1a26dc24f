//! Durable storage slot for the challenge snapshot.

use std::path::{Path, PathBuf};

use crate::error::HabitGridResult;

/// Storage key used by the original browser app. Kept so exported
/// localStorage snapshots can be dropped in as-is.
pub const DEFAULT_STORAGE_KEY: &str = "frossen-februar-data";

/// A single named slot holding the latest serialized snapshot.
pub trait Storage {
    /// Current contents of the slot, or `None` if nothing was ever written.
    fn read(&self) -> HabitGridResult<Option<String>>;

    /// Replace the slot's contents with `contents`.
    fn write(&mut self, contents: &str) -> HabitGridResult<()>;
}

/// Slot backed by a JSON file on disk.
#[derive(Debug, Clone)]
pub struct FileStorage {
    path: PathBuf,
}

impl FileStorage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        FileStorage { path: path.into() }
    }

    /// `<dir>/<key>.json`
    pub fn in_dir(dir: &Path, key: &str) -> Self {
        Self::new(dir.join(format!("{key}.json")))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Storage for FileStorage {
    fn read(&self) -> HabitGridResult<Option<String>> {
        if !self.path.exists() {
            return Ok(None);
        }
        Ok(Some(std::fs::read_to_string(&self.path)?))
    }

    fn write(&mut self, contents: &str) -> HabitGridResult<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let mut temp = self.path.clone().into_os_string();
        temp.push(".tmp");
        let temp = PathBuf::from(temp);

        std::fs::write(&temp, contents)?;
        std::fs::rename(&temp, &self.path)?;
        Ok(())
    }
}

/// In-memory slot. Counts writes so callers can observe persistence.
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    contents: Option<String>,
    writes: usize,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_contents(contents: impl Into<String>) -> Self {
        MemoryStorage {
            contents: Some(contents.into()),
            writes: 0,
        }
    }

    pub fn contents(&self) -> Option<&str> {
        self.contents.as_deref()
    }

    pub fn writes(&self) -> usize {
        self.writes
    }
}

impl Storage for MemoryStorage {
    fn read(&self) -> HabitGridResult<Option<String>> {
        Ok(self.contents.clone())
    }

    fn write(&mut self, contents: &str) -> HabitGridResult<()> {
        self.contents = Some(contents.to_string());
        self.writes += 1;
        Ok(())
    }
}
