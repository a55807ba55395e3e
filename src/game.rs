//! Game storage location: the directory a game lives in and its entries.

use crate::error::LaunchError;
use std::fs;
use std::path::{Path, PathBuf};

/// One entry of a game directory listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameEntry {
    path: PathBuf,
    name: String,
    extension: Option<String>,
}

impl GameEntry {
    /// Build an entry from its full path. The extension is whatever follows
    /// the last `.` of the file name, with its case untouched.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        let extension = path
            .extension()
            .map(|e| e.to_string_lossy().into_owned());
        Self {
            path,
            name,
            extension,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn extension(&self) -> Option<&str> {
        self.extension.as_deref()
    }
}

/// A game's storage directory and its entries in listing order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameLocation {
    root: PathBuf,
    entries: Vec<GameEntry>,
}

impl GameLocation {
    /// List `root`. Entries keep the order the OS returns them in.
    pub fn read(root: impl Into<PathBuf>) -> Result<Self, LaunchError> {
        let root = root.into();
        let listing = fs::read_dir(&root).map_err(|e| LaunchError::GameLocation {
            path: root.clone(),
            source: e,
        })?;

        let mut entries = Vec::new();
        for entry in listing {
            let entry = entry.map_err(|e| LaunchError::GameLocation {
                path: root.clone(),
                source: e,
            })?;
            entries.push(GameEntry::new(entry.path()));
        }

        tracing::debug!(
            root = %root.display(),
            entries = entries.len(),
            "Read game location"
        );

        Ok(Self { root, entries })
    }

    /// Build a location from file names relative to `root`, in the given order.
    pub fn from_names<I, S>(root: impl Into<PathBuf>, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<Path>,
    {
        let root = root.into();
        let entries = names
            .into_iter()
            .map(|name| GameEntry::new(root.join(name)))
            .collect();
        Self { root, entries }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn entries(&self) -> &[GameEntry] {
        &self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
