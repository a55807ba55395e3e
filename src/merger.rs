//! Emulator config merging
//!
//! Builds the scratch config the emulator runs with. The selected source (a
//! per-game config or the system default) is copied to the scratch path, parsed
//! from there, given the forced override, and written back. The emulator
//! rewrites its config on exit, so it only ever sees the scratch copy.

use crate::config::ForcedOverride;
use crate::document::ConfigDocument;
use crate::error::LaunchError;
use crate::game::GameLocation;
use std::ffi::OsString;
use std::fs::{self, File, FileTimes};
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// Applies the forced override to the selected source config and persists
/// the result at the scratch path.
#[derive(Debug, Clone)]
pub struct ConfigMerger {
    forced: ForcedOverride,
}

impl ConfigMerger {
    pub fn new(forced: ForcedOverride) -> Self {
        Self { forced }
    }

    /// The per-game config when `<game root>/<per_game_config>` is a regular
    /// file, otherwise the system default.
    pub fn select_source(
        game: &GameLocation,
        base_config: &Path,
        per_game_config: &str,
    ) -> PathBuf {
        let game_config = game.root().join(per_game_config);
        if game_config.is_file() {
            game_config
        } else {
            if game_config.exists() {
                warn!(
                    path = %game_config.display(),
                    "Per-game config is not a regular file, using the system default"
                );
            }
            base_config.to_path_buf()
        }
    }

    /// Merge the applicable source into `scratch` and return the written
    /// document. The source file is never written.
    pub fn merge(
        &self,
        game: &GameLocation,
        base_config: &Path,
        per_game_config: &str,
        scratch: &Path,
    ) -> Result<ConfigDocument, LaunchError> {
        let source = Self::select_source(game, base_config, per_game_config);

        let mut document = if source.exists() {
            info!(
                source = %source.display(),
                scratch = %scratch.display(),
                "Using emulator config source"
            );
            if source != scratch {
                copy_atomic(&source, scratch)?;
            }
            let text = fs::read_to_string(scratch).map_err(|e| LaunchError::ParseFailed {
                path: source.clone(),
                line: 0,
                message: e.to_string(),
            })?;
            ConfigDocument::parse(&text).map_err(|e| LaunchError::ParseFailed {
                path: source.clone(),
                line: e.line,
                message: e.message,
            })?
        } else {
            info!(
                source = %source.display(),
                "No emulator config found, starting from an empty document"
            );
            ConfigDocument::new()
        };

        let section = document.ensure_section(&self.forced.section);
        if let Some(previous) = section.get(&self.forced.key) {
            if previous != self.forced.value {
                debug!(
                    section = %self.forced.section,
                    key = %self.forced.key,
                    previous = %previous,
                    forced = %self.forced.value,
                    "Overriding config value"
                );
            }
        }
        section.set(self.forced.key.clone(), self.forced.value.clone());

        write_atomic(scratch, document.to_string().as_bytes())?;
        debug!(scratch = %scratch.display(), "Wrote scratch config");

        Ok(document)
    }
}

/// Sibling temporary path: `<file name>.tmp` in the same directory, so the
/// final rename never crosses filesystems.
fn temp_path(path: &Path) -> PathBuf {
    let mut name = path
        .file_name()
        .map(|n| n.to_os_string())
        .unwrap_or_else(|| OsString::from("scratch"));
    name.push(".tmp");
    path.with_file_name(name)
}

fn create_parent(path: &Path) -> std::io::Result<()> {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => fs::create_dir_all(parent),
        _ => Ok(()),
    }
}

/// Copy `from` to `to` keeping permissions and access/modification times.
/// `to` is replaced atomically; the temporary file is removed on failure.
fn copy_atomic(from: &Path, to: &Path) -> Result<(), LaunchError> {
    let copy_error = |source| LaunchError::CopyFailed {
        from: from.to_path_buf(),
        to: to.to_path_buf(),
        source,
    };

    create_parent(to).map_err(copy_error)?;
    let temp = temp_path(to);

    let result = fs::copy(from, &temp)
        .and_then(|_| preserve_times(from, &temp))
        .and_then(|_| fs::rename(&temp, to));
    if let Err(e) = result {
        let _ = fs::remove_file(&temp);
        return Err(copy_error(e));
    }

    debug!(from = %from.display(), to = %to.display(), "Copied config to scratch path");
    Ok(())
}

fn preserve_times(from: &Path, to: &Path) -> std::io::Result<()> {
    let metadata = fs::metadata(from)?;
    let mut times = FileTimes::new().set_modified(metadata.modified()?);
    if let Ok(accessed) = metadata.accessed() {
        times = times.set_accessed(accessed);
    }
    // The copy carries the source's permissions, which may be read-only.
    File::open(to)?.set_times(times)
}

/// Replace `path` with `contents` atomically; the temporary file is removed
/// on failure.
fn write_atomic(path: &Path, contents: &[u8]) -> Result<(), LaunchError> {
    let write_error = |source| LaunchError::WriteFailed {
        path: path.to_path_buf(),
        source,
    };

    create_parent(path).map_err(write_error)?;
    let temp = temp_path(path);

    let result = fs::write(&temp, contents).and_then(|_| fs::rename(&temp, path));
    if let Err(e) = result {
        let _ = fs::remove_file(&temp);
        return Err(write_error(e));
    }
    Ok(())
}
