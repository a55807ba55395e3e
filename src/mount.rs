//! Mount planning
//!
//! Decides how a game's media is attached to the emulator's drives:
//! an optical image on D, and on C either a bootable disk image or the game
//! directory itself with its boot script.
//!
//! Classification is by exact-case extension. When several entries qualify
//! for the same drive, the last one in listing order wins.

use crate::game::GameLocation;
use serde::Serialize;
use std::ffi::OsString;
use std::fmt;
use std::path::{Path, PathBuf};

/// Optical image extensions mounted on drive D.
pub const OPTICAL_IMAGE_EXTENSIONS: &[&str] = &["iso", "cue", "mdf", "chd"];

/// Hard-disk image extensions mounted and booted on drive C.
pub const DISK_IMAGE_EXTENSIONS: &[&str] = &["img", "qcow2", "vhd", "nhd", "hdi"];

/// Script run on C when the game directory itself is mounted.
pub const BOOT_SCRIPT: &str = "dosbox.bat";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Drive {
    C,
    D,
}

impl fmt::Display for Drive {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Drive::C => write!(f, "C"),
            Drive::D => write!(f, "D"),
        }
    }
}

/// A single drive attachment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum MountDirective {
    /// Attach an optical image at D.
    OpticalImage { path: PathBuf },
    /// Attach a disk image at C and boot from it.
    BootDiskImage { path: PathBuf },
    /// Mount a host directory at C, switch to it, and run its boot script.
    HostDirectory { path: PathBuf, boot_script: String },
}

impl MountDirective {
    pub fn drive(&self) -> Drive {
        match self {
            MountDirective::OpticalImage { .. } => Drive::D,
            MountDirective::BootDiskImage { .. } | MountDirective::HostDirectory { .. } => {
                Drive::C
            }
        }
    }

    pub fn path(&self) -> &Path {
        match self {
            MountDirective::OpticalImage { path }
            | MountDirective::BootDiskImage { path }
            | MountDirective::HostDirectory { path, .. } => path,
        }
    }

    /// Emulator `-c` command tokens for this directive. Paths keep their
    /// raw bytes.
    pub fn to_args(&self) -> Vec<OsString> {
        match self {
            MountDirective::OpticalImage { path } => {
                vec!["-c".into(), command("imgmount d ", path)]
            }
            MountDirective::BootDiskImage { path } => vec![
                "-c".into(),
                command("imgmount c ", path),
                "-c".into(),
                "boot c:".into(),
            ],
            MountDirective::HostDirectory { path, boot_script } => vec![
                "-c".into(),
                command("mount c ", path),
                "-c".into(),
                "c:".into(),
                "-c".into(),
                boot_script.into(),
            ],
        }
    }
}

/// Drive attachments for one launch: at most one on D, exactly one on C.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MountPlan {
    optical: Option<MountDirective>,
    system: MountDirective,
}

impl MountPlan {
    pub fn optical(&self) -> Option<&MountDirective> {
        self.optical.as_ref()
    }

    pub fn system(&self) -> &MountDirective {
        &self.system
    }

    /// Directives in command order: D first, then C.
    pub fn directives(&self) -> impl Iterator<Item = &MountDirective> {
        self.optical.iter().chain(std::iter::once(&self.system))
    }

    /// True when no disk image was found and the directory is mounted on C.
    pub fn is_directory_fallback(&self) -> bool {
        matches!(self.system, MountDirective::HostDirectory { .. })
    }

    pub fn to_args(&self) -> Vec<OsString> {
        self.directives().flat_map(|d| d.to_args()).collect()
    }
}

/// Classifies game entries into a [`MountPlan`].
#[derive(Debug, Clone)]
pub struct MountPlanner {
    optical_extensions: Vec<String>,
    disk_extensions: Vec<String>,
    boot_script: String,
}

impl Default for MountPlanner {
    fn default() -> Self {
        Self::new(
            OPTICAL_IMAGE_EXTENSIONS.iter().map(|e| e.to_string()).collect(),
            DISK_IMAGE_EXTENSIONS.iter().map(|e| e.to_string()).collect(),
            BOOT_SCRIPT,
        )
    }
}

impl MountPlanner {
    pub fn new(
        optical_extensions: Vec<String>,
        disk_extensions: Vec<String>,
        boot_script: impl Into<String>,
    ) -> Self {
        Self {
            optical_extensions,
            disk_extensions,
            boot_script: boot_script.into(),
        }
    }

    pub fn plan(&self, game: &GameLocation) -> MountPlan {
        let optical = last_matching(game, &self.optical_extensions)
            .map(|path| MountDirective::OpticalImage { path });

        let system = match last_matching(game, &self.disk_extensions) {
            Some(path) => MountDirective::BootDiskImage { path },
            None => MountDirective::HostDirectory {
                path: game.root().to_path_buf(),
                boot_script: self.boot_script.clone(),
            },
        };

        tracing::debug!(
            root = %game.root().display(),
            optical = ?optical.as_ref().map(|d| d.path().display().to_string()),
            system = %system.path().display(),
            fallback = matches!(system, MountDirective::HostDirectory { .. }),
            "Planned drive mounts"
        );

        MountPlan { optical, system }
    }
}

fn command(prefix: &str, path: &Path) -> OsString {
    let mut command = OsString::from(prefix);
    command.push(path);
    command
}

fn last_matching(game: &GameLocation, extensions: &[String]) -> Option<PathBuf> {
    let mut found = None;
    for entry in game.entries() {
        if let Some(ext) = entry.extension() {
            if extensions.iter().any(|e| e == ext) {
                found = Some(entry.path().to_path_buf());
            }
        }
    }
    found
}
