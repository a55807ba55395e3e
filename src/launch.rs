//! Launch specification
//!
//! Assembles the emulator command line and environment from a mount plan and
//! the scratch config path, and wires config merging and mount planning
//! together for a single launch.

use crate::config::{LaunchPaths, LauncherConfig};
use crate::error::LaunchError;
use crate::game::GameLocation;
use crate::hotkeys::{self, HotkeyMap};
use crate::merger::ConfigMerger;
use crate::mount::{MountPlan, MountPlanner};
use serde::ser::{Error as _, SerializeMap, SerializeStruct};
use serde::{Serialize, Serializer};
use std::collections::BTreeMap;
use std::ffi::{OsStr, OsString};
use std::path::{Path, PathBuf};
use tracing::info;

/// Environment variable pointing the emulator's config-home lookup at the
/// shared configs directory.
pub const CONFIG_HOME_VAR: &str = "XDG_CONFIG_HOME";

/// Always passed right after the executable.
pub const EXIT_FLAG: &str = "-exit";

/// Trailing flags: skip the BIOS logo, then the config file.
pub const FAST_BIOS_LOGO_FLAG: &str = "-fastbioslogo";
pub const CONF_FLAG: &str = "-conf";

/// Ordered command tokens and the environment to run them with. Tokens are
/// OS strings so file names that are not UTF-8 reach the emulator intact.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LaunchSpec {
    args: Vec<OsString>,
    env: BTreeMap<String, OsString>,
}

impl LaunchSpec {
    /// Executable first, then its arguments.
    pub fn args(&self) -> &[OsString] {
        &self.args
    }

    pub fn env(&self) -> &BTreeMap<String, OsString> {
        &self.env
    }

    pub fn program(&self) -> &OsStr {
        &self.args[0]
    }
}

/// Serializes as `{"args": [...], "env": {...}}`; fails on tokens that are
/// not valid UTF-8 instead of replacing their bytes.
impl Serialize for LaunchSpec {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        struct Env<'a>(&'a BTreeMap<String, OsString>);

        impl Serialize for Env<'_> {
            fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                let mut map = serializer.serialize_map(Some(self.0.len()))?;
                for (name, value) in self.0 {
                    map.serialize_entry(name, utf8(value).map_err(S::Error::custom)?)?;
                }
                map.end()
            }
        }

        let args = self
            .args
            .iter()
            .map(|arg| utf8(arg))
            .collect::<Result<Vec<_>, _>>()
            .map_err(S::Error::custom)?;

        let mut spec = serializer.serialize_struct("LaunchSpec", 2)?;
        spec.serialize_field("args", &args)?;
        spec.serialize_field("env", &Env(&self.env))?;
        spec.end()
    }
}

/// Borrow `value` as UTF-8 or report it unchanged.
pub fn utf8(value: &OsStr) -> Result<&str, LaunchError> {
    value
        .to_str()
        .ok_or_else(|| LaunchError::NotUnicode(value.to_os_string()))
}

/// Builds [`LaunchSpec`]s for one emulator install.
#[derive(Debug, Clone)]
pub struct LaunchSpecBuilder {
    emulator: PathBuf,
    config_home: PathBuf,
    planner: MountPlanner,
}

impl LaunchSpecBuilder {
    pub fn new(emulator: impl Into<PathBuf>, config_home: impl Into<PathBuf>) -> Self {
        Self {
            emulator: emulator.into(),
            config_home: config_home.into(),
            planner: MountPlanner::default(),
        }
    }

    pub fn with_planner(mut self, planner: MountPlanner) -> Self {
        self.planner = planner;
        self
    }

    pub fn planner(&self) -> &MountPlanner {
        &self.planner
    }

    pub fn build(&self, game: &GameLocation, scratch_config: &Path) -> LaunchSpec {
        let plan = self.planner.plan(game);
        self.build_from_plan(&plan, scratch_config)
    }

    /// Token order: executable, `-exit`, D-drive tokens, C-drive tokens,
    /// `-fastbioslogo`, `-conf <scratch>`.
    pub fn build_from_plan(&self, plan: &MountPlan, scratch_config: &Path) -> LaunchSpec {
        let mut args = vec![self.emulator.clone().into_os_string(), EXIT_FLAG.into()];
        args.extend(plan.to_args());
        args.extend([
            FAST_BIOS_LOGO_FLAG.into(),
            CONF_FLAG.into(),
            scratch_config.as_os_str().to_os_string(),
        ]);

        let mut env = BTreeMap::new();
        env.insert(
            CONFIG_HOME_VAR.to_string(),
            self.config_home.clone().into_os_string(),
        );

        LaunchSpec { args, env }
    }

    pub fn hotkeys_context(&self) -> HotkeyMap {
        hotkeys::hotkeys_context()
    }
}

/// Merges the emulator config and builds the launch for a game.
#[derive(Debug, Clone)]
pub struct Launcher {
    paths: LaunchPaths,
    merger: ConfigMerger,
    builder: LaunchSpecBuilder,
}

impl Launcher {
    pub fn from_config(config: &LauncherConfig) -> Self {
        let paths = config.paths.resolve();
        let builder = LaunchSpecBuilder::new(&paths.emulator, &paths.config_home)
            .with_planner(config.mount.planner());
        Self {
            merger: ConfigMerger::new(config.forced.clone()),
            builder,
            paths,
        }
    }

    pub fn paths(&self) -> &LaunchPaths {
        &self.paths
    }

    /// Mount plan only; touches no files.
    pub fn plan(&self, game: &GameLocation) -> MountPlan {
        self.builder.planner().plan(game)
    }

    /// Write the scratch config, then build the launch spec pointing at it.
    pub fn generate(&self, game: &GameLocation) -> Result<LaunchSpec, LaunchError> {
        self.merger.merge(
            game,
            &self.paths.base_config,
            &self.paths.game_config,
            &self.paths.scratch_config,
        )?;
        let spec = self.builder.build(game, &self.paths.scratch_config);
        info!(
            game = %game.root().display(),
            args = spec.args().len(),
            "Built launch spec"
        );
        Ok(spec)
    }

    pub fn hotkeys_context(&self) -> HotkeyMap {
        self.builder.hotkeys_context()
    }
}
