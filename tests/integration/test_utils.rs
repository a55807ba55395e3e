//! Shared test utilities for integration tests
//!
//! Provides a game directory plus configs tree in a temp dir, and serialized
//! access to the XDG environment variables the settings loader reads.

use dosboxx_launch::config::LauncherConfig;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tempfile::TempDir;

/// Global mutex to serialize XDG environment variable access across all tests
static XDG_ENV_MUTEX: Mutex<()> = Mutex::new(());

/// Environment variable state to restore after test
struct EnvState {
    home: Option<String>,
    xdg_config_home: Option<String>,
}

impl EnvState {
    fn capture() -> Self {
        Self {
            home: std::env::var("HOME").ok(),
            xdg_config_home: std::env::var("XDG_CONFIG_HOME").ok(),
        }
    }

    fn restore(self) {
        if let Some(orig) = self.home {
            std::env::set_var("HOME", orig);
        } else {
            std::env::remove_var("HOME");
        }

        if let Some(orig) = self.xdg_config_home {
            std::env::set_var("XDG_CONFIG_HOME", orig);
        } else {
            std::env::remove_var("XDG_CONFIG_HOME");
        }
    }
}

/// Run `f` with HOME and XDG_CONFIG_HOME pointing into `test_dir`, restoring
/// the original values afterwards. XDG_CONFIG_HOME is `<test_dir>/config`.
pub fn with_xdg_env<F, R>(test_dir: &TempDir, f: F) -> R
where
    F: FnOnce() -> R,
{
    let _guard = XDG_ENV_MUTEX.lock().unwrap_or_else(|e| e.into_inner());
    let env_state = EnvState::capture();

    let test_config_home = test_dir.path().join("config");
    let test_home = test_dir.path().join("home");
    fs::create_dir_all(&test_config_home).unwrap();
    fs::create_dir_all(&test_home).unwrap();

    std::env::set_var("HOME", test_home.to_str().unwrap());
    std::env::set_var("XDG_CONFIG_HOME", test_config_home.to_str().unwrap());

    let result = f();

    env_state.restore();

    result
}

/// A game directory and a configs root, both under one temp dir.
pub struct GameFixture {
    pub temp: TempDir,
    pub game_dir: PathBuf,
    pub configs_root: PathBuf,
}

impl GameFixture {
    /// Create the game directory with empty files named `names`.
    pub fn new(names: &[&str]) -> Self {
        let temp = TempDir::new().unwrap();
        let game_dir = temp.path().join("roms").join("game.pc");
        let configs_root = temp.path().join("configs");
        fs::create_dir_all(&game_dir).unwrap();
        fs::create_dir_all(&configs_root).unwrap();
        for name in names {
            fs::write(game_dir.join(name), b"").unwrap();
        }
        Self {
            temp,
            game_dir,
            configs_root,
        }
    }

    pub fn config(&self) -> LauncherConfig {
        let mut config = LauncherConfig::default();
        config.paths.configs_root = self.configs_root.clone();
        config
    }

    pub fn base_config(&self) -> PathBuf {
        self.configs_root.join("dosbox").join("dosboxx.conf")
    }

    pub fn scratch_config(&self) -> PathBuf {
        self.configs_root.join("dosbox").join("dosboxx-custom.conf")
    }

    pub fn game_config(&self) -> PathBuf {
        self.game_dir.join("dosbox.cfg")
    }

    pub fn write_base_config(&self, contents: &str) {
        write_file(&self.base_config(), contents);
    }

    /// Settings TOML pointing the launcher at this fixture's configs root.
    pub fn write_settings(&self) -> PathBuf {
        let path = self.temp.path().join("settings.toml");
        write_file(
            &path,
            &format!(
                "[paths]\nconfigs_root = {:?}\nemulator = \"/usr/bin/dosbox-x\"\n",
                self.configs_root.to_str().unwrap()
            ),
        );
        path
    }
}

pub fn write_file(path: &Path, contents: &str) {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(path, contents).unwrap();
}
