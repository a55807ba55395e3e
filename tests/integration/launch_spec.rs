//! Integration tests for launch spec generation from a real game directory

use dosboxx_launch::launch::CONFIG_HOME_VAR;
use dosboxx_launch::{hotkeys_context, GameLocation, Launcher};
use std::fs;

use crate::integration::GameFixture;

/// Generate the launch for a fixture and return its arguments after the
/// executable and `-exit`, without the trailing `-fastbioslogo -conf <path>`.
fn mount_args(fixture: &GameFixture) -> Vec<String> {
    let launcher = Launcher::from_config(&fixture.config());
    let spec = launcher
        .generate(&GameLocation::read(&fixture.game_dir).unwrap())
        .unwrap();
    let args: Vec<String> = spec
        .args()
        .iter()
        .map(|arg| arg.to_str().unwrap().to_string())
        .collect();

    assert_eq!(args[0], "/usr/bin/dosbox-x");
    assert_eq!(args[1], "-exit");
    let tail = &args[args.len() - 3..];
    assert_eq!(
        tail,
        &[
            "-fastbioslogo".to_string(),
            "-conf".to_string(),
            fixture.scratch_config().display().to_string(),
        ]
    );
    args[2..args.len() - 3].to_vec()
}

#[test]
fn test_directory_fallback_without_optical() {
    let fixture = GameFixture::new(&["GAME.EXE", "dosbox.bat"]);
    assert_eq!(
        mount_args(&fixture),
        vec![
            "-c".to_string(),
            format!("mount c {}", fixture.game_dir.display()),
            "-c".to_string(),
            "c:".to_string(),
            "-c".to_string(),
            "dosbox.bat".to_string(),
        ]
    );
}

#[test]
fn test_directory_fallback_with_optical() {
    let fixture = GameFixture::new(&["GAME.EXE", "cd.iso"]);
    assert_eq!(
        mount_args(&fixture),
        vec![
            "-c".to_string(),
            format!("imgmount d {}", fixture.game_dir.join("cd.iso").display()),
            "-c".to_string(),
            format!("mount c {}", fixture.game_dir.display()),
            "-c".to_string(),
            "c:".to_string(),
            "-c".to_string(),
            "dosbox.bat".to_string(),
        ]
    );
}

#[test]
fn test_disk_image_without_optical() {
    let fixture = GameFixture::new(&["win95.vhd"]);
    assert_eq!(
        mount_args(&fixture),
        vec![
            "-c".to_string(),
            format!("imgmount c {}", fixture.game_dir.join("win95.vhd").display()),
            "-c".to_string(),
            "boot c:".to_string(),
        ]
    );
}

#[test]
fn test_disk_image_with_optical() {
    let fixture = GameFixture::new(&["cd.iso", "hdd.img"]);
    assert_eq!(
        mount_args(&fixture),
        vec![
            "-c".to_string(),
            format!("imgmount d {}", fixture.game_dir.join("cd.iso").display()),
            "-c".to_string(),
            format!("imgmount c {}", fixture.game_dir.join("hdd.img").display()),
            "-c".to_string(),
            "boot c:".to_string(),
        ]
    );
}

#[test]
fn test_generate_writes_scratch_and_sets_config_home() {
    let fixture = GameFixture::new(&["GAME.EXE"]);
    let launcher = Launcher::from_config(&fixture.config());

    let spec = launcher
        .generate(&GameLocation::read(&fixture.game_dir).unwrap())
        .unwrap();

    assert_eq!(spec.env().len(), 1);
    assert_eq!(
        spec.env().get(CONFIG_HOME_VAR).map(|v| v.as_os_str()),
        Some(fixture.configs_root.as_os_str())
    );
    assert_eq!(
        fs::read_to_string(fixture.scratch_config()).unwrap(),
        "[sdl]\noutput = opengl\n\n"
    );
}

#[test]
fn test_plan_has_no_file_side_effects() {
    let fixture = GameFixture::new(&["hdd.img"]);
    let launcher = Launcher::from_config(&fixture.config());

    let plan = launcher.plan(&GameLocation::read(&fixture.game_dir).unwrap());

    assert!(!plan.is_directory_fallback());
    assert!(!fixture.scratch_config().exists());
}

#[cfg(target_os = "linux")]
#[test]
fn test_non_utf8_file_names_are_mounted_by_their_bytes() {
    use std::ffi::OsStr;
    use std::os::unix::ffi::OsStrExt;

    let fixture = GameFixture::new(&[]);
    let name = OsStr::from_bytes(b"disque\xe9.iso");
    fs::write(fixture.game_dir.join(name), b"").unwrap();
    let launcher = Launcher::from_config(&fixture.config());

    let spec = launcher
        .generate(&GameLocation::read(&fixture.game_dir).unwrap())
        .unwrap();

    let mut expected = b"imgmount d ".to_vec();
    expected.extend_from_slice(fixture.game_dir.join(name).as_os_str().as_bytes());
    assert_eq!(spec.args()[3].as_bytes(), expected.as_slice());
    assert_eq!(launcher.paths().scratch_config, fixture.scratch_config());
}

#[test]
fn test_launcher_hotkeys() {
    let fixture = GameFixture::new(&[]);
    let launcher = Launcher::from_config(&fixture.config());
    assert_eq!(launcher.hotkeys_context(), hotkeys_context());
}
