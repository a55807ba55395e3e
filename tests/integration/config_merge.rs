//! Integration tests for scratch config merging

use dosboxx_launch::config::ForcedOverride;
use dosboxx_launch::{ConfigMerger, GameLocation, LaunchError};
use std::fs;

use crate::integration::test_utils::write_file;
use crate::integration::GameFixture;

fn merge(fixture: &GameFixture, merger: &ConfigMerger) -> Result<(), LaunchError> {
    let game = GameLocation::read(&fixture.game_dir).unwrap();
    merger
        .merge(
            &game,
            &fixture.base_config(),
            "dosbox.cfg",
            &fixture.scratch_config(),
        )
        .map(|_| ())
}

#[test]
fn test_merge_is_idempotent() {
    let fixture = GameFixture::new(&["GAME.EXE"]);
    fixture.write_base_config(
        "# system defaults\n[sdl]\nfullscreen = true\noutput = surface\n\n[cpu]\ncycles = auto\n",
    );
    let merger = ConfigMerger::new(ForcedOverride::default());

    merge(&fixture, &merger).unwrap();
    let first = fs::read(fixture.scratch_config()).unwrap();
    merge(&fixture, &merger).unwrap();
    let second = fs::read(fixture.scratch_config()).unwrap();

    assert_eq!(first, second);
}

#[test]
fn test_forced_override_wins_over_source() {
    let fixture = GameFixture::new(&[]);
    fixture.write_base_config("[sdl]\noutput = direct3d\n");

    merge(&fixture, &ConfigMerger::new(ForcedOverride::default())).unwrap();

    let scratch = fs::read_to_string(fixture.scratch_config()).unwrap();
    assert_eq!(scratch, "[sdl]\noutput = opengl\n\n");
}

#[test]
fn test_missing_source_is_not_an_error() {
    let fixture = GameFixture::new(&[]);

    merge(&fixture, &ConfigMerger::new(ForcedOverride::default())).unwrap();

    let scratch = fs::read_to_string(fixture.scratch_config()).unwrap();
    assert_eq!(scratch, "[sdl]\noutput = opengl\n\n");
}

#[test]
fn test_source_file_is_never_modified() {
    let fixture = GameFixture::new(&[]);
    let original = "[sdl]\noutput = surface\n; keep me\n[dosbox]\nmachine = svga_s3\n";
    fixture.write_base_config(original);

    merge(&fixture, &ConfigMerger::new(ForcedOverride::default())).unwrap();

    assert_eq!(
        fs::read_to_string(fixture.base_config()).unwrap(),
        original
    );
}

#[test]
fn test_game_config_takes_precedence_over_system_config() {
    let fixture = GameFixture::new(&[]);
    fixture.write_base_config("[dosbox]\nmachine = svga_s3\n");
    write_file(&fixture.game_config(), "[dosbox]\nmachine = tandy\n");

    merge(&fixture, &ConfigMerger::new(ForcedOverride::default())).unwrap();

    let scratch = fs::read_to_string(fixture.scratch_config()).unwrap();
    assert_eq!(
        scratch,
        "[dosbox]\nmachine = tandy\n\n[sdl]\noutput = opengl\n\n"
    );
}

#[test]
fn test_previous_scratch_contents_are_replaced() {
    let fixture = GameFixture::new(&[]);
    write_file(&fixture.scratch_config(), "[stale]\nvalue = 1\n");

    merge(&fixture, &ConfigMerger::new(ForcedOverride::default())).unwrap();

    let scratch = fs::read_to_string(fixture.scratch_config()).unwrap();
    assert_eq!(scratch, "[sdl]\noutput = opengl\n\n");
}

#[test]
fn test_case_sensitive_keys_survive_merge() {
    let fixture = GameFixture::new(&[]);
    fixture.write_base_config("[sdl]\nOutput = surface\n");

    merge(&fixture, &ConfigMerger::new(ForcedOverride::default())).unwrap();

    let scratch = fs::read_to_string(fixture.scratch_config()).unwrap();
    assert_eq!(scratch, "[sdl]\nOutput = surface\noutput = opengl\n\n");
}

#[test]
fn test_invalid_source_surfaces_path() {
    let fixture = GameFixture::new(&[]);
    fixture.write_base_config("output = opengl\n");

    let err = merge(&fixture, &ConfigMerger::new(ForcedOverride::default())).unwrap_err();
    match err {
        LaunchError::ParseFailed { path, line, .. } => {
            assert_eq!(path, fixture.base_config());
            assert_eq!(line, 1);
        }
        other => panic!("unexpected error: {}", other),
    }
}

#[test]
fn test_override_value_can_vary() {
    let fixture = GameFixture::new(&[]);
    fixture.write_base_config("[sdl]\noutput = opengl\n");

    merge(
        &fixture,
        &ConfigMerger::new(ForcedOverride::new("sdl", "output", "surface")),
    )
    .unwrap();

    let scratch = fs::read_to_string(fixture.scratch_config()).unwrap();
    assert_eq!(scratch, "[sdl]\noutput = surface\n\n");
}
