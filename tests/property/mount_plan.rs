//! Property-based tests for mount planning

use dosboxx_launch::mount::{DISK_IMAGE_EXTENSIONS, OPTICAL_IMAGE_EXTENSIONS};
use dosboxx_launch::{Drive, GameLocation, MountDirective, MountPlanner};
use proptest::prelude::*;

fn extension() -> impl Strategy<Value = String> {
    prop_oneof![
        prop::sample::select(OPTICAL_IMAGE_EXTENSIONS.to_vec()).prop_map(str::to_string),
        prop::sample::select(DISK_IMAGE_EXTENSIONS.to_vec()).prop_map(str::to_string),
        prop::sample::select(vec!["ISO", "IMG", "exe", "bat", "txt", "Cue"])
            .prop_map(str::to_string),
    ]
}

fn file_names() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec(("[a-z]{1,8}", extension()), 0..12).prop_map(|files| {
        files
            .into_iter()
            .enumerate()
            .map(|(i, (stem, ext))| format!("{}{}.{}", stem, i, ext))
            .collect()
    })
}

fn has_ext(name: &str, set: &[&str]) -> bool {
    name.rsplit_once('.')
        .map(|(_, ext)| set.contains(&ext))
        .unwrap_or(false)
}

proptest! {
    #[test]
    fn test_one_directive_per_drive(names in file_names()) {
        let location = GameLocation::from_names("/roms/game.pc", &names);
        let plan = MountPlanner::default().plan(&location);

        let d_count = plan.directives().filter(|d| d.drive() == Drive::D).count();
        let c_count = plan.directives().filter(|d| d.drive() == Drive::C).count();
        prop_assert!(d_count <= 1);
        prop_assert_eq!(c_count, 1);
    }

    #[test]
    fn test_fallback_iff_no_disk_image(names in file_names()) {
        let location = GameLocation::from_names("/roms/game.pc", &names);
        let plan = MountPlanner::default().plan(&location);

        let any_disk = names.iter().any(|n| has_ext(n, DISK_IMAGE_EXTENSIONS));
        prop_assert_eq!(plan.is_directory_fallback(), !any_disk);

        let any_optical = names.iter().any(|n| has_ext(n, OPTICAL_IMAGE_EXTENSIONS));
        prop_assert_eq!(plan.optical().is_some(), any_optical);
    }

    #[test]
    fn test_last_qualifying_entry_wins(names in file_names()) {
        let location = GameLocation::from_names("/roms/game.pc", &names);
        let plan = MountPlanner::default().plan(&location);

        let last_optical = names.iter().rev().find(|n| has_ext(n, OPTICAL_IMAGE_EXTENSIONS));
        let planned_optical = plan
            .optical()
            .map(|d| d.path().file_name().unwrap().to_str().unwrap().to_string());
        prop_assert_eq!(planned_optical.as_ref(), last_optical);

        if let MountDirective::BootDiskImage { path } = plan.system() {
            let last_disk = names.iter().rev().find(|n| has_ext(n, DISK_IMAGE_EXTENSIONS));
            let planned_disk = path.file_name().and_then(|n| n.to_str()).map(str::to_string);
            prop_assert_eq!(planned_disk.as_ref(), last_disk);
        }
    }

    #[test]
    fn test_planning_is_deterministic(names in file_names()) {
        let location = GameLocation::from_names("/roms/game.pc", &names);
        let planner = MountPlanner::default();
        prop_assert_eq!(planner.plan(&location), planner.plan(&location));
    }
}
