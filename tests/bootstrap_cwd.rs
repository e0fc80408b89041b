// Kept in its own test binary: changing the working directory is process-wide.

use std::fs;

use lanister::bootstrap::{ensure_uploads_dir_in_cwd, DirAction, PlaceholderAction};

#[test]
fn bootstraps_relative_to_working_directory() {
    let root = tempfile::tempdir().unwrap();
    let previous = std::env::current_dir().unwrap();
    std::env::set_current_dir(root.path()).unwrap();

    let first = ensure_uploads_dir_in_cwd();
    let second = ensure_uploads_dir_in_cwd();

    std::env::set_current_dir(previous).unwrap();

    let first = first.unwrap();
    assert_eq!(first.directory, DirAction::Created);
    assert_eq!(first.placeholder_action, PlaceholderAction::Created);
    assert!(second.unwrap().is_noop());

    let placeholder = root.path().join("public").join("uploads").join(".gitkeep");
    assert_eq!(fs::metadata(placeholder).unwrap().len(), 0);
}
