use assert_fs::prelude::*;
use flac_gather::errors::GatherError;
use flac_gather::fs_ops::{CollisionPolicy, copy_flat};
use std::fs;

#[test]
fn empty_sources_is_a_no_op_without_touching_the_filesystem() {
    let td = assert_fs::TempDir::new().unwrap();
    let dest = td.path().join("never_created");

    let summary = copy_flat(&dest, &[], CollisionPolicy::default()).unwrap();
    assert_eq!(summary.copied, 0);
    assert_eq!(summary.skipped, 0);
    assert_eq!(summary.errors, 0);
    assert!(!dest.exists(), "destination must not be created for an empty batch");
}

#[test]
fn creates_destination_and_missing_ancestors() {
    let td = assert_fs::TempDir::new().unwrap();
    let src = td.child("music/track.flac");
    src.write_str("audio").unwrap();
    let dest = td.path().join("deep/nested/out");

    let sources = vec![src.path().to_path_buf()];
    let summary = copy_flat(&dest, &sources, CollisionPolicy::default()).unwrap();

    assert_eq!(summary.copied, 1);
    assert_eq!(summary.errors, 0);
    let copied = dest.join("track.flac");
    assert_eq!(fs::read_to_string(&copied).unwrap(), "audio");
}

#[test]
fn flattening_discards_source_subdirectories() {
    let td = assert_fs::TempDir::new().unwrap();
    td.child("a/x.flac").write_str("x").unwrap();
    td.child("b/y.flac").write_str("y").unwrap();
    let dest = td.path().join("out");

    let sources = vec![
        td.child("a/x.flac").path().to_path_buf(),
        td.child("b/y.flac").path().to_path_buf(),
    ];
    let summary = copy_flat(&dest, &sources, CollisionPolicy::default()).unwrap();

    assert_eq!(summary.copied, 2);
    assert_eq!(summary.errors, 0);
    assert!(dest.join("x.flac").is_file());
    assert!(dest.join("y.flac").is_file());
    assert!(!dest.join("a").exists());
}

#[test]
fn later_source_overwrites_earlier_copy_under_default_policy() {
    let td = assert_fs::TempDir::new().unwrap();
    td.child("first/same.flac").write_str("first").unwrap();
    td.child("second/same.flac").write_str("second").unwrap();
    let dest = td.path().join("out");

    let sources = vec![
        td.child("first/same.flac").path().to_path_buf(),
        td.child("second/same.flac").path().to_path_buf(),
    ];
    let summary = copy_flat(&dest, &sources, CollisionPolicy::Overwrite).unwrap();

    // Both copies count; the later one wins on disk.
    assert_eq!(summary.copied, 2);
    assert_eq!(fs::read_to_string(dest.join("same.flac")).unwrap(), "second");
}

#[test]
fn one_bad_source_does_not_abort_the_rest() {
    let td = assert_fs::TempDir::new().unwrap();
    td.child("ok1.flac").write_str("1").unwrap();
    td.child("ok2.flac").write_str("2").unwrap();
    let dest = td.path().join("out");

    let sources = vec![
        td.child("ok1.flac").path().to_path_buf(),
        td.path().join("vanished.flac"),
        td.child("ok2.flac").path().to_path_buf(),
    ];
    let summary = copy_flat(&dest, &sources, CollisionPolicy::default()).unwrap();

    assert_eq!(summary.copied, 2);
    assert_eq!(summary.errors, 1);
    assert_eq!(summary.copied + summary.skipped + summary.errors, sources.len());
    assert!(dest.join("ok1.flac").is_file());
    assert!(dest.join("ok2.flac").is_file());
    assert!(!dest.join("vanished.flac").exists());
}

#[test]
fn destination_blocked_by_regular_file_aborts_before_any_copy() {
    let td = assert_fs::TempDir::new().unwrap();
    let src = td.child("track.flac");
    src.write_str("audio").unwrap();
    let blocker = td.child("out");
    blocker.write_str("i am a file").unwrap();

    let sources = vec![src.path().to_path_buf()];
    let err = copy_flat(blocker.path(), &sources, CollisionPolicy::default()).unwrap_err();
    match err {
        GatherError::DestinationUnavailable { path, .. } => {
            assert_eq!(path, blocker.path());
        }
        other => panic!("expected DestinationUnavailable, got {other:?}"),
    }
}

#[test]
fn timestamps_are_preserved_on_the_copy() {
    let td = assert_fs::TempDir::new().unwrap();
    let src = td.child("old.flac");
    src.write_str("audio").unwrap();

    // Backdate the source well into the past.
    let old = filetime::FileTime::from_unix_time(1_000_000_000, 0);
    filetime::set_file_times(src.path(), old, old).unwrap();

    let dest = td.path().join("out");
    let sources = vec![src.path().to_path_buf()];
    let summary = copy_flat(&dest, &sources, CollisionPolicy::default()).unwrap();
    assert_eq!(summary.copied, 1);

    let meta = fs::metadata(dest.join("old.flac")).unwrap();
    let mtime = filetime::FileTime::from_last_modification_time(&meta);
    assert_eq!(mtime.unix_seconds(), 1_000_000_000);
}
