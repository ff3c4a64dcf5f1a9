use pretty_assertions::assert_eq;
use snapshot_diff::{
    compare_native_libs, compare_native_libs_with, match_native_libs, CategoryDiff, DiffOptions,
    DuplicateKeys, NativeLib,
};

#[test]
fn test_identical_libs() {
    let libs = vec![NativeLib::new("libfoo.so", 100), NativeLib::new("libbar.so", 2048)];

    assert_eq!(
        compare_native_libs(&libs, Some(libs.as_slice())),
        CategoryDiff::default()
    );
}

#[test]
fn test_size_change() {
    let old = vec![NativeLib::new("lib.so", 100)];
    let new = vec![NativeLib::new("lib.so", 200)];

    let matching = match_native_libs(&old, &new, &DiffOptions::default());
    assert_eq!(matching.changed.len(), 1);
    assert_eq!(matching.changed[0].old.size, 100);
    assert_eq!(matching.changed[0].new.size, 200);

    assert_eq!(
        matching.summary(),
        CategoryDiff {
            changed: true,
            ..CategoryDiff::default()
        }
    );
}

#[test]
fn test_absent_new_libs() {
    let old = vec![NativeLib::new("lib.so", 100)];

    assert_eq!(compare_native_libs(&old, None), CategoryDiff::removed_only());
    assert_eq!(compare_native_libs(&[], None), CategoryDiff::removed_only());
}

#[test]
fn test_added_and_removed_libs() {
    let old = vec![NativeLib::new("libold.so", 10), NativeLib::new("libkeep.so", 20)];
    let new = vec![NativeLib::new("libkeep.so", 20), NativeLib::new("libnew.so", 30)];

    let matching = match_native_libs(&old, &new, &DiffOptions::default());

    assert_eq!(matching.unchanged, vec![&new[0]]);
    assert_eq!(matching.added, vec![&new[1]]);
    assert_eq!(matching.removed, vec![&old[0]]);
    assert_eq!(
        matching.summary(),
        CategoryDiff {
            added: true,
            removed: true,
            ..CategoryDiff::default()
        }
    );
}

#[test]
fn test_libs_never_move() {
    // Same file name is the identity for libraries; nothing else pairs them
    let old = vec![NativeLib::new("arm64/libfoo.so", 10)];
    let new = vec![NativeLib::new("x86/libfoo.so", 10)];

    let diff = compare_native_libs(&old, Some(new.as_slice()));

    assert!(!diff.moved);
    assert!(diff.added);
    assert!(diff.removed);
}

#[test]
fn test_duplicate_libs() {
    let old = vec![NativeLib::new("lib.so", 1)];
    let new = vec![NativeLib::new("lib.so", 1), NativeLib::new("lib.so", 1)];

    let multiset = compare_native_libs(&old, Some(new.as_slice()));
    assert_eq!(
        multiset,
        CategoryDiff {
            added: true,
            ..CategoryDiff::default()
        }
    );

    let options = DiffOptions {
        duplicates: DuplicateKeys::Set,
        ..DiffOptions::default()
    };
    let set = compare_native_libs_with(&old, Some(new.as_slice()), &options);
    assert_eq!(set, CategoryDiff::default());
}
