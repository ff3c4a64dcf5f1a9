use pretty_assertions::assert_eq;
use snapshot_diff::{
    aggregate, Category, CategoryDiff, DiffIndicator, DiffOptions, NativeLib, RowStatus,
    SnapshotDiffItem, VersionedList,
};

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn updated_item() -> SnapshotDiffItem {
    SnapshotDiffItem {
        native_libs: VersionedList::same(vec![NativeLib::new("libapp.so", 4096)]),
        services: VersionedList::same(strings(&["com.app.SyncService"])),
        activities: VersionedList::same(strings(&["com.app.MainActivity"])),
        receivers: VersionedList::same(strings(&["com.app.BootReceiver"])),
        providers: VersionedList::same(strings(&["com.app.FileProvider"])),
        ..SnapshotDiffItem::new("com.app")
    }
}

#[test]
fn test_unchanged_package() {
    let item = updated_item();

    assert_eq!(item.status(), RowStatus::Updated);
    assert_eq!(aggregate(&item), CategoryDiff::default());
}

#[test]
fn test_single_category_change() {
    let mut item = updated_item();
    item.native_libs = VersionedList::new(
        vec![NativeLib::new("libapp.so", 4096)],
        Some(vec![NativeLib::new("libapp.so", 8192)]),
    );

    let diff = item.aggregate();

    assert_eq!(diff.indicators(), vec![DiffIndicator::Changed]);
}

#[test]
fn test_results_are_or_folded() {
    let mut item = updated_item();
    item.services = VersionedList::new(
        strings(&["com.app.SyncService"]),
        Some(strings(&["com.app.sync.SyncService"])),
    );
    item.receivers = VersionedList::new(strings(&["com.app.BootReceiver"]), None);
    item.providers = VersionedList::new(
        strings(&["com.app.FileProvider"]),
        Some(strings(&["com.app.FileProvider", "com.app.SearchProvider"])),
    );

    let per_category = item.category_diffs(&DiffOptions::default());
    assert_eq!(
        per_category,
        vec![
            (Category::NativeLibs, CategoryDiff::default()),
            (
                Category::Services,
                CategoryDiff {
                    moved: true,
                    ..CategoryDiff::default()
                }
            ),
            (Category::Activities, CategoryDiff::default()),
            (Category::Receivers, CategoryDiff::removed_only()),
            (
                Category::Providers,
                CategoryDiff {
                    added: true,
                    ..CategoryDiff::default()
                }
            ),
        ]
    );

    assert_eq!(
        item.aggregate(),
        CategoryDiff {
            added: true,
            removed: true,
            changed: false,
            moved: true,
        }
    );
}

#[test]
fn test_new_and_deleted_packages_are_skipped() {
    let mut item = updated_item();
    item.activities = VersionedList::new(strings(&["com.app.MainActivity"]), None);
    assert!(item.aggregate().removed);

    item.newly_installed = true;
    assert_eq!(item.status(), RowStatus::NewlyInstalled);
    assert_eq!(item.aggregate(), CategoryDiff::default());

    item.newly_installed = false;
    item.deleted = true;
    assert_eq!(item.status(), RowStatus::Deleted);
    assert_eq!(item.aggregate(), CategoryDiff::default());
}

#[test]
fn test_deleted_takes_precedence() {
    let item = SnapshotDiffItem {
        deleted: true,
        newly_installed: true,
        ..SnapshotDiffItem::new("com.app")
    };

    assert_eq!(item.status(), RowStatus::Deleted);
}

#[test]
fn test_category_display() {
    let names: Vec<String> = Category::ALL.iter().map(|c| c.to_string()).collect();

    assert_eq!(
        names,
        vec!["native libraries", "services", "activities", "receivers", "providers"]
    );
}
