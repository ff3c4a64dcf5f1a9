use snapshot_diff::{
    match_components, DiffOptions, NativeLib, SnapshotDiffItem, VersionedList, VersionedValue,
};

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn main() {
    let item = SnapshotDiffItem {
        label: VersionedValue::same("Camera".to_string()),
        version_name: VersionedValue::new("5.1".to_string(), "5.2".to_string()),
        version_code: VersionedValue::new(51, 52),
        target_api: VersionedValue::new(33, 34),
        native_libs: VersionedList::new(
            vec![NativeLib::new("libcamera.so", 81920), NativeLib::new("libhdr.so", 4096)],
            Some(vec![NativeLib::new("libcamera.so", 90112)]),
        ),
        services: VersionedList::new(
            strings(&["com.camera.UploadService", "com.camera.SyncService"]),
            Some(strings(&["com.camera.upload.UploadService", "com.camera.SyncService"])),
        ),
        receivers: VersionedList::new(strings(&["com.camera.BootReceiver"]), None),
        ..SnapshotDiffItem::new("com.camera")
    };

    println!("{} ({})", item.title(), item.package_name);
    println!("  version: {}", item.version_text());
    println!("  target:  {}", item.target_api_text());

    // Per-category detail, then the folded result the indicators are built from
    let options = DiffOptions::default();
    for (category, diff) in item.category_diffs(&options) {
        println!("  {:<16} {:?}", category.to_string(), diff.indicators());
    }
    println!("  overall          {:?}", item.aggregate().indicators());

    // Item-level view of one category
    if let Some(new) = item.services.new_items() {
        let matching = match_components(&item.services.old, new, &options);
        for component in &matching.moved {
            println!("  moved: {} -> {}", component.old, component.new);
        }
    }
}
