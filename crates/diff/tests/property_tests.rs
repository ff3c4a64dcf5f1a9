use proptest::prelude::*;
use snapshot_diff::{
    compare_components, compare_components_with, compare_native_libs, match_components,
    CategoryDiff, DiffOptions, NativeLib, SnapshotDiffItem, VersionedList,
};

// Small alphabets so that exact and simple-name collisions actually happen
fn component_name() -> impl Strategy<Value = String> {
    ("[abc]{1,2}", "[XYZ]").prop_map(|(package, class)| format!("{}.{}", package, class))
}

fn component_list() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec(component_name(), 0..8)
}

fn lib_list() -> impl Strategy<Value = Vec<NativeLib>> {
    prop::collection::vec(
        ("lib[abc]\\.so", 0u64..4).prop_map(|(name, size)| NativeLib::new(name, size)),
        0..6,
    )
}

// A list together with a reordering of the same names
fn list_and_shuffled() -> impl Strategy<Value = (Vec<String>, Vec<String>)> {
    component_list().prop_flat_map(|list| (Just(list.clone()), Just(list).prop_shuffle()))
}

fn diff_options() -> impl Strategy<Value = DiffOptions> {
    prop_oneof![
        Just(DiffOptions::default()),
        Just(DiffOptions::order_independent()),
    ]
}

proptest! {
    #[test]
    fn components_have_no_self_diff(list in component_list(), options in diff_options()) {
        let diff = compare_components_with(&list, Some(list.as_slice()), &options);
        prop_assert_eq!(diff, CategoryDiff::default());
    }

    #[test]
    fn libs_have_no_self_diff(list in lib_list()) {
        prop_assert_eq!(compare_native_libs(&list, Some(list.as_slice())), CategoryDiff::default());
    }

    #[test]
    fn absence_is_always_removal(list in component_list(), libs in lib_list()) {
        prop_assert_eq!(compare_components(&list, None), CategoryDiff::removed_only());
        prop_assert_eq!(compare_native_libs(&libs, None), CategoryDiff::removed_only());
    }

    #[test]
    fn added_and_removed_are_symmetric(
        a in component_list(),
        b in component_list(),
        options in diff_options()
    ) {
        let forward = compare_components_with(&a, Some(b.as_slice()), &options);
        let backward = compare_components_with(&b, Some(a.as_slice()), &options);

        prop_assert_eq!(forward.added, backward.removed);
        prop_assert_eq!(forward.removed, backward.added);
        prop_assert_eq!(forward.changed, backward.changed);
        prop_assert_eq!(forward.moved, backward.moved);
    }

    #[test]
    fn components_never_report_changes(a in component_list(), b in component_list()) {
        prop_assert!(!compare_components(&a, Some(b.as_slice())).changed);
    }

    #[test]
    fn aggregate_is_or_of_categories(
        libs in (lib_list(), lib_list()),
        services in (component_list(), component_list()),
        activities in (component_list(), component_list())
    ) {
        let item = SnapshotDiffItem {
            native_libs: VersionedList::new(libs.0, Some(libs.1)),
            services: VersionedList::new(services.0, Some(services.1)),
            activities: VersionedList::new(activities.0, Some(activities.1)),
            ..SnapshotDiffItem::new("com.app")
        };

        let categories = item.category_diffs(&DiffOptions::default());
        let total = item.aggregate();

        prop_assert_eq!(total.added, categories.iter().any(|(_, d)| d.added));
        prop_assert_eq!(total.removed, categories.iter().any(|(_, d)| d.removed));
        prop_assert_eq!(total.changed, categories.iter().any(|(_, d)| d.changed));
        prop_assert_eq!(total.moved, categories.iter().any(|(_, d)| d.moved));
    }

    #[test]
    fn order_independent_matching_ignores_input_order(
        old in list_and_shuffled(),
        new in list_and_shuffled()
    ) {
        let options = DiffOptions::order_independent();
        let original = match_components(&old.0, &new.0, &options);
        let reordered = match_components(&old.1, &new.1, &options);

        prop_assert_eq!(&original.moved, &reordered.moved);
        prop_assert_eq!(&original.added, &reordered.added);
        prop_assert_eq!(&original.removed, &reordered.removed);
        prop_assert_eq!(original.summary(), reordered.summary());

        // Exact matches keep the new snapshot's order, so compare them as sets
        let mut unchanged = original.unchanged.clone();
        let mut unchanged_reordered = reordered.unchanged.clone();
        unchanged.sort_unstable();
        unchanged_reordered.sort_unstable();
        prop_assert_eq!(unchanged, unchanged_reordered);
    }
}
