use std::fmt::Display;

use crate::snapshot::VersionedValue;

/// Separator between the old and new rendering of a changed value
pub const ARROW: &str = "→";

const PLACEHOLDER: &str = "%s";

/// Fill the `%s` placeholders of `template` from left to right.
///
/// Placeholders without a matching argument render as nothing; surplus
/// arguments are ignored.
pub fn fill_template(template: &str, args: &[&dyn Display]) -> String {
    let mut pieces = template.split(PLACEHOLDER);
    let mut args = args.iter();
    let mut result = String::with_capacity(template.len());

    if let Some(first) = pieces.next() {
        result.push_str(first);
    }
    for piece in pieces {
        if let Some(arg) = args.next() {
            result.push_str(&arg.to_string());
        }
        result.push_str(piece);
    }

    result
}

/// Render one attribute across both snapshots.
///
/// The old value alone is rendered when the diff is suppressed (the package
/// is newly installed or deleted) or nothing changed; otherwise both values
/// are rendered around [`ARROW`].
pub fn format_diff<T>(value: &VersionedValue<T>, suppress_diff: bool, template: &str) -> String
where
    T: PartialEq + Display,
{
    let old = fill_template(template, &[&value.old]);
    if suppress_diff || !value.is_changed() {
        return old;
    }
    format!("{} {} {}", old, ARROW, fill_template(template, &[&value.new]))
}

/// Render two attributes through one two-placeholder template.
///
/// The arrow form is used when either attribute changed.
pub fn format_diff_pair<A, B>(
    first: &VersionedValue<A>,
    second: &VersionedValue<B>,
    suppress_diff: bool,
    template: &str,
) -> String
where
    A: PartialEq + Display,
    B: PartialEq + Display,
{
    let old = fill_template(template, &[&first.old, &second.old]);
    if suppress_diff || !(first.is_changed() || second.is_changed()) {
        return old;
    }
    let new = fill_template(template, &[&first.new, &second.new]);
    format!("{} {} {}", old, ARROW, new)
}
