//! Stored snapshot records.
//!
//! A stored record keeps every category list as a JSON string inside the
//! record itself, with a `null` new side when the later snapshot could not
//! read the category. This module turns those records into
//! [`SnapshotDiffItem`]s and back.

use anyhow::{Context, Result};
use log::{debug, info};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use snapshot_diff::{AbiDiff, Category, SnapshotDiffItem, VersionedList, VersionedValue};
use std::path::Path;

/// A category list pair as persisted: JSON text on both sides
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoredList {
    pub old: String,
    pub new: Option<String>,
}

/// One package's record in a stored snapshot comparison
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoredSnapshotItem {
    pub package_name: String,
    #[serde(default)]
    pub deleted: bool,
    #[serde(default)]
    pub new_installed: bool,
    pub label_diff: VersionedValue<String>,
    pub version_name_diff: VersionedValue<String>,
    pub version_code_diff: VersionedValue<i64>,
    pub target_api_diff: VersionedValue<i16>,
    pub abi_diff: AbiDiff,
    pub native_libs_diff: StoredList,
    pub services_diff: StoredList,
    pub activities_diff: StoredList,
    pub receivers_diff: StoredList,
    pub providers_diff: StoredList,
}

impl StoredSnapshotItem {
    /// Decode the embedded category lists
    pub fn decode(&self) -> Result<SnapshotDiffItem> {
        let package = self.package_name.as_str();
        Ok(SnapshotDiffItem {
            package_name: self.package_name.clone(),
            deleted: self.deleted,
            newly_installed: self.new_installed,
            label: self.label_diff.clone(),
            version_name: self.version_name_diff.clone(),
            version_code: self.version_code_diff.clone(),
            target_api: self.target_api_diff.clone(),
            abi: self.abi_diff,
            native_libs: decode_list(&self.native_libs_diff, package, Category::NativeLibs)?,
            services: decode_list(&self.services_diff, package, Category::Services)?,
            activities: decode_list(&self.activities_diff, package, Category::Activities)?,
            receivers: decode_list(&self.receivers_diff, package, Category::Receivers)?,
            providers: decode_list(&self.providers_diff, package, Category::Providers)?,
        })
    }

    /// Build the stored form of an item
    pub fn encode(item: &SnapshotDiffItem) -> Result<Self> {
        let package = item.package_name.as_str();
        Ok(Self {
            package_name: item.package_name.clone(),
            deleted: item.deleted,
            new_installed: item.newly_installed,
            label_diff: item.label.clone(),
            version_name_diff: item.version_name.clone(),
            version_code_diff: item.version_code.clone(),
            target_api_diff: item.target_api.clone(),
            abi_diff: item.abi,
            native_libs_diff: encode_list(&item.native_libs, package, Category::NativeLibs)?,
            services_diff: encode_list(&item.services, package, Category::Services)?,
            activities_diff: encode_list(&item.activities, package, Category::Activities)?,
            receivers_diff: encode_list(&item.receivers, package, Category::Receivers)?,
            providers_diff: encode_list(&item.providers, package, Category::Providers)?,
        })
    }
}

fn decode_list<T: DeserializeOwned>(
    list: &StoredList,
    package: &str,
    category: Category,
) -> Result<VersionedList<T>> {
    let old = serde_json::from_str(&list.old)
        .with_context(|| format!("Failed to decode old {} of {}", category, package))?;
    let new = match &list.new {
        Some(new) => Some(
            serde_json::from_str(new)
                .with_context(|| format!("Failed to decode new {} of {}", category, package))?,
        ),
        None => {
            debug!("{} has no new {}", package, category);
            None
        }
    };
    Ok(VersionedList::new(old, new))
}

fn encode_list<T: Serialize>(
    list: &VersionedList<T>,
    package: &str,
    category: Category,
) -> Result<StoredList> {
    let encode = |items: &Vec<T>| {
        serde_json::to_string(items)
            .with_context(|| format!("Failed to encode {} of {}", category, package))
    };
    Ok(StoredList {
        old: encode(&list.old)?,
        new: list.new.as_ref().map(encode).transpose()?,
    })
}

/// Parse a stored comparison: a JSON array of records
pub fn parse_snapshot(json: &str) -> Result<Vec<SnapshotDiffItem>> {
    let stored: Vec<StoredSnapshotItem> =
        serde_json::from_str(json).context("Failed to parse snapshot records")?;
    stored.iter().map(StoredSnapshotItem::decode).collect()
}

/// Read and parse a stored comparison from disk
pub fn load_snapshot(path: &Path) -> Result<Vec<SnapshotDiffItem>> {
    info!("Loading snapshot records from {}", path.display());
    let json = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    let items = parse_snapshot(&json)
        .with_context(|| format!("Invalid snapshot file {}", path.display()))?;
    info!("Loaded {} snapshot records", items.len());
    Ok(items)
}

/// Write items to disk in the stored form
pub fn save_snapshot(path: &Path, items: &[SnapshotDiffItem]) -> Result<()> {
    let stored = items
        .iter()
        .map(StoredSnapshotItem::encode)
        .collect::<Result<Vec<_>>>()?;
    let json = serde_json::to_string_pretty(&stored).context("Failed to encode snapshot records")?;
    std::fs::write(path, json).with_context(|| format!("Failed to write {}", path.display()))?;
    Ok(())
}
