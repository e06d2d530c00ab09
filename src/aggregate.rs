//! Skill aggregation - grouping, ordering and sorting of skill records.
//!
//! The grouped view buckets records by their trimmed `category` and sorts
//! each bucket by name; which buckets are shown, and in what order, is
//! controlled by a configured allow-list of category names. The flat view
//! ignores categories entirely and orders the whole list by proficiency
//! percent, descending. Both paths are pure functions over the loaded
//! content; nothing here touches the filesystem.

use std::collections::HashMap;

use itertools::Itertools;

use crate::content::SkillRecord;

/// Skill records bucketed by trimmed category name.
///
/// Derived from the flat record list, never stored. Bucket iteration order
/// is unspecified; display order comes from [`select_display_categories`].
#[derive(Debug, Clone, Default)]
pub struct GroupedSkills {
    buckets: HashMap<String, Vec<SkillRecord>>,
}

impl GroupedSkills {
    /// Look up the bucket for a category, if any valid record referenced it.
    #[must_use]
    pub fn get(&self, category: &str) -> Option<&[SkillRecord]> {
        self.buckets.get(category).map(Vec::as_slice)
    }

    /// Number of non-empty categories.
    #[must_use]
    pub fn len(&self) -> usize {
        self.buckets.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }

    /// Iterate category names, in unspecified order.
    pub fn categories(&self) -> impl Iterator<Item = &str> {
        self.buckets.keys().map(String::as_str)
    }
}

/// The trimmed category of a record, or `None` when the record carries no
/// usable category and must stay out of the grouped view.
fn display_category(record: &SkillRecord) -> Option<&str> {
    record
        .category
        .as_deref()
        .map(str::trim)
        .filter(|c| !c.is_empty())
}

/// Bucket records by trimmed category.
///
/// Records without a usable category are dropped from the result; they are
/// a per-record condition, not an error, since the data source is a local
/// hand-maintained file. Each bucket is stably sorted by `name` ascending
/// (byte-wise comparison); records with equal names keep input order.
#[must_use]
pub fn group_by_category(records: &[SkillRecord]) -> GroupedSkills {
    let mut buckets: HashMap<String, Vec<SkillRecord>> = records
        .iter()
        .filter_map(|record| {
            display_category(record).map(|category| (category.to_string(), record.clone()))
        })
        .into_group_map();

    for bucket in buckets.values_mut() {
        bucket.sort_by(|a, b| a.name.cmp(&b.name));
    }

    GroupedSkills { buckets }
}

/// Select and order the categories to display.
///
/// Walks `order` in sequence and keeps only the names that have a non-empty
/// bucket. Categories present in the data but absent from `order` are not
/// shown; new categories must be added to the configured order before they
/// appear. The output is always a subsequence of `order`.
#[must_use]
pub fn select_display_categories(
    grouped: &GroupedSkills,
    order: &[String],
) -> Vec<(String, Vec<SkillRecord>)> {
    order
        .iter()
        .filter_map(|category| {
            grouped
                .get(category)
                .filter(|bucket| !bucket.is_empty())
                .map(|bucket| (category.clone(), bucket.to_vec()))
        })
        .collect()
}

/// Grouped view in one call: bucket, sort, then apply the display order.
#[must_use]
pub fn grouped_view(records: &[SkillRecord], order: &[String]) -> Vec<(String, Vec<SkillRecord>)> {
    select_display_categories(&group_by_category(records), order)
}

/// Flat view: the whole list ordered by `percent` descending.
///
/// Stable on ties and indifferent to `category`, so uncategorized records
/// still appear here.
#[must_use]
pub fn sort_by_percent_desc(records: &[SkillRecord]) -> Vec<SkillRecord> {
    let mut sorted = records.to_vec();
    sorted.sort_by(|a, b| {
        b.percent
            .partial_cmp(&a.percent)
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    sorted
}

/// Flat view ordered by `name` ascending (byte-wise).
#[must_use]
pub fn sort_by_name(records: &[SkillRecord]) -> Vec<SkillRecord> {
    let mut sorted = records.to_vec();
    sorted.sort_by(|a, b| a.name.cmp(&b.name));
    sorted
}
