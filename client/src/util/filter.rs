//! Case-insensitive list narrowing for the filter boxes.

#[cfg(test)]
#[path = "filter_test.rs"]
mod filter_test;

/// `true` when `haystack` contains `needle`, ignoring case. An empty needle
/// matches everything.
pub fn includes_ci(haystack: &str, needle: &str) -> bool {
    let needle = needle.trim();
    needle.is_empty() || haystack.to_lowercase().contains(&needle.to_lowercase())
}

/// Keep the items whose label matches `needle`.
pub fn filter_items<T: Clone>(items: &[T], needle: &str, label: impl Fn(&T) -> String) -> Vec<T> {
    items
        .iter()
        .filter(|item| includes_ci(&label(item), needle))
        .cloned()
        .collect()
}
