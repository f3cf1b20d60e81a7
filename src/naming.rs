//! Name rules shared by status tags and project tags.
//!
//! Both collections store names trimmed and compare them trimmed and
//! lowercased.

/// Returns the trimmed name, or `None` when nothing is left.
pub(crate) fn trimmed(raw: &str) -> Option<&str> {
    let value = raw.trim();
    (!value.is_empty()).then_some(value)
}

/// Trims and lowercases a raw name for comparison.
pub(crate) fn normalize(value: &str) -> String {
    value.trim().to_lowercase()
}
