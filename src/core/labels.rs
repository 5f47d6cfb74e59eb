//! Label-translation lookup tables.
//!
//! The source datasets carry coded category values (Eurostat series keys,
//! transliterated sector names, English category names). Their Greek display
//! forms live in `assets/labels.json`, embedded at compile time and parsed
//! once; the tables are process-wide constants.

use std::sync::LazyLock;

use indexmap::IndexMap;

use crate::error::{DashError, DashResult};

/// Fixed mapping from raw coded string to display string.
///
/// Insertion order is preserved so legends follow the declared order.
pub type LabelLookup = IndexMap<String, String>;

static LABELS: LazyLock<IndexMap<String, LabelLookup>> = LazyLock::new(|| {
    serde_json::from_str(include_str!("../../assets/labels.json"))
        .expect("embedded labels.json is well-formed")
});

/// Returns the named lookup table.
pub fn lookup(name: &str) -> DashResult<&'static LabelLookup> {
    LABELS
        .get(name)
        .ok_or_else(|| DashError::InvalidData(format!("unknown label lookup `{name}`")))
}

/// Names of all embedded lookup tables, in asset order.
pub fn names() -> impl Iterator<Item = &'static str> {
    LABELS.keys().map(String::as_str)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_lookups_are_present() {
        let names: Vec<&str> = names().collect();
        for expected in [
            "expenditure",
            "income",
            "hicp_components",
            "current_account",
            "fdi_sectors",
            "vaccine_doses",
        ] {
            assert!(names.contains(&expected), "missing lookup `{expected}`");
        }
    }

    #[test]
    fn unknown_lookup_is_an_error() {
        assert!(lookup("no-such-table").is_err());
    }

    #[test]
    fn display_forms_are_never_keys() {
        // Relabel idempotence relies on lookups never mapping a display
        // form onward to something else.
        for name in names() {
            let table = lookup(name).expect("known lookup");
            for display in table.values() {
                assert!(
                    !table.contains_key(display),
                    "lookup `{name}` maps display form `{display}`"
                );
            }
        }
    }
}
