//! Duplicate detection over text elements.

use std::collections::hash_map::{Entry, HashMap};

use crate::collation::Collation;
use crate::segment::elements;

/// One sighted element, spelled as it first appeared.
#[derive(Debug)]
struct ElementRecord {
    spelling: String,
    repeated: bool,
}

/// Returns the text elements that occur more than once in `value`,
/// compared case-insensitively under `collation`.
///
/// Each duplicate appears once, spelled as its first occurrence (`"aA"`
/// yields `["a"]`, `"Aa"` yields `["A"]`) and ordered by where that
/// first occurrence sits in the input.
pub fn duplicate_elements(value: &str, collation: Collation) -> Vec<String> {
    // Fold key -> index into `records`. Rescanning earlier elements on
    // every sighting would be quadratic on duplicate-heavy input; the
    // table keeps each lookup O(1) amortized.
    let mut seen: HashMap<String, usize> = HashMap::new();
    let mut records: Vec<ElementRecord> = Vec::new();

    for element in elements(value) {
        match seen.entry(collation.fold_key(element)) {
            Entry::Occupied(entry) => {
                records[*entry.get()].repeated = true;
            }
            Entry::Vacant(entry) => {
                entry.insert(records.len());
                records.push(ElementRecord {
                    spelling: element.to_string(),
                    repeated: false,
                });
            }
        }
    }

    records
        .into_iter()
        .filter(|record| record.repeated)
        .map(|record| record.spelling)
        .collect()
}
