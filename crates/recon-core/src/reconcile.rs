//! Merge, removal and reset semantics over nested mappings
//!
//! All functions take the existing mapping by reference and build a new
//! one, so the caller keeps the original for comparison.

use recon_content::{Mapping, Value};

use crate::state::State;

/// Apply `state` to `existing`.
///
/// `desired` is consulted for [`State::Present`], `removal` for
/// [`State::Absent`]; [`State::Empty`] ignores both.
pub fn reconcile(existing: &Mapping, state: State, desired: &Mapping, removal: &Mapping) -> Mapping {
    match state {
        State::Present => merge(existing, desired),
        State::Absent => remove(existing, removal),
        State::Empty => Mapping::new(),
    }
}

/// Deep merge of `desired` into `existing`.
///
/// Where both sides hold a mapping the merge recurses. Any other desired
/// value, sequences included, replaces the existing one wholesale. Keys
/// only present in `existing` are kept.
pub fn merge(existing: &Mapping, desired: &Mapping) -> Mapping {
    let mut result = existing.clone();
    for (key, wanted) in desired {
        let merged = match (result.get(key), wanted) {
            (Some(Value::Object(current)), Value::Object(nested)) => {
                Value::Object(merge(current, nested))
            }
            _ => wanted.clone(),
        };
        result.insert(key.clone(), merged);
    }
    result
}

/// Remove the keys named by `removal` from `existing`.
///
/// A mapping under a removal key recurses into the existing mapping and
/// removes only the nested keys it names. Any other value is a marker:
/// the whole existing entry goes, whatever the marker's value. Keys
/// missing from `existing` are ignored, as are nested removals aimed at a
/// non-mapping value.
pub fn remove(existing: &Mapping, removal: &Mapping) -> Mapping {
    let mut result = existing.clone();
    for (key, marker) in removal {
        match (result.get(key), marker) {
            (None, _) => {}
            (Some(Value::Object(current)), Value::Object(nested)) => {
                let pruned = remove(current, nested);
                result.insert(key.clone(), Value::Object(pruned));
            }
            (Some(_), Value::Object(_)) => {}
            (Some(_), _) => {
                result.remove(key);
            }
        }
    }
    result
}
