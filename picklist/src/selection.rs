//! Selection rules shared by both modes.
//!
//! These functions never modify their inputs; they compute the value the
//! owner should store next.

use crate::option::SelectOption;

/// Check if `option` is part of a multiple-mode value.
pub fn contains(value: &[SelectOption], option: &SelectOption) -> bool {
    value.iter().any(|o| o.key() == option.key())
}

/// The value after toggling `option`: removed if present, otherwise
/// appended. Order of the remaining entries is preserved.
pub fn toggled(value: &[SelectOption], option: &SelectOption) -> Vec<SelectOption> {
    if contains(value, option) {
        without(value, option)
    } else {
        let mut next = value.to_vec();
        next.push(option.clone());
        next
    }
}

/// The value with every entry matching `option` removed.
pub fn without(value: &[SelectOption], option: &SelectOption) -> Vec<SelectOption> {
    value
        .iter()
        .filter(|o| o.key() != option.key())
        .cloned()
        .collect()
}

/// The single-mode value after picking `option`, or `None` when the pick
/// would not change anything.
pub fn replaced(value: Option<&SelectOption>, option: &SelectOption) -> Option<SelectOption> {
    match value {
        Some(current) if current.key() == option.key() => None,
        _ => Some(option.clone()),
    }
}
