//! Keybind-list merging with override-by-action semantics.

use crate::models::Keybind;
use std::collections::HashMap;

/// Merges `incoming` keybinds into `base`, overriding by action.
///
/// An incoming keybind whose action matches an earlier one replaces it in
/// place, keeping the original position. Everything else appends in encounter
/// order. Keybinds without an action never participate in overriding; they
/// always append, and duplicates are allowed to coexist.
#[must_use]
pub fn merge_keybinds(base: &[Keybind], incoming: &[Keybind]) -> Vec<Keybind> {
    let mut merged: Vec<Keybind> = base.to_vec();
    let mut positions: HashMap<String, usize> = merged
        .iter()
        .enumerate()
        .filter_map(|(i, kb)| kb.action.clone().map(|action| (action, i)))
        .collect();

    for keybind in incoming {
        let existing = keybind
            .action
            .as_ref()
            .and_then(|action| positions.get(action).copied());

        match existing {
            Some(position) => merged[position] = keybind.clone(),
            None => {
                if let Some(action) = keybind.action.clone() {
                    positions.insert(action, merged.len());
                }
                merged.push(keybind.clone());
            }
        }
    }

    merged
}
