//! Separator pairing: `|1 1|2 2|3 ... N|`.
//!
//! Tab `i` shows partition `i` on its front and partition `i - 1` on its back.
//! The first tab's back and the last tab's front face outside the collection
//! and carry the boundary face.

use std::sync::Arc;

use crate::separators::models::{Card, Face, SeparatorPair};

/// Builds the N+1 separator pairs for N cards. Returns nothing for an empty list.
pub fn generate_separator_pairs(cards: &[Arc<Card>]) -> Vec<SeparatorPair> {
    if cards.is_empty() {
        return Vec::new();
    }

    let face_at = |i: Option<usize>| match i.and_then(|i| cards.get(i)) {
        Some(card) => Face::Card(Arc::clone(card)),
        None => Face::Boundary,
    };

    (0..=cards.len())
        .map(|position| SeparatorPair {
            position,
            front: face_at(Some(position)),
            back: face_at(position.checked_sub(1)),
        })
        .collect()
}
