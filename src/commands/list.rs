//! Word bank inventory

use crate::core::{Category, Difficulty, MenuChoice};
use crate::wordlists::WordBank;

/// Number of words for one category and difficulty
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InventoryRow {
    pub category: Category,
    pub difficulty: Difficulty,
    pub count: usize,
}

/// Count words per category and difficulty, in menu order
#[must_use]
pub fn word_inventory(bank: &WordBank) -> Vec<InventoryRow> {
    Category::ALL
        .iter()
        .flat_map(|&category| {
            Difficulty::ALL.iter().map(move |&difficulty| InventoryRow {
                category,
                difficulty,
                count: bank.words(category, difficulty).len(),
            })
        })
        .collect()
}
