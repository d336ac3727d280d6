//! Command implementations

pub mod list;
pub mod play;

pub use list::{InventoryRow, word_inventory};
pub use play::{PlayOptions, PlayStats, run_play};
