//! Terminal output formatting
//!
//! Rendering of game progress and pretty-printing helpers.

pub mod display;
pub mod formatters;

pub use display::{AsciiRenderer, Renderer, print_banner, print_inventory, print_play_stats};
