//! Terminal output formatting
//!
//! Display utilities for the interactive game and statistics blocks.

pub mod display;
pub mod formatters;

pub use display::{
    print_guess, print_header, print_instructions, print_stats_block, print_unused_letters,
};
