//! Shared CLI presentation utilities.
//!
//! Format-only: no domain transforms here.

pub mod outfit_display;
pub mod tables;

pub use outfit_display::{item_line, print_items_table, print_recommendation, seasons_label};
pub use tables::{format_optional, print_separator, short_id, truncate_string};
