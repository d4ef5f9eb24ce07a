//! Output formatting for subnet results.
//!
//! - [`json`] - single-line JSON objects
//! - [`terminal`] - `Key: value` text with optional colors

mod json;
mod terminal;

pub use json::{interface_to_json, netmask_table_to_json, result_to_json};
pub use terminal::{format_field, format_interface, format_netmask_table, format_result};
