//! Output formatting for the command line tool.
//!
//! - [`report`] - network summary and membership lines
//! - [`terminal`] - terminal output helpers with colors

mod report;
mod terminal;

pub use report::{address_preview, membership_line, network_report};
pub use terminal::format_field;
