//! Rendering of parsed evaluation reports.
//!
//! We keep formatting code in one place so:
//! - the parser stays pure and testable
//! - output changes are localized (important for future snapshot tests)

pub mod format;

pub use format::*;
