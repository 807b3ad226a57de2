//! Input/output helpers.
//!
//! - parsed-report JSON export (`export`)
//! - raw report text reading for offline parsing (`export`)

pub mod export;

pub use export::*;
