//! `cv-scan` library crate.
//!
//! The binary (`cvscan`) is a thin wrapper around this library so that:
//!
//! - the report parser is testable without a live webhook
//! - modules are reusable (e.g., future GUI/daemon front-ends)
//! - code stays easy to navigate as the project grows

pub mod app;
pub mod cli;
pub mod domain;
pub mod error;
pub mod io;
pub mod parse;
pub mod report;
pub mod tui;
pub mod webhook;
