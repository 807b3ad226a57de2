//! Domain types used throughout the pipeline.
//!
//! This module defines:
//!
//! - the submission request (`SubmitRequest`)
//! - parsed report structures (`Score`, `BulletItem`, `ProfileSummary`,
//!   `Recommendations`, `EvaluationReport`)
//! - the on-disk export schema (`ReportFile`)

pub mod types;

pub use types::*;
