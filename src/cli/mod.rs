//! Command-line parsing for the resume evaluation client.
//!
//! The goal of this module is to keep **argument parsing** and **command dispatch**
//! separate from the submission/parsing code.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

pub mod picker;

/// Top-level CLI.
#[derive(Debug, Parser)]
#[command(name = "cvscan", version, about = "Resume evaluation client (webhook-based)")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

/// CLI subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Submit a resume to the evaluation webhook and print the report dashboard.
    Submit(SubmitArgs),
    /// Parse a saved raw report file offline (no network).
    Parse(ParseArgs),
    /// Launch the interactive TUI.
    ///
    /// This uses the same submission pipeline as `cvscan submit`, but renders
    /// the dashboard in a terminal UI using Ratatui.
    Tui(SubmitArgs),
}

/// Common options for submitting and the TUI.
#[derive(Debug, Parser, Clone)]
pub struct SubmitArgs {
    /// Resume file to upload (.pdf or .docx). Prompts a picker when omitted.
    #[arg(short = 'f', long)]
    pub file: Option<PathBuf>,

    /// Target job position, e.g. "Senior Software Engineer".
    #[arg(short = 'p', long, default_value = "")]
    pub position: String,

    /// Job description text.
    #[arg(short = 'd', long, default_value = "")]
    pub description: String,

    /// Read the job description from a file instead of `-d`.
    #[arg(long, value_name = "FILE", conflicts_with = "description")]
    pub description_file: Option<PathBuf>,

    /// Print the raw report text instead of the formatted dashboard.
    #[arg(long)]
    pub raw: bool,

    /// Export the parsed report to JSON.
    #[arg(long, value_name = "JSON")]
    pub export: Option<PathBuf>,
}

/// Options for offline parsing of a saved report.
#[derive(Debug, Parser)]
pub struct ParseArgs {
    /// Raw report text file (e.g. a saved webhook response).
    #[arg(short = 'i', long, value_name = "FILE")]
    pub input: PathBuf,

    /// Print the raw report text instead of the formatted dashboard.
    #[arg(long)]
    pub raw: bool,

    /// Export the parsed report to JSON.
    #[arg(long, value_name = "JSON")]
    pub export: Option<PathBuf>,
}
