//! Top-level application orchestration.
//!
//! `src/main.rs` is intentionally tiny; this module is the "real main" that:
//! - parses CLI arguments
//! - resolves the resume/job inputs
//! - submits to the webhook (or parses a saved report offline)
//! - prints the dashboard
//! - writes optional exports

use clap::Parser;

use crate::cli::{Command, ParseArgs, SubmitArgs};
use crate::domain::SubmitRequest;
use crate::error::AppError;

pub mod pipeline;

/// Entry point for the `cvscan` binary.
pub fn run() -> Result<(), AppError> {
    // We want `cvscan` and `cvscan -f resume.pdf` to behave like `cvscan tui ...`.
    //
    // Clap requires a subcommand name, so we do a small, explicit rewrite of the
    // argv list before parsing. This preserves a clean clap structure while
    // retaining the requested UX.
    let argv = rewrite_args(std::env::args().collect());
    let cli = crate::cli::Cli::parse_from(argv);

    match cli.command {
        Command::Submit(args) => handle_submit(args),
        Command::Parse(args) => handle_parse(args),
        Command::Tui(args) => crate::tui::run(args),
    }
}

fn handle_submit(args: SubmitArgs) -> Result<(), AppError> {
    let request = submit_request_from_args(&args)?;
    let client = crate::webhook::WebhookClient::from_env();
    let run = pipeline::run_submit(&client, &request)?;
    render_and_export(&run, &args, &request.job_position)
}

fn handle_parse(args: ParseArgs) -> Result<(), AppError> {
    let raw = crate::io::read_report_text(&args.input)?;
    let run = pipeline::run_parse(raw);

    if args.raw {
        println!("{}", run.raw);
    } else {
        println!("{}", crate::report::format_report(&run.report));
    }

    if let Some(path) = &args.export {
        crate::io::write_report_json(path, &pipeline::report_file(&run, ""))?;
    }

    Ok(())
}

fn render_and_export(
    run: &pipeline::RunOutput,
    args: &SubmitArgs,
    job_position: &str,
) -> Result<(), AppError> {
    if args.raw {
        println!("{}", run.raw);
    } else {
        println!("{}", crate::report::format_report(&run.report));
    }

    if let Some(path) = &args.export {
        crate::io::write_report_json(path, &pipeline::report_file(run, job_position))?;
    }

    Ok(())
}

/// Resolve CLI args into a concrete submission request.
///
/// A missing `-f` falls back to the interactive picker; `--description-file`
/// takes precedence over the inline `-d` text.
pub fn submit_request_from_args(args: &SubmitArgs) -> Result<SubmitRequest, AppError> {
    let file = match &args.file {
        Some(path) => path.clone(),
        None => crate::cli::picker::prompt_for_resume_path()?,
    };

    let job_description = match &args.description_file {
        Some(path) => std::fs::read_to_string(path).map_err(|e| {
            AppError::internal(format!(
                "Failed to read job description '{}': {e}",
                path.display()
            ))
        })?,
        None => args.description.clone(),
    };

    Ok(SubmitRequest {
        file,
        job_position: args.position.clone(),
        job_description,
    })
}

/// Rewrite argv so `cvscan` defaults to `cvscan tui`.
///
/// Rules:
/// - `cvscan`                      -> `cvscan tui`
/// - `cvscan -f resume.pdf ...`    -> `cvscan tui -f resume.pdf ...`
/// - `cvscan --help/--version/-h`  -> unchanged (show top-level help/version)
fn rewrite_args(mut argv: Vec<String>) -> Vec<String> {
    let Some(arg1) = argv.get(1).cloned() else {
        argv.push("tui".to_string());
        return argv;
    };

    let is_top_level_help_or_version = matches!(
        arg1.as_str(),
        "-h" | "--help" | "-V" | "--version" | "help"
    );
    if is_top_level_help_or_version {
        return argv;
    }

    let is_subcommand = matches!(arg1.as_str(), "submit" | "parse" | "tui");
    if is_subcommand {
        return argv;
    }

    // If the first token is a flag, treat it as "tui flags".
    if arg1.starts_with('-') {
        argv.insert(1, "tui".to_string());
        return argv;
    }

    // Otherwise, leave as-is.
    argv
}

#[cfg(test)]
mod tests {
    use super::*;

    fn argv(tokens: &[&str]) -> Vec<String> {
        tokens.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn bare_invocation_defaults_to_tui() {
        assert_eq!(rewrite_args(argv(&["cvscan"])), argv(&["cvscan", "tui"]));
    }

    #[test]
    fn leading_flag_is_routed_to_tui() {
        assert_eq!(
            rewrite_args(argv(&["cvscan", "-f", "cv.pdf"])),
            argv(&["cvscan", "tui", "-f", "cv.pdf"])
        );
    }

    #[test]
    fn explicit_subcommands_pass_through() {
        assert_eq!(
            rewrite_args(argv(&["cvscan", "submit", "-f", "cv.pdf"])),
            argv(&["cvscan", "submit", "-f", "cv.pdf"])
        );
        assert_eq!(
            rewrite_args(argv(&["cvscan", "--help"])),
            argv(&["cvscan", "--help"])
        );
    }
}
