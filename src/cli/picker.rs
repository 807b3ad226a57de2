//! Interactive resume picker.
//!
//! This is intentionally kept separate from clap parsing:
//! - clap handles structured flags/subcommands
//! - the picker provides the "run `cvscan` and choose a resume" UX
//!
//! The picker searches for `*.pdf` / `*.docx` files under the current working
//! directory, mirroring the upload form's file-type restriction.

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use crate::error::AppError;
use crate::webhook::{validate_resume_path, ALLOWED_EXTENSIONS};

/// Default directory recursion depth for finding resume files.
const DEFAULT_SEARCH_DEPTH: usize = 4;

/// Prompt the user to select a resume from the current directory tree.
///
/// Behavior:
/// - list discovered `*.pdf` / `*.docx` files
/// - accept either a number (from the list) or an explicit path
/// - `q` cancels
pub fn prompt_for_resume_path() -> Result<PathBuf, AppError> {
    let files = discover_resume_files();
    if files.is_empty() {
        return Err(AppError::validation(
            "No .pdf or .docx files found. Provide one with `cvscan submit -f <resume>`.",
        ));
    }

    println!("Found {} resume file(s):", files.len());
    for (idx, path) in files.iter().enumerate() {
        println!("{:>3}) {}", idx + 1, pretty_path(path));
    }

    loop {
        print!(
            "Select a file by number (1-{}) or type a path (q to quit): ",
            files.len()
        );
        io::stdout()
            .flush()
            .map_err(|e| AppError::internal(format!("Failed to write prompt: {e}")))?;

        let mut input = String::new();
        let bytes = io::stdin()
            .read_line(&mut input)
            .map_err(|e| AppError::internal(format!("Failed to read input: {e}")))?;

        if bytes == 0 {
            return Err(AppError::validation(
                "No input received. Provide a resume path with `cvscan submit -f <resume>`.",
            ));
        }

        let input = input.trim();
        if input.eq_ignore_ascii_case("q") {
            return Err(AppError::validation("Canceled."));
        }

        if let Ok(choice) = input.parse::<usize>() {
            if (1..=files.len()).contains(&choice) {
                let path = files[choice - 1].clone();
                validate_resume_path(&path)?;
                return Ok(path);
            }
            println!(
                "Invalid choice: {choice}. Enter a number between 1 and {}.",
                files.len()
            );
            continue;
        }

        let candidate = PathBuf::from(input);
        match validate_resume_path(&candidate) {
            Ok(()) => return Ok(candidate),
            Err(err) => {
                println!("{err}");
                continue;
            }
        }
    }
}

/// Discover resume files under the current directory (deterministic order).
pub fn discover_resume_files() -> Vec<PathBuf> {
    find_resume_files(Path::new("."), DEFAULT_SEARCH_DEPTH)
}

fn find_resume_files(root: &Path, max_depth: usize) -> Vec<PathBuf> {
    let mut out = Vec::new();
    find_resume_files_inner(root, 0, max_depth, &mut out);
    out.sort_by(|a, b| pretty_path(a).cmp(&pretty_path(b)));
    out
}

fn find_resume_files_inner(root: &Path, depth: usize, max_depth: usize, out: &mut Vec<PathBuf>) {
    if depth > max_depth {
        return;
    }

    let Ok(entries) = fs::read_dir(root) else {
        return;
    };

    for entry in entries.flatten() {
        let path = entry.path();
        let file_type = match entry.file_type() {
            Ok(ft) => ft,
            Err(_) => continue,
        };

        if file_type.is_dir() {
            if should_skip_dir(&path) {
                continue;
            }
            find_resume_files_inner(&path, depth + 1, max_depth, out);
            continue;
        }

        if file_type.is_file() && has_resume_extension(&path) {
            out.push(path);
        }
    }
}

fn has_resume_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| {
            ALLOWED_EXTENSIONS
                .iter()
                .any(|allowed| ext.eq_ignore_ascii_case(allowed))
        })
        .unwrap_or(false)
}

fn should_skip_dir(path: &Path) -> bool {
    let name = path.file_name().and_then(|s| s.to_str()).unwrap_or("");
    matches!(name, ".git" | "target" | "node_modules")
}

fn pretty_path(path: &Path) -> String {
    let stripped = path.strip_prefix("./").unwrap_or(path);
    stripped.display().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extension_filter_accepts_pdf_and_docx() {
        assert!(has_resume_extension(Path::new("cv.pdf")));
        assert!(has_resume_extension(Path::new("cv.DOCX")));
        assert!(!has_resume_extension(Path::new("cv.txt")));
        assert!(!has_resume_extension(Path::new("cv")));
    }
}
