//! Evaluation webhook client.
//!
//! One multipart POST per submission: the resume file plus the `jobPosition`
//! and `jobDescription` text fields. The webhook is an opaque collaborator:
//! no auth, no retries, no pagination. The response is either JSON carrying
//! the report in an `output` field, or the raw report text.

use std::path::Path;

use reqwest::blocking::{multipart, Client};
use reqwest::header::CONTENT_TYPE;

use crate::domain::SubmitRequest;
use crate::error::AppError;

const DEFAULT_WEBHOOK_URL: &str = "https://2eb4133dd905.ngrok-free.app/webhook/file-upload";

/// File extensions the webhook accepts (matched case-insensitively).
pub const ALLOWED_EXTENSIONS: &[&str] = &["pdf", "docx"];

pub struct WebhookClient {
    client: Client,
    url: String,
}

impl WebhookClient {
    /// Build a client from the environment.
    ///
    /// `CVSCAN_WEBHOOK_URL` (env or `.env`) overrides the built-in endpoint.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();
        let url =
            std::env::var("CVSCAN_WEBHOOK_URL").unwrap_or_else(|_| DEFAULT_WEBHOOK_URL.to_string());
        Self {
            client: Client::new(),
            url,
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    /// Submit a resume and return the raw report text.
    ///
    /// Validation runs first; an invalid request never reaches the network.
    /// The call blocks until the webhook responds, so at most one request is
    /// ever in flight per client.
    pub fn submit(&self, request: &SubmitRequest) -> Result<String, AppError> {
        validate_resume_path(&request.file)?;

        let form = multipart::Form::new()
            .file("file", &request.file)
            .map_err(|e| {
                AppError::internal(format!(
                    "Failed to read resume '{}': {e}",
                    request.file.display()
                ))
            })?
            .text("jobPosition", request.job_position.clone())
            .text("jobDescription", request.job_description.clone());

        let resp = self
            .client
            .post(&self.url)
            .multipart(form)
            .send()
            .map_err(|e| AppError::transport(format!("Failed to submit resume: {e}")))?;

        if !resp.status().is_success() {
            return Err(AppError::transport(format!(
                "Webhook returned HTTP {}.",
                resp.status()
            )));
        }

        let content_type = resp
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .unwrap_or("")
            .to_string();

        let body = resp
            .text()
            .map_err(|e| AppError::transport(format!("Failed to read webhook response: {e}")))?;

        Ok(decode_response_body(&content_type, &body))
    }
}

/// Validate the resume path before any network activity.
///
/// The file must be set, exist on disk, and carry a `.pdf` or `.docx`
/// extension. The extension check mirrors the file-picker restriction; the
/// webhook does not enforce it server-side.
pub fn validate_resume_path(path: &Path) -> Result<(), AppError> {
    if path.as_os_str().is_empty() {
        return Err(AppError::validation(
            "Please select a resume file (.pdf or .docx).",
        ));
    }

    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase)
        .unwrap_or_default();
    if !ALLOWED_EXTENSIONS.contains(&extension.as_str()) {
        return Err(AppError::validation(format!(
            "Unsupported resume format '{}': expected .pdf or .docx.",
            path.display()
        )));
    }

    if !path.is_file() {
        return Err(AppError::validation(format!(
            "Resume file '{}' not found.",
            path.display()
        )));
    }

    Ok(())
}

/// Decode the webhook response body by declared content type.
///
/// JSON bodies yield their `output` string field when present, otherwise the
/// whole value pretty-printed; undecodable JSON and all other content types
/// fall back to the raw text.
pub fn decode_response_body(content_type: &str, body: &str) -> String {
    if !content_type.contains("application/json") {
        return body.to_string();
    }

    match serde_json::from_str::<serde_json::Value>(body) {
        Ok(value) => match value.get("output").and_then(|o| o.as_str()) {
            Some(output) => output.to_string(),
            None => serde_json::to_string_pretty(&value).unwrap_or_else(|_| body.to_string()),
        },
        Err(_) => body.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn empty_path_is_a_validation_error() {
        let err = validate_resume_path(Path::new("")).unwrap_err();
        assert!(err.is_validation());
    }

    #[test]
    fn wrong_extension_is_rejected() {
        let err = validate_resume_path(Path::new("resume.txt")).unwrap_err();
        assert!(err.is_validation());
    }

    #[test]
    fn missing_file_is_rejected() {
        let err = validate_resume_path(Path::new("definitely_not_here.pdf")).unwrap_err();
        assert!(err.is_validation());
    }

    #[test]
    fn submit_with_missing_file_never_hits_the_network() {
        // An unroutable URL: if validation did not short-circuit, submit
        // would fail with a transport error instead of a validation error.
        let client = WebhookClient {
            client: Client::new(),
            url: "http://127.0.0.1:1/webhook".to_string(),
        };
        let request = SubmitRequest {
            file: PathBuf::new(),
            job_position: "Engineer".to_string(),
            job_description: String::new(),
        };
        let err = client.submit(&request).unwrap_err();
        assert!(err.is_validation());
    }

    #[test]
    fn json_response_unwraps_output_field() {
        let body = r###"{"output":"## Report\ntext"}"###;
        assert_eq!(
            decode_response_body("application/json", body),
            "## Report\ntext"
        );
    }

    #[test]
    fn json_without_output_is_pretty_printed() {
        let body = r#"{"status":"ok"}"#;
        let decoded = decode_response_body("application/json; charset=utf-8", body);
        assert!(decoded.contains("\"status\": \"ok\""));
    }

    #[test]
    fn invalid_json_falls_back_to_raw_text() {
        let body = "not json at all";
        assert_eq!(decode_response_body("application/json", body), body);
    }

    #[test]
    fn plain_text_is_passed_through() {
        let body = "## Report\n---\n## Recommendations\n1. A";
        assert_eq!(decode_response_body("text/plain", body), body);
    }
}
