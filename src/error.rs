//! Application error type.
//!
//! One error type for the whole binary, carrying the process exit code:
//!
//! - 2: validation (bad/missing input, reported before any network call)
//! - 3: transport (HTTP failure, non-2xx status, undecodable response)
//! - 4: internal (IO, terminal, serialization)

#[derive(Clone)]
pub struct AppError {
    exit_code: u8,
    message: String,
}

impl AppError {
    pub fn new(exit_code: u8, message: impl Into<String>) -> Self {
        Self {
            exit_code,
            message: message.into(),
        }
    }

    /// Bad or missing user input. Raised before any network activity.
    pub fn validation(message: impl Into<String>) -> Self {
        Self::new(2, message)
    }

    /// Network failure or an error response from the webhook.
    pub fn transport(message: impl Into<String>) -> Self {
        Self::new(3, message)
    }

    /// Local IO, terminal, or serialization failure.
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(4, message)
    }

    pub fn exit_code(&self) -> u8 {
        self.exit_code
    }

    pub fn is_validation(&self) -> bool {
        self.exit_code == 2
    }
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::fmt::Debug for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppError")
            .field("exit_code", &self.exit_code)
            .field("message", &self.message)
            .finish()
    }
}

impl std::error::Error for AppError {}
