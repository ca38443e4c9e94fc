//! Application error type.
//!
//! Every fallible path in the crate returns `AppError`, which carries the
//! process exit code alongside a human-readable message. `main` prints the
//! message and exits with the code.

/// Bad arguments, bad environment values, or file I/O on exports/logs.
pub const EXIT_USAGE: u8 = 2;
/// The compiled-in rate table violates one of its invariants.
pub const EXIT_DATA: u8 = 3;
/// Terminal setup, drawing, or event handling failed.
pub const EXIT_RUNTIME: u8 = 4;

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

    pub fn usage(message: impl Into<String>) -> Self {
        Self::new(EXIT_USAGE, message)
    }

    pub fn data(message: impl Into<String>) -> Self {
        Self::new(EXIT_DATA, message)
    }

    pub fn runtime(message: impl Into<String>) -> Self {
        Self::new(EXIT_RUNTIME, message)
    }

    pub fn exit_code(&self) -> u8 {
        self.exit_code
    }

    pub fn message(&self) -> &str {
        &self.message
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn constructors_set_exit_codes() {
        assert_eq!(AppError::usage("x").exit_code(), EXIT_USAGE);
        assert_eq!(AppError::data("x").exit_code(), EXIT_DATA);
        assert_eq!(AppError::runtime("x").exit_code(), EXIT_RUNTIME);
    }

    #[test]
    fn display_is_message_only() {
        let err = AppError::data("reference missing");
        assert_eq!(err.to_string(), "reference missing");
        assert_eq!(err.message(), "reference missing");
    }
}
