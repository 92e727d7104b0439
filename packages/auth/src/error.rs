//! Provider error type and the error codes the provider reports.

use thiserror::Error;

/// Error codes reported by the identity provider.
pub mod codes {
    pub const EMAIL_ALREADY_IN_USE: &str = "auth/email-already-in-use";
    pub const INVALID_EMAIL: &str = "auth/invalid-email";
    pub const WEAK_PASSWORD: &str = "auth/weak-password";
    pub const MISSING_PASSWORD: &str = "auth/missing-password";
    pub const OPERATION_NOT_ALLOWED: &str = "auth/operation-not-allowed";
    pub const TOO_MANY_REQUESTS: &str = "auth/too-many-requests";
    pub const NETWORK_REQUEST_FAILED: &str = "auth/network-request-failed";
    pub const INTERNAL_ERROR: &str = "auth/internal-error";
}

/// A failure reported by the identity provider, carrying its string code.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message} ({code})")]
pub struct ProviderError {
    code: String,
    message: String,
}

impl ProviderError {
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
        }
    }

    /// Build an error whose message is just its code.
    pub fn from_code(code: impl Into<String>) -> Self {
        let code = code.into();
        Self {
            message: code.clone(),
            code,
        }
    }

    pub fn code(&self) -> &str {
        &self.code
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_includes_code() {
        let err = ProviderError::new(codes::WEAK_PASSWORD, "Password should be at least 6 characters");
        assert_eq!(
            err.to_string(),
            "Password should be at least 6 characters (auth/weak-password)"
        );
    }

    #[test]
    fn test_from_code() {
        let err = ProviderError::from_code(codes::INVALID_EMAIL);
        assert_eq!(err.code(), "auth/invalid-email");
        assert_eq!(err.message(), "auth/invalid-email");
    }
}
