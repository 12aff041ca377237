//! Error taxonomy for the HTTP layer, and its single exit point into the
//! auth core: the `From` conversion that decides which failures the user is
//! allowed to see.

use auth_flow::ProviderError;
use std::fmt;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AppError {
    /// Request setup failed before anything was sent.
    Config(String),
    /// The auth endpoint could not be reached.
    Network(String),
    /// The request was aborted by the timeout.
    Timeout(String),
    /// The auth endpoint answered with a non-success status.
    Http { status: u16, message: String },
    /// A request body could not be encoded.
    Encode(String),
    /// A response body could not be decoded.
    Decode(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Config(message) => write!(formatter, "Config error: {message}"),
            AppError::Network(message) => write!(formatter, "Network error: {message}"),
            AppError::Timeout(message) => write!(formatter, "Timeout: {message}"),
            AppError::Http { status, message } => {
                write!(formatter, "Request failed ({status}): {message}")
            }
            AppError::Encode(message) => write!(formatter, "Request error: {message}"),
            AppError::Decode(message) => write!(formatter, "Response error: {message}"),
        }
    }
}

impl std::error::Error for AppError {}

/// 4xx responses carry the provider's user-safe message and become
/// `Rejected`; every other failure is a diagnostic the user should not see.
impl From<AppError> for ProviderError {
    fn from(err: AppError) -> Self {
        match err {
            AppError::Http { status, message } if (400..500).contains(&status) => {
                ProviderError::Rejected(message)
            }
            other => ProviderError::Unexpected(other.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::AppError;
    use auth_flow::ProviderError;

    #[test]
    fn client_errors_become_rejections_with_the_message_intact() {
        let err = AppError::Http {
            status: 400,
            message: "Invalid login credentials".to_string(),
        };
        assert_eq!(
            ProviderError::from(err),
            ProviderError::Rejected("Invalid login credentials".to_string())
        );

        let err = AppError::Http {
            status: 422,
            message: "Signup requires a valid password".to_string(),
        };
        assert_eq!(
            ProviderError::from(err),
            ProviderError::Rejected("Signup requires a valid password".to_string())
        );
    }

    #[test]
    fn server_errors_are_unexpected() {
        let err = AppError::Http {
            status: 500,
            message: "internal error".to_string(),
        };
        assert!(matches!(
            ProviderError::from(err),
            ProviderError::Unexpected(_)
        ));
    }

    #[test]
    fn transport_failures_are_unexpected() {
        for err in [
            AppError::Network("connection refused".to_string()),
            AppError::Timeout("Request timed out. Please try again.".to_string()),
            AppError::Decode("missing field".to_string()),
        ] {
            assert!(matches!(
                ProviderError::from(err),
                ProviderError::Unexpected(_)
            ));
        }
    }
}
