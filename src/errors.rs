//! Error types for the PrefID preference tools.
//!
//! The taxonomy is deliberately small: credentials can be rejected, a
//! preference record can be missing, a write can be malformed, and anything
//! else from the backend is an API or transport failure. Read operations map
//! `NotFound` to an empty result at the adapter layer; the explain operation
//! surfaces it to the caller.

use thiserror::Error;

/// Errors produced by the preference tool adapter.
#[derive(Debug, Error)]
pub enum PrefIdError {
    /// Invalid or expired credential triple. Not recoverable by the adapter.
    #[error("authentication failed: {message}")]
    Auth { message: String },

    /// No stored record for the given user/domain.
    #[error("not found: {resource}")]
    NotFound { resource: String },

    /// Malformed input to a write operation.
    #[error("validation failed: {message}")]
    Validation { message: String },

    /// Unexpected status from the preference-storage backend.
    #[error("preference API error (HTTP {status}): {message}")]
    Api { status: u16, message: String },

    /// Transport-level failure from the HTTP client.
    #[error(transparent)]
    Http(#[from] reqwest::Error),
}

impl PrefIdError {
    /// Map a non-success HTTP status from the preference backend onto the
    /// error taxonomy.
    pub fn from_status(status: u16, resource: &str, body: &str) -> Self {
        let message = if body.trim().is_empty() {
            format!("request for {} failed", resource)
        } else {
            body.trim().to_string()
        };
        match status {
            401 | 403 => Self::Auth { message },
            404 => Self::NotFound {
                resource: resource.to_string(),
            },
            400 | 422 => Self::Validation { message },
            _ => Self::Api { status, message },
        }
    }

    /// Whether this error is the missing-record case.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unauthorized_maps_to_auth() {
        let err = PrefIdError::from_status(401, "thinking preferences", "bad token");
        assert!(matches!(err, PrefIdError::Auth { .. }));
        let err = PrefIdError::from_status(403, "thinking preferences", "");
        assert!(matches!(err, PrefIdError::Auth { .. }));
    }

    #[test]
    fn test_missing_record_maps_to_not_found() {
        let err = PrefIdError::from_status(404, "food_profile for user_123", "");
        assert!(err.is_not_found());
        match err {
            PrefIdError::NotFound { resource } => {
                assert_eq!(resource, "food_profile for user_123")
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_bad_request_maps_to_validation() {
        let err = PrefIdError::from_status(422, "learn", "text must not be empty");
        match err {
            PrefIdError::Validation { message } => {
                assert_eq!(message, "text must not be empty")
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_other_statuses_map_to_api() {
        let err = PrefIdError::from_status(500, "food_profile", "boom");
        match err {
            PrefIdError::Api { status, message } => {
                assert_eq!(status, 500);
                assert_eq!(message, "boom");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_empty_body_gets_a_default_message() {
        let err = PrefIdError::from_status(500, "food_profile", "  ");
        match err {
            PrefIdError::Api { message, .. } => {
                assert_eq!(message, "request for food_profile failed")
            }
            other => panic!("unexpected error: {other}"),
        }
    }
}
