//! Credential context for PrefID calls.
//!
//! A `PrefIdContext` is built once per (client_id, access_token, user_id)
//! triple and cloned into every tool. It is the only state the tools share;
//! no rotation or refresh is attempted.

use std::fmt;

/// The credential triple authorizing every preference call.
#[derive(Clone, PartialEq, Eq)]
pub struct PrefIdContext {
    /// Client application identifier issued by the PrefID dashboard.
    pub client_id: String,
    /// Bearer-style user access token.
    pub access_token: String,
    /// The user whose preferences are read and written.
    pub user_id: String,
}

impl PrefIdContext {
    /// Create a new context from a credential triple.
    pub fn new(
        client_id: impl Into<String>,
        access_token: impl Into<String>,
        user_id: impl Into<String>,
    ) -> Self {
        Self {
            client_id: client_id.into(),
            access_token: access_token.into(),
            user_id: user_id.into(),
        }
    }
}

impl fmt::Debug for PrefIdContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PrefIdContext")
            .field("client_id", &self.client_id)
            .field("access_token", &"<redacted>")
            .field("user_id", &self.user_id)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_debug_never_prints_the_token() {
        let ctx = PrefIdContext::new("client-1", "secret-token", "user_123");
        let debug = format!("{:?}", ctx);
        assert!(!debug.contains("secret-token"));
        assert!(debug.contains("client-1"));
        assert!(debug.contains("user_123"));
    }
}
