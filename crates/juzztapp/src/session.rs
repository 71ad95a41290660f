//! Login state. A stored token means logged in, nothing else is tracked.

use crate::error::Result;
use crate::store::{StorageBackend, TOKEN_KEY};

pub struct Session<B: StorageBackend> {
    backend: B,
}

impl<B: StorageBackend> Session<B> {
    pub fn new(backend: B) -> Self {
        Self { backend }
    }

    /// Unreadable storage counts as logged out.
    pub fn token(&self) -> Option<String> {
        match self.backend.read(TOKEN_KEY) {
            Ok(token) => token.filter(|t| !t.trim().is_empty()),
            Err(e) => {
                tracing::warn!(error = %e, "could not read session token");
                None
            }
        }
    }

    pub fn is_logged_in(&self) -> bool {
        self.token().is_some()
    }

    pub fn store_token(&self, token: &str) -> Result<()> {
        self.backend.write(TOKEN_KEY, token)
    }

    pub fn clear(&self) -> Result<()> {
        self.backend.remove(TOKEN_KEY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemBackend;

    #[test]
    fn token_presence_is_login_state() {
        let session = Session::new(MemBackend::new());
        assert!(!session.is_logged_in());

        session.store_token("abc").unwrap();
        assert_eq!(session.token().as_deref(), Some("abc"));
        assert!(session.is_logged_in());

        session.clear().unwrap();
        assert!(!session.is_logged_in());
    }

    #[test]
    fn blank_token_is_logged_out() {
        let session = Session::new(MemBackend::new().with_value(TOKEN_KEY, "  \n"));
        assert!(!session.is_logged_in());
    }
}
