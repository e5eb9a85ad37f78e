//! Access session derived from the page URL.

use crate::config::{READONLY_TOKEN_SUFFIX, TOKEN_PARAM};
use crate::utils::query_param;

/// Access token and the permissions it implies.
///
/// Read-only mode is decided client-side from the token suffix alone; the
/// backend enforces the same rule independently.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Session {
    token: Option<String>,
    read_only: bool,
}

impl Session {
    /// Build a session from an optional token.
    pub fn from_token(token: Option<String>) -> Self {
        let read_only = token
            .as_deref()
            .is_some_and(|t| t.ends_with(READONLY_TOKEN_SUFFIX));
        Self { token, read_only }
    }

    /// Build a session from a query string (`?token=...`).
    pub fn from_query(search: &str) -> Self {
        Self::from_token(query_param(search, TOKEN_PARAM))
    }

    /// The raw token, if one was supplied.
    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    /// Check if the session is limited to viewing.
    pub fn is_read_only(&self) -> bool {
        self.read_only
    }

    /// Check if create, upload, save, and delete actions are allowed.
    pub fn can_write(&self) -> bool {
        !self.read_only
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_access_token() {
        let session = Session::from_query("?token=AbCdEf");
        assert_eq!(session.token(), Some("AbCdEf"));
        assert!(!session.is_read_only());
        assert!(session.can_write());
    }

    #[test]
    fn test_readonly_suffix_disables_writes() {
        let session = Session::from_query("?token=AbCdEf_readonly");
        assert!(session.is_read_only());
        assert!(!session.can_write());
    }

    #[test]
    fn test_readonly_regardless_of_validity() {
        // Even a token the backend would reject is read-only client-side
        let session = Session::from_token(Some("_readonly".to_string()));
        assert!(!session.can_write());
    }

    #[test]
    fn test_missing_token() {
        let session = Session::from_query("?other=1");
        assert_eq!(session.token(), None);
        assert!(session.can_write());
        assert_eq!(session, Session::default());
    }
}
