//! Session state machine.

use chrono::{DateTime, Utc};

/// Authentication state of an [`AccessProxy`](crate::AccessProxy) session.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum SessionState {
    /// No successful login yet, or logged out since.
    #[default]
    Unauthenticated,
    /// Logged in.
    Authenticated {
        /// Username supplied at login. Informational only.
        username: String,
        /// When the login happened.
        since: DateTime<Utc>,
    },
}

impl SessionState {
    /// Authenticated state for `username`, starting now.
    #[must_use]
    pub fn authenticated(username: impl Into<String>) -> Self {
        Self::Authenticated {
            username: username.into(),
            since: Utc::now(),
        }
    }

    /// Whether data operations are forwarded in this state.
    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        matches!(self, Self::Authenticated { .. })
    }

    /// Username of the authenticated session, if any.
    #[must_use]
    pub fn username(&self) -> Option<&str> {
        match self {
            Self::Authenticated { username, .. } => Some(username),
            Self::Unauthenticated => None,
        }
    }

    /// Login time of the authenticated session, if any.
    #[must_use]
    pub fn since(&self) -> Option<DateTime<Utc>> {
        match self {
            Self::Authenticated { since, .. } => Some(*since),
            Self::Unauthenticated => None,
        }
    }
}

impl std::fmt::Display for SessionState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Unauthenticated => write!(f, "unauthenticated"),
            Self::Authenticated { username, .. } => write!(f, "authenticated as {username}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_unauthenticated() {
        let state = SessionState::default();
        assert!(!state.is_authenticated());
        assert_eq!(state.username(), None);
        assert_eq!(state.since(), None);
    }

    #[test]
    fn test_authenticated_carries_username() {
        let before = Utc::now();
        let state = SessionState::authenticated("alice");
        assert!(state.is_authenticated());
        assert_eq!(state.username(), Some("alice"));
        assert!(state.since().unwrap() >= before);
    }

    #[test]
    fn test_display() {
        assert_eq!(SessionState::Unauthenticated.to_string(), "unauthenticated");
        assert_eq!(
            SessionState::authenticated("bob").to_string(),
            "authenticated as bob"
        );
    }
}
