//! The access proxy.

use gatelog_storage::LineStore;
use tracing::{debug, info};

use crate::session::SessionState;

/// Authentication gate over a borrowed [`LineStore`].
///
/// The proxy never owns its backing store; the store must outlive it.
/// Because it implements [`LineStore`] itself, a proxy can be handed to
/// anything that expects a store, including another proxy.
pub struct AccessProxy<'a, S: LineStore + ?Sized> {
    backing: &'a S,
    state: SessionState,
}

impl<'a, S: LineStore + ?Sized> AccessProxy<'a, S> {
    /// Create an unauthenticated proxy over `backing`.
    #[must_use]
    pub fn new(backing: &'a S) -> Self {
        Self {
            backing,
            state: SessionState::Unauthenticated,
        }
    }

    /// Authenticate the session.
    ///
    /// Any username and password are accepted, including empty ones; there
    /// is no credential check. The password is discarded without being
    /// stored or logged. Logging in again replaces the recorded username.
    pub fn login(&mut self, username: &str, _password: &str) {
        match self.state.username() {
            Some(previous) => {
                info!(previous, username, "session re-authenticated");
            },
            None => info!(username, "session authenticated"),
        }
        self.state = SessionState::authenticated(username);
    }

    /// Return the session to the unauthenticated state.
    ///
    /// Calling this on an unauthenticated session does nothing.
    pub fn logout(&mut self) {
        if let Some(username) = self.state.username() {
            info!(username, "session logged out");
        }
        self.state = SessionState::Unauthenticated;
    }

    /// Whether data operations are currently forwarded.
    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.state.is_authenticated()
    }

    /// Current session state.
    #[must_use]
    pub fn state(&self) -> &SessionState {
        &self.state
    }

    /// The backing store this proxy forwards to.
    #[must_use]
    pub fn backing(&self) -> &'a S {
        self.backing
    }

    fn permits(&self, operation: &'static str) -> bool {
        let allowed = self.state.is_authenticated();
        if !allowed {
            debug!(operation, "unauthenticated session; operation not forwarded");
        }
        allowed
    }
}

impl<S: LineStore + ?Sized> LineStore for AccessProxy<'_, S> {
    fn append(&self, line: &str) {
        if self.permits("append") {
            self.backing.append(line);
        }
    }

    fn list(&self) -> Vec<String> {
        if self.permits("list") {
            self.backing.list()
        } else {
            Vec::new()
        }
    }

    fn truncate(&self) {
        if self.permits("truncate") {
            self.backing.truncate();
        }
    }
}

impl<S: LineStore + ?Sized> std::fmt::Debug for AccessProxy<'_, S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AccessProxy")
            .field("state", &self.state)
            .finish_non_exhaustive()
    }
}
