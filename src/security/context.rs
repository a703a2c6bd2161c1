//! Request-scoped identity.
//!
//! The host authenticates a request and attaches the resulting [`User`] to a
//! [`RequestContext`]; brokers only read it.

/// An authenticated user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub username: String,
}

impl User {
    pub fn new(username: impl Into<String>) -> Self {
        Self {
            username: username.into(),
        }
    }

    /// First character of the username, if any.
    pub fn initial(&self) -> Option<char> {
        self.username.chars().next()
    }
}

/// Context attached to a single request.
#[derive(Debug, Clone, Default)]
pub struct RequestContext {
    user: Option<User>,
}

impl RequestContext {
    /// A context with no authenticated user.
    pub fn anonymous() -> Self {
        Self::default()
    }

    /// A context carrying `user`.
    pub fn with_user(user: User) -> Self {
        Self { user: Some(user) }
    }

    /// The authenticated user, if the request carried one.
    pub fn get_user(&self) -> Option<&User> {
        self.user.as_ref()
    }
}
