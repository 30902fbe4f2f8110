//! Transport sessions
//!
//! A [`Session`] bundles resolved properties with debug settings and an
//! optional [`Authenticator`]. Building one performs no I/O; the
//! transport asks the authenticator for credentials only when a server
//! challenges it.

use crate::properties::ResolvedProperties;
use crate::settings::{DebugSink, MailerSettings};
use std::fmt;
use std::sync::Arc;

/// Username/password pair handed to the transport on demand.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

impl Credentials {
    #[must_use]
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Lazily supplies credentials when the transport is challenged.
#[derive(Clone)]
pub struct Authenticator(Arc<dyn Fn() -> Credentials + Send + Sync>);

impl Authenticator {
    #[must_use]
    pub fn new(supply: impl Fn() -> Credentials + Send + Sync + 'static) -> Self {
        Self(Arc::new(supply))
    }

    /// Always returns the same credentials.
    #[must_use]
    pub fn fixed(credentials: Credentials) -> Self {
        Self::new(move || credentials.clone())
    }

    #[must_use]
    pub fn credentials(&self) -> Credentials {
        (self.0)()
    }
}

impl fmt::Debug for Authenticator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Authenticator(..)")
    }
}

/// Configured, not yet connected, transport session.
#[derive(Debug, Clone)]
pub struct Session {
    properties: ResolvedProperties,
    authenticator: Option<Authenticator>,
    debug: bool,
    debug_sink: DebugSink,
}

impl Session {
    #[must_use]
    pub const fn properties(&self) -> &ResolvedProperties {
        &self.properties
    }

    #[must_use]
    pub const fn debug(&self) -> bool {
        self.debug
    }

    #[must_use]
    pub const fn has_authenticator(&self) -> bool {
        self.authenticator.is_some()
    }

    /// Answer an authentication challenge.
    ///
    /// Returns `None` for anonymous sessions.
    #[must_use]
    pub fn authenticate(&self) -> Option<Credentials> {
        self.authenticator.as_ref().map(Authenticator::credentials)
    }

    /// Write a protocol trace line to the debug sink, if debugging is on.
    pub fn trace(&self, line: &str) {
        if self.debug {
            self.debug_sink.emit(line);
        }
    }
}

/// Wrap resolved properties into a session.
///
/// When `credentials` is given the session carries an authenticator
/// that hands them out on demand; nothing is validated up front.
#[must_use]
pub fn build_session(
    properties: ResolvedProperties,
    credentials: Option<Credentials>,
    settings: &MailerSettings,
) -> Session {
    Session {
        properties,
        authenticator: credentials.map(Authenticator::fixed),
        debug: settings.debug(),
        debug_sink: settings.debug_sink().clone(),
    }
}

/// Same as [`build_session`] with a caller-supplied authenticator.
#[must_use]
pub fn build_session_with(
    properties: ResolvedProperties,
    authenticator: Authenticator,
    settings: &MailerSettings,
) -> Session {
    Session {
        authenticator: Some(authenticator),
        ..build_session(properties, None, settings)
    }
}
