//! Baseline settings shared by every resolution call

use crate::properties::{Properties, PropertyValue};
use std::fmt;
use std::sync::Arc;

/// Destination for transport debug output.
///
/// Defaults to emitting each line as a `tracing` debug event.
#[derive(Clone)]
pub struct DebugSink(Arc<dyn Fn(&str) + Send + Sync>);

impl DebugSink {
    #[must_use]
    pub fn new(sink: impl Fn(&str) + Send + Sync + 'static) -> Self {
        Self(Arc::new(sink))
    }

    #[must_use]
    pub fn tracing() -> Self {
        Self::new(|line| tracing::debug!(target: "mail_session::transport", "{}", line))
    }

    pub fn emit(&self, line: &str) {
        (self.0)(line);
    }
}

impl Default for DebugSink {
    fn default() -> Self {
        Self::tracing()
    }
}

impl fmt::Debug for DebugSink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("DebugSink(..)")
    }
}

/// Immutable baseline for resolution and session setup.
///
/// Resolvers copy `defaults` into every result before applying their own
/// keys, so a caller can inject provider-specific options (timeouts,
/// trust settings) once and have them present on every session.
#[derive(Debug, Clone, Default)]
pub struct MailerSettings {
    defaults: Properties,
    debug: bool,
    debug_sink: DebugSink,
}

impl MailerSettings {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_property(mut self, key: impl Into<String>, value: impl Into<PropertyValue>) -> Self {
        self.defaults.set(key, value);
        self
    }

    #[must_use]
    pub const fn with_debug(mut self, debug: bool) -> Self {
        self.debug = debug;
        self
    }

    #[must_use]
    pub fn with_debug_sink(mut self, sink: DebugSink) -> Self {
        self.debug_sink = sink;
        self
    }

    #[must_use]
    pub const fn defaults(&self) -> &Properties {
        &self.defaults
    }

    #[must_use]
    pub const fn debug(&self) -> bool {
        self.debug
    }

    #[must_use]
    pub const fn debug_sink(&self) -> &DebugSink {
        &self.debug_sink
    }
}
