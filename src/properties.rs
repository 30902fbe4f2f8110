//! Resolved connection properties
//!
//! The transport consumes a flat key/value map using keys of the form
//! `mail.<protocol>.<name>`. [`ResolvedProperties`] carries that map
//! together with the typed values it was derived from.

use crate::config::{Encryption, Protocol};
use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;

pub const STORE_PROTOCOL: &str = "mail.store.protocol";
pub const TRANSPORT_PROTOCOL: &str = "mail.transport.protocol";

/// Key for a protocol-scoped property, e.g. `mail.imap.ssl.enable`.
#[must_use]
pub fn key(protocol: Protocol, name: &str) -> String {
    format!("mail.{protocol}.{name}")
}

/// A single property value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum PropertyValue {
    Str(String),
    Int(i64),
    Bool(bool),
}

impl fmt::Display for PropertyValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Str(s) => f.write_str(s),
            Self::Int(i) => write!(f, "{i}"),
            Self::Bool(b) => write!(f, "{b}"),
        }
    }
}

impl From<&str> for PropertyValue {
    fn from(s: &str) -> Self {
        Self::Str(s.to_string())
    }
}

impl From<String> for PropertyValue {
    fn from(s: String) -> Self {
        Self::Str(s)
    }
}

impl From<u16> for PropertyValue {
    fn from(n: u16) -> Self {
        Self::Int(i64::from(n))
    }
}

impl From<i64> for PropertyValue {
    fn from(n: i64) -> Self {
        Self::Int(n)
    }
}

impl From<bool> for PropertyValue {
    fn from(b: bool) -> Self {
        Self::Bool(b)
    }
}

/// Ordered string-keyed property map.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Properties(BTreeMap<String, PropertyValue>);

impl Properties {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace a property.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<PropertyValue>) {
        self.0.insert(key.into(), value.into());
    }

    #[must_use]
    pub fn get(&self, key: &str) -> Option<&PropertyValue> {
        self.0.get(key)
    }

    /// String values as-is; ints and bools rendered as text.
    #[must_use]
    pub fn get_str(&self, key: &str) -> Option<String> {
        self.get(key).map(ToString::to_string)
    }

    /// `true` for `Bool(true)` or the string `"true"`.
    #[must_use]
    pub fn get_bool(&self, key: &str) -> bool {
        match self.get(key) {
            Some(PropertyValue::Bool(b)) => *b,
            Some(PropertyValue::Str(s)) => s.eq_ignore_ascii_case("true"),
            _ => false,
        }
    }

    #[must_use]
    pub fn get_int(&self, key: &str) -> Option<i64> {
        match self.get(key)? {
            PropertyValue::Int(n) => Some(*n),
            PropertyValue::Str(s) => s.parse().ok(),
            PropertyValue::Bool(_) => None,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &PropertyValue)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<K: Into<String>, V: Into<PropertyValue>> FromIterator<(K, V)> for Properties {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

/// Fully-specified settings for one send or receive endpoint.
///
/// Produced fresh by each resolver call and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolvedProperties {
    protocol: Protocol,
    encryption: Encryption,
    host: String,
    port: u16,
    authenticated: bool,
    properties: Properties,
}

impl ResolvedProperties {
    pub(crate) const fn new(
        protocol: Protocol,
        encryption: Encryption,
        host: String,
        port: u16,
        authenticated: bool,
        properties: Properties,
    ) -> Self {
        Self {
            protocol,
            encryption,
            host,
            port,
            authenticated,
            properties,
        }
    }

    #[must_use]
    pub const fn protocol(&self) -> Protocol {
        self.protocol
    }

    /// Effective encryption. An endpoint for which no encryption was
    /// given or inferred reports [`Encryption::None`].
    #[must_use]
    pub const fn encryption(&self) -> Encryption {
        self.encryption
    }

    #[must_use]
    pub fn host(&self) -> &str {
        &self.host
    }

    #[must_use]
    pub const fn port(&self) -> u16 {
        self.port
    }

    #[must_use]
    pub const fn is_authenticated(&self) -> bool {
        self.authenticated
    }

    /// Provider name the transport should instantiate a store for.
    #[must_use]
    pub fn store_protocol(&self) -> Option<String> {
        self.properties.get_str(STORE_PROTOCOL)
    }

    #[must_use]
    pub fn flag(&self, name: &str) -> bool {
        self.properties.get_bool(&key(self.protocol, name))
    }

    #[must_use]
    pub const fn properties(&self) -> &Properties {
        &self.properties
    }
}
