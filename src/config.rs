//! Mail endpoint description
//!
//! A [`MailConfig`] is a partial description of a mail server. Any field
//! except the host may be left unset; the resolver fills the gaps from
//! well-known port conventions.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::env;
use std::fmt;
use std::str::FromStr;

/// Mail protocol spoken by an endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Protocol {
    Smtp,
    Pop3,
    Imap,
}

impl Protocol {
    /// The lowercase provider name, e.g. `"pop3"`.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Smtp => "smtp",
            Self::Pop3 => "pop3",
            Self::Imap => "imap",
        }
    }
}

impl fmt::Display for Protocol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Protocol {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "smtp" => Ok(Self::Smtp),
            "pop3" => Ok(Self::Pop3),
            "imap" => Ok(Self::Imap),
            other => Err(Error::Config(format!("Unknown protocol '{other}'"))),
        }
    }
}

/// Transport-level encryption.
///
/// `Tls` means an upgrade via STARTTLS on a plaintext port, `Ssl` means
/// TLS from the first byte (implicit TLS).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Encryption {
    None,
    Tls,
    Ssl,
}

impl Encryption {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Tls => "tls",
            Self::Ssl => "ssl",
        }
    }
}

impl fmt::Display for Encryption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Encryption {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "none" | "plain" => Ok(Self::None),
            "tls" | "starttls" => Ok(Self::Tls),
            "ssl" => Ok(Self::Ssl),
            other => Err(Error::Config(format!("Unknown encryption '{other}'"))),
        }
    }
}

/// Connection description for a single mail endpoint.
///
/// Built once by the caller and only read afterwards.
///
/// # Examples
///
/// ```
/// use mail_session::{Encryption, MailConfig};
///
/// let config = MailConfig::new("smtp.example.com")
///     .with_port(587)
///     .with_credentials("alice@example.com", "secret");
///
/// assert!(config.is_authenticated());
/// assert_eq!(config.encryption, None::<Encryption>);
/// ```
#[derive(Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MailConfig {
    pub host: String,
    #[serde(default)]
    pub port: Option<u16>,
    #[serde(default)]
    pub protocol: Option<Protocol>,
    #[serde(default)]
    pub encryption: Option<Encryption>,
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default, skip_serializing)]
    pub password: Option<String>,
}

impl MailConfig {
    #[must_use]
    pub fn new(host: impl Into<String>) -> Self {
        Self {
            host: host.into(),
            ..Self::default()
        }
    }

    #[must_use]
    pub const fn with_port(mut self, port: u16) -> Self {
        self.port = Some(port);
        self
    }

    #[must_use]
    pub const fn with_protocol(mut self, protocol: Protocol) -> Self {
        self.protocol = Some(protocol);
        self
    }

    #[must_use]
    pub const fn with_encryption(mut self, encryption: Encryption) -> Self {
        self.encryption = Some(encryption);
        self
    }

    #[must_use]
    pub fn with_credentials(
        mut self,
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        self.username = Some(username.into());
        self.password = Some(password.into());
        self
    }

    /// A non-empty username switches the endpoint to authenticated mode.
    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.username.as_deref().is_some_and(|u| !u.is_empty())
    }

    /// Load a configuration from environment variables
    ///
    /// Reads from `.env` file if present. With `prefix = "SMTP"`:
    /// - `SMTP_HOST` (required)
    /// - `SMTP_PORT`, `SMTP_PROTOCOL`, `SMTP_ENCRYPTION`
    /// - `SMTP_USERNAME`, `SMTP_PASSWORD`
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] if the host is missing or a value
    /// cannot be parsed.
    pub fn from_env(prefix: &str) -> Result<Self> {
        dotenvy::dotenv().ok();

        let var = |name: &str| env::var(format!("{prefix}_{name}")).ok();

        Ok(Self {
            host: var("HOST").ok_or_else(|| Error::Config(format!("{prefix}_HOST not set")))?,
            port: var("PORT")
                .map(|p| {
                    p.parse::<u16>()
                        .map_err(|e| Error::Config(format!("Invalid {prefix}_PORT: {e}")))
                })
                .transpose()?,
            protocol: var("PROTOCOL").map(|p| p.parse::<Protocol>()).transpose()?,
            encryption: var("ENCRYPTION")
                .map(|e| e.parse::<Encryption>())
                .transpose()?,
            username: var("USERNAME"),
            password: var("PASSWORD"),
        })
    }
}

impl fmt::Debug for MailConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MailConfig")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("protocol", &self.protocol)
            .field("encryption", &self.encryption)
            .field("username", &self.username)
            .field("password", &self.password.as_ref().map(|_| "<redacted>"))
            .finish()
    }
}
