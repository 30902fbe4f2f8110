//! Mail session preparation
//!
//! Infers the missing parts of a partial mail server description
//! (protocol from port, encryption from port, port from protocol and
//! encryption) and prepares sessions for an external [`Transport`] that
//! does the actual SMTP, POP3 or IMAP work.
//!
//! ```
//! use mail_session::{Encryption, MailConfig, MailerSettings, Protocol, resolve_receive};
//!
//! let config = MailConfig::new("mail.example.com").with_port(995);
//! let resolved = resolve_receive(&config, &MailerSettings::default()).unwrap();
//!
//! assert_eq!(resolved.protocol(), Protocol::Pop3);
//! assert_eq!(resolved.encryption(), Encryption::Ssl);
//! assert_eq!(resolved.store_protocol().as_deref(), Some("pop3"));
//! ```

mod config;
mod error;
pub mod folder;
mod mailer;
mod message;
pub mod properties;
mod resolver;
mod session;
mod settings;
mod transport;

pub use config::{Encryption, MailConfig, Protocol};
pub use error::{Error, Result};
pub use folder::{FolderKind, OpenMode};
pub use lettre::Address;
pub use lettre::message::Mailbox;
pub use mailer::Mailer;
pub use message::{Message, parse_mailbox};
pub use properties::{Properties, PropertyValue, ResolvedProperties};
pub use resolver::{
    DEFAULT_IMAP_PORT, DEFAULT_IMAP_SSL_PORT, DEFAULT_POP3_PORT, DEFAULT_POP3_SSL_PORT,
    DEFAULT_SMTP_PORT, DEFAULT_SMTP_SSL_PORT, DEFAULT_SMTP_TLS_PORT, default_port, default_ssl_port,
    protocol_for_port, resolve_receive, resolve_send,
};
pub use session::{Authenticator, Credentials, Session, build_session, build_session_with};
pub use settings::{DebugSink, MailerSettings};
pub use transport::{Folder, Store, Transport};
