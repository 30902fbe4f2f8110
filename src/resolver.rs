//! Connection-setting inference
//!
//! Turns a partial [`MailConfig`] into [`ResolvedProperties`] by filling
//! unset fields from the conventional port assignments:
//!
//! | Protocol | Plain / STARTTLS | Implicit TLS |
//! |----------|------------------|--------------|
//! | SMTP     | 25, 587          | 465          |
//! | POP3     | 110              | 995          |
//! | IMAP     | 143              | 993          |
//!
//! Each step only fills fields still unset, so explicit caller values
//! always win. Contradictions are reported as [`Error::InvalidConfig`].

use crate::config::{Encryption, MailConfig, Protocol};
use crate::error::{Error, Result};
use crate::properties::{self, ResolvedProperties, STORE_PROTOCOL, TRANSPORT_PROTOCOL};
use crate::settings::MailerSettings;
use tracing::debug;

pub const DEFAULT_SMTP_PORT: u16 = 25;
pub const DEFAULT_SMTP_TLS_PORT: u16 = 587;
pub const DEFAULT_SMTP_SSL_PORT: u16 = 465;

pub const DEFAULT_POP3_PORT: u16 = 110;
pub const DEFAULT_POP3_SSL_PORT: u16 = 995;

pub const DEFAULT_IMAP_PORT: u16 = 143;
pub const DEFAULT_IMAP_SSL_PORT: u16 = 993;

/// Receiving protocol conventionally served on `port`.
#[must_use]
pub const fn protocol_for_port(port: u16) -> Option<Protocol> {
    match port {
        DEFAULT_POP3_PORT | DEFAULT_POP3_SSL_PORT => Some(Protocol::Pop3),
        DEFAULT_IMAP_PORT | DEFAULT_IMAP_SSL_PORT => Some(Protocol::Imap),
        _ => None,
    }
}

/// Plaintext default port for a receiving protocol.
#[must_use]
pub const fn default_port(protocol: Protocol) -> Option<u16> {
    match protocol {
        Protocol::Pop3 => Some(DEFAULT_POP3_PORT),
        Protocol::Imap => Some(DEFAULT_IMAP_PORT),
        Protocol::Smtp => None,
    }
}

/// Implicit-TLS default port for a receiving protocol.
#[must_use]
pub const fn default_ssl_port(protocol: Protocol) -> Option<u16> {
    match protocol {
        Protocol::Pop3 => Some(DEFAULT_POP3_SSL_PORT),
        Protocol::Imap => Some(DEFAULT_IMAP_SSL_PORT),
        Protocol::Smtp => None,
    }
}

fn check_endpoint(config: &MailConfig) -> Result<()> {
    if config.host.trim().is_empty() {
        return Err(Error::InvalidConfig("host is empty".into()));
    }
    if config.port == Some(0) {
        return Err(Error::InvalidConfig("port 0 is out of range".into()));
    }
    Ok(())
}

/// Resolve the settings for reading mail (POP3 or IMAP).
///
/// # Errors
///
/// Returns [`Error::InvalidConfig`] if the protocol is SMTP, if no
/// protocol is given and none can be inferred from the port, or if no
/// default port exists for the protocol.
pub fn resolve_receive(config: &MailConfig, settings: &MailerSettings) -> Result<ResolvedProperties> {
    if config.protocol == Some(Protocol::Smtp) {
        return Err(Error::InvalidConfig(
            "protocol smtp not supported for receiving e-mails".into(),
        ));
    }
    check_endpoint(config)?;

    let mut port = config.port;
    let mut encryption = config.encryption;

    let protocol = match config.protocol {
        Some(p) => p,
        None => {
            let inferred = port
                .and_then(protocol_for_port)
                .ok_or_else(|| Error::InvalidConfig("cannot infer protocol".into()))?;
            debug!("Inferred protocol {} from port", inferred);
            inferred
        }
    };

    if port.is_none() && encryption == Some(Encryption::Ssl) {
        port = default_ssl_port(protocol);
    }

    if encryption.is_none()
        && let Some(p) = port
    {
        // STARTTLS is assumed on any port other than the implicit-TLS ones.
        let inferred = if p == DEFAULT_POP3_SSL_PORT || p == DEFAULT_IMAP_SSL_PORT {
            Encryption::Ssl
        } else {
            Encryption::Tls
        };
        debug!("Inferred encryption {} from port {}", inferred, p);
        encryption = Some(inferred);
    }

    let port = match port {
        Some(p) => p,
        None => default_port(protocol).ok_or_else(|| {
            Error::InvalidConfig(format!(
                "cannot infer default port from protocol {protocol}"
            ))
        })?,
    };

    let encryption = encryption.unwrap_or(Encryption::None);
    let mut props = settings.defaults().clone();

    match encryption {
        Encryption::Tls => props.set(properties::key(protocol, "starttls.enable"), true),
        Encryption::Ssl => props.set(properties::key(protocol, "ssl.enable"), true),
        Encryption::None => {}
    }
    props.set(properties::key(protocol, "host"), config.host.as_str());
    props.set(properties::key(protocol, "port"), port);
    props.set(STORE_PROTOCOL, protocol.as_str());

    debug!(
        "Resolved receive endpoint {}:{} ({}, {})",
        config.host, port, protocol, encryption
    );

    Ok(ResolvedProperties::new(
        protocol,
        encryption,
        config.host.clone(),
        port,
        config.is_authenticated(),
        props,
    ))
}

/// Resolve the settings for sending mail over SMTP.
///
/// Unlike [`resolve_receive`], a port that is neither 465 nor 587
/// implies no encryption at all.
///
/// # Errors
///
/// Returns [`Error::InvalidConfig`] if a protocol other than SMTP is
/// given.
pub fn resolve_send(config: &MailConfig, settings: &MailerSettings) -> Result<ResolvedProperties> {
    if let Some(protocol) = config.protocol.filter(|p| *p != Protocol::Smtp) {
        return Err(Error::InvalidConfig(format!(
            "protocol {protocol} not supported for sending e-mails"
        )));
    }
    check_endpoint(config)?;

    let protocol = Protocol::Smtp;
    let authenticated = config.is_authenticated();
    let mut props = settings.defaults().clone();

    props.set(TRANSPORT_PROTOCOL, protocol.as_str());
    props.set(properties::key(protocol, "host"), config.host.as_str());

    if authenticated {
        props.set(properties::key(protocol, "auth"), true);
    }

    let mut port = config.port;
    let mut encryption = config.encryption;

    if encryption.is_none()
        && let Some(p) = port
    {
        let inferred = match p {
            DEFAULT_SMTP_SSL_PORT => Encryption::Ssl,
            DEFAULT_SMTP_TLS_PORT => Encryption::Tls,
            _ => Encryption::None,
        };
        debug!("Inferred encryption {} from port {}", inferred, p);
        encryption = Some(inferred);
    }

    match encryption {
        Some(Encryption::Tls) => {
            props.set(properties::key(protocol, "starttls.enable"), true);
            port.get_or_insert(DEFAULT_SMTP_TLS_PORT);
        }
        Some(Encryption::Ssl) => {
            props.set(properties::key(protocol, "ssl.enable"), true);
            port.get_or_insert(DEFAULT_SMTP_SSL_PORT);
        }
        Some(Encryption::None) | None => {}
    }

    let port = port.unwrap_or(DEFAULT_SMTP_PORT);
    let encryption = encryption.unwrap_or(Encryption::None);

    props.set(properties::key(protocol, "port"), port);
    props.set(properties::key(protocol, "debug"), settings.debug());

    debug!(
        "Resolved send endpoint {}:{} ({}, auth={})",
        config.host, port, encryption, authenticated
    );

    Ok(ResolvedProperties::new(
        protocol,
        encryption,
        config.host.clone(),
        port,
        authenticated,
        props,
    ))
}
