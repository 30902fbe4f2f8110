//! Outgoing message envelope
//!
//! Only the envelope-level fields needed to hand a message to the
//! transport are kept here. Composing MIME bodies is left to the
//! transport.

use crate::error::{Error, Result};
use crate::session::Session;
use chrono::{DateTime, Utc};
use lettre::message::Mailbox;

/// Parse a mailbox, either a bare `user@domain` or `Name <user@domain>`.
///
/// # Errors
///
/// Returns [`Error::AddressFormat`] if `address` is not a valid
/// mailbox.
pub fn parse_mailbox(address: &str) -> Result<Mailbox> {
    address
        .trim()
        .parse::<Mailbox>()
        .map_err(|e| Error::AddressFormat {
            address: address.to_string(),
            reason: e.to_string(),
        })
}

/// A message bound to the session it will be sent with.
#[derive(Debug, Clone)]
pub struct Message {
    session: Session,
    from: Option<Mailbox>,
    to: Vec<Mailbox>,
    subject: Option<String>,
    text: Option<String>,
    sent_date: Option<DateTime<Utc>>,
}

impl Message {
    #[must_use]
    pub const fn new(session: Session) -> Self {
        Self {
            session,
            from: None,
            to: Vec::new(),
            subject: None,
            text: None,
            sent_date: None,
        }
    }

    #[must_use]
    pub const fn session(&self) -> &Session {
        &self.session
    }

    /// # Errors
    ///
    /// Returns [`Error::AddressFormat`] on a malformed address.
    pub fn set_from(&mut self, address: &str) -> Result<()> {
        self.from = Some(parse_mailbox(address)?);
        Ok(())
    }

    /// Replace all recipients with a single one.
    ///
    /// # Errors
    ///
    /// Returns [`Error::AddressFormat`] on a malformed address.
    pub fn set_recipient(&mut self, address: &str) -> Result<()> {
        let parsed = parse_mailbox(address)?;
        self.to = vec![parsed];
        Ok(())
    }

    /// # Errors
    ///
    /// Returns [`Error::AddressFormat`] on a malformed address.
    pub fn add_recipient(&mut self, address: &str) -> Result<()> {
        self.to.push(parse_mailbox(address)?);
        Ok(())
    }

    pub fn set_subject(&mut self, subject: impl Into<String>) {
        self.subject = Some(subject.into());
    }

    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = Some(text.into());
    }

    pub fn set_sent_date(&mut self, date: DateTime<Utc>) {
        self.sent_date = Some(date);
    }

    #[must_use]
    pub const fn from(&self) -> Option<&Mailbox> {
        self.from.as_ref()
    }

    #[must_use]
    pub fn to(&self) -> &[Mailbox] {
        &self.to
    }

    #[must_use]
    pub fn subject(&self) -> Option<&str> {
        self.subject.as_deref()
    }

    #[must_use]
    pub fn text(&self) -> Option<&str> {
        self.text.as_deref()
    }

    #[must_use]
    pub const fn sent_date(&self) -> Option<DateTime<Utc>> {
        self.sent_date
    }
}
