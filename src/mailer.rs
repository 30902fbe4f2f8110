//! Mailer facade

use crate::config::MailConfig;
use crate::error::{Error, Result};
use crate::message::Message;
use crate::resolver::{resolve_receive, resolve_send};
use crate::session::{Credentials, Session, build_session};
use crate::settings::MailerSettings;
use crate::transport::{Store, Transport};
use chrono::Utc;
use tracing::{debug, info};

/// Prepares sessions for a [`Transport`] and sends or receives through it.
pub struct Mailer<T> {
    transport: T,
    settings: MailerSettings,
}

impl<T: Transport> Mailer<T> {
    #[must_use]
    pub fn new(transport: T) -> Self {
        Self::with_settings(transport, MailerSettings::default())
    }

    #[must_use]
    pub const fn with_settings(transport: T, settings: MailerSettings) -> Self {
        Self {
            transport,
            settings,
        }
    }

    #[must_use]
    pub const fn settings(&self) -> &MailerSettings {
        &self.settings
    }

    #[must_use]
    pub const fn transport(&self) -> &T {
        &self.transport
    }

    /// Create an empty message ready to be sent through `config`.
    ///
    /// For authenticated endpoints the username doubles as the sender
    /// address.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidConfig`] if `config` cannot be resolved
    /// for sending, or [`Error::AddressFormat`] if the username is not
    /// a valid mailbox.
    pub fn prepare_message(&self, config: &MailConfig) -> Result<Message> {
        let props = resolve_send(config, &self.settings)?;
        let session = build_session(props, credentials(config), &self.settings);

        let mut message = Message::new(session);
        if let Some(username) = config.username.as_deref().filter(|u| !u.is_empty()) {
            message.set_from(username)?;
        }
        Ok(message)
    }

    /// Like [`prepare_message`](Self::prepare_message), addressed to
    /// `recipient`.
    ///
    /// # Errors
    ///
    /// As [`prepare_message`](Self::prepare_message), plus
    /// [`Error::AddressFormat`] for a malformed recipient.
    pub fn prepare_message_to(&self, config: &MailConfig, recipient: &str) -> Result<Message> {
        let mut message = self.prepare_message(config)?;
        message.set_recipient(recipient)?;
        Ok(message)
    }

    /// Deliver `message` through the transport. No retries.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Transport`] if the message has no recipients or
    /// the transport fails to deliver it.
    pub fn send(&self, message: &mut Message) -> Result<()> {
        if message.to().is_empty() {
            return Err(Error::Transport("message has no recipients".into()));
        }
        if message.sent_date().is_none() {
            message.set_sent_date(Utc::now());
        }

        let props = message.session().properties();
        debug!("Delivering via {}:{}", props.host(), props.port());
        self.transport.deliver(message)?;
        info!("Delivered message to {} recipient(s)", message.to().len());
        Ok(())
    }

    /// Resolve `config` for receiving and return a connected store.
    ///
    /// The caller owns the store and should close it when done.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidConfig`] if `config` cannot be resolved
    /// for receiving, [`Error::NoProvider`] if the transport does not
    /// support the protocol, or [`Error::Transport`] if connecting fails.
    pub fn open_store(&self, config: &MailConfig) -> Result<T::Store> {
        let props = resolve_receive(config, &self.settings)?;
        let protocol = props.protocol();
        let session = build_session(props, credentials(config), &self.settings);

        let mut store = self.transport.store(&session, protocol.as_str())?;
        if !store.is_connected() {
            connect(&mut store, &session)?;
        }
        Ok(store)
    }
}

fn credentials(config: &MailConfig) -> Option<Credentials> {
    config.is_authenticated().then(|| {
        Credentials::new(
            config.username.clone().unwrap_or_default(),
            config.password.clone().unwrap_or_default(),
        )
    })
}

fn connect<S: Store>(store: &mut S, session: &Session) -> Result<()> {
    let props = session.properties();
    let credentials = session.authenticate();
    debug!(
        "Connecting to {} store at {}:{} ({})",
        props.protocol(),
        props.host(),
        props.port(),
        if credentials.is_some() { "login" } else { "anonymous" }
    );

    store.connect(credentials.as_ref())?;

    info!("Connected to {} store", props.protocol());
    Ok(())
}
