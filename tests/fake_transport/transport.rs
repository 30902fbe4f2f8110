//! Provider registry and outbox

use super::mailbox::Shared;
use super::store::FakeStore;
use mail_session::{Credentials, Error, Message, Result, Session, Transport};
use std::sync::{Arc, Mutex};

/// A message as the fake server received it.
#[derive(Debug, Clone)]
pub struct Delivered {
    pub from: Option<String>,
    pub to: Vec<String>,
    pub subject: Option<String>,
    pub text: Option<String>,
    pub host: String,
    pub port: u16,
    /// What the session's authenticator answered, if anything.
    pub credentials: Option<Credentials>,
}

pub struct FakeTransport {
    mailbox: Shared,
    providers: Vec<String>,
    connected: bool,
    connect_error: Option<String>,
    deliver_error: Option<String>,
    outbox: Arc<Mutex<Vec<Delivered>>>,
}

impl FakeTransport {
    pub fn new(
        mailbox: Shared,
        providers: Vec<String>,
        connected: bool,
        connect_error: Option<String>,
        deliver_error: Option<String>,
    ) -> Self {
        Self {
            mailbox,
            providers,
            connected,
            connect_error,
            deliver_error,
            outbox: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn outbox(&self) -> Vec<Delivered> {
        self.outbox.lock().unwrap().clone()
    }
}

impl Transport for FakeTransport {
    type Store = FakeStore;

    fn store(&self, session: &Session, protocol: &str) -> Result<FakeStore> {
        if !self.providers.iter().any(|p| p == protocol) {
            return Err(Error::NoProvider(protocol.to_string()));
        }
        let props = session.properties();
        Ok(FakeStore::new(
            protocol.to_string(),
            props.host().to_string(),
            props.port(),
            self.connected,
            self.connect_error.clone(),
            self.mailbox.clone(),
        ))
    }

    fn deliver(&self, message: &Message) -> Result<()> {
        let session = message.session();
        session.trace("MAIL FROM / RCPT TO / DATA");

        if let Some(reason) = &self.deliver_error {
            return Err(Error::Transport(reason.clone()));
        }

        let props = session.properties();
        let credentials = if props.is_authenticated() {
            session.authenticate()
        } else {
            None
        };

        self.outbox.lock().unwrap().push(Delivered {
            from: message.from().map(|m| m.email.to_string()),
            to: message.to().iter().map(|m| m.email.to_string()).collect(),
            subject: message.subject().map(ToString::to_string),
            text: message.text().map(ToString::to_string),
            host: props.host().to_string(),
            port: props.port(),
            credentials,
        });
        Ok(())
    }
}
