//! Test data model for the fake transport
//!
//! ```ignore
//! let transport = MailboxBuilder::new()
//!     .provider("imap")
//!     .folder("INBOX")
//!     .folder_with("Archive", FolderKind::HOLDS_FOLDERS)
//!     .folder("Archive/2024")
//!     .build();
//! ```
//!
//! Folder names are full paths separated by `/`. The root folder has
//! the empty name and its existence and kind are configured separately
//! because servers disagree on whether the namespace root is a real
//! folder.

use super::transport::FakeTransport;
use mail_session::{Credentials, FolderKind};
use std::sync::{Arc, Mutex};

pub const SEPARATOR: char = '/';

#[derive(Debug, Clone)]
pub struct FolderEntry {
    pub full_name: String,
    pub kind: FolderKind,
}

impl FolderEntry {
    pub fn parent(&self) -> &str {
        self.full_name
            .rfind(SEPARATOR)
            .map_or("", |i| &self.full_name[..i])
    }
}

/// Everything a fake server knows, shared by all handles.
#[derive(Debug)]
pub struct Mailbox {
    pub root_exists: bool,
    pub root_kind: FolderKind,
    pub folders: Vec<FolderEntry>,
    pub refuse_create: bool,
    /// Credentials passed to each `Store::connect`, in order.
    pub logins: Vec<Option<Credentials>>,
    pub creates: Vec<String>,
}

impl Mailbox {
    pub fn get(&self, full_name: &str) -> Option<&FolderEntry> {
        self.folders.iter().find(|f| f.full_name == full_name)
    }
}

pub type Shared = Arc<Mutex<Mailbox>>;

/// Builder for a `FakeTransport` and its folder tree.
pub struct MailboxBuilder {
    mailbox: Mailbox,
    providers: Vec<String>,
    connected: bool,
    connect_error: Option<String>,
    deliver_error: Option<String>,
}

impl MailboxBuilder {
    pub fn new() -> Self {
        Self {
            mailbox: Mailbox {
                root_exists: true,
                root_kind: FolderKind::HOLDS_FOLDERS,
                folders: Vec::new(),
                refuse_create: false,
                logins: Vec::new(),
                creates: Vec::new(),
            },
            providers: Vec::new(),
            connected: false,
            connect_error: None,
            deliver_error: None,
        }
    }

    /// Register a store provider, e.g. `"imap"`.
    pub fn provider(mut self, protocol: &str) -> Self {
        self.providers.push(protocol.to_string());
        self
    }

    /// Add a folder that holds messages.
    pub fn folder(self, full_name: &str) -> Self {
        self.folder_with(full_name, FolderKind::HOLDS_MESSAGES)
    }

    pub fn folder_with(mut self, full_name: &str, kind: FolderKind) -> Self {
        self.mailbox.folders.push(FolderEntry {
            full_name: full_name.to_string(),
            kind,
        });
        self
    }

    /// Configure the namespace root.
    pub fn root(mut self, exists: bool, kind: FolderKind) -> Self {
        self.mailbox.root_exists = exists;
        self.mailbox.root_kind = kind;
        self
    }

    pub fn refuse_create(mut self) -> Self {
        self.mailbox.refuse_create = true;
        self
    }

    /// Stores come back already connected.
    pub fn connected(mut self) -> Self {
        self.connected = true;
        self
    }

    pub fn fail_connect(mut self, reason: &str) -> Self {
        self.connect_error = Some(reason.to_string());
        self
    }

    pub fn fail_delivery(mut self, reason: &str) -> Self {
        self.deliver_error = Some(reason.to_string());
        self
    }

    pub fn build(self) -> FakeTransport {
        FakeTransport::new(
            Arc::new(Mutex::new(self.mailbox)),
            self.providers,
            self.connected,
            self.connect_error,
            self.deliver_error,
        )
    }
}
