//! Mail transport seam
//!
//! The traits here are implemented by whatever library actually speaks
//! SMTP, POP3 or IMAP. This crate only prepares sessions for them and
//! navigates the stores and folders they hand back.

use crate::error::Result;
use crate::folder::{FolderKind, OpenMode};
use crate::message::Message;
use crate::session::{Credentials, Session};

/// Entry point into a mail transport library.
pub trait Transport {
    type Store: Store;

    /// Instantiate a store for `protocol` (e.g. `"imap"`).
    ///
    /// # Errors
    ///
    /// Returns [`Error::NoProvider`](crate::Error::NoProvider) if the
    /// transport has no provider for `protocol`.
    fn store(&self, session: &Session, protocol: &str) -> Result<Self::Store>;

    /// Deliver a message using the session it was prepared with.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Transport`](crate::Error::Transport) on network
    /// or protocol failure.
    fn deliver(&self, message: &Message) -> Result<()>;
}

/// A mailbox account on a server.
pub trait Store {
    type Folder: Folder;

    fn is_connected(&self) -> bool;

    /// Connect, logging in when credentials are given.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Transport`](crate::Error::Transport) if the
    /// connection or login fails.
    fn connect(&mut self, credentials: Option<&Credentials>) -> Result<()>;

    /// Handle for the folder at `name`. The folder need not exist.
    ///
    /// # Errors
    ///
    /// Propagates transport failures.
    fn folder(&self, name: &str) -> Result<Self::Folder>;

    /// The root folder of the account namespace.
    ///
    /// # Errors
    ///
    /// Propagates transport failures.
    fn default_folder(&self) -> Result<Self::Folder>;

    /// # Errors
    ///
    /// Propagates transport failures.
    fn close(&mut self) -> Result<()>;
}

/// A container of messages and/or sub-folders.
pub trait Folder: Sized {
    fn name(&self) -> &str;

    fn full_name(&self) -> &str;

    /// # Errors
    ///
    /// Propagates transport failures.
    fn exists(&self) -> Result<bool>;

    /// # Errors
    ///
    /// Propagates transport failures.
    fn kind(&self) -> Result<FolderKind>;

    /// Immediate children, in the order the server lists them.
    ///
    /// # Errors
    ///
    /// Propagates transport failures.
    fn list(&self) -> Result<Vec<Self>>;

    /// Handle for the child `name`. The child need not exist.
    ///
    /// # Errors
    ///
    /// Propagates transport failures.
    fn folder(&self, name: &str) -> Result<Self>;

    /// Create this folder, and any missing parents, with `kind`.
    ///
    /// Returns `false` if the server refused.
    ///
    /// # Errors
    ///
    /// Propagates transport failures.
    fn create(&mut self, kind: FolderKind) -> Result<bool>;

    /// # Errors
    ///
    /// Propagates transport failures, e.g. when the folder is missing.
    fn open(&mut self, mode: OpenMode) -> Result<()>;

    /// Current open mode, `None` while closed.
    fn mode(&self) -> Option<OpenMode>;

    /// # Errors
    ///
    /// Propagates transport failures.
    fn close(&mut self) -> Result<()>;
}
