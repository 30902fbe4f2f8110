//! Folder lookup helpers
//!
//! Servers disagree on where incoming mail lives. [`open_inbox`] tries
//! the RFC 3501 `INBOX` name first and falls back to the account root
//! or its first child that can hold messages.

use crate::error::{Error, Result};
use crate::transport::{Folder, Store};
use bitflags::bitflags;
use std::fmt;
use tracing::{debug, warn};

pub const INBOX: &str = "INBOX";

bitflags! {
    /// What a folder is able to contain.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct FolderKind: u8 {
        const HOLDS_MESSAGES = 0b01;
        const HOLDS_FOLDERS = 0b10;
    }
}

impl FolderKind {
    /// Kind for the requested capabilities.
    #[must_use]
    pub const fn with(messages: bool, folders: bool) -> Self {
        let mut kind = Self::empty();
        if messages {
            kind = kind.union(Self::HOLDS_MESSAGES);
        }
        if folders {
            kind = kind.union(Self::HOLDS_FOLDERS);
        }
        kind
    }
}

/// Access mode for an opened folder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OpenMode {
    ReadOnly,
    ReadWrite,
}

impl OpenMode {
    #[must_use]
    pub const fn from_writable(writable: bool) -> Self {
        if writable { Self::ReadWrite } else { Self::ReadOnly }
    }
}

impl fmt::Display for OpenMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::ReadOnly => "read-only",
            Self::ReadWrite => "read-write",
        })
    }
}

/// # Errors
///
/// Propagates transport failures.
pub fn holds_messages<F: Folder>(folder: &F) -> Result<bool> {
    Ok(folder.kind()?.contains(FolderKind::HOLDS_MESSAGES))
}

/// # Errors
///
/// Propagates transport failures.
pub fn holds_folders<F: Folder>(folder: &F) -> Result<bool> {
    Ok(folder.kind()?.contains(FolderKind::HOLDS_FOLDERS))
}

/// Immediate children of the store's default folder.
///
/// # Errors
///
/// Propagates transport failures.
pub fn folders<S: Store>(store: &S) -> Result<Vec<S::Folder>> {
    store.default_folder()?.list()
}

/// Find and open the folder that receives incoming mail.
///
/// # Errors
///
/// Returns [`Error::FolderUnavailable`] if neither `INBOX`, the default
/// folder, nor any of its children can hold messages.
pub fn open_inbox<S: Store>(store: &S, writable: bool) -> Result<S::Folder> {
    let inbox = store.folder(INBOX)?;
    if inbox.exists()? {
        return open_folder(inbox, writable);
    }

    let root = store.default_folder()?;
    if root.exists()? && holds_messages(&root)? {
        debug!("No {} folder, using default folder '{}'", INBOX, root.full_name());
        return open_folder(root, writable);
    }

    for child in root.list()? {
        if holds_messages(&child)? {
            warn!("No {} folder, falling back to '{}'", INBOX, child.full_name());
            return open_folder(child, writable);
        }
    }

    Err(Error::FolderUnavailable(format!(
        "no {INBOX} or message-holding folder found"
    )))
}

/// Open `folder` read-write or read-only.
///
/// # Errors
///
/// Propagates transport failures.
pub fn open_folder<F: Folder>(mut folder: F, writable: bool) -> Result<F> {
    let mode = OpenMode::from_writable(writable);
    folder.open(mode)?;
    debug!("Opened '{}' {}", folder.full_name(), mode);
    Ok(folder)
}

/// Get the child `name` of `parent`, creating it if it does not exist.
///
/// # Errors
///
/// Returns [`Error::FolderUnavailable`] if the server refuses to create
/// the folder.
pub fn create_folder<F: Folder>(parent: &F, name: &str, kind: FolderKind) -> Result<F> {
    let mut folder = parent.folder(name)?;
    if !folder.exists()? && !create(&mut folder, kind)? {
        return Err(Error::FolderUnavailable(format!(
            "server refused to create '{}'",
            folder.full_name()
        )));
    }
    Ok(folder)
}

/// Create `folder` with `kind`, returning whether the server accepted.
///
/// # Errors
///
/// Propagates transport failures.
pub fn create<F: Folder>(folder: &mut F, kind: FolderKind) -> Result<bool> {
    debug!("Creating folder '{}' ({:?})", folder.full_name(), kind);
    folder.create(kind)
}
