//! Error types for mail-session

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    /// Contradictory or unresolvable connection settings.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Invalid e-mail address '{address}': {reason}")]
    AddressFormat { address: String, reason: String },

    /// The transport has no provider registered for the protocol.
    #[error("No provider for protocol: {0}")]
    NoProvider(String),

    #[error("Transport error: {0}")]
    Transport(String),

    #[error("Folder unavailable: {0}")]
    FolderUnavailable(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// A static usage mistake that retrying cannot fix.
    #[must_use]
    pub const fn is_invalid_config(&self) -> bool {
        matches!(self, Self::InvalidConfig(_))
    }

    /// A network or protocol failure reported by the transport.
    ///
    /// These are the only errors where a caller-level retry may help.
    #[must_use]
    pub const fn is_transport(&self) -> bool {
        matches!(self, Self::Transport(_) | Self::Io(_))
    }
}

pub type Result<T> = std::result::Result<T, Error>;
