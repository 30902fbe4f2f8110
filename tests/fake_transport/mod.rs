//! Fake mail transport for integration testing
//!
//! An in-process stand-in for the library that would normally speak
//! SMTP, POP3 and IMAP. Nothing touches the network: delivered
//! messages land in an outbox and stores read from a folder tree built
//! up front.
//!
//! ## Module layout
//!
//! - `mailbox` -- folder tree and the builder tests use to set it up
//! - `store` -- `Store` and `Folder` implementations over that tree
//! - `transport` -- provider registry, outbox and failure injection

#![allow(dead_code, unused_imports)]

pub mod mailbox;
mod store;
mod transport;

pub use mailbox::MailboxBuilder;
pub use store::{FakeFolder, FakeStore};
pub use transport::{Delivered, FakeTransport};
