//! # Command Layer
//!
//! This module contains the **business logic** behind each user action. Each command
//! lives in its own submodule and implements pure Rust functions over an
//! [`AddressBook`](crate::repository::AddressBook).
//!
//! ## What Commands Do NOT Do
//!
//! - **Any I/O** besides what the book and resolver do: no stdout, stderr or formatting
//! - **Argument parsing**: That's the CLI layer's job
//! - **Exit codes**: Return `Result`, let the caller decide
//! - **User interaction**: No prompts or confirmations (return data, UI decides)
//!
//! ## Structured Returns
//!
//! Commands return [`CmdResult`], not strings:
//! - `affected_addresses`: addresses that were added or removed, with their index
//! - `listed_addresses`: addresses to display, with their canonical index
//! - `total`: size of the full collection after the command
//! - `messages`: structured messages with levels (info, success, warning)
//!
//! ## Testing Strategy
//!
//! **This is where most of the testing lives.** Command tests use `InMemoryStore`
//! and `StaticResolver`, never the filesystem or the network.
//!
//! ## Command Modules
//!
//! - [`add`]: Look up a postal code and prepend the result
//! - [`list`]: List (optionally filtered) addresses
//! - [`view`]: Show selected addresses in full
//! - [`delete`]: Remove selected addresses
//! - [`clear`]: Remove everything
//! - [`helpers`]: Selector resolution

use crate::index::DisplayAddress;
use serde::Serialize;

pub mod add;
pub mod clear;
pub mod delete;
pub mod helpers;
pub mod list;
pub mod view;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    fn new(level: MessageLevel, content: impl Into<String>) -> Self {
        Self {
            level,
            content: content.into(),
        }
    }

    pub fn info(content: impl Into<String>) -> Self {
        Self::new(MessageLevel::Info, content)
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self::new(MessageLevel::Success, content)
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self::new(MessageLevel::Warning, content)
    }
}

#[derive(Debug, Default, Serialize)]
pub struct CmdResult {
    pub affected_addresses: Vec<DisplayAddress>,
    pub listed_addresses: Vec<DisplayAddress>,
    pub total: usize,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_affected_addresses(mut self, addresses: Vec<DisplayAddress>) -> Self {
        self.affected_addresses = addresses;
        self
    }

    pub fn with_listed_addresses(mut self, addresses: Vec<DisplayAddress>) -> Self {
        self.listed_addresses = addresses;
        self
    }

    pub fn with_total(mut self, total: usize) -> Self {
        self.total = total;
        self
    }
}
