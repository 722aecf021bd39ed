//! # Command Layer
//!
//! This module contains the **core business logic** of carlot. Each command
//! lives in its own submodule and implements plain Rust functions over the
//! [`DataStore`](crate::store::DataStore) trait.
//!
//! ## What Commands Do NOT Do
//!
//! - **Any I/O**: no stdout, stderr or terminal concerns
//! - **Argument parsing**: that's the CLI layer's job
//! - **Exit codes**: return `Result`, let the caller decide
//!
//! ## Structured Returns
//!
//! Commands return [`CmdResult`], not strings:
//! - `listed_listings`: listings to display (list, search, view)
//! - `affected_listings`: listings that were created or removed
//! - `validation`: field errors when a form was rejected
//! - `session`: login state (login, whoami)
//! - `config`: configuration (config)
//! - `messages`: structured messages with levels
//!
//! A rejected form is **not** an error: the command succeeds and carries the
//! [`ValidationResult`] so the UI can show each message next to its field.
//!
//! ## Command Modules
//!
//! - [`list`]: all listings in display order
//! - [`search`]: case-insensitive substring filter
//! - [`create`]: validate the sell form and store a new listing
//! - [`view`]: one listing by id or details link
//! - [`delete`]: remove a listing
//! - [`login`]: simulated login, logout and session status
//! - [`reset`]: restore the sample listings
//! - [`config`]: show and change configuration

use crate::config::CarlotConfig;
use crate::model::{Listing, Session};
use crate::validation::ValidationResult;
use serde::Serialize;
use std::path::PathBuf;

pub mod config;
pub mod create;
pub mod delete;
pub mod list;
pub mod login;
pub mod reset;
pub mod search;
pub mod view;

#[derive(Debug, Clone)]
pub struct CarlotPaths {
    /// Directory holding the persisted keys and `config.json`.
    pub data_dir: PathBuf,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone, Serialize)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub affected_listings: Vec<Listing>,
    pub listed_listings: Vec<Listing>,
    pub validation: Option<ValidationResult>,
    pub session: Option<Session>,
    pub config: Option<CarlotConfig>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_affected_listings(mut self, listings: Vec<Listing>) -> Self {
        self.affected_listings = listings;
        self
    }

    pub fn with_listed_listings(mut self, listings: Vec<Listing>) -> Self {
        self.listed_listings = listings;
        self
    }

    pub fn with_validation(mut self, validation: ValidationResult) -> Self {
        self.validation = Some(validation);
        self
    }

    pub fn with_session(mut self, session: Session) -> Self {
        self.session = Some(session);
        self
    }

    pub fn with_config(mut self, config: CarlotConfig) -> Self {
        self.config = Some(config);
        self
    }

    /// True when a submitted form failed validation.
    pub fn is_rejected(&self) -> bool {
        self.validation.as_ref().is_some_and(|v| !v.is_valid())
    }
}
