//! # Carlot Architecture
//!
//! Carlot is a **local-first car listing marketplace library** with a thin CLI
//! client. Listings are kept in one persisted JSON document; users browse and
//! search the catalog, submit new listings through a validated form, view a
//! listing's details and delete listings. A simulated login records a flag and
//! an email, with no real authentication.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Parses arguments, renders cards and details              │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade over commands                                │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - Search, sell, view, delete, login                        │
//! │  - Pure decisions: validation, filtering, record mapping    │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - DataStore trait over a KeyValueBackend                   │
//! │  - FileStore (production), InMemoryStore (testing)          │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! From `api.rs` inward nothing writes to stdout/stderr or exits the process,
//! so the same core could back a web front end.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade, entry point for all operations
//! - [`commands`]: Business logic for each command
//! - [`store`]: Storage abstraction and implementations
//! - [`model`]: Core data types (`Listing`, `NewListing`, `Session`)
//! - [`form`]: Raw form values and their mapping to records
//! - [`validation`]: Sell and login form validation
//! - [`format`]: Price formatting and id generation
//! - [`seed`]: Sample listings for an empty store
//! - [`config`]: Configuration management
//! - [`error`]: Error types

pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod form;
pub mod format;
pub mod model;
pub mod seed;
pub mod store;
pub mod validation;
