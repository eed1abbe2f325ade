//! # Todoz Architecture
//!
//! Todoz is a **UI-agnostic todo-list library** with a CLI client. The
//! separation matters: everything from `api.rs` inward takes plain Rust
//! arguments, returns `Result<CmdResult>`, and never touches stdout,
//! stderr, or `std::process::exit`. The binary is the only place that
//! knows about a terminal.
//!
//! ```text
//! CLI layer (main.rs, args.rs)   — argument parsing, colored printing
//!            │
//! API layer (api.rs)             — TodoApi facade; owns the store and
//!            │                     the current filter
//! Command layer (commands/*.rs)  — pure state transitions, one module
//!            │                     per operation
//! Storage layer (store/)         — DataStore trait; FileStore and
//!                                  InMemoryStore
//! ```
//!
//! The render layer ([`render`]) sits beside the commands: it turns a
//! filtered list and its stats into strings, so view output is testable
//! without a terminal.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade—entry point for all operations
//! - [`commands`]: Business logic for each operation
//! - [`store`]: Storage abstraction and implementations
//! - [`model`]: Core data types (`Todo`, `Filter`)
//! - [`render`]: List, row, and stats rendering
//! - [`session`]: The per-row edit session state machine
//! - [`config`]: Configuration management
//! - [`error`]: Error types

pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod model;
pub mod render;
pub mod session;
pub mod store;
