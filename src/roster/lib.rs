//! # Roster Architecture
//!
//! Roster is a small **UI-agnostic student record library** with an interactive
//! console client on top. The console is one client of the library, not the
//! other way around.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Menu state machine, prompts, styled console output       │
//! │  - The ONLY place that knows about stdin/stdout/exit codes  │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade over commands                                │
//! │  - Carries store-wide settings (age parsing policy)         │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - Validation and CRUD logic                                │
//! │  - Returns `Result<CmdResult>`, never prints                │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - Abstract DataStore trait                                 │
//! │  - InMemoryStore (insertion ordered, linear search)         │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Results, not panics
//!
//! Every operation returns [`error::Result<commands::CmdResult>`]. A success
//! carries messages plus the affected or listed records; a failure carries a
//! [`error::RosterError`] whose `Display` is the operator-facing message. Bad
//! input is always a recoverable outcome.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade, entry point for all operations
//! - [`commands`]: Business logic for each operation
//! - [`store`]: Storage abstraction and the in-memory implementation
//! - [`model`]: The `Student` record
//! - [`config`]: Configuration loading
//! - [`error`]: Error types
//! - `cli`: Argument parsing, the interactive shell and rendering for the binary (not part of the lib API)

pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod model;
pub mod store;
