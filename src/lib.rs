//! Chatling - Conversation session client library
//!
//! This library provides the core functionality for the Chatling chat
//! client, including session identity, the append-only message log,
//! message dispatch, backend abstractions, and optional speech
//! capabilities.
//!
//! # Architecture
//!
//! The library is organized into the following modules:
//!
//! - `session`: Session identity and the append-only message log
//! - `dispatch`: Sending one user message and integrating exactly one reply
//! - `backend`: Chat backend abstraction and implementations (HTTP, canned)
//! - `speech`: Optional speech input/output capabilities
//! - `panel`: Widget-level state machine for the interactive panel
//! - `suggestions`: Suggested-reply shortcuts
//! - `mirror`: Write-only diagnostic mirror of the session identity
//! - `config`: Configuration management and validation
//! - `error`: Error types and result aliases
//! - `cli`: Command-line interface definition
//! - `commands`: Handlers for the CLI subcommands
//!
//! # Example
//!
//! ```no_run
//! use chatling::backend::CannedBackend;
//! use chatling::config::LogConfig;
//! use chatling::Dispatcher;
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let mut dispatcher = Dispatcher::new(Arc::new(CannedBackend::default()), &LogConfig::default());
//!     dispatcher.send("Hello!").await;
//!     Ok(())
//! }
//! ```

pub mod backend;
pub mod cli;
pub mod commands;
pub mod config;
pub mod dispatch;
pub mod error;
pub mod mirror;
pub mod panel;
pub mod session;
pub mod speech;
pub mod suggestions;

// Re-export commonly used types
pub use config::Config;
pub use dispatch::Dispatcher;
pub use error::{ChatlingError, Result};
pub use panel::{Activity, PanelState};
pub use session::{Message, MessageLog, Sender, Session};
