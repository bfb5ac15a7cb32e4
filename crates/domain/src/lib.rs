//! `sl-domain` — shared types for Supportline.
//!
//! Leaf crate holding the message entity, the locale set, the shared error
//! type, the TOML configuration tree, and structured trace events. Every
//! other crate in the workspace depends on this one; this one depends on
//! nothing internal.

pub mod config;
pub mod error;
pub mod locale;
pub mod message;
pub mod trace;

pub use config::{BackendConfig, ChatConfig, Config};
pub use error::{Error, Result};
pub use locale::Locale;
pub use message::{Message, Origin};
pub use trace::TraceEvent;
