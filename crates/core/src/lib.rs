//! Newsdesk Core Library
//!
//! Domain models, credential validation, the client session state machine,
//! and durable storage for the Newsdesk client.

pub mod error;
pub mod models;
pub mod session;
pub mod storage;
pub mod validate;

pub use error::{Error, Result};
pub use models::*;
pub use session::{AuthPhase, Session, DEFAULT_IDLE_TIMEOUT_MINUTES};
pub use storage::{Database, SessionStore};
