//! Network transport orchestration.
//!
//! # Data Flow
//! ```text
//! listener.rs:
//!     Bind address → TcpListener → accepted streams
//!
//! serve.rs:
//!     Accepted stream → hyper connection → watched for drain
//!     Drain trigger → stop accepting → drop listener → await in-flight
//! ```
//!
//! The protocol work itself belongs to hyper; this module only starts
//! and stops it.

pub mod listener;
pub mod serve;

pub use listener::{Listener, ListenerError};
