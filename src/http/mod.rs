//! HTTP server lifecycle.
//!
//! # Data Flow
//! ```text
//! Server::start(parent, app)
//!     → derive combined cancellation (parent OR SIGINT/SIGTERM)
//!     → spawn serve task (bind + accept loop)
//!     → race: cancellation fired  vs  serve task errored
//!     → drain with a fresh grace-period deadline
//!     → single terminal outcome
//! ```

pub mod server;

pub use server::{Server, ServerError};
