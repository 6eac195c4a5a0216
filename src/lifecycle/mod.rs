//! Lifecycle management subsystem.
//!
//! # Data Flow
//! ```text
//! Shutdown (shutdown.rs):
//!     Shutdown coordinator → subscriptions held by long-running tasks
//!
//! Signals (signals.rs):
//!     SIGTERM/SIGINT or upstream trigger → combined cancellation
//! ```
//!
//! # Design Decisions
//! - Cancellation is cooperative and one-directional: once the combined
//!   signal fires, the server moves irrevocably toward draining
//! - Signal watching is a guarded task, released on every exit path
//! - The server depends only on "a subscription that becomes cancelled",
//!   never on the signal mechanism directly, so tests can drive shutdown
//!   without touching real OS signals

pub mod shutdown;
pub mod signals;

pub use shutdown::{Shutdown, ShutdownListener};
pub use signals::{capture_interrupts, SignalGuard};
