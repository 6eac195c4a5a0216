//! HTTP application server lifecycle library.
//!
//! # Architecture Overview
//!
//! ```text
//!                     ┌────────────────────────────────────────────────┐
//!                     │                  APP SERVER                    │
//!                     │                                                │
//!    SIGINT/SIGTERM ──┼─▶ lifecycle::signals ──┐                       │
//!                     │                        ├─▶ combined cancel     │
//!   Shutdown.trigger ─┼─▶ lifecycle::shutdown ─┘          │            │
//!                     │                                   ▼            │
//!    Client Request ──┼─▶ net::listener ─▶ net::serve ─▶ http::Server  │
//!                     │    (bind/accept)    (drain loop)  (controller) │
//!                     │                                                │
//!                     │    config: schema → loader → validation        │
//!                     └────────────────────────────────────────────────┘
//! ```
//!
//! The controller in [`http::Server`] owns the start/serve/drain/stop
//! state machine; the request handler is injected as an [`axum::Router`]
//! and is never inspected here.

pub mod config;
pub mod http;
pub mod lifecycle;
pub mod net;

pub use config::ServerConfig;
pub use http::{Server, ServerError};
pub use lifecycle::Shutdown;
