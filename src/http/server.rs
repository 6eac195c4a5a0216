//! Server lifecycle controller.
//!
//! # Responsibilities
//! - Drive the Idle → Listening → Draining → Stopped state machine
//! - Reconcile listener faults, cancellation, and the drain deadline
//!   into exactly one terminal outcome per invocation
//! - Release the listener and the signal watcher on every exit path
//!
//! # Design Decisions
//! - The serve task reports faults through a single-slot channel,
//!   written at most once; the foreground task is the only place the
//!   final outcome is decided
//! - After cancellation fires, the error slot is re-polled once before
//!   draining, closing the race between "shutdown requested" and
//!   "error observed"
//! - The drain deadline is always a fresh grace period, never charged
//!   against time already spent waiting for cancellation

use std::time::Duration;

use axum::Router;
use tokio::sync::oneshot;
use tokio::sync::oneshot::error::TryRecvError;

use crate::config::ServerConfig;
use crate::lifecycle::shutdown::ShutdownListener;
use crate::lifecycle::signals;
use crate::net::listener::ListenerError;
use crate::net::serve;

/// Error type for a server run.
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    /// The transport faulted for a reason unrelated to a requested
    /// shutdown (bind failure, accept failure).
    #[error("server shutdown abnormally: {0}")]
    Transport(#[from] ListenerError),

    /// In-flight requests did not complete within the grace period.
    /// Listener resources are released regardless.
    #[error("graceful shutdown did not complete within {grace:?}")]
    DrainTimeout { grace: Duration },

    /// The serve task ended without reporting an outcome (panic or
    /// cancellation from outside). The single-slot channel closing
    /// without a value makes this observable instead of hanging.
    #[error("serve task terminated unexpectedly")]
    ServeTaskFailed,
}

/// HTTP server bound to one [`ServerConfig`].
///
/// Construction is pure; all I/O happens inside [`Server::start`].
/// The same server may be started again after a previous invocation
/// has returned.
pub struct Server {
    config: ServerConfig,
}

impl Server {
    /// Create a new server with the given configuration.
    pub fn new(config: ServerConfig) -> Self {
        Self { config }
    }

    /// Get a reference to the config.
    pub fn config(&self) -> &ServerConfig {
        &self.config
    }

    /// Run the server with `app` as its handler, blocking until a
    /// terminal outcome.
    ///
    /// Shutdown begins when `parent` fires or the process receives
    /// SIGINT/SIGTERM. New connections are then rejected and in-flight
    /// requests get up to [`ServerConfig::shutdown_grace`] to finish.
    ///
    /// Returns `Ok(())` on a clean shutdown, [`ServerError::Transport`]
    /// if the listener faulted, or [`ServerError::DrainTimeout`] if the
    /// drain deadline elapsed.
    pub async fn start(&self, parent: ShutdownListener, app: Router) -> Result<(), ServerError> {
        let result = self.run(parent, app).await;

        // Terminal lifecycle event, emitted on every exit path.
        match &result {
            Ok(()) => tracing::info!("server exited"),
            Err(err) => tracing::info!(error = %err, "server exited"),
        }

        result
    }

    async fn run(&self, parent: ShutdownListener, app: Router) -> Result<(), ServerError> {
        // Capture interrupts so we can handle them gracefully. The
        // guard releases the watcher on every return path below.
        let (mut cancelled, _signals) = signals::capture_interrupts(parent);

        tracing::info!(address = %self.config.bind_address, "starting server");

        let (err_tx, mut err_rx) = oneshot::channel();
        let (drain_tx, drain_rx) = oneshot::channel();

        let bind_address = self.config.bind_address.clone();
        let header_read_timeout = self.config.header_read_timeout();
        let mut serve_task = tokio::spawn(async move {
            if let Err(err) =
                serve::listen_and_serve(&bind_address, app, header_read_timeout, drain_rx).await
            {
                // Single-slot channel: written at most once. The
                // receiver may already be gone on some exit paths.
                let _ = err_tx.send(err);
            }
        });

        tokio::select! {
            _ = cancelled.recv() => {}
            reported = &mut err_rx => {
                // The transport died before any shutdown was requested;
                // there is nothing left to drain.
                return match reported {
                    Ok(err) => Err(ServerError::Transport(err)),
                    Err(_) => Err(ServerError::ServeTaskFailed),
                };
            }
        }

        // Shutdown was requested, but the serve task may have faulted
        // in the window before we got here. A raced-in error wins.
        if let Ok(err) = err_rx.try_recv() {
            return Err(ServerError::Transport(err));
        }

        tracing::info!("shutdown requested, draining in-flight requests");
        let _ = drain_tx.send(());

        let grace = self.config.shutdown_grace();
        match tokio::time::timeout(grace, &mut serve_task).await {
            Ok(Ok(())) => match err_rx.try_recv() {
                Ok(err) => Err(ServerError::Transport(err)),
                Err(TryRecvError::Closed) | Err(TryRecvError::Empty) => Ok(()),
            },
            Ok(Err(join_err)) => {
                tracing::error!(error = %join_err, "serve task failed during drain");
                Err(ServerError::ServeTaskFailed)
            }
            Err(_elapsed) => {
                // Deadline blown: tear the serve task down so the
                // listener and connection state are released.
                serve_task.abort();
                tracing::warn!(grace_secs = grace.as_secs_f64(), "drain deadline exceeded");
                Err(ServerError::DrainTimeout { grace })
            }
        }
    }
}
