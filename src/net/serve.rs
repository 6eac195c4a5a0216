//! Connection serve loop with graceful drain.
//!
//! # Responsibilities
//! - Bind the listener and dispatch accepted connections to hyper
//! - Apply the HTTP/1 header-read timeout
//! - On drain: stop accepting, drop the listener, await in-flight
//!   connections
//!
//! # Design Decisions
//! - Binding happens inside this task, so bind failures flow through
//!   the same error path as any other transport fault
//! - The drain wait here is unbounded; the lifecycle controller owns
//!   the grace-period deadline

use std::time::Duration;

use axum::Router;
use hyper_util::rt::{TokioExecutor, TokioIo, TokioTimer};
use hyper_util::server::conn::auto::Builder as ConnectionBuilder;
use hyper_util::server::graceful::GracefulShutdown;
use hyper_util::service::TowerToHyperService;
use tokio::sync::oneshot;

use crate::net::listener::{Listener, ListenerError};

/// Bind `addr` and serve connections with `app` until `drain` fires or
/// the transport faults.
///
/// A clean return means the drain was requested and every in-flight
/// connection has completed.
pub async fn listen_and_serve(
    addr: &str,
    app: Router,
    header_read_timeout: Duration,
    mut drain: oneshot::Receiver<()>,
) -> Result<(), ListenerError> {
    let listener = Listener::bind(addr).await?;

    let mut builder = ConnectionBuilder::new(TokioExecutor::new());
    builder
        .http1()
        .timer(TokioTimer::new())
        .header_read_timeout(header_read_timeout);

    let graceful = GracefulShutdown::new();

    loop {
        tokio::select! {
            accepted = listener.accept() => {
                let (stream, _peer_addr) = accepted?;
                let io = TokioIo::new(stream);
                let service = TowerToHyperService::new(app.clone());
                let conn = builder
                    .serve_connection_with_upgrades(io, service)
                    .into_owned();
                let watched = graceful.watch(conn);
                tokio::spawn(async move {
                    if let Err(err) = watched.await {
                        tracing::debug!(error = %err, "connection closed with error");
                    }
                });
            }
            _ = &mut drain => break,
        }
    }

    // Stop accepting before waiting out in-flight work.
    drop(listener);

    tracing::debug!(in_flight = graceful.count(), "draining in-flight connections");
    graceful.shutdown().await;

    Ok(())
}
