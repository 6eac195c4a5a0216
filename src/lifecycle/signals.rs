//! OS signal handling.
//!
//! # Responsibilities
//! - Register signal handlers (SIGTERM, SIGINT)
//! - Combine signal delivery with an upstream shutdown subscription
//!   into a single cancellation listener
//! - Release the signal-watching registration on every exit path
//!
//! # Design Decisions
//! - Uses Tokio's signal handling (async-safe)
//! - Single-shot: the first trigger wins; later signals are ignored
//! - The watcher task is owned by a guard so the registration can never
//!   outlive the server invocation that created it

use tokio::task::JoinHandle;

use crate::lifecycle::shutdown::{Shutdown, ShutdownListener};

/// Derive a combined cancellation listener from an upstream shutdown
/// subscription and OS interrupt signals.
///
/// The returned listener resolves when `parent` fires or when the
/// process receives SIGINT or SIGTERM, whichever comes first. The
/// returned [`SignalGuard`] must be kept alive for as long as the
/// combined listener is in use; dropping it tears down the watcher task
/// and its signal registrations.
pub fn capture_interrupts(mut parent: ShutdownListener) -> (ShutdownListener, SignalGuard) {
    let combined = Shutdown::new();
    let listener = combined.subscribe();

    let watcher = tokio::spawn(async move {
        let ctrl_c = async {
            tokio::signal::ctrl_c()
                .await
                .expect("failed to install Ctrl+C handler");
        };

        #[cfg(unix)]
        let terminate = async {
            tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
                .expect("failed to install SIGTERM handler")
                .recv()
                .await;
        };

        #[cfg(not(unix))]
        let terminate = std::future::pending::<()>();

        tokio::select! {
            _ = ctrl_c => {
                tracing::info!("received SIGINT, requesting shutdown");
            }
            _ = terminate => {
                tracing::info!("received SIGTERM, requesting shutdown");
            }
            _ = parent.recv() => {
                tracing::debug!("upstream shutdown requested");
            }
        }

        combined.trigger();
    });

    (listener, SignalGuard { watcher })
}

/// Guard over the signal-watching task.
///
/// Dropping the guard aborts the watcher, releasing its signal
/// registrations. Held by the server for the duration of one `start`
/// invocation so repeated start/stop cycles never accumulate watchers.
pub struct SignalGuard {
    watcher: JoinHandle<()>,
}

impl Drop for SignalGuard {
    fn drop(&mut self) {
        self.watcher.abort();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[tokio::test]
    async fn parent_trigger_fires_combined_listener() {
        let parent = Shutdown::new();
        let (mut combined, _guard) = capture_interrupts(parent.subscribe());

        parent.trigger();

        tokio::time::timeout(Duration::from_millis(200), combined.recv())
            .await
            .expect("combined listener did not fire on parent trigger");
    }

    #[tokio::test]
    async fn guard_drop_releases_watcher() {
        let parent = Shutdown::new();
        let (mut combined, guard) = capture_interrupts(parent.subscribe());

        drop(guard);
        // Watcher aborted; the combined coordinator is dropped with it,
        // so the listener resolves rather than hanging forever.
        tokio::time::timeout(Duration::from_millis(200), combined.recv())
            .await
            .expect("combined listener hung after guard drop");
        assert_eq!(parent.receiver_count(), 0);
    }
}
