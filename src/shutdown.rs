//! Process shutdown wiring.
//!
//! A plugin is told to stop by its host (or an operator) via SIGTERM or
//! SIGINT. Cancellation must not abort Execute calls mid-handler: the server
//! watches the returned token, stops accepting new connections, and lets
//! in-flight calls run to completion before the listener is released.

use tokio::signal::unix::{signal, SignalKind};
use tokio_util::sync::CancellationToken;

/// Install a shutdown handler that listens for SIGTERM and SIGINT.
///
/// Returns a `CancellationToken` that is cancelled when either signal is
/// received. Pass it to [`BoundServer::serve`](crate::grpc::server::BoundServer::serve),
/// which drains in-flight job executions before returning.
pub fn install_shutdown_handler() -> CancellationToken {
    let token = CancellationToken::new();
    let signal_token = token.clone();

    tokio::spawn(async move {
        let received = wait_for_signal().await;
        tracing::info!(signal = received, "Shutdown requested, draining in-flight jobs");
        signal_token.cancel();
    });

    token
}

async fn wait_for_signal() -> &'static str {
    let mut sigterm = signal(SignalKind::terminate()).expect("failed to install SIGTERM handler");
    let mut sigint = signal(SignalKind::interrupt()).expect("failed to install SIGINT handler");

    tokio::select! {
        _ = sigterm.recv() => "SIGTERM",
        _ = sigint.recv() => "SIGINT",
    }
}
