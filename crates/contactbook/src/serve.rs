// SPDX-FileCopyrightText: 2026 Contactbook Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! `contactbook serve`: open SQLite storage and run the contact API until
//! SIGINT or SIGTERM.

use std::sync::Arc;

use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

use contactbook_config::ContactbookConfig;
use contactbook_core::ContactError;
use contactbook_storage::SqliteStorage;

pub async fn run_serve(config: ContactbookConfig) -> Result<(), ContactError> {
    info!(
        version = env!("CARGO_PKG_VERSION"),
        database = %config.storage.database_path,
        "starting contactbook"
    );

    let storage = Arc::new(SqliteStorage::new(config.storage.clone()));
    storage.initialize().await?;

    let shutdown = install_signal_handler();
    let served = contactbook_gateway::start_server(&config.server, storage.clone(), shutdown).await;

    if let Err(e) = storage.close().await {
        warn!(error = %e, "failed to close storage cleanly");
    }
    served
}

/// Returns a token cancelled on SIGINT or SIGTERM.
pub fn install_signal_handler() -> CancellationToken {
    let token = CancellationToken::new();
    let token_clone = token.clone();

    tokio::spawn(async move {
        let ctrl_c = tokio::signal::ctrl_c();

        #[cfg(unix)]
        {
            use tokio::signal::unix::{SignalKind, signal};
            match signal(SignalKind::terminate()) {
                Ok(mut sigterm) => {
                    tokio::select! {
                        _ = ctrl_c => info!("received SIGINT, shutting down"),
                        _ = sigterm.recv() => info!("received SIGTERM, shutting down"),
                    }
                }
                Err(e) => {
                    warn!(error = %e, "SIGTERM handler unavailable, waiting for Ctrl+C");
                    let _ = ctrl_c.await;
                    info!("received SIGINT, shutting down");
                }
            }
        }

        #[cfg(not(unix))]
        {
            let _ = ctrl_c.await;
            info!("received Ctrl+C, shutting down");
        }

        token_clone.cancel();
        debug!("signal handler finished");
    });

    token
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn signal_handler_starts_uncancelled() {
        let token = install_signal_handler();
        assert!(!token.is_cancelled());
        token.cancel();
    }

    #[tokio::test]
    async fn serve_fails_when_port_is_taken() {
        let taken = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let dir = tempfile::tempdir().unwrap();

        let mut config = ContactbookConfig::default();
        config.server.host = "127.0.0.1".into();
        config.server.port = taken.local_addr().unwrap().port();
        config.storage.database_path = dir
            .path()
            .join("contacts.db")
            .to_string_lossy()
            .into_owned();

        let err = run_serve(config).await.unwrap_err();
        assert!(matches!(err, ContactError::Config(_)));
    }
}
