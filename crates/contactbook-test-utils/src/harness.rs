// SPDX-FileCopyrightText: 2026 Contactbook Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Test harness that runs the real API router on an ephemeral port.

use std::net::SocketAddr;
use std::sync::Arc;

use tokio_util::sync::CancellationToken;

use contactbook_config::model::StorageConfig;
use contactbook_core::{ContactError, ContactStore};
use contactbook_gateway::{GatewayState, cors_layer, router, serve};
use contactbook_storage::SqliteStorage;

/// Origin the harness allows for CORS.
pub const TEST_ORIGIN: &str = "http://localhost:5173";

/// A running API server. Shuts down when dropped.
pub struct TestServer {
    addr: SocketAddr,
    shutdown: CancellationToken,
    _temp_dir: Option<tempfile::TempDir>,
}

impl TestServer {
    /// Serve the given store on 127.0.0.1 with an OS-assigned port.
    pub async fn start(store: Arc<dyn ContactStore>) -> Result<Self, ContactError> {
        Self::start_inner(store, None).await
    }

    /// Serve a fresh SQLite store in a temp directory.
    pub async fn with_sqlite() -> Result<Self, ContactError> {
        let temp_dir = tempfile::TempDir::new().map_err(ContactError::storage)?;
        let storage = SqliteStorage::new(StorageConfig {
            database_path: temp_dir
                .path()
                .join("contacts.db")
                .to_string_lossy()
                .into_owned(),
            wal_mode: true,
        });
        storage.initialize().await?;
        Self::start_inner(Arc::new(storage), Some(temp_dir)).await
    }

    async fn start_inner(
        store: Arc<dyn ContactStore>,
        temp_dir: Option<tempfile::TempDir>,
    ) -> Result<Self, ContactError> {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .map_err(|e| ContactError::Internal(format!("failed to bind test server: {e}")))?;
        let addr = listener
            .local_addr()
            .map_err(|e| ContactError::Internal(format!("no local address: {e}")))?;

        let app = router(
            GatewayState::new(store),
            cors_layer(&[TEST_ORIGIN.to_string()])?,
        );
        let shutdown = CancellationToken::new();
        tokio::spawn(serve(listener, app, shutdown.clone()));

        Ok(Self {
            addr,
            shutdown,
            _temp_dir: temp_dir,
        })
    }

    /// Base URL such as `http://127.0.0.1:43121`.
    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        self.shutdown.cancel();
    }
}
