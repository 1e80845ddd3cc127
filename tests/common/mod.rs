#![allow(dead_code)]

use std::path::Path;
use std::sync::Arc;

use axum_test::TestServer;
use tempfile::TempDir;

use lunara_server::core::{AppState, Config};

pub const TEST_JWT_SECRET: &str = "test-secret-absolutely-not-for-production";

/// Config pointing the object store at a scratch directory.
pub fn test_config(data_dir: &Path) -> Config {
    Config {
        server_host: "127.0.0.1".to_string(),
        server_port: 0,
        jwt_secret: TEST_JWT_SECRET.to_string(),
        data_dir: data_dir.to_path_buf(),
        public_base_url: "https://cdn.test".to_string(),
        app_env: "test".to_string(),
    }
}

/// Fresh AppState backed by a temp directory. Keep the TempDir alive
/// for the duration of the test.
pub async fn create_test_state() -> (Arc<AppState>, TempDir) {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let state = AppState::new(&test_config(dir.path()))
        .await
        .expect("Failed to build AppState");
    (Arc::new(state), dir)
}

/// TestServer over the full router.
pub fn create_test_server(state: Arc<AppState>) -> TestServer {
    let app = lunara_server::create_router(state);
    TestServer::new(app).expect("Failed to create test server")
}
