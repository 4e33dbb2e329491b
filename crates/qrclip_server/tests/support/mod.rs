//! Shared integration-test server bootstrap helpers.

use axum_test::TestServer;
use qrclip_server::{create_app, AppState, ClipboardStore, Config};
use std::sync::Arc;

pub(crate) fn test_config() -> Config {
    Config {
        port: 0,
        max_clip_size: 64 * 1024,
        public_url: None,
    }
}

pub(crate) fn test_server_for_config(config: Config) -> (TestServer, Arc<ClipboardStore>) {
    let store = Arc::new(ClipboardStore::new());
    let state = AppState::with_store(config, store.clone());
    let app = create_app(state);
    let server = TestServer::new(app).expect("server");
    (server, store)
}

pub(crate) fn setup_test_server() -> (TestServer, Arc<ClipboardStore>) {
    test_server_for_config(test_config())
}
