//! Common test utilities for integration tests.
//!
//! # Invariants
//! - Fixtures are loaded from the `fixtures/` directory relative to the crate root
//! - Clients built here point at a wiremock server and never at a real backend
//!
//! # What this does NOT handle
//! - Mock setup (use wiremock directly in tests)

use std::sync::Arc;

#[allow(unused_imports)]
pub use projdash_client::testing::{
    RecordingNavigator, load_fixture, logged_in_store, sample_user,
};
#[allow(unused_imports)]
pub use projdash_client::{
    ClientError, MemorySessionStore, Navigator, ProjectClient, Role, SessionStore,
};
#[allow(unused_imports)]
pub use wiremock::{Mock, MockServer, ResponseTemplate};

/// Client against `server` with the given store and navigator.
#[allow(dead_code)]
pub fn client_for(
    server: &MockServer,
    store: Arc<dyn SessionStore>,
    navigator: Arc<dyn Navigator>,
) -> ProjectClient {
    ProjectClient::builder()
        .base_url(server.uri())
        .session_store(store)
        .navigator(navigator)
        .build()
        .expect("client should build")
}

/// Client logged in as `role` with token `token`, plus its store and navigator.
#[allow(dead_code)]
pub fn logged_in_client(
    server: &MockServer,
    token: &str,
    role: Role,
) -> (ProjectClient, Arc<MemorySessionStore>, Arc<RecordingNavigator>) {
    let store = logged_in_store(token, role);
    let navigator = RecordingNavigator::new();
    let client = client_for(server, store.clone(), navigator.clone());
    (client, store, navigator)
}
