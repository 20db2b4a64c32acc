//! Testing utilities for dashboard client tests.
//!
//! Available when running tests or when the `test-utils` feature is enabled.
//!
//! # Example
//! ```ignore
//! use projdash_client::testing::{load_fixture, sample_user};
//!
//! let tasks = load_fixture("guide/tasks.json");
//! let admin = sample_user(Role::Admin);
//! ```

use std::path::Path;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use crate::models::{Role, User};
use crate::navigation::Navigator;
use crate::session::{MemorySessionStore, Session};

/// Load a JSON fixture file from the fixtures directory.
///
/// # Panics
/// - If the fixture file cannot be read
/// - If the file content is not valid JSON
pub fn load_fixture(fixture_path: &str) -> serde_json::Value {
    let full_path = Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("fixtures")
        .join(fixture_path);
    let content = std::fs::read_to_string(&full_path)
        .unwrap_or_else(|_| panic!("Failed to load fixture: {}", full_path.display()));
    serde_json::from_str(&content).expect("Invalid JSON in fixture")
}

/// A user with the given role and predictable fields.
pub fn sample_user(role: Role) -> User {
    User {
        id: format!("{}-1", role.as_str()),
        name: format!("Sample {role}"),
        email: format!("{}@college.edu", role.as_str()),
        role,
        department: Some("CSE".to_string()),
        phone: None,
        roll_number: (role == Role::Student).then(|| "21CS001".to_string()),
        team_id: (role == Role::Student).then(|| "team-1".to_string()),
    }
}

/// In-memory store already holding `token` for a user with `role`.
pub fn logged_in_store(token: &str, role: Role) -> Arc<MemorySessionStore> {
    Arc::new(MemorySessionStore::with_session(Session::new(
        token,
        sample_user(role),
    )))
}

/// Navigator that records every redirect it receives.
#[derive(Debug, Default)]
pub struct RecordingNavigator {
    count: AtomicUsize,
    locations: Mutex<Vec<String>>,
}

impl RecordingNavigator {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn redirect_count(&self) -> usize {
        self.count.load(Ordering::SeqCst)
    }

    pub fn locations(&self) -> Vec<String> {
        self.locations.lock().expect("navigator lock").clone()
    }
}

impl Navigator for RecordingNavigator {
    fn redirect(&self, location: &str) {
        self.count.fetch_add(1, Ordering::SeqCst);
        self.locations
            .lock()
            .expect("navigator lock")
            .push(location.to_string());
    }
}
