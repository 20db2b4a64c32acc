//! Role-gated route guard and the router that applies it.
//!
//! Responsibilities:
//! - Decide whether a view renders for the current session ([`RouteGuard`]).
//! - Map paths to guards and track the current location ([`Router`]).
//! - Act as the client's [`Navigator`] so session teardown moves the router.
//!
//! Does NOT handle:
//! - Authentication itself. The guard only reads the cached user.
//! - Server-side authorization. A render decision is a UX gate, the backend
//!   still checks every call.
//!
//! Invariants:
//! - The role check is set membership: a route allowing `{A, B}` renders for
//!   `A` or `B` and for nothing else.
//! - No session means a redirect to [`LOGIN_PATH`]; a session with the wrong
//!   role means a redirect to [`UNAUTHORIZED_PATH`].

use std::collections::BTreeSet;
use std::sync::RwLock;

use tracing::debug;

use crate::models::{Role, User};
use crate::navigation::{LOGIN_PATH, Navigator, UNAUTHORIZED_PATH};
use crate::session::SessionStore;

/// Outcome of guarding a view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuardDecision {
    Render,
    Redirect(&'static str),
    NotFound,
}

/// Roles allowed to see a view. An empty set means the view is public.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RouteGuard {
    allowed: BTreeSet<Role>,
}

impl RouteGuard {
    /// Guard that lets everyone through, logged in or not.
    pub fn public() -> Self {
        Self::default()
    }

    /// Guard that admits exactly one role.
    pub fn only(role: Role) -> Self {
        Self::allow([role])
    }

    /// Guard that admits any of `roles`.
    pub fn allow(roles: impl IntoIterator<Item = Role>) -> Self {
        Self {
            allowed: roles.into_iter().collect(),
        }
    }

    pub fn is_public(&self) -> bool {
        self.allowed.is_empty()
    }

    pub fn allowed(&self) -> impl Iterator<Item = Role> + '_ {
        self.allowed.iter().copied()
    }

    pub fn check(&self, user: Option<&User>) -> GuardDecision {
        if self.is_public() {
            return GuardDecision::Render;
        }
        match user {
            None => GuardDecision::Redirect(LOGIN_PATH),
            Some(user) if self.allowed.contains(&user.role) => GuardDecision::Render,
            Some(_) => GuardDecision::Redirect(UNAUTHORIZED_PATH),
        }
    }
}

#[derive(Debug, Clone)]
struct Route {
    prefix: String,
    guard: RouteGuard,
}

/// Segment-wise prefix match: `/admin` matches `/admin` and `/admin/users`
/// but not `/administrator`.
fn matches_prefix(prefix: &str, path: &str) -> bool {
    match path.strip_prefix(prefix) {
        Some(rest) => rest.is_empty() || rest.starts_with('/') || prefix.ends_with('/'),
        None => false,
    }
}

/// Route table plus current location.
///
/// Shared by `Arc` between the CLI and the client, which uses it as its
/// [`Navigator`].
#[derive(Debug)]
pub struct Router {
    routes: Vec<Route>,
    location: RwLock<String>,
    history: RwLock<Vec<String>>,
}

impl Default for Router {
    fn default() -> Self {
        let all = Role::ALL;
        Self::empty()
            .route("/login", RouteGuard::public())
            .route("/register", RouteGuard::public())
            .route(UNAUTHORIZED_PATH, RouteGuard::public())
            .route("/admin", RouteGuard::only(Role::Admin))
            .route("/guide", RouteGuard::only(Role::Guide))
            .route("/student", RouteGuard::only(Role::Student))
            .route("/mom", RouteGuard::allow(all))
            .route("/profile", RouteGuard::allow(all))
    }
}

impl Router {
    /// Router with the dashboard's standard route table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Router with no routes, starting at the login view.
    pub fn empty() -> Self {
        Self {
            routes: Vec::new(),
            location: RwLock::new(LOGIN_PATH.to_string()),
            history: RwLock::new(Vec::new()),
        }
    }

    /// Register a route. When prefixes overlap the longest match wins.
    pub fn route(mut self, prefix: impl Into<String>, guard: RouteGuard) -> Self {
        self.routes.push(Route {
            prefix: prefix.into(),
            guard,
        });
        self
    }

    /// Guard for `path`, using the longest matching prefix.
    pub fn guard_for(&self, path: &str) -> Option<&RouteGuard> {
        self.routes
            .iter()
            .filter(|r| matches_prefix(&r.prefix, path))
            .max_by_key(|r| r.prefix.len())
            .map(|r| &r.guard)
    }

    /// Decide what happens when the current session opens `path`.
    pub fn resolve(&self, path: &str, user: Option<&User>) -> GuardDecision {
        match self.guard_for(path) {
            Some(guard) => guard.check(user),
            None => GuardDecision::NotFound,
        }
    }

    /// Navigate to `path`, following at most one guard redirect.
    ///
    /// Returns the decision for the requested path; the router's location
    /// ends up at `path` on `Render` and at the redirect target otherwise.
    pub fn navigate(&self, path: &str, store: &dyn SessionStore) -> GuardDecision {
        let user = store.user();
        let decision = self.resolve(path, user.as_ref());
        match decision {
            GuardDecision::Render => self.set_location(path),
            GuardDecision::Redirect(target) => {
                debug!(from = path, to = target, "Route guard redirect");
                self.set_location(target);
            }
            GuardDecision::NotFound => debug!(path, "No route"),
        }
        decision
    }

    pub fn current_location(&self) -> String {
        self.location
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }

    /// Every location the router has moved to, oldest first.
    pub fn history(&self) -> Vec<String> {
        self.history
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }

    fn set_location(&self, location: &str) {
        *self
            .location
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner()) = location.to_string();
        self.history
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .push(location.to_string());
    }
}

impl Navigator for Router {
    fn redirect(&self, location: &str) {
        self.set_location(location);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::{MemorySessionStore, Session};
    use proptest::prelude::*;

    fn user(role: Role) -> User {
        User {
            id: "u1".to_string(),
            name: "Test User".to_string(),
            email: "user@college.edu".to_string(),
            role,
            department: None,
            phone: None,
            roll_number: None,
            team_id: None,
        }
    }

    #[test]
    fn test_public_route_renders_without_session() {
        assert_eq!(RouteGuard::public().check(None), GuardDecision::Render);
    }

    #[test]
    fn test_protected_route_without_session_goes_to_login() {
        assert_eq!(
            RouteGuard::only(Role::Admin).check(None),
            GuardDecision::Redirect(LOGIN_PATH)
        );
    }

    #[test]
    fn test_wrong_role_goes_to_unauthorized() {
        let guard = RouteGuard::only(Role::Admin);
        assert_eq!(
            guard.check(Some(&user(Role::Student))),
            GuardDecision::Redirect(UNAUTHORIZED_PATH)
        );
    }

    #[test]
    fn test_prefix_matching_is_segment_wise() {
        assert!(matches_prefix("/admin", "/admin"));
        assert!(matches_prefix("/admin", "/admin/users"));
        assert!(!matches_prefix("/admin", "/administrator"));
        assert!(!matches_prefix("/admin", "/guide"));
    }

    #[test]
    fn test_default_table() {
        let router = Router::new();
        let guide = user(Role::Guide);
        assert_eq!(router.resolve("/login", None), GuardDecision::Render);
        assert_eq!(
            router.resolve("/guide/teams", Some(&guide)),
            GuardDecision::Render
        );
        assert_eq!(
            router.resolve("/admin/users", Some(&guide)),
            GuardDecision::Redirect(UNAUTHORIZED_PATH)
        );
        assert_eq!(router.resolve("/mom/m1", Some(&guide)), GuardDecision::Render);
        assert_eq!(router.resolve("/nowhere", Some(&guide)), GuardDecision::NotFound);
    }

    #[test]
    fn test_longest_prefix_wins() {
        let router = Router::empty()
            .route("/admin", RouteGuard::only(Role::Admin))
            .route("/admin/public", RouteGuard::public());
        assert_eq!(router.resolve("/admin/public/x", None), GuardDecision::Render);
        assert_eq!(
            router.resolve("/admin/users", None),
            GuardDecision::Redirect(LOGIN_PATH)
        );
    }

    #[test]
    fn test_navigate_moves_location() {
        let router = Router::new();
        let store = MemorySessionStore::with_session(Session::new("t", user(Role::Student)));

        assert_eq!(
            router.navigate("/student/tasks", &store),
            GuardDecision::Render
        );
        assert_eq!(router.current_location(), "/student/tasks");

        assert_eq!(
            router.navigate("/admin/dashboard", &store),
            GuardDecision::Redirect(UNAUTHORIZED_PATH)
        );
        assert_eq!(router.current_location(), UNAUTHORIZED_PATH);
        assert_eq!(
            router.history(),
            vec!["/student/tasks".to_string(), UNAUTHORIZED_PATH.to_string()]
        );
    }

    #[test]
    fn test_redirect_as_navigator() {
        let router = Router::new();
        router.redirect("/student/dashboard");
        router.redirect(LOGIN_PATH);
        assert_eq!(router.current_location(), LOGIN_PATH);
        assert_eq!(router.history().len(), 2);
    }

    fn role_strategy() -> impl Strategy<Value = Role> {
        prop::sample::select(Role::ALL.to_vec())
    }

    proptest! {
        #[test]
        fn prop_guard_is_set_membership(
            allowed in prop::collection::btree_set(role_strategy(), 1..=3),
            role in role_strategy(),
        ) {
            let guard = RouteGuard::allow(allowed.iter().copied());
            let decision = guard.check(Some(&user(role)));
            if allowed.contains(&role) {
                prop_assert_eq!(decision, GuardDecision::Render);
            } else {
                prop_assert_eq!(decision, GuardDecision::Redirect(UNAUTHORIZED_PATH));
            }
        }

        #[test]
        fn prop_protected_never_renders_without_session(
            allowed in prop::collection::btree_set(role_strategy(), 1..=3),
        ) {
            let guard = RouteGuard::allow(allowed);
            prop_assert_eq!(guard.check(None), GuardDecision::Redirect(LOGIN_PATH));
        }
    }
}
