//! Integration tests for login, logout and `whoami`.

mod common;

use common::TestEnv;
use predicates::prelude::*;
use projdash_client::Role;
use projdash_client::testing::load_fixture;
use wiremock::matchers::{body_partial_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test]
async fn test_login_writes_session_file() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/login"))
        .and(body_partial_json(serde_json::json!({
            "email": "asha@college.edu",
            "password": "s3cret"
        })))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(load_fixture("auth/login_success.json")),
        )
        .expect(1)
        .mount(&server)
        .await;

    let env = TestEnv::new();
    env.cmd(&server.uri())
        .args(["login", "--email", " asha@college.edu ", "--password", "s3cret"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Logged in as Asha Rao (student)"))
        .stdout(predicate::str::contains("/student/dashboard"));

    let session = env.session().expect("session file written");
    assert_eq!(session["token"], "eyJhbGciOiJIUzI1NiJ9.student-token");
    assert_eq!(session["user"]["role"], "student");
}

#[tokio::test]
async fn test_password_from_env() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/login"))
        .and(body_partial_json(serde_json::json!({"password": "from-env"})))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(load_fixture("auth/login_success.json")),
        )
        .expect(1)
        .mount(&server)
        .await;

    let env = TestEnv::new();
    env.cmd(&server.uri())
        .env("PROJDASH_PASSWORD", "from-env")
        .args(["login", "--email", "asha@college.edu"])
        .assert()
        .success();
}

#[tokio::test]
async fn test_rejected_login_exits_2_and_keeps_existing_session() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/login"))
        .respond_with(
            ResponseTemplate::new(401).set_body_json(load_fixture("auth/login_invalid.json")),
        )
        .mount(&server)
        .await;

    let env = TestEnv::new();
    env.log_in_as(Role::Guide, "still-valid");

    env.cmd(&server.uri())
        .args(["login", "--email", "x@college.edu", "--password", "wrong"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Invalid email or password"));

    let session = env.session().expect("session kept");
    assert_eq!(session["token"], "still-valid");
}

#[test]
fn test_logout_removes_session_file() {
    let env = TestEnv::new();
    env.log_in_as(Role::Student, "tok");

    env.cmd("http://localhost:5000/api")
        .arg("logout")
        .assert()
        .success()
        .stdout(predicate::str::contains("Logged out."));

    assert!(!env.session_path().exists());
}

#[test]
fn test_logout_without_session_succeeds() {
    let env = TestEnv::new();
    env.cmd("http://localhost:5000/api")
        .arg("logout")
        .assert()
        .success()
        .stdout(predicate::str::contains("Not logged in."));
}

#[test]
fn test_whoami_uses_cached_user_without_network() {
    let env = TestEnv::new();
    env.log_in_as(Role::Admin, "tok");

    // Port 1 is never listening; a request would fail with exit code 3
    env.cmd("http://127.0.0.1:1")
        .args(["whoami", "--output", "json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"role\": \"admin\""));
}

#[test]
fn test_whoami_without_session_exits_2() {
    let env = TestEnv::new();
    env.cmd("http://127.0.0.1:1")
        .arg("whoami")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Not logged in"));
}

#[tokio::test]
async fn test_whoami_refresh_sends_bearer_token() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/profile"))
        .and(header("Authorization", "Bearer tok-123"))
        .respond_with(ResponseTemplate::new(200).set_body_json(load_fixture("auth/profile.json")))
        .expect(1)
        .mount(&server)
        .await;

    let env = TestEnv::new();
    env.log_in_as(Role::Student, "tok-123");
    env.cmd(&server.uri())
        .args(["whoami", "--refresh"])
        .assert()
        .success();
}

#[tokio::test]
async fn test_register_is_public() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/register"))
        .and(body_partial_json(serde_json::json!({"role": "guide"})))
        .respond_with(
            ResponseTemplate::new(201)
                .set_body_json(serde_json::json!({"message": "Registration successful"})),
        )
        .expect(1)
        .mount(&server)
        .await;

    let env = TestEnv::new();
    env.cmd(&server.uri())
        .args([
            "register",
            "--name",
            "Dr. Meera Iyer",
            "--email",
            "meera.iyer@college.edu",
            "--role",
            "guide",
            "--password",
            "pw",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Registration successful"));

    assert!(env.session().is_none());
}
