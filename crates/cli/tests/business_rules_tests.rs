//! Integration tests for task submission and review rules.

mod common;

use common::TestEnv;
use predicates::prelude::*;
use projdash_client::Role;
use projdash_client::testing::load_fixture;
use wiremock::matchers::{body_partial_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn overdue_task() -> serde_json::Value {
    serde_json::json!([{
        "id": "task-9",
        "title": "Interim report",
        "teamId": "team-7",
        "deadline": "2020-01-31T18:30:00Z",
        "status": "pending"
    }])
}

async fn mount_student_tasks(server: &MockServer, tasks: serde_json::Value) {
    Mock::given(method("GET"))
        .and(path("/student/tasks"))
        .respond_with(ResponseTemplate::new(200).set_body_json(tasks))
        .mount(server)
        .await;
}

#[tokio::test]
async fn test_overdue_submission_is_refused_locally() {
    let server = MockServer::start().await;
    mount_student_tasks(&server, overdue_task()).await;
    Mock::given(method("POST"))
        .and(path("/student/tasks/task-9/submit"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let env = TestEnv::new();
    env.log_in_as(Role::Student, "tok");
    env.cmd(&server.uri())
        .args(["student", "submit", "task-9", "--url", "https://drive.college.edu/r.pdf"])
        .assert()
        .code(5)
        .stderr(predicate::str::contains("deadline passed on 2020-01-31 18:30 UTC"));
}

#[tokio::test]
async fn test_approved_task_cannot_be_resubmitted() {
    let server = MockServer::start().await;
    mount_student_tasks(&server, load_fixture("guide/tasks.json")).await;

    let env = TestEnv::new();
    env.log_in_as(Role::Student, "tok");
    env.cmd(&server.uri())
        .args(["student", "submit", "task-1", "--url", "https://drive.college.edu/s.pdf"])
        .assert()
        .code(5)
        .stderr(predicate::str::contains("closed for submissions"));
}

#[tokio::test]
async fn test_force_sends_overdue_submission() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/student/tasks/task-9/submit"))
        .and(body_partial_json(serde_json::json!({
            "submissionUrl": "https://drive.college.edu/r.pdf"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "id": "task-9",
            "title": "Interim report",
            "teamId": "team-7",
            "status": "submitted"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let env = TestEnv::new();
    env.log_in_as(Role::Student, "tok");
    env.cmd(&server.uri())
        .args([
            "student",
            "submit",
            "task-9",
            "--url",
            "https://drive.college.edu/r.pdf",
            "--force",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("submitted"));
}

#[tokio::test]
async fn test_unknown_task_exits_4() {
    let server = MockServer::start().await;
    mount_student_tasks(&server, overdue_task()).await;

    let env = TestEnv::new();
    env.log_in_as(Role::Student, "tok");
    env.cmd(&server.uri())
        .args(["student", "submit", "task-404", "--url", "https://x.college.edu"])
        .assert()
        .code(4)
        .stderr(predicate::str::contains("Task 'task-404' not found"));
}

#[tokio::test]
async fn test_review_of_pending_task_is_refused() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/guide/teams/team-7/tasks"))
        .respond_with(ResponseTemplate::new(200).set_body_json(load_fixture("guide/tasks.json")))
        .mount(&server)
        .await;
    Mock::given(method("PUT"))
        .and(path("/guide/tasks/task-2/review"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let env = TestEnv::new();
    env.log_in_as(Role::Guide, "tok");
    env.cmd(&server.uri())
        .args(["guide", "review", "team-7", "task-2", "--status", "approved"])
        .assert()
        .code(5)
        .stderr(predicate::str::contains("is pending and cannot be marked approved"));
}
