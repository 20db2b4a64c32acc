//! Client library for the academic project-management dashboard.
//!
//! This crate provides a typed, authenticated client for the dashboard's REST
//! backend plus the pieces every view shares: the session store the bearer
//! token lives in, the role-gated route guard, and cancellation scopes that
//! tie requests to a view's lifetime.

pub mod cancellation;
pub mod client;
pub mod endpoints;
pub mod error;
pub mod guard;
pub mod models;
pub mod navigation;
mod serde_helpers;
pub mod session;
pub mod view;

#[cfg(any(feature = "test-utils", test))]
pub mod testing;

pub use cancellation::CancellationToken;
pub use client::ProjectClient;
pub use client::builder::ProjectClientBuilder;
pub use error::{ClientError, Result};
pub use guard::{GuardDecision, RouteGuard, Router};
pub use models::{
    ActionItem, AdminStats, Attendance, AttendanceRequest, Branch, ChangePasswordRequest, Course,
    CreateTaskRequest, CreateTeamRequest, CreateUserRequest, GuideStats, Meeting, MeetingMinutes,
    MeetingStatus, MessageResponse, MinutesRequest, Project, ProjectStatus, ProjectStatusRequest,
    RegisterRequest, ReviewTaskRequest, Role, ScheduleMeetingRequest, Section, Semester,
    StudentStats, SubmitTaskRequest, Task, TaskStatus, Team, TeamGuide, TeamMember,
    UpdateProfileRequest, UpdateProjectRequest, User,
};
pub use navigation::{LOGIN_PATH, Navigator, NoopNavigator, UNAUTHORIZED_PATH};
pub use session::{FileSessionStore, MemorySessionStore, Session, SessionStore, SessionStoreError};
pub use view::{LoadState, ViewScope};
