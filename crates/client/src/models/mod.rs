//! Typed DTOs for the dashboard backend.
//!
//! Each endpoint decodes into one of these types so a shape mismatch fails
//! at the client boundary with `ClientError::InvalidResponse` instead of
//! rendering half-empty views.

pub mod academic;
pub mod auth;
pub mod common;
pub mod meetings;
pub mod minutes;
pub mod projects;
pub mod stats;
pub mod tasks;
pub mod teams;
pub mod users;

pub use academic::{Branch, Course, Section, Semester};
pub use auth::{LoginRequest, LoginResponse, RegisterRequest};
pub use common::{ErrorBody, MaybeWrapped, MessageResponse};
pub use meetings::{Attendance, AttendanceRequest, Meeting, MeetingStatus, ScheduleMeetingRequest};
pub use minutes::{ActionItem, MeetingMinutes, MinutesRequest};
pub use projects::{Project, ProjectStatus, ProjectStatusRequest, UpdateProjectRequest};
pub use stats::{AdminStats, GuideStats, StudentStats};
pub use tasks::{CreateTaskRequest, ReviewTaskRequest, SubmitTaskRequest, Task, TaskStatus};
pub use teams::{AssignGuideRequest, CreateTeamRequest, Team, TeamGuide, TeamMember};
pub use users::{ChangePasswordRequest, CreateUserRequest, Role, UpdateProfileRequest, User};
