//! User and role models.

use serde::de;
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;

/// Role of the acting user. Drives route guarding and dashboard selection.
///
/// Decoding goes through [`FromStr`], so the backend and the command line
/// accept the same spellings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    Guide,
    Student,
}

impl Role {
    pub const ALL: [Role; 3] = [Role::Admin, Role::Guide, Role::Student];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Admin => "admin",
            Self::Guide => "guide",
            Self::Student => "student",
        }
    }

    /// Dashboard path a freshly logged-in user lands on.
    pub fn home(self) -> &'static str {
        match self {
            Self::Admin => "/admin/dashboard",
            Self::Guide => "/guide/dashboard",
            Self::Student => "/student/dashboard",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "admin" => Ok(Self::Admin),
            "guide" | "mentor" => Ok(Self::Guide),
            "student" => Ok(Self::Student),
            other => Err(format!("unknown role '{other}' (expected admin, guide or student)")),
        }
    }
}

impl<'de> Deserialize<'de> for Role {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse::<Role>().map_err(de::Error::custom)
    }
}

/// A dashboard user as returned by `/profile`, `/login` and `/admin/users`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    #[serde(
        alias = "_id",
        deserialize_with = "crate::serde_helpers::id_from_string_or_number"
    )]
    pub id: String,
    pub name: String,
    pub email: String,
    pub role: Role,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub department: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    /// University roll number (students only).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub roll_number: Option<String>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "crate::serde_helpers::opt_id_from_string_or_number"
    )]
    pub team_id: Option<String>,
}

/// Body for `POST /admin/users`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateUserRequest {
    pub name: String,
    pub email: String,
    pub password: String,
    pub role: Role,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub department: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub roll_number: Option<String>,
}

/// Body for `PUT /profile`. Only set fields are sent.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProfileRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub department: Option<String>,
}

impl UpdateProfileRequest {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.phone.is_none() && self.department.is_none()
    }
}

/// Body for `PUT /profile/password`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChangePasswordRequest {
    pub current_password: String,
    pub new_password: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_user_with_mongo_id() {
        let json = r#"{
            "_id": "64f1c2",
            "name": "Asha Rao",
            "email": "asha@college.edu",
            "role": "student",
            "rollNumber": "21CS042",
            "teamId": 3
        }"#;
        let user: User = serde_json::from_str(json).unwrap();
        assert_eq!(user.id, "64f1c2");
        assert_eq!(user.role, Role::Student);
        assert_eq!(user.roll_number.as_deref(), Some("21CS042"));
        assert_eq!(user.team_id.as_deref(), Some("3"));
        assert!(user.department.is_none());
    }

    #[test]
    fn test_unknown_role_is_a_parse_error() {
        let json = r#"{"id": 1, "name": "x", "email": "x@y", "role": "superuser"}"#;
        assert!(serde_json::from_str::<User>(json).is_err());
    }

    #[test]
    fn test_role_from_str_accepts_mentor_alias() {
        assert_eq!("Mentor".parse::<Role>().unwrap(), Role::Guide);
        assert_eq!(" ADMIN ".parse::<Role>().unwrap(), Role::Admin);
        assert!("professor".parse::<Role>().is_err());
    }

    #[test]
    fn test_backend_role_spellings_match_command_line() {
        for raw in ["guide", "mentor", "Mentor", "GUIDE"] {
            let json = format!(r#"{{"id": 1, "name": "x", "email": "x@y", "role": "{raw}"}}"#);
            let user: User = serde_json::from_str(&json).unwrap();
            assert_eq!(user.role, raw.parse::<Role>().unwrap());
            assert_eq!(user.role, Role::Guide);
        }
        // Serialized form stays canonical
        assert_eq!(serde_json::to_value(Role::Guide).unwrap(), "guide");
    }

    #[test]
    fn test_role_home_paths() {
        assert_eq!(Role::Admin.home(), "/admin/dashboard");
        assert_eq!(Role::Guide.home(), "/guide/dashboard");
        assert_eq!(Role::Student.home(), "/student/dashboard");
    }

    #[test]
    fn test_update_profile_skips_unset_fields() {
        let req = UpdateProfileRequest {
            phone: Some("555-0100".to_string()),
            ..Default::default()
        };
        let json = serde_json::to_value(&req).unwrap();
        assert_eq!(json, serde_json::json!({"phone": "555-0100"}));
        assert!(!req.is_empty());
        assert!(UpdateProfileRequest::default().is_empty());
    }
}
