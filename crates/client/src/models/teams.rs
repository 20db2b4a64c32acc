//! Team models.

use serde::{Deserialize, Serialize};

use super::projects::Project;

/// A student on a team roster.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamMember {
    #[serde(
        alias = "_id",
        deserialize_with = "crate::serde_helpers::id_from_string_or_number"
    )]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub roll_number: Option<String>,
}

/// Guide summary embedded in a team.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamGuide {
    #[serde(
        alias = "_id",
        deserialize_with = "crate::serde_helpers::id_from_string_or_number"
    )]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub email: String,
}

/// A project team: students supervised by one guide.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Team {
    #[serde(
        alias = "_id",
        deserialize_with = "crate::serde_helpers::id_from_string_or_number"
    )]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub guide: Option<TeamGuide>,
    #[serde(default)]
    pub members: Vec<TeamMember>,
    #[serde(default)]
    pub project: Option<Project>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub batch: Option<String>,
}

/// Body for `POST /admin/teams`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateTeamRequest {
    pub name: String,
    pub member_ids: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub guide_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub batch: Option<String>,
}

/// Body for `PUT /admin/teams/{id}/guide`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AssignGuideRequest {
    pub guide_id: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_team_without_guide_or_project() {
        let json = r#"{
            "_id": "t1",
            "name": "Team Alpha",
            "members": [{"_id": "s1", "name": "Asha", "email": "asha@college.edu"}]
        }"#;
        let team: Team = serde_json::from_str(json).unwrap();
        assert_eq!(team.id, "t1");
        assert!(team.guide.is_none());
        assert!(team.project.is_none());
        assert_eq!(team.members.len(), 1);
        assert_eq!(team.members[0].name, "Asha");
    }

    #[test]
    fn test_create_team_request_shape() {
        let req = CreateTeamRequest {
            name: "Team Beta".to_string(),
            member_ids: vec!["s1".to_string(), "s2".to_string()],
            guide_id: None,
            batch: Some("2025".to_string()),
        };
        let json = serde_json::to_value(&req).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"name": "Team Beta", "memberIds": ["s1", "s2"], "batch": "2025"})
        );
    }
}
