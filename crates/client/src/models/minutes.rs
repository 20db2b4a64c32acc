//! Minutes-of-meeting (MOM) models.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// A follow-up recorded in the minutes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActionItem {
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assignee: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub due_date: Option<NaiveDate>,
}

/// Minutes recorded after a meeting.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MeetingMinutes {
    #[serde(
        alias = "_id",
        deserialize_with = "crate::serde_helpers::id_from_string_or_number"
    )]
    pub id: String,
    #[serde(deserialize_with = "crate::serde_helpers::id_from_string_or_number")]
    pub meeting_id: String,
    pub summary: String,
    #[serde(default)]
    pub discussion_points: Vec<String>,
    #[serde(default)]
    pub action_items: Vec<ActionItem>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next_meeting_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

/// Body for `POST /mom` and `PUT /mom/{id}`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MinutesRequest {
    pub meeting_id: String,
    pub summary: String,
    pub discussion_points: Vec<String>,
    pub action_items: Vec<ActionItem>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_meeting_at: Option<DateTime<Utc>>,
}
