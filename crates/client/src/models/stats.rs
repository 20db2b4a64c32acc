//! Dashboard statistics shown on each role's landing view.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::serde_helpers::u64_from_string_or_number;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AdminStats {
    #[serde(deserialize_with = "u64_from_string_or_number")]
    pub total_students: u64,
    #[serde(deserialize_with = "u64_from_string_or_number")]
    pub total_guides: u64,
    #[serde(deserialize_with = "u64_from_string_or_number")]
    pub total_teams: u64,
    #[serde(deserialize_with = "u64_from_string_or_number")]
    pub total_projects: u64,
    /// Project count keyed by status name (chart data).
    pub projects_by_status: BTreeMap<String, u64>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GuideStats {
    #[serde(deserialize_with = "u64_from_string_or_number")]
    pub total_teams: u64,
    #[serde(deserialize_with = "u64_from_string_or_number")]
    pub pending_reviews: u64,
    #[serde(deserialize_with = "u64_from_string_or_number")]
    pub upcoming_meetings: u64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct StudentStats {
    #[serde(deserialize_with = "u64_from_string_or_number")]
    pub total_tasks: u64,
    #[serde(deserialize_with = "u64_from_string_or_number")]
    pub completed_tasks: u64,
    #[serde(deserialize_with = "u64_from_string_or_number")]
    pub pending_tasks: u64,
    #[serde(deserialize_with = "u64_from_string_or_number")]
    pub upcoming_meetings: u64,
}

impl StudentStats {
    /// Completion percentage for the progress bar, 0 when there are no tasks.
    pub fn completion_percent(&self) -> u8 {
        if self.total_tasks == 0 {
            return 0;
        }
        let completed = u128::from(self.completed_tasks.min(self.total_tasks));
        let pct = completed * 100 / u128::from(self.total_tasks);
        u8::try_from(pct).unwrap_or(100)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_admin_stats_with_string_counts() {
        let json = r#"{
            "totalStudents": "120",
            "totalGuides": 9,
            "totalTeams": 30,
            "projectsByStatus": {"approved": 12, "proposed": 18}
        }"#;
        let stats: AdminStats = serde_json::from_str(json).unwrap();
        assert_eq!(stats.total_students, 120);
        assert_eq!(stats.total_projects, 0);
        assert_eq!(stats.projects_by_status.get("approved"), Some(&12));
    }

    #[test]
    fn test_completion_percent() {
        let stats = StudentStats {
            total_tasks: 8,
            completed_tasks: 6,
            ..Default::default()
        };
        assert_eq!(stats.completion_percent(), 75);
        assert_eq!(StudentStats::default().completion_percent(), 0);
    }

    #[test]
    fn test_completion_percent_with_huge_string_counts() {
        let json = r#"{"totalTasks": "18446744073709551615", "completedTasks": "18446744073709551614"}"#;
        let stats: StudentStats = serde_json::from_str(json).unwrap();
        assert_eq!(stats.completion_percent(), 99);

        let done = StudentStats {
            total_tasks: u64::MAX,
            completed_tasks: u64::MAX,
            ..Default::default()
        };
        assert_eq!(done.completion_percent(), 100);
    }
}
