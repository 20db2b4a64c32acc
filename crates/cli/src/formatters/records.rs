//! `Record` implementations for the dashboard models.

use projdash_client::{
    ActionItem, AdminStats, Branch, Course, GuideStats, Meeting, MeetingMinutes, Project,
    Section, Semester, StudentStats, Task, Team, TeamMember, User,
};

use super::Record;
use super::common::{
    format_date, format_datetime, format_list, format_missing, format_missing_display,
};

impl Record for User {
    const KIND: &'static str = "users";

    fn headers() -> &'static [&'static str] {
        &["ID", "Name", "Email", "Role", "Department", "Roll number", "Team"]
    }

    fn cells(&self) -> Vec<String> {
        vec![
            self.id.clone(),
            self.name.clone(),
            self.email.clone(),
            self.role.to_string(),
            format_missing(self.department.as_deref()).to_string(),
            format_missing(self.roll_number.as_deref()).to_string(),
            format_missing(self.team_id.as_deref()).to_string(),
        ]
    }
}

impl Record for TeamMember {
    const KIND: &'static str = "members";

    fn headers() -> &'static [&'static str] {
        &["ID", "Name", "Email", "Roll number"]
    }

    fn cells(&self) -> Vec<String> {
        vec![
            self.id.clone(),
            self.name.clone(),
            self.email.clone(),
            format_missing(self.roll_number.as_deref()).to_string(),
        ]
    }
}

impl Record for Team {
    const KIND: &'static str = "teams";

    fn headers() -> &'static [&'static str] {
        &["ID", "Name", "Guide", "Members", "Project", "Batch"]
    }

    fn cells(&self) -> Vec<String> {
        let members: Vec<String> = self.members.iter().map(|m| m.name.clone()).collect();
        vec![
            self.id.clone(),
            self.name.clone(),
            format_missing(self.guide.as_ref().map(|g| g.name.as_str())).to_string(),
            format_list(&members),
            format_missing(self.project.as_ref().map(|p| p.title.as_str())).to_string(),
            format_missing(self.batch.as_deref()).to_string(),
        ]
    }
}

impl Record for Project {
    const KIND: &'static str = "projects";

    fn headers() -> &'static [&'static str] {
        &["ID", "Title", "Status", "Team", "Technologies", "Repository"]
    }

    fn cells(&self) -> Vec<String> {
        vec![
            self.id.clone(),
            self.title.clone(),
            self.status.to_string(),
            format_missing(self.team_id.as_deref()).to_string(),
            format_list(&self.technologies),
            format_missing(self.repository_url.as_deref()).to_string(),
        ]
    }
}

impl Record for Task {
    const KIND: &'static str = "tasks";

    fn headers() -> &'static [&'static str] {
        &["ID", "Title", "Status", "Deadline", "Assigned to", "Submission", "Feedback"]
    }

    fn cells(&self) -> Vec<String> {
        vec![
            self.id.clone(),
            self.title.clone(),
            self.status.to_string(),
            format_datetime(self.deadline.as_ref()),
            format_missing(self.assigned_to.as_deref()).to_string(),
            format_missing(self.submission_url.as_deref()).to_string(),
            format_missing(self.feedback.as_deref()).to_string(),
        ]
    }
}

impl Record for Meeting {
    const KIND: &'static str = "meetings";

    fn headers() -> &'static [&'static str] {
        &["ID", "Title", "Team", "When", "Location", "Status"]
    }

    fn cells(&self) -> Vec<String> {
        vec![
            self.id.clone(),
            self.title.clone(),
            self.team_id.clone(),
            format_datetime(Some(&self.scheduled_at)),
            format_missing(self.location.as_deref()).to_string(),
            self.status.to_string(),
        ]
    }
}

fn action_item_line(item: &ActionItem) -> String {
    let mut line = item.description.clone();
    match (&item.assignee, &item.due_date) {
        (Some(who), Some(due)) => line.push_str(&format!(" ({who}, due {due})")),
        (Some(who), None) => line.push_str(&format!(" ({who})")),
        (None, Some(due)) => line.push_str(&format!(" (due {})", format_date(Some(due)))),
        (None, None) => {}
    }
    line
}

impl Record for MeetingMinutes {
    const KIND: &'static str = "minutes";

    fn headers() -> &'static [&'static str] {
        &[
            "ID",
            "Meeting",
            "Summary",
            "Discussion",
            "Action items",
            "Next meeting",
            "Recorded",
        ]
    }

    fn cells(&self) -> Vec<String> {
        let actions: Vec<String> = self.action_items.iter().map(action_item_line).collect();
        vec![
            self.id.clone(),
            self.meeting_id.clone(),
            self.summary.clone(),
            format_list(&self.discussion_points),
            format_list(&actions),
            format_datetime(self.next_meeting_at.as_ref()),
            format_datetime(self.created_at.as_ref()),
        ]
    }
}

impl Record for Course {
    const KIND: &'static str = "courses";

    fn headers() -> &'static [&'static str] {
        &["ID", "Name", "Code"]
    }

    fn cells(&self) -> Vec<String> {
        vec![
            self.id.clone(),
            self.name.clone(),
            format_missing(self.code.as_deref()).to_string(),
        ]
    }
}

impl Record for Branch {
    const KIND: &'static str = "branches";

    fn headers() -> &'static [&'static str] {
        &["ID", "Name", "Course"]
    }

    fn cells(&self) -> Vec<String> {
        vec![
            self.id.clone(),
            self.name.clone(),
            format_missing(self.course_id.as_deref()).to_string(),
        ]
    }
}

impl Record for Section {
    const KIND: &'static str = "sections";

    fn headers() -> &'static [&'static str] {
        &["ID", "Name", "Branch"]
    }

    fn cells(&self) -> Vec<String> {
        vec![
            self.id.clone(),
            self.name.clone(),
            format_missing(self.branch_id.as_deref()).to_string(),
        ]
    }
}

impl Record for Semester {
    const KIND: &'static str = "semesters";

    fn headers() -> &'static [&'static str] {
        &["ID", "Name", "Number"]
    }

    fn cells(&self) -> Vec<String> {
        vec![
            self.id.clone(),
            self.name.clone(),
            format_missing_display(self.number),
        ]
    }
}

impl Record for AdminStats {
    const KIND: &'static str = "statistics";

    fn headers() -> &'static [&'static str] {
        &["Students", "Guides", "Teams", "Projects", "Projects by status"]
    }

    fn cells(&self) -> Vec<String> {
        let by_status: Vec<String> = self
            .projects_by_status
            .iter()
            .map(|(status, count)| format!("{status}={count}"))
            .collect();
        vec![
            self.total_students.to_string(),
            self.total_guides.to_string(),
            self.total_teams.to_string(),
            self.total_projects.to_string(),
            format_list(&by_status),
        ]
    }
}

impl Record for GuideStats {
    const KIND: &'static str = "statistics";

    fn headers() -> &'static [&'static str] {
        &["Teams", "Pending reviews", "Upcoming meetings"]
    }

    fn cells(&self) -> Vec<String> {
        vec![
            self.total_teams.to_string(),
            self.pending_reviews.to_string(),
            self.upcoming_meetings.to_string(),
        ]
    }
}

impl Record for StudentStats {
    const KIND: &'static str = "statistics";

    fn headers() -> &'static [&'static str] {
        &["Tasks", "Completed", "Pending", "Upcoming meetings"]
    }

    fn cells(&self) -> Vec<String> {
        vec![
            self.total_tasks.to_string(),
            self.completed_tasks.to_string(),
            self.pending_tasks.to_string(),
            self.upcoming_meetings.to_string(),
        ]
    }
}
