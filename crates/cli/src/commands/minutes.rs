//! Minutes-of-meeting (MOM) views, open to every role.

use anyhow::Result;
use chrono::{DateTime, NaiveDate, Utc};
use clap::{Args, Subcommand};
use projdash_client::{ActionItem, MinutesRequest};
use std::path::PathBuf;

use crate::context::App;

#[derive(Debug, Subcommand)]
pub enum MinutesCommand {
    /// Show the minutes recorded for a meeting
    Show { meeting_id: String },
    /// Record minutes for a meeting
    Create {
        meeting_id: String,
        #[command(flatten)]
        body: MinutesBody,
    },
    /// Replace previously recorded minutes
    Update {
        minutes_id: String,
        #[arg(long)]
        meeting_id: String,
        #[command(flatten)]
        body: MinutesBody,
    },
    /// Download the minutes as a PDF
    Download {
        minutes_id: String,
        /// Where to save the document
        #[arg(long, value_name = "FILE")]
        save: PathBuf,
    },
}

#[derive(Debug, Args)]
pub struct MinutesBody {
    #[arg(long)]
    summary: String,
    /// A discussion point (repeatable)
    #[arg(long = "point")]
    points: Vec<String>,
    /// An action item as `description[|assignee[|YYYY-MM-DD]]` (repeatable)
    #[arg(long = "action", value_parser = parse_action_item)]
    actions: Vec<ActionItem>,
    /// RFC 3339 timestamp of the follow-up meeting
    #[arg(long)]
    next_meeting: Option<DateTime<Utc>>,
}

impl MinutesBody {
    fn into_request(self, meeting_id: String) -> MinutesRequest {
        MinutesRequest {
            meeting_id,
            summary: self.summary,
            discussion_points: self.points,
            action_items: self.actions,
            next_meeting_at: self.next_meeting,
        }
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

pub(crate) fn parse_action_item(raw: &str) -> Result<ActionItem, String> {
    let mut parts = raw.splitn(3, '|');
    let description = non_blank(parts.next())
        .ok_or_else(|| "action item needs a description".to_string())?
        .to_string();
    let assignee = non_blank(parts.next()).map(str::to_string);
    let due_date = non_blank(parts.next())
        .map(|d| {
            NaiveDate::parse_from_str(d, "%Y-%m-%d")
                .map_err(|e| format!("invalid due date '{d}': {e}"))
        })
        .transpose()?;
    Ok(ActionItem {
        description,
        assignee,
        due_date,
    })
}

pub async fn run(app: &App, command: MinutesCommand) -> Result<()> {
    let client = app.client();

    match command {
        MinutesCommand::Show { meeting_id } => {
            let scope = app.open(&format!("/mom/{meeting_id}"))?;
            let minutes = app
                .fetch(&scope, "Loading minutes", client.get_minutes(&meeting_id))
                .await?;
            match minutes {
                Some(minutes) => app.print_one(&minutes),
                None => {
                    eprintln!("No minutes recorded for meeting '{meeting_id}' yet.");
                    Ok(())
                }
            }
        }
        MinutesCommand::Create { meeting_id, body } => {
            let scope = app.open(&format!("/mom/{meeting_id}"))?;
            let request = body.into_request(meeting_id);
            let minutes = app
                .fetch(&scope, "Saving minutes", client.create_minutes(&request))
                .await?;
            app.print_one(&minutes)
        }
        MinutesCommand::Update {
            minutes_id,
            meeting_id,
            body,
        } => {
            let scope = app.open(&format!("/mom/{meeting_id}"))?;
            let request = body.into_request(meeting_id);
            let minutes = app
                .fetch(
                    &scope,
                    "Saving minutes",
                    client.update_minutes(&minutes_id, &request),
                )
                .await?;
            app.print_one(&minutes)
        }
        MinutesCommand::Download { minutes_id, save } => {
            let scope = app.open("/mom")?;
            let bytes = app
                .fetch(&scope, "Downloading minutes", client.download_minutes(&minutes_id))
                .await?;
            crate::formatters::write_bytes_to_file(&bytes, &save)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_full_action_item() {
        let item = parse_action_item("Draft report | Asha | 2025-04-02").unwrap();
        assert_eq!(item.description, "Draft report");
        assert_eq!(item.assignee.as_deref(), Some("Asha"));
        assert_eq!(item.due_date, NaiveDate::from_ymd_opt(2025, 4, 2));
    }

    #[test]
    fn test_parse_description_only() {
        let item = parse_action_item("Fix CI").unwrap();
        assert_eq!(item.assignee, None);
        assert_eq!(item.due_date, None);
    }

    #[test]
    fn test_parse_skips_blank_assignee() {
        let item = parse_action_item("Book lab||2025-05-01").unwrap();
        assert_eq!(item.assignee, None);
        assert!(item.due_date.is_some());
    }

    #[test]
    fn test_parse_rejects_bad_input() {
        assert!(parse_action_item("  ").is_err());
        assert!(parse_action_item("Book lab|Ravi|next week").is_err());
    }
}
