use serde::Serialize;

use teamsort_core::{AssignmentRecord, Placement};

/// Output of `join --json` and `team --json`.
#[derive(Serialize)]
pub struct PlacementOutput {
    pub user_id: i64,
    pub assigned: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub team_index: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub team: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub motto: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub caption: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub newly_assigned: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub full_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assigned_at: Option<String>,
}

impl PlacementOutput {
    pub fn unassigned(user_id: i64) -> Self {
        Self {
            user_id,
            assigned: false,
            team_index: None,
            team: None,
            motto: None,
            caption: None,
            image: None,
            newly_assigned: None,
            username: None,
            full_name: None,
            assigned_at: None,
        }
    }

    pub fn from_placement(
        placement: &Placement,
        image: Option<String>,
        record: Option<&AssignmentRecord>,
    ) -> Self {
        Self {
            user_id: placement.user_id.get(),
            assigned: true,
            team_index: Some(placement.team_index.get()),
            team: Some(placement.team.name.clone()),
            motto: Some(placement.team.motto.clone()),
            caption: Some(placement.caption()),
            image,
            newly_assigned: Some(placement.newly_assigned),
            username: record.map(|r| r.username.clone()),
            full_name: record.map(|r| r.full_name.clone()),
            assigned_at: record.map(|r| r.assigned_at.to_rfc3339()),
        }
    }
}

#[derive(Serialize)]
pub struct TeamCount {
    pub index: usize,
    pub name: String,
    pub count: usize,
}

/// Output of `counts --json`.
#[derive(Serialize)]
pub struct CountsOutput {
    pub teams: Vec<TeamCount>,
    pub total: usize,
}

/// One roster entry in `teams --json`.
#[derive(Serialize)]
pub struct RosterEntry {
    pub index: usize,
    pub name: String,
    pub motto: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}
