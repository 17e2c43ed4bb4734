use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::common::{Displayable, Identifiable, NamedEntity};

/// A savings goal with a user-assigned priority and status.
///
/// `status` is set explicitly by the user; the store never rewrites it. The
/// prognosis module produces its own assessment without touching the record.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Goal {
    pub id: Uuid,
    pub name: String,
    pub target_amount: f64,
    pub target_date: NaiveDate,
    pub priority: u32,
    pub status: GoalStatus,
}

impl Goal {
    pub(crate) fn from_draft(draft: GoalDraft) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: draft.name,
            target_amount: draft.target_amount,
            target_date: draft.target_date,
            priority: draft.priority,
            status: draft.status,
        }
    }
}

impl Identifiable for Goal {
    fn id(&self) -> Uuid {
        self.id
    }
}

impl NamedEntity for Goal {
    fn name(&self) -> &str {
        &self.name
    }
}

impl Displayable for Goal {
    fn display_label(&self) -> String {
        format!("{} ({:?})", self.name, self.status)
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum GoalStatus {
    OnTrack,
    AtRisk,
    Unrealistic,
}

impl std::fmt::Display for GoalStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            GoalStatus::OnTrack => "On Track",
            GoalStatus::AtRisk => "At Risk",
            GoalStatus::Unrealistic => "Unrealistic",
        };
        f.write_str(label)
    }
}

/// Caller-supplied fields for a new goal; the store generates the id.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GoalDraft {
    pub name: String,
    pub target_amount: f64,
    pub target_date: NaiveDate,
    pub priority: u32,
    pub status: GoalStatus,
}

/// Partial-merge update: only present fields overwrite the stored record.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GoalPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_amount: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_date: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub priority: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<GoalStatus>,
}

impl GoalPatch {
    pub fn apply_to(self, goal: &mut Goal) {
        if let Some(name) = self.name {
            goal.name = name;
        }
        if let Some(target_amount) = self.target_amount {
            goal.target_amount = target_amount;
        }
        if let Some(target_date) = self.target_date {
            goal.target_date = target_date;
        }
        if let Some(priority) = self.priority {
            goal.priority = priority;
        }
        if let Some(status) = self.status {
            goal.status = status;
        }
    }
}
