//! Leave entry model.

use serde::{Deserialize, Serialize};

use crate::store::{Dated, Record};

/// A leave request for a single team member and date.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Leave {
    pub id: u64,
    pub name: String,
    pub date: String,
    #[serde(rename = "type")]
    pub leave_type: String,
    pub reason: String,
    pub approval_status: String,
}

impl Record for Leave {
    const FILE: &'static str = "leaves.json";
    const NAME: &'static str = "Leave entry";

    fn id(&self) -> u64 {
        self.id
    }

    fn set_id(&mut self, id: u64) {
        self.id = id;
    }
}

impl Dated for Leave {
    fn date(&self) -> &str {
        &self.date
    }
}

/// Request body for recording a new leave entry.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateLeaveRequest {
    pub name: String,
    pub date: String,
    #[serde(rename = "type")]
    pub leave_type: String,
    #[serde(default)]
    pub reason: String,
    /// Defaults to "pending" when omitted.
    #[serde(default)]
    pub approval_status: Option<String>,
}

impl CreateLeaveRequest {
    pub fn into_record(self) -> Leave {
        Leave {
            id: 0,
            name: self.name,
            date: self.date,
            leave_type: self.leave_type,
            reason: self.reason,
            approval_status: self.approval_status.unwrap_or_else(|| "pending".to_string()),
        }
    }
}

/// Request body for updating an existing leave entry.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateLeaveRequest {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub date: Option<String>,
    #[serde(rename = "type", default)]
    pub leave_type: Option<String>,
    #[serde(default)]
    pub reason: Option<String>,
    #[serde(default)]
    pub approval_status: Option<String>,
}

impl UpdateLeaveRequest {
    /// Merge the submitted fields into the stored record.
    pub fn apply(self, leave: &mut Leave) {
        if let Some(name) = self.name {
            leave.name = name;
        }
        if let Some(date) = self.date {
            leave.date = date;
        }
        if let Some(leave_type) = self.leave_type {
            leave.leave_type = leave_type;
        }
        if let Some(reason) = self.reason {
            leave.reason = reason;
        }
        if let Some(approval_status) = self.approval_status {
            leave.approval_status = approval_status;
        }
    }
}
