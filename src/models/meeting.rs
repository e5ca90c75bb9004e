//! Meeting notes model.

use serde::{Deserialize, Serialize};

use crate::store::{Dated, Record};

/// A meeting with its action items and an owner for follow-up.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Meeting {
    pub id: u64,
    pub date: String,
    pub topic: String,
    pub action_items: String,
    pub owner: String,
    pub status: String,
}

impl Record for Meeting {
    const FILE: &'static str = "meetings.json";
    const NAME: &'static str = "Meeting";

    fn id(&self) -> u64 {
        self.id
    }

    fn set_id(&mut self, id: u64) {
        self.id = id;
    }
}

impl Dated for Meeting {
    fn date(&self) -> &str {
        &self.date
    }
}

/// Request body for recording a meeting.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateMeetingRequest {
    pub date: String,
    pub topic: String,
    #[serde(default)]
    pub action_items: String,
    #[serde(default)]
    pub owner: String,
    #[serde(default)]
    pub status: String,
}

impl CreateMeetingRequest {
    pub fn into_record(self) -> Meeting {
        Meeting {
            id: 0,
            date: self.date,
            topic: self.topic,
            action_items: self.action_items,
            owner: self.owner,
            status: self.status,
        }
    }
}

/// Request body for updating a meeting.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateMeetingRequest {
    #[serde(default)]
    pub date: Option<String>,
    #[serde(default)]
    pub topic: Option<String>,
    #[serde(default)]
    pub action_items: Option<String>,
    #[serde(default)]
    pub owner: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
}

impl UpdateMeetingRequest {
    pub fn apply(self, meeting: &mut Meeting) {
        if let Some(date) = self.date {
            meeting.date = date;
        }
        if let Some(topic) = self.topic {
            meeting.topic = topic;
        }
        if let Some(action_items) = self.action_items {
            meeting.action_items = action_items;
        }
        if let Some(owner) = self.owner {
            meeting.owner = owner;
        }
        if let Some(status) = self.status {
            meeting.status = status;
        }
    }
}
