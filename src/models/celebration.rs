//! Celebration model.

use serde::{Deserialize, Serialize};

use crate::store::{Dated, Record};

/// A birthday, anniversary, or other team celebration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Celebration {
    pub id: u64,
    pub date: String,
    pub member_name: String,
    pub event_type: String,
    pub message: String,
    pub photo_url: String,
}

impl Record for Celebration {
    const FILE: &'static str = "celebrations.json";
    const NAME: &'static str = "Celebration";

    fn id(&self) -> u64 {
        self.id
    }

    fn set_id(&mut self, id: u64) {
        self.id = id;
    }
}

impl Dated for Celebration {
    fn date(&self) -> &str {
        &self.date
    }
}

/// Request body for adding a celebration.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateCelebrationRequest {
    pub date: String,
    pub member_name: String,
    #[serde(default)]
    pub event_type: String,
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub photo_url: String,
}

impl CreateCelebrationRequest {
    pub fn into_record(self) -> Celebration {
        Celebration {
            id: 0,
            date: self.date,
            member_name: self.member_name,
            event_type: self.event_type,
            message: self.message,
            photo_url: self.photo_url,
        }
    }
}

/// Request body for updating a celebration.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateCelebrationRequest {
    #[serde(default)]
    pub date: Option<String>,
    #[serde(default)]
    pub member_name: Option<String>,
    #[serde(default)]
    pub event_type: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub photo_url: Option<String>,
}

impl UpdateCelebrationRequest {
    pub fn apply(self, celebration: &mut Celebration) {
        if let Some(date) = self.date {
            celebration.date = date;
        }
        if let Some(member_name) = self.member_name {
            celebration.member_name = member_name;
        }
        if let Some(event_type) = self.event_type {
            celebration.event_type = event_type;
        }
        if let Some(message) = self.message {
            celebration.message = message;
        }
        if let Some(photo_url) = self.photo_url {
            celebration.photo_url = photo_url;
        }
    }
}
