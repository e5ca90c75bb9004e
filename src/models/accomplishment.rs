//! Accomplishment model.

use serde::{Deserialize, Serialize};

use crate::store::{Dated, Record};

/// A dated accomplishment credited to a team member.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Accomplishment {
    pub id: u64,
    pub date: String,
    pub member_name: String,
    pub description: String,
    pub impact: String,
    #[serde(rename = "type")]
    pub accomplishment_type: String,
}

impl Record for Accomplishment {
    const FILE: &'static str = "accomplishments.json";
    const NAME: &'static str = "Accomplishment";

    fn id(&self) -> u64 {
        self.id
    }

    fn set_id(&mut self, id: u64) {
        self.id = id;
    }
}

impl Dated for Accomplishment {
    fn date(&self) -> &str {
        &self.date
    }
}

/// Request body for recording a new accomplishment.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateAccomplishmentRequest {
    pub date: String,
    pub member_name: String,
    pub description: String,
    #[serde(default)]
    pub impact: String,
    #[serde(rename = "type", default)]
    pub accomplishment_type: String,
}

impl CreateAccomplishmentRequest {
    pub fn into_record(self) -> Accomplishment {
        Accomplishment {
            id: 0,
            date: self.date,
            member_name: self.member_name,
            description: self.description,
            impact: self.impact,
            accomplishment_type: self.accomplishment_type,
        }
    }
}

/// Request body for updating an existing accomplishment.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateAccomplishmentRequest {
    #[serde(default)]
    pub date: Option<String>,
    #[serde(default)]
    pub member_name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub impact: Option<String>,
    #[serde(rename = "type", default)]
    pub accomplishment_type: Option<String>,
}

impl UpdateAccomplishmentRequest {
    pub fn apply(self, accomplishment: &mut Accomplishment) {
        if let Some(date) = self.date {
            accomplishment.date = date;
        }
        if let Some(member_name) = self.member_name {
            accomplishment.member_name = member_name;
        }
        if let Some(description) = self.description {
            accomplishment.description = description;
        }
        if let Some(impact) = self.impact {
            accomplishment.impact = impact;
        }
        if let Some(accomplishment_type) = self.accomplishment_type {
            accomplishment.accomplishment_type = accomplishment_type;
        }
    }
}
