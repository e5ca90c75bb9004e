//! Skill matrix model.

use serde::{Deserialize, Serialize};

use crate::store::Record;

/// One skill rating for one team member.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Skill {
    pub id: u64,
    pub name: String,
    pub skill: String,
    pub level: String,
    pub last_updated: String,
}

impl Record for Skill {
    const FILE: &'static str = "skills.json";
    const NAME: &'static str = "Skill";

    fn id(&self) -> u64 {
        self.id
    }

    fn set_id(&mut self, id: u64) {
        self.id = id;
    }
}

/// Request body for adding a skill rating.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateSkillRequest {
    pub name: String,
    pub skill: String,
    #[serde(default)]
    pub level: String,
    /// Defaults to today when omitted.
    #[serde(default)]
    pub last_updated: Option<String>,
}

impl CreateSkillRequest {
    pub fn into_record(self, today: String) -> Skill {
        Skill {
            id: 0,
            name: self.name,
            skill: self.skill,
            level: self.level,
            last_updated: self.last_updated.unwrap_or(today),
        }
    }
}

/// Request body for updating a skill rating.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateSkillRequest {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub skill: Option<String>,
    #[serde(default)]
    pub level: Option<String>,
    #[serde(default)]
    pub last_updated: Option<String>,
}

impl UpdateSkillRequest {
    pub fn apply(self, record: &mut Skill) {
        if let Some(name) = self.name {
            record.name = name;
        }
        if let Some(skill) = self.skill {
            record.skill = skill;
        }
        if let Some(level) = self.level {
            record.level = level;
        }
        if let Some(last_updated) = self.last_updated {
            record.last_updated = last_updated;
        }
    }
}
