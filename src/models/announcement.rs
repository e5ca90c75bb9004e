//! Announcement model.

use serde::{Deserialize, Serialize};

use crate::store::{Dated, Record};

/// A team-wide announcement. `posted_by` is taken from the posting session,
/// never from the request body.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Announcement {
    pub id: u64,
    pub date: String,
    pub title: String,
    pub message: String,
    pub posted_by: String,
}

impl Record for Announcement {
    const FILE: &'static str = "announcements.json";
    const NAME: &'static str = "Announcement";

    fn id(&self) -> u64 {
        self.id
    }

    fn set_id(&mut self, id: u64) {
        self.id = id;
    }
}

impl Dated for Announcement {
    fn date(&self) -> &str {
        &self.date
    }
}

/// Request body for posting an announcement.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateAnnouncementRequest {
    pub date: String,
    pub title: String,
    #[serde(default)]
    pub message: String,
}

impl CreateAnnouncementRequest {
    pub fn into_record(self, posted_by: String) -> Announcement {
        Announcement {
            id: 0,
            date: self.date,
            title: self.title,
            message: self.message,
            posted_by,
        }
    }
}

/// Request body for editing an announcement. The original poster is kept.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateAnnouncementRequest {
    #[serde(default)]
    pub date: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

impl UpdateAnnouncementRequest {
    pub fn apply(self, announcement: &mut Announcement) {
        if let Some(date) = self.date {
            announcement.date = date;
        }
        if let Some(title) = self.title {
            announcement.title = title;
        }
        if let Some(message) = self.message {
            announcement.message = message;
        }
    }
}
