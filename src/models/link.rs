//! Shared link model.

use serde::{Deserialize, Serialize};

use crate::store::Record;

/// A bookmarked link shared with the team.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Link {
    pub id: u64,
    pub title: String,
    pub url: String,
    pub category: String,
    pub description: String,
}

impl Record for Link {
    const FILE: &'static str = "links.json";
    const NAME: &'static str = "Link";

    fn id(&self) -> u64 {
        self.id
    }

    fn set_id(&mut self, id: u64) {
        self.id = id;
    }
}

/// Request body for adding a link.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateLinkRequest {
    pub title: String,
    pub url: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub description: String,
}

impl CreateLinkRequest {
    pub fn into_record(self) -> Link {
        Link {
            id: 0,
            title: self.title,
            url: self.url,
            category: self.category,
            description: self.description,
        }
    }
}

/// Request body for updating a link.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateLinkRequest {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}

impl UpdateLinkRequest {
    pub fn apply(self, link: &mut Link) {
        if let Some(title) = self.title {
            link.title = title;
        }
        if let Some(url) = self.url {
            link.url = url;
        }
        if let Some(category) = self.category {
            link.category = category;
        }
        if let Some(description) = self.description {
            link.description = description;
        }
    }
}
