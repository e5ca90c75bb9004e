//! Build model.

use serde::{Deserialize, Serialize};

use crate::store::{Dated, Record};

/// Statuses that count as an active build in the dashboard and digest.
pub const ACTIVE_BUILD_STATUSES: [&str; 2] = ["testing", "release"];

/// A software build deployed to some environment.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Build {
    pub id: u64,
    pub build_name: String,
    pub version: String,
    pub date: String,
    pub environment: String,
    pub status: String,
    pub changelog_url: String,
}

impl Build {
    /// Whether this build is in an active (testing or release) state.
    pub fn is_active(&self) -> bool {
        ACTIVE_BUILD_STATUSES.contains(&self.status.as_str())
    }
}

impl Record for Build {
    const FILE: &'static str = "builds.json";
    const NAME: &'static str = "Build";

    fn id(&self) -> u64 {
        self.id
    }

    fn set_id(&mut self, id: u64) {
        self.id = id;
    }
}

impl Dated for Build {
    fn date(&self) -> &str {
        &self.date
    }
}

/// Request body for recording a build.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateBuildRequest {
    pub build_name: String,
    #[serde(default)]
    pub version: String,
    pub date: String,
    #[serde(default)]
    pub environment: String,
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub changelog_url: String,
}

impl CreateBuildRequest {
    pub fn into_record(self) -> Build {
        Build {
            id: 0,
            build_name: self.build_name,
            version: self.version,
            date: self.date,
            environment: self.environment,
            status: self.status,
            changelog_url: self.changelog_url,
        }
    }
}

/// Request body for updating a build.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateBuildRequest {
    #[serde(default)]
    pub build_name: Option<String>,
    #[serde(default)]
    pub version: Option<String>,
    #[serde(default)]
    pub date: Option<String>,
    #[serde(default)]
    pub environment: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub changelog_url: Option<String>,
}

impl UpdateBuildRequest {
    pub fn apply(self, build: &mut Build) {
        if let Some(build_name) = self.build_name {
            build.build_name = build_name;
        }
        if let Some(version) = self.version {
            build.version = version;
        }
        if let Some(date) = self.date {
            build.date = date;
        }
        if let Some(environment) = self.environment {
            build.environment = environment;
        }
        if let Some(status) = self.status {
            build.status = status;
        }
        if let Some(changelog_url) = self.changelog_url {
            build.changelog_url = changelog_url;
        }
    }
}
