//! Jira issue polling.
//!
//! Queries the Jira Cloud search API with basic auth and flattens the
//! response into the shape the dashboard renders. Disabled, unconfigured,
//! or failing fetches yield the empty list; errors are logged, never
//! propagated.

use serde::Serialize;
use serde_json::Value;

use crate::config::Config;

/// Fields requested from the search API.
const ISSUE_FIELDS: &str = "summary,status,assignee,priority,created";

/// Upper bound on issues fetched per sync.
const MAX_RESULTS: u32 = 50;

/// A Jira issue flattened for the dashboard.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct JiraIssue {
    pub key: String,
    pub summary: String,
    pub status: String,
    pub assignee: String,
    pub priority: String,
    pub created: String,
}

/// Jira API client configured from the environment.
pub struct JiraClient {
    enabled: bool,
    base_url: String,
    username: String,
    api_token: String,
    project_key: String,
    client: reqwest::Client,
}

impl JiraClient {
    pub fn new(config: &Config) -> Self {
        let client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(10))
            .build()
            .unwrap_or_default();

        Self {
            enabled: config.jira_enabled,
            base_url: config.jira_url.trim_end_matches('/').to_string(),
            username: config.jira_username.clone(),
            api_token: config.jira_api_token.clone(),
            project_key: config.jira_project_key.clone(),
            client,
        }
    }

    /// Fetch open issues, either for the whole project or one assignee.
    pub async fn fetch_issues(&self, assignee: Option<&str>) -> Vec<JiraIssue> {
        if !self.enabled {
            return Vec::new();
        }
        if self.username.is_empty() || self.api_token.is_empty() {
            tracing::warn!("Jira credentials not configured");
            return Vec::new();
        }

        match self.try_fetch(assignee).await {
            Ok(issues) => issues,
            Err(err) => {
                tracing::error!("Error fetching Jira issues: {}", err);
                Vec::new()
            }
        }
    }

    async fn try_fetch(&self, assignee: Option<&str>) -> Result<Vec<JiraIssue>, reqwest::Error> {
        let jql = match assignee {
            Some(assignee) => format!("assignee=\"{}\" AND status != Done", assignee),
            None => format!("project={} AND status != Done", self.project_key),
        };

        let url = format!("{}/rest/api/3/search", self.base_url);
        let max_results = MAX_RESULTS.to_string();
        let response = self
            .client
            .get(&url)
            .query(&[
                ("jql", jql.as_str()),
                ("maxResults", max_results.as_str()),
                ("fields", ISSUE_FIELDS),
            ])
            .basic_auth(&self.username, Some(&self.api_token))
            .send()
            .await?
            .error_for_status()?;

        let data: Value = response.json().await?;
        Ok(parse_issues(&data))
    }
}

/// Flatten the search response. Issues with no assignee or priority get the
/// placeholder the dashboard expects; the created timestamp keeps only the
/// date part.
fn parse_issues(data: &Value) -> Vec<JiraIssue> {
    let Some(issues) = data.get("issues").and_then(Value::as_array) else {
        return Vec::new();
    };

    issues
        .iter()
        .filter_map(|issue| {
            let key = issue.get("key")?.as_str()?.to_string();
            let fields = issue.get("fields")?;
            Some(JiraIssue {
                key,
                summary: str_field(fields, &["summary"]).unwrap_or_default(),
                status: str_field(fields, &["status", "name"]).unwrap_or_default(),
                assignee: str_field(fields, &["assignee", "displayName"])
                    .unwrap_or_else(|| "Unassigned".to_string()),
                priority: str_field(fields, &["priority", "name"])
                    .unwrap_or_else(|| "None".to_string()),
                created: str_field(fields, &["created"])
                    .map(|c| c.chars().take(10).collect())
                    .unwrap_or_default(),
            })
        })
        .collect()
}

fn str_field(value: &Value, path: &[&str]) -> Option<String> {
    let mut current = value;
    for key in path {
        current = current.get(key)?;
    }
    current.as_str().map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_issues_flattens_fields() {
        let data = json!({
            "issues": [
                {
                    "key": "QA-17",
                    "fields": {
                        "summary": "Flaky login test",
                        "status": { "name": "In Progress" },
                        "assignee": { "displayName": "Casey Lane" },
                        "priority": { "name": "High" },
                        "created": "2026-08-01T09:30:00.000+0000"
                    }
                },
                {
                    "key": "QA-18",
                    "fields": {
                        "summary": "Unowned ticket",
                        "status": { "name": "To Do" },
                        "assignee": null,
                        "priority": null,
                        "created": "2026-08-02T11:00:00.000+0000"
                    }
                }
            ]
        });

        let issues = parse_issues(&data);
        assert_eq!(issues.len(), 2);
        assert_eq!(issues[0].key, "QA-17");
        assert_eq!(issues[0].status, "In Progress");
        assert_eq!(issues[0].assignee, "Casey Lane");
        assert_eq!(issues[0].created, "2026-08-01");
        assert_eq!(issues[1].assignee, "Unassigned");
        assert_eq!(issues[1].priority, "None");
    }

    #[test]
    fn test_parse_issues_tolerates_bad_shapes() {
        assert!(parse_issues(&json!({})).is_empty());
        assert!(parse_issues(&json!({ "issues": "nope" })).is_empty());
        // An issue without a key is skipped, not an error.
        let data = json!({ "issues": [ { "fields": { "summary": "orphan" } } ] });
        assert!(parse_issues(&data).is_empty());
    }

    #[tokio::test]
    async fn test_disabled_client_returns_empty() {
        let config = Config {
            jira_enabled: false,
            ..test_config()
        };
        let client = JiraClient::new(&config);
        assert!(client.fetch_issues(None).await.is_empty());
    }

    #[tokio::test]
    async fn test_missing_credentials_return_empty() {
        let config = Config {
            jira_enabled: true,
            jira_username: String::new(),
            jira_api_token: String::new(),
            ..test_config()
        };
        let client = JiraClient::new(&config);
        assert!(client.fetch_issues(None).await.is_empty());
    }

    fn test_config() -> Config {
        Config {
            bind_addr: "127.0.0.1:0".parse().unwrap(),
            data_dir: "./data".into(),
            log_level: "warn".to_string(),
            session_ttl_hours: 24,
            email_enabled: false,
            email_sender: String::new(),
            email_password: String::new(),
            manager_email: String::new(),
            smtp_server: String::new(),
            smtp_port: 587,
            digest_hour: 18,
            digest_minute: 0,
            jira_enabled: false,
            jira_url: "https://example.atlassian.net".to_string(),
            jira_username: "bot@example.com".to_string(),
            jira_api_token: "token".to_string(),
            jira_project_key: "QA".to_string(),
        }
    }
}
