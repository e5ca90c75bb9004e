//! Configuration module for the TeamOps backend.
//!
//! All configuration is loaded from environment variables with sensible defaults.

use std::env;
use std::net::SocketAddr;
use std::path::PathBuf;

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Address to bind the server to
    pub bind_addr: SocketAddr,
    /// Directory holding the JSON record files
    pub data_dir: PathBuf,
    /// Log level (trace, debug, info, warn, error)
    pub log_level: String,
    /// Session lifetime in hours
    pub session_ttl_hours: i64,
    /// Whether outbound mail is enabled
    pub email_enabled: bool,
    /// Sender address for outbound mail
    pub email_sender: String,
    /// SMTP password (app password for Gmail-style relays)
    pub email_password: String,
    /// Default recipient of the daily digest
    pub manager_email: String,
    /// SMTP relay host
    pub smtp_server: String,
    /// SMTP relay port (STARTTLS)
    pub smtp_port: u16,
    /// Hour of day the daily digest fires (24-hour clock, local time)
    pub digest_hour: u32,
    /// Minute of the hour the daily digest fires
    pub digest_minute: u32,
    /// Whether issue-tracker polling is enabled
    pub jira_enabled: bool,
    /// Base URL of the Jira instance
    pub jira_url: String,
    /// Jira account username
    pub jira_username: String,
    /// Jira API token
    pub jira_api_token: String,
    /// Project key used for the default issue query
    pub jira_project_key: String,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let bind_addr = env::var("TEAMOPS_BIND_ADDR")
            .unwrap_or_else(|_| "127.0.0.1:8080".to_string())
            .parse()
            .expect("Invalid TEAMOPS_BIND_ADDR format");

        let data_dir = env::var("TEAMOPS_DATA_DIR")
            .unwrap_or_else(|_| "./data".to_string())
            .into();

        let log_level = env::var("TEAMOPS_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        let session_ttl_hours = env_parse("TEAMOPS_SESSION_TTL_HOURS", 24);

        let email_enabled = env_bool("TEAMOPS_EMAIL_ENABLED");
        let email_sender = env::var("TEAMOPS_EMAIL_SENDER")
            .unwrap_or_else(|_| "team.bot@gmail.com".to_string());
        let email_password = env::var("TEAMOPS_EMAIL_PASSWORD").unwrap_or_default();
        let manager_email = env::var("TEAMOPS_MANAGER_EMAIL")
            .unwrap_or_else(|_| "manager@company.com".to_string());
        let smtp_server =
            env::var("TEAMOPS_SMTP_SERVER").unwrap_or_else(|_| "smtp.gmail.com".to_string());
        let smtp_port = env_parse("TEAMOPS_SMTP_PORT", 587);

        let digest_hour = env_parse("TEAMOPS_DIGEST_HOUR", 18).min(23);
        let digest_minute = env_parse("TEAMOPS_DIGEST_MINUTE", 0).min(59);

        let jira_enabled = env_bool("TEAMOPS_JIRA_ENABLED");
        let jira_url = env::var("TEAMOPS_JIRA_URL")
            .unwrap_or_else(|_| "https://yourcompany.atlassian.net".to_string());
        let jira_username = env::var("TEAMOPS_JIRA_USERNAME").unwrap_or_default();
        let jira_api_token = env::var("TEAMOPS_JIRA_API_TOKEN").unwrap_or_default();
        let jira_project_key =
            env::var("TEAMOPS_JIRA_PROJECT_KEY").unwrap_or_else(|_| "QA".to_string());

        Self {
            bind_addr,
            data_dir,
            log_level,
            session_ttl_hours,
            email_enabled,
            email_sender,
            email_password,
            manager_email,
            smtp_server,
            smtp_port,
            digest_hour,
            digest_minute,
            jira_enabled,
            jira_url,
            jira_username,
            jira_api_token,
            jira_project_key,
        }
    }
}

/// Parse a boolean flag the way the deployment scripts set them ("true"/"1").
fn env_bool(key: &str) -> bool {
    env::var(key)
        .map(|v| matches!(v.to_lowercase().as_str(), "true" | "1"))
        .unwrap_or(false)
}

/// Parse a numeric variable, falling back to the default on absence or garbage.
fn env_parse<T: std::str::FromStr + Copy>(key: &str, default: T) -> T {
    env::var(key)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        // Clear any existing env vars
        env::remove_var("TEAMOPS_BIND_ADDR");
        env::remove_var("TEAMOPS_DATA_DIR");
        env::remove_var("TEAMOPS_LOG_LEVEL");
        env::remove_var("TEAMOPS_SESSION_TTL_HOURS");
        env::remove_var("TEAMOPS_EMAIL_ENABLED");
        env::remove_var("TEAMOPS_DIGEST_HOUR");
        env::remove_var("TEAMOPS_DIGEST_MINUTE");
        env::remove_var("TEAMOPS_JIRA_ENABLED");

        let config = Config::from_env();

        assert_eq!(config.bind_addr.to_string(), "127.0.0.1:8080");
        assert_eq!(config.data_dir, PathBuf::from("./data"));
        assert_eq!(config.log_level, "info");
        assert_eq!(config.session_ttl_hours, 24);
        assert!(!config.email_enabled);
        assert_eq!(config.smtp_port, 587);
        assert_eq!(config.digest_hour, 18);
        assert_eq!(config.digest_minute, 0);
        assert!(!config.jira_enabled);
        assert_eq!(config.jira_project_key, "QA");
    }

    #[test]
    fn test_env_bool_accepts_true_and_one() {
        env::set_var("TEAMOPS_TEST_FLAG", "TRUE");
        assert!(env_bool("TEAMOPS_TEST_FLAG"));
        env::set_var("TEAMOPS_TEST_FLAG", "1");
        assert!(env_bool("TEAMOPS_TEST_FLAG"));
        env::set_var("TEAMOPS_TEST_FLAG", "yes");
        assert!(!env_bool("TEAMOPS_TEST_FLAG"));
        env::remove_var("TEAMOPS_TEST_FLAG");
    }

    #[test]
    fn test_env_parse_rejects_garbage() {
        env::set_var("TEAMOPS_TEST_NUM", "not-a-number");
        assert_eq!(env_parse("TEAMOPS_TEST_NUM", 7u32), 7);
        env::remove_var("TEAMOPS_TEST_NUM");
    }
}
