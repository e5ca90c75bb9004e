//! Daily digest HTML composition.
//!
//! Gathers today's records across the resource collections and renders the
//! fixed HTML template the manager receives by mail.

use chrono::Local;

use crate::models::{Accomplishment, Announcement, Build, Leave};
use crate::store::Repository;

use super::format_display_date;

/// Render the digest for today from live store data.
pub async fn render(repo: &Repository) -> String {
    let today = super::today();

    let leaves: Vec<Leave> = repo.list().await;
    let accomplishments: Vec<Accomplishment> = repo.list().await;
    let announcements: Vec<Announcement> = repo.list_by_date_desc().await;
    let builds: Vec<Build> = repo.list().await;

    let today_leaves: Vec<&Leave> = leaves.iter().filter(|l| l.date == today).collect();
    let today_accomplishments: Vec<&Accomplishment> =
        accomplishments.iter().filter(|a| a.date == today).collect();
    let recent_announcements: Vec<&Announcement> = announcements.iter().take(3).collect();
    let active_builds: Vec<&Build> = builds.iter().filter(|b| b.is_active()).collect();

    let generated_at = Local::now().format("%Y-%m-%d %H:%M:%S").to_string();
    compose(
        &today,
        &today_leaves,
        &today_accomplishments,
        &recent_announcements,
        &active_builds,
        &generated_at,
    )
}

/// Subject line for the digest mail.
pub fn subject(today: &str) -> String {
    format!("Daily Team Summary - {}", format_display_date(today))
}

fn compose(
    today: &str,
    leaves: &[&Leave],
    accomplishments: &[&Accomplishment],
    announcements: &[&Announcement],
    builds: &[&Build],
    generated_at: &str,
) -> String {
    format!(
        r#"<html>
<head>
    <style>
        body {{ font-family: Arial, sans-serif; line-height: 1.6; }}
        h2 {{ color: #2c3e50; border-bottom: 2px solid #3498db; padding-bottom: 10px; }}
        h3 {{ color: #34495e; margin-top: 20px; }}
        .section {{ margin-bottom: 30px; }}
        .item {{ background: #f8f9fa; padding: 10px; margin: 10px 0; border-left: 4px solid #3498db; }}
        .empty {{ color: #7f8c8d; font-style: italic; }}
    </style>
</head>
<body>
    <h2>&#128202; Daily Team Summary - {date}</h2>

    <div class="section">
        <h3>&#127958; Leave &amp; Attendance</h3>
        {leaves}
    </div>

    <div class="section">
        <h3>&#127919; Accomplishments</h3>
        {accomplishments}
    </div>

    <div class="section">
        <h3>&#128226; Recent Announcements</h3>
        {announcements}
    </div>

    <div class="section">
        <h3>&#128295; Active Builds</h3>
        {builds}
    </div>

    <hr>
    <p style="color: #7f8c8d; font-size: 12px;">
        This is an automated summary from the TeamOps dashboard.<br>
        Generated on {generated_at}
    </p>
</body>
</html>"#,
        date = format_display_date(today),
        leaves = leaves_section(leaves),
        accomplishments = accomplishments_section(accomplishments),
        announcements = announcements_section(announcements),
        builds = builds_section(builds),
        generated_at = generated_at,
    )
}

fn leaves_section(leaves: &[&Leave]) -> String {
    if leaves.is_empty() {
        return r#"<p class="empty">No leaves today</p>"#.to_string();
    }
    leaves
        .iter()
        .map(|leave| {
            format!(
                r#"<div class="item">
    <strong>{}</strong> - {}<br>
    Reason: {}<br>
    Status: {}
</div>"#,
                leave.name, leave.leave_type, leave.reason, leave.approval_status
            )
        })
        .collect()
}

fn accomplishments_section(accomplishments: &[&Accomplishment]) -> String {
    if accomplishments.is_empty() {
        return r#"<p class="empty">No accomplishments logged today</p>"#.to_string();
    }
    accomplishments
        .iter()
        .map(|acc| {
            format!(
                r#"<div class="item">
    <strong>{}</strong> - {}<br>
    {}<br>
    <em>Impact: {}</em>
</div>"#,
                acc.member_name, acc.accomplishment_type, acc.description, acc.impact
            )
        })
        .collect()
}

fn announcements_section(announcements: &[&Announcement]) -> String {
    if announcements.is_empty() {
        return r#"<p class="empty">No recent announcements</p>"#.to_string();
    }
    announcements
        .iter()
        .map(|ann| {
            format!(
                r#"<div class="item">
    <strong>{}</strong> - {}<br>
    {}<br>
    <em>Posted by: {}</em>
</div>"#,
                ann.title,
                format_display_date(&ann.date),
                ann.message,
                ann.posted_by
            )
        })
        .collect()
}

fn builds_section(builds: &[&Build]) -> String {
    if builds.is_empty() {
        return r#"<p class="empty">No active builds</p>"#.to_string();
    }
    builds
        .iter()
        .map(|build| {
            format!(
                r#"<div class="item">
    <strong>{}</strong> v{}<br>
    Environment: {} | Status: {}<br>
    Date: {}
</div>"#,
                build.build_name,
                build.version,
                build.environment,
                build.status,
                format_display_date(&build.date)
            )
        })
        .collect()
}
