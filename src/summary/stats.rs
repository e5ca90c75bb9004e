//! Dashboard statistics aggregated across the resource collections.

use serde::Serialize;

use crate::models::{Accomplishment, Build, InventoryItem, Leave, Server, User};
use crate::store::Repository;

/// The headline numbers shown on the dashboard landing page.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    pub total_team_members: usize,
    pub on_leave_today: usize,
    pub pending_approvals: usize,
    pub total_devices: usize,
    pub available_servers: usize,
    pub active_builds: usize,
    pub today_accomplishments: usize,
    pub on_leave_names: Vec<String>,
    pub recent_accomplishments: Vec<Accomplishment>,
}

/// Gather statistics for the dashboard. Everything is counted at read time
/// over the full collections.
pub async fn collect(repo: &Repository) -> DashboardStats {
    let today = super::today();

    let users: Vec<User> = repo.list().await;
    let leaves: Vec<Leave> = repo.list().await;
    let accomplishments: Vec<Accomplishment> = repo.list().await;
    let inventory: Vec<InventoryItem> = repo.list().await;
    let servers: Vec<Server> = repo.list().await;
    let builds: Vec<Build> = repo.list().await;

    compute(&today, &users, &leaves, &accomplishments, &inventory, &servers, &builds)
}

fn compute(
    today: &str,
    users: &[User],
    leaves: &[Leave],
    accomplishments: &[Accomplishment],
    inventory: &[InventoryItem],
    servers: &[Server],
    builds: &[Build],
) -> DashboardStats {
    let on_leave_today: Vec<&Leave> = leaves
        .iter()
        .filter(|l| l.date == today && l.approval_status == "approved")
        .collect();
    let pending_approvals = leaves
        .iter()
        .filter(|l| l.approval_status == "pending")
        .count();
    let today_accomplishments: Vec<&Accomplishment> = accomplishments
        .iter()
        .filter(|a| a.date == today)
        .collect();

    DashboardStats {
        total_team_members: users.iter().filter(|u| !u.is_admin()).count(),
        on_leave_today: on_leave_today.len(),
        pending_approvals,
        total_devices: inventory.len(),
        available_servers: servers.iter().filter(|s| s.status == "available").count(),
        active_builds: builds.iter().filter(|b| b.is_active()).count(),
        today_accomplishments: today_accomplishments.len(),
        on_leave_names: on_leave_today.iter().map(|l| l.name.clone()).collect(),
        recent_accomplishments: today_accomplishments
            .into_iter()
            .take(5)
            .cloned()
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn leave(name: &str, date: &str, approval_status: &str) -> Leave {
        Leave {
            id: 0,
            name: name.to_string(),
            date: date.to_string(),
            leave_type: "vacation".to_string(),
            reason: String::new(),
            approval_status: approval_status.to_string(),
        }
    }

    fn accomplishment(date: &str) -> Accomplishment {
        Accomplishment {
            id: 0,
            date: date.to_string(),
            member_name: "Casey".to_string(),
            description: "Shipped".to_string(),
            impact: String::new(),
            accomplishment_type: "delivery".to_string(),
        }
    }

    fn user(username: &str, role: &str) -> User {
        User {
            id: 0,
            username: username.to_string(),
            password: String::new(),
            role: role.to_string(),
            name: username.to_string(),
        }
    }

    fn build(status: &str) -> Build {
        Build {
            id: 0,
            build_name: "api".to_string(),
            version: "1.0".to_string(),
            date: "2026-01-01".to_string(),
            environment: "staging".to_string(),
            status: status.to_string(),
            changelog_url: String::new(),
        }
    }

    fn server(status: &str) -> Server {
        Server {
            id: 0,
            server_name: "db-1".to_string(),
            ip: "10.0.0.1".to_string(),
            os: "debian".to_string(),
            purpose: String::new(),
            assigned_team: String::new(),
            attached_devices: String::new(),
            status: status.to_string(),
        }
    }

    #[test]
    fn test_compute_counts() {
        let today = "2026-08-06";
        let stats = compute(
            today,
            &[user("admin", "admin"), user("casey", "member"), user("jo", "member")],
            &[
                leave("Casey", today, "approved"),
                leave("Jo", today, "pending"),
                leave("Casey", "2026-08-01", "approved"),
            ],
            &[accomplishment(today), accomplishment("2026-08-05")],
            &[],
            &[server("available"), server("in-use")],
            &[build("testing"), build("release"), build("archived")],
        );

        assert_eq!(stats.total_team_members, 2);
        assert_eq!(stats.on_leave_today, 1);
        assert_eq!(stats.on_leave_names, vec!["Casey".to_string()]);
        assert_eq!(stats.pending_approvals, 1);
        assert_eq!(stats.total_devices, 0);
        assert_eq!(stats.available_servers, 1);
        assert_eq!(stats.active_builds, 2);
        assert_eq!(stats.today_accomplishments, 1);
        assert_eq!(stats.recent_accomplishments.len(), 1);
    }

    #[test]
    fn test_recent_accomplishments_capped_at_five() {
        let today = "2026-08-06";
        let accomplishments: Vec<Accomplishment> =
            (0..8).map(|_| accomplishment(today)).collect();
        let stats = compute(today, &[], &[], &accomplishments, &[], &[], &[]);

        assert_eq!(stats.today_accomplishments, 8);
        assert_eq!(stats.recent_accomplishments.len(), 5);
    }
}
