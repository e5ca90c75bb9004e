//! Daily digest trigger.
//!
//! A single spawned task sleeps until the configured hour and minute,
//! sends the digest, and repeats. A failed send (mail disabled, SMTP
//! error) is logged and the loop keeps running.

use chrono::{DateTime, Local, NaiveDateTime, NaiveTime};

use crate::summary::digest;
use crate::AppState;

/// Spawn the daily digest loop.
pub fn spawn_daily_digest(state: AppState) -> tokio::task::JoinHandle<()> {
    tokio::spawn(async move {
        loop {
            let wait = until_next_fire(
                Local::now(),
                state.config.digest_hour,
                state.config.digest_minute,
            );
            tracing::info!(
                "Next daily digest in {}s (at {:02}:{:02})",
                wait.as_secs(),
                state.config.digest_hour,
                state.config.digest_minute
            );
            tokio::time::sleep(wait).await;

            if !send_daily_digest(&state).await {
                tracing::warn!("Daily digest was not sent");
            }
        }
    })
}

/// Compose and send today's digest. Shared by the scheduler loop and the
/// manual trigger endpoint.
pub async fn send_daily_digest(state: &AppState) -> bool {
    let today = crate::summary::today();
    let html = digest::render(&state.repo).await;
    state
        .mailer
        .send(&digest::subject(&today), html, None)
        .await
}

/// Time until the next occurrence of `hour:minute`, local time. If the
/// mark already passed today, the fire moves to tomorrow.
fn until_next_fire(now: DateTime<Local>, hour: u32, minute: u32) -> std::time::Duration {
    let target_time = NaiveTime::from_hms_opt(hour, minute, 0).unwrap_or(NaiveTime::MIN);
    let now_naive = now.naive_local();

    let mut fire_date = now_naive.date();
    if now_naive.time() >= target_time {
        fire_date = fire_date.succ_opt().unwrap_or(fire_date);
    }
    let fire = NaiveDateTime::new(fire_date, target_time);

    (fire - now_naive)
        .to_std()
        .unwrap_or(std::time::Duration::from_secs(60))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn local(y: i32, mo: u32, d: u32, h: u32, mi: u32, s: u32) -> DateTime<Local> {
        Local.with_ymd_and_hms(y, mo, d, h, mi, s).unwrap()
    }

    #[test]
    fn test_fire_later_today() {
        let wait = until_next_fire(local(2026, 8, 6, 17, 0, 0), 18, 0);
        assert_eq!(wait.as_secs(), 3600);
    }

    #[test]
    fn test_fire_rolls_to_tomorrow() {
        let wait = until_next_fire(local(2026, 8, 6, 19, 0, 0), 18, 0);
        assert_eq!(wait.as_secs(), 23 * 3600);
    }

    #[test]
    fn test_fire_at_exact_mark_waits_a_day() {
        let wait = until_next_fire(local(2026, 8, 6, 18, 0, 0), 18, 0);
        assert_eq!(wait.as_secs(), 24 * 3600);
    }
}
