use async_trait::async_trait;
use chrono::{DateTime, Local, NaiveTime, TimeZone};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::slots::{compute_slots, ReminderSlot};
use crate::packets::PacketType;

#[derive(Error, Debug)]
pub enum NotificationError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Notification host error: {0}")]
    Host(String),
}

pub type Result<T> = std::result::Result<T, NotificationError>;

/// Title and body for each packet type, in delivery order
const REMINDER_COPY: [(&str, &str); 5] = [
    ("💡 Time to learn", "Today's concept is ready. 60 seconds is all it takes."),
    ("👁️ See it in action", "Your visual packet is ready. Watch the algorithm move."),
    ("⚡ Quick challenge", "One question. Can you get it right?"),
    ("🌍 Real world connection", "See where today's concept lives in the real world."),
    ("🧠 Before you sleep", "One last recall. Lock in what you learned today."),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum PermissionStatus {
    Granted,
    Denied,
    /// Never asked
    Undetermined,
}

/// A notification repeating every day at a fixed local time
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyReminder {
    pub hour: u32,
    pub minute: u32,
    pub title: String,
    pub body: String,
    pub packet_type: PacketType,
}

impl From<ReminderSlot> for DailyReminder {
    fn from(slot: ReminderSlot) -> Self {
        let (title, body) = REMINDER_COPY[slot.packet_type.index()];
        Self {
            hour: slot.time.hour,
            minute: slot.time.minute,
            title: title.to_string(),
            body: body.to_string(),
            packet_type: slot.packet_type,
        }
    }
}

/// The five daily reminders for a wake/sleep pair
pub fn daily_reminders(wake: &str, sleep: &str) -> Vec<DailyReminder> {
    compute_slots(wake, sleep)
        .into_iter()
        .map(DailyReminder::from)
        .collect()
}

/// Next local time `reminder` fires strictly after `now`
pub fn next_occurrence(reminder: &DailyReminder, now: DateTime<Local>) -> Option<DateTime<Local>> {
    let scheduled_time = NaiveTime::from_hms_opt(reminder.hour, reminder.minute, 0)?;
    let mut date = now.date_naive();

    // Today's time has passed, move to tomorrow
    if now.time() >= scheduled_time {
        date = date.succ_opt()?;
    }

    // Skip a day whose local time falls in a DST gap
    for _ in 0..2 {
        if let Some(at) = Local.from_local_datetime(&date.and_time(scheduled_time)).earliest() {
            return Some(at);
        }
        date = date.succ_opt()?;
    }
    None
}

/// Platform service that shows scheduled notifications
#[async_trait]
pub trait NotificationHost: Send + Sync {
    async fn permission_status(&self) -> Result<PermissionStatus>;

    /// Ask the user; returns the resulting status
    async fn request_permission(&self) -> Result<PermissionStatus>;

    async fn cancel_all(&self) -> Result<()>;

    async fn schedule_daily(&self, reminder: &DailyReminder) -> Result<()>;
}

/// Replace any scheduled reminders with the five for this wake/sleep pair.
///
/// Returns `false` without scheduling anything if permission is refused.
pub async fn schedule_reminders<H>(host: &H, wake: &str, sleep: &str) -> Result<bool>
where
    H: NotificationHost + ?Sized,
{
    host.cancel_all().await?;

    let mut status = host.permission_status().await?;
    if status != PermissionStatus::Granted {
        status = host.request_permission().await?;
    }
    if status != PermissionStatus::Granted {
        log::info!("Notification permission not granted, skipping reminders");
        return Ok(false);
    }

    let reminders = daily_reminders(wake, sleep);
    for reminder in &reminders {
        host.schedule_daily(reminder).await?;
    }
    log::info!("Scheduled {} daily reminders", reminders.len());
    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    #[derive(Debug, PartialEq)]
    enum Call {
        CancelAll,
        Status,
        Request,
        Schedule(u32, u32),
    }

    struct MockHost {
        status: PermissionStatus,
        answer: PermissionStatus,
        calls: Mutex<Vec<Call>>,
    }

    impl MockHost {
        fn new(status: PermissionStatus, answer: PermissionStatus) -> Self {
            Self {
                status,
                answer,
                calls: Mutex::new(Vec::new()),
            }
        }

        fn record(&self, call: Call) {
            self.calls.lock().unwrap().push(call);
        }
    }

    #[async_trait]
    impl NotificationHost for MockHost {
        async fn permission_status(&self) -> Result<PermissionStatus> {
            self.record(Call::Status);
            Ok(self.status)
        }

        async fn request_permission(&self) -> Result<PermissionStatus> {
            self.record(Call::Request);
            Ok(self.answer)
        }

        async fn cancel_all(&self) -> Result<()> {
            self.record(Call::CancelAll);
            Ok(())
        }

        async fn schedule_daily(&self, reminder: &DailyReminder) -> Result<()> {
            self.record(Call::Schedule(reminder.hour, reminder.minute));
            Ok(())
        }
    }

    #[tokio::test]
    async fn test_granted_schedules_five() {
        let host = MockHost::new(PermissionStatus::Granted, PermissionStatus::Granted);

        assert!(schedule_reminders(&host, "7:00 AM", "11:00 PM").await.unwrap());

        let calls = host.calls.lock().unwrap();
        assert_eq!(
            *calls,
            vec![
                Call::CancelAll,
                Call::Status,
                Call::Schedule(8, 36),
                Call::Schedule(11, 48),
                Call::Schedule(15, 0),
                Call::Schedule(18, 12),
                Call::Schedule(21, 24),
            ]
        );
    }

    #[tokio::test]
    async fn test_asks_when_undetermined() {
        let host = MockHost::new(PermissionStatus::Undetermined, PermissionStatus::Granted);

        assert!(schedule_reminders(&host, "7:00 AM", "11:00 PM").await.unwrap());

        let calls = host.calls.lock().unwrap();
        assert_eq!(calls[..3], [Call::CancelAll, Call::Status, Call::Request]);
        assert_eq!(calls.len(), 8);
    }

    #[tokio::test]
    async fn test_denied_returns_false_after_cancelling() {
        let host = MockHost::new(PermissionStatus::Denied, PermissionStatus::Denied);

        assert!(!schedule_reminders(&host, "7:00 AM", "11:00 PM").await.unwrap());

        let calls = host.calls.lock().unwrap();
        assert_eq!(*calls, vec![Call::CancelAll, Call::Status, Call::Request]);
    }

    #[test]
    fn test_reminder_copy_follows_packet_type() {
        let reminders = daily_reminders("7:00 AM", "11:00 PM");
        assert_eq!(reminders.len(), 5);
        assert_eq!(reminders[0].packet_type, PacketType::Concept);
        assert!(reminders[0].title.ends_with("Time to learn"));
        assert_eq!(reminders[4].packet_type, PacketType::Recall);
        assert!(reminders[4].title.ends_with("Before you sleep"));
    }

    #[test]
    fn test_next_occurrence() {
        let reminder = DailyReminder::from(compute_slots("7:00 AM", "11:00 PM")[0]);
        let morning = Local.with_ymd_and_hms(2026, 3, 10, 6, 0, 0).unwrap();
        let noon = Local.with_ymd_and_hms(2026, 3, 10, 12, 0, 0).unwrap();

        let today = next_occurrence(&reminder, morning).unwrap();
        assert_eq!(today.date_naive(), morning.date_naive());
        assert_eq!(today.time(), NaiveTime::from_hms_opt(8, 36, 0).unwrap());

        let tomorrow = next_occurrence(&reminder, noon).unwrap();
        assert_eq!(tomorrow.date_naive(), noon.date_naive().succ_opt().unwrap());

        // Exactly at fire time counts as passed
        assert!(next_occurrence(&reminder, today).unwrap() > today);
    }
}
