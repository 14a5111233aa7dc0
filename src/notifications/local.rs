use std::fs;
use std::path::PathBuf;

use async_trait::async_trait;

use super::reminders::{DailyReminder, NotificationHost, PermissionStatus, Result};

const REMINDERS_FILE: &str = "reminders.json";

/// Notification host for the terminal: keeps the schedule in a JSON file that
/// the reminder loop reads, and takes its permission answer from configuration.
pub struct LocalNotificationHost {
    path: PathBuf,
    permission_granted: bool,
}

impl LocalNotificationHost {
    pub fn new(data_dir: PathBuf, permission_granted: bool) -> Self {
        Self {
            path: data_dir.join(REMINDERS_FILE),
            permission_granted,
        }
    }

    pub fn list_scheduled(&self) -> Result<Vec<DailyReminder>> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }
        let content = fs::read_to_string(&self.path)?;
        Ok(serde_json::from_str(&content)?)
    }

    fn write(&self, reminders: &[DailyReminder]) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&self.path, serde_json::to_string_pretty(reminders)?)?;
        Ok(())
    }

    fn status(&self) -> PermissionStatus {
        if self.permission_granted {
            PermissionStatus::Granted
        } else {
            PermissionStatus::Denied
        }
    }
}

#[async_trait]
impl NotificationHost for LocalNotificationHost {
    async fn permission_status(&self) -> Result<PermissionStatus> {
        Ok(self.status())
    }

    async fn request_permission(&self) -> Result<PermissionStatus> {
        Ok(self.status())
    }

    async fn cancel_all(&self) -> Result<()> {
        if self.path.exists() {
            fs::remove_file(&self.path)?;
        }
        Ok(())
    }

    async fn schedule_daily(&self, reminder: &DailyReminder) -> Result<()> {
        let mut reminders = self.list_scheduled()?;
        reminders.push(reminder.clone());
        self.write(&reminders)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notifications::schedule_reminders;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_schedule_replaces_previous() {
        let temp = TempDir::new().unwrap();
        let host = LocalNotificationHost::new(temp.path().to_path_buf(), true);

        assert!(schedule_reminders(&host, "6:00 AM", "10:00 PM").await.unwrap());
        assert!(schedule_reminders(&host, "7:00 AM", "11:00 PM").await.unwrap());

        let scheduled = host.list_scheduled().unwrap();
        assert_eq!(scheduled.len(), 5);
        assert_eq!((scheduled[0].hour, scheduled[0].minute), (8, 36));
    }

    #[tokio::test]
    async fn test_disabled_clears_schedule() {
        let temp = TempDir::new().unwrap();

        let enabled = LocalNotificationHost::new(temp.path().to_path_buf(), true);
        schedule_reminders(&enabled, "7:00 AM", "11:00 PM").await.unwrap();

        let disabled = LocalNotificationHost::new(temp.path().to_path_buf(), false);
        assert!(!schedule_reminders(&disabled, "7:00 AM", "11:00 PM").await.unwrap());
        assert!(disabled.list_scheduled().unwrap().is_empty());
    }
}
