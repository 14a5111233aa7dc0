//! Reminder loop
//!
//! Fires the locally scheduled reminders while the process runs, using tokio
//! timers. Reminders only fire while the loop is alive.

use std::sync::Arc;
use std::time::Duration;

use chrono::{DateTime, Local};
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

use super::local::LocalNotificationHost;
use super::reminders::{next_occurrence, DailyReminder};

/// Check interval when nothing is scheduled
const IDLE_CHECK: Duration = Duration::from_secs(60);

#[derive(Debug)]
pub enum ReminderLoopMessage {
    /// Re-read the schedule from the host
    Reload,
    Shutdown,
}

/// Handle to a running reminder loop
pub struct ReminderLoop {
    sender: mpsc::Sender<ReminderLoopMessage>,
    handle: JoinHandle<()>,
}

impl ReminderLoop {
    pub fn reload(&self) {
        let _ = self.sender.try_send(ReminderLoopMessage::Reload);
    }

    pub fn shutdown(&self) {
        let _ = self.sender.try_send(ReminderLoopMessage::Shutdown);
    }

    /// Wait for the loop to exit
    pub async fn join(self) {
        if let Err(e) = self.handle.await {
            log::error!("Reminder loop task failed: {}", e);
        }
    }
}

/// Start the loop in a background task; `on_fire` runs for every reminder
/// as its time arrives.
pub fn start_reminder_loop<F>(host: Arc<LocalNotificationHost>, on_fire: F) -> ReminderLoop
where
    F: Fn(&DailyReminder) + Send + 'static,
{
    let (tx, rx) = mpsc::channel(8);
    let handle = tokio::spawn(reminder_loop(host, on_fire, rx));

    ReminderLoop { sender: tx, handle }
}

/// Earliest upcoming fire time after `from` and the reminders due then
fn next_fire(reminders: &[DailyReminder], from: DateTime<Local>) -> Option<(DateTime<Local>, Vec<usize>)> {
    let upcoming: Vec<(usize, DateTime<Local>)> = reminders
        .iter()
        .enumerate()
        .filter_map(|(i, r)| next_occurrence(r, from).map(|at| (i, at)))
        .collect();

    let earliest = upcoming.iter().map(|(_, at)| *at).min()?;
    let due = upcoming
        .iter()
        .filter(|(_, at)| *at == earliest)
        .map(|(i, _)| *i)
        .collect();
    Some((earliest, due))
}

fn load(host: &LocalNotificationHost) -> Vec<DailyReminder> {
    match host.list_scheduled() {
        Ok(reminders) => reminders,
        Err(e) => {
            log::error!("Failed to load scheduled reminders: {}", e);
            Vec::new()
        }
    }
}

async fn reminder_loop<F>(
    host: Arc<LocalNotificationHost>,
    on_fire: F,
    mut receiver: mpsc::Receiver<ReminderLoopMessage>,
) where
    F: Fn(&DailyReminder),
{
    let mut reminders = load(&host);
    log::info!("Reminder loop: loaded {} reminders", reminders.len());

    // Last instant already handled, so a timer waking early never fires twice
    let mut fired_until = Local::now();

    loop {
        let now = Local::now().max(fired_until);
        let next = next_fire(&reminders, now);

        let wait = match &next {
            Some((at, _)) => (*at - Local::now()).to_std().unwrap_or(Duration::ZERO),
            None => IDLE_CHECK,
        };

        tokio::select! {
            _ = tokio::time::sleep(wait) => {
                if let Some((at, due)) = next {
                    for i in due {
                        let reminder = &reminders[i];
                        log::info!("Reminder: {} ({:02}:{:02})", reminder.title, reminder.hour, reminder.minute);
                        on_fire(reminder);
                    }
                    fired_until = at;
                }
            }

            msg = receiver.recv() => {
                match msg {
                    Some(ReminderLoopMessage::Reload) => {
                        reminders = load(&host);
                        log::info!("Reminder loop: reloaded {} reminders", reminders.len());
                    }
                    Some(ReminderLoopMessage::Shutdown) | None => {
                        log::info!("Reminder loop: shutting down");
                        break;
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notifications::{daily_reminders, schedule_reminders};
    use chrono::TimeZone;
    use tempfile::TempDir;

    #[test]
    fn test_next_fire_picks_earliest() {
        let reminders = daily_reminders("7:00 AM", "11:00 PM");
        let at_noon = Local.with_ymd_and_hms(2026, 3, 10, 12, 0, 0).unwrap();

        let (at, due) = next_fire(&reminders, at_noon).unwrap();
        assert_eq!(due, vec![2]);
        assert_eq!(at, Local.with_ymd_and_hms(2026, 3, 10, 15, 0, 0).unwrap());
    }

    #[test]
    fn test_next_fire_groups_simultaneous() {
        // Empty window: all five at wake time
        let reminders = daily_reminders("9:00 AM", "9:00 AM");
        let early = Local.with_ymd_and_hms(2026, 3, 10, 8, 0, 0).unwrap();

        let (_, due) = next_fire(&reminders, early).unwrap();
        assert_eq!(due, vec![0, 1, 2, 3, 4]);
    }

    #[test]
    fn test_next_fire_rolls_to_tomorrow() {
        let reminders = daily_reminders("7:00 AM", "11:00 PM");
        let late = Local.with_ymd_and_hms(2026, 3, 10, 22, 0, 0).unwrap();

        let (at, due) = next_fire(&reminders, late).unwrap();
        assert_eq!(due, vec![0]);
        assert_eq!(at, Local.with_ymd_and_hms(2026, 3, 11, 8, 36, 0).unwrap());
    }

    #[test]
    fn test_next_fire_empty() {
        assert!(next_fire(&[], Local::now()).is_none());
    }

    #[tokio::test]
    async fn test_loop_reloads_and_shuts_down() {
        let temp = TempDir::new().unwrap();
        let host = Arc::new(LocalNotificationHost::new(temp.path().to_path_buf(), true));

        let reminder_loop = start_reminder_loop(host.clone(), |_| {});
        schedule_reminders(host.as_ref(), "7:00 AM", "11:00 PM").await.unwrap();
        reminder_loop.reload();
        reminder_loop.shutdown();

        tokio::time::timeout(Duration::from_secs(5), reminder_loop.join())
            .await
            .unwrap();
    }
}
