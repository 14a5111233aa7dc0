use anyhow::Result;

use dsaflow_lib::config::AppConfig;
use dsaflow_lib::notifications::{slots_between, DailyReminder};

use crate::OutputFormat;

/// Preview reminder times for a wake/sleep pair without scheduling anything
pub fn run(config: &AppConfig, wake: &str, sleep: &str, format: &OutputFormat) -> Result<()> {
    let (wake, sleep) = config.notifications.resolve_times(wake, sleep);
    let reminders: Vec<DailyReminder> = slots_between(wake, sleep)
        .into_iter()
        .map(DailyReminder::from)
        .collect();

    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&reminders)?);
        }
        OutputFormat::Plain => {
            for reminder in &reminders {
                println!(
                    "{:02}:{:02}  {:<11} {}",
                    reminder.hour,
                    reminder.minute,
                    reminder.packet_type.label(),
                    reminder.title
                );
            }
        }
    }

    Ok(())
}
