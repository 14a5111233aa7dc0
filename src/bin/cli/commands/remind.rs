use anyhow::{Context, Result};
use chrono::Local;

use dsaflow_lib::notifications::{next_occurrence, start_reminder_loop, DailyReminder};

use crate::app::App;
use crate::render::terminal::{paint, Color};

/// Run the reminder loop in the foreground until Ctrl-C
pub async fn run(app: &App, use_color: bool) -> Result<()> {
    let reminders = app
        .host
        .list_scheduled()
        .context("Failed to read scheduled reminders")?;

    if reminders.is_empty() {
        println!("No reminders scheduled. Run `dsaflow-cli onboard` first.");
        return Ok(());
    }

    let now = Local::now();
    println!("Watching {} daily reminders (Ctrl-C to stop)", reminders.len());
    if let Some(next) = reminders.iter().filter_map(|r| next_occurrence(r, now)).min() {
        println!("Next at {}", next.format("%a %H:%M"));
    }

    let reminder_loop = start_reminder_loop(app.host.clone(), move |reminder: &DailyReminder| {
        println!(
            "{} {}",
            paint(&Local::now().format("%H:%M").to_string(), Color::GRAY, use_color),
            paint(&reminder.title, Color::BOLD, use_color)
        );
        println!("      {}", reminder.body);
    });

    tokio::signal::ctrl_c()
        .await
        .context("Failed to listen for Ctrl-C")?;

    reminder_loop.shutdown();
    reminder_loop.join().await;
    Ok(())
}
