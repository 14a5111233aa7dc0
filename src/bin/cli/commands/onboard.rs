use anyhow::{Context, Result};

use dsaflow_lib::notifications::{slots_between, ClockTime};
use dsaflow_lib::remote::UserPreferences;

use crate::app::App;
use crate::render::terminal::{paint, Color};
use crate::OutputFormat;

pub struct OnboardArgs<'a> {
    pub wake: &'a str,
    pub sleep: &'a str,
    pub level: &'a str,
    pub name: Option<&'a str>,
    pub goal: Option<&'a str>,
}

pub async fn run(app: &mut App, args: OnboardArgs<'_>, format: &OutputFormat, use_color: bool) -> Result<()> {
    let (wake, sleep) = app
        .config
        .notifications
        .resolve_times(args.wake, args.sleep);

    for (label, value, resolved) in [("wake", args.wake, wake), ("sleep", args.sleep, sleep)] {
        if let Err(e) = value.parse::<ClockTime>() {
            eprintln!(
                "{}",
                paint(
                    &format!("Warning: {} time {:?} not understood ({}), using {}", label, value, e, resolved),
                    Color::YELLOW,
                    use_color
                )
            );
        }
    }

    let mut prefs = UserPreferences::new(wake.to_string(), sleep.to_string(), args.level);
    prefs.name = args.name.map(String::from);
    prefs.goal = args.goal.map(String::from);

    let scheduled = app
        .session
        .complete_onboarding(prefs, app.host.as_ref())
        .await
        .context("Failed to schedule reminders")?;

    let slots = slots_between(wake, sleep);

    match format {
        OutputFormat::Json => {
            let output = serde_json::json!({
                "preferences": app.session.preferences(),
                "remindersScheduled": scheduled,
                "slots": slots,
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Plain => {
            let greeting = match args.name {
                Some(name) => format!("Perfect {}! Your DSA journey starts now.", name),
                None => "Perfect! Your DSA journey starts now.".to_string(),
            };
            println!("{}", paint(&greeting, Color::BOLD, use_color));
            println!();

            if scheduled {
                println!("Daily packets at:");
                for slot in &slots {
                    println!("  {:>8}  {}", slot.time.to_string(), slot.packet_type.label());
                }
                println!();
                println!("Run `dsaflow-cli remind` to get reminders while it runs.");
            } else {
                println!(
                    "{}",
                    paint(
                        "Notifications are disabled, no reminders scheduled.",
                        Color::YELLOW,
                        use_color
                    )
                );
            }
        }
    }

    Ok(())
}
