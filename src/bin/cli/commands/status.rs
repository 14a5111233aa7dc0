use anyhow::Result;

use crate::app::App;
use crate::render::terminal::{paint, Color};
use crate::OutputFormat;

pub fn run(app: &App, format: &OutputFormat, use_color: bool) -> Result<()> {
    let tracker = app.session.tracker();
    let summary = tracker.summary();
    let next_packet = tracker.next_packet();
    let concept = app.graph().lookup(&summary.current_concept_id);

    match format {
        OutputFormat::Json => {
            let output = serde_json::json!({
                "user": app.session.user(),
                "needsOnboarding": app.session.needs_onboarding(),
                "preferences": app.session.preferences(),
                "summary": summary,
                "nextPacket": next_packet.map(|p| p.id),
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Plain => {
            if app.session.needs_onboarding() {
                println!(
                    "{}",
                    paint(
                        "Not onboarded yet. Run `dsaflow-cli onboard --wake \"7:00 AM\" --sleep \"11:00 PM\" --level 1`.",
                        Color::YELLOW,
                        use_color
                    )
                );
                println!();
            }

            let name = concept.map_or(summary.current_concept_id.as_str(), |c| c.name);
            println!("{}", paint("TODAY'S CONCEPT", Color::DIM, use_color));
            println!("{}", paint(name, Color::BOLD, use_color));
            if let Some(concept) = concept {
                println!("{}", concept.description);
            }
            println!();

            if summary.current_packets_total == 0 {
                println!("No packets for this concept yet.");
            } else {
                println!(
                    "{} of {} packets completed",
                    summary.current_packets_completed, summary.current_packets_total
                );
                if let Some(packet) = next_packet {
                    println!(
                        "Next: {} {}",
                        packet.id,
                        paint(&format!("({}, ~{}s)", packet.title, packet.duration), Color::GRAY, use_color)
                    );
                }
            }
            println!();

            println!(
                "{} / {} concepts completed, {}% mastered",
                summary.completed_concepts, summary.total_concepts, summary.mastery_percent
            );
        }
    }

    Ok(())
}
