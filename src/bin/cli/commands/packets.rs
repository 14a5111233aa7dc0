use anyhow::Result;

use crate::app::App;
use crate::render::terminal::{paint, Color};
use crate::OutputFormat;

/// List the packets of a concept (default: the current one)
pub fn run(app: &App, concept: Option<&str>, format: &OutputFormat, use_color: bool) -> Result<()> {
    let tracker = app.session.tracker();
    let node = match concept {
        Some(query) => app.find_concept(query)?,
        None => app.find_concept(tracker.current_concept())?,
    };
    let packets = app.catalog().packets_for_concept(node.id);
    let state = tracker.state();

    match format {
        OutputFormat::Json => {
            let output: Vec<_> = packets
                .iter()
                .map(|p| {
                    serde_json::json!({
                        "id": p.id,
                        "type": p.packet_type(),
                        "title": p.title,
                        "duration": p.duration,
                        "completed": state.is_packet_completed(p.id),
                    })
                })
                .collect();
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Plain => {
            println!("{}", paint(node.name, Color::BOLD, use_color));

            if packets.is_empty() {
                println!("No packets for this concept yet.");
                return Ok(());
            }

            for packet in &packets {
                let done = state.is_packet_completed(packet.id);
                let marker = if done { "✓" } else { " " };
                let line = format!(
                    "[{}] {:<11} {:<28} ~{}s",
                    marker,
                    packet.packet_type().label(),
                    packet.id,
                    packet.duration
                );
                if done {
                    println!("{}", paint(&line, Color::GREEN, use_color));
                } else {
                    println!("{}", line);
                }
            }

            let total_secs = app.catalog().total_duration(node.id);
            println!(
                "{}",
                paint(
                    &format!("About {} min in total", (total_secs + 59) / 60),
                    Color::GRAY,
                    use_color
                )
            );
        }
    }

    Ok(())
}
