use anyhow::Result;

use crate::app::App;
use crate::render::terminal::{self, paint, Color};
use crate::OutputFormat;

pub fn run(app: &App, packet_query: &str, format: &OutputFormat, use_color: bool) -> Result<()> {
    let packet = app.find_packet(packet_query)?;

    if let OutputFormat::Json = format {
        println!("{}", serde_json::to_string_pretty(packet)?);
        return Ok(());
    }

    let badge = packet.packet_type().as_str().to_uppercase();
    println!("{}", paint(&badge, Color::CYAN, use_color));
    println!("{}", paint(packet.title, Color::BOLD, use_color));
    println!("{}", paint(&format!("~{} seconds", packet.duration), Color::GRAY, use_color));
    println!();
    println!("{}", terminal::render_packet(packet, use_color));

    if app.session.tracker().state().is_packet_completed(packet.id) {
        println!();
        println!("{}", paint("Completed ✓", Color::GREEN, use_color));
    }

    Ok(())
}
