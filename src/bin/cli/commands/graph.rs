use anyhow::{Context, Result};

use dsaflow_lib::graph::Category;

use crate::app::App;
use crate::render::terminal::{paint, stars, status_color, status_marker, Color};
use crate::OutputFormat;

pub fn run(app: &App, category: Option<&str>, format: &OutputFormat, use_color: bool) -> Result<()> {
    let category: Option<Category> = category
        .map(|c| c.parse::<Category>())
        .transpose()
        .context("Unknown category (expected basics, algorithms or data-structures)")?;

    let tracker = app.session.tracker();
    let graph = app.graph();
    let nodes = graph.filter(|n| category.map_or(true, |c| n.category == c));

    match format {
        OutputFormat::Json => {
            let output: Vec<_> = nodes
                .iter()
                .map(|node| {
                    serde_json::json!({
                        "id": node.id,
                        "name": node.name,
                        "difficulty": node.difficulty,
                        "category": node.category,
                        "color": node.category.color(),
                        "status": tracker.node_status(node.id),
                        "dependencies": node.dependencies,
                        "unlocks": graph.dependents(node.id).iter().map(|d| d.id).collect::<Vec<_>>(),
                    })
                })
                .collect();
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Plain => {
            let summary = tracker.summary();
            println!(
                "{} / {} concepts completed, {}% mastered",
                summary.completed_concepts, summary.total_concepts, summary.mastery_percent
            );
            println!();

            for node in &nodes {
                let status = tracker.node_status(node.id);
                let line = format!(
                    "{} {:<22} {} {}",
                    status_marker(status),
                    node.id,
                    stars(node.difficulty),
                    node.name
                );
                println!("{}", paint(&line, status_color(status), use_color));

                if !node.dependencies.is_empty() {
                    println!(
                        "{}",
                        paint(
                            &format!("      needs {}", node.dependencies.join(", ")),
                            Color::GRAY,
                            use_color
                        )
                    );
                }
            }
        }
    }

    Ok(())
}
