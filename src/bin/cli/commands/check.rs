use anyhow::{Context, Result};

use crate::app::App;
use crate::OutputFormat;

/// Validate the built-in graph and packet catalog
pub fn run(app: &App, format: &OutputFormat) -> Result<()> {
    let graph = app.graph();
    let catalog = app.catalog();

    graph.validate().context("Concept graph is invalid")?;
    catalog.validate(graph).context("Packet catalog is invalid")?;

    let with_content = graph.filter(|n| catalog.has_content(n.id));

    match format {
        OutputFormat::Json => {
            let output = serde_json::json!({
                "concepts": graph.len(),
                "packets": catalog.len(),
                "conceptsWithContent": with_content.iter().map(|n| n.id).collect::<Vec<_>>(),
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Plain => {
            println!("Graph OK: {} concepts, no cycles", graph.len());
            println!(
                "Catalog OK: {} packets across {} concepts",
                catalog.len(),
                with_content.len()
            );
        }
    }

    Ok(())
}
