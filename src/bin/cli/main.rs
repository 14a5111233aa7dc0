mod app;
mod commands;
mod render;

use std::io::IsTerminal;
use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "dsaflow-cli", about = "DSAFlow: daily DSA packets in the terminal", version)]
struct Cli {
    /// Config file (default: platform config dir)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Output format
    #[arg(long, global = true, default_value = "plain")]
    format: OutputFormat,

    /// Disable ANSI colors
    #[arg(long, global = true)]
    no_color: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Clone, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    Plain,
    Json,
}

#[derive(Subcommand)]
enum Command {
    /// Today's concept and overall progress (default)
    Status,

    /// Show the concept graph with unlock status
    Graph {
        /// Only this category: basics, algorithms or data-structures
        #[arg(long)]
        category: Option<String>,
    },

    /// List the packets of a concept
    Packets {
        /// Concept id or name (default: current concept)
        concept: Option<String>,
    },

    /// Show a packet's content
    Show {
        /// Packet id (unique prefix is enough)
        packet: String,
    },

    /// Mark a packet complete
    Complete {
        /// Packet id (unique prefix is enough)
        packet: String,
        /// Answer for a challenge packet: option letter or text
        #[arg(long)]
        answer: Option<String>,
    },

    /// Set wake/sleep times and level, and schedule daily reminders
    Onboard {
        /// Wake time, e.g. "7:00 AM"
        #[arg(long)]
        wake: String,
        /// Sleep time, e.g. "11:00 PM"
        #[arg(long)]
        sleep: String,
        /// DSA level: 1 = beginner, 2 = some basics, 3 = intermediate, 4 = advanced
        #[arg(long, value_parser = ["1", "2", "3", "4"])]
        level: String,
        #[arg(long)]
        name: Option<String>,
        /// What you are preparing for
        #[arg(long)]
        goal: Option<String>,
    },

    /// Preview reminder times for a wake/sleep pair
    Slots {
        wake: String,
        sleep: String,
    },

    /// Fire scheduled reminders while running
    Remind,

    /// Validate the built-in graph and packets
    Check,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let use_color = !cli.no_color && std::io::stdout().is_terminal();
    let config = cli.config.as_deref();

    match cli.command.unwrap_or(Command::Status) {
        Command::Status => {
            let app = app::App::new(config).await?;
            commands::status::run(&app, &cli.format, use_color)?;
        }
        Command::Graph { category } => {
            let app = app::App::new(config).await?;
            commands::graph::run(&app, category.as_deref(), &cli.format, use_color)?;
        }
        Command::Packets { concept } => {
            let app = app::App::new(config).await?;
            commands::packets::run(&app, concept.as_deref(), &cli.format, use_color)?;
        }
        Command::Show { packet } => {
            let app = app::App::new(config).await?;
            commands::show::run(&app, &packet, &cli.format, use_color)?;
        }
        Command::Complete { packet, answer } => {
            let mut app = app::App::new(config).await?;
            commands::complete::run(&mut app, &packet, answer.as_deref(), &cli.format, use_color)?;
            // Let the background progress sync land before exiting
            app.finish().await;
        }
        Command::Onboard {
            wake,
            sleep,
            level,
            name,
            goal,
        } => {
            let mut app = app::App::new(config).await?;
            let args = commands::onboard::OnboardArgs {
                wake: &wake,
                sleep: &sleep,
                level: &level,
                name: name.as_deref(),
                goal: goal.as_deref(),
            };
            commands::onboard::run(&mut app, args, &cli.format, use_color).await?;
        }
        Command::Slots { wake, sleep } => {
            let config = app::load_config(config)?;
            commands::slots::run(&config, &wake, &sleep, &cli.format)?;
        }
        Command::Remind => {
            let app = app::App::new(config).await?;
            commands::remind::run(&app, use_color).await?;
        }
        Command::Check => {
            let app = app::App::new(config).await?;
            commands::check::run(&app, &cli.format)?;
        }
    }

    Ok(())
}
