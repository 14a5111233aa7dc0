use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{bail, Context, Result};

use dsaflow_lib::config::{default_config_path, AppConfig};
use dsaflow_lib::graph::{ConceptGraph, ConceptNode};
use dsaflow_lib::notifications::LocalNotificationHost;
use dsaflow_lib::packets::{Packet, PacketCatalog};
use dsaflow_lib::progress::ProgressCache;
use dsaflow_lib::remote;
use dsaflow_lib::session::Session;

/// Read the config file, or the platform default location
pub fn load_config(config_path: Option<&Path>) -> Result<AppConfig> {
    let config_path = config_path
        .map(PathBuf::from)
        .unwrap_or_else(default_config_path);
    AppConfig::load(&config_path)
        .with_context(|| format!("Failed to load config from {}", config_path.display()))
}

/// Shared application state for CLI commands
pub struct App {
    pub config: AppConfig,
    pub session: Session,
    pub host: Arc<LocalNotificationHost>,
    cache: ProgressCache,
}

impl App {
    /// Load config, connect the sync backend and restore progress
    pub async fn new(config_path: Option<&Path>) -> Result<Self> {
        let config = load_config(config_path)?;

        let sync = remote::connect(&config.sync, &config.data_dir)
            .context("Failed to set up sync backend")?;

        let mut session = Session::new(sync);
        if let Err(e) = session.initialize().await {
            log::warn!("Continuing without a user: {}", e);
        }

        let cache = ProgressCache::new(config.data_dir.clone());
        match cache.load(session.user()) {
            Ok(Some(state)) => session.tracker_mut().merge(&state),
            Ok(None) => {}
            Err(e) => log::warn!("Ignoring unreadable progress cache: {}", e),
        }

        let host = Arc::new(LocalNotificationHost::new(
            config.data_dir.clone(),
            config.notifications.enabled,
        ));

        Ok(Self {
            config,
            session,
            host,
            cache,
        })
    }

    pub fn graph(&self) -> &'static ConceptGraph {
        self.session.tracker().graph()
    }

    pub fn catalog(&self) -> &'static PacketCatalog {
        self.session.tracker().catalog()
    }

    /// Persist progress locally for the next run
    pub fn save_progress(&self) -> Result<()> {
        self.cache
            .save(self.session.user(), self.session.tracker().state())
            .context("Failed to save progress cache")
    }

    /// Find a concept by id or name (case-insensitive prefix match)
    pub fn find_concept(&self, query: &str) -> Result<&'static ConceptNode> {
        let graph = self.graph();
        if let Some(node) = graph.lookup(query) {
            return Ok(node);
        }

        let query_lower = query.to_lowercase();
        let matches = graph.filter(|n| {
            n.id.starts_with(&query_lower) || n.name.to_lowercase().starts_with(&query_lower)
        });

        match matches.len() {
            0 => bail!("No concept matching '{}'. Run `dsaflow-cli graph` to list concepts.", query),
            1 => Ok(matches[0]),
            _ => bail!(
                "Ambiguous concept '{}'. Matches:\n{}",
                query,
                matches
                    .iter()
                    .map(|n| format!("  - {} ({})", n.id, n.name))
                    .collect::<Vec<_>>()
                    .join("\n")
            ),
        }
    }

    /// Find a packet by id (exact, then unique prefix)
    pub fn find_packet(&self, query: &str) -> Result<&'static Packet> {
        let catalog = self.catalog();
        if let Some(packet) = catalog.packet_by_id(query) {
            return Ok(packet);
        }

        let query_lower = query.to_lowercase();
        let matches: Vec<&'static Packet> = catalog
            .packets()
            .iter()
            .filter(|p| p.id.starts_with(&query_lower))
            .collect();

        match matches.len() {
            0 => bail!("Packet '{}' not found", query),
            1 => Ok(matches[0]),
            _ => bail!(
                "Ambiguous packet '{}'. Matches:\n{}",
                query,
                matches
                    .iter()
                    .map(|p| format!("  - {}", p.id))
                    .collect::<Vec<_>>()
                    .join("\n")
            ),
        }
    }

    /// Wait for background sync writes before exiting
    pub async fn finish(mut self) {
        self.session.shutdown().await;
    }
}
