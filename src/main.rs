// SPDX-License-Identifier: GPL-3.0-only
use std::sync::Arc;
use tokio::io::BufReader;
use tokio::signal;
use tracing::{error, info};

use postsync::config::Config;
use postsync::logging::setup_logging;
use postsync::store::SyncStore;
use postsync::sync::{HttpRemoteCollection, RemoteCollection};
use postsync::ui::Console;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load configuration
    let config = Config::load()?;

    // Initialize logging
    setup_logging(&config.log_level)?;

    info!("Starting postsync v{}", env!("CARGO_PKG_VERSION"));
    info!(
        collection = %config.collection_url()?,
        timeout_secs = config.request_timeout_secs,
        "Remote collection configured"
    );

    let remote: Arc<dyn RemoteCollection> = Arc::new(HttpRemoteCollection::new(&config)?);
    let store = SyncStore::new(remote);

    let mut console = Console::new(
        store,
        BufReader::new(tokio::io::stdin()),
        tokio::io::stdout(),
    );

    tokio::select! {
        result = console.run() => {
            if let Err(e) = result {
                error!(error = %e, "Console I/O failed");
                return Err(e);
            }
        }
        signal = signal::ctrl_c() => {
            match signal {
                Ok(()) => info!("Received shutdown signal (Ctrl+C)"),
                Err(err) => error!(error = %err, "Unable to listen for shutdown signal"),
            }
        }
    }

    info!("Shutdown complete");
    Ok(())
}
