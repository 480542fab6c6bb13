mod config;
mod logging;

pub use config::{Config, LogFormat};
pub use logging::init_tracing;

use tracing::info;

use crate::clock::SystemClock;
use crate::coordinator::{ReportCoordinator, ReportState};
use crate::error::ClientError;
use crate::proxy_client::ProxyClient;
use crate::render::render_view;
use crate::store::{JsonFileStore, MemoryStore, ReportStore};

/// Render today's report once and print it.
///
/// Returns `false` when the page shows an error instead of a report.
pub async fn run(config: Config) -> Result<bool, ClientError> {
    let source = ProxyClient::new(&config.proxy_url)?;

    let store: Box<dyn ReportStore> = if config.no_cache {
        Box::new(MemoryStore::new())
    } else {
        info!(path = %config.cache_file.display(), "using report cache file");
        Box::new(JsonFileStore::new(&config.cache_file))
    };

    let mut coordinator = ReportCoordinator::new(store, source, SystemClock, config.language);

    let view = if config.refresh {
        coordinator.refresh().await
    } else {
        coordinator.render().await
    };

    print!("{}", render_view(&view));
    Ok(matches!(view.state, ReportState::Ready(_)))
}
