use anyhow::Context;
use tracing_subscriber::EnvFilter;

use snappro::api::ApiClient;
use snappro::config::Config;
use snappro::state::session::SessionStore;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = Config::load().context("failed to load configuration")?;
    let api = ApiClient::new(config.api_url.clone(), config.request_timeout())
        .context("failed to build HTTP client")?;

    // Without a writable data directory the session lasts for this run only
    let session_path = config.session_db.clone().or_else(SessionStore::default_path);
    let session = match session_path.map(|path| SessionStore::open(&path)) {
        Some(Ok(store)) => store,
        Some(Err(error)) => {
            tracing::warn!(%error, "⚠️ session store unavailable, login will not persist");
            SessionStore::in_memory()?
        }
        None => {
            tracing::warn!("⚠️ no data directory, login will not persist");
            SessionStore::in_memory()?
        }
    };

    snappro::app::run(config, api, session)?;
    Ok(())
}
