//! Wiring & DI. Entry point: bootstrap adapters, build the store, load the catalog, run UI.
//! No business logic here.

use dotenv::dotenv;
use std::sync::Arc;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};
use workshop_desk::adapters::catalog::source_for;
use workshop_desk::adapters::policy::MockCancelPolicy;
use workshop_desk::adapters::ui::progress::loading_spinner;
use workshop_desk::adapters::ui::tui::TuiInputPort;
use workshop_desk::ports::{CancelPolicy, InputPort};
use workshop_desk::shared::config::AppConfig;
use workshop_desk::usecases::{CatalogLoader, RegistrationStore};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let env_loaded = dotenv();
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with(tracing_subscriber::fmt::layer())
        .init();

    match &env_loaded {
        Ok(path) => info!(path = %path.display(), "loaded .env"),
        Err(_) => info!("no .env found"),
    }

    workshop_desk::adapters::ui::init_ui();

    let cfg = AppConfig::load().unwrap_or_else(|e| {
        warn!(error = %e, "config load failed, using defaults");
        AppConfig::default()
    });
    let window = cfg.registration_window()?;
    let zone = cfg.display_zone()?;
    let now_override = cfg.now_override()?;
    if let Some(now) = now_override {
        info!(%now, "clock pinned via WORKSHOP_NOW");
    }

    // --- Ports ---
    let non_cancellable = cfg.non_cancellable_or_default();
    info!(?non_cancellable, "mock cancel endpoint");
    let policy: Arc<dyn CancelPolicy> = Arc::new(MockCancelPolicy::new(non_cancellable));
    let source = source_for(cfg.catalog_source());
    let loader = CatalogLoader::new(source, zone.offset());

    // --- Store (owned here, lent to the UI) ---
    let mut store = RegistrationStore::new(window, zone, policy);

    let spinner = loading_spinner();
    let loaded = store.load_catalog(&loader).await;
    spinner.finish_and_clear();
    if let Err(e) = loaded {
        warn!(error = %e, "continuing with an empty catalog");
    }

    let input_port: Arc<dyn InputPort> = Arc::new(TuiInputPort::new(now_override));
    input_port
        .run(&mut store)
        .await
        .map_err(|e| anyhow::anyhow!("{}", e))?;

    Ok(())
}
