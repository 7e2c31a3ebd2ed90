use std::{net::TcpListener, sync::Arc};

use anyhow::Context;
use env_logger::Env;
use pharmascan::{
    configuration::{get_configuration, DriverStrategy},
    services::{Droid, PageFetcher},
    startup::run,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let configuration = get_configuration().context("Failed to read configuration.")?;
    let keywords = configuration
        .scanner
        .keyword_list()
        .context("Invalid keyword list in configuration.")?;

    let address = format!(
        "{}:{}",
        configuration.application.host, configuration.application.port
    );
    let listener = TcpListener::bind(&address)
        .with_context(|| format!("Failed to bind to {}", address))?;

    match &configuration.browser.driver {
        DriverStrategy::LocalPath { path } => log::info!("Using chromedriver at {:?}", path),
        DriverStrategy::Download { url, .. } => log::info!("Using chromedriver from {}", url),
        DriverStrategy::Managed { .. } => log::info!("Using chromedriver from PATH or cache"),
        DriverStrategy::Remote { server_url } => log::info!("Using WebDriver at {}", server_url),
    }
    log::info!(
        "Scanning for {} keywords, serving on http://{}",
        keywords.len(),
        address
    );

    let droid: Arc<dyn PageFetcher> = Arc::new(Droid::new(configuration.browser));

    run(listener, keywords, droid)?.await?;
    Ok(())
}
