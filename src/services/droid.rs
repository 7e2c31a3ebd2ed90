use async_trait::async_trait;
use thirtyfour::{
    error::WebDriverError, ChromeCapabilities, ChromiumLikeCapabilities, DesiredCapabilities,
    WebDriver,
};

use crate::{configuration::BrowserSettings, domain::page_url::PageUrl};

use super::{start_driver, ProvisionError};

#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error("Could not start the browser driver: {0}")]
    Provision(#[from] ProvisionError),
    #[error("Browser failed: {0}")]
    WebDriver(#[from] WebDriverError),
}

/// Turns a URL into the HTML of the rendered page.
#[async_trait]
pub trait PageFetcher: Send + Sync {
    async fn fetch_page_source(&self, url: &PageUrl) -> Result<String, FetchError>;
}

/// Drives a Chrome session per fetch.
pub struct Droid {
    settings: BrowserSettings,
    client: reqwest::Client,
}

impl Droid {
    pub fn new(settings: BrowserSettings) -> Self {
        Droid {
            settings,
            client: reqwest::Client::new(),
        }
    }

    fn capabilities(&self) -> Result<ChromeCapabilities, WebDriverError> {
        let mut caps = DesiredCapabilities::chrome();
        if self.settings.headless {
            caps.set_headless()?;
        }
        caps.set_no_sandbox()?;
        caps.set_disable_gpu()?;
        caps.set_disable_dev_shm_usage()?;

        Ok(caps)
    }

    async fn load(&self, driver: &WebDriver, url: &PageUrl) -> Result<String, WebDriverError> {
        driver.goto(url.as_str()).await?;
        // Let the page load
        tokio::time::sleep(self.settings.settle_delay()).await;
        driver.source().await
    }
}

#[async_trait]
impl PageFetcher for Droid {
    async fn fetch_page_source(&self, url: &PageUrl) -> Result<String, FetchError> {
        let server = start_driver(&self.settings, &self.client).await?;
        log::debug!(
            "Opening {} through {} (spawned driver: {})",
            url,
            server.url(),
            server.is_spawned()
        );
        let driver = WebDriver::new(server.url(), self.capabilities()?).await?;

        let page_source = self.load(&driver, url).await;

        if let Err(e) = driver.quit().await {
            log::error!("Failed to quit browser session for {}: {:?}", url, e);
        }

        Ok(page_source?)
    }
}
