use std::{path::PathBuf, time::Duration};

use serde::Deserialize;
use serde_aux::field_attributes::deserialize_number_from_string;

use crate::domain::keyword::{KeywordError, KeywordList};

#[derive(Deserialize, Clone, Debug)]
pub struct Settings {
    pub application: ApplicationSettings,
    pub browser: BrowserSettings,
    pub scanner: ScannerSettings,
}

#[derive(Deserialize, Clone, Debug)]
pub struct ApplicationSettings {
    #[serde(deserialize_with = "deserialize_number_from_string")]
    pub port: u16,
    pub host: String,
}

#[derive(Deserialize, Clone, Debug)]
pub struct BrowserSettings {
    pub headless: bool,
    pub settle_delay_ms: u64,
    /// 0 picks a free port for every spawned driver.
    #[serde(deserialize_with = "deserialize_number_from_string")]
    pub driver_port: u16,
    pub ready_timeout_secs: u64,
    pub driver: DriverStrategy,
}

impl BrowserSettings {
    pub fn settle_delay(&self) -> Duration {
        Duration::from_millis(self.settle_delay_ms)
    }

    pub fn ready_timeout(&self) -> Duration {
        Duration::from_secs(self.ready_timeout_secs)
    }
}

/// Where the chromedriver comes from.
#[derive(Deserialize, Clone, Debug, PartialEq)]
#[serde(tag = "strategy", rename_all = "snake_case")]
pub enum DriverStrategy {
    /// A chromedriver binary at a fixed location on disk.
    LocalPath { path: PathBuf },
    /// Fetched once from `url` into `cache_dir` and reused afterwards.
    Download {
        url: String,
        cache_dir: Option<PathBuf>,
    },
    /// Whatever `chromedriver` is on PATH, else a previously downloaded one.
    Managed { cache_dir: Option<PathBuf> },
    /// An already running WebDriver server, e.g. a selenium container.
    Remote { server_url: String },
}

#[derive(Deserialize, Clone, Debug)]
pub struct ScannerSettings {
    pub keywords: Vec<String>,
}

impl ScannerSettings {
    pub fn keyword_list(&self) -> Result<KeywordList, KeywordError> {
        KeywordList::parse(&self.keywords)
    }
}

pub fn get_configuration() -> Result<Settings, config::ConfigError> {
    let base_path =
        std::env::current_dir().map_err(|e| config::ConfigError::Foreign(Box::new(e)))?;
    let configuration_directory = base_path.join("configuration");

    // Detect the running environment, default to `local`
    let environment: Environment = std::env::var("APP_ENVIRONMENT")
        .unwrap_or_else(|_| "local".into())
        .try_into()
        .map_err(config::ConfigError::Message)?;
    let environment_filename = format!("{}.yaml", environment.as_str());

    let settings = config::Config::builder()
        .add_source(config::File::from(configuration_directory.join("base.yaml")))
        .add_source(config::File::from(
            configuration_directory.join(environment_filename),
        ))
        // E.g. `APP_BROWSER__SETTLE_DELAY_MS=5000` would set `Settings.browser.settle_delay_ms`
        .add_source(
            config::Environment::with_prefix("APP")
                .prefix_separator("_")
                .separator("__"),
        )
        .build()?;

    settings.try_deserialize::<Settings>()
}

pub enum Environment {
    Local,
    Production,
}

impl Environment {
    pub fn as_str(&self) -> &'static str {
        match self {
            Environment::Local => "local",
            Environment::Production => "production",
        }
    }
}

impl TryFrom<String> for Environment {
    type Error = String;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        match s.to_lowercase().as_str() {
            "local" => Ok(Self::Local),
            "production" => Ok(Self::Production),
            other => Err(format!(
                "{} is not a supported environment. Use either `local` or `production`.",
                other
            )),
        }
    }
}
