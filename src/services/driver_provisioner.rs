//! Finding, fetching and starting the chromedriver a scan talks to.

use std::{
    net::TcpListener,
    path::{Path, PathBuf},
    process::Stdio,
    time::{Duration, Instant},
};

use tokio::process::{Child, Command};
use uuid::Uuid;

use crate::configuration::{BrowserSettings, DriverStrategy};

#[cfg(windows)]
pub const DRIVER_BINARY_NAME: &str = "chromedriver.exe";
#[cfg(not(windows))]
pub const DRIVER_BINARY_NAME: &str = "chromedriver";

const READY_POLL_INTERVAL: Duration = Duration::from_millis(100);
/// A single `/status` request; a driver that never answers still hits `ready_timeout`.
const STATUS_REQUEST_TIMEOUT: Duration = Duration::from_millis(500);
const DOWNLOAD_TIMEOUT: Duration = Duration::from_secs(120);

#[derive(Debug, thiserror::Error)]
pub enum ProvisionError {
    #[error("No chromedriver found at {0}")]
    MissingBinary(PathBuf),
    #[error("No chromedriver on PATH and none downloaded into {0}")]
    NotInstalled(PathBuf),
    #[error("Could not determine a cache directory for the chromedriver")]
    NoCacheDir,
    #[error("Failed to download chromedriver from {url}: {source}")]
    Download {
        url: String,
        #[source]
        source: reqwest::Error,
    },
    #[error("Chromedriver exited before it was ready ({0})")]
    Exited(String),
    #[error("Chromedriver at {url} was not ready after {waited:?}")]
    NotReady { url: String, waited: Duration },
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// A WebDriver endpoint. Owns the chromedriver process when one was spawned and
/// kills it on drop.
#[derive(Debug)]
pub struct DriverServer {
    url: String,
    process: Option<Child>,
}

impl DriverServer {
    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn is_spawned(&self) -> bool {
        self.process.is_some()
    }
}

pub async fn start_driver(
    settings: &BrowserSettings,
    client: &reqwest::Client,
) -> Result<DriverServer, ProvisionError> {
    let binary = match &settings.driver {
        DriverStrategy::Remote { server_url } => {
            log::info!("Using remote WebDriver server at {}", server_url);
            return Ok(DriverServer {
                url: server_url.trim_end_matches('/').to_string(),
                process: None,
            });
        }
        DriverStrategy::LocalPath { path } => match path.is_file() {
            true => path.clone(),
            false => return Err(ProvisionError::MissingBinary(path.clone())),
        },
        DriverStrategy::Download { url, cache_dir } => {
            let cache_dir = resolve_cache_dir(cache_dir.as_deref())?;
            download_driver(client, url, &cache_dir).await?
        }
        DriverStrategy::Managed { cache_dir } => {
            let cache_dir = resolve_cache_dir(cache_dir.as_deref())?;
            find_managed_driver(&cache_dir)?
        }
    };

    spawn_driver(
        &binary,
        settings.driver_port,
        settings.ready_timeout(),
        client,
    )
    .await
}

fn resolve_cache_dir(configured: Option<&Path>) -> Result<PathBuf, ProvisionError> {
    match configured {
        Some(dir) => Ok(dir.to_path_buf()),
        None => dirs::cache_dir()
            .map(|dir| dir.join("pharmascan"))
            .ok_or(ProvisionError::NoCacheDir),
    }
}

/// Downloads the driver into `cache_dir` unless a previous call already did.
pub async fn download_driver(
    client: &reqwest::Client,
    url: &str,
    cache_dir: &Path,
) -> Result<PathBuf, ProvisionError> {
    download_driver_within(client, url, cache_dir, DOWNLOAD_TIMEOUT).await
}

async fn download_driver_within(
    client: &reqwest::Client,
    url: &str,
    cache_dir: &Path,
    timeout: Duration,
) -> Result<PathBuf, ProvisionError> {
    let target = cache_dir.join(DRIVER_BINARY_NAME);
    if target.is_file() {
        log::info!("Reusing downloaded chromedriver at {:?}", target);
        return Ok(target);
    }

    log::info!("Downloading chromedriver from {}", url);
    let download_error = |source: reqwest::Error| ProvisionError::Download {
        url: url.to_string(),
        source,
    };
    let bytes = client
        .get(url)
        .timeout(timeout)
        .send()
        .await
        .and_then(|res| res.error_for_status())
        .map_err(download_error)?
        .bytes()
        .await
        .map_err(download_error)?;

    tokio::fs::create_dir_all(cache_dir).await?;

    // Concurrent downloads each write their own file; rename makes the last one win.
    let partial = cache_dir.join(format!(".{}.{}.part", DRIVER_BINARY_NAME, Uuid::new_v4()));
    tokio::fs::write(&partial, &bytes).await?;
    make_executable(&partial).await?;
    tokio::fs::rename(&partial, &target).await?;

    log::info!("Saved {} bytes of chromedriver to {:?}", bytes.len(), target);
    Ok(target)
}

#[cfg(unix)]
async fn make_executable(path: &Path) -> std::io::Result<()> {
    use std::os::unix::fs::PermissionsExt;

    tokio::fs::set_permissions(path, std::fs::Permissions::from_mode(0o755)).await
}

#[cfg(not(unix))]
async fn make_executable(_path: &Path) -> std::io::Result<()> {
    Ok(())
}

pub fn find_managed_driver(cache_dir: &Path) -> Result<PathBuf, ProvisionError> {
    if let Ok(path) = which::which(DRIVER_BINARY_NAME) {
        return Ok(path);
    }

    let cached = cache_dir.join(DRIVER_BINARY_NAME);
    match cached.is_file() {
        true => Ok(cached),
        false => Err(ProvisionError::NotInstalled(cache_dir.to_path_buf())),
    }
}

fn free_port() -> std::io::Result<u16> {
    let listener = TcpListener::bind("127.0.0.1:0")?;
    Ok(listener.local_addr()?.port())
}

async fn spawn_driver(
    binary: &Path,
    port: u16,
    ready_timeout: Duration,
    client: &reqwest::Client,
) -> Result<DriverServer, ProvisionError> {
    let port = match port {
        0 => free_port()?,
        port => port,
    };

    let child = Command::new(binary)
        .arg(format!("--port={}", port))
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .kill_on_drop(true)
        .spawn()?;
    log::info!("Spawned {:?} on port {}", binary, port);

    let mut server = DriverServer {
        url: format!("http://localhost:{}", port),
        process: Some(child),
    };
    wait_until_ready(&mut server, ready_timeout, client).await?;

    Ok(server)
}

async fn wait_until_ready(
    server: &mut DriverServer,
    ready_timeout: Duration,
    client: &reqwest::Client,
) -> Result<(), ProvisionError> {
    let started = Instant::now();
    let status_url = format!("{}/status", server.url);

    loop {
        if let Some(child) = server.process.as_mut() {
            if let Some(status) = child.try_wait()? {
                return Err(ProvisionError::Exited(status.to_string()));
            }
        }

        match client
            .get(&status_url)
            .timeout(STATUS_REQUEST_TIMEOUT)
            .send()
            .await
        {
            Ok(res) if res.status().is_success() => {
                log::info!(
                    "Chromedriver ready at {} after {}ms",
                    server.url,
                    started.elapsed().as_millis()
                );
                return Ok(());
            }
            _ => {}
        }

        if started.elapsed() >= ready_timeout {
            return Err(ProvisionError::NotReady {
                url: server.url.clone(),
                waited: started.elapsed(),
            });
        }
        tokio::time::sleep(READY_POLL_INTERVAL).await;
    }
}
