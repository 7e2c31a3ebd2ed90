use std::{net::TcpListener, sync::Arc};

use async_trait::async_trait;
use pharmascan::{
    domain::{keyword::KeywordList, page_url::PageUrl},
    services::{FetchError, PageFetcher, ProvisionError},
    startup::run,
};

pub const TEST_KEYWORDS: [&str; 6] = ["oncology", "biotech", "pharma", "drug", "drugs", "r&d"];

pub const PHARMA_PAGE: &str = r#"
<html>
  <head><title>pharma pharma pharma</title></head>
  <body>
    <h1>Our research in oncology and biotech is strong.</h1>
    <p>Oncology leads. We develop drugs and run drug trials, R&amp;D included.</p>
    <script>var drug = "pharma";</script>
  </body>
</html>"#;

/// Serves a fixed page for every url, or fails like a browser that never came up.
pub enum StubFetcher {
    Page(String),
    Broken,
}

#[async_trait]
impl PageFetcher for StubFetcher {
    async fn fetch_page_source(&self, _url: &PageUrl) -> Result<String, FetchError> {
        match self {
            StubFetcher::Page(html) => Ok(html.clone()),
            StubFetcher::Broken => Err(FetchError::Provision(ProvisionError::NotInstalled(
                "/nowhere".into(),
            ))),
        }
    }
}

pub struct TestApp {
    pub address: String,
    pub api_client: reqwest::Client,
}

impl TestApp {
    pub async fn post_scan_form(&self, url: &str) -> reqwest::Response {
        self.api_client
            .post(format!("{}/scan", self.address))
            .form(&[("url", url)])
            .send()
            .await
            .expect("Failed to execute request.")
    }

    pub async fn post_export_form(&self, hits: &str) -> reqwest::Response {
        self.api_client
            .post(format!("{}/export", self.address))
            .form(&[("hits", hits)])
            .send()
            .await
            .expect("Failed to execute request.")
    }

    pub async fn post_api_json(&self, path: &str, body: serde_json::Value) -> reqwest::Response {
        self.api_client
            .post(format!("{}/api{}", self.address, path))
            .json(&body)
            .send()
            .await
            .expect("Failed to execute request.")
    }
}

pub async fn spawn_app() -> TestApp {
    spawn_app_with(StubFetcher::Page(PHARMA_PAGE.to_string())).await
}

pub async fn spawn_app_with(fetcher: StubFetcher) -> TestApp {
    let listener = TcpListener::bind("127.0.0.1:0").expect("Failed to bind random port");
    let port = listener.local_addr().unwrap().port();
    let keywords = KeywordList::parse(TEST_KEYWORDS).expect("Invalid test keywords");

    let server = run(listener, keywords, Arc::new(fetcher)).expect("Failed to bind address");
    tokio::spawn(server);

    TestApp {
        address: format!("http://127.0.0.1:{}", port),
        api_client: reqwest::Client::new(),
    }
}
