use std::time::Instant;

use uuid::Uuid;

use crate::domain::{keyword::KeywordList, page_url::PageUrl, scan_result::ScanResult};

use super::{extract_body_text, scan, FetchError, PageFetcher};

/// Fetch, strip to body text, count keywords.
pub async fn scan_page(
    fetcher: &dyn PageFetcher,
    keywords: &KeywordList,
    url: &PageUrl,
) -> Result<ScanResult, FetchError> {
    let scan_id = Uuid::new_v4();
    let started = Instant::now();
    log::info!("[{}] Scraping {}", scan_id, url);

    let page_source = fetcher.fetch_page_source(url).await.inspect_err(|e| {
        log::error!("[{}] Failed to fetch {}: {}", scan_id, url, e);
    })?;

    let body_text = extract_body_text(&page_source);
    if body_text.is_empty() {
        log::warn!("[{}] No body text found on {}", scan_id, url);
    }

    let result = scan(&body_text, keywords);
    log::info!(
        "[{}] Found {} of {} keywords in {} chars of body text ({}ms)",
        scan_id,
        result.len(),
        keywords.len(),
        body_text.len(),
        started.elapsed().as_millis()
    );

    Ok(result)
}
