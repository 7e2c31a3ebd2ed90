use actix_web::{post, web, HttpResponse};
use serde::{Deserialize, Serialize};

use crate::{
    domain::{keyword::KeywordList, page_url::PageUrl, scan_result::ScanResult},
    services::{scan, scan_page, PageFetcher},
};

use super::RouteError;

#[derive(Deserialize)]
struct ScanUrlBody {
    url: String,
}

#[derive(Serialize)]
struct ScanUrlResponse {
    url: String,
    hits: ScanResult,
}

#[post("/scan")]
pub async fn scan_url(
    body: web::Json<ScanUrlBody>,
    keywords: web::Data<KeywordList>,
    fetcher: web::Data<dyn PageFetcher>,
) -> Result<HttpResponse, RouteError> {
    let url = PageUrl::parse(&body.url)?;
    let hits = scan_page(fetcher.get_ref(), &keywords, &url).await?;

    Ok(HttpResponse::Ok().json(ScanUrlResponse {
        url: url.to_string(),
        hits,
    }))
}

#[derive(Deserialize)]
struct ScanTextBody {
    text: String,
}

#[derive(Serialize)]
struct ScanTextResponse {
    hits: ScanResult,
}

/// Scan already extracted text, no browser involved.
#[post("/scan/text")]
pub async fn scan_text(
    body: web::Json<ScanTextBody>,
    keywords: web::Data<KeywordList>,
) -> HttpResponse {
    let hits = scan(&body.text, &keywords);
    HttpResponse::Ok().json(ScanTextResponse { hits })
}
