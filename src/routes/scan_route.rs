use actix_web::{http::StatusCode, post, web, HttpResponse};
use askama::Template;
use serde::Deserialize;

use crate::{
    domain::{
        keyword::KeywordList,
        page_url::PageUrl,
        scan_result::{KeywordHit, ScanResult},
    },
    services::{scan_page, PageFetcher},
};

use super::RouteError;

#[derive(Template)]
#[template(path = "scan.html")]
pub struct ScanTemplate {
    url: String,
    warning: Option<String>,
    report: Option<ReportView>,
}

struct ReportView {
    hits: Vec<KeywordHit>,
    /// Posted back to `/export` to build the CSV.
    hits_json: String,
}

impl ScanTemplate {
    pub fn empty() -> Self {
        ScanTemplate {
            url: String::new(),
            warning: None,
            report: None,
        }
    }

    fn warning(url: &str, warning: String) -> Self {
        ScanTemplate {
            url: url.to_string(),
            warning: Some(warning),
            report: None,
        }
    }

    fn report(url: &PageUrl, result: &ScanResult) -> Result<Self, RouteError> {
        Ok(ScanTemplate {
            url: url.to_string(),
            warning: None,
            report: Some(ReportView {
                hits: result.hits().to_vec(),
                hits_json: serde_json::to_string(result).map_err(RouteError::EncodeHits)?,
            }),
        })
    }
}

#[derive(Deserialize)]
struct ScanForm {
    url: String,
}

#[post("/scan")]
pub async fn scan_website(
    form: web::Form<ScanForm>,
    keywords: web::Data<KeywordList>,
    fetcher: web::Data<dyn PageFetcher>,
) -> Result<HttpResponse, RouteError> {
    let url = match PageUrl::parse(&form.url) {
        Ok(url) => url,
        Err(e) => {
            log::warn!("Rejected url {:?}", form.url);
            return render(
                StatusCode::BAD_REQUEST,
                ScanTemplate::warning(&form.url, e.to_string()),
            );
        }
    };

    match scan_page(fetcher.get_ref(), &keywords, &url).await {
        Ok(result) => render(StatusCode::OK, ScanTemplate::report(&url, &result)?),
        Err(e) => render(
            StatusCode::BAD_GATEWAY,
            ScanTemplate::warning(url.as_str(), e.to_string()),
        ),
    }
}

fn render(status: StatusCode, page: ScanTemplate) -> Result<HttpResponse, RouteError> {
    Ok(HttpResponse::build(status)
        .content_type("text/html; charset=utf-8")
        .body(page.render()?))
}
