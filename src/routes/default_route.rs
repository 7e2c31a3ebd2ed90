use actix_web::{get, HttpResponse};
use askama::Template;

use super::{scan_route::ScanTemplate, RouteError};

#[get("/")]
pub async fn default() -> Result<HttpResponse, RouteError> {
    let page = ScanTemplate::empty().render()?;
    Ok(HttpResponse::Ok().content_type("text/html; charset=utf-8").body(page))
}

#[get("/health_check")]
pub async fn health_check() -> HttpResponse {
    HttpResponse::Ok().finish()
}
