use actix_web::{http::header, post, web, HttpResponse};
use serde::Deserialize;

use crate::{
    domain::{keyword::KeywordList, scan_result::ScanResult},
    services::{to_csv, CSV_FILE_NAME},
};

use super::RouteError;

#[derive(Deserialize)]
struct ExportForm {
    hits: String,
}

#[post("/export")]
pub async fn export_csv(
    form: web::Form<ExportForm>,
    keywords: web::Data<KeywordList>,
) -> Result<HttpResponse, RouteError> {
    let result: ScanResult = serde_json::from_str(&form.hits)?;
    if let Err(e) = result.check_against(&keywords) {
        log::warn!("Rejected export: {}", e);
        return Err(e.into());
    }

    let csv = to_csv(&result)?;

    Ok(HttpResponse::Ok()
        .content_type("text/csv")
        .insert_header((
            header::CONTENT_DISPOSITION,
            format!("attachment; filename=\"{}\"", CSV_FILE_NAME),
        ))
        .body(csv))
}
