use actix_web::{http::StatusCode, HttpResponse, ResponseError};

use crate::{
    domain::{page_url::PageUrlError, scan_result::HitsError},
    services::FetchError,
};

#[derive(Debug, thiserror::Error)]
pub enum RouteError {
    #[error(transparent)]
    InvalidUrl(#[from] PageUrlError),
    #[error(transparent)]
    Fetch(#[from] FetchError),
    #[error("Malformed keyword hits: {0}")]
    BadHits(#[from] serde_json::Error),
    #[error("Keyword hits do not match this scanner: {0}")]
    ForeignHits(#[from] HitsError),
    #[error("Failed to encode keyword hits: {0}")]
    EncodeHits(#[source] serde_json::Error),
    #[error("Failed to write CSV: {0}")]
    Csv(#[from] csv::Error),
    #[error("Failed to render page: {0}")]
    Template(#[from] askama::Error),
}

impl ResponseError for RouteError {
    fn status_code(&self) -> StatusCode {
        match self {
            RouteError::InvalidUrl(_) | RouteError::BadHits(_) | RouteError::ForeignHits(_) => {
                StatusCode::BAD_REQUEST
            }
            RouteError::Fetch(_) => StatusCode::BAD_GATEWAY,
            RouteError::EncodeHits(_) | RouteError::Csv(_) | RouteError::Template(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code())
            .content_type("text/plain; charset=utf-8")
            .body(self.to_string())
    }
}
