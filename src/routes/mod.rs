pub mod api_route;
pub mod default_route;
pub mod export_route;
pub mod route_error;
pub mod scan_route;

pub use route_error::RouteError;
