mod api_scan;
mod helpers;
mod scan;
