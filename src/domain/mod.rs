pub mod keyword;
pub mod page_url;
pub mod scan_result;
