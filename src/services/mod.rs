pub mod body_text;
pub mod csv_export;
pub mod driver_provisioner;
pub mod droid;
pub mod keyword_scanner;
pub mod page_scan;

pub use body_text::*;
pub use csv_export::*;
pub use driver_provisioner::*;
pub use droid::*;
pub use keyword_scanner::*;
pub use page_scan::*;
