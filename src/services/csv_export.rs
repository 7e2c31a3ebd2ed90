use csv::{Terminator, WriterBuilder};

use crate::domain::scan_result::ScanResult;

pub const CSV_FILE_NAME: &str = "keyword_hits.csv";

/// `Keyword,Count` table of the hits, in result order.
pub fn to_csv(result: &ScanResult) -> Result<Vec<u8>, csv::Error> {
    let mut wtr = WriterBuilder::new()
        .terminator(Terminator::Any(b'\n'))
        .from_writer(vec![]);

    wtr.write_record(["Keyword", "Count"])?;
    for hit in result.hits() {
        wtr.write_record([hit.keyword.as_str(), hit.count.to_string().as_str()])?;
    }

    wtr.into_inner()
        .map_err(|e| csv::Error::from(e.into_error()))
}
