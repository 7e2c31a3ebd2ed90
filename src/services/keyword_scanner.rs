use crate::domain::{keyword::KeywordList, scan_result::ScanResult};

/// Counts every keyword in `text`, keeping only keywords that occur.
///
/// Hits come back in keyword list order, not in the order they appear in the text.
pub fn scan(text: &str, keywords: &KeywordList) -> ScanResult {
    let mut result = ScanResult::default();
    if text.is_empty() {
        return result;
    }

    for keyword in keywords.iter() {
        result.record(keyword.phrase(), keyword.count_in(text));
    }

    result
}
