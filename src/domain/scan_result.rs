use serde::{Deserialize, Serialize};

use super::keyword::KeywordList;

#[derive(Debug, PartialEq, thiserror::Error)]
pub enum HitsError {
    #[error("Keyword `{0}` is not in the keyword list")]
    Unknown(String),
    #[error("Keyword `{0}` is repeated or out of keyword list order")]
    OutOfOrder(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeywordHit {
    pub keyword: String,
    pub count: usize,
}

/// Keywords found in a page, in keyword list order. Every count is positive.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<KeywordHit>", into = "Vec<KeywordHit>")]
pub struct ScanResult {
    hits: Vec<KeywordHit>,
}

impl ScanResult {
    /// Zero counts are dropped rather than recorded.
    pub(crate) fn record(&mut self, keyword: &str, count: usize) {
        if count > 0 {
            self.hits.push(KeywordHit {
                keyword: keyword.to_string(),
                count,
            });
        }
    }

    pub fn hits(&self) -> &[KeywordHit] {
        &self.hits
    }

    #[cfg(test)]
    pub fn get(&self, keyword: &str) -> Option<usize> {
        self.hits
            .iter()
            .find(|hit| hit.keyword == keyword)
            .map(|hit| hit.count)
    }

    pub fn len(&self) -> usize {
        self.hits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.hits.is_empty()
    }

    /// Checks that every hit names a configured keyword, once, in list order.
    pub fn check_against(&self, keywords: &KeywordList) -> Result<(), HitsError> {
        let mut remaining = keywords.iter();
        for hit in &self.hits {
            if !keywords.iter().any(|k| k.phrase() == hit.keyword) {
                return Err(HitsError::Unknown(hit.keyword.clone()));
            }
            if !remaining.any(|k| k.phrase() == hit.keyword) {
                return Err(HitsError::OutOfOrder(hit.keyword.clone()));
            }
        }
        Ok(())
    }
}

impl TryFrom<Vec<KeywordHit>> for ScanResult {
    type Error = String;

    fn try_from(hits: Vec<KeywordHit>) -> Result<Self, Self::Error> {
        if let Some(hit) = hits.iter().find(|hit| hit.count == 0) {
            return Err(format!("Keyword `{}` has a zero count", hit.keyword));
        }
        Ok(ScanResult { hits })
    }
}

impl From<ScanResult> for Vec<KeywordHit> {
    fn from(value: ScanResult) -> Self {
        value.hits
    }
}
