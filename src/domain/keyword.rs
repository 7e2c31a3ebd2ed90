use std::collections::HashSet;

use regex::{Regex, RegexBuilder};

#[derive(Debug, PartialEq, thiserror::Error)]
pub enum KeywordError {
    #[error("Keyword list contains a blank entry")]
    Blank,
    #[error("Keyword `{0}` is listed more than once")]
    Duplicate(String),
    #[error("Keyword `{phrase}` could not be compiled: {reason}")]
    Pattern { phrase: String, reason: String },
}

/// A phrase searched for as a whole word, ignoring case.
///
/// The word boundaries sit before the first and after the last character of the
/// phrase only, so inner spaces and `&` are matched literally.
#[derive(Debug, Clone)]
pub struct Keyword {
    phrase: String,
    matcher: Regex,
}

impl Keyword {
    pub fn parse(phrase: &str) -> Result<Self, KeywordError> {
        let phrase = phrase.trim();
        if phrase.is_empty() {
            return Err(KeywordError::Blank);
        }

        let matcher = RegexBuilder::new(&format!(r"\b{}\b", regex::escape(phrase)))
            .case_insensitive(true)
            .build()
            .map_err(|e| KeywordError::Pattern {
                phrase: phrase.to_string(),
                reason: e.to_string(),
            })?;

        Ok(Keyword {
            phrase: phrase.to_string(),
            matcher,
        })
    }

    pub fn phrase(&self) -> &str {
        &self.phrase
    }

    /// Non-overlapping whole-word occurrences in `text`.
    pub fn count_in(&self, text: &str) -> usize {
        self.matcher.find_iter(text).count()
    }
}

/// Ordered keywords with no duplicates. The order is the report order.
#[derive(Debug, Clone, Default)]
pub struct KeywordList {
    keywords: Vec<Keyword>,
}

impl KeywordList {
    pub fn parse<I, S>(phrases: I) -> Result<Self, KeywordError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut seen = HashSet::new();
        let mut keywords = vec![];

        for phrase in phrases {
            let keyword = Keyword::parse(phrase.as_ref())?;
            if !seen.insert(keyword.phrase().to_lowercase()) {
                return Err(KeywordError::Duplicate(keyword.phrase.clone()));
            }
            keywords.push(keyword);
        }

        Ok(KeywordList { keywords })
    }

    pub fn iter(&self) -> impl Iterator<Item = &Keyword> {
        self.keywords.iter()
    }

    pub fn len(&self) -> usize {
        self.keywords.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keywords.is_empty()
    }
}
