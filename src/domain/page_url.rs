use std::fmt;

use url::Url;

#[derive(Debug, PartialEq, thiserror::Error)]
#[error("Please enter a valid URL starting with 'http://' or 'https://'")]
pub struct PageUrlError;

/// An absolute http(s) URL to scan.
#[derive(Debug, Clone, PartialEq)]
pub struct PageUrl(Url);

impl PageUrl {
    pub fn parse(s: &str) -> Result<Self, PageUrlError> {
        let url = Url::parse(s.trim()).map_err(|_| PageUrlError)?;
        match url.scheme() {
            "http" | "https" if url.host_str().is_some() => Ok(PageUrl(url)),
            _ => Err(PageUrlError),
        }
    }

    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for PageUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
