use thirtyfour::error::WebDriverError;

#[derive(Debug, thiserror::Error)]
pub enum ScrapeError {
    #[error("expected element missing: {0}")]
    Missing(String),
    #[error("page unavailable: {0}")]
    Unavailable(String),
    #[error("facts table has {found} columns, expected {expected}")]
    ColumnMismatch { expected: usize, found: usize },
    #[error("webdriver error: {0}")]
    WebDriver(#[from] WebDriverError),
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("invalid url: {0}")]
    Url(#[from] url::ParseError),
}

impl ScrapeError {
    pub fn missing(what: impl Into<String>) -> Self {
        ScrapeError::Missing(what.into())
    }

    pub fn is_structural(&self) -> bool {
        matches!(
            self,
            ScrapeError::Missing(_) | ScrapeError::ColumnMismatch { .. }
        )
    }
}
