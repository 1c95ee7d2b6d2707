use chrono::{DateTime, Local};
use serde::{Serialize, Serializer};

use crate::error::ScrapeError;

/// `NotFound`: the page loaded without the expected markup. `Failed`: the page never loaded.
#[derive(Debug, Clone, PartialEq)]
pub enum Extracted<T> {
    Found(T),
    NotFound(String),
    Failed(String),
}

#[cfg(test)]
impl<T> Extracted<T> {
    pub fn found(&self) -> Option<&T> {
        match self {
            Extracted::Found(value) => Some(value),
            _ => None,
        }
    }

    pub fn is_found(&self) -> bool {
        matches!(self, Extracted::Found(_))
    }

    pub fn into_option(self) -> Option<T> {
        match self {
            Extracted::Found(value) => Some(value),
            _ => None,
        }
    }
}

impl<T> Extracted<T> {
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Extracted<U> {
        match self {
            Extracted::Found(value) => Extracted::Found(f(value)),
            Extracted::NotFound(reason) => Extracted::NotFound(reason),
            Extracted::Failed(reason) => Extracted::Failed(reason),
        }
    }

    pub fn as_ref(&self) -> Extracted<&T> {
        match self {
            Extracted::Found(value) => Extracted::Found(value),
            Extracted::NotFound(reason) => Extracted::NotFound(reason.clone()),
            Extracted::Failed(reason) => Extracted::Failed(reason.clone()),
        }
    }
}

impl<T> From<Result<T, ScrapeError>> for Extracted<T> {
    fn from(result: Result<T, ScrapeError>) -> Self {
        match result {
            Ok(value) => Extracted::Found(value),
            Err(e) if e.is_structural() => Extracted::NotFound(e.to_string()),
            Err(e) => Extracted::Failed(e.to_string()),
        }
    }
}

// Downstream templates only know "value or null".
impl<T: Serialize> Serialize for Extracted<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Extracted::Found(value) => value.serialize(serializer),
            _ => serializer.serialize_none(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewsItem {
    pub title: String,
    pub teaser: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Hemisphere {
    pub title: String,
    pub img_url: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct ScrapeResult {
    pub news_title: Extracted<String>,
    pub news_paragraph: Extracted<String>,
    pub featured_image: Extracted<String>,
    pub facts: Extracted<String>,
    pub last_modified: DateTime<Local>,
    pub hemispheres: Extracted<Vec<Hemisphere>>,
}

impl ScrapeResult {
    pub fn assemble(
        news: Extracted<NewsItem>,
        featured_image: Extracted<String>,
        facts: Extracted<String>,
        hemispheres: Extracted<Vec<Hemisphere>>,
    ) -> Self {
        ScrapeResult {
            news_title: news.as_ref().map(|n| n.title.clone()),
            news_paragraph: news.map(|n| n.teaser),
            featured_image,
            facts,
            last_modified: Local::now(),
            hemispheres,
        }
    }
}
