use std::{
    collections::HashMap,
    sync::{
        atomic::{AtomicUsize, Ordering},
        Arc, Mutex,
    },
    time::Duration,
};

use scraper::{Html, Selector};

use crate::error::ScrapeError;

use super::{Browser, HtmlSource, Launch};

#[derive(Default)]
pub struct FakeBrowser {
    pages: HashMap<String, String>,
    click_pages: HashMap<(String, String, usize), String>,
    current: Mutex<Option<(String, String)>>,
    visited: Mutex<Vec<String>>,
    clicks: Mutex<Vec<(String, usize)>>,
    released: Arc<AtomicUsize>,
}

impl FakeBrowser {
    pub fn new() -> Self {
        FakeBrowser::default()
    }

    pub fn page(mut self, url: &str, html: &str) -> Self {
        self.pages.insert(url.to_string(), html.to_string());
        self
    }

    pub fn on_click(mut self, url: &str, tag: &str, index: usize, html: &str) -> Self {
        self.click_pages
            .insert((url.to_string(), tag.to_string(), index), html.to_string());
        self
    }

    pub fn visited(&self) -> Vec<String> {
        self.visited.lock().unwrap().clone()
    }

    pub fn clicks(&self) -> Vec<(String, usize)> {
        self.clicks.lock().unwrap().clone()
    }

    pub fn released(&self) -> Arc<AtomicUsize> {
        self.released.clone()
    }

    fn current(&self) -> Result<(String, String), ScrapeError> {
        self.current
            .lock()
            .unwrap()
            .clone()
            .ok_or_else(|| ScrapeError::Unavailable("no page loaded".to_string()))
    }
}

impl Browser for FakeBrowser {
    async fn visit(&self, url: &str) -> Result<(), ScrapeError> {
        let html = self
            .pages
            .get(url)
            .ok_or_else(|| ScrapeError::Unavailable(url.to_string()))?;
        *self.current.lock().unwrap() = Some((url.to_string(), html.clone()));
        self.visited.lock().unwrap().push(url.to_string());
        Ok(())
    }

    async fn wait_for_css_selector_present(
        &self,
        selector: &str,
        _timeout: Duration,
    ) -> Result<bool, ScrapeError> {
        let (_, html) = self.current()?;
        let selector = Selector::parse(selector).unwrap();
        Ok(Html::parse_document(&html).select(&selector).next().is_some())
    }

    async fn current_html(&self) -> Result<String, ScrapeError> {
        Ok(self.current()?.1)
    }

    async fn click_nth_by_tag(&self, tag: &str, index: usize) -> Result<(), ScrapeError> {
        let (url, html) = self.current()?;
        let selector = Selector::parse(tag).unwrap();
        let count = Html::parse_document(&html).select(&selector).count();
        if index >= count {
            return Err(ScrapeError::missing(format!("{} #{}", tag, index)));
        }

        self.clicks.lock().unwrap().push((tag.to_string(), index));
        if let Some(next) = self
            .click_pages
            .get(&(url.clone(), tag.to_string(), index))
        {
            *self.current.lock().unwrap() = Some((url, next.clone()));
        }
        Ok(())
    }

    async fn quit(self) -> Result<(), ScrapeError> {
        self.released.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}

pub struct FakeLauncher {
    browser: Mutex<Option<FakeBrowser>>,
    pub launches: AtomicUsize,
}

impl FakeLauncher {
    pub fn new(browser: FakeBrowser) -> Self {
        FakeLauncher {
            browser: Mutex::new(Some(browser)),
            launches: AtomicUsize::new(0),
        }
    }

    pub fn failing() -> Self {
        FakeLauncher {
            browser: Mutex::new(None),
            launches: AtomicUsize::new(0),
        }
    }
}

impl Launch for FakeLauncher {
    type Session = FakeBrowser;

    async fn launch(&self) -> Result<FakeBrowser, ScrapeError> {
        self.launches.fetch_add(1, Ordering::SeqCst);
        self.browser
            .lock()
            .unwrap()
            .take()
            .ok_or_else(|| ScrapeError::Unavailable("webdriver refused session".to_string()))
    }
}

#[derive(Default)]
pub struct FakeHtmlSource {
    pages: HashMap<String, String>,
}

impl FakeHtmlSource {
    pub fn new() -> Self {
        FakeHtmlSource::default()
    }

    pub fn page(mut self, url: &str, html: &str) -> Self {
        self.pages.insert(url.to_string(), html.to_string());
        self
    }
}

impl HtmlSource for FakeHtmlSource {
    async fn fetch_html(&self, url: &str) -> Result<String, ScrapeError> {
        self.pages
            .get(url)
            .cloned()
            .ok_or_else(|| ScrapeError::Unavailable(format!("{} returned 404 Not Found", url)))
    }
}
