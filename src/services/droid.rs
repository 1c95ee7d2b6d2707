use std::time::Duration;

use thirtyfour::{prelude::*, ChromiumLikeCapabilities};

use crate::{configuration::BrowserSettings, error::ScrapeError};

const WAIT_POLL_INTERVAL: Duration = Duration::from_millis(100);

#[allow(async_fn_in_trait)]
pub trait Browser {
    async fn visit(&self, url: &str) -> Result<(), ScrapeError>;

    async fn wait_for_css_selector_present(
        &self,
        selector: &str,
        timeout: Duration,
    ) -> Result<bool, ScrapeError>;

    async fn current_html(&self) -> Result<String, ScrapeError>;

    async fn click_nth_by_tag(&self, tag: &str, index: usize) -> Result<(), ScrapeError>;

    async fn quit(self) -> Result<(), ScrapeError>;
}

#[allow(async_fn_in_trait)]
pub trait Launch {
    type Session: Browser;

    async fn launch(&self) -> Result<Self::Session, ScrapeError>;
}

pub struct Droid {
    pub driver: WebDriver,
}

impl Droid {
    pub async fn new(settings: &BrowserSettings) -> Result<Self, ScrapeError> {
        let mut caps = DesiredCapabilities::chrome();
        if settings.headless {
            caps.set_headless()?;
        }

        // http://chrome:4444/wd/hub
        // http://localhost:4444
        let driver = WebDriver::new(settings.webdriver_url.as_str(), caps).await?;
        log::info!("Opened browser session at {}", settings.webdriver_url);

        Ok(Droid { driver })
    }
}

impl Launch for BrowserSettings {
    type Session = Droid;

    async fn launch(&self) -> Result<Droid, ScrapeError> {
        Droid::new(self).await
    }
}

impl Browser for Droid {
    async fn visit(&self, url: &str) -> Result<(), ScrapeError> {
        log::info!("Visiting {}", url);
        self.driver.goto(url).await?;
        Ok(())
    }

    async fn wait_for_css_selector_present(
        &self,
        selector: &str,
        timeout: Duration,
    ) -> Result<bool, ScrapeError> {
        let present = self
            .driver
            .query(By::Css(selector))
            .wait(timeout, WAIT_POLL_INTERVAL)
            .exists()
            .await?;
        Ok(present)
    }

    async fn current_html(&self) -> Result<String, ScrapeError> {
        Ok(self.driver.source().await?)
    }

    async fn click_nth_by_tag(&self, tag: &str, index: usize) -> Result<(), ScrapeError> {
        let elements = self.driver.find_all(By::Tag(tag)).await?;
        let element = elements
            .get(index)
            .ok_or_else(|| ScrapeError::missing(format!("{} #{}", tag, index)))?;
        element.click().await?;
        Ok(())
    }

    async fn quit(self) -> Result<(), ScrapeError> {
        self.driver.quit().await?;
        log::info!("Closed browser session");
        Ok(())
    }
}
