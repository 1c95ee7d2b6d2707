use std::time::Duration;

use crate::{
    configuration::{Settings, SourceSettings},
    domain::{Extracted, ScrapeResult},
    error::ScrapeError,
};

use super::{
    featured_image, mars_facts, mars_hemispheres, mars_news, Browser, HtmlSource, Launch,
};

pub async fn scrape_mars(settings: &Settings) -> Result<ScrapeResult, ScrapeError> {
    let client = reqwest::Client::new();
    scrape_all(&settings.browser, &client, &settings.sources).await
}

/// Only a failed launch is an error; the session is closed once whenever it was opened.
pub async fn scrape_all(
    launcher: &impl Launch,
    http: &impl HtmlSource,
    sources: &SourceSettings,
) -> Result<ScrapeResult, ScrapeError> {
    let browser = launcher.launch().await?;

    let news_wait = Duration::from_millis(sources.news_wait_millis);
    let news = settle(
        "news",
        mars_news(&browser, &sources.news_url, news_wait).await,
    );
    let image = settle(
        "featured image",
        featured_image(
            &browser,
            &sources.featured_image_url,
            &sources.featured_image_base,
        )
        .await,
    );
    let facts = settle("facts", mars_facts(http, &sources.facts_url).await);
    let hemispheres = settle(
        "hemispheres",
        mars_hemispheres(&browser, &sources.hemispheres_url, &sources.hemispheres_base).await,
    );

    let result = ScrapeResult::assemble(news, image, facts, hemispheres);

    if let Err(e) = browser.quit().await {
        log::error!("Failed to close browser session: {:?}", e);
    }

    Ok(result)
}

fn settle<T>(routine: &str, result: Result<T, ScrapeError>) -> Extracted<T> {
    let extracted = Extracted::from(result);
    match &extracted {
        Extracted::Found(_) => {}
        Extracted::NotFound(reason) => log::warn!("No {} found: {}", routine, reason),
        Extracted::Failed(reason) => log::error!("Scraping {} failed: {}", routine, reason),
    }
    extracted
}
