use std::time::Duration;

use scraper::{Html, Selector};

use crate::{
    domain::{
        markup::{first_match, text_of},
        NewsItem,
    },
    error::ScrapeError,
};

use super::Browser;

pub const NEWS_CONTAINER: &str = "div.list_text";

pub async fn mars_news(
    browser: &impl Browser,
    url: &str,
    wait: Duration,
) -> Result<NewsItem, ScrapeError> {
    browser.visit(url).await?;

    // Loading is best effort, the parse below decides whether anything showed up
    if !browser
        .wait_for_css_selector_present(NEWS_CONTAINER, wait)
        .await?
    {
        log::warn!("{} did not appear within {:?} on {}", NEWS_CONTAINER, wait, url);
    }

    let html = browser.current_html().await?;
    let news = extract_news(&html)?;
    log::info!("Found news headline: {}", news.title);

    Ok(news)
}

pub fn extract_news(html: &str) -> Result<NewsItem, ScrapeError> {
    let container_selector = Selector::parse(NEWS_CONTAINER).unwrap();
    let title_selector = Selector::parse("div.content_title").unwrap();
    let teaser_selector = Selector::parse("div.article_teaser_body").unwrap();

    let document = Html::parse_document(html);
    let slide = first_match(document.root_element(), &container_selector, NEWS_CONTAINER)?;
    let title = first_match(slide, &title_selector, "div.content_title")?;
    let teaser = first_match(slide, &teaser_selector, "div.article_teaser_body")?;

    Ok(NewsItem {
        title: text_of(title),
        teaser: text_of(teaser),
    })
}
