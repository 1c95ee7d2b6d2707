use scraper::{Html, Selector};

use crate::{
    domain::markup::{absolute_url, attr_of, first_match},
    error::ScrapeError,
};

use super::Browser;

// The second button on the gallery page opens the full size view
const FULL_IMAGE_BUTTON: (&str, usize) = ("button", 1);

pub async fn featured_image(
    browser: &impl Browser,
    url: &str,
    base_url: &str,
) -> Result<String, ScrapeError> {
    browser.visit(url).await?;

    let (tag, index) = FULL_IMAGE_BUTTON;
    browser.click_nth_by_tag(tag, index).await?;

    let html = browser.current_html().await?;
    let relative = extract_featured_image_path(&html)?;
    let img_url = absolute_url(base_url, &relative)?;
    log::info!("Found featured image: {}", img_url);

    Ok(img_url)
}

pub fn extract_featured_image_path(html: &str) -> Result<String, ScrapeError> {
    let image_selector = Selector::parse("img.fancybox-image").unwrap();

    let document = Html::parse_document(html);
    let image = first_match(document.root_element(), &image_selector, "img.fancybox-image")?;

    attr_of(image, "src", "img.fancybox-image")
}
