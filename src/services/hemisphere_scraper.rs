use std::collections::HashMap;

use scraper::{Html, Selector};

use crate::{
    domain::{
        markup::{absolute_url, attr_of, enclosing_href, first_match, text_of},
        Hemisphere,
    },
    error::ScrapeError,
};

use super::Browser;

pub const RESULTS_CONTAINER: &str = "div.collapsible.results";

#[derive(Debug, Clone, PartialEq)]
pub struct TitleCandidate {
    pub title: String,
    // href of the anchor around the heading
    pub key: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ThumbnailLink {
    pub href: String,
    pub url: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SearchResults {
    pub titles: Vec<TitleCandidate>,
    pub thumbnails: Vec<ThumbnailLink>,
}

pub async fn mars_hemispheres(
    browser: &impl Browser,
    url: &str,
    base_url: &str,
) -> Result<Vec<Hemisphere>, ScrapeError> {
    browser.visit(url).await?;
    let html = browser.current_html().await?;

    let results = extract_search_results(&html, base_url)?;
    let pairs = pair_titles_with_thumbnails(results);
    log::info!("Resolving {} hemisphere images", pairs.len());

    let mut hemispheres = Vec::with_capacity(pairs.len());
    for (title, detail_url) in pairs {
        browser.visit(&detail_url).await?;
        let html = browser.current_html().await?;

        let relative = extract_full_image_path(&html)?;
        hemispheres.push(Hemisphere {
            title,
            img_url: absolute_url(base_url, &relative)?,
        });
    }

    Ok(hemispheres)
}

pub fn extract_search_results(html: &str, base_url: &str) -> Result<SearchResults, ScrapeError> {
    let container_selector = Selector::parse(RESULTS_CONTAINER).unwrap();
    let heading_selector = Selector::parse("h3").unwrap();
    let anchor_selector = Selector::parse("a").unwrap();
    let image_selector = Selector::parse("img").unwrap();

    let document = Html::parse_document(html);
    let container = first_match(document.root_element(), &container_selector, RESULTS_CONTAINER)?;

    let titles = container
        .select(&heading_selector)
        .map(|heading| TitleCandidate {
            title: text_of(heading),
            key: enclosing_href(heading),
        })
        .collect();

    let thumbnails = container
        .select(&anchor_selector)
        .filter(|anchor| anchor.select(&image_selector).next().is_some())
        .map(|anchor| {
            let href = attr_of(anchor, "href", "thumbnail link")?;
            let url = absolute_url(base_url, &href)?;
            Ok(ThumbnailLink { href, url })
        })
        .collect::<Result<Vec<_>, ScrapeError>>()?;

    Ok(SearchResults { titles, thumbnails })
}

/// Joins titles to thumbnails by shared `href`, or by position when titles carry none.
pub fn pair_titles_with_thumbnails(results: SearchResults) -> Vec<(String, String)> {
    let SearchResults { titles, thumbnails } = results;
    let (title_count, thumbnail_count) = (titles.len(), thumbnails.len());
    let keyed = !titles.is_empty() && titles.iter().all(|t| t.key.is_some());

    let pairs: Vec<(String, String)> = if keyed {
        let mut by_href: HashMap<String, String> = HashMap::new();
        for thumbnail in thumbnails {
            by_href.entry(thumbnail.href).or_insert(thumbnail.url);
        }

        titles
            .into_iter()
            .filter_map(|t| {
                let url = t.key.and_then(|key| by_href.remove(&key))?;
                Some((t.title, url))
            })
            .collect()
    } else {
        titles
            .into_iter()
            .map(|t| t.title)
            .zip(thumbnails.into_iter().map(|t| t.url))
            .collect()
    };

    if pairs.len() != title_count || pairs.len() != thumbnail_count {
        log::warn!(
            "Paired {} hemispheres ({}) from {} titles and {} thumbnails",
            pairs.len(),
            if keyed { "by link" } else { "by position" },
            title_count,
            thumbnail_count
        );
    }

    pairs
}

pub fn extract_full_image_path(html: &str) -> Result<String, ScrapeError> {
    let wide_image_selector = Selector::parse("img.wide-image").unwrap();

    let document = Html::parse_document(html);
    let image = first_match(document.root_element(), &wide_image_selector, "img.wide-image")?;

    attr_of(image, "src", "img.wide-image")
}
