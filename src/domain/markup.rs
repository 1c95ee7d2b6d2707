use scraper::{ElementRef, Selector};
use url::Url;

use crate::error::ScrapeError;

pub fn first_match<'a>(
    scope: ElementRef<'a>,
    selector: &Selector,
    what: &str,
) -> Result<ElementRef<'a>, ScrapeError> {
    scope
        .select(selector)
        .next()
        .ok_or_else(|| ScrapeError::missing(what))
}

pub fn text_of(element: ElementRef) -> String {
    element.text().collect::<String>().trim().to_string()
}

pub fn attr_of(element: ElementRef, name: &str, what: &str) -> Result<String, ScrapeError> {
    element
        .value()
        .attr(name)
        .map(|value| value.to_string())
        .ok_or_else(|| ScrapeError::missing(format!("{}[{}]", what, name)))
}

pub fn enclosing_href(element: ElementRef) -> Option<String> {
    element
        .ancestors()
        .filter_map(ElementRef::wrap)
        .find(|ancestor| ancestor.value().name() == "a")
        .and_then(|anchor| anchor.value().attr("href"))
        .map(|href| href.to_string())
}

pub fn absolute_url(base: &str, relative: &str) -> Result<String, ScrapeError> {
    // Only paths under the base; a scheme or `//` prefix would leave it
    if relative.starts_with("//") || Url::parse(relative).is_ok() {
        return Err(ScrapeError::missing(format!(
            "path relative to {} (got {})",
            base, relative
        )));
    }

    let url = format!(
        "{}/{}",
        base.trim_end_matches('/'),
        relative.trim_start_matches('/')
    );
    Ok(Url::parse(&url)?.to_string())
}
