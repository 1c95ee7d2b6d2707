use crate::{
    domain::{FactsTable, Table, FACTS_COLUMNS, FACTS_TABLE_CLASSES},
    error::ScrapeError,
};

use super::HtmlSource;

pub async fn mars_facts(source: &impl HtmlSource, url: &str) -> Result<String, ScrapeError> {
    let html = source.fetch_html(url).await?;
    let facts = render_facts(&html)?;
    log::info!("Rendered facts table from {}", url);

    Ok(facts)
}

pub fn render_facts(html: &str) -> Result<String, ScrapeError> {
    let table = Table::parse_first(html)?;
    let facts = FactsTable::relabel(table, &FACTS_COLUMNS)?;

    Ok(facts.to_html(FACTS_TABLE_CLASSES))
}

#[cfg(test)]
mod tests {
    use super::{mars_facts, render_facts};
    use crate::{error::ScrapeError, services::testing::FakeHtmlSource};

    const FACTS_URL: &str = "https://facts.test/Mars_Facts/index.html";

    const FACTS_PAGE: &str = r#"
        <table class="table">
          <thead><tr><th>Mars - Earth Comparison</th><th>Mars</th><th>Earth</th></tr></thead>
          <tbody>
            <tr><th>Diameter:</th><td>6,779 km</td><td>12,742 km</td></tr>
          </tbody>
        </table>
    "#;

    #[test]
    fn renders_relabelled_table() {
        let html = render_facts(FACTS_PAGE).unwrap();

        assert!(html.starts_with(r#"<table border="1" class="dataframe table table-striped">"#));
        assert!(html.contains("<th>Description</th>"));
        assert!(html.contains("<th>Diameter:</th>"));
        assert!(!html.contains("Mars - Earth Comparison"));
    }

    #[tokio::test]
    async fn fetches_and_renders() {
        let source = FakeHtmlSource::new().page(FACTS_URL, FACTS_PAGE);

        let html = mars_facts(&source, FACTS_URL).await.unwrap();

        assert!(html.contains("<td>12,742 km</td>"));
    }

    #[tokio::test]
    async fn two_column_table_is_rejected_without_panicking() {
        let source = FakeHtmlSource::new().page(
            FACTS_URL,
            "<table><tr><th>Fact</th><th>Value</th></tr><tr><td>Moons</td><td>2</td></tr></table>",
        );

        let err = mars_facts(&source, FACTS_URL).await.unwrap_err();

        assert!(matches!(
            err,
            ScrapeError::ColumnMismatch {
                expected: 3,
                found: 2
            }
        ));
        assert!(err.is_structural());
    }

    #[tokio::test]
    async fn page_without_table_is_structural() {
        let source = FakeHtmlSource::new().page(FACTS_URL, "<p>moved</p>");

        let err = mars_facts(&source, FACTS_URL).await.unwrap_err();

        assert!(matches!(err, ScrapeError::Missing(_)));
    }

    #[tokio::test]
    async fn unreachable_page_is_a_fetch_failure() {
        let source = FakeHtmlSource::new();

        let err = mars_facts(&source, FACTS_URL).await.unwrap_err();

        assert!(!err.is_structural());
    }
}
