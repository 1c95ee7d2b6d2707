use crate::error::ScrapeError;

#[allow(async_fn_in_trait)]
pub trait HtmlSource {
    async fn fetch_html(&self, url: &str) -> Result<String, ScrapeError>;
}

impl HtmlSource for reqwest::Client {
    async fn fetch_html(&self, url: &str) -> Result<String, ScrapeError> {
        log::info!("Fetching {}", url);
        let res = self.get(url).send().await?;

        let status = res.status();
        if !status.is_success() {
            return Err(ScrapeError::Unavailable(format!("{} returned {}", url, status)));
        }

        Ok(res.text().await?)
    }
}
