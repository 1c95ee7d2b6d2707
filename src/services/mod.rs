pub mod droid;
pub mod facts_scraper;
pub mod featured_image_scraper;
pub mod hemisphere_scraper;
pub mod html_source;
pub mod mars_scraper;
pub mod news_scraper;

#[cfg(test)]
pub mod testing;

pub use droid::*;
pub use facts_scraper::*;
pub use featured_image_scraper::*;
pub use hemisphere_scraper::*;
pub use html_source::*;
pub use mars_scraper::*;
pub use news_scraper::*;
