pub mod facts_table;
pub mod markup;
pub mod scrape_result;

pub use facts_table::*;
pub use scrape_result::*;
