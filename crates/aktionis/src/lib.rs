pub mod banner;
pub mod fallback;
mod parser;
pub mod report;
pub mod scraper;
pub mod table;
pub mod types;
pub mod utils;
pub mod watch;

pub use parser::{parse_deal, parse_deals};
pub use report::DealReport;
pub use scraper::{ScraperError, WebScraper};
pub use types::{Deal, WatchConfig};

pub const DEALS_URL: &str = "https://www.aktionis.ch/deals?c=8-26";
pub const DEFAULT_BRAND: &str = "Anker";
pub const FALLBACK_STORE_MARKER: &str = "OTTO'S";
