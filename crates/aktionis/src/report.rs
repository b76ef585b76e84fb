use std::fmt::Display;

use crate::banner::Banner;
use crate::fallback::apply_fallback;
use crate::table::DealTable;
use crate::types::{Deal, WatchConfig};
use crate::watch::BrandWatch;

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

/// Scraped deals after description fallback, plus the brand watch outcome.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DealReport {
    pub brand: String,
    pub on_sale: bool,
    pub highlighted: Option<Deal>,
    pub fetched_at: DateTime<Local>,
    pub deals: Vec<Deal>,
}

impl DealReport {
    pub fn new(mut deals: Vec<Deal>, config: &WatchConfig) -> Self {
        for deal in &mut deals {
            apply_fallback(deal, &config.fallback_store_marker);
        }

        let watch = BrandWatch::new(&config.brand);
        let highlighted = watch.find(&deals).cloned();
        match &highlighted {
            Some(deal) => log::info!("{} is on sale: {}", watch.brand(), deal),
            None => log::info!("{} is not on sale", watch.brand()),
        }

        Self {
            brand: watch.brand().to_string(),
            on_sale: highlighted.is_some(),
            highlighted,
            fetched_at: Local::now(),
            deals,
        }
    }
}

impl Display for DealReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.highlighted {
            Some(deal) => {
                write!(f, "{}", Banner::new(&self.brand, deal))?;
                writeln!(f, "Here is the best of the rest anyway:")?;
            }
            None => writeln!(
                f,
                "{} is not on sale :/, here is the best of the rest:",
                self.brand
            )?,
        }
        write!(f, "{}", DealTable::new(&self.deals))
    }
}
