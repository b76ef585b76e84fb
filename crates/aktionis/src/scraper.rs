use crate::parser::parse_deals;
use crate::report::DealReport;
use crate::types::{Deal, WatchConfig};

use reqwest::redirect::Policy;
use reqwest::{Client, Url};

const MAX_REDIRECTS: usize = 10;

#[derive(Debug, thiserror::Error)]
pub enum ScraperError {
    #[error("HTTP request failed: {0}")]
    HttpError(#[from] reqwest::Error),
    #[error("Invalid deals URL: {0}")]
    InvalidUrl(String),
}

#[derive(Debug, Clone)]
pub struct WebScraper {
    client: Client,
    config: WatchConfig,
}

impl WebScraper {
    pub fn new() -> Result<Self, ScraperError> {
        Self::with_config(WatchConfig::default())
    }

    /// Builds a scraper that only follows redirects within the host of `config.url`.
    pub fn with_config(config: WatchConfig) -> Result<Self, ScraperError> {
        let url = Url::parse(&config.url)
            .map_err(|e| ScraperError::InvalidUrl(format!("{}: {}", config.url, e)))?;
        let allowed_host = url
            .host_str()
            .ok_or_else(|| ScraperError::InvalidUrl(format!("{} has no host", config.url)))?
            .to_string();

        let client = Client::builder()
            .timeout(config.timeout)
            .user_agent(format!(
                "{}/{}",
                env!("CARGO_PKG_NAME"),
                env!("CARGO_PKG_VERSION")
            ))
            .redirect(same_host_policy(allowed_host))
            .build()?;

        Ok(Self { client, config })
    }

    pub fn config(&self) -> &WatchConfig {
        &self.config
    }

    pub async fn fetch_deals(&self) -> Result<Vec<Deal>, ScraperError> {
        log::info!("Fetching deals from {}...", self.config.url);
        let html = self.get_html(&self.config.url).await?;
        let deals = parse_deals(&html);
        log::info!("Found {} deals", deals.len());
        Ok(deals)
    }

    pub async fn fetch_report(&self) -> Result<DealReport, ScraperError> {
        let deals = self.fetch_deals().await?;
        Ok(DealReport::new(deals, &self.config))
    }

    async fn get_html(&self, url: &str) -> Result<String, ScraperError> {
        Ok(self
            .client
            .get(url)
            .send()
            .await
            .inspect_err(|e| log::error!("HTTP error: {e:?}"))?
            .error_for_status()?
            .text()
            .await
            .inspect_err(|e| log::error!("Decode error: {e:?}"))?)
    }
}

fn same_host_policy(allowed_host: String) -> Policy {
    Policy::custom(move |attempt| {
        if attempt.previous().len() > MAX_REDIRECTS {
            return attempt.error("too many redirects");
        }
        let host = attempt.url().host_str().map(str::to_owned);
        if host.as_deref() == Some(allowed_host.as_str()) {
            attempt.follow()
        } else {
            let message = format!(
                "redirect to {} refused, only {} is allowed",
                host.as_deref().unwrap_or("<no host>"),
                allowed_host
            );
            attempt.error(message)
        }
    })
}
