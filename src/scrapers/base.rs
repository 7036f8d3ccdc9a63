use crate::errors::Result;
use crate::models::kline::KlineRecord;
use async_trait::async_trait;
use serde_json::Value;

/// Base trait for K-line data scrapers
#[async_trait]
pub trait KlineScraper {
    /// Get the data source code this scraper is for
    fn source_code(&self) -> &'static str;

    /// Fetch the raw kline response body for the configured instrument
    async fn fetch_kline_payload(&self, end_date: &str) -> Result<Value>;

    /// Fetch historical daily data for the configured instrument
    /// Returns records in upstream order
    async fn fetch_daily_history(&self, end_date: &str) -> Result<Vec<KlineRecord>>;
}
