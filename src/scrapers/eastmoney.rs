use crate::config::Config;
use crate::errors::{Result, CmbDataError};
use crate::models::kline::KlineRecord;
use crate::scrapers::base::KlineScraper;
use async_trait::async_trait;
use log::{debug, warn};
use reqwest::Client;
use serde_json::Value;
use std::time::Duration;

/// 东方财富K线数据抓取器
pub struct EastmoneyScraper {
    client: Client,
    api_base: String,
    secid: String,
    begin_date: String,
    record_limit: String,
    max_attempts: usize,
    retry_delay: Duration,
}

impl EastmoneyScraper {
    /// 创建新的东方财富数据抓取器
    pub fn new(config: &Config) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()
            .map_err(CmbDataError::RequestError)?;

        Ok(Self {
            client,
            api_base: config.api_base.clone(),
            // 市场前缀.股票代码，如 1.600036
            secid: format!("{}.{}", config.market_id, config.stock_code),
            begin_date: config.begin_date.clone(),
            record_limit: config.max_kline_records.to_string(),
            max_attempts: config.max_attempts,
            retry_delay: Duration::from_millis(config.retry_delay_ms),
        })
    }

    async fn request_once(&self, end_date: &str) -> Result<Value> {
        let response = self
            .client
            .get(format!("{}/api/qt/stock/kline/get", self.api_base))
            .query(&[
                ("secid", self.secid.as_str()),
                ("fields1", "f1,f2,f3,f4,f5"),
                ("fields2", "f51,f52,f53,f54,f55,f56,f57"),
                ("klt", "101"), // 日K线
                ("fqt", "1"),   // 前复权
                ("beg", self.begin_date.as_str()),
                ("end", end_date),
                ("lmt", self.record_limit.as_str()),
            ])
            .send()
            .await?
            .error_for_status()?;

        let json: Value = response.json().await?;
        Ok(json)
    }
}

#[async_trait]
impl KlineScraper for EastmoneyScraper {
    fn source_code(&self) -> &'static str {
        "EASTMONEY"
    }

    async fn fetch_kline_payload(&self, end_date: &str) -> Result<Value> {
        debug!("请求 {} 的K线数据，区间 {} - {}", self.secid, self.begin_date, end_date);

        let mut attempt = 0;
        loop {
            attempt += 1;
            match self.request_once(end_date).await {
                Ok(json) => return Ok(json),
                Err(e) => {
                    if attempt >= self.max_attempts {
                        return Err(e);
                    }
                    warn!(
                        "第{}/{}次请求失败: {}，{}ms后重试",
                        attempt,
                        self.max_attempts,
                        e,
                        self.retry_delay.as_millis()
                    );
                    tokio::time::sleep(self.retry_delay).await;
                }
            }
        }
    }

    async fn fetch_daily_history(&self, end_date: &str) -> Result<Vec<KlineRecord>> {
        let payload = self.fetch_kline_payload(end_date).await?;
        let records = parse_kline_payload(&payload)?;
        debug!("获取到 {} 条K线记录", records.len());
        Ok(records)
    }
}

/// 从响应JSON中提取data.klines并解析为K线记录，保持上游顺序
pub fn parse_kline_payload(payload: &Value) -> Result<Vec<KlineRecord>> {
    let klines = payload
        .get("data")
        .and_then(|d| d.get("klines"))
        .and_then(|k| k.as_array())
        .ok_or_else(|| CmbDataError::DataError("响应中缺少data.klines".to_string()))?;

    let mut records = Vec::with_capacity(klines.len());
    for item in klines {
        let line = item
            .as_str()
            .ok_or_else(|| CmbDataError::DataError(format!("K线记录不是字符串: {}", item)))?;
        records.push(parse_kline_line(line)?);
    }

    Ok(records)
}

/// 解析一条逗号分隔的K线记录：日期,开盘,收盘,最高,最低,成交量,成交额
pub fn parse_kline_line(line: &str) -> Result<KlineRecord> {
    let parts: Vec<&str> = line.split(',').collect();
    if parts.len() != 7 {
        return Err(CmbDataError::DataError(format!(
            "K线记录应有7个字段，实际{}个: {}",
            parts.len(),
            line
        )));
    }

    Ok(KlineRecord {
        date: parts[0].to_string(),
        open: parse_field(parts[1], "开盘价")?,
        close: parse_field(parts[2], "收盘价")?,
        high: parse_field(parts[3], "最高价")?,
        low: parse_field(parts[4], "最低价")?,
        // 成交量以浮点字符串下发，截断为整数
        volume: parse_field(parts[5], "成交量")?.trunc() as i64,
        amount: parse_field(parts[6], "成交额")?,
    })
}

fn parse_field(field: &str, name: &str) -> Result<f64> {
    field
        .parse::<f64>()
        .map_err(|_| CmbDataError::DataError(format!("无法解析{}: {}", name, field)))
}
