use crate::config::Config;
use crate::errors::Result;
use crate::models::kline::KlineRecord;
use crate::scrapers::base::KlineScraper;
use chrono::Local;
use log::info;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// 数据服务，驱动抓取、解析和CSV存储
pub struct DataService {
    scraper: Arc<dyn KlineScraper + Send + Sync>,
    data_path: PathBuf,
}

impl DataService {
    /// 创建新的数据服务实例
    pub fn new(config: &Config, scraper: Arc<dyn KlineScraper + Send + Sync>) -> Self {
        let data_path = PathBuf::from(&config.data_dir).join("cmb.csv");
        Self { scraper, data_path }
    }

    /// 获取数据文件路径
    pub fn data_path(&self) -> &Path {
        &self.data_path
    }

    /// 执行一次完整的抓取-解析-写出流程
    pub async fn run(&self) -> Result<()> {
        let end_date = Local::now().format("%Y%m%d").to_string();
        info!("从{}抓取日K线，截止日期{}", self.scraper.source_code(), end_date);

        let records = self.scraper.fetch_daily_history(&end_date).await?;
        info!("获取到 {} 条K线记录", records.len());

        // 解析全部成功后才写出，失败的运行不会留下新文件
        self.write_csv(&records)?;
        info!("数据已保存到 {}", self.data_path.display());

        Ok(())
    }

    /// 将K线记录写出为CSV，表头由KlineRecord的serde重命名决定
    pub fn write_csv(&self, records: &[KlineRecord]) -> Result<()> {
        // 目录缺失不补建，按IO错误上抛
        let mut writer = csv::Writer::from_path(&self.data_path)?;
        for record in records {
            writer.serialize(record)?;
        }
        writer.flush()?;
        Ok(())
    }
}
