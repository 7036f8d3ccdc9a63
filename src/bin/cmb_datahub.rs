use cmb_datahub::config::Config;
use cmb_datahub::scrapers::eastmoney::EastmoneyScraper;
use cmb_datahub::services::data_service::DataService;

use log::info;
use std::sync::Arc;

#[tokio::main]
async fn main() {
    // Initialize logger
    env_logger::init();

    let config = Config::new();
    info!("开始获取招商银行({})日K线数据", config.stock_code);

    // 任何一步出错都折叠为一条失败消息，进程始终以0退出
    match run(&config).await {
        Ok(path) => println!("数据获取成功，已保存到 {}", path),
        Err(e) => println!("数据获取失败: {}", e),
    }
}

async fn run(config: &Config) -> cmb_datahub::Result<String> {
    let scraper = Arc::new(EastmoneyScraper::new(config)?);
    let service = DataService::new(config, scraper);
    service.run().await?;
    Ok(service.data_path().display().to_string())
}
