/// 抓取任务配置，所有参数都有固定默认值
pub struct Config {
    /// 股票代码，默认招商银行A股
    pub stock_code: String,
    /// 市场标识，1为沪市，0为深市
    pub market_id: String,
    /// 起始日期，YYYYMMDD
    pub begin_date: String,
    pub data_dir: String,
    /// 单次请求返回的最大K线条数
    pub max_kline_records: usize,
    pub request_timeout_secs: u64,
    /// 请求总尝试次数上限
    pub max_attempts: usize,
    /// 两次尝试之间的固定等待时间
    pub retry_delay_ms: u64,
    pub api_base: String,
}

impl Config {
    pub fn new() -> Self {
        Self {
            stock_code: "600036".to_string(),
            market_id: "1".to_string(),
            begin_date: "20100101".to_string(),
            data_dir: "data".to_string(),
            max_kline_records: 10000,
            request_timeout_secs: 10,
            max_attempts: 3,
            retry_delay_ms: 2000,
            api_base: "http://push2his.eastmoney.com".to_string(),
        }
    }

    pub fn with_stock_code(mut self, code: &str) -> Self {
        self.stock_code = code.to_string();
        self
    }

    pub fn with_market_id(mut self, market_id: &str) -> Self {
        self.market_id = market_id.to_string();
        self
    }

    pub fn with_begin_date(mut self, date: &str) -> Self {
        self.begin_date = date.to_string();
        self
    }

    pub fn with_data_dir(mut self, dir: &str) -> Self {
        self.data_dir = dir.to_string();
        self
    }

    pub fn with_max_kline_records(mut self, max: usize) -> Self {
        self.max_kline_records = max;
        self
    }

    pub fn with_request_timeout_secs(mut self, secs: u64) -> Self {
        self.request_timeout_secs = secs;
        self
    }

    pub fn with_max_attempts(mut self, attempts: usize) -> Self {
        self.max_attempts = attempts;
        self
    }

    pub fn with_retry_delay_ms(mut self, ms: u64) -> Self {
        self.retry_delay_ms = ms;
        self
    }

    pub fn with_api_base(mut self, base: &str) -> Self {
        self.api_base = base.to_string();
        self
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}
