use serde::Serialize;

/// 单日K线记录
///
/// 字段顺序与输出CSV的列顺序一致，serde重命名决定表头名称。
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct KlineRecord {
    /// 交易日，保持上游下发的原始格式（YYYYMMDD），不做转换
    #[serde(rename = "Date")]
    pub date: String,
    #[serde(rename = "Open")]
    pub open: f64,
    #[serde(rename = "Close")]
    pub close: f64,
    #[serde(rename = "High")]
    pub high: f64,
    #[serde(rename = "Low")]
    pub low: f64,
    /// 成交量，上游以浮点字符串下发，截断为整数
    #[serde(rename = "Volume")]
    pub volume: i64,
    /// 成交额
    #[serde(rename = "Amount")]
    pub amount: f64,
}
