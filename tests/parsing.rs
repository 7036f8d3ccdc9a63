use cmb_datahub::scrapers::eastmoney::{parse_kline_line, parse_kline_payload};
use serde_json::json;

#[test]
fn parses_fields_positionally() {
    let record = parse_kline_line("20100104,22.2,21.84,22.22,21.72,323213.0,711589632.0").unwrap();
    assert_eq!(record.date, "20100104");
    assert_eq!(record.open, 22.2);
    assert_eq!(record.close, 21.84);
    assert_eq!(record.high, 22.22);
    assert_eq!(record.low, 21.72);
    assert_eq!(record.volume, 323213);
    assert_eq!(record.amount, 711589632.0);
}

#[test]
fn volume_is_truncated_not_rounded() {
    let record = parse_kline_line("20100104,1.0,1.0,1.0,1.0,999.9,1.0").unwrap();
    assert_eq!(record.volume, 999);
}

#[test]
fn rejects_wrong_field_count() {
    assert!(parse_kline_line("20100104,1.0,1.0,1.0,1.0,100").is_err());
    assert!(parse_kline_line("20100104,1.0,1.0,1.0,1.0,100,1.0,extra").is_err());
    assert!(parse_kline_line("").is_err());
}

#[test]
fn rejects_non_numeric_fields() {
    assert!(parse_kline_line("20100104,abc,1.0,1.0,1.0,100,1.0").is_err());
    assert!(parse_kline_line("20100104,1.0,1.0,1.0,1.0,n/a,1.0").is_err());
}

#[test]
fn payload_without_klines_is_an_error() {
    assert!(parse_kline_payload(&json!({})).is_err());
    assert!(parse_kline_payload(&json!({ "data": null })).is_err());
    assert!(parse_kline_payload(&json!({ "data": { "code": "600036" } })).is_err());
}

#[test]
fn rejects_non_string_kline_entry() {
    let payload = json!({ "data": { "klines": [42] } });
    assert!(parse_kline_payload(&payload).is_err());
}

#[test]
fn payload_preserves_upstream_order() {
    let payload = json!({
        "data": {
            "klines": [
                "20100104,1.0,1.0,1.0,1.0,1,1.0",
                "20100105,2.0,2.0,2.0,2.0,2,2.0",
                "20100106,3.0,3.0,3.0,3.0,3,3.0"
            ]
        }
    });

    let records = parse_kline_payload(&payload).unwrap();
    let dates: Vec<&str> = records.iter().map(|r| r.date.as_str()).collect();
    assert_eq!(dates, vec!["20100104", "20100105", "20100106"]);
}
