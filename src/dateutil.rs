//! 日期解析与格式化。
//!
//! `parse_date`按多种常见格式自动匹配输入字符串，其余函数提供
//! 当前时间的几种固定格式表示。

use chrono::{Local, NaiveDate, NaiveDateTime, NaiveTime, Timelike};

use crate::exception::Exception;
use crate::strutil;

/// `parse_date`能够识别的格式，按匹配优先级排列。
pub const SUPPORTED_PATTERNS: [&str; 5] = [
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M",
    "%Y-%m-%d %H",
    "%Y-%m-%d",
    "%Y/%m/%d",
];

/// 将字符串解析为日期时间，按[`SUPPORTED_PATTERNS`]逐个尝试。
///
/// 缺失的时间部分补为零。空白输入返回`InvalidArgument`，
/// 所有格式都不匹配时返回`UnparsableDate`。
///
/// ```
/// use toolbox::dateutil::parse_date;
///
/// let dt = parse_date("2024-03-05 08:30").unwrap();
/// assert_eq!(dt.to_string(), "2024-03-05 08:30:00");
/// ```
pub fn parse_date(datetime: &str) -> Result<NaiveDateTime, Exception> {
    if strutil::is_blank(datetime) {
        return Err(Exception::invalid("日期字符串不能为空白"));
    }
    let text = datetime.trim();

    if let Ok(dt) = NaiveDateTime::parse_from_str(text, "%Y-%m-%d %H:%M:%S") {
        return Ok(dt);
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(text, "%Y-%m-%d %H:%M") {
        return Ok(dt);
    }
    // 只到小时的输入补上分钟再解析
    if let Ok(dt) = NaiveDateTime::parse_from_str(&[text, ":00"].concat(), "%Y-%m-%d %H:%M") {
        return Ok(dt);
    }
    if let Ok(date) = NaiveDate::parse_from_str(text, "%Y-%m-%d") {
        return Ok(date.and_time(NaiveTime::MIN));
    }
    if let Ok(date) = NaiveDate::parse_from_str(text, "%Y/%m/%d") {
        return Ok(date.and_time(NaiveTime::MIN));
    }
    Err(Exception::UnparsableDate(text.to_string()))
}

/// 舍去时间部分，只保留日期（时间归零）。
pub fn truncate_to_day(datetime: NaiveDateTime) -> NaiveDateTime {
    datetime.date().and_time(NaiveTime::MIN)
}

/// 当前时间不带连接符的字符串，例如`20180101083000`。
pub fn now_compact() -> String {
    Local::now().format("%Y%m%d%H%M%S").to_string()
}

/// 当前日期的字符串表示，例如`2018-01-01`。
pub fn now_date_string() -> String {
    Local::now().format("%Y-%m-%d").to_string()
}

/// 判断当前时间是上午还是下午，12点及之前返回`am`。
pub fn am_pm() -> &'static str {
    if Local::now().hour() < 13 {
        "am"
    } else {
        "pm"
    }
}
