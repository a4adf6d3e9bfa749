//! 基于正则表达式的格式校验。
//!
//! 固定的校验模式在首次使用时编译并缓存；所有匹配都是整串匹配，
//! 空白输入一律视为不匹配。

use lazy_static::lazy_static;
use log::warn;
use regex::{Regex, RegexBuilder};

use crate::strutil;

lazy_static! {
    static ref EMAIL_PATTERN: Regex = Regex::new(
        r"^[_A-Za-z0-9-]+(\.[_A-Za-z0-9-]+)*@[A-Za-z0-9-]+(\.[A-Za-z0-9-]+)*\.[A-Za-z0-9]{2,}$"
    )
    .unwrap();
    static ref DOMAIN_PATTERN: Regex = Regex::new(
        r"^((http://)|(https://))?([a-zA-Z0-9]([a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?\.)+[a-zA-Z]{2,6}$"
    )
    .unwrap();
    static ref IP_PATTERN: Regex = Regex::new(r"^\d{1,3}\.\d{1,3}\.\d{1,3}\.\d{1,3}$").unwrap();
    static ref MOBILE_PATTERN: Regex = Regex::new(r"^1[3456789]\d{9}$").unwrap();
    static ref CHINA_MOBILE_PATTERN: Regex =
        Regex::new(r"^134[0-8]\d{7}$|^(?:13[5-9]|147|15[0-27-9]|178|18[2-478])\d{8}$").unwrap();
    static ref CHINA_UNICOM_PATTERN: Regex =
        Regex::new(r"^(?:13[0-2]|145|15[56]|176|175|166|18[56])\d{8}$").unwrap();
    static ref CHINA_TELECOM_PATTERN: Regex =
        Regex::new(r"^(?:199|173|133|153|177|18[019])\d{8}$").unwrap();
}

/// 正则表达式验证。整串匹配；被验证字符串会先去除两端空白。
///
/// `value`或`expression`为空白、或表达式本身非法时，一律视为不匹配。
pub fn validate_regex(value: &str, expression: &str, case_sensitive: bool) -> bool {
    if strutil::is_blank(value) || strutil::is_blank(expression) {
        return false;
    }
    // 包一层非捕获组实现整串匹配
    let anchored = format!("^(?:{})$", expression);
    let pattern = if case_sensitive {
        Regex::new(&anchored)
    } else {
        RegexBuilder::new(&anchored).case_insensitive(true).build()
    };
    match pattern {
        Ok(re) => re.is_match(value.trim()),
        Err(e) => {
            warn!("非法的正则表达式{}：{}", expression, e);
            false
        }
    }
}

/// 验证Email地址是否合法。
pub fn is_valid_email(email_addr: &str) -> bool {
    strutil::is_not_blank(email_addr) && EMAIL_PATTERN.is_match(email_addr.trim())
}

/// 域名合法验证，允许带`http://`或`https://`前缀。
pub fn is_valid_domain(domain: &str) -> bool {
    strutil::is_not_blank(domain) && DOMAIN_PATTERN.is_match(domain.trim())
}

/// 验证IPv4地址的结构是否合法（四段1~3位数字）。
pub fn is_valid_ip(ip: &str) -> bool {
    IP_PATTERN.is_match(ip)
}

/// 验证是否是正确的手机号码。
pub fn is_valid_mobile(mobile: &str) -> bool {
    MOBILE_PATTERN.is_match(mobile)
}

/// 电信运营商，按各自的号段前缀识别手机号的归属。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TelecomProvider {
    /// 中国移动
    Mobile,
    /// 中国联通
    Unicom,
    /// 中国电信
    Telecom,
}

impl TelecomProvider {
    /// 判断手机号是否属于该运营商的号段。
    pub fn matches(&self, mobile: &str) -> bool {
        match self {
            TelecomProvider::Mobile => CHINA_MOBILE_PATTERN.is_match(mobile),
            TelecomProvider::Unicom => CHINA_UNICOM_PATTERN.is_match(mobile),
            TelecomProvider::Telecom => CHINA_TELECOM_PATTERN.is_match(mobile),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_emails() {
        assert!(is_valid_email("sam@example.com"));
        assert!(is_valid_email("first.last@mail.example.cn"));
        assert!(is_valid_email("user_name-1@my-host.org"));
    }

    #[test]
    fn test_invalid_emails() {
        assert!(!is_valid_email(""));
        assert!(!is_valid_email("   "));
        assert!(!is_valid_email("plainaddress"));
        assert!(!is_valid_email("@example.com"));
        assert!(!is_valid_email("user@.com"));
        assert!(!is_valid_email("user@example"));
    }

    #[test]
    fn test_valid_domains() {
        assert!(is_valid_domain("www.sina.com"));
        assert!(is_valid_domain("http://www.sina.com"));
        assert!(is_valid_domain("https://sub.example.org"));
    }

    #[test]
    fn test_invalid_domains() {
        assert!(!is_valid_domain(""));
        assert!(!is_valid_domain("ftp://example.com/path"));
        assert!(!is_valid_domain("-bad-.com"));
    }

    #[test]
    fn test_valid_ip() {
        assert!(is_valid_ip("192.168.0.1"));
        assert!(is_valid_ip("8.8.8.8"));
        assert!(!is_valid_ip("192.168.0"));
        assert!(!is_valid_ip("192.168.0.1.5"));
        assert!(!is_valid_ip("a.b.c.d"));
    }

    #[test]
    fn test_valid_mobile() {
        assert!(is_valid_mobile("13812345678"));
        assert!(is_valid_mobile("19912345678"));
        assert!(!is_valid_mobile("12012345678"));
        assert!(!is_valid_mobile("1381234567"));
        assert!(!is_valid_mobile("138123456789"));
    }

    #[test]
    fn test_telecom_providers() {
        // 139是移动号段，130是联通号段，199是电信号段
        assert!(TelecomProvider::Mobile.matches("13912345678"));
        assert!(!TelecomProvider::Mobile.matches("13012345678"));
        assert!(TelecomProvider::Unicom.matches("13012345678"));
        assert!(TelecomProvider::Telecom.matches("19912345678"));
        assert!(!TelecomProvider::Telecom.matches("13912345678"));
    }

    #[test]
    fn test_validate_regex() {
        assert!(validate_regex("abc123", r"[a-z]+\d+", true));
        assert!(validate_regex("ABC123", r"[a-z]+\d+", false));
        assert!(!validate_regex("ABC123", r"[a-z]+\d+", true));
        // 整串匹配：部分命中不算
        assert!(!validate_regex("abc123x", r"[a-z]+\d+", true));
    }

    #[test]
    fn test_validate_regex_blank_inputs() {
        assert!(!validate_regex("", r"\d+", true));
        assert!(!validate_regex("  ", r"\d+", true));
        assert!(!validate_regex("123", "", true));
    }

    #[test]
    fn test_validate_regex_invalid_pattern() {
        assert!(!validate_regex("abc", "(unclosed", true));
    }
}
