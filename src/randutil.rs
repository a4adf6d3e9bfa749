//! 随机字符串生成。
//!
//! 各函数生成指定长度的随机字符串，字符集分别为数字、大写字母、
//! 小写字母、全部字母以及字母加数字。

use rand::distributions::Alphanumeric;
use rand::Rng;

/// 生成指定长度的随机数字字符串，只包括0~9的字符。
pub fn next_number(length: usize) -> String {
    let mut rng = rand::thread_rng();
    (0..length).map(|_| rng.gen_range('0'..='9')).collect()
}

/// 生成指定长度的大写字符串，只包括A~Z的字符。
pub fn next_upper(length: usize) -> String {
    let mut rng = rand::thread_rng();
    (0..length).map(|_| rng.gen_range('A'..='Z')).collect()
}

/// 生成指定长度的小写字符串，只包括a~z的字符。
pub fn next_lower(length: usize) -> String {
    let mut rng = rand::thread_rng();
    (0..length).map(|_| rng.gen_range('a'..='z')).collect()
}

/// 生成指定长度的字母字符串，只包括a~z、A~Z的字母。
pub fn next_word(length: usize) -> String {
    rand::thread_rng()
        .sample_iter(&Alphanumeric)
        .map(char::from)
        .filter(|c| c.is_ascii_alphabetic())
        .take(length)
        .collect()
}

/// 生成指定长度的字符串，只包括a~z、A~Z、0~9的字符。
pub fn next_string(length: usize) -> String {
    rand::thread_rng()
        .sample_iter(&Alphanumeric)
        .map(char::from)
        .take(length)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_next_number() {
        let s = next_number(16);
        assert_eq!(s.len(), 16);
        assert!(s.chars().all(|c| c.is_ascii_digit()));
    }

    #[test]
    fn test_next_upper() {
        let s = next_upper(12);
        assert_eq!(s.len(), 12);
        assert!(s.chars().all(|c| c.is_ascii_uppercase()));
    }

    #[test]
    fn test_next_lower() {
        let s = next_lower(12);
        assert_eq!(s.len(), 12);
        assert!(s.chars().all(|c| c.is_ascii_lowercase()));
    }

    #[test]
    fn test_next_word() {
        let s = next_word(20);
        assert_eq!(s.chars().count(), 20);
        assert!(s.chars().all(|c| c.is_ascii_alphabetic()));
    }

    #[test]
    fn test_next_string() {
        let s = next_string(20);
        assert_eq!(s.len(), 20);
        assert!(s.chars().all(|c| c.is_ascii_alphanumeric()));
    }

    #[test]
    fn test_zero_length() {
        assert_eq!(next_number(0), "");
        assert_eq!(next_string(0), "");
    }
}
