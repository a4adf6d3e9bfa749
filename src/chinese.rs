//! 汉字到拼音的转换。

use pinyin::ToPinyin;

use crate::strutil;

/// 将汉字转换为小写无声调的拼音全拼，`ü`拼写为`v`。
///
/// 多音字取最常用的读音；非汉字字符原样保留。
///
/// ```
/// use toolbox::chinese::to_pinyin;
///
/// assert_eq!(to_pinyin("中国2024"), "zhongguo2024");
/// ```
pub fn to_pinyin(cn: &str) -> String {
    if strutil::is_blank(cn) {
        return cn.to_string();
    }
    let mut out = String::with_capacity(cn.len() * 2);
    for ch in cn.chars() {
        match ch.to_pinyin() {
            Some(py) => {
                for c in py.plain().chars() {
                    out.push(if c == 'ü' { 'v' } else { c });
                }
            }
            None => out.push(ch),
        }
    }
    out
}

/// 得到汉字拼音字头的大写形式。
///
/// 每个汉字取其拼音的首字母；非汉字字符只有本身是小写字母时才会
/// 保留，其余一律丢弃。
///
/// ```
/// use toolbox::chinese::pinyin_initials;
///
/// assert_eq!(pinyin_initials("中国"), "ZG");
/// ```
pub fn pinyin_initials(cn: &str) -> String {
    if strutil::is_blank(cn) {
        return cn.to_string();
    }
    let mut initials = String::new();
    for ch in cn.chars() {
        let first = match ch.to_pinyin() {
            Some(py) => py.plain().chars().next(),
            None => Some(ch),
        };
        if let Some(c) = first {
            // 只保留小写字母并转为大写，其余字符丢弃
            if c.is_ascii_lowercase() {
                initials.push(c.to_ascii_uppercase());
            }
        }
    }
    initials
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_pinyin() {
        assert_eq!(to_pinyin("中国"), "zhongguo");
        assert_eq!(to_pinyin("北京"), "beijing");
    }

    #[test]
    fn test_to_pinyin_keeps_non_han() {
        assert_eq!(to_pinyin("中国abc123"), "zhongguoabc123");
        assert_eq!(to_pinyin("hello"), "hello");
    }

    #[test]
    fn test_to_pinyin_v_spelling() {
        // 绿的拼音是lü，按WITH_V约定拼写为lv
        assert_eq!(to_pinyin("绿"), "lv");
    }

    #[test]
    fn test_to_pinyin_blank_passthrough() {
        assert_eq!(to_pinyin(""), "");
        assert_eq!(to_pinyin("  "), "  ");
    }

    #[test]
    fn test_pinyin_initials() {
        assert_eq!(pinyin_initials("中国"), "ZG");
        assert_eq!(pinyin_initials("北京大学"), "BJDX");
    }

    #[test]
    fn test_pinyin_initials_filters_non_letters() {
        // 数字与大写字母都被丢弃，小写字母被保留并转为大写
        assert_eq!(pinyin_initials("中a1B国"), "ZAG");
    }
}
