//! 字符串工具函数。
//!
//! 提供空白判断、null安全比较、数字字面量校验以及各类命名风格转换
//! （camelCase、snake_case、StudlyCaps）。命名转换是动态属性访问
//! 派生访问器名称的基础。

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // 连续空白（两个及以上）
    static ref WHITESPACE_RUN: Regex = Regex::new(r"\s\s+").unwrap();
    // 单词分隔：下划线、连字符或空白，两侧允许空白
    static ref WORD_SEPARATOR: Regex = Regex::new(r"\s*[_\-\s]\s*").unwrap();
}

/// 判断字符串是否为空或仅包含空白字符。
pub fn is_blank(text: &str) -> bool {
    text.trim().is_empty()
}

/// `is_blank`的取反。
pub fn is_not_blank(text: &str) -> bool {
    !is_blank(text)
}

/// null安全的相等比较，两侧都缺失视为相等。
pub fn equals(a: Option<&str>, b: Option<&str>) -> bool {
    match (a, b) {
        (None, None) => true,
        (Some(x), Some(y)) => x == y,
        _ => false,
    }
}

/// null安全的忽略大小写比较。
pub fn equals_ignore_case(a: Option<&str>, b: Option<&str>) -> bool {
    match (a, b) {
        (None, None) => true,
        (Some(x), Some(y)) => x.eq_ignore_ascii_case(y),
        _ => false,
    }
}

/// 去除两端空白；结果为空字符串时返回`None`。
pub fn trim_to_none(text: &str) -> Option<&str> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed)
    }
}

/// 去除两端空白；输入缺失时返回空字符串。
pub fn trim_to_empty(text: Option<&str>) -> &str {
    text.map(str::trim).unwrap_or("")
}

/// 判断字符串是否是合法的数字字面量。
///
/// 支持带`0x`前缀的十六进制、科学计数法（`1.5e3`）、类型限定符后缀
/// （`123L`、`1.5f`等）以及前导负号。空字符串返回`false`。
///
/// ```
/// use toolbox::strutil::is_number;
///
/// assert!(is_number("-45.99"));
/// assert!(is_number("0x0085"));
/// assert!(!is_number("79.34.45"));
/// ```
pub fn is_number(text: &str) -> bool {
    if text.is_empty() {
        return false;
    }
    let chars: Vec<char> = text.chars().collect();
    let mut sz = chars.len();
    let mut has_exp = false;
    let mut has_dec_point = false;
    let mut allow_signs = false;
    let mut found_digit = false;
    // 前导符号
    let start = if chars[0] == '-' { 1 } else { 0 };
    if sz > start + 1 && chars[start] == '0' && chars[start + 1] == 'x' {
        let i = start + 2;
        if i == sz {
            return false; // 只有"0x"
        }
        // 十六进制只能整体校验
        return chars[i..].iter().all(|c| c.is_ascii_hexdigit());
    }
    // 最后一个字符单独处理，它可能是类型限定符
    sz -= 1;
    let mut i = start;
    while i < sz || (i < sz + 1 && allow_signs && !found_digit) {
        let c = chars[i];
        if c.is_ascii_digit() {
            found_digit = true;
            allow_signs = false;
        } else if c == '.' {
            if has_dec_point || has_exp {
                // 两个小数点，或指数部分出现小数点
                return false;
            }
            has_dec_point = true;
        } else if c == 'e' || c == 'E' {
            if has_exp {
                return false;
            }
            if !found_digit {
                return false;
            }
            has_exp = true;
            allow_signs = true;
        } else if c == '+' || c == '-' {
            if !allow_signs {
                return false;
            }
            allow_signs = false;
            found_digit = false; // 指数符号之后必须还有数字
        } else {
            return false;
        }
        i += 1;
    }
    if i < chars.len() {
        let c = chars[i];
        if c.is_ascii_digit() {
            return true;
        }
        if c == 'e' || c == 'E' {
            // 指数符号不能是最后一个字符
            return false;
        }
        if c == '.' {
            if has_dec_point || has_exp {
                return false;
            }
            // 非指数后的尾随小数点是允许的
            return found_digit;
        }
        if !allow_signs && (c == 'd' || c == 'D' || c == 'f' || c == 'F') {
            return found_digit;
        }
        if c == 'l' || c == 'L' {
            // L不能与指数或小数点同时出现
            return found_digit && !has_exp && !has_dec_point;
        }
        return false;
    }
    !allow_signs && found_digit
}

/// 去除前缀（若存在）。`case_sensitive`控制是否区分大小写。
pub fn remove_left(value: &str, prefix: &str, case_sensitive: bool) -> String {
    let matched = if case_sensitive {
        value.starts_with(prefix)
    } else {
        value.to_lowercase().starts_with(&prefix.to_lowercase())
    };
    if matched {
        value.chars().skip(prefix.chars().count()).collect()
    } else {
        value.to_string()
    }
}

/// 去除后缀（若存在）。`case_sensitive`控制是否区分大小写。
pub fn remove_right(value: &str, suffix: &str, case_sensitive: bool) -> String {
    if ends_with(value, suffix, case_sensitive) {
        let keep = value.chars().count() - suffix.chars().count();
        value.chars().take(keep).collect()
    } else {
        value.to_string()
    }
}

/// 判断`value`是否以`search`结尾。`case_sensitive`控制是否区分大小写。
pub fn ends_with(value: &str, search: &str, case_sensitive: bool) -> bool {
    if case_sensitive {
        value.ends_with(search)
    } else {
        value.to_lowercase().ends_with(&search.to_lowercase())
    }
}

/// 将连续空白折叠为单个空格，并去除两端空白。
pub fn collapse_whitespace(value: &str) -> String {
    WHITESPACE_RUN.replace_all(value.trim(), " ").into_owned()
}

/// 首字母大写，其余不变。
pub fn upper_first(value: &str) -> String {
    let mut chars = value.chars();
    match chars.next() {
        Some(first) => {
            let rest = chars.as_str();
            if rest.is_empty() {
                value.to_uppercase()
            } else {
                first.to_uppercase().chain(rest.chars()).collect()
            }
        }
        None => String::new(),
    }
}

/// 首字母小写，其余不变。
pub fn lower_first(value: &str) -> String {
    let mut chars = value.chars();
    match chars.next() {
        Some(first) => {
            let rest = chars.as_str();
            if rest.is_empty() {
                value.to_lowercase()
            } else {
                first.to_lowercase().chain(rest.chars()).collect()
            }
        }
        None => String::new(),
    }
}

/// 转换为StudlyCaps：按下划线、连字符和空白分词，各词首字母大写后拼接。
pub fn to_studly_case(value: &str) -> String {
    let collapsed = collapse_whitespace(value);
    WORD_SEPARATOR
        .split(&collapsed)
        .filter(|word| !word.is_empty())
        .map(upper_first)
        .collect()
}

/// 转换为camelCase。
///
/// ```
/// use toolbox::strutil::to_camel_case;
///
/// assert_eq!(to_camel_case("first_name"), "firstName");
/// assert_eq!(to_camel_case("first-name"), "firstName");
/// ```
pub fn to_camel_case(value: &str) -> String {
    lower_first(&to_studly_case(value))
}

/// 按大写字母边界拆词并用`separator`连接，全部转为小写。
///
/// 输入会先被规范化为camelCase，因此snake_case输入也能正确处理。
pub fn to_decamelize(value: &str, separator: &str) -> String {
    let camel = to_camel_case(value);
    let mut out = String::with_capacity(camel.len() + 4);
    for (i, ch) in camel.chars().enumerate() {
        if ch.is_uppercase() {
            if i > 0 {
                out.push_str(separator);
            }
            out.extend(ch.to_lowercase());
        } else {
            out.push(ch);
        }
    }
    out
}

/// 转换为snake_case。camelCase与snake_case输入产生相同结果，
/// 这是属性名规范化的关键性质。
pub fn to_snake_case(value: &str) -> String {
    to_decamelize(value, "_")
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_is_blank() {
        assert!(is_blank(""));
        assert!(is_blank("   "));
        assert!(is_blank("\t\n"));
        assert!(!is_blank("bob"));
        assert!(!is_blank("  bob  "));
    }

    #[test]
    fn test_equals_null_safe() {
        assert!(equals(None, None));
        assert!(equals(Some("a"), Some("a")));
        assert!(!equals(Some("a"), None));
        assert!(!equals(None, Some("a")));
        assert!(!equals(Some("a"), Some("b")));
    }

    #[test]
    fn test_equals_ignore_case() {
        assert!(equals_ignore_case(Some("Sam"), Some("sam")));
        assert!(equals_ignore_case(None, None));
        assert!(!equals_ignore_case(Some("Sam"), Some("Sammy")));
    }

    #[test]
    fn test_trim_to_none() {
        assert_eq!(trim_to_none("  abc  "), Some("abc"));
        assert_eq!(trim_to_none("     "), None);
        assert_eq!(trim_to_none(""), None);
    }

    #[test]
    fn test_trim_to_empty() {
        assert_eq!(trim_to_empty(Some("  abc  ")), "abc");
        assert_eq!(trim_to_empty(None), "");
    }

    #[test]
    fn test_is_number_accepts() {
        assert!(is_number("9987744232"));
        assert!(is_number("-98787544332"));
        assert!(is_number("34.9995834"));
        assert!(is_number("-45.9954"));
        assert!(is_number("23245.8"));
        assert!(is_number("0x0085"));
        assert!(is_number("1.5e3"));
        assert!(is_number("123L"));
        assert!(is_number("1.5f"));
    }

    #[test]
    fn test_is_number_rejects() {
        assert!(!is_number("79.34.45"));
        assert!(!is_number("99,685,434,343"));
        assert!(!is_number("--4454"));
        assert!(!is_number(""));
        assert!(!is_number("0x"));
        assert!(!is_number("1.5e"));
        assert!(!is_number("abc"));
        assert!(!is_number("1.5e3L"));
    }

    #[test]
    fn test_remove_left() {
        assert_eq!(remove_left("foobar", "foo", true), "bar");
        assert_eq!(remove_left("foobar", "FOO", true), "foobar");
        assert_eq!(remove_left("foobar", "FOO", false), "bar");
        assert_eq!(remove_left("foobar", "bar", true), "foobar");
    }

    #[test]
    fn test_remove_right() {
        assert_eq!(remove_right("foobar", "bar", true), "foo");
        assert_eq!(remove_right("foobar", "BAR", true), "foobar");
        assert_eq!(remove_right("foobar", "BAR", false), "foo");
        assert_eq!(remove_right("foobar", "foo", true), "foobar");
    }

    #[test]
    fn test_collapse_whitespace() {
        assert_eq!(collapse_whitespace("  a   b  "), "a b");
        assert_eq!(collapse_whitespace("a\t\tb"), "a b");
        assert_eq!(collapse_whitespace("ab"), "ab");
    }

    #[test]
    fn test_upper_lower_first() {
        assert_eq!(upper_first("name"), "Name");
        assert_eq!(upper_first("n"), "N");
        assert_eq!(upper_first(""), "");
        assert_eq!(lower_first("Name"), "name");
        assert_eq!(lower_first("N"), "n");
    }

    #[test]
    fn test_to_studly_case() {
        assert_eq!(to_studly_case("first_name"), "FirstName");
        assert_eq!(to_studly_case("first-name"), "FirstName");
        assert_eq!(to_studly_case("first name"), "FirstName");
    }

    #[test]
    fn test_to_camel_case() {
        assert_eq!(to_camel_case("first_name"), "firstName");
        assert_eq!(to_camel_case("firstName"), "firstName");
        assert_eq!(to_camel_case("first - name"), "firstName");
    }

    #[test]
    fn test_to_snake_case() {
        assert_eq!(to_snake_case("firstName"), "first_name");
        assert_eq!(to_snake_case("first_name"), "first_name");
        assert_eq!(to_snake_case("FirstName"), "first_name");
    }

    /// snake_case与camelCase输入必须规范化到同一结果，
    /// 动态属性访问依赖这一性质派生访问器名称
    #[test]
    fn test_property_name_normalization() {
        assert_eq!(to_snake_case("first_name"), to_snake_case("firstName"));
        assert_eq!(to_snake_case("role_id"), to_snake_case("roleId"));
    }

    #[test]
    fn test_to_decamelize_with_custom_separator() {
        assert_eq!(to_decamelize("firstName", "-"), "first-name");
        assert_eq!(to_decamelize("first_name", "."), "first.name");
    }

    proptest! {
        /// 任意整数的十进制表示都是合法数字
        #[test]
        fn prop_integer_strings_are_numbers(n in any::<i64>()) {
            prop_assert!(is_number(&n.to_string()));
        }

        /// snake_case规范化是幂等的
        #[test]
        fn prop_snake_case_idempotent(s in "[a-z][a-z0-9]{0,8}(_[a-z][a-z0-9]{0,7}){0,3}") {
            let snake = to_snake_case(&s);
            prop_assert_eq!(to_snake_case(&snake), snake);
        }

        /// snake -> camel -> snake 往返后保持不变
        #[test]
        fn prop_camel_snake_round_trip(s in "[a-z][a-z0-9]{0,8}(_[a-z][a-z0-9]{0,7}){0,3}") {
            prop_assert_eq!(to_snake_case(&to_camel_case(&s)), s);
        }
    }
}
