// Copyright (c) 2026 shaneyale (shaneyale86@gmail.com)
// All rights reserved.

//! # HTTP 标头工具模块
//!
//! 该模块提供与具体Web框架解耦的标头读写辅助能力，涵盖：
//! 1. 大小写不敏感的标头多值容器[`Headers`]。
//! 2. 客户端缓存控制标头的设置（`Expires`/`Cache-Control`/`Pragma`）。
//! 3. 条件请求的协商计算（`If-Modified-Since`/`If-None-Match`，RFC 9110）。
//! 4. 下载对话框、`Last-Modified`、`ETag`等常用响应标头的设置。
//! 5. JSON请求意图的识别与带前缀请求参数的提取。

use std::collections::{BTreeMap, HashMap};

use chrono::{DateTime, Duration, Utc};

use crate::param::*;
use crate::reflect::Value;
use crate::strutil;

/// HTTP 标头容器。
///
/// 按插入顺序保存条目；名称匹配不区分大小写。`get`返回首个匹配值，
/// `set`替换全部同名条目，`add`追加新条目。
#[derive(Debug, Clone, Default)]
pub struct Headers {
    entries: Vec<(String, String)>,
}

impl Headers {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// 设置标头，替换已存在的全部同名条目。
    pub fn set(&mut self, name: &str, value: &str) {
        self.entries.retain(|(n, _)| !n.eq_ignore_ascii_case(name));
        self.entries.push((name.to_string(), value.to_string()));
    }

    /// 追加标头，保留已存在的同名条目。
    pub fn add(&mut self, name: &str, value: &str) {
        self.entries.push((name.to_string(), value.to_string()));
    }

    /// 首个同名标头的值。
    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(n, _)| n.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }

    /// 全部同名标头的值。
    pub fn get_all(&self, name: &str) -> Vec<&str> {
        self.entries
            .iter()
            .filter(|(n, _)| n.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
            .collect()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// 以HTTP日期格式（IMF-fixdate）设置标头。
    pub fn set_date(&mut self, name: &str, datetime: DateTime<Utc>) {
        self.set(name, &http_date(datetime));
    }

    /// 解析标头中的HTTP日期。
    pub fn get_date(&self, name: &str) -> Option<DateTime<Utc>> {
        self.get(name).and_then(parse_http_date)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(n, v)| (n.as_str(), v.as_str()))
    }
}

/// 将时间格式化为HTTP日期（IMF-fixdate），例如
/// `Tue, 15 Nov 1994 08:12:31 GMT`。
pub fn http_date(datetime: DateTime<Utc>) -> String {
    datetime.format(HTTP_DATE_FORMAT).to_string()
}

/// 解析HTTP日期。格式非法时返回`None`。
pub fn parse_http_date(text: &str) -> Option<DateTime<Utc>> {
    DateTime::parse_from_rfc2822(text)
        .ok()
        .map(|dt| dt.with_timezone(&Utc))
}

/// 设置客户端缓存过期时间的标头。
///
/// 同时写HTTP/1.0的`Expires`（固定过期时刻）和HTTP/1.1的
/// `Cache-Control`（相对秒数）。
pub fn set_expires(headers: &mut Headers, expires_seconds: i64) {
    headers.set_date(EXPIRES, Utc::now() + Duration::seconds(expires_seconds));
    headers.set(
        CACHE_CONTROL,
        &format!("private, max-age={}", expires_seconds),
    );
}

/// 设置禁止客户端缓存的标头。
pub fn set_no_cache(headers: &mut Headers) {
    // HTTP/1.0：已过期的固定时刻加Pragma
    headers.set_date(EXPIRES, DateTime::<Utc>::UNIX_EPOCH);
    headers.add(PRAGMA, "no-cache");
    // HTTP/1.1
    headers.set(CACHE_CONTROL, "no-cache, no-store, max-age=0");
}

/// 设置让浏览器弹出下载对话框的标头。
pub fn set_file_download(headers: &mut Headers, file_name: &str) {
    headers.set(
        CONTENT_DISPOSITION,
        &format!("attachment; filename=\"{}\"", file_name),
    );
}

/// 设置`Last-Modified`标头。
pub fn set_last_modified(headers: &mut Headers, last_modified: DateTime<Utc>) {
    headers.set_date(LAST_MODIFIED, last_modified);
}

/// 设置`ETag`标头。
pub fn set_etag(headers: &mut Headers, etag: &str) {
    headers.set(ETAG, etag);
}

/// 根据请求的`If-Modified-Since`标头判断内容是否已被修改。
///
/// 未修改（精度按1秒放宽）时返回`false`，调用方应当响应
/// `304 Not Modified`；请求未携带该标头或内容已修改时返回`true`。
pub fn check_if_modified_since(request: &Headers, last_modified: DateTime<Utc>) -> bool {
    if let Some(since) = request.get_date(IF_MODIFIED_SINCE) {
        if last_modified < since + Duration::seconds(1) {
            return false;
        }
    }
    true
}

/// 根据请求的`If-None-Match`标头判断`etag`是否仍然有效。
///
/// 候选列表以逗号分隔，`*`匹配任意实体。命中时把`ETag`写回响应
/// 标头并返回`false`，调用方应当响应`304 Not Modified`。
pub fn check_if_none_match(request: &Headers, response: &mut Headers, etag: &str) -> bool {
    if let Some(header_value) = request.get(IF_NONE_MATCH) {
        let satisfied = header_value.trim() == "*"
            || header_value
                .split(',')
                .any(|candidate| candidate.trim() == etag);
        if satisfied {
            response.set(ETAG, etag);
            return false;
        }
    }
    true
}

/// 根据请求信息判断客户端是否期望JSON响应。
///
/// 依次检查`X-Requested-With`（XMLHttpRequest、ApiCloud容器）、
/// CORS预检的`Access-Control-Request-Headers`、`User-Agent`，
/// 最后检查`Accept`标头或同名请求参数中是否包含`x-json`。
pub fn is_json_request(headers: &Headers, params: &HashMap<String, Value>) -> bool {
    if let Some(requested_with) = headers.get(X_REQUESTED_WITH) {
        let lower = requested_with.to_lowercase();
        if lower.ends_with("xmlhttprequest") || lower.contains("com.apicloud.apploader") {
            return true;
        }
    }
    // AngularJS的预检请求
    if let Some(cors_headers) = headers.get(ACCESS_CONTROL_REQUEST_HEADERS) {
        if cors_headers.to_lowercase().contains("x-requested-with") {
            return true;
        }
    }
    // ApiCloud的$api请求
    if let Some(user_agent) = headers.get(USER_AGENT) {
        if user_agent.to_lowercase().contains("apicloud") {
            return true;
        }
    }

    // 标头缺失时退回同名请求参数
    let accept = match headers.get(ACCEPT).filter(|a| strutil::is_not_blank(a)) {
        Some(a) => a.to_string(),
        None => match params.get(ACCEPT).and_then(Value::as_str) {
            Some(a) if strutil::is_not_blank(a) => a.to_string(),
            _ => return false,
        },
    };
    accept.to_lowercase().contains("x-json")
}

/// 提取带相同前缀的请求参数，结果按去除前缀后的名称排序。
///
/// 空列表参数被丢弃，单元素列表解开为其元素。前缀为空字符串时
/// 返回全部参数。
pub fn params_starting_with(
    params: &HashMap<String, Value>,
    prefix: &str,
) -> BTreeMap<String, Value> {
    let mut result = BTreeMap::new();
    for (name, value) in params {
        if let Some(unprefixed) = name.strip_prefix(prefix) {
            let value = match value {
                Value::List(items) if items.is_empty() => continue,
                Value::List(items) if items.len() == 1 => items[0].clone(),
                other => other.clone(),
            };
            result.insert(unprefixed.to_string(), value);
        }
    }
    result
}
