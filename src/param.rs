// Copyright (c) 2026 shaneyale (shaneyale86@gmail.com)
// All rights reserved.

//! # 工具库参数与常量模块
//!
//! 该模块定义了 `toolbox` 各个功能模块共享的常量和静态映射表，包括：
//! - 动态属性访问的命名约定前缀与路径分隔符。
//! - 常用 HTTP 标头字段名。
//! - 文件扩展名到 MIME 类型的映射表。
//! - 音频转码与二维码生成的缺省参数。

use lazy_static::lazy_static;
use std::collections::HashMap;

/// setter 访问器的命名前缀。属性 `age` 对应的 setter 为 `set_age`。
pub const SETTER_PREFIX: &str = "set_";

/// 嵌套属性路径的分隔符，例如 `role.id`。
pub const PROPERTY_PATH_SEPARATOR: char = '.';

/// 音频转码的缺省采样率（Hz）
pub const DEFAULT_SAMPLE_RATE: u32 = 16000;

/// 生成的二维码图像的缺省宽度（像素）
pub const QR_IMAGE_WIDTH: u32 = 300;

/// 生成的二维码图像的缺省高度（像素）
pub const QR_IMAGE_HEIGHT: u32 = 300;

/// 二维码四周的空白区宽度（以模块为单位，非负）
pub const QR_IMAGE_MARGIN: u32 = 1;

/// HTTP 日期的标准格式（IMF-fixdate，参考 RFC 7231）
pub const HTTP_DATE_FORMAT: &str = "%a, %d %b %Y %H:%M:%S GMT";

// --- 常用 HTTP 标头字段名 ---

pub const ACCEPT: &str = "Accept";
pub const ACCESS_CONTROL_REQUEST_HEADERS: &str = "Access-Control-Request-Headers";
pub const CACHE_CONTROL: &str = "Cache-Control";
pub const CONTENT_DISPOSITION: &str = "Content-Disposition";
pub const ETAG: &str = "ETag";
pub const EXPIRES: &str = "Expires";
pub const IF_MODIFIED_SINCE: &str = "If-Modified-Since";
pub const IF_NONE_MATCH: &str = "If-None-Match";
pub const LAST_MODIFIED: &str = "Last-Modified";
pub const PRAGMA: &str = "Pragma";
pub const USER_AGENT: &str = "User-Agent";
pub const X_REQUESTED_WITH: &str = "X-Requested-With";

lazy_static! {
    /// 文件后缀名到 MIME 类型（Media Type）的映射表。
    ///
    /// 用于根据扩展名推断 `Content-Type`，例如输入 `jpg` 返回 `image/jpeg`。
    pub static ref MIME_TYPES: HashMap<&'static str, &'static str> = {
        let mut map = HashMap::new();
        map.insert("aac", "audio/aac");
        map.insert("avi", "video/x-msvideo");
        map.insert("bin", "application/octet-stream");
        map.insert("bmp", "image/bmp");
        map.insert("css", "text/css;charset=utf-8");
        map.insert("csv", "text/csv");
        map.insert("doc", "application/msword");
        map.insert(
            "docx",
            "application/vnd.openxmlformats-officedocument.wordprocessingml.document",
        );
        map.insert("flac", "audio/flac");
        map.insert("gif", "image/gif");
        map.insert("gz", "application/gzip");
        map.insert("htm", "text/html;charset=utf-8");
        map.insert("html", "text/html;charset=utf-8");
        map.insert("ico", "image/x-icon");
        map.insert("jpeg", "image/jpeg");
        map.insert("jpg", "image/jpeg");
        map.insert("js", "text/javascript;charset=utf-8");
        map.insert("json", "application/json");
        map.insert("m4a", "audio/mp4");
        map.insert("mid", "audio/x-midi");
        map.insert("mkv", "video/x-matroska");
        map.insert("mp3", "audio/mpeg");
        map.insert("mp4", "video/mp4");
        map.insert("mpeg", "video/mpeg");
        map.insert("oga", "audio/ogg");
        map.insert("ogv", "video/ogg");
        map.insert("opus", "audio/opus");
        map.insert("pdf", "application/pdf");
        map.insert("png", "image/png");
        map.insert("ppt", "application/vnd.ms-powerpoint");
        map.insert(
            "pptx",
            "application/vnd.openxmlformats-officedocument.presentationml.presentation",
        );
        map.insert("rar", "application/x-rar-compressed");
        map.insert("svg", "image/svg+xml");
        map.insert("tar", "application/x-tar");
        map.insert("tif", "image/tiff");
        map.insert("tiff", "image/tiff");
        map.insert("txt", "text/plain");
        map.insert("wav", "audio/wav");
        map.insert("weba", "audio/webm");
        map.insert("webm", "video/webm");
        map.insert("webp", "image/webp");
        map.insert("xls", "application/vnd.ms-excel");
        map.insert(
            "xlsx",
            "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet",
        );
        map.insert("xml", "text/xml");
        map.insert("zip", "application/zip");
        map.insert("7z", "application/x-7z-compressed");
        map
    };
}

/// 根据扩展名返回 content type，无法识别的后缀返回兜底的二进制流类型。
///
/// 扩展名不区分大小写。
pub fn content_type(extension: &str) -> &'static str {
    MIME_TYPES
        .get(extension.to_ascii_lowercase().as_str())
        .copied()
        .unwrap_or("application/octet-stream")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_content_type_known_extensions() {
        assert_eq!(content_type("jpg"), "image/jpeg");
        assert_eq!(content_type("mp3"), "audio/mpeg");
        assert_eq!(content_type("json"), "application/json");
    }

    #[test]
    fn test_content_type_case_insensitive() {
        assert_eq!(content_type("JPG"), "image/jpeg");
        assert_eq!(content_type("Png"), "image/png");
    }

    #[test]
    fn test_content_type_unknown_falls_back() {
        assert_eq!(content_type("unknown-ext"), "application/octet-stream");
        assert_eq!(content_type(""), "application/octet-stream");
    }
}
