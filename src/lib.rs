// Copyright (c) 2026 shaneyale (shaneyale86@gmail.com)
// All rights reserved.

//! # 通用工具箱
//!
//! 一组相互独立、无共享状态的辅助工具，包括：
//! - 按名称的动态属性访问与类型元数据缓存
//! - 字符串处理与命名风格转换
//! - 随机字符串生成、日期解析、正则校验
//! - HTTP标头辅助、扁平参数表的层级化
//! - 基于ffmpeg的音频转码、二维码生成、汉字转拼音

// --- 模块定义 ---
pub mod audio; // 音频转码与外部命令执行
pub mod cache; // 记忆化缓存实现
pub mod chinese; // 汉字转拼音
pub mod config; // 配置解析与管理
pub mod dateutil; // 日期解析与格式化
pub mod exception; // 自定义异常与错误处理
pub mod fileio; // 文件缓冲读写
pub mod param; // 全局常量与静态参数
pub mod qrencode; // 二维码图像生成
pub mod randutil; // 随机字符串生成
pub mod reflect; // 动态属性访问与元数据缓存
pub mod strutil; // 字符串工具函数
pub mod validation; // 正则格式校验
pub mod valuemap; // 扁平参数表层级化
pub mod webutil; // HTTP标头辅助

pub use audio::AudioConverter;
pub use cache::MetaCache;
pub use config::UtilConfig;
pub use exception::Exception;
pub use reflect::{MetaRegistry, Reflective, TypeDescriptor, Value};
pub use webutil::Headers;
