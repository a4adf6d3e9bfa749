// Copyright (c) 2026 shaneyale (shaneyale86@gmail.com)
// All rights reserved.

//! # Exception 模块
//!
//! 该模块定义了工具库在各类辅助操作中可能抛出的异常情况。
//!
//! ## 设计意图
//! - **错误分类**：涵盖了参数校验错误、动态属性访问错误、日期解析错误、
//!   外部命令执行错误以及编码/IO错误。
//! - **语义映射**：参数类错误（`InvalidArgument`）表示调用方的编程错误，
//!   应当立即同步失败；访问器调用错误（`Invocation`）携带底层原因信息，
//!   便于排查目标方法内部的失败。
//! - **用户友好**：通过实现 `std::fmt::Display`，确保错误信息可以被安全地
//!   记录到日志或展示给开发者。

use std::fmt;

/// 工具库操作过程中发生的异常类型。
///
/// 该枚举通常作为 `Result` 的 `Err` 部分返回，用于指示失败的具体原因。
#[derive(Debug, Clone)]
pub enum Exception {
    /// 调用方传入了非法参数（空白的属性名、全空的查找条件等）。
    /// 属于编程错误，不应在运行期恢复。
    InvalidArgument(String),
    /// 访问器调用失败。包括目标类型与访问器声明类型不符（非法状态），
    /// 以及访问器方法体自身执行失败，携带原始原因的描述信息。
    Invocation {
        /// 被调用的方法名
        method: String,
        /// 底层原因描述
        message: String,
    },
    /// 按命名约定派生的getter/setter不存在。仅在严格模式下作为错误抛出，
    /// 宽松模式下记录日志后静默跳过。
    NoSuchProperty {
        /// 属性所在的类型名称
        type_name: String,
        /// 查找的属性名称
        property: String,
    },
    /// 日期字符串无法按任何受支持的格式解析。
    UnparsableDate(String),
    /// 外部命令无法启动，或以失败状态退出。
    CommandFailed {
        /// 执行的命令
        command: String,
        /// 失败原因
        message: String,
    },
    /// 二维码等内容编码失败。
    EncodeFailed(String),
    /// 文件读写失败。携带底层IO错误的描述。
    Io(String),
}

impl Exception {
    /// 构造一个`InvalidArgument`异常的便捷方法。
    pub fn invalid(message: impl Into<String>) -> Self {
        Exception::InvalidArgument(message.into())
    }

    /// 构造一个`Invocation`异常的便捷方法。
    pub fn invocation(method: impl Into<String>, message: impl Into<String>) -> Self {
        Exception::Invocation {
            method: method.into(),
            message: message.into(),
        }
    }
}

/// 为 `Exception` 实现 `Display` 特性，使其支持字符串格式化输出。
///
/// 这些描述信息常用于系统日志（Logging）以及返回给开发者的调试信息中。
impl fmt::Display for Exception {
    /// 根据错误类型写入人类可读的描述文本。
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Exception::InvalidArgument(msg) => write!(f, "Invalid argument: {}", msg),
            Exception::Invocation { method, message } => {
                write!(f, "Failed to invoke accessor '{}': {}", method, message)
            }
            Exception::NoSuchProperty {
                type_name,
                property,
            } => write!(f, "Accessor not found: {}#{}", type_name, property),
            Exception::UnparsableDate(input) => {
                write!(f, "Can't parse '{}' as a date", input)
            }
            Exception::CommandFailed { command, message } => {
                write!(f, "Command '{}' failed: {}", command, message)
            }
            Exception::EncodeFailed(msg) => write!(f, "Encoding failed: {}", msg),
            Exception::Io(msg) => write!(f, "I/O error: {}", msg),
        }
    }
}

impl std::error::Error for Exception {}
