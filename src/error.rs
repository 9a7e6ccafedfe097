//! 全局错误类型定义

use thiserror::Error;
use regex::Error as RegexError;
use serde_json::Error as SerdeJsonError;
use std::io::Error as IoError;

#[derive(Error, Debug)]
pub enum DetectemError {
    // 插件相关错误
    #[error("插件加载失败：{0}")]
    PluginLoadError(String),
    #[error("插件解析失败：{0}")]
    PluginParseError(String),
    #[error("插件缓存失败：{0}")]
    PluginCacheError(String),
    #[error("插件名称重复：{0}")]
    DuplicatePlugin(String),

    // 签名编译相关错误
    #[error("正则编译失败：{0}")]
    RegexCompileError(#[from] RegexError),
    #[error("无效签名：{0}")]
    InvalidSignature(String),
    #[error("无效XPath表达式：{0}")]
    InvalidXPath(String),

    // 会话输入错误
    #[error("会话数据解析失败：{0}")]
    SessionParseError(String),

    // 网络相关错误
    #[error("网络请求失败：{0}")]
    HttpError(#[from] reqwest::Error),

    // 序列化/反序列化错误
    #[error("JSON解析失败：{0}")]
    JsonError(#[from] SerdeJsonError),
    #[error("MessagePack序列化/反序列化失败：{0}")]
    MsgPackError(String),

    // 基础错误
    #[error("IO操作失败：{0}")]
    IoError(#[from] IoError),
}

// 全局Result类型
pub type DetResult<T> = Result<T, DetectemError>;
