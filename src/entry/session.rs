//! 会话输入数据模型
//! 渲染后端产出的抓取会话：HAR条目、内联脚本、渲染端识别出的软件

use serde::{Deserialize, Serialize};

use crate::error::{DetResult, DetectemError};

/// 一次抓取会话
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Session {
    /// 最初请求的URL
    #[serde(rename = "requestedUrl", alias = "requested_url")]
    pub requested_url: String,
    /// 渲染后端直接识别出的软件
    #[serde(default)]
    pub softwares: Vec<SplashSoftware>,
    #[serde(default)]
    pub har: Vec<HarEntry>,
    /// 内联脚本源码
    #[serde(default)]
    pub scripts: Vec<String>,
}

impl Session {
    /// 从JSON字符串解析会话（缺失必填字段直接报错）
    pub fn from_json_str(data: &str) -> DetResult<Self> {
        serde_json::from_str(data).map_err(|e| DetectemError::SessionParseError(e.to_string()))
    }

    /// 从JSON字节解析会话
    pub fn from_json_slice(data: &[u8]) -> DetResult<Self> {
        serde_json::from_slice(data).map_err(|e| DetectemError::SessionParseError(e.to_string()))
    }
}

/// 渲染后端上报的软件
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SplashSoftware {
    pub name: String,
    pub version: String,
}

/// HAR条目
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HarEntry {
    pub request: HarRequest,
    pub response: HarResponse,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HarRequest {
    pub url: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct HarResponse {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(default)]
    pub headers: Vec<HarHeader>,
    #[serde(default)]
    pub content: HarContent,
}

impl HarResponse {
    /// 获取首个非空的Location响应头（名称忽略大小写）
    pub fn location(&self) -> Option<&str> {
        self.headers
            .iter()
            .find(|h| h.name.eq_ignore_ascii_case("location"))
            .map(|h| h.value.as_str())
            .filter(|v| !v.is_empty())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HarHeader {
    pub name: String,
    pub value: String,
}

impl HarHeader {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct HarContent {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}
