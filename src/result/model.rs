//! 检测结果模型

use std::fmt;

use serde::{Deserialize, Serialize};

/// 结果类型
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResultType {
    Version,
    Indicator,
    Hint,
    Generic,
}

impl fmt::Display for ResultType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ResultType::Version => "version",
            ResultType::Indicator => "indicator",
            ResultType::Hint => "hint",
            ResultType::Generic => "generic",
        };
        f.write_str(s)
    }
}

/// 单条检测结果
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DetectionResult {
    pub name: String,
    pub version: Option<String>,
    pub homepage: String,
    pub from_url: String,
    #[serde(rename = "type")]
    pub result_type: ResultType,
}

impl DetectionResult {
    pub fn version(
        name: impl Into<String>,
        version: impl Into<String>,
        homepage: impl Into<String>,
        from_url: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            version: Some(version.into()),
            homepage: homepage.into(),
            from_url: from_url.into(),
            result_type: ResultType::Version,
        }
    }

    /// 无版本号的结果（指示器 / 提示 / 通用）
    pub fn unversioned(
        name: impl Into<String>,
        homepage: impl Into<String>,
        from_url: impl Into<String>,
        result_type: ResultType,
    ) -> Self {
        Self {
            name: name.into(),
            version: None,
            homepage: homepage.into(),
            from_url: from_url.into(),
            result_type,
        }
    }
}

impl fmt::Display for DetectionResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.version {
            Some(v) if !v.is_empty() => write!(f, "{} {}", self.name, v),
            _ => write!(f, "{}", self.name),
        }
    }
}

/// 最终输出记录，元数据字段仅在元数据模式下出现
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputRecord {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub homepage: Option<String>,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub result_type: Option<ResultType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub from_url: Option<String>,
}

impl OutputRecord {
    pub fn from_result(result: &DetectionResult, include_metadata: bool) -> Self {
        let mut record = Self {
            name: result.name.clone(),
            version: result.version.clone(),
            homepage: None,
            result_type: None,
            from_url: None,
        };
        if include_metadata {
            record.homepage = Some(result.homepage.clone());
            record.result_type = Some(result.result_type);
            record.from_url = Some(result.from_url.clone());
        }
        record
    }
}

impl fmt::Display for OutputRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.version {
            Some(v) => write!(f, "{} {}", self.name, v),
            None => write!(f, "{}", self.name),
        }
    }
}
