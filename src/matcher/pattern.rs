//! 签名模型
//! 加载插件时即完成正则编译，检测阶段只做匹配

use std::fmt;
use std::str::FromStr;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::{DetResult, DetectemError};
use crate::utils::VersionExtractor;

/// 取值模板分隔符：`<regex>;version:<template>`
pub const VALUE_TEMPLATE_MARKER: &str = ";version:";

/// 编译后的签名正则
#[derive(Debug, Clone)]
pub struct SignaturePattern {
    raw: String,
    regex: Regex,
    template: Option<String>,
}

impl SignaturePattern {
    pub fn compile(raw: &str) -> DetResult<Self> {
        let (expr, template) = match raw.split_once(VALUE_TEMPLATE_MARKER) {
            Some((expr, template)) => (expr, Some(template.to_string())),
            None => (raw, None),
        };

        if expr.is_empty() {
            return Err(DetectemError::InvalidSignature(format!("空正则：{}", raw)));
        }

        Ok(Self {
            raw: raw.to_string(),
            regex: Regex::new(expr)?,
            template,
        })
    }

    /// 原始签名文本（含模板）
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    pub fn is_match(&self, input: &str) -> bool {
        self.regex.is_match(input)
    }

    /// 匹配并提取取值（版本号 / 模块名）
    pub fn extract(&self, input: &str) -> Option<String> {
        let captures = self.regex.captures(input)?;
        VersionExtractor::extract(self.template.as_deref(), &captures)
    }
}

impl FromStr for SignaturePattern {
    type Err = DetectemError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::compile(s)
    }
}

impl fmt::Display for SignaturePattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

/// 签名的原始（序列化）形式
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawSignature {
    /// 仅正则：`"<regex>[;version:<template>]"`
    Pattern(String),
    /// 带目标：Header名称 或 XPath表达式
    Targeted { target: String, pattern: String },
}

/// 单条签名
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(try_from = "RawSignature", into = "RawSignature")]
pub struct Signature {
    target: Option<String>,
    pattern: SignaturePattern,
}

impl Signature {
    pub fn new(pattern: &str) -> DetResult<Self> {
        Ok(Self {
            target: None,
            pattern: SignaturePattern::compile(pattern)?,
        })
    }

    pub fn with_target(target: &str, pattern: &str) -> DetResult<Self> {
        Ok(Self {
            target: Some(target.to_string()),
            pattern: SignaturePattern::compile(pattern)?,
        })
    }

    pub fn target(&self) -> Option<&str> {
        self.target.as_deref()
    }

    pub fn pattern(&self) -> &SignaturePattern {
        &self.pattern
    }
}

impl TryFrom<RawSignature> for Signature {
    type Error = DetectemError;

    fn try_from(raw: RawSignature) -> Result<Self, Self::Error> {
        match raw {
            RawSignature::Pattern(pattern) => Self::new(&pattern),
            RawSignature::Targeted { target, pattern } => Self::with_target(&target, &pattern),
        }
    }
}

impl From<Signature> for RawSignature {
    fn from(signature: Signature) -> Self {
        match signature.target {
            Some(target) => RawSignature::Targeted {
                target,
                pattern: signature.pattern.raw,
            },
            None => RawSignature::Pattern(signature.pattern.raw),
        }
    }
}
