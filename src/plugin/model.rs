//! 插件数据模型定义
//! 插件为只读的软件签名描述，支持序列化/反序列化

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::entry::Entry;
use crate::error::{DetResult, DetectemError};
use crate::extractor::XPathQuery;
use crate::matcher::{MatcherSet, Signature};

/// 签名类型
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SignatureKind {
    Url,
    Body,
    Header,
    Xpath,
}

impl SignatureKind {
    pub const ALL: [SignatureKind; 4] = [
        SignatureKind::Url,
        SignatureKind::Body,
        SignatureKind::Header,
        SignatureKind::Xpath,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SignatureKind::Url => "url",
            SignatureKind::Body => "body",
            SignatureKind::Header => "header",
            SignatureKind::Xpath => "xpath",
        }
    }

    /// 是否需要 target（Header名称 / XPath表达式）
    pub fn requires_target(&self) -> bool {
        matches!(self, SignatureKind::Header | SignatureKind::Xpath)
    }
}

impl fmt::Display for SignatureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 签名分组来源
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MatcherSource {
    /// 版本签名
    Matchers,
    /// 存在性签名
    Indicators,
    /// 模块名签名
    ModularMatchers,
    /// 通用插件的产品名签名
    Generic,
}

impl MatcherSource {
    pub fn as_str(&self) -> &'static str {
        match self {
            MatcherSource::Matchers => "matchers",
            MatcherSource::Indicators => "indicators",
            MatcherSource::ModularMatchers => "modular_matchers",
            MatcherSource::Generic => "generic",
        }
    }
}

impl fmt::Display for MatcherSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 签名分组表：签名类型 -> 签名列表（按 url/body/header/xpath 顺序迭代）
pub type MatcherTable = BTreeMap<SignatureKind, Vec<Signature>>;

/// 文件哈希表：URL子串 -> (版本号 -> SHA-256十六进制摘要)
pub type FileHashes = BTreeMap<String, BTreeMap<String, String>>;

/// 通用插件识别出的产品信息
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenericInformation {
    pub name: String,
    pub homepage: String,
}

/// 软件签名插件
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Plugin {
    pub name: String,
    #[serde(default)]
    pub homepage: String,
    #[serde(default)]
    pub is_modular: bool,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub hints: Vec<String>,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub file_hashes: FileHashes,

    // 签名分组
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub matchers: Option<MatcherTable>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub indicators: Option<MatcherTable>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub modular_matchers: Option<MatcherTable>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub generic: Option<MatcherTable>,
    /// 通用插件主页模板，`{name}` 替换为识别出的产品名
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub generic_homepage: Option<String>,
}

impl Plugin {
    /// 创建空插件（无任何签名分组）
    pub fn new(name: impl Into<String>, homepage: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            homepage: homepage.into(),
            is_modular: false,
            hints: Vec::new(),
            file_hashes: FileHashes::new(),
            matchers: None,
            indicators: None,
            modular_matchers: None,
            generic: None,
            generic_homepage: None,
        }
    }

    /// 获取指定来源的签名分组
    pub fn matcher_table(&self, source: MatcherSource) -> Option<&MatcherTable> {
        match source {
            MatcherSource::Matchers => self.matchers.as_ref(),
            MatcherSource::Indicators => self.indicators.as_ref(),
            MatcherSource::ModularMatchers => self.modular_matchers.as_ref(),
            MatcherSource::Generic => self.generic.as_ref(),
        }
    }

    pub fn is_version_plugin(&self) -> bool {
        self.matchers.is_some()
    }

    pub fn is_generic_plugin(&self) -> bool {
        self.generic.is_some()
    }

    /// 指示器插件：有 indicators 分组且不是通用插件
    pub fn is_indicator_plugin(&self) -> bool {
        self.indicators.is_some() && !self.is_generic_plugin()
    }

    /// 校验签名完整性：header/xpath 签名必须带 target，xpath 表达式必须可解析
    pub fn validate(&self) -> DetResult<()> {
        if self.name.trim().is_empty() {
            return Err(DetectemError::PluginParseError("插件名称为空".to_string()));
        }

        let sources = [
            MatcherSource::Matchers,
            MatcherSource::Indicators,
            MatcherSource::ModularMatchers,
            MatcherSource::Generic,
        ];
        for source in sources {
            let Some(table) = self.matcher_table(source) else {
                continue;
            };
            for (kind, signatures) in table {
                if !kind.requires_target() {
                    continue;
                }
                for signature in signatures {
                    let Some(target) = signature.target() else {
                        return Err(DetectemError::InvalidSignature(format!(
                            "插件 {} 的 {}.{} 签名缺少target：{}",
                            self.name,
                            source,
                            kind,
                            signature.pattern()
                        )));
                    };
                    if *kind == SignatureKind::Xpath {
                        target.parse::<XPathQuery>()?;
                    }
                }
            }
        }

        for (file, versions) in &self.file_hashes {
            for (version, digest) in versions {
                if digest.len() != 64 || !digest.bytes().all(|b| b.is_ascii_hexdigit()) {
                    return Err(DetectemError::PluginParseError(format!(
                        "插件 {} 文件 {} 版本 {} 的哈希不是64位十六进制：{}",
                        self.name, file, version, digest
                    )));
                }
            }
        }

        Ok(())
    }

    /// 通用插件：从条目内容动态识别产品名
    pub fn get_information(&self, entry: &Entry<'_>, matchers: &MatcherSet) -> Option<GenericInformation> {
        let table = self.generic.as_ref()?;
        let name = table.iter().find_map(|(kind, signatures)| {
            matchers.get(*kind).get_module_name(entry, signatures)
        })?;

        let homepage = match &self.generic_homepage {
            Some(template) => template.replace("{name}", &name),
            None => self.homepage.clone(),
        };

        Some(GenericInformation { name, homepage })
    }
}
