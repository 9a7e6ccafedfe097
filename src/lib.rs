//! rsdetectem - 基于浏览会话（HAR + 内联脚本）的网页软件组件及版本检测工具

// 导出全局错误类型
pub use self::error::{DetectemError, DetResult};

// 导出配置模块
pub use self::config::{GlobalConfig, ConfigManager, CustomConfigBuilder, PluginOrigin};

// 导出会话与条目模块
pub use self::entry::{
    Session, SplashSoftware, HarEntry, HarRequest, HarResponse, HarHeader, HarContent,
    Entry, EntryKind, EntryClassifier
};

// 导出插件模块核心接口
pub use self::plugin::{
    Plugin, SignatureKind, MatcherSource, PluginRegistry, PluginLoader, PluginCacheManager
};

// 导出签名匹配模块核心接口
pub use self::matcher::{Signature, SignaturePattern, SignatureMatcher, MatcherSet};

// 导出提取模块核心接口
pub use self::extractor::{HtmlExtractor, XPathQuery};

// 导出工具模块核心接口
pub use self::utils::{VersionExtractor, VersionComparator};

// 导出结果模块
pub use self::result::{DetectionResult, ResultType, OutputRecord, ResultCollection};

// 导出检测模块核心接口
pub use self::detector::{Detector, DetectionRun, VersionResolver, MostCompleteVersion};

// 声明所有子模块
pub mod config;
pub mod error;
pub mod entry;
pub mod plugin;
pub mod matcher;
pub mod extractor;
pub mod utils;
pub mod result;
pub mod detector;
