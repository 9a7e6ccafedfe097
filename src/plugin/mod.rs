//! 插件模块：负责插件的数据模型、注册表、加载与缓存
pub mod model;
pub mod registry;
pub mod cache;
pub mod loader;

// 导出核心接口
pub use self::model::{
    Plugin, SignatureKind, MatcherSource, MatcherTable, FileHashes, GenericInformation
};
pub use self::registry::PluginRegistry;
pub use self::loader::PluginLoader;
pub use self::cache::PluginCacheManager;
