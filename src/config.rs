//! 全局配置管理,存储所有可配置项

use std::path::PathBuf;

use tracing::warn;

/// 插件库来源
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PluginOrigin {
    /// 本地JSON插件文件
    LocalFile(PathBuf),
    /// 远程JSON插件文件（带本地MessagePack缓存）
    Remote(String),
}

/// 全局配置
#[derive(Debug, Clone)]
pub struct GlobalConfig {
    // 插件库来源
    pub plugin_origin: PluginOrigin,
    // 插件缓存路径（仅远程来源使用）
    pub plugin_cache_path: PathBuf,
    // 超时配置（单位：秒）
    pub http_timeout: u64,
    // 是否启用详细日志
    pub verbose: bool,
}

impl Default for GlobalConfig {
    fn default() -> Self {
        Self {
            plugin_origin: PluginOrigin::LocalFile(PathBuf::from("plugins.json")),
            plugin_cache_path: PathBuf::from("detectem_plugins.mp"),
            http_timeout: 30,
            verbose: false,
        }
    }
}

/// 环境变量：本地插件文件
pub const ENV_PLUGIN_FILE: &str = "DET_PLUGIN_FILE";
/// 环境变量：远程插件URL（优先于本地文件）
pub const ENV_PLUGIN_URL: &str = "DET_PLUGIN_URL";
/// 环境变量：插件缓存路径
pub const ENV_PLUGIN_CACHE: &str = "DET_PLUGIN_CACHE";
/// 环境变量：HTTP超时（秒）
pub const ENV_HTTP_TIMEOUT: &str = "DET_HTTP_TIMEOUT";

/// 配置管理器
pub struct ConfigManager;

impl ConfigManager {
    /// 获取默认配置
    pub fn get_default() -> GlobalConfig {
        GlobalConfig::default()
    }

    /// 默认配置 + 环境变量覆盖
    pub fn from_env() -> GlobalConfig {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// 自定义配置
    pub fn custom() -> CustomConfigBuilder {
        CustomConfigBuilder::new()
    }

    fn from_lookup<F>(lookup: F) -> GlobalConfig
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut builder = CustomConfigBuilder::new();

        if let Some(path) = lookup(ENV_PLUGIN_FILE) {
            builder = builder.plugin_origin(PluginOrigin::LocalFile(PathBuf::from(path)));
        }
        if let Some(url) = lookup(ENV_PLUGIN_URL) {
            builder = builder.plugin_origin(PluginOrigin::Remote(url));
        }
        if let Some(path) = lookup(ENV_PLUGIN_CACHE) {
            builder = builder.plugin_cache_path(PathBuf::from(path));
        }
        if let Some(raw) = lookup(ENV_HTTP_TIMEOUT) {
            match raw.trim().parse::<u64>() {
                Ok(timeout) => builder = builder.http_timeout(timeout),
                Err(e) => warn!("{} 取值无效：{}，错误：{}，使用默认值", ENV_HTTP_TIMEOUT, raw, e),
            }
        }

        builder.build()
    }
}

/// 配置构建器（便于自定义配置）
#[derive(Debug, Clone)]
pub struct CustomConfigBuilder {
    config: GlobalConfig,
}

impl Default for CustomConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl CustomConfigBuilder {
    pub fn new() -> Self {
        Self {
            config: GlobalConfig::default(),
        }
    }

    pub fn plugin_origin(mut self, origin: PluginOrigin) -> Self {
        self.config.plugin_origin = origin;
        self
    }

    pub fn plugin_cache_path(mut self, path: PathBuf) -> Self {
        self.config.plugin_cache_path = path;
        self
    }

    pub fn http_timeout(mut self, timeout: u64) -> Self {
        self.config.http_timeout = timeout;
        self
    }

    pub fn verbose(mut self, verbose: bool) -> Self {
        self.config.verbose = verbose;
        self
    }

    pub fn build(self) -> GlobalConfig {
        self.config
    }
}
