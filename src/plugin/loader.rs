//! 插件加载管理器
//! 负责从本地JSON文件或远程URL（带本地缓存）加载插件注册表

use std::path::Path;
use std::time::Duration;

use reqwest::Client;
use serde::Deserialize;
use tracing::{debug, warn};

use super::cache::PluginCacheManager;
use super::model::Plugin;
use super::registry::PluginRegistry;
use crate::config::{GlobalConfig, PluginOrigin};
use crate::error::{DetResult, DetectemError};

/// 插件文件格式：插件数组，或 `{"plugins": [...]}`
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum PluginDocument {
    List(Vec<Plugin>),
    Wrapped { plugins: Vec<Plugin> },
}

impl PluginDocument {
    fn into_plugins(self) -> Vec<Plugin> {
        match self {
            PluginDocument::List(plugins) => plugins,
            PluginDocument::Wrapped { plugins } => plugins,
        }
    }
}

/// 插件加载管理器
pub struct PluginLoader;

impl PluginLoader {
    /// 按配置加载插件注册表
    pub async fn load(config: &GlobalConfig) -> DetResult<PluginRegistry> {
        let plugins = match &config.plugin_origin {
            PluginOrigin::LocalFile(path) => Self::load_local(path).await?,
            PluginOrigin::Remote(url) => Self::load_remote(config, url).await?,
        };
        PluginRegistry::new(plugins)
    }

    /// 从内存中的JSON文本构建注册表
    pub fn from_json_str(data: &str) -> DetResult<PluginRegistry> {
        PluginRegistry::new(Self::parse_plugins(data.as_bytes())?)
    }

    /// 解析插件JSON
    pub fn parse_plugins(data: &[u8]) -> DetResult<Vec<Plugin>> {
        let document: PluginDocument = serde_json::from_slice(data)
            .map_err(|e| DetectemError::PluginParseError(e.to_string()))?;
        Ok(document.into_plugins())
    }

    /// 加载本地插件文件
    async fn load_local(path: &Path) -> DetResult<Vec<Plugin>> {
        let data = tokio::fs::read(path).await.map_err(|e| {
            DetectemError::PluginLoadError(format!("读取插件文件 {} 失败：{}", path.display(), e))
        })?;
        let plugins = Self::parse_plugins(&data)?;
        debug!("从本地文件 {} 加载插件{}个", path.display(), plugins.len());
        Ok(plugins)
    }

    /// 加载远程插件（优先本地缓存，缓存失效则拉取远程）
    async fn load_remote(config: &GlobalConfig, url: &str) -> DetResult<Vec<Plugin>> {
        // 1. 优先加载本地缓存
        match PluginCacheManager::load_from_cache(config).await {
            Ok(plugins) => {
                debug!("从本地缓存加载插件成功");
                return Ok(plugins);
            }
            Err(e) => warn!("本地缓存不存在或损坏（{}），将拉取远程插件", e),
        }

        // 2. 拉取远程插件
        let plugins = Self::fetch_remote(config, url).await?;

        // 3. 缓存到本地
        if let Err(e) = PluginCacheManager::save_to_cache(config, &plugins).await {
            warn!("插件缓存到本地失败：{}", e);
        } else {
            debug!("远程插件已缓存到本地");
        }

        Ok(plugins)
    }

    /// 强制拉取远程插件文件
    pub async fn fetch_remote(config: &GlobalConfig, url: &str) -> DetResult<Vec<Plugin>> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.http_timeout))
            .build()?;

        debug!("开始拉取远程插件，URL：{}", url);
        let response = client
            .get(url)
            .header("User-Agent", concat!("rsdetectem/", env!("CARGO_PKG_VERSION")))
            .header("Accept-Encoding", "gzip, deflate")
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(DetectemError::PluginLoadError(format!(
                "URL {} 返回状态码 {}",
                url,
                response.status()
            )));
        }

        let bytes = response.bytes().await?;
        let plugins = Self::parse_plugins(&bytes)?;
        debug!("成功拉取远程插件，插件总数：{}", plugins.len());
        Ok(plugins)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ConfigManager;
    use std::path::PathBuf;

    const PLUGINS: &str = r#"[
        {"name": "jquery", "homepage": "https://jquery.com", "matchers": {"url": ["jquery-([\\d.]+)"]}},
        {"name": "react", "homepage": "https://react.dev", "indicators": {"body": ["React"]}}
    ]"#;

    #[test]
    fn test_parse_list_and_wrapped_documents() {
        assert_eq!(PluginLoader::parse_plugins(PLUGINS.as_bytes()).unwrap().len(), 2);

        let wrapped = format!(r#"{{"plugins": {}}}"#, PLUGINS);
        let registry = PluginLoader::from_json_str(&wrapped).unwrap();
        assert_eq!(registry.len(), 2);
        assert!(registry.get("react").is_some());
    }

    #[test]
    fn test_parse_invalid_document() {
        assert!(matches!(
            PluginLoader::parse_plugins(br#"{"name": "x"}"#),
            Err(DetectemError::PluginParseError(_))
        ));
    }

    #[tokio::test]
    async fn test_load_local_file() {
        let path = std::env::temp_dir().join(format!("rsdetectem_plugins_{}.json", std::process::id()));
        tokio::fs::write(&path, PLUGINS).await.unwrap();

        let config = ConfigManager::custom()
            .plugin_origin(PluginOrigin::LocalFile(path.clone()))
            .build();
        let registry = PluginLoader::load(&config).await.unwrap();
        assert_eq!(registry.len(), 2);

        tokio::fs::remove_file(&path).await.unwrap();
    }

    #[tokio::test]
    async fn test_load_missing_local_file() {
        let config = ConfigManager::custom()
            .plugin_origin(PluginOrigin::LocalFile(PathBuf::from("/nonexistent/rsdetectem/plugins.json")))
            .build();
        assert!(matches!(
            PluginLoader::load(&config).await,
            Err(DetectemError::PluginLoadError(_))
        ));
    }

    #[tokio::test]
    async fn test_remote_uses_cache_first() {
        let cache_path = std::env::temp_dir().join(format!("rsdetectem_remote_{}.mp", std::process::id()));
        let config = ConfigManager::custom()
            .plugin_origin(PluginOrigin::Remote("http://127.0.0.1:9/plugins.json".to_string()))
            .plugin_cache_path(cache_path)
            .build();

        let plugins = PluginLoader::parse_plugins(PLUGINS.as_bytes()).unwrap();
        PluginCacheManager::save_to_cache(&config, &plugins).await.unwrap();

        let registry = PluginLoader::load(&config).await.unwrap();
        assert_eq!(registry.len(), 2);

        PluginCacheManager::clear_cache(&config).await.unwrap();
    }
}
