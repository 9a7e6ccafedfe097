//! 插件缓存管理
//! 仅处理插件列表的本地序列化（MessagePack）和反序列化

use serde_json::Value;
use tracing::debug;

use super::model::Plugin;
use crate::error::{DetResult, DetectemError};
use crate::config::GlobalConfig;

/// 插件缓存管理器
pub struct PluginCacheManager;

impl PluginCacheManager {
    /// 从本地缓存加载插件列表
    pub async fn load_from_cache(config: &GlobalConfig) -> DetResult<Vec<Plugin>> {
        let cache_path = &config.plugin_cache_path;
        let cache_data = tokio::fs::read(cache_path).await?;

        // 经由JSON值中转，缓存结构与JSON插件文件保持一致
        let value: Value = rmp_serde::from_slice(&cache_data)
            .map_err(|e| DetectemError::MsgPackError(format!("反序列化失败：{}", e)))?;
        let plugins: Vec<Plugin> = serde_json::from_value(value)
            .map_err(|e| DetectemError::PluginCacheError(format!("缓存内容无效：{}", e)))?;

        debug!("缓存文件反序列化成功，插件数：{}", plugins.len());

        Ok(plugins)
    }

    /// 将插件列表缓存到本地
    pub async fn save_to_cache(config: &GlobalConfig, plugins: &[Plugin]) -> DetResult<()> {
        let cache_path = &config.plugin_cache_path;
        let value = serde_json::to_value(plugins)?;
        let cache_data = rmp_serde::to_vec(&value)
            .map_err(|e| DetectemError::MsgPackError(format!("序列化失败：{}", e)))?;

        debug!("插件列表序列化成功，序列化后数据大小：{} 字节", cache_data.len());

        tokio::fs::write(cache_path, cache_data).await?;
        Ok(())
    }

    /// 清除本地缓存
    pub async fn clear_cache(config: &GlobalConfig) -> DetResult<()> {
        let cache_path = &config.plugin_cache_path;
        if tokio::fs::try_exists(cache_path).await? {
            tokio::fs::remove_file(cache_path).await?;
        }
        Ok(())
    }
}
