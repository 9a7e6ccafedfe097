//! 插件注册表
//! 构建后只读；版本/指示器/通用插件分组在构建时一次性计算

use std::collections::HashMap;

use tracing::debug;

use super::model::Plugin;
use crate::error::{DetResult, DetectemError};

/// 插件注册表（保持注册顺序）
#[derive(Debug, Clone, Default)]
pub struct PluginRegistry {
    plugins: Vec<Plugin>,
    by_name: HashMap<String, usize>,
    version_plugins: Vec<usize>,
    indicator_plugins: Vec<usize>,
    generic_plugins: Vec<usize>,
}

impl PluginRegistry {
    /// 构建注册表：校验插件并计算分组，名称重复直接报错
    pub fn new(plugins: Vec<Plugin>) -> DetResult<Self> {
        let mut registry = Self::default();

        for plugin in plugins {
            plugin.validate()?;
            if registry.by_name.contains_key(&plugin.name) {
                return Err(DetectemError::DuplicatePlugin(plugin.name));
            }

            let index = registry.plugins.len();
            if plugin.is_version_plugin() {
                registry.version_plugins.push(index);
            }
            if plugin.is_indicator_plugin() {
                registry.indicator_plugins.push(index);
            }
            if plugin.is_generic_plugin() {
                registry.generic_plugins.push(index);
            }
            registry.by_name.insert(plugin.name.clone(), index);
            registry.plugins.push(plugin);
        }

        debug!(
            "插件注册表构建完成：插件{}个，版本插件{}个，指示器插件{}个，通用插件{}个",
            registry.plugins.len(),
            registry.version_plugins.len(),
            registry.indicator_plugins.len(),
            registry.generic_plugins.len()
        );

        Ok(registry)
    }

    /// 按名称查找插件
    pub fn get(&self, name: &str) -> Option<&Plugin> {
        self.by_name.get(name).map(|&index| &self.plugins[index])
    }

    pub fn with_version_matchers(&self) -> impl Iterator<Item = &Plugin> + '_ {
        self.version_plugins.iter().map(move |&index| &self.plugins[index])
    }

    pub fn with_indicator_matchers(&self) -> impl Iterator<Item = &Plugin> + '_ {
        self.indicator_plugins.iter().map(move |&index| &self.plugins[index])
    }

    pub fn with_generic_matchers(&self) -> impl Iterator<Item = &Plugin> + '_ {
        self.generic_plugins.iter().map(move |&index| &self.plugins[index])
    }

    pub fn iter(&self) -> impl Iterator<Item = &Plugin> + '_ {
        self.plugins.iter()
    }

    pub fn len(&self) -> usize {
        self.plugins.len()
    }

    pub fn is_empty(&self) -> bool {
        self.plugins.is_empty()
    }

    /// 取出全部插件（用于缓存序列化）
    pub fn into_plugins(self) -> Vec<Plugin> {
        self.plugins
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plugins() -> Vec<Plugin> {
        serde_json::from_str(
            r#"[
                {"name": "jquery", "matchers": {"url": ["jquery-([\\d.]+)"]}},
                {"name": "react", "indicators": {"body": ["React"]}},
                {"name": "angular", "matchers": {"body": ["v([\\d.]+)"]}, "indicators": {"body": ["ng-app"]}},
                {"name": "wp-generic", "indicators": {"url": ["wp-content"]}, "generic": {"url": ["plugins/(\\w+)"]}},
                {"name": "no-groups"}
            ]"#,
        )
        .unwrap()
    }

    fn names<'a>(iter: impl Iterator<Item = &'a Plugin>) -> Vec<&'a str> {
        iter.map(|p| p.name.as_str()).collect()
    }

    #[test]
    fn test_partition_keeps_registry_order() {
        let registry = PluginRegistry::new(plugins()).unwrap();

        assert_eq!(registry.len(), 5);
        assert_eq!(names(registry.with_version_matchers()), vec!["jquery", "angular"]);
        assert_eq!(names(registry.with_indicator_matchers()), vec!["react", "angular"]);
        assert_eq!(names(registry.with_generic_matchers()), vec!["wp-generic"]);
        assert_eq!(
            names(registry.iter()),
            vec!["jquery", "react", "angular", "wp-generic", "no-groups"]
        );
    }

    #[test]
    fn test_get_by_name() {
        let registry = PluginRegistry::new(plugins()).unwrap();
        assert_eq!(registry.get("react").map(|p| p.name.as_str()), Some("react"));
        assert!(registry.get("vue").is_none());
    }

    #[test]
    fn test_duplicate_name_rejected() {
        let mut list = plugins();
        list.push(Plugin::new("jquery", "https://jquery.com"));
        assert!(matches!(
            PluginRegistry::new(list),
            Err(DetectemError::DuplicatePlugin(name)) if name == "jquery"
        ));
    }
}
