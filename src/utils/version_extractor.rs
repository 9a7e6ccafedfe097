//! 取值提取工具模块
//! 负责从正则捕获结果中提取签名取值（版本号 / 模块名 / 产品名）
//! 支持 \1/\2 或 $1/$2 两种分组引用格式，自动过滤无效取值

use once_cell::sync::Lazy;
use regex::{Captures, Regex};

/// 未被替换的分组占位符
static RESIDUAL_PLACEHOLDER: Lazy<Regex> = Lazy::new(|| Regex::new(r"[\\$]\d").unwrap());

/// 取值提取工具类
pub struct VersionExtractor;

impl VersionExtractor {
    /// 按签名规则提取取值
    ///
    /// # 参数
    /// - `template`: 取值模板，为 None 时直接取第1个捕获分组
    /// - `captures`: 正则捕获结果
    ///
    /// # 返回值
    /// - `Some(String)`: 去除首尾空白后的非空取值
    /// - `None`: 无捕获分组、分组为空或模板替换失败
    pub fn extract(template: Option<&str>, captures: &Captures) -> Option<String> {
        match template {
            Some(template) => Self::render(template, captures),
            None => captures
                .get(1)
                .map(|m| m.as_str().trim())
                .filter(|v| !v.is_empty())
                .map(str::to_string),
        }
    }

    /// 用捕获分组渲染模板
    /// 分组号从大到小替换，避免 \1 误替换 \10 的前缀
    pub fn render(template: &str, captures: &Captures) -> Option<String> {
        if template.trim().is_empty() {
            return None;
        }

        let mut value = template.to_string();
        let mut replaced = false;

        for group_index in (1..captures.len()).rev() {
            let placeholder_backslash = format!("\\{}", group_index);
            let placeholder_dollar = format!("${}", group_index);
            if !value.contains(&placeholder_backslash) && !value.contains(&placeholder_dollar) {
                continue;
            }

            let matched = captures.get(group_index).map(|m| m.as_str().trim()).unwrap_or("");
            if !matched.is_empty() {
                replaced = true;
            }
            value = value.replace(&placeholder_backslash, matched);
            value = value.replace(&placeholder_dollar, matched);
        }

        let final_value = value.trim().to_string();
        // 未替换 / 为空 / 残留占位符 均视为无效
        if !replaced || final_value.is_empty() || RESIDUAL_PLACEHOLDER.is_match(&final_value) {
            None
        } else {
            Some(final_value)
        }
    }
}
