//! 匹配策略抽象

use std::borrow::Cow;

use crate::entry::Entry;
use super::pattern::Signature;

/// 签名匹配策略
/// 各策略只需给出签名在条目上的待匹配文本，取值/判定逻辑共用
pub trait SignatureMatcher: Send + Sync {
    /// 策略名称，用于日志输出
    fn name(&self) -> &'static str;

    /// 签名在条目上的待匹配文本（按出现顺序）
    fn subjects<'a>(&self, entry: &Entry<'a>, signature: &Signature) -> Vec<Cow<'a, str>>;

    /// 首个能提取出版本号的签名结果
    fn get_version(&self, entry: &Entry<'_>, signatures: &[Signature]) -> Option<String> {
        self.first_value(entry, signatures)
    }

    /// 任一签名命中即存在
    fn check_presence(&self, entry: &Entry<'_>, signatures: &[Signature]) -> bool {
        signatures.iter().any(|signature| {
            self.subjects(entry, signature)
                .iter()
                .any(|subject| signature.pattern().is_match(subject))
        })
    }

    /// 首个能提取出模块名的签名结果
    fn get_module_name(&self, entry: &Entry<'_>, signatures: &[Signature]) -> Option<String> {
        self.first_value(entry, signatures)
    }

    fn first_value(&self, entry: &Entry<'_>, signatures: &[Signature]) -> Option<String> {
        signatures.iter().find_map(|signature| {
            self.subjects(entry, signature)
                .iter()
                .find_map(|subject| signature.pattern().extract(subject))
        })
    }
}
