//! 签名分组路由
//! 主条目只适用 header/xpath 签名，其余条目只适用 url/body 签名

use crate::entry::{Entry, EntryKind};
use crate::matcher::Signature;
use crate::plugin::{MatcherSource, Plugin, SignatureKind};

const MAIN_KINDS: &[SignatureKind] = &[SignatureKind::Header, SignatureKind::Xpath];
const NON_MAIN_KINDS: &[SignatureKind] = &[SignatureKind::Url, SignatureKind::Body];

pub struct MatcherGroupRouter;

impl MatcherGroupRouter {
    /// 条目分类对应的可用签名类型
    pub fn eligible_kinds(kind: EntryKind) -> &'static [SignatureKind] {
        match kind {
            EntryKind::Main => MAIN_KINDS,
            EntryKind::Resource | EntryKind::InlineScript => NON_MAIN_KINDS,
        }
    }

    /// 取插件指定来源的签名分组，并按条目分类过滤（可能为空）
    pub fn route<'p>(
        entry: &Entry<'_>,
        plugin: &'p Plugin,
        source: MatcherSource,
    ) -> Vec<(SignatureKind, &'p [Signature])> {
        let Some(table) = plugin.matcher_table(source) else {
            return Vec::new();
        };
        let allowed = Self::eligible_kinds(entry.kind());

        table
            .iter()
            .filter(|(kind, _)| allowed.contains(kind))
            .map(|(kind, signatures)| (*kind, signatures.as_slice()))
            .collect()
    }
}
