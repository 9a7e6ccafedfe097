//! XPath匹配策略：target 为XPath子集表达式，签名正则作用于选中的每个取值

use std::borrow::Cow;

use tracing::warn;

use crate::entry::Entry;
use crate::extractor::{HtmlExtractor, XPathQuery};
use super::pattern::Signature;
use super::strategy::SignatureMatcher;

pub struct XPathMatcher;

impl SignatureMatcher for XPathMatcher {
    fn name(&self) -> &'static str {
        "xpath"
    }

    fn subjects<'a>(&self, entry: &Entry<'a>, signature: &Signature) -> Vec<Cow<'a, str>> {
        let Some(target) = signature.target() else {
            return Vec::new();
        };
        match target.parse::<XPathQuery>() {
            Ok(query) => HtmlExtractor::select(entry.body(), &query)
                .into_iter()
                .map(Cow::Owned)
                .collect(),
            Err(e) => {
                warn!("{} 签名跳过：{}", self.name(), e);
                Vec::new()
            }
        }
    }
}
