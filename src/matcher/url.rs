//! URL匹配策略：签名正则作用于条目响应URL

use std::borrow::Cow;

use crate::entry::Entry;
use super::pattern::Signature;
use super::strategy::SignatureMatcher;

pub struct UrlMatcher;

impl SignatureMatcher for UrlMatcher {
    fn name(&self) -> &'static str {
        "url"
    }

    fn subjects<'a>(&self, entry: &Entry<'a>, _signature: &Signature) -> Vec<Cow<'a, str>> {
        vec![Cow::Borrowed(entry.response_url())]
    }
}
