//! Body匹配策略：签名正则作用于条目正文

use std::borrow::Cow;

use crate::entry::Entry;
use super::pattern::Signature;
use super::strategy::SignatureMatcher;

pub struct BodyMatcher;

impl SignatureMatcher for BodyMatcher {
    fn name(&self) -> &'static str {
        "body"
    }

    fn subjects<'a>(&self, entry: &Entry<'a>, _signature: &Signature) -> Vec<Cow<'a, str>> {
        vec![Cow::Borrowed(entry.body())]
    }
}
