//! Header匹配策略：按 target 名称（忽略大小写）取响应头，签名正则作用于头部取值

use std::borrow::Cow;

use crate::entry::Entry;
use super::pattern::Signature;
use super::strategy::SignatureMatcher;

pub struct HeaderMatcher;

impl SignatureMatcher for HeaderMatcher {
    fn name(&self) -> &'static str {
        "header"
    }

    fn subjects<'a>(&self, entry: &Entry<'a>, signature: &Signature) -> Vec<Cow<'a, str>> {
        match signature.target() {
            Some(name) => entry.header_values(name).map(Cow::Borrowed).collect(),
            None => Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entry::{EntryKind, HarHeader};

    #[test]
    fn test_header_version() {
        let headers = vec![
            HarHeader::new("Server", "nginx/1.21.6"),
            HarHeader::new("x-powered-by", "PHP/8.1.2"),
        ];
        let entry = Entry::new("http://e.com/", "http://e.com/", &headers, "", EntryKind::Main);

        let php = vec![Signature::with_target("X-Powered-By", r"PHP/([\d.]+)").unwrap()];
        assert_eq!(HeaderMatcher.get_version(&entry, &php), Some("8.1.2".to_string()));

        let wrong_header = vec![Signature::with_target("Server", r"PHP/([\d.]+)").unwrap()];
        assert!(!HeaderMatcher.check_presence(&entry, &wrong_header));

        let untargeted = vec![Signature::new("nginx").unwrap()];
        assert!(!HeaderMatcher.check_presence(&entry, &untargeted));
    }
}
