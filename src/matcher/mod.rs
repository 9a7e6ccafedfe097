//! 签名匹配模块：签名模型与 url/body/header/xpath 四种匹配策略
pub mod pattern;
pub mod strategy;
pub mod url;
pub mod body;
pub mod header;
pub mod xpath;

use std::fmt;
use std::sync::Arc;

use crate::plugin::SignatureKind;

pub use self::pattern::{RawSignature, Signature, SignaturePattern};
pub use self::strategy::SignatureMatcher;
pub use self::url::UrlMatcher;
pub use self::body::BodyMatcher;
pub use self::header::HeaderMatcher;
pub use self::xpath::XPathMatcher;

/// 匹配策略集合：签名类型 -> 匹配策略
/// 进程启动时构建一次，显式传给检测器
#[derive(Clone)]
pub struct MatcherSet {
    strategies: [Arc<dyn SignatureMatcher>; 4],
}

impl Default for MatcherSet {
    fn default() -> Self {
        Self {
            strategies: [
                Arc::new(UrlMatcher),
                Arc::new(BodyMatcher),
                Arc::new(HeaderMatcher),
                Arc::new(XPathMatcher),
            ],
        }
    }
}

impl MatcherSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// 替换某一签名类型的匹配策略
    pub fn with_strategy(mut self, kind: SignatureKind, strategy: Arc<dyn SignatureMatcher>) -> Self {
        self.strategies[Self::slot(kind)] = strategy;
        self
    }

    pub fn get(&self, kind: SignatureKind) -> &dyn SignatureMatcher {
        self.strategies[Self::slot(kind)].as_ref()
    }

    fn slot(kind: SignatureKind) -> usize {
        match kind {
            SignatureKind::Url => 0,
            SignatureKind::Body => 1,
            SignatureKind::Header => 2,
            SignatureKind::Xpath => 3,
        }
    }
}

impl fmt::Debug for MatcherSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MatcherSet")
            .field("strategies", &self.strategies.iter().map(|s| s.name()).collect::<Vec<_>>())
            .finish()
    }
}
