//! 提取模块：XPath子集解析与HTML取值提取
pub mod xpath;
pub mod html_extractor;

pub use self::xpath::{XPathQuery, Predicate, Selection};
pub use self::html_extractor::HtmlExtractor;
