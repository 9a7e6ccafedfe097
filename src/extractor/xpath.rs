//! XPath子集解析
//! 支持：`//tag` 或 `//*`，谓词 `[@a]`、`[@a='v']`、`[contains(@a,'v')]`（可重复），
//! 结尾可选 `/@attr` 或 `/text()`

use std::str::FromStr;

use crate::error::DetectemError;

/// 元素谓词
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Predicate {
    Exists(String),
    Equals(String, String),
    Contains(String, String),
}

impl Predicate {
    /// 按属性列表判断谓词是否成立
    pub fn matches<'a, I>(&self, mut attrs: I) -> bool
    where
        I: Iterator<Item = (&'a str, &'a str)>,
    {
        match self {
            Predicate::Exists(name) => attrs.any(|(k, _)| k == name),
            Predicate::Equals(name, value) => attrs.any(|(k, v)| k == name && v == value),
            Predicate::Contains(name, value) => attrs.any(|(k, v)| k == name && v.contains(value.as_str())),
        }
    }
}

/// 选取内容
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selection {
    /// 元素本身（取值为空串）
    Element,
    Attribute(String),
    Text,
}

/// 解析后的XPath查询
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct XPathQuery {
    /// None 表示 `*`
    pub tag: Option<String>,
    pub predicates: Vec<Predicate>,
    pub selection: Selection,
}

impl XPathQuery {
    /// 标签名是否命中
    pub fn matches_tag(&self, tag: &str) -> bool {
        self.tag.as_deref().map_or(true, |t| t.eq_ignore_ascii_case(tag))
    }
}

impl FromStr for XPathQuery {
    type Err = DetectemError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = |reason: &str| DetectemError::InvalidXPath(format!("{}：{}", reason, s));

        let rest = s.trim().strip_prefix("//").ok_or_else(|| invalid("必须以 // 开头"))?;

        let tag_end = rest.find(['[', '/']).unwrap_or(rest.len());
        let tag = &rest[..tag_end];
        if tag.is_empty() || !(tag == "*" || tag.chars().all(is_name_char)) {
            return Err(invalid("标签名无效"));
        }

        let mut remaining = &rest[tag_end..];
        let mut predicates = Vec::new();
        while remaining.starts_with('[') {
            let close = find_predicate_end(remaining).ok_or_else(|| invalid("谓词未闭合"))?;
            predicates.push(parse_predicate(&remaining[1..close]).ok_or_else(|| invalid("谓词无效"))?);
            remaining = &remaining[close + 1..];
        }

        let selection = match remaining {
            "" => Selection::Element,
            "/text()" => Selection::Text,
            other => match other.strip_prefix("/@") {
                Some(attr) if !attr.is_empty() && attr.chars().all(is_name_char) => {
                    Selection::Attribute(attr.to_ascii_lowercase())
                }
                _ => return Err(invalid("不支持的路径结尾")),
            },
        };

        Ok(Self {
            tag: (tag != "*").then(|| tag.to_ascii_lowercase()),
            predicates,
            selection,
        })
    }
}

fn is_name_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | ':')
}

/// 找到与开头 `[` 匹配的 `]`，跳过引号内字符
fn find_predicate_end(s: &str) -> Option<usize> {
    let mut quote: Option<char> = None;
    for (i, c) in s.char_indices().skip(1) {
        match quote {
            Some(q) if c == q => quote = None,
            Some(_) => {}
            None if c == '\'' || c == '"' => quote = Some(c),
            None if c == ']' => return Some(i),
            None => {}
        }
    }
    None
}

fn parse_predicate(inner: &str) -> Option<Predicate> {
    let inner = inner.trim();

    if let Some(args) = inner.strip_prefix("contains(").and_then(|a| a.strip_suffix(')')) {
        let (attr, literal) = args.split_once(',')?;
        return Some(Predicate::Contains(parse_attr(attr)?, parse_literal(literal)?));
    }

    match inner.split_once('=') {
        Some((attr, literal)) => Some(Predicate::Equals(parse_attr(attr)?, parse_literal(literal)?)),
        None => Some(Predicate::Exists(parse_attr(inner)?)),
    }
}

fn parse_attr(s: &str) -> Option<String> {
    let name = s.trim().strip_prefix('@')?;
    (!name.is_empty() && name.chars().all(is_name_char)).then(|| name.to_ascii_lowercase())
}

fn parse_literal(s: &str) -> Option<String> {
    let s = s.trim();
    let quote = s.chars().next().filter(|c| *c == '\'' || *c == '"')?;
    let body = s.strip_prefix(quote)?.strip_suffix(quote)?;
    (!body.contains(quote)).then(|| body.to_string())
}
