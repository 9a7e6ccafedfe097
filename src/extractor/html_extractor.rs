//! HTML XPath取值提取器
//! 基于html5ever流式分词，按XPath子集选取元素的属性 / 文本

use std::cell::RefCell;
use html5ever::tokenizer::{
    BufferQueue, Tag, TagKind, Token, TokenSink, TokenSinkResult, Tokenizer, TokenizerOpts
};
use markup5ever::interface::Attribute;
use tendril::StrTendril;

use super::xpath::{Selection, XPathQuery};

/// 无结束标签的空元素
const VOID_ELEMENTS: &[&str] = &[
    "area", "base", "br", "col", "embed", "hr", "img", "input",
    "link", "meta", "param", "source", "track", "wbr",
];

/// 正在收集文本的元素
#[derive(Debug)]
struct TextCapture {
    tag: String,
    depth: usize,
    buffer: String,
}

#[derive(Debug)]
pub struct HtmlExtractor {
    query: XPathQuery,
    values: RefCell<Vec<String>>,
    capture: RefCell<Option<TextCapture>>,
}

impl TokenSink for HtmlExtractor {
    type Handle = ();

    fn process_token(&self, token: Token, _line: u64) -> TokenSinkResult<()> {
        match token {
            Token::TagToken(Tag { kind: TagKind::StartTag, name, self_closing, attrs, .. }) => {
                self.on_start_tag(&name, self_closing, &attrs);
            }
            Token::TagToken(Tag { kind: TagKind::EndTag, name, .. }) => {
                self.on_end_tag(&name);
            }
            Token::CharacterTokens(text) => {
                if let Some(capture) = self.capture.borrow_mut().as_mut() {
                    capture.buffer.push_str(&text);
                }
            }
            Token::EOFToken => self.flush_capture(),
            _ => {}
        }
        TokenSinkResult::Continue
    }
}

impl HtmlExtractor {
    /// 创建提取器
    pub fn new(query: XPathQuery) -> Self {
        Self {
            query,
            values: RefCell::new(Vec::new()),
            capture: RefCell::new(None),
        }
    }

    /// 在HTML上执行查询，按文档顺序返回所有选中的取值
    pub fn select(html: &str, query: &XPathQuery) -> Vec<String> {
        let tokenizer = Tokenizer::new(Self::new(query.clone()), TokenizerOpts::default());
        let queue = BufferQueue::default();
        queue.push_back(StrTendril::from(html));

        let _ = tokenizer.feed(&queue);
        tokenizer.end();

        tokenizer.sink.values.into_inner()
    }

    fn on_start_tag(&self, tag: &str, self_closing: bool, attrs: &[Attribute]) {
        // 收集文本期间遇到同名嵌套元素，增加深度
        if let Some(capture) = self.capture.borrow_mut().as_mut() {
            if capture.tag == tag && !self_closing {
                capture.depth += 1;
            }
            return;
        }

        if !self.query.matches_tag(tag) {
            return;
        }
        let all_match = self.query.predicates.iter().all(|p| {
            p.matches(attrs.iter().map(|a| (&*a.name.local, &*a.value)))
        });
        if !all_match {
            return;
        }

        match &self.query.selection {
            Selection::Element => self.values.borrow_mut().push(String::new()),
            Selection::Attribute(name) => {
                if let Some(attr) = attrs.iter().find(|a| &*a.name.local == name.as_str()) {
                    self.values.borrow_mut().push(attr.value.to_string());
                }
            }
            Selection::Text => {
                if self_closing || VOID_ELEMENTS.contains(&tag) {
                    self.values.borrow_mut().push(String::new());
                } else {
                    *self.capture.borrow_mut() = Some(TextCapture {
                        tag: tag.to_string(),
                        depth: 1,
                        buffer: String::new(),
                    });
                }
            }
        }
    }

    fn on_end_tag(&self, tag: &str) {
        let finished = match self.capture.borrow_mut().as_mut() {
            Some(capture) if capture.tag == tag => {
                capture.depth -= 1;
                capture.depth == 0
            }
            _ => false,
        };
        if finished {
            self.flush_capture();
        }
    }

    fn flush_capture(&self) {
        if let Some(capture) = self.capture.borrow_mut().take() {
            self.values.borrow_mut().push(capture.buffer.trim().to_string());
        }
    }
}
