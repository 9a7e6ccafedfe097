//! 条目数据模型
//! 条目构建后不可变，分类在构建时确定

use std::fmt;

use serde::Serialize;

use super::session::{HarEntry, HarHeader};

/// 条目分类
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum EntryKind {
    /// 最终渲染的主文档
    Main,
    /// 其他资源
    Resource,
    /// 内联脚本
    InlineScript,
}

impl fmt::Display for EntryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            EntryKind::Main => "main",
            EntryKind::Resource => "resource",
            EntryKind::InlineScript => "inline_script",
        };
        f.write_str(s)
    }
}

/// 一次请求/响应交换，或合成的内联脚本单元
#[derive(Debug, Clone, Copy)]
pub struct Entry<'a> {
    request_url: &'a str,
    response_url: &'a str,
    headers: &'a [HarHeader],
    body: &'a str,
    kind: EntryKind,
}

impl<'a> Entry<'a> {
    pub fn new(
        request_url: &'a str,
        response_url: &'a str,
        headers: &'a [HarHeader],
        body: &'a str,
        kind: EntryKind,
    ) -> Self {
        Self {
            request_url,
            response_url,
            headers,
            body,
            kind,
        }
    }

    /// 从HAR条目构建（响应URL缺失时回退为请求URL）
    pub fn from_har(har_entry: &'a HarEntry, kind: EntryKind) -> Self {
        let request_url = har_entry.request.url.as_str();
        Self {
            request_url,
            response_url: har_entry.response.url.as_deref().unwrap_or(request_url),
            headers: &har_entry.response.headers,
            body: har_entry.response.content.text.as_deref().unwrap_or(""),
            kind,
        }
    }

    /// 合成内联脚本条目
    pub fn inline_script(requested_url: &'a str, script: &'a str) -> Self {
        Self {
            request_url: requested_url,
            response_url: requested_url,
            headers: &[],
            body: script,
            kind: EntryKind::InlineScript,
        }
    }

    pub fn request_url(&self) -> &'a str {
        self.request_url
    }

    pub fn response_url(&self) -> &'a str {
        self.response_url
    }

    pub fn headers(&self) -> &'a [HarHeader] {
        self.headers
    }

    /// 按名称（忽略大小写）获取响应头的所有取值
    pub fn header_values<'n>(&self, name: &'n str) -> impl Iterator<Item = &'a str> + 'n
    where
        'a: 'n,
    {
        self.headers
            .iter()
            .filter(move |h| h.name.eq_ignore_ascii_case(name))
            .map(|h| h.value.as_str())
    }

    pub fn body(&self) -> &'a str {
        self.body
    }

    pub fn kind(&self) -> EntryKind {
        self.kind
    }

    pub fn is_main(&self) -> bool {
        self.kind == EntryKind::Main
    }
}
