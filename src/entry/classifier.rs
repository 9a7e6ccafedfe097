//! 条目分类器
//! 将抓取会话转换为有序的已分类条目序列：
//! HAR条目在前（保持原顺序），内联脚本条目在后（保持原顺序）

use tracing::{debug, warn};
use url::Url;

use super::model::{Entry, EntryKind};
use super::session::{HarEntry, Session};

/// 条目分类器
pub struct EntryClassifier;

impl EntryClassifier {
    /// 分类会话中的所有条目
    pub fn classify(session: &Session) -> Vec<Entry<'_>> {
        let main_index = Self::find_main_index(&session.har);
        let mut entries = Vec::with_capacity(session.har.len() + session.scripts.len());

        for (index, har_entry) in session.har.iter().enumerate() {
            let kind = if main_index == Some(index) {
                EntryKind::Main
            } else {
                EntryKind::Resource
            };
            entries.push(Entry::from_har(har_entry, kind));
        }

        for script in &session.scripts {
            entries.push(Entry::inline_script(&session.requested_url, script));
        }

        debug!(
            "条目分类完成：HAR条目{}个，内联脚本{}个，主条目下标={:?}",
            session.har.len(),
            session.scripts.len(),
            main_index
        );

        entries
    }

    /// 定位主条目下标
    /// 首条目无Location头时即为主条目；
    /// 否则取后续首个请求URL等于跳转目标的条目，找不到则回退为首条目
    pub fn find_main_index(har: &[HarEntry]) -> Option<usize> {
        let first = har.first()?;
        let Some(location) = first.response.location() else {
            return Some(0);
        };

        let target = match Url::parse(&first.request.url).and_then(|base| base.join(location)) {
            Ok(target) => target,
            Err(e) => {
                warn!(
                    "Location解析失败：请求URL={}，Location={}，错误：{}",
                    first.request.url, location, e
                );
                return Some(0);
            }
        };

        let found = har
            .iter()
            .enumerate()
            .skip(1)
            .find(|(_, entry)| Self::same_url(&entry.request.url, &target))
            .map(|(index, _)| index);

        match found {
            Some(index) => {
                debug!("首条目跳转至 {}，主条目下标={}", target, index);
                Some(index)
            }
            None => {
                debug!("未找到跳转目标 {}，回退首条目为主条目", target);
                Some(0)
            }
        }
    }

    fn same_url(raw: &str, target: &Url) -> bool {
        raw == target.as_str() || Url::parse(raw).map(|url| &url == target).unwrap_or(false)
    }
}
