//! 检测结果集合
//! 按名称合并：带版本的结果取代同名无版本结果，同名同版本只保留首条

use std::cmp::Ordering;

use tracing::trace;

use super::model::DetectionResult;
use crate::utils::VersionComparator;

#[derive(Debug, Clone, Default)]
pub struct ResultCollection {
    results: Vec<DetectionResult>,
}

impl ResultCollection {
    pub fn new() -> Self {
        Self::default()
    }

    /// 添加结果并按名称合并
    pub fn add_result(&mut self, result: DetectionResult) {
        let duplicated = self
            .results
            .iter()
            .any(|r| r.name == result.name && r.version == result.version);
        if duplicated {
            trace!("忽略重复结果：{}", result);
            return;
        }

        if result.version.is_some() {
            self.results
                .retain(|r| !(r.name == result.name && r.version.is_none()));
        } else if self.results.iter().any(|r| r.name == result.name && r.version.is_some()) {
            trace!("已有带版本结果，忽略：{}", result);
            return;
        }

        self.results.push(result);
    }

    /// 排序后的结果视图：名称 > 版本（无版本在前）
    pub fn get_results(&self) -> Vec<DetectionResult> {
        let mut results = self.results.clone();
        results.sort_by(Self::compare);
        results
    }

    pub fn len(&self) -> usize {
        self.results.len()
    }

    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }

    /// 按添加顺序迭代（未排序）
    pub fn iter(&self) -> impl Iterator<Item = &DetectionResult> {
        self.results.iter()
    }

    fn compare(a: &DetectionResult, b: &DetectionResult) -> Ordering {
        a.name.cmp(&b.name).then_with(|| match (&a.version, &b.version) {
            (Some(va), Some(vb)) => VersionComparator::compare(va, vb).then_with(|| va.cmp(vb)),
            (None, Some(_)) => Ordering::Less,
            (Some(_), None) => Ordering::Greater,
            (None, None) => Ordering::Equal,
        })
    }
}
