//! 版本号比较工具
//! 以 `.` 切分版本号，每个分量拆为数字前缀与剩余后缀：
//! 无数字前缀的分量排在有数字前缀的分量之前，数字前缀按数值比较，再按后缀字符串比较

use std::cmp::Ordering;

/// 版本号比较器
pub struct VersionComparator;

impl VersionComparator {
    /// 版本号分量数（完整度）
    pub fn completeness(version: &str) -> usize {
        version.split('.').filter(|c| !c.is_empty()).count()
    }

    /// 逐分量比较两个版本号，公共前缀相同时分量多者更大
    pub fn compare(a: &str, b: &str) -> Ordering {
        let mut left = a.split('.');
        let mut right = b.split('.');

        loop {
            match (left.next(), right.next()) {
                (Some(l), Some(r)) => match Self::compare_component(l, r) {
                    Ordering::Equal => continue,
                    other => return other,
                },
                (Some(_), None) => return Ordering::Greater,
                (None, Some(_)) => return Ordering::Less,
                (None, None) => return Ordering::Equal,
            }
        }
    }

    /// 完整度优先的比较：分量数 > 逐分量比较 > 字符串长度 > 字符串本身
    pub fn compare_completeness(a: &str, b: &str) -> Ordering {
        Self::completeness(a)
            .cmp(&Self::completeness(b))
            .then_with(|| Self::compare(a, b))
            .then_with(|| a.len().cmp(&b.len()))
            .then_with(|| a.cmp(b))
    }

    fn compare_component(l: &str, r: &str) -> Ordering {
        let (l_num, l_rest) = Self::split_component(l);
        let (r_num, r_rest) = Self::split_component(r);

        let numeric = match (l_num, r_num) {
            (Some(l), Some(r)) => {
                // 去前导零后按长度再按字典序比较，避免大数溢出
                let l = l.trim_start_matches('0');
                let r = r.trim_start_matches('0');
                l.len().cmp(&r.len()).then_with(|| l.cmp(r))
            }
            (None, Some(_)) => Ordering::Less,
            (Some(_), None) => Ordering::Greater,
            (None, None) => Ordering::Equal,
        };
        numeric.then_with(|| l_rest.cmp(r_rest))
    }

    /// 分量拆分：`10rc1` -> (Some("10"), "rc1")，`beta` -> (None, "beta")
    fn split_component(component: &str) -> (Option<&str>, &str) {
        let digits = component.bytes().take_while(|b| b.is_ascii_digit()).count();
        if digits == 0 {
            (None, component)
        } else {
            (Some(&component[..digits]), &component[digits..])
        }
    }
}
