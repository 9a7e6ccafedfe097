//! 版本号归并
//! 同一插件在同一条目上多种签名给出的候选版本号，归并为一个“最完整”版本号

use std::cmp::Ordering;

use crate::utils::VersionComparator;

/// 候选版本号归并策略
pub trait VersionResolver: Send + Sync {
    fn resolve(&self, candidates: &[String]) -> Option<String>;
}

/// 默认策略：分量数最多者优先，其次逐分量比较取大者，再次取更长者，最后按字符串取大者；与候选顺序无关
#[derive(Debug, Clone, Copy, Default)]
pub struct MostCompleteVersion;

impl VersionResolver for MostCompleteVersion {
    fn resolve(&self, candidates: &[String]) -> Option<String> {
        candidates
            .iter()
            .filter(|v| !v.trim().is_empty())
            .fold(None::<&String>, |best, candidate| match best {
                Some(current)
                    if VersionComparator::compare_completeness(candidate, current) != Ordering::Greater =>
                {
                    Some(current)
                }
                _ => Some(candidate),
            })
            .cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn resolve(candidates: &[&str]) -> Option<String> {
        let candidates: Vec<String> = candidates.iter().map(|s| s.to_string()).collect();
        MostCompleteVersion.resolve(&candidates)
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(resolve(&[]), None);
        assert_eq!(resolve(&["", " "]), None);
    }

    #[test]
    fn test_prefers_more_components() {
        assert_eq!(resolve(&["3.2", "3.2.1", "3"]), Some("3.2.1".to_string()));
    }

    #[test]
    fn test_ties_broken_numerically() {
        assert_eq!(resolve(&["1.9.0", "1.10.0"]), Some("1.10.0".to_string()));
    }

    #[test]
    fn test_single_candidate() {
        assert_eq!(resolve(&["2.1.0"]), Some("2.1.0".to_string()));
    }

    #[test]
    fn test_result_independent_of_candidate_order() {
        let permutations = [
            ["1.1a", "1.9", "1.10"],
            ["1.1a", "1.10", "1.9"],
            ["1.9", "1.1a", "1.10"],
            ["1.9", "1.10", "1.1a"],
            ["1.10", "1.1a", "1.9"],
            ["1.10", "1.9", "1.1a"],
        ];
        for candidates in permutations {
            assert_eq!(resolve(&candidates), Some("1.10".to_string()), "候选顺序：{:?}", candidates);
        }
        assert_eq!(resolve(&["1.02", "01.2"]), resolve(&["01.2", "1.02"]));
    }
}
