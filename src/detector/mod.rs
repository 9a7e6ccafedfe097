//! 检测模块：检测流水线核心逻辑
pub mod router;
pub mod version_resolver;
pub mod file_hash;
pub mod detector;

// 导出核心接口
pub use self::router::MatcherGroupRouter;
pub use self::version_resolver::{VersionResolver, MostCompleteVersion};
pub use self::file_hash::FileHashMatcher;
pub use self::detector::{Detector, DetectionRun};
