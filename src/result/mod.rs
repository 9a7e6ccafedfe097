//! 结果模块：检测结果、结果集合与输出记录
pub mod model;
pub mod collection;

pub use self::model::{DetectionResult, ResultType, OutputRecord};
pub use self::collection::ResultCollection;
