//! 条目模块：会话输入模型、条目定义与分类
pub mod session;
pub mod model;
pub mod classifier;

// 导出核心接口
pub use self::session::{Session, SplashSoftware, HarEntry, HarRequest, HarResponse, HarHeader, HarContent};
pub use self::model::{Entry, EntryKind};
pub use self::classifier::EntryClassifier;
