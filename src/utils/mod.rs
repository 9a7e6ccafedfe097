//! 通用工具模块
pub mod version_extractor;
pub mod version_compare;
pub mod digest;

pub use self::version_extractor::VersionExtractor;
pub use self::version_compare::VersionComparator;
pub use self::digest::sha256_hex;
