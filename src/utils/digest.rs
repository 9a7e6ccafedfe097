//! 摘要工具

use sha2::{Digest, Sha256};

/// 计算SHA-256摘要，返回64位小写十六进制字符串
pub fn sha256_hex(data: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(data);
    hex::encode(hasher.finalize())
}
