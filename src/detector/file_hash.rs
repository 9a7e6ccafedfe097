//! 文件哈希版本识别
//! 指示器插件命中后，按响应URL子串定位文件，用正文SHA-256摘要反查版本号

use tracing::debug;

use crate::entry::Entry;
use crate::plugin::Plugin;
use crate::utils::sha256_hex;

pub struct FileHashMatcher;

impl FileHashMatcher {
    /// 返回首个摘要匹配的版本号
    pub fn get_version(plugin: &Plugin, entry: &Entry<'_>) -> Option<String> {
        if plugin.file_hashes.is_empty() {
            return None;
        }

        let url = entry.response_url();
        let mut digest: Option<String> = None;

        for (file, versions) in &plugin.file_hashes {
            if !url.contains(file.as_str()) {
                continue;
            }

            // 摘要只计算一次
            let digest = digest.get_or_insert_with(|| sha256_hex(entry.body().as_bytes()));
            if let Some((version, _)) = versions.iter().find(|(_, hash)| hash.eq_ignore_ascii_case(digest)) {
                debug!("文件哈希匹配成功：插件={}，文件={}，版本={}", plugin.name, file, version);
                return Some(version.clone());
            }
        }

        None
    }
}
