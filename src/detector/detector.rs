//! 检测器核心：驱动版本/指示器/通用三轮匹配，输出检测结果
//! 检测器本身只持有只读的插件注册表与匹配策略，每次检测创建独立的 DetectionRun

use std::sync::Arc;

use tracing::{debug, error, warn};

use super::file_hash::FileHashMatcher;
use super::router::MatcherGroupRouter;
use super::version_resolver::{MostCompleteVersion, VersionResolver};
use crate::entry::{Entry, EntryClassifier, Session};
use crate::matcher::MatcherSet;
use crate::plugin::{MatcherSource, Plugin, PluginRegistry};
use crate::result::{DetectionResult, OutputRecord, ResultCollection, ResultType};

/// 软件检测器
#[derive(Clone)]
pub struct Detector {
    registry: Arc<PluginRegistry>,
    matchers: MatcherSet,
    resolver: Arc<dyn VersionResolver>,
}

impl Detector {
    /// 使用默认匹配策略与版本归并策略创建检测器
    pub fn new(registry: Arc<PluginRegistry>) -> Self {
        Self {
            registry,
            matchers: MatcherSet::default(),
            resolver: Arc::new(MostCompleteVersion),
        }
    }

    pub fn with_matchers(mut self, matchers: MatcherSet) -> Self {
        self.matchers = matchers;
        self
    }

    pub fn with_resolver(mut self, resolver: Arc<dyn VersionResolver>) -> Self {
        self.resolver = resolver;
        self
    }

    pub fn registry(&self) -> &PluginRegistry {
        &self.registry
    }

    /// 为一次会话创建检测过程（条目在此完成分类）
    pub fn run<'a>(&'a self, session: &'a Session) -> DetectionRun<'a> {
        DetectionRun {
            detector: self,
            session,
            entries: EntryClassifier::classify(session),
            results: ResultCollection::new(),
        }
    }

    /// 完整检测：HAR匹配 + 渲染端软件，输出排序后的记录
    pub fn get_results(&self, session: &Session, include_metadata: bool) -> Vec<OutputRecord> {
        self.run(session).get_results(include_metadata)
    }
}

impl std::fmt::Debug for Detector {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Detector")
            .field("plugins", &self.registry.len())
            .field("matchers", &self.matchers)
            .finish()
    }
}

/// 单次会话的检测过程
pub struct DetectionRun<'a> {
    detector: &'a Detector,
    session: &'a Session,
    entries: Vec<Entry<'a>>,
    results: ResultCollection,
}

impl<'a> DetectionRun<'a> {
    /// 已分类的条目
    pub fn entries(&self) -> &[Entry<'a>] {
        &self.entries
    }

    /// 当前累计的结果
    pub fn results(&self) -> &ResultCollection {
        &self.results
    }

    /// 运行两轮检测并构建输出记录
    pub fn get_results(mut self, include_metadata: bool) -> Vec<OutputRecord> {
        self.process_har();
        self.process_from_splash();

        self.results
            .get_results()
            .iter()
            .map(|result| OutputRecord::from_result(result, include_metadata))
            .collect()
    }

    /// 第一轮：逐条目依次执行版本插件、指示器插件、通用插件匹配，
    /// 提示结果延后到全部条目处理完再统一加入
    pub fn process_har(&mut self) {
        let found = self.scan_entries();
        for result in found {
            self.results.add_result(result);
        }
    }

    /// 第二轮：渲染端上报的软件，提示结果立即加入
    pub fn process_from_splash(&mut self) {
        let session = self.session;
        let registry = &self.detector.registry;

        for software in &session.softwares {
            let Some(plugin) = registry.get(&software.name) else {
                warn!("渲染端上报了未注册的软件：{} {}", software.name, software.version);
                continue;
            };

            self.results.add_result(DetectionResult::version(
                plugin.name.as_str(),
                software.version.as_str(),
                plugin.homepage.as_str(),
                session.requested_url.as_str(),
            ));

            for hint in self.get_hints(plugin) {
                self.results.add_result(hint);
            }
        }
    }

    /// 扫描全部条目，返回按发现顺序排列的结果（提示结果在最后）
    fn scan_entries(&self) -> Vec<DetectionResult> {
        let registry = &self.detector.registry;
        let mut found = Vec::new();
        let mut hints = Vec::new();

        for entry in &self.entries {
            let from_url = entry.response_url();

            for plugin in registry.with_version_matchers() {
                let Some(version) = self.get_plugin_version(plugin, entry) else {
                    continue;
                };
                // 模块化插件的名称可能与插件名不同
                let name = self.get_plugin_name(plugin, entry);
                debug!("版本匹配成功：插件={}，版本={}，条目={}", name, version, from_url);

                found.push(DetectionResult::version(name, version, plugin.homepage.as_str(), from_url));
                hints.extend(self.get_hints(plugin));
            }

            for plugin in registry.with_indicator_matchers() {
                if !self.check_indicator_presence(plugin, entry) {
                    continue;
                }
                let name = self.get_plugin_name(plugin, entry);
                debug!("指示器匹配成功：插件={}，条目={}", name, from_url);

                found.push(DetectionResult::unversioned(
                    name.as_str(),
                    plugin.homepage.as_str(),
                    from_url,
                    ResultType::Indicator,
                ));
                hints.extend(self.get_hints(plugin));

                // 尝试通过文件哈希获取版本号
                match FileHashMatcher::get_version(plugin, entry) {
                    Some(version) => found.push(DetectionResult::version(
                        name,
                        version,
                        plugin.homepage.as_str(),
                        from_url,
                    )),
                    // 与上一条重复，由结果集合按名称合并
                    None => found.push(DetectionResult::unversioned(
                        name,
                        plugin.homepage.as_str(),
                        from_url,
                        ResultType::Indicator,
                    )),
                }
            }

            for plugin in registry.with_generic_matchers() {
                if !self.check_indicator_presence(plugin, entry) {
                    continue;
                }
                let Some(info) = plugin.get_information(entry, &self.detector.matchers) else {
                    continue;
                };
                debug!("通用插件识别成功：插件={}，产品={}，条目={}", plugin.name, info.name, from_url);

                found.push(DetectionResult::unversioned(
                    info.name,
                    info.homepage,
                    from_url,
                    ResultType::Generic,
                ));
            }
        }

        found.extend(hints);
        found
    }

    /// 插件提示：注册表中存在的提示插件生成提示结果，不存在的记录错误日志
    fn get_hints(&self, plugin: &Plugin) -> Vec<DetectionResult> {
        let mut hints = Vec::new();

        for hint_name in &plugin.hints {
            match self.detector.registry.get(hint_name) {
                Some(hint_plugin) => {
                    debug!("{} 及提示插件 {} 已识别", plugin.name, hint_plugin.name);
                    hints.push(DetectionResult::unversioned(
                        hint_plugin.name.as_str(),
                        hint_plugin.homepage.as_str(),
                        self.session.requested_url.as_str(),
                        ResultType::Hint,
                    ));
                }
                None => error!("{} 提示了无效插件：{}", plugin.name, hint_name),
            }
        }

        hints
    }

    /// 各可用签名类型给出的候选版本号，归并为一个
    fn get_plugin_version(&self, plugin: &Plugin, entry: &Entry<'_>) -> Option<String> {
        let versions: Vec<String> = MatcherGroupRouter::route(entry, plugin, MatcherSource::Matchers)
            .into_iter()
            .filter_map(|(kind, signatures)| {
                let matcher = self.detector.matchers.get(kind);
                let version = matcher.get_version(entry, signatures)?;
                debug!("{} 签名给出候选版本：插件={}，版本={}", matcher.name(), plugin.name, version);
                Some(version)
            })
            .collect();

        self.detector.resolver.resolve(&versions)
    }

    /// 模块化插件找到模块名时返回 `插件名-模块名`，否则返回插件名
    fn get_plugin_name(&self, plugin: &Plugin, entry: &Entry<'_>) -> String {
        if !plugin.is_modular {
            return plugin.name.clone();
        }

        let module_name = MatcherGroupRouter::route(entry, plugin, MatcherSource::ModularMatchers)
            .into_iter()
            .find_map(|(kind, signatures)| self.detector.matchers.get(kind).get_module_name(entry, signatures));

        match module_name {
            Some(module_name) => format!("{}-{}", plugin.name, module_name),
            None => plugin.name.clone(),
        }
    }

    /// 任一可用签名类型判定存在即存在（全部类型都会执行）
    fn check_indicator_presence(&self, plugin: &Plugin, entry: &Entry<'_>) -> bool {
        let presences: Vec<bool> = MatcherGroupRouter::route(entry, plugin, MatcherSource::Indicators)
            .into_iter()
            .map(|(kind, signatures)| self.detector.matchers.get(kind).check_presence(entry, signatures))
            .collect();

        presences.into_iter().any(|present| present)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::borrow::Cow;
    use std::collections::BTreeMap;
    use std::sync::Mutex;

    use crate::entry::{EntryKind, HarContent, HarEntry, HarHeader, HarRequest, HarResponse, SplashSoftware};
    use crate::matcher::{Signature, SignatureMatcher};
    use crate::plugin::{PluginLoader, SignatureKind};
    use crate::utils::sha256_hex;

    const REQUESTED_URL: &str = "http://example.com/";

    fn har_entry(url: &str, headers: Vec<HarHeader>, body: &str) -> HarEntry {
        HarEntry {
            request: HarRequest { url: url.to_string() },
            response: HarResponse {
                url: Some(url.to_string()),
                headers,
                content: HarContent { text: Some(body.to_string()) },
            },
        }
    }

    fn session(har: Vec<HarEntry>, scripts: Vec<&str>, softwares: Vec<(&str, &str)>) -> Session {
        Session {
            requested_url: REQUESTED_URL.to_string(),
            softwares: softwares
                .into_iter()
                .map(|(name, version)| SplashSoftware { name: name.to_string(), version: version.to_string() })
                .collect(),
            har,
            scripts: scripts.into_iter().map(String::from).collect(),
        }
    }

    fn init_test_tracing() {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();
    }

    fn detector(plugins_json: &str) -> Detector {
        init_test_tracing();
        Detector::new(Arc::new(PluginLoader::from_json_str(plugins_json).unwrap()))
    }

    fn names_and_versions(records: &[OutputRecord]) -> Vec<(String, Option<String>)> {
        records.iter().map(|r| (r.name.clone(), r.version.clone())).collect()
    }

    const JQUERY: &str = r#"[
        {
            "name": "jquery",
            "homepage": "https://jquery.com",
            "matchers": {"url": ["jquery-([\\d.]+)(?:\\.min)?\\.js"]}
        }
    ]"#;

    #[test]
    fn test_version_from_resource_url() {
        let s = session(
            vec![
                har_entry(REQUESTED_URL, vec![], "<html></html>"),
                har_entry("http://example.com/js/jquery-3.2.1.min.js", vec![], "/* jquery */"),
            ],
            vec![],
            vec![],
        );
        let detector = detector(JQUERY);
        let mut run = detector.run(&s);
        run.process_har();

        let jquery: Vec<&DetectionResult> = run.results().iter().filter(|r| r.name == "jquery").collect();
        assert_eq!(jquery.len(), 1);
        assert_eq!(jquery[0].version.as_deref(), Some("3.2.1"));
        assert_eq!(jquery[0].result_type, ResultType::Version);
        assert_eq!(jquery[0].from_url, "http://example.com/js/jquery-3.2.1.min.js");

        let records = detector.get_results(&s, false);
        assert_eq!(
            names_and_versions(&records),
            vec![("jquery".to_string(), Some("3.2.1".to_string()))]
        );
    }

    #[test]
    fn test_url_signature_ignored_on_main_entry() {
        let s = session(
            vec![har_entry("http://example.com/jquery-3.2.1.js", vec![], "")],
            vec![],
            vec![],
        );
        assert!(detector(JQUERY).get_results(&s, false).is_empty());
    }

    #[test]
    fn test_versions_merged_across_kinds() {
        let plugins = r#"[{
            "name": "angular",
            "homepage": "https://angular.io",
            "matchers": {
                "url": ["angular-([\\d.]+)\\.js"],
                "body": ["AngularJS v([\\d.]+)"]
            }
        }]"#;
        let s = session(
            vec![
                har_entry(REQUESTED_URL, vec![], ""),
                har_entry("http://example.com/angular-1.6.js", vec![], "/* AngularJS v1.6.10 */"),
            ],
            vec![],
            vec![],
        );
        assert_eq!(
            names_and_versions(&detector(plugins).get_results(&s, false)),
            vec![("angular".to_string(), Some("1.6.10".to_string()))]
        );
    }

    #[test]
    fn test_modular_plugin_name() {
        let plugins = r#"[{
            "name": "jquery-ui",
            "homepage": "https://jqueryui.com",
            "is_modular": true,
            "matchers": {"body": ["jQuery UI [\\w ]*- v([\\d.]+)"]},
            "modular_matchers": {"body": ["jQuery UI (\\w+) - v"]}
        }]"#;
        let s = session(
            vec![
                har_entry(REQUESTED_URL, vec![], ""),
                har_entry("http://example.com/a.js", vec![], "/*! jQuery UI Datepicker - v1.12.1 */"),
                har_entry("http://example.com/b.js", vec![], "/*! jQuery UI - v1.11.4 */"),
            ],
            vec![],
            vec![],
        );
        assert_eq!(
            names_and_versions(&detector(plugins).get_results(&s, false)),
            vec![
                ("jquery-ui".to_string(), Some("1.11.4".to_string())),
                ("jquery-ui-Datepicker".to_string(), Some("1.12.1".to_string())),
            ]
        );
    }

    #[test]
    fn test_header_and_xpath_on_main_entry() {
        let plugins = r#"[
            {
                "name": "php",
                "homepage": "https://php.net",
                "matchers": {"header": [{"target": "X-Powered-By", "pattern": "PHP/([\\d.]+)"}]}
            },
            {
                "name": "wordpress",
                "homepage": "https://wordpress.org",
                "matchers": {"xpath": [{"target": "//meta[@name='generator']/@content", "pattern": "WordPress ([\\d.]+)"}]}
            }
        ]"#;
        let body = r#"<html><head><meta name="generator" content="WordPress 6.4.2"></head></html>"#;
        let s = session(
            vec![har_entry(REQUESTED_URL, vec![HarHeader::new("X-Powered-By", "PHP/8.1.2")], body)],
            vec![],
            vec![],
        );
        assert_eq!(
            names_and_versions(&detector(plugins).get_results(&s, false)),
            vec![
                ("php".to_string(), Some("8.1.2".to_string())),
                ("wordpress".to_string(), Some("6.4.2".to_string())),
            ]
        );
    }

    #[test]
    fn test_inline_script_entries_matched() {
        let plugins = r#"[{
            "name": "google-analytics",
            "homepage": "https://analytics.google.com",
            "indicators": {"body": ["GoogleAnalyticsObject"]}
        }]"#;
        let s = session(
            vec![har_entry(REQUESTED_URL, vec![], "")],
            vec!["window['GoogleAnalyticsObject'] = 'ga';"],
            vec![],
        );
        let records = detector(plugins).get_results(&s, true);
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].name, "google-analytics");
        assert_eq!(records[0].result_type, Some(ResultType::Indicator));
        assert_eq!(records[0].from_url.as_deref(), Some(REQUESTED_URL));
    }

    #[derive(Default)]
    struct Recorder {
        calls: Mutex<Vec<(SignatureKind, EntryKind)>>,
        present_kinds: Vec<SignatureKind>,
    }

    struct RecordingMatcher {
        kind: SignatureKind,
        recorder: Arc<Recorder>,
    }

    impl SignatureMatcher for RecordingMatcher {
        fn name(&self) -> &'static str {
            "recording"
        }

        fn subjects<'a>(&self, _entry: &Entry<'a>, _signature: &Signature) -> Vec<Cow<'a, str>> {
            Vec::new()
        }

        fn check_presence(&self, entry: &Entry<'_>, _signatures: &[Signature]) -> bool {
            self.recorder.calls.lock().unwrap().push((self.kind, entry.kind()));
            self.recorder.present_kinds.contains(&self.kind)
        }

        fn get_version(&self, entry: &Entry<'_>, _signatures: &[Signature]) -> Option<String> {
            self.recorder.calls.lock().unwrap().push((self.kind, entry.kind()));
            None
        }
    }

    fn recording_detector(plugins_json: &str, recorder: &Arc<Recorder>) -> Detector {
        let mut matchers = MatcherSet::default();
        for kind in SignatureKind::ALL {
            matchers = matchers.with_strategy(
                kind,
                Arc::new(RecordingMatcher { kind, recorder: Arc::clone(recorder) }),
            );
        }
        detector(plugins_json).with_matchers(matchers)
    }

    const ALL_KINDS: &str = r#"[{
        "name": "everything",
        "matchers": {
            "url": ["a"], "body": ["b"],
            "header": [{"target": "Server", "pattern": "c"}],
            "xpath": [{"target": "//meta", "pattern": "d"}]
        },
        "indicators": {
            "url": ["a"], "body": ["b"],
            "header": [{"target": "Server", "pattern": "c"}],
            "xpath": [{"target": "//meta", "pattern": "d"}]
        }
    }]"#;

    #[test]
    fn test_router_restricts_invoked_kinds() {
        let recorder = Arc::new(Recorder::default());
        let s = session(
            vec![
                har_entry(REQUESTED_URL, vec![], ""),
                har_entry("http://example.com/a.js", vec![], ""),
            ],
            vec!["inline"],
            vec![],
        );
        recording_detector(ALL_KINDS, &recorder).run(&s).process_har();

        let calls = recorder.calls.lock().unwrap();
        assert!(!calls.is_empty());
        for (kind, entry_kind) in calls.iter() {
            match entry_kind {
                EntryKind::Main => assert!(matches!(kind, SignatureKind::Header | SignatureKind::Xpath)),
                _ => assert!(matches!(kind, SignatureKind::Url | SignatureKind::Body)),
            }
        }
        // 每个条目：版本2次 + 存在性2次
        assert_eq!(calls.len(), 3 * 4);
    }

    #[test]
    fn test_indicator_presence_is_or_of_kinds() {
        let s = session(
            vec![
                har_entry(REQUESTED_URL, vec![], ""),
                har_entry("http://example.com/a.js", vec![], ""),
            ],
            vec![],
            vec![],
        );

        let only_body = Arc::new(Recorder {
            calls: Mutex::new(Vec::new()),
            present_kinds: vec![SignatureKind::Body],
        });
        let mut run_detector = recording_detector(ALL_KINDS, &only_body);
        let records = run_detector.get_results(&s, true);
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].from_url.as_deref(), Some("http://example.com/a.js"));

        let nothing = Arc::new(Recorder::default());
        run_detector = recording_detector(ALL_KINDS, &nothing);
        assert!(run_detector.get_results(&s, true).is_empty());
    }

    const HINTED: &str = r#"[
        {
            "name": "wordpress",
            "homepage": "https://wordpress.org",
            "hints": ["php", "mysql-missing"],
            "indicators": {"url": ["/wp-content/"]}
        },
        {"name": "php", "homepage": "https://php.net"}
    ]"#;

    #[test]
    fn test_hints_valid_and_invalid() {
        let s = session(
            vec![
                har_entry(REQUESTED_URL, vec![], ""),
                har_entry("http://example.com/wp-content/a.css", vec![], ""),
            ],
            vec![],
            vec![],
        );
        let detector = detector(HINTED);
        let mut run = detector.run(&s);
        run.process_har();

        let hints: Vec<&DetectionResult> = run
            .results()
            .iter()
            .filter(|r| r.result_type == ResultType::Hint)
            .collect();
        assert_eq!(hints.len(), 1);
        assert_eq!(hints[0].name, "php");
        assert_eq!(hints[0].homepage, "https://php.net");
        assert_eq!(hints[0].from_url, REQUESTED_URL);
        assert!(run.results().iter().all(|r| r.name != "mysql-missing"));
    }

    #[test]
    fn test_har_hints_flushed_after_entries() {
        let s = session(
            vec![
                har_entry(REQUESTED_URL, vec![], ""),
                har_entry("http://example.com/wp-content/a.css", vec![], ""),
            ],
            vec![],
            vec![],
        );
        let detector = detector(HINTED);
        let mut run = detector.run(&s);
        run.process_har();

        let order: Vec<ResultType> = run.results().iter().map(|r| r.result_type).collect();
        assert_eq!(order, vec![ResultType::Indicator, ResultType::Hint]);
    }

    #[test]
    fn test_splash_hints_immediate() {
        let plugins = r#"[
            {"name": "wordpress", "homepage": "https://wordpress.org", "hints": ["php"]},
            {"name": "php", "homepage": "https://php.net"},
            {"name": "jquery", "homepage": "https://jquery.com"}
        ]"#;
        let s = session(vec![], vec![], vec![("wordpress", "6.4"), ("jquery", "3.7.1"), ("unknown", "1.0")]);
        let detector = detector(plugins);
        let mut run = detector.run(&s);
        run.process_from_splash();

        let order: Vec<String> = run.results().iter().map(|r| r.to_string()).collect();
        assert_eq!(order, vec!["wordpress 6.4", "php", "jquery 3.7.1"]);
        assert!(run.results().iter().all(|r| r.from_url == REQUESTED_URL));
    }

    fn hashed_plugin(digest: String) -> PluginRegistry {
        let mut plugin = Plugin::new("foo", "https://foo.dev");
        let mut indicators = BTreeMap::new();
        indicators.insert(SignatureKind::Url, vec![Signature::new("app\\.js").unwrap()]);
        plugin.indicators = Some(indicators);
        let mut versions = BTreeMap::new();
        versions.insert("1.0".to_string(), digest);
        plugin.file_hashes.insert("app.js".to_string(), versions);
        PluginRegistry::new(vec![plugin]).unwrap()
    }

    #[test]
    fn test_file_hash_upgrades_indicator() {
        let body = "function foo() { return '1.0'; }";
        let s = session(
            vec![
                har_entry(REQUESTED_URL, vec![], ""),
                har_entry("http://example.com/static/app.js", vec![], body),
            ],
            vec![],
            vec![],
        );
        let detector = Detector::new(Arc::new(hashed_plugin(sha256_hex(body.as_bytes()))));

        // 合并前的结果流：指示器 + 版本
        let run = detector.run(&s);
        let found = run.scan_entries();
        let kinds: Vec<(ResultType, Option<&str>)> =
            found.iter().map(|r| (r.result_type, r.version.as_deref())).collect();
        assert_eq!(kinds, vec![(ResultType::Indicator, None), (ResultType::Version, Some("1.0"))]);

        assert_eq!(
            names_and_versions(&detector.get_results(&s, false)),
            vec![("foo".to_string(), Some("1.0".to_string()))]
        );
    }

    #[test]
    fn test_file_hash_mismatch_reemits_indicator() {
        let s = session(
            vec![
                har_entry(REQUESTED_URL, vec![], ""),
                har_entry("http://example.com/static/app.js", vec![], "something else"),
            ],
            vec![],
            vec![],
        );
        let detector = Detector::new(Arc::new(hashed_plugin(sha256_hex(b"original"))));

        let run = detector.run(&s);
        let found = run.scan_entries();
        assert_eq!(found.len(), 2);
        assert!(found.iter().all(|r| r.result_type == ResultType::Indicator && r.version.is_none()));

        assert_eq!(
            names_and_versions(&detector.get_results(&s, false)),
            vec![("foo".to_string(), None)]
        );
    }

    #[test]
    fn test_generic_plugin_uses_returned_identity() {
        let plugins = r#"[{
            "name": "wordpress-plugins",
            "homepage": "https://wordpress.org",
            "indicators": {"url": ["/wp-content/plugins/"]},
            "generic": {"url": ["/wp-content/plugins/([\\w-]+)/"]},
            "generic_homepage": "https://wordpress.org/plugins/{name}/"
        }]"#;
        let s = session(
            vec![
                har_entry(REQUESTED_URL, vec![], ""),
                har_entry("http://example.com/wp-content/plugins/contact-form-7/x.js", vec![], ""),
            ],
            vec![],
            vec![],
        );
        let records = detector(plugins).get_results(&s, true);
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].name, "contact-form-7");
        assert_eq!(records[0].homepage.as_deref(), Some("https://wordpress.org/plugins/contact-form-7/"));
        assert_eq!(records[0].result_type, Some(ResultType::Generic));
    }

    #[test]
    fn test_splash_only_session() {
        let s = session(vec![], vec![], vec![("jquery", "2.1.0")]);
        let records = detector(JQUERY).get_results(&s, false);
        assert_eq!(
            records,
            vec![OutputRecord {
                name: "jquery".to_string(),
                version: Some("2.1.0".to_string()),
                homepage: None,
                result_type: None,
                from_url: None,
            }]
        );
    }

    #[test]
    fn test_metadata_fields() {
        let s = session(vec![], vec![], vec![("jquery", "2.1.0")]);
        let detector = detector(JQUERY);

        let plain = serde_json::to_value(detector.get_results(&s, false)).unwrap();
        assert_eq!(plain, serde_json::json!([{"name": "jquery", "version": "2.1.0"}]));

        let meta = detector.get_results(&s, true);
        assert_eq!(meta[0].homepage.as_deref(), Some("https://jquery.com"));
        assert_eq!(meta[0].result_type, Some(ResultType::Version));
        assert_eq!(meta[0].from_url.as_deref(), Some(REQUESTED_URL));
    }

    #[test]
    fn test_empty_session_yields_nothing() {
        let s = session(vec![], vec![], vec![]);
        assert!(detector(JQUERY).get_results(&s, true).is_empty());
    }
}
