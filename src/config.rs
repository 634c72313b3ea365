use std::path::PathBuf;

// Filename patterns that identify redirect rule files relative to the scan
// root. Segment wildcards only; see rules::RuleFileFilter.
const RULE_FILE_PATTERNS: &[&str] = &["*redirects.json", "content/blog/redirects.json"];

// URL paths flagged as crawl/indexing errors in Search Console exports.
// Checked against both sides of the merged table.
const GSC_ERROR_URLS: &[&str] = &[
    "/whats-on",
    "/pizza-tuesday",
    "/drinks",
    "/food-menu",
    "/sunday-lunch",
    "/christmas-parties",
    "/find-us",
    "/private-parties",
    "/about-us",
    "/airport-parking",
];

#[derive(Debug, Clone)]
pub struct ScanConfig {
    pub root: PathBuf,
    pub rule_patterns: Vec<String>,
    pub gsc_error_urls: Vec<String>,
}

impl ScanConfig {
    pub fn for_root(root: PathBuf) -> Self {
        ScanConfig {
            root,
            rule_patterns: RULE_FILE_PATTERNS.iter().map(|s| s.to_string()).collect(),
            gsc_error_urls: GSC_ERROR_URLS.iter().map(|s| s.to_string()).collect(),
        }
    }
}

impl Default for ScanConfig {
    fn default() -> Self {
        ScanConfig::for_root(PathBuf::from("."))
    }
}
