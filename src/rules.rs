use serde::Deserialize;
use serde_json::Value;
use std::collections::BTreeMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

// Merged view of every rule file: source path -> destination path.
// Later files overwrite earlier entries on source collision.
pub type RedirectTable = BTreeMap<String, String>;

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RedirectRule {
    pub source: String,
    pub destination: String,
}

// Per-file load outcome. A failed file is reported and skipped; it never
// aborts the scan.
#[derive(Debug)]
pub enum LoadFailure {
    NotFound,
    Unreadable(io::Error),
    Parse(serde_json::Error),
    UnexpectedShape,
}

impl std::fmt::Display for LoadFailure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LoadFailure::NotFound => write!(f, "file not found"),
            LoadFailure::Unreadable(e) => write!(f, "unreadable: {}", e),
            LoadFailure::Parse(e) => write!(f, "invalid JSON: {}", e),
            LoadFailure::UnexpectedShape => {
                write!(f, "unexpected JSON shape (expected an array or an object with a \"redirects\" array)")
            }
        }
    }
}

// Accepted document shapes: a bare array of rule objects, or an object whose
// "redirects" key holds such an array. Entries missing source/destination
// (or carrying non-string values) are skipped individually; extra keys like
// "permanent" are ignored.
pub fn extract_rules(doc: &Value) -> Option<Vec<RedirectRule>> {
    let entries = match doc {
        Value::Array(arr) => arr,
        Value::Object(map) => match map.get("redirects") {
            Some(Value::Array(arr)) => arr,
            _ => return None,
        },
        _ => return None,
    };
    let rules = entries
        .iter()
        .filter_map(|entry| serde_json::from_value(entry.clone()).ok())
        .collect();
    Some(rules)
}

pub fn load_rule_file(path: &Path) -> Result<Vec<RedirectRule>, LoadFailure> {
    let text = match fs::read_to_string(path) {
        Ok(t) => t,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Err(LoadFailure::NotFound),
        Err(e) => return Err(LoadFailure::Unreadable(e)),
    };
    let doc: Value = serde_json::from_str(&text).map_err(LoadFailure::Parse)?;
    extract_rules(&doc).ok_or(LoadFailure::UnexpectedShape)
}

// Walks the scan root and returns every file whose root-relative path matches
// one of the configured patterns. Results are sorted so merge order (and with
// it last-writer-wins resolution) is reproducible across runs.
pub fn discover_rule_files(root: &Path, patterns: &[String]) -> Vec<PathBuf> {
    let filter = RuleFileFilter::new(patterns);
    let mut found = Vec::new();
    for entry in WalkDir::new(root).into_iter().filter_map(|e| e.ok()) {
        let path = entry.path();
        if !path.is_file() {
            continue;
        }
        let rel = match path.strip_prefix(root) {
            Ok(r) => r,
            Err(_) => continue,
        };
        if filter.is_match(&rel.to_string_lossy()) {
            found.push(path.to_path_buf());
        }
    }
    found.sort();
    found
}

pub fn merge_rules<I>(rulesets: I) -> RedirectTable
where
    I: IntoIterator<Item = Vec<RedirectRule>>,
{
    let mut table = RedirectTable::new();
    for rules in rulesets {
        for rule in rules {
            table.insert(rule.source, rule.destination);
        }
    }
    table
}

// Minimal filename matching: '*' within a path segment, literal everything
// else. Patterns and paths are compared segment by segment, so
// "*redirects.json" only matches at the top level of the scan root.
#[derive(Debug, Clone)]
pub struct RuleFileFilter {
    patterns: Vec<String>,
}

impl RuleFileFilter {
    pub fn new(patterns: &[String]) -> Self {
        let patterns = patterns
            .iter()
            .map(|p| p.trim().replace('\\', "/"))
            .collect();
        RuleFileFilter { patterns }
    }

    pub fn is_match(&self, rel: &str) -> bool {
        let text = rel.replace('\\', "/");
        self.patterns.iter().any(|pat| pattern_matches(pat, &text))
    }
}

fn pattern_matches(pat: &str, path: &str) -> bool {
    let psegs: Vec<&str> = pat.split('/').collect();
    let ssegs: Vec<&str> = path.split('/').collect();
    psegs.len() == ssegs.len()
        && psegs
            .iter()
            .zip(ssegs.iter())
            .all(|(p, s)| segment_matches(p, s))
}

fn segment_matches(pat: &str, seg: &str) -> bool {
    if !pat.contains('*') {
        return pat == seg;
    }
    let mut pos = 0usize;
    let mut tokens = pat.split('*');
    // First token is anchored unless the pattern opens with '*'.
    if let Some(first) = tokens.next() {
        if !first.is_empty() {
            if !seg.starts_with(first) {
                return false;
            }
            pos = first.len();
        }
    }
    for token in tokens {
        if token.is_empty() {
            continue;
        }
        match seg[pos..].find(token) {
            Some(found) => pos += found + token.len(),
            None => return false,
        }
    }
    pat.ends_with('*') || pos == seg.len()
}
