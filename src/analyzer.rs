use crate::rules::RedirectTable;

#[derive(Debug, Clone, PartialEq)]
pub struct Chain {
    pub source: String,
    pub via: String,
    pub destination: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct LoopPair {
    pub source: String,
    pub destination: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Redirect {
    pub source: String,
    pub destination: String,
}

// How a known crawl-error URL participates in the table: where it redirects
// to (if it is a source), and every source that redirects to it.
#[derive(Debug, Clone, PartialEq)]
pub struct ErrorUrlUsage {
    pub url: String,
    pub outbound: Option<String>,
    pub inbound: Vec<String>,
}

#[derive(Debug, Default)]
pub struct Analysis {
    pub chains: Vec<Chain>,
    pub loops: Vec<LoopPair>,
    pub self_redirects: Vec<Redirect>,
    pub trailing_slash: Vec<Redirect>,
    pub error_urls: Vec<ErrorUrlUsage>,
}

pub fn analyze(table: &RedirectTable, error_urls: &[String]) -> Analysis {
    Analysis {
        chains: find_chains(table),
        loops: find_loops(table),
        self_redirects: find_self_redirects(table),
        trailing_slash: find_trailing_slash_issues(table),
        error_urls: cross_reference(table, error_urls),
    }
}

// A destination that is itself a source makes clients hop twice. Only the
// immediate extra hop is reported; longer chains show up as several two-hop
// records, one per intermediate source. A self-redirect satisfies the
// predicate trivially and is reported here as well as under self-redirects.
pub fn find_chains(table: &RedirectTable) -> Vec<Chain> {
    let mut out = Vec::new();
    for (source, destination) in table {
        if let Some(next) = table.get(destination) {
            out.push(Chain {
                source: source.clone(),
                via: destination.clone(),
                destination: next.clone(),
            });
        }
    }
    out
}

// Mutual 2-cycles only. Each direction is recorded when iteration reaches it,
// so a loop between distinct sources appears twice.
pub fn find_loops(table: &RedirectTable) -> Vec<LoopPair> {
    let mut out = Vec::new();
    for (source, destination) in table {
        if table.get(destination) == Some(source) {
            out.push(LoopPair {
                source: source.clone(),
                destination: destination.clone(),
            });
        }
    }
    out
}

pub fn find_self_redirects(table: &RedirectTable) -> Vec<Redirect> {
    let mut out = Vec::new();
    for (source, destination) in table {
        if source == destination {
            out.push(Redirect {
                source: source.clone(),
                destination: destination.clone(),
            });
        }
    }
    out
}

// Redirects that only add or remove trailing slashes. Comparison strips every
// trailing '/' from both sides.
pub fn find_trailing_slash_issues(table: &RedirectTable) -> Vec<Redirect> {
    let mut out = Vec::new();
    for (source, destination) in table {
        if source != destination
            && source.trim_end_matches('/') == destination.trim_end_matches('/')
        {
            out.push(Redirect {
                source: source.clone(),
                destination: destination.clone(),
            });
        }
    }
    out
}

pub fn cross_reference(table: &RedirectTable, error_urls: &[String]) -> Vec<ErrorUrlUsage> {
    error_urls
        .iter()
        .map(|url| ErrorUrlUsage {
            url: url.clone(),
            outbound: table.get(url).cloned(),
            inbound: table
                .iter()
                .filter(|(_, destination)| *destination == url)
                .map(|(source, _)| source.clone())
                .collect(),
        })
        .collect()
}
