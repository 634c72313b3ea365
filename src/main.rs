use anyhow::{Context, Result};
use std::env;
use std::io::{self, Write};
use std::path::PathBuf;

mod analyzer;
mod config;
mod report;
mod rules;

use config::ScanConfig;
use rules::{discover_rule_files, load_rule_file, merge_rules};

fn main() -> Result<()> {
    let root = parse_args().map_err(|e| {
        eprintln!("Error: {}", e);
        e
    })?;
    run(root).map_err(|e| {
        eprintln!("Error: {}", e);
        e
    })
}

fn run(root: PathBuf) -> Result<()> {
    let config = ScanConfig::for_root(root);
    let files = discover_rule_files(&config.root, &config.rule_patterns);

    let mut rulesets = Vec::new();
    for file in &files {
        match load_rule_file(file) {
            Ok(rules) => rulesets.push(rules),
            // A bad file contributes nothing; the scan itself never aborts.
            Err(failure) => {
                eprintln!("Warning: skipping {}: {}", file.display(), failure);
            }
        }
    }

    let table = merge_rules(rulesets);
    let analysis = analyzer::analyze(&table, &config.gsc_error_urls);

    let stdout = io::stdout();
    let mut out = stdout.lock();
    report::write_report(&mut out, &analysis).context("Failed to write report")?;
    out.flush().context("Failed to flush report")?;
    Ok(())
}

fn parse_args() -> Result<PathBuf> {
    let mut args = env::args().skip(1);
    let mut root = PathBuf::from(".");

    // Default: first argument is the scan root; optionally support "--dir <path>"
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "-d" | "--dir" => {
                if let Some(val) = args.next() {
                    root = PathBuf::from(val);
                } else {
                    return Err(anyhow::anyhow!("Missing value for --dir"));
                }
            }
            _ => {
                root = PathBuf::from(arg);
            }
        }
    }
    Ok(root)
}
