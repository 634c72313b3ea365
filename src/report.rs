use crate::analyzer::Analysis;
use std::io::{self, Write};

// The report caps inbound examples per error URL; the analyzer keeps the
// full list.
const MAX_INBOUND_EXAMPLES: usize = 5;

pub fn write_report<W: Write>(out: &mut W, analysis: &Analysis) -> io::Result<()> {
    writeln!(out, "=== REDIRECT CHAINS ===")?;
    if analysis.chains.is_empty() {
        writeln!(out, "No redirect chains found")?;
    } else {
        for chain in &analysis.chains {
            writeln!(
                out,
                "Chain: {} -> {} -> {}",
                chain.source, chain.via, chain.destination
            )?;
        }
    }

    writeln!(out)?;
    writeln!(out, "=== REDIRECT LOOPS ===")?;
    if analysis.loops.is_empty() {
        writeln!(out, "No redirect loops found")?;
    } else {
        for pair in &analysis.loops {
            writeln!(out, "Loop: {} <-> {}", pair.source, pair.destination)?;
        }
    }

    writeln!(out)?;
    writeln!(out, "=== PROBLEMATIC PATTERNS ===")?;

    writeln!(out)?;
    writeln!(out, "Redirects to self:")?;
    for r in &analysis.self_redirects {
        writeln!(out, "Self-redirect: {} -> {}", r.source, r.destination)?;
    }

    writeln!(out)?;
    writeln!(out, "Similar source/destination:")?;
    for r in &analysis.trailing_slash {
        writeln!(out, "Trailing slash issue: {} -> {}", r.source, r.destination)?;
    }

    writeln!(out)?;
    writeln!(out, "=== GSC ERROR URLS IN REDIRECTS ===")?;
    for usage in &analysis.error_urls {
        if let Some(dest) = &usage.outbound {
            writeln!(out, "Source: {} -> {}", usage.url, dest)?;
        }
        if !usage.inbound.is_empty() {
            writeln!(
                out,
                "Destination: {} redirects point to {}",
                usage.inbound.len(),
                usage.url
            )?;
            for source in usage.inbound.iter().take(MAX_INBOUND_EXAMPLES) {
                writeln!(out, "  {} -> {}", source, usage.url)?;
            }
            if usage.inbound.len() > MAX_INBOUND_EXAMPLES {
                writeln!(
                    out,
                    "  ... and {} more",
                    usage.inbound.len() - MAX_INBOUND_EXAMPLES
                )?;
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analyzer::{Analysis, ErrorUrlUsage};

    fn render(analysis: &Analysis) -> String {
        let mut buf = Vec::new();
        write_report(&mut buf, analysis).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn empty_analysis_prints_every_section() {
        let text = render(&Analysis::default());
        assert!(text.contains("=== REDIRECT CHAINS ===\nNo redirect chains found"));
        assert!(text.contains("=== REDIRECT LOOPS ===\nNo redirect loops found"));
        assert!(text.contains("=== PROBLEMATIC PATTERNS ==="));
        assert!(text.contains("Redirects to self:"));
        assert!(text.contains("Similar source/destination:"));
        assert!(text.contains("=== GSC ERROR URLS IN REDIRECTS ==="));
    }

    #[test]
    fn sections_appear_in_fixed_order() {
        let text = render(&Analysis::default());
        let chains = text.find("=== REDIRECT CHAINS ===").unwrap();
        let loops = text.find("=== REDIRECT LOOPS ===").unwrap();
        let patterns = text.find("=== PROBLEMATIC PATTERNS ===").unwrap();
        let gsc = text.find("=== GSC ERROR URLS IN REDIRECTS ===").unwrap();
        assert!(chains < loops && loops < patterns && patterns < gsc);
    }

    #[test]
    fn inbound_examples_are_capped_at_five() {
        let inbound: Vec<String> = (0..7).map(|i| format!("/old-{}", i)).collect();
        let analysis = Analysis {
            error_urls: vec![ErrorUrlUsage {
                url: "/drinks".to_string(),
                outbound: None,
                inbound,
            }],
            ..Analysis::default()
        };
        let text = render(&analysis);
        assert!(text.contains("Destination: 7 redirects point to /drinks"));
        assert!(text.contains("  /old-4 -> /drinks"));
        assert!(!text.contains("  /old-5 -> /drinks"));
        assert!(text.contains("  ... and 2 more"));
    }

    #[test]
    fn exactly_five_inbound_prints_no_tail() {
        let inbound: Vec<String> = (0..5).map(|i| format!("/old-{}", i)).collect();
        let analysis = Analysis {
            error_urls: vec![ErrorUrlUsage {
                url: "/drinks".to_string(),
                outbound: None,
                inbound,
            }],
            ..Analysis::default()
        };
        let text = render(&analysis);
        assert!(text.contains("  /old-4 -> /drinks"));
        assert!(!text.contains("more"));
    }
}
