//! Score command - show how one candidate scores against a query

use anyhow::{Context, Result};
use colored::*;
use hintwise_core::{score_breakdown, ScoreBreakdown};
use serde::Serialize;

/// JSON shape of a score report
#[derive(Debug, Serialize)]
struct ScoreReport<'a> {
    query: &'a str,
    candidate: &'a str,
    #[serde(flatten)]
    breakdown: ScoreBreakdown,
    total: f64,
    accepted: bool,
}

/// Print the composite score breakdown of `candidate` against `query`
pub fn run(query: &str, candidate: &str, json: bool) -> Result<()> {
    let breakdown = score_breakdown(query, candidate);

    if json {
        let report = ScoreReport {
            query,
            candidate,
            breakdown,
            total: breakdown.total(),
            accepted: breakdown.is_accepted(),
        };
        let json = serde_json::to_string_pretty(&report).context("Failed to serialize score")?;
        println!("{}", json);
    } else {
        print!("{}", format_breakdown(query, candidate, &breakdown));
    }

    Ok(())
}

fn format_breakdown(query: &str, candidate: &str, breakdown: &ScoreBreakdown) -> String {
    let verdict = if breakdown.is_accepted() {
        "accepted".green().bold()
    } else {
        "rejected".red().bold()
    };

    let mut out = format!("'{}' vs '{}'\n", query, candidate.bold());
    out.push_str(&format!("  jaro-winkler     {:.4}\n", breakdown.base));
    out.push_str(&format!("  exact match     +{:.4}\n", breakdown.exact_match));
    out.push_str(&format!("  containment     +{:.4}\n", breakdown.containment));
    out.push_str(&format!(
        "  token overlap   +{:.4}  ({} pairs)\n",
        breakdown.token_overlap, breakdown.matched_token_pairs
    ));
    out.push_str(&format!("  multi-token     +{:.4}\n", breakdown.multi_token));
    out.push_str(&format!("  length penalty  -{:.4}\n", breakdown.length_penalty));
    out.push_str(&format!("  total            {:.4}  {}\n", breakdown.total(), verdict));
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    #[serial]
    fn test_format_breakdown_accepted() {
        colored::control::set_override(false);
        let text = format_breakdown("Lenght", "Length", &score_breakdown("Lenght", "Length"));
        colored::control::unset_override();

        assert!(text.starts_with("'Lenght' vs 'Length'\n"));
        assert!(text.contains("jaro-winkler     0.9667"));
        assert!(text.contains("total            0.9667  accepted"));
    }

    #[test]
    #[serial]
    fn test_format_breakdown_rejected() {
        colored::control::set_override(false);
        let text = format_breakdown("qqq", "Length", &score_breakdown("qqq", "Length"));
        colored::control::unset_override();

        assert!(text.contains("rejected"));
    }

    #[test]
    fn test_run_json() {
        assert!(run("getUsr", "getUserName", true).is_ok());
    }
}
