//! Output rendering

use std::fmt::Write;

use clap::ValueEnum;

use cvscan_core::{CvSections, MatchMap, SearchResponse};

use crate::error::Result;

/// Output format for command results
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Pretty-printed JSON
    #[default]
    Json,
    /// Human-readable listing
    Text,
}

pub fn render_search(response: &SearchResponse, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(response)?),
        OutputFormat::Text => Ok(search_text(response)),
    }
}

pub fn render_sections(sections: &CvSections, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(sections)?),
        OutputFormat::Text => Ok(sections_text(sections)),
    }
}

fn join_counts(map: &MatchMap) -> String {
    map.iter()
        .map(|(key, count)| format!("{key}={count}"))
        .collect::<Vec<_>>()
        .join(", ")
}

// Writing to a String cannot fail
fn search_text(response: &SearchResponse) -> String {
    let mut out = String::new();
    if response.applicants.is_empty() {
        out.push_str("No matching applicants.\n");
    }
    for (rank, applicant) in response.applicants.iter().enumerate() {
        let _ = writeln!(
            out,
            "{}. {} (#{}) - {} match(es)",
            rank + 1,
            applicant.name,
            applicant.id,
            applicant.match_count
        );
        if !applicant.matched_keywords.is_empty() {
            let _ = writeln!(out, "   exact: {}", join_counts(&applicant.matched_keywords));
        }
        if let Some(fuzzy) = &applicant.fuzzy_matched_keywords {
            let _ = writeln!(out, "   fuzzy: {}", join_counts(fuzzy));
        }
    }
    let _ = writeln!(
        out,
        "Scanned {} CVs | exact {:.2} ms | fuzzy {:.2} ms",
        response.cvs_scanned, response.exact_runtime_ms, response.fuzzy_runtime_ms
    );
    out
}

fn sections_text(sections: &CvSections) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Summary\n  {}", sections.summary);
    for (title, lines) in [
        ("Skills", &sections.skills),
        ("Experience", &sections.experience),
        ("Education", &sections.education),
    ] {
        let _ = writeln!(out, "{title}");
        for line in lines {
            let _ = writeln!(out, "  {line}");
        }
    }
    out
}
