use docdrift_core::types::ConsistencyReport;

const RULE_WIDTH: usize = 60;

/// Human-readable CI banner: score, verdict, gap warnings, suggestions, shared keywords.
pub fn render_summary(report: &ConsistencyReport, code_files: usize, doc_files: usize, max_listed_terms: usize) -> String {
    let heavy = "=".repeat(RULE_WIDTH);
    let light = "-".repeat(RULE_WIDTH);
    let mut lines = vec![
        heavy.clone(),
        "        DOCDRIFT - DOCUMENTATION CONSISTENCY REPORT".to_string(),
        heavy.clone(),
        format!("Code files:       {code_files} ({} tokens)", report.code_token_count),
        format!("Doc files:        {doc_files} ({} tokens)", report.doc_token_count),
        format!("Symmetric score:  {:.4}", report.score),
        format!("Status:           {} ({})", report.verdict, report.verdict.label()),
        light.clone(),
    ];

    if report.has_warnings() {
        lines.push(format!("WARNING: {} operational gap(s):", report.gaps.len()));
        for gap in &report.gaps {
            let concepts: Vec<&str> = gap.missing_concepts.iter().take(max_listed_terms).map(String::as_str).collect();
            lines.push(format!("  ! {}: found `{}`, docs mention none of: {}", gap.category, gap.trigger_found, concepts.join(", ")));
        }
        lines.push(light.clone());
    }

    if !report.suggestions.is_empty() {
        lines.push("Suggestions:".to_string());
        lines.extend(report.suggestions.iter().map(|s| format!("  - {s}")));
        lines.push(light);
    }

    let shared: Vec<&str> = report.shared_terms.iter().take(max_listed_terms).map(String::as_str).collect();
    let more = if report.shared_terms.len() > shared.len() { ", ..." } else { "" };
    lines.push(format!("Common keywords: {}{more}", if shared.is_empty() { "(none)".to_string() } else { shared.join(", ") }));
    lines.push(heavy);

    if report.verdict.passes() {
        lines.push("PASSED: documentation consistency is acceptable.".to_string());
    } else {
        lines.push(format!("FAILED: consistency score {:.4} is rated {}.", report.score, report.verdict));
    }
    lines.join("\n")
}
