//! Fixed-width district summary for the terminal

use crate::consts::cli_consts::SUMMARY_DISTRICT_WIDTH;
use crate::format::group_thousands_u64;
use crate::sos::DistrictSummary;
use crate::sos::aggregate::totals_row;

const RULE_WIDTH: usize = 100;

/// Renders the district summary, rows in input order followed by a TOTAL row.
pub fn summary_table(summaries: &[DistrictSummary], record_count: usize, generated_at: &str) -> String {
    let heavy = "=".repeat(RULE_WIDTH);
    let light = "-".repeat(RULE_WIDTH);
    let mut lines = vec![
        heavy.clone(),
        "FLOOD SUPPORT SOS - DISTRICT WISE SUMMARY".to_string(),
        heavy.clone(),
        format!("Report Generated: {}", generated_at),
        format!("Total Records: {}", group_thousands_u64(record_count as u64)),
        light.clone(),
        format!(
            "{:<w$} {:>6} {:>9} {:>8} {:>9} {:>8} {:>11} {:>8} {:>9} {:>6}",
            "District",
            "Total",
            "People",
            "Pending",
            "Verified",
            "Rescued",
            "No Contact",
            "Missing",
            "Critical",
            "High",
            w = SUMMARY_DISTRICT_WIDTH
        ),
        light.clone(),
    ];

    for summary in summaries {
        lines.push(summary_line(summary));
    }

    lines.push(light);
    lines.push(summary_line(&totals_row(summaries)));
    lines.push(heavy);

    let mut out = lines.join("\n");
    out.push('\n');
    out
}

fn summary_line(summary: &DistrictSummary) -> String {
    // Long names are cut so the columns stay aligned.
    let name: String = summary
        .district
        .chars()
        .take(SUMMARY_DISTRICT_WIDTH - 1)
        .collect();
    format!(
        "{:<w$} {:>6} {:>9} {:>8} {:>9} {:>8} {:>11} {:>8} {:>9} {:>6}",
        name,
        summary.total,
        group_thousands_u64(summary.total_people),
        summary.pending,
        summary.verified,
        summary.rescued,
        summary.cannot_contact,
        summary.missing,
        summary.critical,
        summary.high,
        w = SUMMARY_DISTRICT_WIDTH
    )
}
