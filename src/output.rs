//! CLI output formatting for generation runs.
//!
//! Each section the populator visited is shown with its outcome: populated
//! item counts, or why it was skipped. Skips are a designed degradation, not
//! errors, and are displayed as such.
//!
//! ```text
//! Sections
//!     identity: populated (4 regions)
//!     services: populated (2 items)
//!     gallery: skipped (no data)
//! Rendered 10 of 12 sections → dist/index.html
//! ```
//!
//! Format functions are pure (return `Vec<String>`, no I/O) with `print_*`
//! wrappers that write to stdout.

use crate::generate::RenderSummary;
use crate::page::{PopulateReport, Section, SectionStatus};

/// Human form of one section outcome.
fn status_line(section: Section, status: SectionStatus) -> String {
    let detail = match status {
        SectionStatus::Populated { items } => {
            // Identity/theme/contact/footer count regions, the list sections
            // count items; the distinction doesn't matter for display.
            let noun = match section {
                Section::Identity | Section::Theme | Section::Contact | Section::Footer => {
                    "regions"
                }
                _ => "items",
            };
            format!("populated ({items} {noun})")
        }
        SectionStatus::SkippedNoData => "skipped (no data)".to_string(),
        SectionStatus::SkippedNoRegion => "skipped (no region)".to_string(),
    };
    format!("    {}: {}", section.label(), detail)
}

/// Format the section inventory of one populate pass.
pub fn format_report(report: &PopulateReport) -> Vec<String> {
    let mut lines = vec!["Sections".to_string()];
    for (section, status) in &report.sections {
        lines.push(status_line(*section, *status));
    }
    lines
}

/// Format the outcome of a full generation run.
pub fn format_render_output(summary: &RenderSummary) -> Vec<String> {
    match (&summary.report, &summary.load_error) {
        (Some(report), _) => {
            let mut lines = format_report(report);
            lines.push(format!(
                "Rendered {} of {} sections → {}",
                report.populated_count(),
                report.sections.len(),
                summary.output_path.display()
            ));
            lines
        }
        (None, Some(error)) => vec![
            format!("Config error: {error}"),
            format!(
                "Wrote unpopulated skeleton → {}",
                summary.output_path.display()
            ),
        ],
        (None, None) => vec![format!("→ {}", summary.output_path.display())],
    }
}

/// Print render output to stdout.
pub fn print_render_output(summary: &RenderSummary) {
    for line in format_render_output(summary) {
        println!("{}", line);
    }
}

/// Print a section inventory to stdout (used by `check`).
pub fn print_report(report: &PopulateReport) {
    for line in format_report(report) {
        println!("{}", line);
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::page::{RenderContext, Skeleton, populate};
    use crate::test_helpers::{minimal_config, sample_config};
    use chrono::Weekday;
    use std::path::PathBuf;

    fn report_for(config: &crate::config::SiteConfig) -> PopulateReport {
        let mut skeleton = Skeleton::full();
        populate(
            config,
            &mut skeleton,
            &RenderContext {
                today: Weekday::Mon,
                year: 2026,
            },
        )
    }

    #[test]
    fn full_config_report_lists_all_sections_populated() {
        let lines = format_report(&report_for(&sample_config()));
        assert_eq!(lines[0], "Sections");
        assert_eq!(lines.len(), 13);
        assert!(lines.iter().any(|l| l == "    services: populated (2 items)"));
        assert!(lines.iter().any(|l| l == "    hours: populated (7 items)"));
        assert!(!lines.iter().any(|l| l.contains("skipped")));
    }

    #[test]
    fn minimal_config_report_shows_skips() {
        let lines = format_report(&report_for(&minimal_config()));
        assert!(lines.iter().any(|l| l == "    gallery: skipped (no data)"));
        assert!(lines.iter().any(|l| l.starts_with("    identity: populated")));
    }

    #[test]
    fn render_output_summarizes_counts_and_path() {
        let summary = RenderSummary {
            output_path: PathBuf::from("dist/index.html"),
            load_error: None,
            report: Some(report_for(&sample_config())),
        };
        let lines = format_render_output(&summary);
        assert_eq!(
            lines.last().unwrap(),
            "Rendered 12 of 12 sections → dist/index.html"
        );
    }

    #[test]
    fn render_output_reports_load_failure() {
        let summary = RenderSummary {
            output_path: PathBuf::from("dist/index.html"),
            load_error: Some("JSON parse error: oops".to_string()),
            report: None,
        };
        let lines = format_render_output(&summary);
        assert_eq!(lines[0], "Config error: JSON parse error: oops");
        assert_eq!(lines[1], "Wrote unpopulated skeleton → dist/index.html");
    }
}
