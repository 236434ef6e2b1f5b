use colored::Colorize;
use tabled::{Table, Tabled, settings::{Style, Modify, object::Rows, Alignment}};

use crate::models::{FoundEndpoints, HttpMethod, ProbeOutcome, ProbeReport};

pub const NOTHING_FOUND: &str = "No luck. Maybe try sacrificing a goat to the API gods?";

pub struct ConsoleReporter;

#[derive(Tabled)]
struct TableRow {
    #[tabled(rename = "Endpoint")]
    endpoint: String,
    #[tabled(rename = "Methods")]
    methods: String,
}

impl ConsoleReporter {
    pub fn new() -> Self {
        Self
    }

    pub fn print_banner(&self, base_url: &str) {
        println!("{} {}", "Speculating API at".bold(), base_url.cyan());
        println!(
            "{}\n",
            "Disclaimer: This is basically API astrology. Results may vary.".dimmed()
        );
    }

    pub fn print_scan_start(&self) {
        println!(
            "\n{}",
            "Speculating common endpoints... (cross your fingers)".bold()
        );
    }

    pub fn print_trying(&self, endpoint: &str) {
        println!("\nTrying '/{}':", endpoint);
    }

    pub fn print_found(&self, method: HttpMethod, status: u16) {
        println!("{}", Self::format_found(method, status));
    }

    pub fn print_summary(&self, found: &FoundEndpoints) {
        println!("\n{}", Self::format_summary(found));
    }

    pub fn print_interactive_hint(&self) {
        println!(
            "\n{}",
            "Try speculating your own endpoint (or type 'quit'):".bold()
        );
    }

    pub fn print_report(&self, report: &ProbeReport) {
        println!("\nResults for '{}':", report.path);
        for line in Self::format_report(report) {
            println!("{}", line);
        }
        println!();
    }

    pub fn format_found(method: HttpMethod, status: u16) -> String {
        format!(
            "  {}: {} - Found something! (probably)",
            method.to_string().bold(),
            status.to_string().green()
        )
    }

    pub fn format_summary(found: &FoundEndpoints) -> String {
        if found.is_empty() {
            return NOTHING_FOUND.yellow().to_string();
        }

        let rows: Vec<TableRow> = found
            .entries()
            .iter()
            .map(|entry| TableRow {
                endpoint: format!("/{}", entry.path),
                methods: entry
                    .methods
                    .iter()
                    .map(|m| m.to_string())
                    .collect::<Vec<_>>()
                    .join(", "),
            })
            .collect();

        let table = Table::new(rows)
            .with(Style::rounded())
            .with(Modify::new(Rows::first()).with(Alignment::center()))
            .to_string();

        format!(
            "{}\n{}",
            "Found endpoints (or at least got responses):".green().bold(),
            table
        )
    }

    /// Lines for a single ad-hoc probe; 5xx answers are left out.
    pub fn format_report(report: &ProbeReport) -> Vec<String> {
        let mut lines = Vec::new();

        for (method, outcome) in &report.results {
            if !outcome.is_reportable() {
                continue;
            }
            match outcome {
                ProbeOutcome::Success { status, preview, .. } => {
                    lines.push(format!("  {}: Status {}", method, Self::paint_status(*status)));
                    if let Some(preview) = preview {
                        lines.push(format!("     Preview: {}", preview));
                    }
                }
                ProbeOutcome::Failure { message } => {
                    lines.push(format!("  {}: {}", method, message.red()));
                }
            }
        }

        lines
    }

    fn paint_status(status: u16) -> String {
        match status {
            200..=299 => status.to_string().green().to_string(),
            300..=399 => status.to_string().cyan().to_string(),
            _ => status.to_string().yellow().to_string(),
        }
    }
}

impl Default for ConsoleReporter {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_empty_summary_is_nothing_found() {
        let summary = ConsoleReporter::format_summary(&FoundEndpoints::new());
        assert!(summary.contains(NOTHING_FOUND));
    }

    #[test]
    fn test_summary_lists_paths_and_methods() {
        let mut found = FoundEndpoints::new();
        found.record("users", HttpMethod::Get);
        found.record("users", HttpMethod::Post);
        found.record("health", HttpMethod::Get);

        let summary = ConsoleReporter::format_summary(&found);
        assert!(!summary.contains(NOTHING_FOUND));
        assert!(summary.contains("/users"));
        assert!(summary.contains("GET, POST"));
        assert!(summary.contains("/health"));
    }

    #[test]
    fn test_report_skips_server_errors() {
        let mut report = ProbeReport::new("docs");
        report.push(HttpMethod::Get, ProbeOutcome::success(200, HashMap::new(), "hello"));
        report.push(HttpMethod::Post, ProbeOutcome::success(500, HashMap::new(), "boom"));
        report.push(HttpMethod::Put, ProbeOutcome::failure("operation timed out"));

        let lines = ConsoleReporter::format_report(&report);
        assert_eq!(lines.len(), 3);
        assert!(lines[0].contains("GET: Status"));
        assert!(lines[1].contains("Preview: hello"));
        assert!(lines[2].contains("PUT: "));
        assert!(lines[2].contains("operation timed out"));
        assert!(lines.iter().all(|l| !l.contains("POST")));
    }

    #[test]
    fn test_report_without_preview_has_no_preview_line() {
        let mut report = ProbeReport::new("auth");
        report.push(HttpMethod::Delete, ProbeOutcome::success(404, HashMap::new(), ""));

        let lines = ConsoleReporter::format_report(&report);
        assert_eq!(lines.len(), 1);
        assert!(lines[0].contains("DELETE: Status"));
    }
}
