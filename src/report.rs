use crate::stats::{ScanReport, ScanStats};
use crate::utils::format_number;

pub fn render_report(report: &ScanReport) -> String {
    format!(
        "Vulnerable domains ({}):\n\n{}\n",
        report.vulnerable.len(),
        report.vulnerable.join("\n")
    )
}

pub fn render_stats(stats: &ScanStats) -> String {
    format!(
        "\n--- Scan Summary ---\n\
         Lines read: {}\n\
         Malformed lines skipped: {}\n\
         Hostnames checked: {}\n\
         Vulnerable domains: {}\n",
        format_number(stats.lines_read),
        format_number(stats.malformed_skipped),
        format_number(stats.hostnames_checked),
        format_number(stats.vulnerable)
    )
}

pub fn print_scan_results(report: &ScanReport, show_stats: bool) {
    print!("{}", render_report(report));
    if show_stats {
        print!("{}", render_stats(&report.stats));
    }
}
