/*!
 * Reporting functionality for dumptxt
 *
 * Renders the statistics of a run as console tables using the tabled
 * library.
 */

use std::time::Duration;

use tabled::{
    settings::{object::Columns, Alignment, Modify, Padding, Style},
    Table, Tabled,
};

use crate::concat::RunStatistics;
use crate::utils::format_file_size;

/// Information about a file in the report
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FileReportInfo {
    /// Number of lines in the file
    pub lines: usize,
    /// Size of the file content in bytes
    pub bytes: u64,
}

/// Summary of a finished run
#[derive(Debug, Clone)]
pub struct ScanReport {
    /// Output file path
    pub output_file: String,
    /// Time taken for the run
    pub duration: Duration,
    /// Statistics collected by the concatenator
    pub statistics: RunStatistics,
}

/// Format of the report output
pub enum ReportFormat {
    /// Console table output
    ConsoleTable,
}

/// Report generator for run results
pub struct Reporter {
    format: ReportFormat,
}

impl Reporter {
    /// Create a new reporter
    pub fn new(format: ReportFormat) -> Self {
        Self { format }
    }

    /// Format a number with human-readable units
    fn format_number(&self, num: usize) -> String {
        if num >= 1_000_000 {
            format!("{:.1}M", num as f64 / 1_000_000.0)
        } else if num >= 1_000 {
            format!("{:.1}K", num as f64 / 1_000.0)
        } else {
            num.to_string()
        }
    }

    /// Generate a report string for a run
    pub fn generate_report(&self, report: &ScanReport) -> String {
        match self.format {
            ReportFormat::ConsoleTable => self.generate_console_report(report),
        }
    }

    /// Print the report to stdout
    pub fn print_report(&self, report: &ScanReport) {
        println!("\n{}", self.generate_report(report));
    }

    // Keep the trailing path segments that fit in max_len
    fn format_path(&self, path: &str, max_len: usize) -> String {
        if path.chars().count() <= max_len {
            return path.to_string();
        }

        let mut segments = Vec::new();
        let mut current_len = 3; // "..."
        for part in path.rsplit('/') {
            let part_len = part.chars().count() + 1;
            if current_len + part_len > max_len {
                break;
            }
            segments.push(part);
            current_len += part_len;
        }

        if segments.is_empty() {
            let skip = path.chars().count() - max_len.saturating_sub(3);
            let tail: String = path.chars().skip(skip).collect();
            return format!("...{}", tail);
        }

        let mut result = String::from("...");
        for part in segments.iter().rev() {
            result.push('/');
            result.push_str(part);
        }
        result
    }

    fn create_summary_table(&self, report: &ScanReport) -> String {
        #[derive(Tabled)]
        struct SummaryRow {
            #[tabled(rename = "Metric")]
            key: String,

            #[tabled(rename = "Value")]
            value: String,
        }

        let stats = &report.statistics;
        let mut rows = vec![
            SummaryRow {
                key: "📂 Output File".to_string(),
                value: report.output_file.clone(),
            },
            SummaryRow {
                key: "⏱️ Process Time".to_string(),
                value: format!("{:.4?}", report.duration),
            },
            SummaryRow {
                key: "📄 Files Written".to_string(),
                value: self.format_number(stats.files_written),
            },
            SummaryRow {
                key: "🚫 Files Excluded".to_string(),
                value: self.format_number(stats.files_excluded),
            },
        ];

        if !stats.unreadable_files.is_empty() {
            rows.push(SummaryRow {
                key: "⚠️ Unreadable Skipped".to_string(),
                value: self.format_number(stats.unreadable_files.len()),
            });
        }

        rows.push(SummaryRow {
            key: "📝 Total Lines".to_string(),
            value: self.format_number(stats.total_lines),
        });

        rows.push(SummaryRow {
            key: "📦 Output Size".to_string(),
            value: format_file_size(stats.bytes_written),
        });

        let mut table = Table::new(rows);
        table
            .with(Style::rounded())
            .with(Padding::new(1, 1, 0, 0))
            .with(Modify::new(Columns::new(..)).with(Alignment::left()));

        table.to_string()
    }

    fn create_files_table(&self, report: &ScanReport) -> String {
        #[derive(Tabled)]
        struct FileRow {
            #[tabled(rename = "File Path")]
            path: String,

            #[tabled(rename = "Lines")]
            lines: String,

            #[tabled(rename = "Size")]
            size: String,
        }

        let details = &report.statistics.file_details;

        // Largest first when only the top entries are shown
        let mut files: Vec<_> = details.iter().collect();
        if details.len() > 15 {
            files.sort_by(|(_, a), (_, b)| b.bytes.cmp(&a.bytes));
            files.truncate(10);
        }

        let rows: Vec<FileRow> = files
            .iter()
            .map(|(path, info)| FileRow {
                path: self.format_path(path, 60),
                lines: self.format_number(info.lines),
                size: format_file_size(info.bytes),
            })
            .collect();

        let mut table = Table::new(rows);
        table
            .with(Style::rounded())
            .with(Padding::new(1, 1, 0, 0))
            .with(Modify::new(Columns::new(..)).with(Alignment::left()));

        table.to_string()
    }

    fn create_unreadable_table(&self, report: &ScanReport) -> String {
        #[derive(Tabled)]
        struct SkippedRow {
            #[tabled(rename = "File Path")]
            path: String,

            #[tabled(rename = "Reason")]
            reason: String,
        }

        let rows: Vec<SkippedRow> = report
            .statistics
            .unreadable_files
            .iter()
            .map(|(path, reason)| SkippedRow {
                path: self.format_path(&path.display().to_string(), 60),
                reason: reason.clone(),
            })
            .collect();

        let mut table = Table::new(rows);
        table
            .with(Style::rounded())
            .with(Padding::new(1, 1, 0, 0))
            .with(Modify::new(Columns::new(..)).with(Alignment::left()));

        table.to_string()
    }

    fn generate_console_report(&self, report: &ScanReport) -> String {
        let files_title = if report.statistics.file_details.len() > 15 {
            "📋  TOP 10 LARGEST FILES"
        } else {
            "📋  CONCATENATED FILES"
        };

        let mut out = format!("{}\n{}\n", files_title, self.create_files_table(report));

        if !report.statistics.unreadable_files.is_empty() {
            out.push_str(&format!(
                "\n⚠️  SKIPPED UNREADABLE FILES\n{}\n",
                self.create_unreadable_table(report)
            ));
        }

        out.push_str(&format!(
            "\n✅  CONCATENATION COMPLETE\n{}",
            self.create_summary_table(report)
        ));
        out
    }
}
