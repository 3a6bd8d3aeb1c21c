//! Output formatting for the CLI.

use crate::config::OutputFormat;
use crate::error::Result;
use colored::*;
use serde::Serialize;
use tabled::{
    builder::Builder,
    settings::{object::Rows, Alignment, Modify, Style},
};
use venlyn_analytics::{DailyPoint, DispositionSlice, KpiData, KpiTrend};
use venlyn_sla::TaskTimer;

/// Output formatter.
pub struct Formatter {
    format: OutputFormat,
    color_enabled: bool,
}

impl Formatter {
    /// Create a new formatter.
    pub fn new(format: OutputFormat, color_enabled: bool) -> Self {
        Self {
            format,
            color_enabled,
        }
    }

    /// Format headline KPIs.
    pub fn format_kpis(&self, kpis: &KpiData) -> Result<String> {
        match self.format {
            OutputFormat::Json => self.json(kpis),
            OutputFormat::Quiet => self.quiet(kpis),
            OutputFormat::Table => {
                let mut builder = Builder::default();
                builder.push_record(["Metric", "Value"]);
                builder.push_record(["Total calls", &kpis.total_calls.to_string()]);
                builder.push_record(["Answered", &kpis.answered_calls.to_string()]);
                builder.push_record(["Missed", &kpis.missed_calls.to_string()]);
                builder.push_record(["Booked jobs", &kpis.booked_jobs.to_string()]);
                builder.push_record(["Emergencies", &kpis.emergency_calls.to_string()]);
                builder.push_record(["Spam", &kpis.spam_calls.to_string()]);
                builder.push_record(["Total value", &format_cents(kpis.total_value)]);
                builder.push_record(["Answer rate", &format!("{:.1}%", kpis.answer_rate)]);
                builder.push_record(["Booking rate", &format!("{:.1}%", kpis.booking_rate)]);
                builder.push_record(["Avg call value", &format_cents(kpis.avg_call_value as u64)]);
                Ok(self.table(builder))
            }
        }
    }

    /// Format a period-over-period trend.
    pub fn format_trend(&self, trend: &KpiTrend) -> Result<String> {
        match self.format {
            OutputFormat::Json => self.json(trend),
            OutputFormat::Quiet => self.quiet(trend),
            OutputFormat::Table => {
                let mut builder = Builder::default();
                builder.push_record(["Metric", "Current", "Previous", "Delta"]);
                builder.push_record([
                    "Total calls".to_string(),
                    trend.current.total_calls.to_string(),
                    trend.previous.total_calls.to_string(),
                    format!("{:+}", trend.total_calls_delta()),
                ]);
                builder.push_record([
                    "Answer rate".to_string(),
                    format!("{:.1}%", trend.current.answer_rate),
                    format!("{:.1}%", trend.previous.answer_rate),
                    format!("{:+.1}pp", trend.answer_rate_delta()),
                ]);
                builder.push_record([
                    "Booking rate".to_string(),
                    format!("{:.1}%", trend.current.booking_rate),
                    format!("{:.1}%", trend.previous.booking_rate),
                    format!("{:+.1}pp", trend.booking_rate_delta()),
                ]);
                builder.push_record([
                    "Total value".to_string(),
                    format_cents(trend.current.total_value),
                    format_cents(trend.previous.total_value),
                    format!("{:+}", trend.total_value_delta()),
                ]);
                Ok(self.table(builder))
            }
        }
    }

    /// Format a daily time series.
    pub fn format_series(&self, series: &[DailyPoint]) -> Result<String> {
        match self.format {
            OutputFormat::Json => self.json(&series),
            OutputFormat::Quiet => self.quiet(&series),
            OutputFormat::Table => {
                let mut builder = Builder::default();
                builder.push_record(["Date", "Total", "Answered", "Missed"]);
                for point in series {
                    builder.push_record([
                        point.date.to_string(),
                        point.total.to_string(),
                        point.answered.to_string(),
                        point.missed.to_string(),
                    ]);
                }
                Ok(self.table(builder))
            }
        }
    }

    /// Format a disposition breakdown.
    pub fn format_breakdown(&self, slices: &[DispositionSlice]) -> Result<String> {
        match self.format {
            OutputFormat::Json => self.json(&slices),
            OutputFormat::Quiet => self.quiet(&slices),
            OutputFormat::Table => {
                if slices.is_empty() {
                    return Ok(self.colorize("No classified calls.", "yellow"));
                }
                let mut builder = Builder::default();
                builder.push_record(["Disposition", "Count", "Share"]);
                for slice in slices {
                    builder.push_record([
                        slice.disposition.as_str().to_string(),
                        slice.count.to_string(),
                        format!("{:.1}%", slice.percentage),
                    ]);
                }
                Ok(self.table(builder))
            }
        }
    }

    /// Format sorted SLA timers.
    pub fn format_timers(&self, timers: &[TaskTimer]) -> Result<String> {
        match self.format {
            OutputFormat::Json => self.json(&timers),
            OutputFormat::Quiet => self.quiet(&timers),
            OutputFormat::Table => {
                if timers.is_empty() {
                    return Ok(self.colorize("No open tasks.", "yellow"));
                }
                let mut builder = Builder::default();
                builder.push_record(["Task", "Remaining", "Status"]);
                for timer in timers {
                    builder.push_record([
                        timer.task_id.to_string()[..8].to_string(),
                        format!("{}m", timer.remaining_minutes),
                        timer.status.as_str().to_string(),
                    ]);
                }
                Ok(self.table(builder))
            }
        }
    }

    /// Format a success message.
    pub fn success(&self, message: &str) -> String {
        self.colorize(&format!("✓ {}", message), "green")
    }

    /// Format a warning message.
    pub fn warning(&self, message: &str) -> String {
        self.colorize(&format!("⚠ {}", message), "yellow")
    }

    fn json<T: Serialize>(&self, value: &T) -> Result<String> {
        Ok(serde_json::to_string_pretty(value)?)
    }

    fn quiet<T: Serialize>(&self, value: &T) -> Result<String> {
        Ok(serde_json::to_string(value)?)
    }

    fn table(&self, builder: Builder) -> String {
        let mut table = builder.build();
        table
            .with(Style::rounded())
            .with(Modify::new(Rows::first()).with(Alignment::center()));
        table.to_string()
    }

    /// Colorize text if color is enabled.
    fn colorize(&self, text: &str, color: &str) -> String {
        if !self.color_enabled {
            return text.to_string();
        }

        match color {
            "red" => text.red().to_string(),
            "green" => text.green().to_string(),
            "yellow" => text.yellow().to_string(),
            _ => text.to_string(),
        }
    }
}

/// Render integer cents as dollars.
fn format_cents(cents: u64) -> String {
    format!("${}.{:02}", cents / 100, cents % 100)
}

#[cfg(test)]
mod tests {
    use super::*;
    use venlyn_sla::SlaStatus;

    #[test]
    fn test_format_cents() {
        assert_eq!(format_cents(0), "$0.00");
        assert_eq!(format_cents(5), "$0.05");
        assert_eq!(format_cents(123_456), "$1234.56");
    }

    #[test]
    fn test_kpis_table_contains_metrics() {
        let formatter = Formatter::new(OutputFormat::Table, false);
        let output = formatter.format_kpis(&KpiData::default()).unwrap();

        assert!(output.contains("Total calls"));
        assert!(output.contains("Answer rate"));
    }

    #[test]
    fn test_kpis_json_uses_api_field_names() {
        let formatter = Formatter::new(OutputFormat::Json, false);
        let output = formatter.format_kpis(&KpiData::default()).unwrap();

        assert!(output.contains("totalCalls"));
        assert!(output.contains("avgCallValue"));
    }

    #[test]
    fn test_quiet_is_single_line() {
        let formatter = Formatter::new(OutputFormat::Quiet, false);
        let output = formatter.format_kpis(&KpiData::default()).unwrap();
        assert_eq!(output.lines().count(), 1);
    }

    #[test]
    fn test_empty_timers_message() {
        let formatter = Formatter::new(OutputFormat::Table, false);
        let output = formatter.format_timers(&[]).unwrap();
        assert!(output.contains("No open tasks"));
    }

    #[test]
    fn test_timer_table_truncates_ids() {
        let formatter = Formatter::new(OutputFormat::Table, false);
        let timers = vec![TaskTimer {
            task_id: venlyn_domain::TaskId::from_value(0xabcdef),
            remaining_minutes: 12,
            status: SlaStatus::Critical,
        }];
        let output = formatter.format_timers(&timers).unwrap();

        assert!(output.contains("12m"));
        assert!(output.contains("critical"));
    }

    #[test]
    fn test_colorize_disabled() {
        let formatter = Formatter::new(OutputFormat::Table, false);
        assert_eq!(formatter.success("done"), "✓ done");
    }
}
