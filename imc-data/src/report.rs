//! Channel-performance CSV report.
//!
//! The column layout and the `N/A` rule are a file contract shared by the
//! dashboard's export button and the CLI; keep them in sync with any
//! external consumers before changing either.

use imc_core::budget::ChannelBudget;
use std::fmt;

/// Fixed download/output name for the campaign report.
pub const CAMPAIGN_REPORT_FILENAME: &str = "campaign-report.csv";

/// Report header row, in column order.
const HEADER: [&str; 6] = [
    "Channel",
    "Budget (USD)",
    "Spent (USD)",
    "Impressions",
    "CTR (%)",
    "Cost Per Result (USD)",
];

/// Errors from report serialization.
#[derive(Debug)]
pub enum ReportError {
    Csv(csv::Error),
    NonUtf8,
}

impl fmt::Display for ReportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReportError::Csv(e) => write!(f, "csv serialization failed: {e}"),
            ReportError::NonUtf8 => write!(f, "report buffer is not valid UTF-8"),
        }
    }
}

impl std::error::Error for ReportError {}

impl From<csv::Error> for ReportError {
    fn from(e: csv::Error) -> Self {
        ReportError::Csv(e)
    }
}

/// Cost per result: spend divided by estimated clicks
/// (`impressions * ctr / 100`). `None` when any input is non-positive,
/// rendered as the literal `N/A`.
pub fn cost_per_result(channel: &ChannelBudget) -> Option<f64> {
    if channel.cost <= 0.0 || channel.impressions == 0 || channel.ctr_percent <= 0.0 {
        return None;
    }
    let clicks = channel.impressions as f64 * channel.ctr_percent / 100.0;
    Some(channel.cost / clicks)
}

/// Build the campaign report CSV as an in-memory string, one row per
/// channel in list order.
pub fn build_report(channels: &[ChannelBudget]) -> Result<String, ReportError> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record(HEADER)?;
    for channel in channels {
        let cpr = match cost_per_result(channel) {
            Some(value) => format!("{value:.2}"),
            None => "N/A".to_string(),
        };
        writer.write_record([
            channel.channel.label().to_string(),
            format!("{:.0}", channel.allocated),
            format!("{:.0}", channel.cost),
            channel.impressions.to_string(),
            format!("{:.2}", channel.ctr_percent),
            cpr,
        ])?;
    }
    let bytes = writer
        .into_inner()
        .map_err(|e| ReportError::Csv(e.into_error().into()))?;
    String::from_utf8(bytes).map_err(|_| ReportError::NonUtf8)
}

#[cfg(test)]
mod tests {
    use super::*;
    use imc_core::channel::Channel;

    fn channel(channel: Channel, cost: f64, impressions: u64, ctr: f64) -> ChannelBudget {
        ChannelBudget {
            channel,
            allocated: 8000.0,
            share_percent: 23.0,
            scope: String::new(),
            impressions,
            ctr_percent: ctr,
            cost,
            daily_series: Vec::new(),
        }
    }

    #[test]
    fn header_row_is_the_pinned_contract() {
        let report = build_report(&[]).unwrap();
        assert_eq!(
            report.lines().next().unwrap(),
            "Channel,Budget (USD),Spent (USD),Impressions,CTR (%),Cost Per Result (USD)"
        );
    }

    #[test]
    fn cost_per_result_matches_reference_fixture() {
        // 5500 / (350000 * 0.032) = 0.4910... -> "0.49"
        let email = channel(Channel::Email, 5500.0, 350_000, 3.2);
        let report = build_report(&[email]).unwrap();
        let row = report.lines().nth(1).unwrap();
        assert_eq!(row, "Email Engine,8000,5500,350000,3.20,0.49");
    }

    #[test]
    fn zero_cost_renders_na() {
        let influencers = channel(Channel::Influencers, 0.0, 150_000, 3.5);
        let report = build_report(&[influencers]).unwrap();
        assert!(report.lines().nth(1).unwrap().ends_with(",N/A"));
    }

    #[test]
    fn zero_impressions_or_ctr_render_na() {
        assert_eq!(cost_per_result(&channel(Channel::Strategy, 4000.0, 0, 0.0)), None);
        assert_eq!(cost_per_result(&channel(Channel::Meta, 4000.0, 1000, 0.0)), None);
    }

    #[test]
    fn one_row_per_channel_in_order() {
        let report = build_report(&[
            channel(Channel::Strategy, 4000.0, 0, 0.0),
            channel(Channel::Email, 5500.0, 350_000, 3.2),
        ])
        .unwrap();
        let lines: Vec<&str> = report.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[1].starts_with("Strategy & Creative,"));
        assert!(lines[2].starts_with("Email Engine,"));
    }
}
