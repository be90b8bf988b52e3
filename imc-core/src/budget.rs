//! Per-channel budget rows and campaign metadata.

use crate::channel::Channel;
use crate::series::DailyPoint;
use serde::{Deserialize, Serialize};

/// Budget allocation and delivery figures for a single channel.
///
/// `share_percent` values across all channels are expected to sum to ~100
/// and `cost <= allocated` is expected, but neither is enforced: the rows
/// come straight from the campaign plan and are displayed as-is.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChannelBudget {
    pub channel: Channel,
    /// Planned budget for this channel, USD.
    pub allocated: f64,
    /// Share of the total campaign budget, percent.
    pub share_percent: f64,
    /// Short description of what the budget covers.
    pub scope: String,
    /// Impressions delivered to date.
    pub impressions: u64,
    /// Click-through rate, percent.
    pub ctr_percent: f64,
    /// Spend to date, USD.
    pub cost: f64,
    /// Daily reach/engagement series, date-aligned across all channels.
    pub daily_series: Vec<DailyPoint>,
}

/// Campaign-level metadata shown in the header and used for the
/// budget-spent KPI denominator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CampaignMeta {
    pub client_name: String,
    pub campaign_title: String,
    pub duration: String,
    pub total_budget: f64,
}
