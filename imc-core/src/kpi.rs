//! Scalar KPI rollups shown on the dashboard cards.

use serde::{Deserialize, Serialize};

/// Period-over-period change percentages for the KPI cards.
///
/// These are externally supplied campaign-plan constants, not derived from
/// historical snapshots. Treat them as inputs everywhere.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct KpiDeltas {
    pub reach_change_percent: f64,
    pub engagement_change_percent: f64,
    pub visits_change_percent: f64,
}

/// Scalar rollup of campaign performance.
///
/// `total_reach`, `engagement_rate_percent`, `budget_spent`,
/// `budget_spent_percent`, and `avg_daily_volume` are derived by the
/// aggregator; the rest are supplied by the campaign plan.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KpiSnapshot {
    pub total_reach: u64,
    pub engagement_rate_percent: f64,
    pub budget_spent: f64,
    /// Spend as a percentage of the total campaign budget.
    pub budget_spent_percent: f64,
    pub ir_site_visits: u64,
    pub stock_volume_influence_percent: f64,
    pub avg_daily_volume: f64,
    pub deltas: KpiDeltas,
}
