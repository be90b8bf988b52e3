//! Campaign-wide rollups of per-channel series.
//!
//! Totals are derived on every read, never stored: the projector and the
//! KPI cards both recompute from the channel list whenever it changes, so
//! a silently stale rollup cannot be observed.

use imc_core::budget::{CampaignMeta, ChannelBudget};
use imc_core::kpi::{KpiDeltas, KpiSnapshot};
use imc_core::series::{DailyPoint, VolumeDataPoint};
use std::fmt;

/// Errors from campaign aggregation.
#[derive(Debug, PartialEq, Eq, Clone)]
pub enum AggregateError {
    /// Channel series are not date-aligned; summing them index-wise would
    /// produce a silently wrong rollup, so this fails loudly instead.
    InconsistentSeriesLength { expected: usize, found: usize },
}

impl fmt::Display for AggregateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AggregateError::InconsistentSeriesLength { expected, found } => write!(
                f,
                "channel series lengths differ: expected {expected} points, found {found}"
            ),
        }
    }
}

impl std::error::Error for AggregateError {}

/// Sum per-channel daily series into campaign-wide daily totals.
///
/// All channels must carry series of the same length (the generator
/// guarantees this by construction); a mismatch is an error, never a
/// truncation. Date labels are taken from the first channel.
pub fn campaign_totals(channels: &[ChannelBudget]) -> Result<Vec<DailyPoint>, AggregateError> {
    let Some(first) = channels.first() else {
        return Ok(Vec::new());
    };
    let expected = first.daily_series.len();
    for channel in channels {
        if channel.daily_series.len() != expected {
            return Err(AggregateError::InconsistentSeriesLength {
                expected,
                found: channel.daily_series.len(),
            });
        }
    }

    let mut totals: Vec<DailyPoint> = first
        .daily_series
        .iter()
        .map(|p| DailyPoint {
            date: p.date.clone(),
            reach: 0,
            engagement: 0,
        })
        .collect();
    for channel in channels {
        for (total, point) in totals.iter_mut().zip(&channel.daily_series) {
            total.reach += point.reach;
            total.engagement += point.engagement;
        }
    }
    Ok(totals)
}

/// Total campaign reach across all days.
pub fn total_reach(totals: &[DailyPoint]) -> u64 {
    totals.iter().map(|p| p.reach).sum()
}

/// Campaign-wide engagement rate as a percentage of reach.
///
/// Defined as 0 when total reach is 0, never NaN.
pub fn engagement_rate_percent(totals: &[DailyPoint]) -> f64 {
    let reach = total_reach(totals);
    if reach == 0 {
        return 0.0;
    }
    let engagement: u64 = totals.iter().map(|p| p.engagement).sum();
    100.0 * engagement as f64 / reach as f64
}

/// Total spend across all channels, USD.
pub fn budget_spent(channels: &[ChannelBudget]) -> f64 {
    channels.iter().map(|c| c.cost).sum()
}

/// Mean daily trading volume; 0 for an empty series.
pub fn avg_daily_volume(volume: &[VolumeDataPoint]) -> f64 {
    if volume.is_empty() {
        return 0.0;
    }
    volume.iter().map(|p| p.volume).sum::<f64>() / volume.len() as f64
}

/// Roll the whole campaign up into one KPI snapshot.
///
/// Visits, volume influence, and the change deltas are campaign-plan
/// constants passed through unchanged.
pub fn kpi_snapshot(
    meta: &CampaignMeta,
    channels: &[ChannelBudget],
    volume: &[VolumeDataPoint],
    ir_site_visits: u64,
    stock_volume_influence_percent: f64,
    deltas: KpiDeltas,
) -> Result<KpiSnapshot, AggregateError> {
    let totals = campaign_totals(channels)?;
    let spent = budget_spent(channels);
    let budget_spent_percent = if meta.total_budget > 0.0 {
        100.0 * spent / meta.total_budget
    } else {
        0.0
    };
    Ok(KpiSnapshot {
        total_reach: total_reach(&totals),
        engagement_rate_percent: engagement_rate_percent(&totals),
        budget_spent: spent,
        budget_spent_percent,
        ir_site_visits,
        stock_volume_influence_percent,
        avg_daily_volume: avg_daily_volume(volume),
        deltas,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use imc_core::channel::Channel;
    use imc_core::series::day_label;

    fn channel_with_series(channel: Channel, reaches: &[u64]) -> ChannelBudget {
        ChannelBudget {
            channel,
            allocated: 1000.0,
            share_percent: 50.0,
            scope: String::new(),
            impressions: 0,
            ctr_percent: 0.0,
            cost: 500.0,
            daily_series: reaches
                .iter()
                .enumerate()
                .map(|(i, &reach)| DailyPoint {
                    date: day_label(i as i32 + 1),
                    reach,
                    engagement: reach / 10,
                })
                .collect(),
        }
    }

    #[test]
    fn totals_are_exact_index_wise_sums() {
        let channels = vec![
            channel_with_series(Channel::Email, &[100, 200, 300]),
            channel_with_series(Channel::Meta, &[10, 20, 30]),
        ];
        let totals = campaign_totals(&channels).unwrap();

        assert_eq!(totals.len(), 3);
        for (i, expected_reach) in [110, 220, 330].into_iter().enumerate() {
            assert_eq!(totals[i].reach, expected_reach);
            assert_eq!(
                totals[i].engagement,
                channels[0].daily_series[i].engagement + channels[1].daily_series[i].engagement
            );
        }
        assert_eq!(totals[0].date, "Day 1");
    }

    #[test]
    fn mismatched_series_lengths_fail_loudly() {
        let channels = vec![
            channel_with_series(Channel::Email, &[1; 21]),
            channel_with_series(Channel::Meta, &[1; 20]),
        ];
        assert_eq!(
            campaign_totals(&channels),
            Err(AggregateError::InconsistentSeriesLength {
                expected: 21,
                found: 20
            })
        );
    }

    #[test]
    fn no_channels_means_empty_totals() {
        assert!(campaign_totals(&[]).unwrap().is_empty());
    }

    #[test]
    fn engagement_rate_is_zero_for_zero_reach() {
        let totals = vec![DailyPoint {
            date: day_label(1),
            reach: 0,
            engagement: 0,
        }];
        assert_eq!(engagement_rate_percent(&totals), 0.0);
        assert_eq!(engagement_rate_percent(&[]), 0.0);
    }

    #[test]
    fn engagement_rate_matches_hand_computation() {
        let channels = vec![channel_with_series(Channel::Email, &[1000, 1000])];
        let totals = campaign_totals(&channels).unwrap();
        // 200 engagement over 2000 reach
        assert!((engagement_rate_percent(&totals) - 10.0).abs() < 1e-9);
    }

    #[test]
    fn avg_daily_volume_handles_empty_input() {
        assert_eq!(avg_daily_volume(&[]), 0.0);
        let volume = vec![
            VolumeDataPoint {
                date: day_label(1),
                volume: 100.0,
                event: None,
            },
            VolumeDataPoint {
                date: day_label(2),
                volume: 300.0,
                event: None,
            },
        ];
        assert_eq!(avg_daily_volume(&volume), 200.0);
    }

    #[test]
    fn kpi_snapshot_rolls_up_spend_and_budget_share() {
        let meta = CampaignMeta {
            client_name: String::new(),
            campaign_title: String::new(),
            duration: String::new(),
            total_budget: 2000.0,
        };
        let channels = vec![
            channel_with_series(Channel::Email, &[100]),
            channel_with_series(Channel::Meta, &[200]),
        ];
        let deltas = KpiDeltas {
            reach_change_percent: 1.0,
            engagement_change_percent: 2.0,
            visits_change_percent: 3.0,
        };

        let kpi = kpi_snapshot(&meta, &channels, &[], 8750, 12.4, deltas).unwrap();

        assert_eq!(kpi.total_reach, 300);
        assert_eq!(kpi.budget_spent, 1000.0);
        assert_eq!(kpi.budget_spent_percent, 50.0);
        assert_eq!(kpi.ir_site_visits, 8750);
        assert_eq!(kpi.deltas, deltas);
    }
}
