//! The reference campaign dataset.
//!
//! Single construction path for both the dashboard and the CLI: the
//! Metalpha investor-visibility campaign plan (channel budgets, roadmap
//! phases, KPI plan constants) plus freshly generated daily series.

use crate::generator::{self, GenerateError, SeriesShape, SpikeEvent};
use imc_core::budget::{CampaignMeta, ChannelBudget};
use imc_core::channel::Channel;
use imc_core::kpi::KpiDeltas;
use imc_core::series::VolumeDataPoint;
use imc_core::timeline::{PhaseStatus, Timeline, TimelinePhase};
use rand::Rng;

/// Length of every generated series, in days.
pub const CAMPAIGN_DAYS: i32 = 21;

const VOLUME_BASE: f64 = 1_200_000.0;
const VOLUME_AMPLITUDE: f64 = 0.35;

/// Everything the dashboard needs, generated in-process.
#[derive(Debug, Clone)]
pub struct CampaignScenario {
    pub meta: CampaignMeta,
    pub channels: Vec<ChannelBudget>,
    pub timeline: Timeline,
    pub volume: Vec<VolumeDataPoint>,
    pub ir_site_visits: u64,
    pub stock_volume_influence_percent: f64,
    pub deltas: KpiDeltas,
}

/// One row of the campaign plan: budget figures plus the series shape the
/// generator fills in.
struct PlanRow {
    channel: Channel,
    allocated: f64,
    share_percent: f64,
    scope: &'static str,
    impressions: u64,
    ctr_percent: f64,
    cost: f64,
    shape: SeriesShape,
}

fn plan_rows() -> Vec<PlanRow> {
    // Strategy carries budget but no paid delivery, hence scale 0.
    vec![
        PlanRow {
            channel: Channel::Strategy,
            allocated: 4000.0,
            share_percent: 11.0,
            scope: "Message map, creative, compliance",
            impressions: 0,
            ctr_percent: 0.0,
            cost: 4000.0,
            shape: SeriesShape {
                scale: 0.0,
                noise_amplitude: 0.0,
                phase_offset: 0.0,
            },
        },
        PlanRow {
            channel: Channel::Email,
            allocated: 8000.0,
            share_percent: 23.0,
            scope: "500k DB, sequencing, analytics",
            impressions: 350_000,
            ctr_percent: 3.2,
            cost: 5500.0,
            shape: SeriesShape {
                scale: 16000.0,
                noise_amplitude: 0.25,
                phase_offset: 1.3,
            },
        },
        PlanRow {
            channel: Channel::Meta,
            allocated: 7000.0,
            share_percent: 20.0,
            scope: "Awareness video, carousels, remarketing",
            impressions: 450_000,
            ctr_percent: 1.8,
            cost: 4000.0,
            shape: SeriesShape {
                scale: 20000.0,
                noise_amplitude: 0.3,
                phase_offset: 1.6,
            },
        },
        PlanRow {
            channel: Channel::LinkedIn,
            allocated: 6000.0,
            share_percent: 17.0,
            scope: "Sponsored posts to PMs, analysts",
            impressions: 120_000,
            ctr_percent: 0.8,
            cost: 3500.0,
            shape: SeriesShape {
                scale: 5500.0,
                noise_amplitude: 0.2,
                phase_offset: 1.0,
            },
        },
        PlanRow {
            channel: Channel::XTwitter,
            allocated: 3000.0,
            share_percent: 9.0,
            scope: "Threads, infographics, Spaces to 60k+ followers",
            impressions: 280_000,
            ctr_percent: 2.5,
            cost: 1500.0,
            shape: SeriesShape {
                scale: 12500.0,
                noise_amplitude: 0.35,
                phase_offset: 1.9,
            },
        },
        PlanRow {
            channel: Channel::GoogleAds,
            allocated: 4000.0,
            share_percent: 11.0,
            scope: "Search, Display, YouTube pre-roll",
            impressions: 95_000,
            ctr_percent: 1.2,
            cost: 1000.0,
            shape: SeriesShape {
                scale: 4500.0,
                noise_amplitude: 0.2,
                phase_offset: 0.7,
            },
        },
        PlanRow {
            channel: Channel::Influencers,
            allocated: 3000.0,
            share_percent: 9.0,
            // Fixed-fee arrangement, so spend-to-date stays 0.
            scope: "3-5 trusted finance/crypto voices",
            impressions: 150_000,
            ctr_percent: 3.5,
            cost: 0.0,
            shape: SeriesShape {
                scale: 7000.0,
                noise_amplitude: 0.3,
                phase_offset: 2.4,
            },
        },
    ]
}

fn roadmap() -> Vec<TimelinePhase> {
    let phase = |id: &str, duration: &str, title: &str, description: &str, status| TimelinePhase {
        id: id.to_string(),
        duration: duration.to_string(),
        title: title.to_string(),
        description: description.to_string(),
        status,
    };
    vec![
        phase(
            "0",
            "Days 1-3",
            "Phase 0 - Setup, Compliance & Creative",
            "Finalize disclaimers, develop message map, create IR assets, and install tracking.",
            PhaseStatus::Completed,
        ),
        phase(
            "1",
            "Week 1",
            "Phase 1 - Warm-Up & Launch",
            "Initial email sends, soft-launch on social media, and test paid ad campaigns.",
            PhaseStatus::Completed,
        ),
        phase(
            "2",
            "Weeks 2-4",
            "Phase 2 - Scale & Engagement",
            "Full-scale email deployment, weekly long-form content, influencer drops, and scale paid ads.",
            PhaseStatus::InProgress,
        ),
        phase(
            "3",
            "Weeks 5-6",
            "Phase 3 - Retarget, Consolidate & Handover",
            "Retarget warm audiences, launch awareness hub, and compile final KPI dashboards.",
            PhaseStatus::Upcoming,
        ),
    ]
}

fn volume_spikes() -> Vec<SpikeEvent> {
    vec![
        SpikeEvent::new(4, 2.6, "Campaign Launch"),
        SpikeEvent::new(11, 2.1, "Influencer Drop"),
        SpikeEvent::new(17, 3.2, "CEO Media Interview"),
    ]
}

impl CampaignScenario {
    /// Generate the full reference dataset with the provided RNG.
    pub fn generate<R: Rng + ?Sized>(rng: &mut R) -> Result<Self, GenerateError> {
        let channels = plan_rows()
            .into_iter()
            .map(|row| {
                let daily_series = generator::daily_series(rng, CAMPAIGN_DAYS, &row.shape)?;
                Ok(ChannelBudget {
                    channel: row.channel,
                    allocated: row.allocated,
                    share_percent: row.share_percent,
                    scope: row.scope.to_string(),
                    impressions: row.impressions,
                    ctr_percent: row.ctr_percent,
                    cost: row.cost,
                    daily_series,
                })
            })
            .collect::<Result<Vec<_>, GenerateError>>()?;

        let volume = generator::volume_series(
            rng,
            CAMPAIGN_DAYS,
            VOLUME_BASE,
            VOLUME_AMPLITUDE,
            &volume_spikes(),
        )?;

        log::info!(
            "generated campaign scenario: {} channels, {} days",
            channels.len(),
            CAMPAIGN_DAYS
        );

        Ok(Self {
            meta: CampaignMeta {
                client_name: "Metalpha (NASDAQ: MATH)".to_string(),
                campaign_title: "4-6 Week Global Market Awareness & Investor Visibility Campaign"
                    .to_string(),
                duration: "4-6 Weeks".to_string(),
                total_budget: 35000.0,
            },
            channels,
            timeline: Timeline::new(roadmap()),
            volume,
            ir_site_visits: 8750,
            stock_volume_influence_percent: 12.4,
            deltas: KpiDeltas {
                reach_change_percent: 15.2,
                engagement_change_percent: 8.9,
                visits_change_percent: 22.1,
            },
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aggregate;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn scenario() -> CampaignScenario {
        CampaignScenario::generate(&mut StdRng::seed_from_u64(7)).unwrap()
    }

    #[test]
    fn covers_every_channel_once() {
        let scenario = scenario();
        assert_eq!(scenario.channels.len(), Channel::ALL.len());
        for (channel, row) in Channel::ALL.iter().zip(&scenario.channels) {
            assert_eq!(row.channel, *channel);
        }
    }

    #[test]
    fn series_are_aligned_and_aggregate_cleanly() {
        let scenario = scenario();
        for row in &scenario.channels {
            assert_eq!(row.daily_series.len(), CAMPAIGN_DAYS as usize);
        }
        let totals = aggregate::campaign_totals(&scenario.channels).unwrap();
        assert_eq!(totals.len(), CAMPAIGN_DAYS as usize);
    }

    #[test]
    fn budget_shares_sum_to_roughly_one_hundred() {
        let scenario = scenario();
        let share: f64 = scenario.channels.iter().map(|c| c.share_percent).sum();
        assert!((share - 100.0).abs() < 1.0, "shares sum to {share}");
    }

    #[test]
    fn spend_never_exceeds_allocation_per_channel() {
        for row in &scenario().channels {
            assert!(row.cost <= row.allocated);
        }
    }

    #[test]
    fn exactly_one_phase_in_progress_initially() {
        let scenario = scenario();
        let in_progress = scenario
            .timeline
            .phases()
            .iter()
            .filter(|p| p.status == PhaseStatus::InProgress)
            .count();
        assert_eq!(in_progress, 1);
    }

    #[test]
    fn volume_carries_exactly_three_labeled_spikes() {
        let scenario = scenario();
        let labels: Vec<&str> = scenario
            .volume
            .iter()
            .filter_map(|p| p.event.as_deref())
            .collect();
        assert_eq!(labels.len(), 3);
        let mut deduped = labels.clone();
        deduped.sort();
        deduped.dedup();
        assert_eq!(deduped.len(), 3, "spike labels must be unique");
    }

    #[test]
    fn strategy_channel_series_is_all_zero() {
        let scenario = scenario();
        let strategy = &scenario.channels[0];
        assert_eq!(strategy.channel, Channel::Strategy);
        assert!(strategy
            .daily_series
            .iter()
            .all(|p| p.reach == 0 && p.engagement == 0));
    }
}
