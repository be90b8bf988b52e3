//! Investor-campaign analytics dashboard.
//!
//! Single-page Dioxus app over a generated campaign dataset.
//!
//! Data flow:
//! 1. On mount: generate the reference scenario (seeded from the wall
//!    clock), initialize D3 chart scripts, and arm the one-shot roadmap
//!    advance timer.
//! 2. Derivation effects recompute totals/KPIs and re-render charts
//!    whenever their input signals change (channel selection included),
//!    so stale derived values are never observable.
//! 3. User intents (row click, clear filter, export, manual advance) go
//!    through `AppState` methods.

use dioxus::prelude::*;
use gloo_timers::future::TimeoutFuture;
use imc_chart_ui::components::{
    channel_color, BudgetPanel, CampaignHeader, ChartContainer, ErrorDisplay, KpiCard,
    LoadingSpinner, PerformanceTable, TimelinePanel,
};
use imc_chart_ui::js_bridge;
use imc_chart_ui::state::AppState;
use imc_core::kpi::KpiDeltas;
use imc_core::timeline::TimelineConfig;
use imc_data::scenario::CampaignScenario;
use imc_data::{aggregate, project};
use rand::rngs::StdRng;
use rand::SeedableRng;

/// DOM ids for the D3 chart container divs.
const PERFORMANCE_CHART_ID: &str = "campaign-performance-chart";
const VOLUME_CHART_ID: &str = "stock-volume-chart";
const BUDGET_DONUT_ID: &str = "budget-donut";

/// Plan constants that feed the KPI snapshot but are not derived from the
/// channel series. Kept in a signal so the KPI derivation effect re-runs
/// if they ever change.
#[derive(Clone, PartialEq)]
struct PlanInputs {
    ir_site_visits: u64,
    stock_volume_influence_percent: f64,
    deltas: KpiDeltas,
}

fn main() {
    dioxus_logger::init(dioxus_logger::tracing::Level::INFO).expect("failed to init logger");
    dioxus::LaunchBuilder::new()
        .with_cfg(dioxus::web::Config::new().rootname("campaign-root"))
        .launch(App);
}

#[component]
fn App() -> Element {
    let mut state = use_context_provider(AppState::new);
    let mut plan: Signal<Option<PlanInputs>> = use_signal(|| None);

    // ─── Effect 1: Generate the scenario once on mount ───
    use_effect(move || {
        let mut rng = StdRng::seed_from_u64(js_sys::Date::now() as u64);
        match CampaignScenario::generate(&mut rng) {
            Ok(scenario) => {
                state.meta.set(Some(scenario.meta));
                state.channels.set(scenario.channels);
                state.volume.set(scenario.volume);
                state.timeline.set(scenario.timeline);
                plan.set(Some(PlanInputs {
                    ir_site_visits: scenario.ir_site_visits,
                    stock_volume_influence_percent: scenario.stock_volume_influence_percent,
                    deltas: scenario.deltas,
                }));
                state.loading.set(false);
            }
            Err(e) => {
                state.error_msg.set(Some(format!("Data generation failed: {e}")));
                state.loading.set(false);
            }
        }

        // Initialize D3 chart scripts (one-time)
        js_bridge::init_charts();
    });

    // ─── One-shot demo advance after the configured delay ───
    // The future is dropped with the component, so a teardown before the
    // delay elapses cancels the timer instead of firing on stale state.
    use_future(move || async move {
        let config = TimelineConfig::default();
        TimeoutFuture::new(config.advance_after_ms).await;
        state.advance_timeline();
    });

    // ─── Effect 2: Derive totals and the KPI snapshot ───
    use_effect(move || {
        let channels = state.channels.read().clone();
        let volume = state.volume.read().clone();
        let meta = state.meta.read().clone();
        let plan = plan.read().clone();
        let (Some(meta), Some(plan)) = (meta, plan) else {
            return;
        };

        match aggregate::campaign_totals(&channels) {
            Ok(totals) => state.totals.set(totals),
            Err(e) => {
                state.error_msg.set(Some(e.to_string()));
                return;
            }
        }
        match aggregate::kpi_snapshot(
            &meta,
            &channels,
            &volume,
            plan.ir_site_visits,
            plan.stock_volume_influence_percent,
            plan.deltas,
        ) {
            Ok(kpi) => state.kpi.set(Some(kpi)),
            Err(e) => state.error_msg.set(Some(e.to_string())),
        }
    });

    // ─── Effect 3: Project the performance series and render the chart ───
    // Re-runs whenever loading, selection, totals, or channels change.
    use_effect(move || {
        let loading = (state.loading)();
        let selection = (state.selection)();
        let totals = state.totals.read().clone();
        let channels = state.channels.read().clone();
        if loading {
            return;
        }

        let projected = project::project(selection, &totals, &channels).to_vec();
        let data_json = serde_json::to_string(&projected).unwrap_or_default();
        let title = match selection {
            Some(channel) => format!("{channel} Performance"),
            None => "Campaign Overview".to_string(),
        };
        let config_json = serde_json::json!({
            "title": title,
            "reachColor": "#3b82f6",
            "engagementColor": "#22c55e",
        })
        .to_string();
        js_bridge::render_performance_chart(PERFORMANCE_CHART_ID, &data_json, &config_json);
    });

    // ─── Effect 4: Render the stock-volume chart ───
    use_effect(move || {
        let loading = (state.loading)();
        let volume = state.volume.read().clone();
        if loading || volume.is_empty() {
            return;
        }
        let data_json = serde_json::to_string(&volume).unwrap_or_default();
        let config_json = serde_json::json!({
            "barColor": "#8b5cf6",
            "eventColor": "#fde047",
        })
        .to_string();
        js_bridge::render_volume_chart(VOLUME_CHART_ID, &data_json, &config_json);
    });

    // ─── Effect 5: Render the budget donut ───
    use_effect(move || {
        let loading = (state.loading)();
        let channels = state.channels.read().clone();
        let meta = state.meta.read().clone();
        if loading || channels.is_empty() {
            return;
        }

        let donut_data: Vec<serde_json::Value> = channels
            .iter()
            .map(|c| {
                serde_json::json!({
                    "label": c.channel.label(),
                    "amount": c.allocated,
                    "color": channel_color(c.channel),
                })
            })
            .collect();
        let spent = aggregate::budget_spent(&channels);
        let total = meta.map(|m| m.total_budget).unwrap_or(0.0);
        let config_json = serde_json::json!({
            "centerValue": format!("${spent:.0}"),
            "centerCaption": format!("Spent of ${total:.0}"),
        })
        .to_string();
        let data_json = serde_json::to_string(&donut_data).unwrap_or_default();
        js_bridge::render_budget_donut(BUDGET_DONUT_ID, &data_json, &config_json);
    });

    // ─── Render ───
    let kpi = state.kpi.read().clone();
    let total_budget = state
        .meta
        .read()
        .as_ref()
        .map(|m| m.total_budget)
        .unwrap_or(0.0);
    let volume_caption = kpi.as_ref().map(|k| {
        format!(
            "Avg daily volume {:.0} - campaign influence {:.1}%",
            k.avg_daily_volume, k.stock_volume_influence_percent
        )
    });

    rsx! {
        div {
            style: "background: #020617; color: #e2e8f0; min-height: 100vh; padding: 24px; \
                    font-family: system-ui, -apple-system, sans-serif;",
            div {
                style: "max-width: 1400px; margin: 0 auto;",

                CampaignHeader {}

                if let Some(err) = state.error_msg.read().as_ref() {
                    ErrorDisplay { message: err.clone() }
                }

                if *state.loading.read() {
                    LoadingSpinner {}
                } else {
                    if let Some(kpi) = kpi {
                        div {
                            style: "display: flex; gap: 16px; margin: 24px 0; flex-wrap: wrap;",
                            KpiCard {
                                title: "Total Investor Reach".to_string(),
                                value: kpi.total_reach as f64,
                                change: kpi.deltas.reach_change_percent,
                            }
                            KpiCard {
                                title: "Engagement Rate".to_string(),
                                value: kpi.engagement_rate_percent,
                                change: kpi.deltas.engagement_change_percent,
                                is_percentage: true,
                            }
                            KpiCard {
                                title: "Budget Spent".to_string(),
                                value: kpi.budget_spent,
                                change: kpi.budget_spent_percent,
                                is_currency: true,
                                total: total_budget,
                            }
                            KpiCard {
                                title: "IR Site Visits".to_string(),
                                value: kpi.ir_site_visits as f64,
                                change: kpi.deltas.visits_change_percent,
                            }
                        }
                    }

                    div {
                        style: "display: grid; grid-template-columns: 2fr 1fr; gap: 16px; \
                                align-items: start;",
                        div {
                            style: "display: flex; flex-direction: column; gap: 16px;",
                            ChartContainer {
                                id: PERFORMANCE_CHART_ID.to_string(),
                                title: performance_title((state.selection)()),
                                min_height: 320,
                            }
                            PerformanceTable {}
                            ChartContainer {
                                id: VOLUME_CHART_ID.to_string(),
                                title: "Stock Volume Over Time".to_string(),
                                min_height: 300,
                            }
                            if let Some(caption) = volume_caption {
                                p {
                                    style: "margin: -8px 0 0 4px; font-size: 12px; color: #64748b;",
                                    "{caption}"
                                }
                            }
                        }
                        div {
                            style: "display: flex; flex-direction: column; gap: 16px;",
                            BudgetPanel { chart_id: BUDGET_DONUT_ID.to_string() }
                            TimelinePanel {}
                        }
                    }
                }
            }
        }
    }
}

/// Chart panel title, reflecting the active channel filter.
fn performance_title(selection: Option<imc_core::channel::Channel>) -> String {
    match selection {
        Some(channel) => format!("{channel} - Reach & Engagement"),
        None => "Campaign Overview - Reach & Engagement".to_string(),
    }
}
