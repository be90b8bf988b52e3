//! Application state managed via Dioxus context.
//!
//! `AppState` bundles all reactive signals into a single struct provided via
//! `use_context_provider`. Child components retrieve it with
//! `use_context::<AppState>()`. All mutation goes through the intent
//! methods below, which is what keeps the selection toggle and the
//! timeline/highlight invariants in one place.

use crate::js_bridge;
use dioxus::core::Task;
use dioxus::prelude::*;
use gloo_timers::future::TimeoutFuture;
use imc_core::budget::{CampaignMeta, ChannelBudget};
use imc_core::channel::Channel;
use imc_core::kpi::KpiSnapshot;
use imc_core::series::{DailyPoint, VolumeDataPoint};
use imc_core::timeline::{Timeline, HIGHLIGHT_DURATION_MS};
use imc_data::{project, report};
use std::collections::HashSet;

/// Shared application state for the campaign dashboard.
#[derive(Clone, Copy)]
pub struct AppState {
    /// Campaign header metadata (None until the scenario is generated)
    pub meta: Signal<Option<CampaignMeta>>,
    /// Per-channel budget rows with their daily series
    pub channels: Signal<Vec<ChannelBudget>>,
    /// Campaign-wide daily totals, recomputed whenever channels change
    pub totals: Signal<Vec<DailyPoint>>,
    /// Stock-volume series with event spikes
    pub volume: Signal<Vec<VolumeDataPoint>>,
    /// Scalar KPI rollup
    pub kpi: Signal<Option<KpiSnapshot>>,
    /// Campaign roadmap phases
    pub timeline: Signal<Timeline>,
    /// Phase ids completed within the last highlight window
    pub recently_completed: Signal<HashSet<String>>,
    /// Currently selected channel filter
    pub selection: Signal<Option<Channel>>,
    /// Whether the app is still generating data
    pub loading: Signal<bool>,
    /// Error message if something went wrong
    pub error_msg: Signal<Option<String>>,
    /// Pending highlight-expiry timer, cancelled when a new advance supersedes it
    highlight_timer: Signal<Option<Task>>,
}

impl AppState {
    /// Create a new AppState with default signal values.
    pub fn new() -> Self {
        Self {
            meta: Signal::new(None),
            channels: Signal::new(Vec::new()),
            totals: Signal::new(Vec::new()),
            volume: Signal::new(Vec::new()),
            kpi: Signal::new(None),
            timeline: Signal::new(Timeline::new(Vec::new())),
            recently_completed: Signal::new(HashSet::new()),
            selection: Signal::new(None),
            loading: Signal::new(true),
            error_msg: Signal::new(None),
            highlight_timer: Signal::new(None),
        }
    }

    /// Toggle the channel filter: re-selecting clears, another replaces.
    pub fn select_channel(&mut self, channel: Channel) {
        let next = project::toggle(*self.selection.peek(), channel);
        log::info!("channel selection: {next:?}");
        self.selection.set(next);
    }

    /// Clear the channel filter.
    pub fn clear_selection(&mut self) {
        self.selection.set(None);
    }

    /// Advance the roadmap one phase and start the highlight window.
    ///
    /// The newly completed phase ids stay in `recently_completed` for
    /// [`HIGHLIGHT_DURATION_MS`]; a superseding advance resets the window
    /// rather than stacking a second timer.
    pub fn advance_timeline(&mut self) {
        let completed = self.timeline.write().advance();
        if completed.is_empty() {
            return;
        }
        self.recently_completed
            .set(completed.into_iter().collect());

        if let Some(previous) = self.highlight_timer.take() {
            previous.cancel();
        }
        let mut recently = self.recently_completed;
        let task = spawn(async move {
            TimeoutFuture::new(HIGHLIGHT_DURATION_MS).await;
            recently.set(HashSet::new());
        });
        self.highlight_timer.set(Some(task));
    }

    /// Build the channel-performance CSV and hand it to the browser as a
    /// download. The export always covers all channels, independent of the
    /// current selection.
    pub fn export_csv(&mut self) {
        let channels = self.channels.peek().clone();
        match report::build_report(&channels) {
            Ok(contents) => {
                js_bridge::download_csv(report::CAMPAIGN_REPORT_FILENAME, &contents);
            }
            Err(e) => {
                log::error!("csv export failed: {e}");
                self.error_msg.set(Some(format!("CSV export failed: {e}")));
            }
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
