//! Campaign roadmap phases and the phase-transition state machine.
//!
//! The [`Timeline`] exclusively owns its phase list. Presentation reads
//! phases through [`Timeline::phases`] and never mutates them directly;
//! all mutation goes through [`Timeline::advance`], which is what keeps
//! the one-`InProgress`-at-a-time convention intact.

use serde::{Deserialize, Serialize};

/// How long a freshly completed phase stays visually highlighted, in ms.
///
/// The highlight is a derived, time-bounded annotation held by the UI; it
/// is never persisted and never consulted by [`Timeline::advance`].
pub const HIGHLIGHT_DURATION_MS: u32 = 1200;

/// Timer configuration for the demo's one-shot automatic advance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimelineConfig {
    /// Delay before the automatic `advance()` fires, in ms.
    pub advance_after_ms: u32,
}

impl Default for TimelineConfig {
    fn default() -> Self {
        Self {
            advance_after_ms: 5000,
        }
    }
}

/// Lifecycle status of a campaign phase.
///
/// `Completed` is terminal: a phase never regresses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PhaseStatus {
    Upcoming,
    InProgress,
    Completed,
}

impl PhaseStatus {
    /// Display label, matching the roadmap card text.
    pub fn label(&self) -> &'static str {
        match self {
            PhaseStatus::Upcoming => "Upcoming",
            PhaseStatus::InProgress => "In Progress",
            PhaseStatus::Completed => "Completed",
        }
    }
}

/// A discrete stage of the campaign roadmap.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimelinePhase {
    /// Unique stable identifier, used for highlight tracking.
    pub id: String,
    /// Duration label, e.g. "Weeks 2-4".
    pub duration: String,
    pub title: String,
    pub description: String,
    pub status: PhaseStatus,
}

/// Ordered list of campaign phases with controlled status transitions.
///
/// Status ordering along the list follows the convention
/// `Completed* InProgress? Upcoming*`; [`advance`](Timeline::advance)
/// preserves it for any list that starts in that shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Timeline {
    phases: Vec<TimelinePhase>,
}

impl Timeline {
    pub fn new(phases: Vec<TimelinePhase>) -> Self {
        Self { phases }
    }

    /// Read-only view of the phase list.
    pub fn phases(&self) -> &[TimelinePhase] {
        &self.phases
    }

    /// Advance the campaign by one phase.
    ///
    /// The first `InProgress` phase in list order becomes `Completed` and
    /// the next phase, if any, becomes `InProgress`. Returns the ids of
    /// phases that moved to `Completed` in this step, for transient
    /// highlighting. When no phase is `InProgress` (none started, or all
    /// completed) this is a no-op and the returned vec is empty.
    pub fn advance(&mut self) -> Vec<String> {
        let Some(current) = self
            .phases
            .iter()
            .position(|p| p.status == PhaseStatus::InProgress)
        else {
            log::debug!("timeline advance: no phase in progress, no-op");
            return Vec::new();
        };

        self.phases[current].status = PhaseStatus::Completed;
        let completed = vec![self.phases[current].id.clone()];

        if let Some(next) = self.phases.get_mut(current + 1) {
            next.status = PhaseStatus::InProgress;
        }
        log::info!(
            "timeline advance: phase {} completed",
            self.phases[current].id
        );
        completed
    }

    /// True while at least one phase has not completed.
    pub fn has_remaining(&self) -> bool {
        self.phases
            .iter()
            .any(|p| p.status != PhaseStatus::Completed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn phase(id: &str, status: PhaseStatus) -> TimelinePhase {
        TimelinePhase {
            id: id.to_string(),
            duration: String::new(),
            title: format!("Phase {id}"),
            description: String::new(),
            status,
        }
    }

    fn statuses(timeline: &Timeline) -> Vec<PhaseStatus> {
        timeline.phases().iter().map(|p| p.status).collect()
    }

    #[test]
    fn advance_completes_current_and_promotes_next() {
        let mut timeline = Timeline::new(vec![
            phase("0", PhaseStatus::Completed),
            phase("1", PhaseStatus::InProgress),
            phase("2", PhaseStatus::Upcoming),
            phase("3", PhaseStatus::Upcoming),
        ]);

        let completed = timeline.advance();

        assert_eq!(completed, vec!["1".to_string()]);
        assert_eq!(
            statuses(&timeline),
            vec![
                PhaseStatus::Completed,
                PhaseStatus::Completed,
                PhaseStatus::InProgress,
                PhaseStatus::Upcoming,
            ]
        );
    }

    #[test]
    fn advance_on_last_phase_leaves_no_in_progress() {
        let mut timeline = Timeline::new(vec![
            phase("0", PhaseStatus::Completed),
            phase("1", PhaseStatus::InProgress),
        ]);

        let completed = timeline.advance();
        assert_eq!(completed, vec!["1".to_string()]);
        assert_eq!(
            statuses(&timeline),
            vec![PhaseStatus::Completed, PhaseStatus::Completed]
        );
        assert!(!timeline.has_remaining());
    }

    #[test]
    fn advance_is_noop_when_nothing_in_progress() {
        let mut timeline = Timeline::new(vec![
            phase("0", PhaseStatus::Completed),
            phase("1", PhaseStatus::Completed),
        ]);
        let before = timeline.clone();

        let completed = timeline.advance();

        assert!(completed.is_empty());
        assert_eq!(timeline, before);
    }

    #[test]
    fn advance_is_noop_on_empty_timeline() {
        let mut timeline = Timeline::new(Vec::new());
        assert!(timeline.advance().is_empty());
    }

    #[test]
    fn at_most_one_phase_in_progress_after_repeated_advances() {
        let mut timeline = Timeline::new(vec![
            phase("0", PhaseStatus::InProgress),
            phase("1", PhaseStatus::Upcoming),
            phase("2", PhaseStatus::Upcoming),
        ]);

        for _ in 0..5 {
            timeline.advance();
            let in_progress = timeline
                .phases()
                .iter()
                .filter(|p| p.status == PhaseStatus::InProgress)
                .count();
            assert!(in_progress <= 1);
        }
        assert!(!timeline.has_remaining());
    }
}
