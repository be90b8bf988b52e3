//! Channel-selection re-projection of the campaign dataset.
//!
//! Pure functions only: the UI re-evaluates these whenever the selection,
//! the totals, or the channel list changes.

use imc_core::budget::ChannelBudget;
use imc_core::channel::Channel;
use imc_core::series::DailyPoint;

/// Project the performance series the dashboard charts observe.
///
/// No selection yields the campaign totals unchanged; a selection yields
/// that channel's own series. A selection that matches no channel degrades
/// to an empty series rather than failing, since the chart can render an
/// empty dataset but not an error.
pub fn project<'a>(
    selection: Option<Channel>,
    totals: &'a [DailyPoint],
    channels: &'a [ChannelBudget],
) -> &'a [DailyPoint] {
    match selection {
        None => totals,
        Some(selected) => channels
            .iter()
            .find(|c| c.channel == selected)
            .map(|c| c.daily_series.as_slice())
            .unwrap_or(&[]),
    }
}

/// Project the budget rows the performance table observes.
pub fn budget_rows<'a>(
    selection: Option<Channel>,
    channels: &'a [ChannelBudget],
) -> Vec<&'a ChannelBudget> {
    match selection {
        None => channels.iter().collect(),
        Some(selected) => channels.iter().filter(|c| c.channel == selected).collect(),
    }
}

/// Toggle semantics for channel selection: re-selecting the current
/// channel clears the selection, selecting another replaces it.
pub fn toggle(current: Option<Channel>, clicked: Channel) -> Option<Channel> {
    if current == Some(clicked) {
        None
    } else {
        Some(clicked)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use imc_core::series::day_label;

    fn channel(channel: Channel, reach: u64) -> ChannelBudget {
        ChannelBudget {
            channel,
            allocated: 0.0,
            share_percent: 0.0,
            scope: String::new(),
            impressions: 0,
            ctr_percent: 0.0,
            cost: 0.0,
            daily_series: vec![DailyPoint {
                date: day_label(1),
                reach,
                engagement: 0,
            }],
        }
    }

    #[test]
    fn no_selection_is_identity_over_totals() {
        let totals = vec![DailyPoint {
            date: day_label(1),
            reach: 999,
            engagement: 9,
        }];
        let channels = vec![channel(Channel::Email, 1)];
        assert_eq!(project(None, &totals, &channels), totals.as_slice());
    }

    #[test]
    fn selection_projects_that_channels_series() {
        let channels = vec![channel(Channel::Email, 100), channel(Channel::Meta, 200)];
        let projected = project(Some(Channel::Meta), &[], &channels);
        assert_eq!(projected, channels[1].daily_series.as_slice());
    }

    #[test]
    fn unmatched_selection_degrades_to_empty() {
        let channels = vec![channel(Channel::Email, 100)];
        assert!(project(Some(Channel::LinkedIn), &[], &channels).is_empty());
        assert!(budget_rows(Some(Channel::LinkedIn), &channels).is_empty());
    }

    #[test]
    fn budget_rows_filter_to_selection() {
        let channels = vec![channel(Channel::Email, 1), channel(Channel::Meta, 2)];
        assert_eq!(budget_rows(None, &channels).len(), 2);
        let filtered = budget_rows(Some(Channel::Email), &channels);
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].channel, Channel::Email);
    }

    #[test]
    fn reselecting_toggles_off() {
        assert_eq!(toggle(None, Channel::Email), Some(Channel::Email));
        assert_eq!(toggle(Some(Channel::Email), Channel::Email), None);
        assert_eq!(
            toggle(Some(Channel::Email), Channel::Meta),
            Some(Channel::Meta)
        );
    }
}
