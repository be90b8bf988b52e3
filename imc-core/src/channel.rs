use serde::{Deserialize, Serialize};
use std::fmt;

/// A marketing distribution path with its own budget and performance series.
///
/// `Strategy` is a non-advertising channel: it carries budget but no paid
/// impressions, so its performance series is all zeros.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash, Serialize, Deserialize)]
pub enum Channel {
    Strategy,
    Email,
    Meta,
    LinkedIn,
    XTwitter,
    GoogleAds,
    Influencers,
}

impl Channel {
    /// All channels in budget-table display order.
    pub const ALL: [Channel; 7] = [
        Channel::Strategy,
        Channel::Email,
        Channel::Meta,
        Channel::LinkedIn,
        Channel::XTwitter,
        Channel::GoogleAds,
        Channel::Influencers,
    ];

    /// Display label shown in tables, legends, and the CSV report.
    pub fn label(&self) -> &'static str {
        match self {
            Channel::Strategy => "Strategy & Creative",
            Channel::Email => "Email Engine",
            Channel::Meta => "Meta (FB/IG)",
            Channel::LinkedIn => "LinkedIn",
            Channel::XTwitter => "X/Twitter",
            Channel::GoogleAds => "Google Ads",
            Channel::Influencers => "Influencers/KOLs",
        }
    }
}

impl fmt::Display for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_channels_have_unique_labels() {
        let labels: Vec<&str> = Channel::ALL.iter().map(|c| c.label()).collect();
        let mut deduped = labels.clone();
        deduped.sort();
        deduped.dedup();
        assert_eq!(deduped.len(), labels.len());
    }

    #[test]
    fn display_matches_label() {
        assert_eq!(Channel::Email.to_string(), "Email Engine");
        assert_eq!(Channel::Strategy.to_string(), "Strategy & Creative");
    }
}
