//! Daily performance and stock-volume series points.
//!
//! Dates in this domain are ordinal labels ("Day 1", "Day 2", ...) rather
//! than calendar dates: the campaign runs on a relative clock.

use serde::{Deserialize, Serialize};

/// One day of campaign performance.
///
/// `engagement <= reach` is a soft expectation, not an invariant: engagement
/// is sampled independently as a fraction of reach upstream, and nothing
/// downstream may rely on the ordering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyPoint {
    pub date: String,
    pub reach: u64,
    pub engagement: u64,
}

/// One day of stock trading volume, optionally annotated with a campaign
/// event label (at most one per point).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VolumeDataPoint {
    pub date: String,
    pub volume: f64,
    pub event: Option<String>,
}

/// Ordinal date label for a 1-based day index.
pub fn day_label(index: i32) -> String {
    format!("Day {index}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn day_label_is_one_based() {
        assert_eq!(day_label(1), "Day 1");
        assert_eq!(day_label(21), "Day 21");
    }
}
