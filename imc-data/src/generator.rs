//! Randomized daily performance and stock-volume series.
//!
//! Series are stochastic by design, but every function takes the RNG as a
//! parameter so callers (and tests) can seed a `StdRng` for reproducible
//! output. The dashboard seeds from the wall clock; the CLI accepts
//! `--seed`.

use imc_core::series::{day_label, DailyPoint, VolumeDataPoint};
use rand::Rng;
use std::f64::consts::TAU;
use std::fmt;

/// Engagement is sampled as a uniform fraction of reach in this range.
const ENGAGEMENT_RATIO_RANGE: std::ops::Range<f64> = 0.02..0.07;

/// Errors from series generation.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum GenerateError {
    /// A negative day count was requested.
    InvalidArgument,
}

impl fmt::Display for GenerateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GenerateError::InvalidArgument => write!(f, "day count must not be negative"),
        }
    }
}

impl std::error::Error for GenerateError {}

/// Shape parameters for a channel's daily series.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SeriesShape {
    /// Peak reach scale. Zero yields an all-zero series (non-advertising
    /// channels such as Strategy).
    pub scale: f64,
    /// Width of the uniform noise band applied to the oscillation.
    pub noise_amplitude: f64,
    /// Phase offset of the oscillation, radians.
    pub phase_offset: f64,
}

/// A labeled multiplicative spike in the volume series.
#[derive(Debug, Clone, PartialEq)]
pub struct SpikeEvent {
    /// 1-based day index the spike lands on.
    pub day: i32,
    pub multiplier: f64,
    pub label: String,
}

impl SpikeEvent {
    pub fn new(day: i32, multiplier: f64, label: &str) -> Self {
        Self {
            day,
            multiplier,
            label: label.to_string(),
        }
    }
}

/// Generate a channel's daily reach/engagement series.
///
/// For day `i` in `1..=days` the reach follows a single sine oscillation
/// normalized to `[0, 1]`, perturbed by uniform noise, clamped at zero, and
/// scaled. Engagement is a uniformly sampled 2-7% fraction of reach.
/// `days == 0` yields an empty series; a negative count is an error.
pub fn daily_series<R: Rng + ?Sized>(
    rng: &mut R,
    days: i32,
    shape: &SeriesShape,
) -> Result<Vec<DailyPoint>, GenerateError> {
    if days < 0 {
        return Err(GenerateError::InvalidArgument);
    }

    let mut series = Vec::with_capacity(days as usize);
    for i in 1..=days {
        let oscillation = ((TAU * i as f64 / days as f64 - shape.phase_offset).sin() + 1.0) / 2.0;
        let noise = rng.random_range(-shape.noise_amplitude / 2.0..=shape.noise_amplitude / 2.0);
        let normalized = (oscillation + noise).max(0.0);
        let reach = (normalized * shape.scale).round() as u64;
        let engagement = (reach as f64 * rng.random_range(ENGAGEMENT_RATIO_RANGE)).round() as u64;
        series.push(DailyPoint {
            date: day_label(i),
            reach,
            engagement,
        });
    }
    Ok(series)
}

/// Generate the stock-volume series as a negative-biased random walk with
/// labeled event spikes.
///
/// Each day the walk value is perturbed by `1 + (U[0,1) - 0.3) * amplitude`
/// and clamped non-negative. A spike multiplies that day's emitted value
/// and attaches its label; the walk itself continues undisturbed so one
/// anomalous day does not re-base the whole series.
pub fn volume_series<R: Rng + ?Sized>(
    rng: &mut R,
    days: i32,
    base_volume: f64,
    amplitude: f64,
    spikes: &[SpikeEvent],
) -> Result<Vec<VolumeDataPoint>, GenerateError> {
    if days < 0 {
        return Err(GenerateError::InvalidArgument);
    }

    let mut series = Vec::with_capacity(days as usize);
    let mut walk = base_volume;
    for i in 1..=days {
        walk = (walk * (1.0 + (rng.random::<f64>() - 0.3) * amplitude)).max(0.0);
        let spike = spikes.iter().find(|s| s.day == i);
        let volume = match spike {
            Some(s) => walk * s.multiplier,
            None => walk,
        };
        series.push(VolumeDataPoint {
            date: day_label(i),
            volume,
            event: spike.map(|s| s.label.clone()),
        });
    }
    Ok(series)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn rng() -> StdRng {
        StdRng::seed_from_u64(42)
    }

    const SHAPE: SeriesShape = SeriesShape {
        scale: 30000.0,
        noise_amplitude: 0.2,
        phase_offset: 1.1,
    };

    #[test]
    fn daily_series_has_requested_length_and_labels() {
        let series = daily_series(&mut rng(), 21, &SHAPE).unwrap();
        assert_eq!(series.len(), 21);
        assert_eq!(series[0].date, "Day 1");
        assert_eq!(series[20].date, "Day 21");
    }

    #[test]
    fn daily_series_values_are_non_negative_and_bounded() {
        // u64 already guarantees non-negativity; check the noise band
        // cannot push reach past scale * (1 + noise/2).
        let series = daily_series(&mut rng(), 60, &SHAPE).unwrap();
        let ceiling = (SHAPE.scale * (1.0 + SHAPE.noise_amplitude / 2.0)).round() as u64;
        for point in &series {
            assert!(point.reach <= ceiling);
            assert!(point.engagement <= point.reach);
        }
    }

    #[test]
    fn zero_scale_yields_all_zero_series() {
        let shape = SeriesShape {
            scale: 0.0,
            ..SHAPE
        };
        let series = daily_series(&mut rng(), 21, &shape).unwrap();
        assert!(series.iter().all(|p| p.reach == 0 && p.engagement == 0));
    }

    #[test]
    fn zero_days_yields_empty_series() {
        assert!(daily_series(&mut rng(), 0, &SHAPE).unwrap().is_empty());
        assert!(volume_series(&mut rng(), 0, 1e6, 0.4, &[]).unwrap().is_empty());
    }

    #[test]
    fn negative_days_is_an_error() {
        assert_eq!(
            daily_series(&mut rng(), -1, &SHAPE),
            Err(GenerateError::InvalidArgument)
        );
        assert_eq!(
            volume_series(&mut rng(), -3, 1e6, 0.4, &[]),
            Err(GenerateError::InvalidArgument)
        );
    }

    #[test]
    fn seeded_generation_is_reproducible() {
        let a = daily_series(&mut rng(), 21, &SHAPE).unwrap();
        let b = daily_series(&mut rng(), 21, &SHAPE).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn volume_spikes_land_on_their_days_with_labels() {
        let spikes = vec![
            SpikeEvent::new(3, 2.5, "Campaign Launch"),
            SpikeEvent::new(8, 2.0, "Influencer Drop"),
        ];
        let series = volume_series(&mut rng(), 10, 1_000_000.0, 0.4, &spikes).unwrap();

        assert_eq!(series[2].event.as_deref(), Some("Campaign Launch"));
        assert_eq!(series[7].event.as_deref(), Some("Influencer Drop"));
        let labeled = series.iter().filter(|p| p.event.is_some()).count();
        assert_eq!(labeled, 2);
    }

    #[test]
    fn volume_values_stay_non_negative() {
        // Large amplitude forces the clamp to engage.
        let series = volume_series(&mut rng(), 200, 100.0, 4.0, &[]).unwrap();
        assert!(series.iter().all(|p| p.volume >= 0.0));
    }
}
