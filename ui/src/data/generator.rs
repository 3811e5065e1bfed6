//! Synthetic data for the charts.
//!
//! Series follow a sine (`uv`) and cosine (`pv`) shape with bounded random
//! jitter on top, floored to whole numbers. Nothing here holds state; the
//! `_with` variants take an explicit RNG so tests can pin the output.

use rand::Rng;
use time::{macros::format_description, OffsetDateTime};

use crate::config::{LIVE_POINT_FACTOR, LIVE_POINT_JITTER};
use crate::core::timing;

use super::TimeSeriesPoint;

/// Generates `count` points scaled by `factor`, oldest first.
pub fn generate_time_series(count: usize, factor: f64) -> Vec<TimeSeriesPoint> {
    generate_time_series_with(&mut rand::thread_rng(), count, factor)
}

pub fn generate_time_series_with<R: Rng + ?Sized>(
    rng: &mut R,
    count: usize,
    factor: f64,
) -> Vec<TimeSeriesPoint> {
    let jitter = factor / 2.0;

    (0..count)
        .map(|i| {
            let step = i as f64;
            TimeSeriesPoint {
                // Index 0 is the oldest sample, `T-count` steps ago.
                name: format!("T-{}", count - i),
                uv: shaped((step / 2.0).sin(), factor, sample_jitter(rng, jitter)),
                pv: shaped((step / 1.5).cos(), factor, sample_jitter(rng, jitter)),
            }
        })
        .collect()
}

/// Generates one live point, phase-driven by the wall clock.
pub fn generate_next_point() -> TimeSeriesPoint {
    let now = OffsetDateTime::now_utc();
    generate_next_point_with(&mut rand::thread_rng(), timing::unix_ms(now), clock_label(now))
}

pub fn generate_next_point_with<R: Rng + ?Sized>(
    rng: &mut R,
    now_ms: f64,
    name: String,
) -> TimeSeriesPoint {
    TimeSeriesPoint {
        name,
        uv: shaped(
            (now_ms / 1_000.0).sin(),
            LIVE_POINT_FACTOR,
            sample_jitter(rng, LIVE_POINT_JITTER),
        ),
        pv: shaped(
            (now_ms / 1_500.0).cos(),
            LIVE_POINT_FACTOR,
            sample_jitter(rng, LIVE_POINT_JITTER),
        ),
    }
}

fn shaped(wave: f64, factor: f64, jitter: f64) -> i64 {
    (wave * factor + jitter + factor).floor() as i64
}

fn sample_jitter<R: Rng + ?Sized>(rng: &mut R, upper: f64) -> f64 {
    if upper > 0.0 {
        rng.gen_range(0.0..upper)
    } else {
        0.0
    }
}

fn clock_label(now: OffsetDateTime) -> String {
    now.format(&format_description!("[hour]:[minute]:[second]"))
        .unwrap_or_else(|_| "now".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::StdRng, SeedableRng};

    #[test]
    fn produces_exactly_count_points() {
        let mut rng = StdRng::seed_from_u64(7);
        for count in [0, 1, 20, 57] {
            assert_eq!(generate_time_series_with(&mut rng, count, 1_000.0).len(), count);
        }
        assert_eq!(generate_time_series(20, 2_000.0).len(), 20);
    }

    #[test]
    fn values_stay_inside_the_shape_envelope() {
        let mut rng = StdRng::seed_from_u64(42);
        let factor = 800.0;
        for point in generate_time_series_with(&mut rng, 20, factor) {
            // wave in [-1, 1], jitter in [0, f/2), offset f
            assert!(point.uv >= 0 && point.uv < (2.5 * factor) as i64, "{point:?}");
            assert!(point.pv >= 0 && point.pv < (2.5 * factor) as i64, "{point:?}");
        }
    }

    #[test]
    fn labels_run_oldest_to_newest() {
        let mut rng = StdRng::seed_from_u64(1);
        let series = generate_time_series_with(&mut rng, 20, 1_500.0);
        assert_eq!(series.first().map(|p| p.name.as_str()), Some("T-20"));
        assert_eq!(series.last().map(|p| p.name.as_str()), Some("T-1"));
    }

    #[test]
    fn zero_factor_gives_flat_zero_series() {
        let mut rng = StdRng::seed_from_u64(3);
        let series = generate_time_series_with(&mut rng, 5, 0.0);
        assert!(series.iter().all(|p| p.uv == 0 && p.pv == 0));
    }

    #[test]
    fn live_point_uses_clock_phase() {
        let mut rng = StdRng::seed_from_u64(9);
        let point = generate_next_point_with(&mut rng, 0.0, "00:00:00".into());
        // sin(0) = 0, cos(0) = 1
        assert!((2_000..3_000).contains(&point.uv), "{point:?}");
        assert!((4_000..5_000).contains(&point.pv), "{point:?}");
        assert_eq!(point.name, "00:00:00");
    }

    #[test]
    fn clock_label_is_hh_mm_ss() {
        let label = clock_label(OffsetDateTime::UNIX_EPOCH);
        assert_eq!(label, "00:00:00");
    }
}
