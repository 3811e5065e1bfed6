//! Timer and clock utilities for the dashboard's scheduled work.

use time::OffsetDateTime;

/// Sleeps for `ms` milliseconds on whichever executor the platform runs.
#[cfg(target_arch = "wasm32")]
pub async fn sleep_ms(ms: u64) {
    let ms = u32::try_from(ms).unwrap_or(u32::MAX);
    gloo_timers::future::TimeoutFuture::new(ms).await;
}

#[cfg(not(target_arch = "wasm32"))]
pub async fn sleep_ms(ms: u64) {
    tokio::time::sleep(std::time::Duration::from_millis(ms)).await;
}

/// Milliseconds since the Unix epoch as a float, for phase-driven waves.
pub fn unix_ms(at: OffsetDateTime) -> f64 {
    (at.unix_timestamp_nanos() / 1_000_000) as f64
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::Duration;

    #[test]
    fn unix_ms_counts_from_epoch() {
        assert_eq!(unix_ms(OffsetDateTime::UNIX_EPOCH), 0.0);
        let later = OffsetDateTime::UNIX_EPOCH + Duration::milliseconds(2_500);
        assert_eq!(unix_ms(later), 2_500.0);
    }
}
