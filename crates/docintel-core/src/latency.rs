//! Simulated backend latency.

use std::time::Duration;

/// Suspends the caller for `delay`, standing in for a backend round-trip.
///
/// A zero delay returns immediately without touching the timer wheel.
pub async fn simulate(operation: &'static str, delay: Duration) {
    if delay.is_zero() {
        return;
    }
    tracing::trace!(operation, delay_ms = delay.as_millis() as u64, "Simulating latency");
    tokio::time::sleep(delay).await;
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::time::Instant;

    #[tokio::test(start_paused = true)]
    async fn test_simulate_waits_for_delay() {
        let start = Instant::now();
        simulate("test", Duration::from_millis(1500)).await;
        assert!(start.elapsed() >= Duration::from_millis(1500));
    }

    #[tokio::test(start_paused = true)]
    async fn test_zero_delay_returns_immediately() {
        let start = Instant::now();
        simulate("test", Duration::ZERO).await;
        assert_eq!(start.elapsed(), Duration::ZERO);
    }
}
