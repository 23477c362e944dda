//! Latency Injector - artificial per-request stall

use std::time::Duration;

/// Stalls a marked request for a fixed delay.
///
/// Only the calling task sleeps; other in-flight requests are unaffected.
#[derive(Debug, Clone, Copy)]
pub struct LatencyInjector {
    delay: Duration,
}

impl LatencyInjector {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Returns whether a stall actually happened.
    pub async fn stall(&self, marked: bool) -> bool {
        if !marked || self.delay.is_zero() {
            return false;
        }
        tokio::time::sleep(self.delay).await;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::time::Instant;

    #[tokio::test(start_paused = true)]
    async fn test_marked_request_is_delayed() {
        let injector = LatencyInjector::new(Duration::from_millis(500));
        let start = Instant::now();

        assert!(injector.stall(true).await);
        assert!(start.elapsed() >= Duration::from_millis(500));
    }

    #[tokio::test(start_paused = true)]
    async fn test_unmarked_request_passes_through() {
        let injector = LatencyInjector::new(Duration::from_millis(500));
        let start = Instant::now();

        assert!(!injector.stall(false).await);
        assert_eq!(start.elapsed(), Duration::ZERO);
    }

    #[tokio::test(start_paused = true)]
    async fn test_stall_does_not_block_other_tasks() {
        let injector = LatencyInjector::new(Duration::from_secs(5));
        let slow = tokio::spawn(async move { injector.stall(true).await });

        let start = Instant::now();
        let fast = tokio::spawn(async move { injector.stall(false).await });
        assert!(!fast.await.unwrap());
        assert!(start.elapsed() < Duration::from_secs(5));

        assert!(slow.await.unwrap());
    }
}
