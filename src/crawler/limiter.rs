//! Inter-request rate limiting
//!
//! The crawl loop waits out the configured period after every fetch
//! attempt, success or failure alike, before popping the next URL. The
//! pause runs on tokio's clock, so tests drive it deterministically under
//! `tokio::time::pause` instead of depending on wall-clock delay.

use std::time::Duration;

/// Serializes request issuance at the configured interval
#[derive(Debug)]
pub struct RateLimiter {
    period: Duration,
}

impl RateLimiter {
    /// Creates a limiter with the given inter-request period
    ///
    /// A zero period disables waiting entirely.
    pub fn new(period: Duration) -> Self {
        Self { period }
    }

    /// Waits out the inter-request period
    pub async fn wait(&self) {
        if !self.period.is_zero() {
            tokio::time::sleep(self.period).await;
        }
    }

    /// Returns the configured period
    pub fn period(&self) -> Duration {
        self.period
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::time::Instant;

    #[tokio::test(start_paused = true)]
    async fn test_zero_period_does_not_wait() {
        let limiter = RateLimiter::new(Duration::ZERO);
        let start = Instant::now();
        limiter.wait().await;
        assert_eq!(start.elapsed(), Duration::ZERO);
    }

    #[tokio::test(start_paused = true)]
    async fn test_wait_covers_the_period() {
        let limiter = RateLimiter::new(Duration::from_secs(3));
        let start = Instant::now();
        limiter.wait().await;
        assert!(start.elapsed() >= Duration::from_secs(3));
    }
}
