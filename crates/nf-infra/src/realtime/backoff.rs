use std::time::Duration;

use nf_core::config::ReconnectConfig;
use rand::Rng;

/// Bounded exponential backoff for realtime reconnects.
///
/// Attempt `n` (1-based) waits `base * 2^(n-1)` capped at `max`, plus up to
/// 10% jitter. Once `max_attempts` consecutive attempts are used up,
/// [`Backoff::next_delay`] returns `None` until [`Backoff::reset`].
#[derive(Debug, Clone)]
pub struct Backoff {
    config: ReconnectConfig,
    attempt: u32,
}

impl Backoff {
    pub fn new(config: ReconnectConfig) -> Self {
        Self { config, attempt: 0 }
    }

    pub fn attempt(&self) -> u32 {
        self.attempt
    }

    pub fn reset(&mut self) {
        self.attempt = 0;
    }

    /// Delay before attempt `attempt`, without jitter.
    pub fn base_delay(&self, attempt: u32) -> Duration {
        let shift = attempt.saturating_sub(1).min(31);
        let delay_ms = self
            .config
            .base_delay_ms
            .saturating_mul(1u64 << shift)
            .min(self.config.max_delay_ms);
        Duration::from_millis(delay_ms)
    }

    pub fn next_delay(&mut self) -> Option<Duration> {
        if self.attempt >= self.config.max_attempts {
            return None;
        }
        self.attempt += 1;
        let delay = self.base_delay(self.attempt);
        let jitter_cap = (delay.as_millis() as u64) / 10;
        let jitter = if jitter_cap == 0 {
            0
        } else {
            rand::rng().random_range(0..=jitter_cap)
        };
        Some(delay + Duration::from_millis(jitter))
    }
}
