//! Millisecond clock from the embassy time driver.

use embassy_time::Instant;

use crate::board::Clock;

/// Uptime in milliseconds, truncated to `u32`.
#[derive(Clone, Copy, Debug, Default)]
pub struct EmbassyClock;

impl Clock for EmbassyClock {
    fn now_ms(&self) -> u32 {
        Instant::now().as_millis() as u32
    }
}
