// rr3036/rr3036/src/utils/timeout.rs
//! Read timeout defaults for reader transports.

use std::time::Duration;

/// Read timeout applied when the caller does not configure one.
/// Inventory with several tags in the field can take a few hundred ms.
pub const DEFAULT_READ_TIMEOUT_MS: u64 = 1000;

/// Shorthand for `Duration::from_millis`.
pub fn ms(ms: u64) -> Duration {
    Duration::from_millis(ms)
}

/// [`DEFAULT_READ_TIMEOUT_MS`] as a `Duration`.
pub fn default_read_timeout() -> Duration {
    ms(DEFAULT_READ_TIMEOUT_MS)
}
