use std::time::{SystemTime, UNIX_EPOCH};

/// Returns the current UNIX timestamp in seconds.
///
/// Library code never calls this on its own; callers that want a
/// time-driven unlock schedule pass the result in explicitly.
///
/// # Panics
///
/// Panics if the system clock is set before the UNIX epoch.
pub fn current_time() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("System time is before UNIX EPOCH")
        .as_secs()
}

/// Seconds elapsed from `start` to `now`, zero if `now` is earlier.
pub fn elapsed_secs(start: u64, now: u64) -> u64 {
    now.saturating_sub(start)
}
