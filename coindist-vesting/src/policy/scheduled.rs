use coindist_common::utils::time::elapsed_secs;
use serde::{Deserialize, Serialize};

use super::UnlockPolicy;
use crate::constants::{INITIAL_UNLOCKED_COUNT, UNLOCK_ADDRESS_RATE, UNLOCK_TIME_INTERVAL};

/// Releases `rate` more addresses every `interval_secs` after `start_timestamp`.
///
/// Starts from `initial` unlocked addresses. The evaluation time is part of
/// the policy value rather than read from a clock, so the boundary stays a
/// pure function of its inputs. Not enabled on the ledger yet: it is meant
/// to be switched on once the initially unlocked addresses are distributed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduledUnlock {
    pub initial: usize,
    pub rate: usize,
    pub interval_secs: u64,
    pub start_timestamp: u64,
    pub now: u64,
}

impl ScheduledUnlock {
    /// Schedule with the ledger's rate and interval, starting at `start_timestamp`.
    pub fn starting_at(start_timestamp: u64, now: u64) -> Self {
        Self {
            initial: INITIAL_UNLOCKED_COUNT,
            rate: UNLOCK_ADDRESS_RATE,
            interval_secs: UNLOCK_TIME_INTERVAL,
            start_timestamp,
            now,
        }
    }

    /// Same schedule evaluated at another point in time.
    pub fn at(self, now: u64) -> Self {
        Self { now, ..self }
    }

    /// Whole intervals elapsed since the schedule started.
    pub fn intervals_elapsed(&self) -> u64 {
        if self.interval_secs == 0 {
            return 0;
        }
        elapsed_secs(self.start_timestamp, self.now) / self.interval_secs
    }
}

impl UnlockPolicy for ScheduledUnlock {
    fn name(&self) -> &str {
        "scheduled"
    }

    fn unlock_boundary(&self, total: usize) -> usize {
        let released = usize::try_from(self.intervals_elapsed())
            .unwrap_or(usize::MAX)
            .saturating_mul(self.rate);

        self.initial.saturating_add(released).min(total)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const YEAR: u64 = 60 * 60 * 24 * 365;
    const START: u64 = 1_500_000_000;

    fn thirty_then_five() -> ScheduledUnlock {
        ScheduledUnlock {
            initial: 30,
            rate: 5,
            interval_secs: YEAR,
            start_timestamp: START,
            now: START,
        }
    }

    #[test]
    fn test_releases_per_interval() {
        let policy = thirty_then_five();

        assert_eq!(policy.unlock_boundary(100), 30);
        assert_eq!(policy.at(START + YEAR - 1).unlock_boundary(100), 30);
        assert_eq!(policy.at(START + YEAR).unlock_boundary(100), 35);
        assert_eq!(policy.at(START + 3 * YEAR + 10).unlock_boundary(100), 45);
    }

    #[test]
    fn test_before_start_keeps_initial() {
        let policy = thirty_then_five().at(START - 10 * YEAR);
        assert_eq!(policy.intervals_elapsed(), 0);
        assert_eq!(policy.unlock_boundary(100), 30);
    }

    #[test]
    fn test_caps_at_total() {
        let policy = thirty_then_five().at(START + 50 * YEAR);
        assert_eq!(policy.unlock_boundary(100), 100);

        let far = thirty_then_five().at(u64::MAX);
        assert_eq!(far.unlock_boundary(100), 100);
    }

    #[test]
    fn test_zero_interval_never_releases() {
        let policy = ScheduledUnlock {
            interval_secs: 0,
            ..thirty_then_five().at(START + 10 * YEAR)
        };
        assert_eq!(policy.unlock_boundary(100), 30);
    }

    #[test]
    fn test_ledger_defaults_are_fully_unlocked() {
        let policy = ScheduledUnlock::starting_at(START, START);
        assert_eq!(policy.unlock_boundary(100), 100);
    }
}
