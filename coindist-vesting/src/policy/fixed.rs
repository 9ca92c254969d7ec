use serde::{Deserialize, Serialize};

use super::UnlockPolicy;
use crate::constants::INITIAL_UNLOCKED_COUNT;

/// A boundary that never moves.
///
/// This is the policy the ledger ships with. Automatic unlocking would need
/// the current time or block height, which this crate does not hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FixedUnlock {
    pub count: usize,
}

impl FixedUnlock {
    pub fn new(count: usize) -> Self {
        Self { count }
    }
}

impl Default for FixedUnlock {
    fn default() -> Self {
        Self::new(INITIAL_UNLOCKED_COUNT)
    }
}

impl UnlockPolicy for FixedUnlock {
    fn name(&self) -> &str {
        "fixed"
    }

    fn unlock_boundary(&self, total: usize) -> usize {
        self.count.min(total)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::DISTRIBUTION_ADDRESSES_TOTAL;

    #[test]
    fn test_default_unlocks_everything() {
        let policy = FixedUnlock::default();
        assert_eq!(
            policy.unlock_boundary(DISTRIBUTION_ADDRESSES_TOTAL),
            DISTRIBUTION_ADDRESSES_TOTAL
        );
    }

    #[test]
    fn test_boundary_is_clamped() {
        assert_eq!(FixedUnlock::new(30).unlock_boundary(100), 30);
        assert_eq!(FixedUnlock::new(130).unlock_boundary(100), 100);
        assert_eq!(FixedUnlock::new(0).unlock_boundary(100), 0);
    }
}
