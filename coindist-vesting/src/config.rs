use std::{fs, path::Path};

use serde::{Deserialize, Serialize};

use crate::constants::{
    DISTRIBUTION_ADDRESSES_TOTAL, INITIAL_UNLOCKED_COUNT, MAX_COIN_SUPPLY, UNLOCK_ADDRESS_RATE,
    UNLOCK_TIME_INTERVAL,
};
use crate::error::{DistributionError, Result};
use crate::policy::{FixedUnlock, ScheduledUnlock, UnlockPolicy};

/// Distribution parameters, loadable from a JSON file.
///
/// Every field defaults to the ledger constant, so an empty object (or no
/// file at all) reproduces the shipped policy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DistributionConfig {
    pub max_supply: u64,
    pub total_addresses: usize,
    pub initial_unlocked: usize,
    pub unlock_rate: usize,
    pub unlock_interval_secs: u64,
    /// When set, switches from the fixed boundary to the time-driven schedule.
    pub unlock_start: Option<u64>,
    /// Evaluation time for the schedule. Callers fill this in; nothing here
    /// reads the clock.
    pub now: Option<u64>,
}

impl Default for DistributionConfig {
    fn default() -> Self {
        Self {
            max_supply: MAX_COIN_SUPPLY,
            total_addresses: DISTRIBUTION_ADDRESSES_TOTAL,
            initial_unlocked: INITIAL_UNLOCKED_COUNT,
            unlock_rate: UNLOCK_ADDRESS_RATE,
            unlock_interval_secs: UNLOCK_TIME_INTERVAL,
            unlock_start: None,
            now: None,
        }
    }
}

impl DistributionConfig {
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let data = fs::read_to_string(path.as_ref())?;
        let config: Self = serde_json::from_str(&data)?;
        config.validate()?;
        Ok(config)
    }

    /// Loads `path` if given, otherwise the defaults.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(p) => Self::load(p),
            None => Ok(Self::default()),
        }
    }

    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)?;
        Ok(())
    }

    pub fn validate(&self) -> Result<()> {
        if self.total_addresses != DISTRIBUTION_ADDRESSES_TOTAL {
            return Err(DistributionError::Config(format!(
                "total_addresses must be {} (size of the genesis table), got {}",
                DISTRIBUTION_ADDRESSES_TOTAL, self.total_addresses
            )));
        }

        if self.max_supply % self.total_addresses as u64 != 0 {
            return Err(DistributionError::IndivisibleSupply {
                max_supply: self.max_supply,
                total: self.total_addresses as u64,
            });
        }

        if self.initial_unlocked > self.total_addresses {
            return Err(DistributionError::Config(format!(
                "initial_unlocked ({}) exceeds total_addresses ({})",
                self.initial_unlocked, self.total_addresses
            )));
        }

        if self.unlock_start.is_some() && self.unlock_interval_secs == 0 {
            return Err(DistributionError::Config(
                "unlock_interval_secs must be positive when unlock_start is set".to_string(),
            ));
        }

        Ok(())
    }

    /// Fills in `now` if the caller has not set it.
    pub fn with_now(mut self, now: u64) -> Self {
        self.now.get_or_insert(now);
        self
    }

    /// Builds the configured unlock policy.
    ///
    /// A schedule with no `now` is evaluated at its own start time.
    pub fn policy(&self) -> Box<dyn UnlockPolicy> {
        match self.unlock_start {
            Some(start_timestamp) => Box::new(ScheduledUnlock {
                initial: self.initial_unlocked,
                rate: self.unlock_rate,
                interval_secs: self.unlock_interval_secs,
                start_timestamp,
                now: self.now.unwrap_or(start_timestamp),
            }),
            None => Box::new(FixedUnlock::new(self.initial_unlocked)),
        }
    }
}
