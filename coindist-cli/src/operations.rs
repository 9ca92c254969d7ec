use std::fmt::Write as _;
use std::fs;
use std::path::Path;
use std::sync::Arc;

use coindist_common::{Address, TransactionInput};
use coindist_vesting::{AddressRegistry, DistributionConfig, LockedOutputChecker, Result};
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListFilter {
    All,
    Locked,
    Unlocked,
}

impl ListFilter {
    pub fn from_flags(locked: bool, unlocked: bool) -> Self {
        match (locked, unlocked) {
            (true, _) => ListFilter::Locked,
            (_, true) => ListFilter::Unlocked,
            _ => ListFilter::All,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct AddressEntry {
    pub index: usize,
    pub address: Address,
    pub balance: u64,
    pub locked: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct StatusReport {
    pub policy: String,
    pub max_supply: u64,
    pub total_addresses: usize,
    pub per_address_balance: u64,
    pub unlock_boundary: usize,
    pub unlocked: usize,
    pub locked: usize,
    pub locked_supply: u64,
    pub unlock_rate: usize,
    pub unlock_interval_secs: u64,
}

#[derive(Debug, Clone, Serialize)]
pub struct CheckReport {
    pub inputs: usize,
    pub locked: bool,
    pub offending: Option<TransactionInput>,
}

/// Builds the checker described by `config` over the genesis table.
pub fn build_checker(config: &DistributionConfig) -> Result<LockedOutputChecker> {
    config.validate()?;
    let registry = AddressRegistry::with_supply(config.max_supply)?;
    let policy = config.policy();
    Ok(LockedOutputChecker::new(Arc::new(registry), policy.as_ref()))
}

pub fn list_addresses(checker: &LockedOutputChecker, filter: ListFilter) -> Vec<AddressEntry> {
    let balance = checker.registry().per_address_balance();
    let boundary = checker.boundary();

    checker
        .registry()
        .all()
        .iter()
        .enumerate()
        .map(|(index, address)| AddressEntry {
            index,
            address: address.clone(),
            balance,
            locked: index >= boundary,
        })
        .filter(|entry| match filter {
            ListFilter::All => true,
            ListFilter::Locked => entry.locked,
            ListFilter::Unlocked => !entry.locked,
        })
        .collect()
}

pub fn status(checker: &LockedOutputChecker, config: &DistributionConfig) -> StatusReport {
    let registry = checker.registry();
    let locked = checker.locked_count();

    StatusReport {
        policy: config.policy().name().to_string(),
        max_supply: registry.max_supply(),
        total_addresses: registry.len(),
        per_address_balance: registry.per_address_balance(),
        unlock_boundary: checker.boundary(),
        unlocked: checker.unlocked_addresses().len(),
        locked,
        locked_supply: registry.per_address_balance() * locked as u64,
        unlock_rate: config.unlock_rate,
        unlock_interval_secs: config.unlock_interval_secs,
    }
}

pub fn read_inputs(path: &Path) -> Result<Vec<TransactionInput>> {
    let data = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&data)?)
}

pub fn check_inputs(checker: &LockedOutputChecker, inputs: &[TransactionInput]) -> CheckReport {
    let offending = checker.first_locked(inputs).cloned();

    CheckReport {
        inputs: inputs.len(),
        locked: offending.is_some(),
        offending,
    }
}

pub fn render_list(entries: &[AddressEntry]) -> String {
    let mut out = String::new();
    for entry in entries {
        let state = if entry.locked { "locked" } else { "unlocked" };
        let _ = writeln!(out, "{:>3}  {:<36} {:>12}  {}", entry.index, entry.address.as_str(), entry.balance, state);
    }
    out
}

pub fn render_status(report: &StatusReport) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Policy:               {}", report.policy);
    let _ = writeln!(out, "Max supply:           {}", report.max_supply);
    let _ = writeln!(out, "Distribution addrs:   {}", report.total_addresses);
    let _ = writeln!(out, "Balance per address:  {}", report.per_address_balance);
    let _ = writeln!(out, "Unlock boundary:      {}", report.unlock_boundary);
    let _ = writeln!(out, "Unlocked / locked:    {} / {}", report.unlocked, report.locked);
    let _ = writeln!(out, "Locked supply:        {}", report.locked_supply);
    let _ = writeln!(
        out,
        "Schedule:             {} address(es) every {}s",
        report.unlock_rate, report.unlock_interval_secs
    );
    out
}

pub fn render_check(report: &CheckReport) -> String {
    match &report.offending {
        Some(input) => format!(
            "locked: input {} spends from distribution address {}\n",
            input.uxid_hex(),
            input.owner()
        ),
        None => format!("unlocked: {} input(s) checked\n", report.inputs),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn thirty_unlocked() -> (DistributionConfig, LockedOutputChecker) {
        let config = DistributionConfig {
            initial_unlocked: 30,
            ..Default::default()
        };
        let checker = build_checker(&config).unwrap();
        (config, checker)
    }

    #[test]
    fn test_default_status_has_nothing_locked() {
        let config = DistributionConfig::default();
        let checker = build_checker(&config).unwrap();
        let report = status(&checker, &config);

        assert_eq!(report.policy, "fixed");
        assert_eq!(report.unlocked, 100);
        assert_eq!(report.locked, 0);
        assert_eq!(report.locked_supply, 0);
        assert!(render_status(&report).contains("Max supply:           300000000"));
    }

    #[test]
    fn test_list_filters() {
        let (_, checker) = thirty_unlocked();

        assert_eq!(list_addresses(&checker, ListFilter::All).len(), 100);
        let locked = list_addresses(&checker, ListFilter::Locked);
        assert_eq!(locked.len(), 70);
        assert_eq!(locked[0].index, 30);
        assert!(locked.iter().all(|e| e.locked && e.balance == 3_000_000));
        assert_eq!(list_addresses(&checker, ListFilter::Unlocked).len(), 30);

        assert_eq!(ListFilter::from_flags(true, false), ListFilter::Locked);
        assert_eq!(ListFilter::from_flags(false, false), ListFilter::All);
    }

    #[test]
    fn test_check_reports_offending_input() {
        let (_, checker) = thirty_unlocked();
        let all = checker.registry().all();
        let inputs = vec![
            TransactionInput::new([1; 32], all[0].clone(), 5, 0),
            TransactionInput::new([2; 32], all[99].clone(), 5, 0),
        ];

        let report = check_inputs(&checker, &inputs);
        assert!(report.locked);
        assert_eq!(report.offending.as_ref().map(|i| i.uxid), Some([2; 32]));
        assert!(render_check(&report).starts_with("locked:"));

        let clean = check_inputs(&checker, &inputs[..1]);
        assert!(!clean.locked);
        assert_eq!(render_check(&clean), "unlocked: 1 input(s) checked\n");
    }

    #[test]
    fn test_read_inputs_from_file() {
        let (_, checker) = thirty_unlocked();
        let input = TransactionInput::new([9; 32], checker.registry().all()[50].clone(), 1, 2);

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("inputs.json");
        fs::write(&path, serde_json::to_string(&vec![input.clone()]).unwrap()).unwrap();

        let inputs = read_inputs(&path).unwrap();
        assert_eq!(inputs, vec![input]);
        assert!(check_inputs(&checker, &inputs).locked);
    }

    #[test]
    fn test_invalid_config_does_not_build() {
        let config = DistributionConfig {
            max_supply: 7,
            ..Default::default()
        };
        assert!(build_checker(&config).is_err());
    }
}
