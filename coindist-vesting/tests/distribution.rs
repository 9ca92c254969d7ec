use std::collections::HashSet;
use std::io::Write;
use std::sync::Arc;

use coindist_common::{Address, TransactionInput};
use coindist_vesting::{
    all_distribution_addresses, constants::*, genesis_registry, is_transaction_locked,
    locked_distribution_addresses, unlocked_distribution_addresses, AddressRegistry,
    DistributionConfig, DistributionError, FixedUnlock, LockedOutputChecker, ScheduledUnlock,
};

fn spend(address: &Address, tag: u8) -> TransactionInput {
    TransactionInput::new([tag; 32], address.clone(), DISTRIBUTION_ADDRESS_INITIAL_BALANCE, 0)
}

#[test]
fn test_genesis_addresses_are_unique_and_well_formed() {
    let all = all_distribution_addresses();
    assert_eq!(all.len(), 100);

    let unique: HashSet<_> = all.iter().collect();
    assert_eq!(unique.len(), 100);
    assert!(all.iter().all(|a| a.is_well_formed()));
    assert!(genesis_registry().verify_genesis().is_ok());
}

#[test]
fn test_every_boundary_partitions_in_order() {
    let registry = genesis_registry();
    let all = registry.all();

    for boundary in 0..=DISTRIBUTION_ADDRESSES_TOTAL {
        let checker = LockedOutputChecker::with_boundary(Arc::clone(&registry), boundary);
        let unlocked = checker.unlocked_addresses();
        let locked = checker.locked_addresses();

        assert_eq!(unlocked.len() + locked.len(), DISTRIBUTION_ADDRESSES_TOTAL);
        assert_eq!(unlocked.len(), boundary);
        assert_eq!([unlocked, locked].concat().as_slice(), all);

        let overlap = unlocked.iter().filter(|a| locked.contains(*a)).count();
        assert_eq!(overlap, 0);
    }
}

#[test]
fn test_mutating_a_copy_does_not_leak_back() {
    let mut copy = all_distribution_addresses().to_vec();
    copy.reverse();
    copy.truncate(3);

    let fresh = all_distribution_addresses();
    assert_eq!(fresh.len(), 100);
    assert_eq!(fresh[0].as_str(), "hEXXeSCzxSiRvLA5dyF52dtBCBZyFxUK77");
}

#[test]
fn test_listing_and_checking_are_idempotent() {
    assert_eq!(all_distribution_addresses(), all_distribution_addresses());
    assert_eq!(unlocked_distribution_addresses(), unlocked_distribution_addresses());
    assert_eq!(locked_distribution_addresses(), locked_distribution_addresses());

    let inputs = vec![spend(&all_distribution_addresses()[42], 1)];
    assert_eq!(is_transaction_locked(&inputs), is_transaction_locked(&inputs));
}

#[test]
fn test_supply_splits_exactly() {
    assert_eq!(
        DISTRIBUTION_ADDRESS_INITIAL_BALANCE * DISTRIBUTION_ADDRESSES_TOTAL as u64,
        MAX_COIN_SUPPLY
    );
    assert_eq!(genesis_registry().per_address_balance(), DISTRIBUTION_ADDRESS_INITIAL_BALANCE);
}

#[test]
fn test_shipped_constants_never_lock() {
    assert!(!is_transaction_locked(&[]));
    assert!(locked_distribution_addresses().is_empty());

    let every_address: Vec<_> = all_distribution_addresses()
        .iter()
        .enumerate()
        .map(|(i, a)| spend(a, i as u8))
        .collect();
    assert!(!is_transaction_locked(&every_address));
}

#[test]
fn test_thirty_address_policy_on_genesis_table() {
    let registry = genesis_registry();
    let all = registry.all();
    let checker = LockedOutputChecker::new(Arc::clone(&registry), &FixedUnlock::new(30));
    assert_eq!(checker.locked_count(), 70);

    let unlocked_only: Vec<_> = all[..30].iter().map(|a| spend(a, 0)).collect();
    assert!(!checker.is_locked(&unlocked_only));

    let mut mixed = unlocked_only.clone();
    mixed.insert(10, spend(&all[64], 7));
    assert!(checker.is_locked(&mixed));
    assert_eq!(checker.first_locked(&mixed).map(|i| i.owner()), Some(&all[64]));

    let locked_only: Vec<_> = all[30..].iter().map(|a| spend(a, 1)).collect();
    assert!(checker.is_locked(&locked_only));

    let stranger = Address::from_key_hash(&[0x55; 20]);
    assert!(!checker.is_locked(&[spend(&stranger, 2)]));
}

#[test]
fn test_schedule_releases_genesis_addresses() {
    let registry = genesis_registry();
    let start = 1_600_000_000;
    let schedule = ScheduledUnlock {
        initial: 30,
        ..ScheduledUnlock::starting_at(start, start)
    };

    let mut checker = LockedOutputChecker::new(Arc::clone(&registry), &schedule);
    let next_in_line = vec![spend(&registry.all()[32], 0)];
    assert!(checker.is_locked(&next_in_line));

    assert!(checker.refresh(&schedule.at(start + UNLOCK_TIME_INTERVAL)));
    assert_eq!(checker.boundary(), 30 + UNLOCK_ADDRESS_RATE);
    assert!(!checker.is_locked(&next_in_line));
}

#[test]
fn test_indivisible_supply_fails_before_use() {
    let result = AddressRegistry::with_supply(MAX_COIN_SUPPLY - 1);
    assert!(matches!(result, Err(DistributionError::IndivisibleSupply { .. })));
}

#[test]
fn test_config_file_roundtrip() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("distribution.json");

    let config = DistributionConfig {
        initial_unlocked: 30,
        unlock_start: Some(1_600_000_000),
        ..Default::default()
    };
    config.save(&path).unwrap();

    let loaded = DistributionConfig::load(&path).unwrap();
    assert_eq!(loaded, config);
    assert_eq!(loaded.policy().unlock_boundary(100), 30);
}

#[test]
fn test_bad_config_file_is_rejected() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, r#"{{ "max_supply": 12345 }}"#).unwrap();

    assert!(matches!(
        DistributionConfig::load(file.path()),
        Err(DistributionError::IndivisibleSupply { .. })
    ));
    assert!(DistributionConfig::load_or_default(None).is_ok());
}
