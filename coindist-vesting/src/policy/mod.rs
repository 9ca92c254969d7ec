//! Unlock policies: how many distribution addresses may currently spend.
//!
//! The registry and the checker only ever see the resulting boundary, so a
//! time- or height-driven policy can replace the fixed one without touching
//! either of them.

pub mod fixed;
pub mod scheduled;

pub use fixed::FixedUnlock;
pub use scheduled::ScheduledUnlock;

/// Produces the unlock boundary for a registry of `total` addresses.
pub trait UnlockPolicy: Send + Sync + std::fmt::Debug {
    /// Returns the name of the policy for logging/display.
    fn name(&self) -> &str;

    /// Number of addresses, from the start of the table, allowed to spend.
    ///
    /// Implementations must return a value in `[0, total]` and must be pure:
    /// the same policy and `total` always give the same boundary.
    fn unlock_boundary(&self, total: usize) -> usize;
}
