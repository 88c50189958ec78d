//! Time warping, snapshots, and state management

use crate::{
    core::env::{Env, Snapshot},
    errors::{EnvError, Result},
};

/// Trait for managing environment state (time, snapshots)
pub trait StateManager {
    /// Warp time forward in seconds
    fn warp_time(&mut self, seconds: i64);

    /// Set absolute timestamp
    fn set_timestamp(&mut self, timestamp: i64);

    /// Get current timestamp
    fn timestamp(&self) -> i64;

    /// Take a snapshot of current state
    fn snapshot(&mut self) -> Result<u64>;

    /// Revert to a snapshot state. Vaults created after the snapshot are kept.
    fn revert(&mut self, snapshot_id: u64) -> Result<()>;
}

impl StateManager for Env {
    fn warp_time(&mut self, seconds: i64) {
        self.connector.warp(seconds);
        tracing::debug!("Warped {}s to {}", seconds, self.connector.timestamp());
    }

    fn set_timestamp(&mut self, timestamp: i64) {
        self.connector.set_timestamp(timestamp);
    }

    fn timestamp(&self) -> i64 {
        self.connector.timestamp()
    }

    fn snapshot(&mut self) -> Result<u64> {
        let id = self.next_snapshot_id;
        self.next_snapshot_id += 1;

        let snapshot = Snapshot {
            state: self.connector.capture()?,
            timestamp: self.timestamp(),
        };

        self.snapshots.insert(id, snapshot);
        Ok(id)
    }

    fn revert(&mut self, snapshot_id: u64) -> Result<()> {
        let snapshot = self
            .snapshots
            .get(&snapshot_id)
            .ok_or(EnvError::SnapshotNotFound(snapshot_id))?
            .clone();

        self.connector.restore(snapshot.state)?;
        self.set_timestamp(snapshot.timestamp);

        tracing::debug!("Reverted to snapshot {}", snapshot_id);
        Ok(())
    }
}

impl Env {
    /// Warp time forward by days
    pub fn warp_days(&mut self, days: u64) {
        self.warp_time((days * 24 * 60 * 60) as i64);
    }

    /// Warp time forward by hours
    pub fn warp_hours(&mut self, hours: u64) {
        self.warp_time((hours * 60 * 60) as i64);
    }
}
