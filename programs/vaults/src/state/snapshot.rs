use anchor_lang::prelude::*;

use crate::{errors::ErrorCodes, state::Vault};

use library::math::u256::Rounding;

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ReentrancyState {
    #[default]
    Unlocked,
    Locked,
}

/// Vault totals at the start of a batch, compared against at the vault status check.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct VaultSnapshot {
    pub supply_assets: u128,
    pub total_borrowed: u128,
}

impl VaultSnapshot {
    pub fn encode(&self) -> Result<Vec<u8>> {
        let mut data = Vec::new();
        self.serialize(&mut data)
            .map_err(|_| error!(ErrorCodes::VaultInvalidSnapshot))?;
        Ok(data)
    }

    pub fn decode(data: &[u8]) -> Result<Self> {
        let mut data = data;
        Self::deserialize(&mut data).map_err(|_| error!(ErrorCodes::VaultInvalidSnapshot))
    }
}

impl Vault {
    pub fn lock(&mut self) -> Result<()> {
        if self.reentrancy_state == ReentrancyState::Locked {
            return Err(error!(ErrorCodes::VaultReentrancy));
        }
        self.reentrancy_state = ReentrancyState::Locked;
        Ok(())
    }

    pub fn unlock(&mut self) {
        self.reentrancy_state = ReentrancyState::Unlocked;
    }

    pub fn has_snapshot(&self) -> bool {
        !self.snapshot.is_empty()
    }

    /// Records the vault totals once per batch; later calls in the same batch are no-ops.
    ///
    /// Interest is committed first, so every ledger mutation in the batch runs
    /// against an accumulator that is current at `now`.
    pub fn take_snapshot_once(&mut self, now: u64) -> Result<()> {
        if self.has_snapshot() {
            return Ok(());
        }

        self.accrue_interest(now)?;

        let snapshot = VaultSnapshot {
            supply_assets: self.convert_to_assets(self.total_shares, Rounding::Floor, now)?,
            total_borrowed: self.ledger.total_borrowed,
        };

        self.snapshot = snapshot.encode()?;
        Ok(())
    }

    /// Reads and clears the batch snapshot.
    pub fn consume_snapshot(&mut self) -> Result<VaultSnapshot> {
        if !self.has_snapshot() {
            return Err(error!(ErrorCodes::VaultSnapshotNotTaken));
        }

        let data = std::mem::take(&mut self.snapshot);
        VaultSnapshot::decode(&data)
    }
}
