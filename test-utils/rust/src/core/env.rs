use std::collections::HashMap;

use anchor_lang::prelude::Pubkey;
use connector::{Connector, ConnectorState};
use vaults::state::{InitVaultParams, VaultContext};

use crate::errors::{EnvError, Result};

/// Connector state and clock as captured by [`crate::core::StateManager::snapshot`].
#[derive(Clone)]
pub struct Snapshot {
    pub state: ConnectorState,
    pub timestamp: i64,
}

/// In-memory test environment: one connector with its vaults, assets and clock.
pub struct Env {
    pub(crate) connector: Connector,
    pub(crate) snapshots: HashMap<u64, Snapshot>,
    pub(crate) next_snapshot_id: u64,
    assets: HashMap<String, Pubkey>,
}

impl Env {
    pub fn new(timestamp: i64) -> Self {
        Self {
            connector: Connector::new(timestamp),
            snapshots: HashMap::new(),
            next_snapshot_id: 0,
            assets: HashMap::new(),
        }
    }

    pub fn connector(&self) -> &Connector {
        &self.connector
    }

    /// Fresh account key, outside of every existing sub-account group.
    pub fn make_account(&self) -> Pubkey {
        Pubkey::new_unique()
    }

    /// Register an asset under `label`.
    pub fn create_asset(&mut self, label: &str, decimals: u8) -> Pubkey {
        let asset = self.connector.create_asset(decimals);
        tracing::debug!("Created asset {} ({} decimals): {}", label, decimals, asset);

        self.assets.insert(label.to_string(), asset);
        asset
    }

    pub fn asset(&self, label: &str) -> Result<Pubkey> {
        self.assets
            .get(label)
            .copied()
            .ok_or_else(|| EnvError::AssetNotFound(label.to_string()))
    }

    pub fn create_vault(&mut self, params: InitVaultParams) -> Result<Pubkey> {
        let vault = self.connector.create_vault(params)?;
        tracing::debug!("Created vault {}", vault);
        Ok(vault)
    }

    pub fn context(&self, vault: &Pubkey) -> Result<VaultContext<'_>> {
        Ok(self.connector.context(vault)?)
    }
}
