use anchor_lang::prelude::*;

/// Who is calling a vault entry point.
///
/// `msg_sender` is the immediate caller; when it is the connector,
/// `on_behalf_of` is the account the connector authenticated.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Caller {
    pub msg_sender: Pubkey,
    pub on_behalf_of: Pubkey,
}

impl Caller {
    pub fn new(msg_sender: Pubkey, on_behalf_of: Pubkey) -> Self {
        Self {
            msg_sender,
            on_behalf_of,
        }
    }
}

/// Calls a controller vault may have the connector execute on a collateral
/// vault in the name of the controlled account.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CollateralCall {
    Transfer { to: Pubkey, shares: u128 },
}

/// The connector surface consumed by the vaults.
pub trait ConnectorInterface {
    fn connector_id(&self) -> Pubkey;

    /// Owner of the account's sub-account group, or the account itself when unregistered
    fn get_account_owner(&self, account: &Pubkey) -> Pubkey;

    fn get_collaterals(&self, account: &Pubkey) -> Vec<Pubkey>;

    fn is_collateral_enabled(&self, account: &Pubkey, vault: &Pubkey) -> bool;

    fn is_controller_enabled(&self, account: &Pubkey, vault: &Pubkey) -> bool;

    /// Called by `vault` to stop controlling `account`
    fn release_controller(&self, vault: &Pubkey, account: &Pubkey) -> Result<()>;

    fn require_account_check(&self, account: &Pubkey) -> Result<()>;

    fn require_vault_check(&self, vault: &Pubkey) -> Result<()>;

    fn require_account_and_vault_check(&self, account: &Pubkey, vault: &Pubkey) -> Result<()>;

    /// Drops a pending account check; only the account's controller may do this
    fn forgive_account_check(&self, vault: &Pubkey, account: &Pubkey) -> Result<()>;

    fn is_account_check_deferred(&self, account: &Pubkey) -> bool;

    fn are_checks_in_progress(&self) -> bool;

    /// Runs `call` on `collateral` as `account`, on request of its controller
    fn control_collateral(
        &self,
        controller: &Pubkey,
        account: &Pubkey,
        collateral: &Pubkey,
        call: CollateralCall,
    ) -> Result<()>;
}
