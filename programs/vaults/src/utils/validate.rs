use anchor_lang::prelude::*;

use crate::{
    constants::ADDRESS_DEAD,
    errors::ErrorCodes,
    invokes::Caller,
    state::{Vault, VaultContext},
};

/// Entry points are only reachable through the connector; returns the account it authenticated.
pub fn authenticate_caller(ctx: &VaultContext, caller: &Caller) -> Result<Pubkey> {
    if caller.msg_sender != ctx.host.connector_id() {
        msg!("Caller {} is not the connector", caller.msg_sender);
        return Err(error!(ErrorCodes::VaultNotAuthorized));
    }

    Ok(caller.on_behalf_of)
}

/// Like [`authenticate_caller`], and the account must have this vault enabled as controller.
pub fn authenticate_caller_for_borrow(ctx: &VaultContext, caller: &Caller) -> Result<Pubkey> {
    let account = authenticate_caller(ctx, caller)?;
    require_controller(ctx, &account)?;
    Ok(account)
}

pub fn require_controller(ctx: &VaultContext, account: &Pubkey) -> Result<()> {
    if !ctx.host.is_controller_enabled(account, &ctx.vault) {
        return Err(error!(ErrorCodes::VaultControllerDisabled));
    }
    Ok(())
}

/// Status checks may only be answered to the connector while it runs them.
pub fn verify_status_check_caller(ctx: &VaultContext, caller: &Caller) -> Result<()> {
    authenticate_caller(ctx, caller)?;

    if !ctx.host.are_checks_in_progress() {
        return Err(error!(ErrorCodes::VaultChecksNotInProgress));
    }

    Ok(())
}

pub fn verify_owner(vault: &Vault, signer: &Pubkey) -> Result<()> {
    if *signer != vault.owner {
        return Err(error!(ErrorCodes::VaultAdminOnlyOwner));
    }
    Ok(())
}

/// Assets sent to a sub-account go to the owner of its group instead.
pub fn resolve_receiver(ctx: &VaultContext, receiver: &Pubkey) -> Pubkey {
    ctx.host.get_account_owner(receiver)
}

/// Schedules the deferred checks after a mutation: the vault always, the account unless it is [`ADDRESS_DEAD`].
pub fn require_checks(ctx: &VaultContext, account: &Pubkey) -> Result<()> {
    if *account == ADDRESS_DEAD {
        ctx.host.require_vault_check(&ctx.vault)
    } else {
        ctx.host.require_account_and_vault_check(account, &ctx.vault)
    }
}
