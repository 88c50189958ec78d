use anchor_lang::prelude::*;

#[error_code]
pub enum ErrorCodes {
    /***********************************|
    |            Guard                   |
    |__________________________________*/
    #[msg(VAULT_REENTRANCY)]
    VaultReentrancy,

    #[msg(VAULT_SNAPSHOT_NOT_TAKEN)]
    VaultSnapshotNotTaken,

    #[msg(VAULT_INVALID_SNAPSHOT)]
    VaultInvalidSnapshot,

    #[msg(VAULT_NOT_FOUND)]
    VaultNotFound,

    /***********************************|
    |            Caps                    |
    |__________________________________*/
    #[msg(VAULT_SUPPLY_CAP_EXCEEDED)]
    VaultSupplyCapExceeded,

    #[msg(VAULT_BORROW_CAP_EXCEEDED)]
    VaultBorrowCapExceeded,

    /***********************************|
    |          Authorization             |
    |__________________________________*/
    #[msg(VAULT_CONTROLLER_DISABLED)]
    VaultControllerDisabled,

    #[msg(VAULT_NOT_AUTHORIZED)]
    VaultNotAuthorized,

    #[msg(VAULT_CHECKS_NOT_IN_PROGRESS)]
    VaultChecksNotInProgress,

    #[msg(VAULT_SELF_DEBT_PULL)]
    VaultSelfDebtPull,

    /***********************************|
    |             Health                 |
    |__________________________________*/
    #[msg(VAULT_ACCOUNT_UNHEALTHY)]
    VaultAccountUnhealthy,

    #[msg(VAULT_OUTSTANDING_DEBT)]
    VaultOutstandingDebt,

    /***********************************|
    |           Liquidation              |
    |__________________________________*/
    #[msg(VAULT_SELF_LIQUIDATION)]
    VaultSelfLiquidation,

    #[msg(VAULT_VIOLATOR_STATUS_CHECK_DEFERRED)]
    VaultViolatorStatusCheckDeferred,

    #[msg(VAULT_NO_LIQUIDATION_OPPORTUNITY)]
    VaultNoLiquidationOpportunity,

    #[msg(VAULT_REPAY_ASSETS_EXCEEDED)]
    VaultRepayAssetsExceeded,

    #[msg(VAULT_REPAY_ASSETS_INSUFFICIENT)]
    VaultRepayAssetsInsufficient,

    #[msg(VAULT_COLLATERAL_DISABLED)]
    VaultCollateralDisabled,

    /***********************************|
    |             Ledger                 |
    |__________________________________*/
    #[msg(VAULT_INSUFFICIENT_BALANCE)]
    VaultInsufficientBalance,

    #[msg(VAULT_INSUFFICIENT_DEBT)]
    VaultInsufficientDebt,

    #[msg(VAULT_INSUFFICIENT_ASSETS)]
    VaultInsufficientAssets,

    #[msg(VAULT_ZERO_ASSETS)]
    VaultZeroAssets,

    #[msg(VAULT_ZERO_SHARES)]
    VaultZeroShares,

    #[msg(VAULT_OPERATION_NOT_SUPPORTED)]
    VaultOperationNotSupported,

    /***********************************|
    |             Admin                  |
    |__________________________________*/
    #[msg(VAULT_ADMIN_ONLY_OWNER)]
    VaultAdminOnlyOwner,

    #[msg(VAULT_ADMIN_INVALID_PARAMS)]
    VaultAdminInvalidParams,

    #[msg(VAULT_ADMIN_INVALID_COLLATERAL_FACTOR)]
    VaultAdminInvalidCollateralFactor,
}
