use anchor_lang::prelude::*;

#[error_code]
pub enum ErrorCodes {
    #[msg(CONNECTOR_NOT_AUTHORIZED)]
    ConnectorNotAuthorized,

    #[msg(CONNECTOR_CONTROLLER_VIOLATION)]
    ConnectorControllerViolation,

    #[msg(CONNECTOR_CHECKS_IN_PROGRESS)]
    ConnectorChecksInProgress,

    #[msg(CONNECTOR_VAULT_NOT_FOUND)]
    ConnectorVaultNotFound,

    #[msg(CONNECTOR_VAULT_BUSY)]
    ConnectorVaultBusy,

    #[msg(CONNECTOR_INSUFFICIENT_BALANCE)]
    ConnectorInsufficientBalance,

    #[msg(CONNECTOR_UNKNOWN_ASSET)]
    ConnectorUnknownAsset,

    #[msg(CONNECTOR_NOT_IN_BATCH)]
    ConnectorNotInBatch,
}
