use thiserror::Error;

pub type Result<T> = std::result::Result<T, EnvError>;

/// Framework error types
#[derive(Error, Debug)]
pub enum EnvError {
    #[error("Asset not found: {0}")]
    AssetNotFound(String),

    #[error("Snapshot not found: {0}")]
    SnapshotNotFound(u64),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Anchor error: {0}")]
    AnchorError(#[from] anchor_lang::error::Error),

    #[error("Custom error: {0}")]
    Custom(String),
}

impl EnvError {
    /// Variant name of the program error code, e.g. `VaultAccountUnhealthy`.
    pub fn error_name(&self) -> Option<&str> {
        match self {
            EnvError::AnchorError(anchor_lang::error::Error::AnchorError(err)) => {
                Some(err.error_name.as_str())
            }
            _ => None,
        }
    }

    pub fn error_code(&self) -> Option<u32> {
        match self {
            EnvError::AnchorError(anchor_lang::error::Error::AnchorError(err)) => {
                Some(err.error_code_number)
            }
            _ => None,
        }
    }
}

pub trait ResultExt<T> {
    fn context(self, msg: &str) -> Result<T>;
}

impl<T, E: std::fmt::Display> ResultExt<T> for std::result::Result<T, E> {
    fn context(self, msg: &str) -> Result<T> {
        self.map_err(|e| EnvError::Custom(format!("{}: {}", msg, e)))
    }
}
