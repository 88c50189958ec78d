use anchor_lang::prelude::Pubkey;
use vaults::module::view;

use crate::{core::env::Env, errors::EnvError, helpers::tokens::TokenHelper};

/// Result of an `expect_revert` check, containing details about the failure
#[derive(Debug, Clone)]
pub struct RevertInfo {
    /// The error that caused the revert
    pub error: String,
    /// Error code variant name, when the revert came from a program error code
    pub error_name: Option<String>,
    pub error_code: Option<u32>,
}

impl RevertInfo {
    fn from_error(err: &EnvError) -> Self {
        Self {
            error: err.to_string(),
            error_name: err.error_name().map(str::to_string),
            error_code: err.error_code(),
        }
    }

    /// Check if the error name or message contain the expected message
    pub fn contains(&self, message: &str) -> bool {
        self.error.contains(message)
            || self
                .error_name
                .as_deref()
                .is_some_and(|name| name.contains(message))
    }

    /// Check if the revert matches an Anchor error code
    pub fn has_error_code(&self, code: u32) -> bool {
        self.error_code == Some(code)
    }

    fn matches(&self, expected: &str) -> bool {
        self.error_name.as_deref() == Some(expected) || self.contains(expected)
    }
}

/// Core assertion trait
pub trait Assertions {
    /// Assert token balance equals expected
    fn assert_token_balance_eq(&self, owner: &Pubkey, asset: &Pubkey, expected: u128);

    /// Assert vault shares of an account equal expected
    fn assert_shares_eq(&self, vault: &Pubkey, account: &Pubkey, expected: u128);

    /// Assert debt of an account, interest included, equals expected
    fn assert_debt_eq(&self, vault: &Pubkey, account: &Pubkey, expected: u128);

    /// Assert approximate equality with absolute delta
    fn assert_approx_eq(&self, actual: u128, expected: u128, delta: u128);
}

impl Assertions for Env {
    fn assert_token_balance_eq(&self, owner: &Pubkey, asset: &Pubkey, expected: u128) {
        let actual = self.token_balance(owner, asset);
        assert_eq!(
            actual, expected,
            "Token balance mismatch for {} ({}): expected {}, got {}",
            owner, asset, expected, actual
        );
    }

    fn assert_shares_eq(&self, vault: &Pubkey, account: &Pubkey, expected: u128) {
        let actual = self
            .context(vault)
            .and_then(|ctx| Ok(view::balance_of(&ctx, account)?))
            .unwrap_or_else(|err| panic!("Failed to read shares of {}: {}", account, err));
        assert_eq!(
            actual, expected,
            "Share balance mismatch for {} in {}: expected {}, got {}",
            account, vault, expected, actual
        );
    }

    fn assert_debt_eq(&self, vault: &Pubkey, account: &Pubkey, expected: u128) {
        let actual = self
            .context(vault)
            .and_then(|ctx| Ok(view::debt_of(&ctx, account)?))
            .unwrap_or_else(|err| panic!("Failed to read debt of {}: {}", account, err));
        assert_eq!(
            actual, expected,
            "Debt mismatch for {} in {}: expected {}, got {}",
            account, vault, expected, actual
        );
    }

    fn assert_approx_eq(&self, actual: u128, expected: u128, delta: u128) {
        assert_approx_eq(actual, expected, delta);
    }
}

/// Assert `actual` is within `delta` of `expected`.
pub fn assert_approx_eq(actual: u128, expected: u128, delta: u128) {
    let diff = actual.abs_diff(expected);
    assert!(
        diff <= delta,
        "Values not approximately equal: actual {}, expected {}, diff {} > delta {}",
        actual,
        expected,
        diff,
        delta
    );
}

/// Foundry-style `expect_revert` on the environment.
///
/// # Example
/// ```ignore
/// env.expect_revert("VaultAccountUnhealthy", |env| fixture.borrow(env, &alice, amount));
/// ```
pub trait ExpectRevertExt: Sized {
    /// Run `action` and assert it reverts with the error code named `expected`,
    /// or with an error whose message contains it.
    fn expect_revert<F, T, E>(&mut self, expected: &str, action: F) -> RevertInfo
    where
        F: FnOnce(&mut Self) -> std::result::Result<T, E>,
        E: Into<EnvError>,
    {
        self.expect_revert_any(&[expected], action)
    }

    /// Run `action` and assert it reverts with the provided Anchor error code number.
    fn expect_revert_code<F, T, E>(&mut self, error_code: u32, action: F) -> RevertInfo
    where
        F: FnOnce(&mut Self) -> std::result::Result<T, E>,
        E: Into<EnvError>,
    {
        let info = self.expect_fail(action);
        assert!(
            info.has_error_code(error_code),
            "Expected revert with code {}, but got error: {}",
            error_code,
            info.error
        );
        info
    }

    /// Run `action` and assert it reverts with any of the provided `expected_messages`.
    fn expect_revert_any<F, T, E>(&mut self, expected_messages: &[&str], action: F) -> RevertInfo
    where
        F: FnOnce(&mut Self) -> std::result::Result<T, E>,
        E: Into<EnvError>,
    {
        action(self).expect_revert_containing_any(expected_messages)
    }

    /// Run `action` and expect it to fail without checking the specific error.
    fn expect_fail<F, T, E>(&mut self, action: F) -> RevertInfo
    where
        F: FnOnce(&mut Self) -> std::result::Result<T, E>,
        E: Into<EnvError>,
    {
        action(self).expect_failure()
    }
}

impl ExpectRevertExt for Env {}

/// Extension trait for `Result` types to provide fluent expect_revert style assertions.
///
/// # Example
/// ```ignore
/// fixture.borrow(&alice, amount).expect_revert_with("VaultAccountUnhealthy");
/// ```
pub trait ExpectRevertResultExt<T> {
    /// Assert that the result is an error named or containing `expected`.
    fn expect_revert_with(self, expected: &str) -> RevertInfo;

    /// Assert that the result is an error matching any of the expected messages.
    fn expect_revert_containing_any(self, expected_messages: &[&str]) -> RevertInfo;

    /// Assert that the result is an error, returning the `RevertInfo` for further inspection.
    fn expect_failure(self) -> RevertInfo;
}

impl<T, E> ExpectRevertResultExt<T> for std::result::Result<T, E>
where
    E: Into<EnvError>,
{
    fn expect_revert_with(self, expected: &str) -> RevertInfo {
        self.expect_revert_containing_any(&[expected])
    }

    fn expect_revert_containing_any(self, expected_messages: &[&str]) -> RevertInfo {
        let info = self.expect_failure();

        if !expected_messages.iter().any(|expected| info.matches(expected)) {
            panic!(
                "Expected revert containing {:?}, but got error: {}",
                expected_messages, info.error
            );
        }

        info
    }

    fn expect_failure(self) -> RevertInfo {
        match self {
            Ok(_) => panic!("Expected action to fail, but it succeeded"),
            Err(err) => {
                let err: EnvError = err.into();
                tracing::debug!("Reverted: {}", err);
                RevertInfo::from_error(&err)
            }
        }
    }
}
