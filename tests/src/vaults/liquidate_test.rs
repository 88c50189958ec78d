//! Liquidation tests: dynamic incentive, repay bounds, dust policies and
//! seizure of collateral held in the liability vault itself or in another vault.

#[cfg(test)]
mod tests {
    use crate::vaults::fixture::{VaultFixture, E16, E18, E6};
    use vault_test_framework::prelude::*;
    use vaults::state::DustPolicy;

    /// Debt left after the partial repay, interest included
    const VIOLATOR_DEBT: u128 = 36 * E18;

    /// Alice borrows 35, a year of interest makes her unhealthy and she repays
    /// back down to 36: liability value 3.6 against 3.5 of collateral.
    fn setup_violator_fixture() -> VaultFixture {
        let mut fixture = VaultFixture::new().expect("Failed to create vault fixture");
        let (alice, vault) = (fixture.alice, fixture.liability_vault);

        fixture.setup_borrower().expect("Failed to setup borrower");
        fixture.borrow(&alice, &vault, 35 * E18).unwrap();
        fixture.warp_time(time::YEAR);
        fixture
            .repay(&alice, &vault, 2_680_982_126_514_837_395, &alice)
            .unwrap();

        fixture.setup_liquidator().expect("Failed to setup liquidator");
        fixture
    }

    #[test]
    fn test_liquidate_external_collateral() {
        let fixture = setup_violator_fixture();
        let (alice, charlie) = (fixture.alice, fixture.charlie);
        let (vault, collateral) = (fixture.liability_vault, fixture.collateral_2_vault);

        let shares = fixture
            .liquidate(&charlie, &alice, &collateral, 6 * E18)
            .unwrap();

        // 0.6 of repaid value plus 3% incentive, at 0.1 per unit
        assert_eq!(shares, 6_180_000);
        fixture.assert_shares_eq(&collateral, &charlie, 6_180_000);
        fixture.assert_shares_eq(&collateral, &alice, 50 * E6 - 6_180_000);

        fixture.assert_debt_eq(&vault, &alice, 30 * E18);
        fixture.assert_debt_eq(&vault, &charlie, 6 * E18);
        assert_eq!(fixture.total_borrowed(&vault), VIOLATOR_DEBT);

        // no assets moved, the liquidator took the debt over
        fixture.assert_token_balance_eq(&charlie, &fixture.liability_asset, 0);

        let liquidity = fixture.account_liquidity(&alice);
        assert_eq!(liquidity.liability_value, 300 * E16);
        assert_eq!(liquidity.collateral_value, 3_191 * E16 / 10);
        assert!(liquidity.is_healthy());
        assert_eq!(fixture.connector().get_controllers(&alice), vec![vault]);
    }

    #[test]
    fn test_partial_liquidation_leaves_violator_unhealthy() {
        let fixture = setup_violator_fixture();
        let (alice, charlie) = (fixture.alice, fixture.charlie);
        let (vault, collateral) = (fixture.liability_vault, fixture.collateral_2_vault);

        // the seized share transfer asks for a check of alice, who stays under water
        let shares = fixture.liquidate(&charlie, &alice, &collateral, E18).unwrap();

        assert_eq!(shares, 1_030_000);
        fixture.assert_debt_eq(&vault, &alice, VIOLATOR_DEBT - E18);
        fixture.assert_debt_eq(&vault, &charlie, E18);
        assert!(!fixture.account_liquidity(&alice).is_healthy());

        // and can be liquidated again, at 98% healthy the incentive drops to 2%
        let shares = fixture.liquidate(&charlie, &alice, &collateral, E18).unwrap();
        assert_eq!(shares, 1_020_000);
        fixture.assert_shares_eq(&collateral, &charlie, 2_050_000);
        fixture.assert_debt_eq(&vault, &alice, VIOLATOR_DEBT - 2 * E18);
    }

    #[test]
    fn test_liquidate_healthy_account() {
        let fixture = VaultFixture::new().expect("Failed to create vault fixture");
        let (alice, charlie) = (fixture.alice, fixture.charlie);
        fixture.setup_borrower().unwrap();
        fixture.setup_liquidator().unwrap();
        fixture
            .borrow(&alice, &fixture.liability_vault, 35 * E18)
            .unwrap();

        fixture
            .liquidate(&charlie, &alice, &fixture.collateral_2_vault, E18)
            .expect_revert_with("VaultNoLiquidationOpportunity");
    }

    #[test]
    fn test_liquidation_preconditions() {
        let fixture = setup_violator_fixture();
        let (alice, bob, charlie) = (fixture.alice, fixture.bob, fixture.charlie);
        let collateral = fixture.collateral_2_vault;

        fixture
            .liquidate(&alice, &alice, &collateral, E18)
            .expect_revert_with("VaultSelfLiquidation");
        fixture
            .liquidate(&charlie, &alice, &collateral, 0)
            .expect_revert_with("VaultRepayAssetsInsufficient");
        // the liquidator takes debt over, so it must be controlled too
        fixture
            .liquidate(&bob, &alice, &collateral, E18)
            .expect_revert_with("VaultControllerDisabled");
        fixture
            .liquidate(&charlie, &bob, &collateral, E18)
            .expect_revert_with("VaultControllerDisabled");
        // the liability vault does not accept its own shares
        fixture
            .liquidate(&charlie, &alice, &fixture.liability_vault, E18)
            .expect_revert_with("VaultCollateralDisabled");
        fixture
            .liquidate(&charlie, &alice, &collateral, VIOLATOR_DEBT + 1)
            .expect_revert_with("VaultRepayAssetsExceeded");

        fixture.assert_debt_eq(&fixture.liability_vault, &alice, VIOLATOR_DEBT);
    }

    #[test]
    fn test_repay_above_health_restoring_bound() {
        let fixture = setup_violator_fixture();
        let (alice, charlie) = (fixture.alice, fixture.charlie);

        // the bound is 100 / 74 of value, 13.51 assets
        fixture
            .liquidate(&charlie, &alice, &fixture.collateral_2_vault, 14 * E18)
            .expect_revert_with("VaultRepayAssetsExceeded");
        fixture
            .liquidate(&charlie, &alice, &fixture.collateral_2_vault, 13 * E18)
            .unwrap();
    }

    #[test]
    fn test_violator_with_deferred_check() {
        let fixture = setup_violator_fixture();
        let (alice, charlie) = (fixture.alice, fixture.charlie);

        // alice's own withdrawal leaves her check pending in the same batch
        fixture
            .connector()
            .batch(|_| {
                fixture.withdraw(&alice, &fixture.collateral_1_vault, E18)?;
                fixture.liquidate(&charlie, &alice, &fixture.collateral_2_vault, E18)
            })
            .expect_revert_with("VaultViolatorStatusCheckDeferred");

        fixture.assert_shares_eq(&fixture.collateral_1_vault, &alice, 100 * E18);
    }

    #[test]
    fn test_hard_threshold_dust_allows_full_liquidation() {
        let fixture = setup_violator_fixture();
        let (alice, charlie) = (fixture.alice, fixture.charlie);
        let (vault, collateral) = (fixture.liability_vault, fixture.collateral_2_vault);

        fixture
            .liquidate(&charlie, &alice, &collateral, VIOLATOR_DEBT)
            .expect_revert_with("VaultRepayAssetsExceeded");

        fixture
            .set_dust_policy(DustPolicy::HardThreshold {
                assets: VIOLATOR_DEBT,
            })
            .unwrap();

        // only a full liquidation qualifies as dust
        fixture
            .liquidate(&charlie, &alice, &collateral, 20 * E18)
            .expect_revert_with("VaultRepayAssetsExceeded");

        let shares = fixture
            .liquidate(&charlie, &alice, &collateral, VIOLATOR_DEBT)
            .unwrap();

        assert_eq!(shares, 37_080_000);
        fixture.assert_debt_eq(&vault, &alice, 0);
        fixture.assert_debt_eq(&vault, &charlie, VIOLATOR_DEBT);
        assert!(fixture.connector().get_controllers(&alice).is_empty());
    }

    #[test]
    fn test_liability_fraction_dust_policy() {
        let fixture = setup_violator_fixture();
        let (alice, charlie) = (fixture.alice, fixture.charlie);
        let collateral = fixture.collateral_2_vault;

        // the health restoring repay is 37.5% of the liability
        fixture
            .set_dust_policy(DustPolicy::LiabilityFraction { percent: 50 })
            .unwrap();
        fixture
            .liquidate(&charlie, &alice, &collateral, VIOLATOR_DEBT)
            .expect_revert_with("VaultRepayAssetsExceeded");

        fixture
            .set_dust_policy(DustPolicy::LiabilityFraction { percent: 30 })
            .unwrap();
        fixture
            .liquidate(&charlie, &alice, &collateral, VIOLATOR_DEBT)
            .unwrap();
        fixture.assert_debt_eq(&fixture.liability_vault, &alice, 0);

        fixture
            .set_dust_policy(DustPolicy::LiabilityFraction { percent: 101 })
            .expect_revert_with("VaultAdminInvalidParams");
    }

    #[test]
    fn test_liquidate_same_vault_collateral() {
        let mut fixture = VaultFixture::new().expect("Failed to create vault fixture");
        let (alice, bob, charlie) = (fixture.alice, fixture.bob, fixture.charlie);
        let vault = fixture.liability_vault;

        fixture.set_collateral_factor(&vault, 80).unwrap();
        fixture.fund(&fixture.liability_asset, &bob, 100 * E18).unwrap();
        fixture.deposit(&bob, &vault, 100 * E18).unwrap();

        fixture.fund(&fixture.liability_asset, &alice, 10 * E18).unwrap();
        fixture.deposit(&alice, &vault, 10 * E18).unwrap();
        fixture.enable_collateral(&alice, &vault).unwrap();
        fixture.enable_controller(&alice, &vault).unwrap();
        fixture.borrow(&alice, &vault, 8 * E18).unwrap();
        fixture.setup_liquidator().unwrap();

        // debt grows faster than alice's share of the interest
        fixture.warp_time(time::YEAR);
        assert!(!fixture.account_liquidity(&alice).is_healthy());
        let debt = fixture.debt_of(&alice);

        let shares = fixture.liquidate(&charlie, &alice, &vault, E18).unwrap();

        assert!(shares > 0);
        fixture.assert_shares_eq(&vault, &charlie, shares);
        fixture.assert_shares_eq(&vault, &alice, 10 * E18 - shares);
        fixture.assert_debt_eq(&vault, &alice, debt - E18);
        fixture.assert_debt_eq(&vault, &charlie, E18);
    }

    #[test]
    fn test_same_vault_collateral_must_be_enabled() {
        let fixture = VaultFixture::new().expect("Failed to create vault fixture");
        let (alice, charlie) = (fixture.alice, fixture.charlie);
        let vault = fixture.liability_vault;

        fixture.set_collateral_factor(&vault, 80).unwrap();
        fixture.setup_borrower().unwrap();
        fixture.setup_liquidator().unwrap();
        fixture.borrow(&alice, &vault, 35 * E18).unwrap();

        fixture
            .liquidate(&charlie, &alice, &vault, E18)
            .expect_revert_with("VaultCollateralDisabled");
    }
}
