//! Regular borrowable vault tests: oracle valued health, interest accrual and
//! rate updates at the end of every batch.

#[cfg(test)]
mod tests {
    use std::rc::Rc;

    use crate::vaults::fixture::{VaultFixture, E16, E18, E6, ONE_YEAR_INTEREST_ON_35};
    use interest_rate_model::{FixedRateModel, InterestRateModel, KinkRateModel, RateDataV1Params};
    use vault_test_framework::prelude::*;
    use vaults::{
        constants::{MAX_INTEREST_RATE, ONE},
        module::{admin, view},
    };

    /// Accumulator after one year at 10%, in ray
    const ONE_YEAR_ACCUMULATOR: u128 = 1_105_170_917_900_423_925_599_112_509;

    fn setup_borrower_fixture(yearly_rate: u128) -> VaultFixture {
        let fixture = VaultFixture::with_rate(yearly_rate).expect("Failed to create vault fixture");
        fixture.setup_borrower().expect("Failed to setup borrower");
        fixture
    }

    fn interest_rate(fixture: &VaultFixture) -> u128 {
        fixture.view(&fixture.liability_vault, view::interest_rate)
    }

    #[test]
    fn test_borrow_at_collateral_limit() {
        let fixture = setup_borrower_fixture(1_000);
        let (alice, vault) = (fixture.alice, fixture.liability_vault);

        fixture
            .borrow(&alice, &vault, 35 * E18 + E16)
            .expect_revert_with("VaultAccountUnhealthy");
        fixture.assert_token_balance_eq(&alice, &fixture.liability_asset, 0);

        fixture.borrow(&alice, &vault, 35 * E18).unwrap();

        let liquidity = fixture.account_liquidity(&alice);
        assert_eq!(liquidity.liability_assets, 35 * E18);
        assert_eq!(liquidity.liability_value, 350 * E16);
        assert_eq!(liquidity.collateral_value, 350 * E16);
        assert!(liquidity.is_healthy());
        fixture.assert_token_balance_eq(&alice, &fixture.liability_asset, 35 * E18);

        fixture
            .borrow(&alice, &vault, E16)
            .expect_revert_with("VaultAccountUnhealthy");
    }

    #[test]
    fn test_zero_factor_collateral_is_ignored() {
        let fixture = setup_borrower_fixture(1_000);
        let (alice, vault) = (fixture.alice, fixture.liability_vault);

        fixture
            .set_collateral_factor(&fixture.collateral_2_vault, 0)
            .unwrap();

        // collateral 2 is still enabled but no longer counts
        assert_eq!(fixture.account_liquidity(&alice).collateral_value, E18);
        fixture.borrow(&alice, &vault, 10 * E18).unwrap();
        fixture
            .borrow(&alice, &vault, E16)
            .expect_revert_with("VaultAccountUnhealthy");
    }

    #[test]
    fn test_disabling_backing_collateral_fails() {
        let fixture = setup_borrower_fixture(1_000);
        let (alice, vault) = (fixture.alice, fixture.liability_vault);
        fixture.borrow(&alice, &vault, 30 * E18).unwrap();

        fixture
            .disable_collateral(&alice, &fixture.collateral_2_vault)
            .expect_revert_with("VaultAccountUnhealthy");
        // 40 of collateral 2 still back the 30 borrowed, one unit less does not
        fixture
            .withdraw(&alice, &fixture.collateral_2_vault, 10 * E6)
            .unwrap();
        fixture
            .withdraw(&alice, &fixture.collateral_2_vault, 1)
            .expect_revert_with("VaultAccountUnhealthy");
    }

    #[test]
    fn test_interest_accrues_over_a_year() {
        let mut fixture = setup_borrower_fixture(1_000);
        let (alice, vault) = (fixture.alice, fixture.liability_vault);
        fixture.borrow(&alice, &vault, 35 * E18).unwrap();

        assert_eq!(interest_rate(&fixture), 3_170_979_198_376_458_650);

        fixture.warp_time(time::YEAR);

        let debt = 35 * E18 + ONE_YEAR_INTEREST_ON_35;
        fixture.assert_debt_eq(&vault, &alice, debt);
        assert_eq!(fixture.interest_accumulator(), ONE_YEAR_ACCUMULATOR);
        assert_eq!(fixture.total_borrowed(&vault), debt);
        // lenders earn what borrowers owe
        assert_eq!(fixture.total_assets(&vault), 65 * E18 + debt);
        assert!(!fixture.account_liquidity(&alice).is_healthy());
    }

    #[test]
    fn test_partial_repay_leaves_account_unhealthy() {
        let mut fixture = setup_borrower_fixture(1_000);
        let (alice, vault) = (fixture.alice, fixture.liability_vault);
        fixture.borrow(&alice, &vault, 35 * E18).unwrap();
        fixture.warp_time(time::YEAR);

        // repaying is never blocked by the repayer's own health
        fixture
            .repay(&alice, &vault, 2_680_982_126_514_837_395, &alice)
            .unwrap();

        fixture.assert_debt_eq(&vault, &alice, 36 * E18);
        let liquidity = fixture.account_liquidity(&alice);
        assert_eq!(liquidity.liability_value, 360 * E16);
        assert!(!liquidity.is_healthy());

        fixture
            .borrow(&alice, &vault, 1)
            .expect_revert_with("VaultAccountUnhealthy");
    }

    #[test]
    fn test_debts_track_total_borrowed_across_accumulators() {
        // every accrual and every account touch floors by less than a wei
        const ROUNDING: u128 = 16;

        let mut fixture = setup_borrower_fixture(1_000);
        fixture.setup_liquidator().expect("Failed to setup liquidator");
        let (alice, charlie, vault) = (fixture.alice, fixture.charlie, fixture.liability_vault);

        fixture.borrow(&alice, &vault, 10 * E18).unwrap();
        fixture.warp_days(30);
        fixture.borrow(&charlie, &vault, 7 * E18 + 123).unwrap();
        fixture.warp_hours(17);
        fixture.borrow(&alice, &vault, 3 * E18).unwrap();
        fixture.warp_days(100);
        fixture.repay(&charlie, &vault, 2 * E18, &charlie).unwrap();
        fixture.warp_days(200);
        fixture.pull_debt(&charlie, &vault, &alice, E18).unwrap();
        fixture.warp_time(time::YEAR);

        let alice_debt = fixture.debt_of(&alice);
        let charlie_debt = fixture.debt_of(&charlie);
        assert!(alice_debt > 12 * E18);
        assert!(charlie_debt > 6 * E18);
        fixture.assert_approx_eq(
            alice_debt + charlie_debt,
            fixture.total_borrowed(&vault),
            ROUNDING,
        );

        // repaying every account in full leaves at most the rounding behind
        fixture.fund(&fixture.liability_asset, &alice, 10 * E18).unwrap();
        fixture.fund(&fixture.liability_asset, &charlie, 10 * E18).unwrap();
        fixture.repay(&alice, &vault, alice_debt, &alice).unwrap();
        fixture.repay(&charlie, &vault, charlie_debt, &charlie).unwrap();

        fixture.assert_debt_eq(&vault, &alice, 0);
        fixture.assert_debt_eq(&vault, &charlie, 0);
        assert_approx_eq(fixture.total_borrowed(&vault), 0, ROUNDING);
    }

    #[test]
    fn test_accrual_is_idempotent_within_a_timestamp() {
        let mut fixture = setup_borrower_fixture(1_000);
        let (alice, bob, vault) = (fixture.alice, fixture.bob, fixture.liability_vault);
        fixture.borrow(&alice, &vault, 35 * E18).unwrap();
        fixture.warp_time(time::DAY);

        let debt = fixture.debt_of(&alice);
        let accumulator = fixture.interest_accumulator();

        // two batches at the same timestamp commit interest once
        fixture.fund(&fixture.liability_asset, &bob, 2 * E18).unwrap();
        fixture.deposit(&bob, &vault, E18).unwrap();
        fixture.deposit(&bob, &vault, E18).unwrap();

        assert_eq!(fixture.debt_of(&alice), debt);
        assert_eq!(fixture.interest_accumulator(), accumulator);
    }

    #[test]
    fn test_accumulator_never_decreases() {
        let mut fixture = setup_borrower_fixture(1_000);
        let (alice, vault) = (fixture.alice, fixture.liability_vault);
        fixture.borrow(&alice, &vault, 10 * E18).unwrap();

        let mut last = fixture.interest_accumulator();
        assert_eq!(last, ONE);

        for step in [time::SECOND, time::HOUR, time::DAY, time::WEEK] {
            fixture.warp_time(step);
            fixture.repay(&alice, &vault, E16, &alice).unwrap();

            let accumulator = fixture.interest_accumulator();
            assert!(accumulator > last, "accumulator went from {} to {}", last, accumulator);
            last = accumulator;
        }
    }

    #[test]
    fn test_zero_rate_accrues_nothing() {
        let mut fixture = setup_borrower_fixture(0);
        let (alice, vault) = (fixture.alice, fixture.liability_vault);
        fixture.borrow(&alice, &vault, 35 * E18).unwrap();

        fixture.warp_time(time::YEAR);

        fixture.assert_debt_eq(&vault, &alice, 35 * E18);
        assert_eq!(fixture.interest_accumulator(), ONE);
    }

    #[test]
    fn test_rate_is_capped() {
        let fixture = setup_borrower_fixture(100_000);

        assert_eq!(interest_rate(&fixture), MAX_INTEREST_RATE);
    }

    #[test]
    fn test_rate_follows_utilization() {
        let fixture = setup_borrower_fixture(1_000);
        let (alice, bob, vault) = (fixture.alice, fixture.bob, fixture.liability_vault);

        let model = KinkRateModel::v1(RateDataV1Params {
            kink: 8_000,
            rate_at_utilization_zero: 0,
            rate_at_utilization_kink: 1_000,
            rate_at_utilization_max: 10_000,
        })
        .unwrap();
        let ctx = fixture.context(&vault).unwrap();
        admin::set_interest_rate_model(&ctx, &fixture.admin, Rc::new(model)).unwrap();
        assert_eq!(interest_rate(&fixture), 0);

        fixture.borrow(&alice, &vault, 35 * E18).unwrap();
        assert_eq!(interest_rate(&fixture), model.compute_rate(3_500).unwrap());

        fixture.fund(&fixture.liability_asset, &bob, 100 * E18).unwrap();
        fixture.deposit(&bob, &vault, 100 * E18).unwrap();
        assert_eq!(interest_rate(&fixture), model.compute_rate(1_750).unwrap());
    }

    #[test]
    fn test_rate_model_swap_settles_old_rate() {
        let mut fixture = setup_borrower_fixture(1_000);
        let (alice, vault) = (fixture.alice, fixture.liability_vault);
        fixture.borrow(&alice, &vault, 35 * E18).unwrap();

        fixture.warp_time(time::YEAR / 2);
        let debt = fixture.debt_of(&alice);
        assert!(debt > 35 * E18);

        {
            let ctx = fixture.context(&vault).unwrap();
            admin::set_interest_rate_model(&ctx, &fixture.admin, Rc::new(FixedRateModel::new(0)))
                .unwrap();
        }

        fixture.warp_time(time::YEAR / 2);
        fixture.assert_debt_eq(&vault, &alice, debt);

        let ctx = fixture.context(&vault).unwrap();
        admin::set_interest_rate_model(&ctx, &alice, Rc::new(FixedRateModel::new(0)))
            .expect_revert_with("VaultAdminOnlyOwner");
    }

    #[test]
    fn test_borrow_cap() {
        let fixture = setup_borrower_fixture(1_000);
        let (alice, vault) = (fixture.alice, fixture.liability_vault);

        fixture.set_borrow_cap(&vault, 30 * E18).unwrap();

        fixture
            .borrow(&alice, &vault, 35 * E18)
            .expect_revert_with("VaultBorrowCapExceeded");
        fixture.borrow(&alice, &vault, 30 * E18).unwrap();
        assert_eq!(fixture.total_borrowed(&vault), 30 * E18);
    }

    #[test]
    fn test_collateral_factor_bounds() {
        let fixture = setup_borrower_fixture(1_000);

        fixture
            .set_collateral_factor(&fixture.collateral_1_vault, 101)
            .expect_revert_with("VaultAdminInvalidCollateralFactor");
        fixture
            .set_collateral_factor(&fixture.collateral_1_vault, 60)
            .unwrap();

        let factor = fixture.view(&fixture.liability_vault, |ctx| {
            view::collateral_factor(ctx, &fixture.collateral_1_vault)
        });
        assert_eq!(factor, 60);
    }
}
