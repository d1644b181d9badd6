//! Integration tests across the game core.
//!
//! Tests cover:
//! - Full turn flow: roster construction, invest, ticks, withdraw-all
//! - Accounting invariants under market movement and mixed operations
//! - Config file on disk driving roster size and starting balance
//! - Standings behavior across simulated ticks

use approx::assert_relative_eq;
use proptest::prelude::*;
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::io::Write;

use profitplay::adapters::file_config_adapter::FileConfigAdapter;
use profitplay::adapters::name_gen_adapter::RandomNameAdapter;
use profitplay::cli::build_companies;
use profitplay::domain::company::Company;
use profitplay::domain::config::GameConfig;
use profitplay::domain::market::{self, SimulationParams};
use profitplay::domain::portfolio::Portfolio;
use profitplay::domain::ranking::Standings;

fn small_market() -> Vec<Company> {
    vec![
        Company::new("Acme Holdings", 5_000_000.0, 1_000_000.0).unwrap(),
        Company::new("Zephyr Industrial", 2_000_000.0, 800_000.0).unwrap(),
        Company::new("Keystone Labs", 8_000_000.0, 1_500_000.0).unwrap(),
    ]
}

/// Sum of unrealized profit/loss across open positions.
fn unrealized(portfolio: &Portfolio) -> f64 {
    portfolio
        .investments()
        .values()
        .map(|p| p.profit_loss)
        .sum()
}

mod full_turn_flow {
    use super::*;

    #[test]
    fn invest_tick_withdraw_all_settles_the_books() {
        let mut companies = small_market();
        let mut portfolio = Portfolio::new(100_000.0).unwrap();
        let mut rng = StdRng::seed_from_u64(2024);
        let params = SimulationParams::default();

        portfolio.invest("Acme Holdings", 40_000.0).unwrap();
        for _ in 0..5 {
            market::simulate(&mut companies, &mut portfolio, &params, &mut rng).unwrap();
        }

        let pnl = portfolio.position("Acme Holdings").unwrap().profit_loss;
        let current = 40_000.0 + pnl;
        // Five ticks at most +/-20% of principal each keeps the position
        // above water for any draw.
        assert!(current > 0.0);

        let withdrawal = portfolio.withdraw("Acme Holdings", None).unwrap();
        assert!(withdrawal.closed);
        assert_relative_eq!(withdrawal.amount, current, max_relative = 1e-12);
        assert_relative_eq!(
            portfolio.balance(),
            100_000.0 + pnl,
            max_relative = 1e-12
        );
        assert_relative_eq!(portfolio.total_invested(), 0.0, epsilon = 1e-9);
        assert_relative_eq!(portfolio.total_profit_loss(), pnl, max_relative = 1e-12);
        assert!(portfolio.investments().is_empty());
    }

    #[test]
    fn ticks_move_no_cash() {
        let mut companies = small_market();
        let mut portfolio = Portfolio::new(100_000.0).unwrap();
        portfolio.invest("Acme Holdings", 10_000.0).unwrap();
        portfolio.invest("Keystone Labs", 25_000.0).unwrap();
        let balance = portfolio.balance();
        let invested = portfolio.total_invested();
        let mut rng = StdRng::seed_from_u64(77);

        for _ in 0..20 {
            market::simulate(
                &mut companies,
                &mut portfolio,
                &SimulationParams::default(),
                &mut rng,
            )
            .unwrap();
        }

        // Only withdrawals touch cash or realized profit/loss.
        assert_relative_eq!(portfolio.balance(), balance);
        assert_relative_eq!(portfolio.total_invested(), invested);
        assert_relative_eq!(portfolio.total_profit_loss(), 0.0);
    }

    #[test]
    fn roster_built_from_config_and_names() {
        let config = GameConfig::default();
        let mut rng = StdRng::seed_from_u64(1);
        let mut names = RandomNameAdapter::new(StdRng::seed_from_u64(2));

        let companies = build_companies(&config, &mut names, &mut rng).unwrap();
        assert_eq!(companies.len(), 20);

        let mut seen: Vec<&str> = companies.iter().map(|c| c.name()).collect();
        seen.sort();
        seen.dedup();
        assert_eq!(seen.len(), 20, "company names must be unique");
        for company in &companies {
            assert!((config.min_value..=config.max_value).contains(&company.value()));
            assert!((config.min_income..=config.max_income).contains(&company.income()));
        }
    }
}

mod accounting_invariants {
    use super::*;

    #[test]
    fn total_invested_matches_open_principal_through_mixed_operations() {
        let mut companies = small_market();
        let mut portfolio = Portfolio::new(100_000.0).unwrap();
        let mut rng = StdRng::seed_from_u64(404);
        let params = SimulationParams::default();

        portfolio.invest("Acme Holdings", 15_000.0).unwrap();
        portfolio.invest("Zephyr Industrial", 5_000.0).unwrap();
        market::simulate(&mut companies, &mut portfolio, &params, &mut rng).unwrap();
        portfolio.invest("Acme Holdings", 5_000.0).unwrap();
        market::simulate(&mut companies, &mut portfolio, &params, &mut rng).unwrap();
        let _ = portfolio.withdraw("Zephyr Industrial", Some(1_000.0));
        market::simulate(&mut companies, &mut portfolio, &params, &mut rng).unwrap();

        let principal: f64 = portfolio.investments().values().map(|p| p.amount).sum();
        assert_relative_eq!(portfolio.total_invested(), principal, max_relative = 1e-9);
    }

    #[test]
    fn wealth_changes_only_by_market_accrual() {
        let mut companies = small_market();
        let mut portfolio = Portfolio::new(100_000.0).unwrap();
        let mut rng = StdRng::seed_from_u64(9000);
        let params = SimulationParams::default();

        portfolio.invest("Keystone Labs", 30_000.0).unwrap();

        let mut accrued = 0.0;
        for _ in 0..10 {
            let events =
                market::simulate(&mut companies, &mut portfolio, &params, &mut rng).unwrap();
            let rate = events
                .iter()
                .find(|e| e.company == "Keystone Labs")
                .unwrap()
                .growth_rate;
            accrued += 30_000.0 * rate;
        }
        let _ = portfolio.withdraw("Keystone Labs", Some(10_000.0));

        let wealth = portfolio.balance()
            + portfolio.total_invested()
            + unrealized(&portfolio)
            + portfolio.total_profit_loss();
        assert_relative_eq!(wealth, 100_000.0 + accrued, max_relative = 1e-9);
    }

    proptest! {
        #[test]
        fn invest_withdraw_all_round_trips(amount in 0.01f64..100_000.0) {
            let mut portfolio = Portfolio::new(100_000.0).unwrap();
            portfolio.invest("Acme Holdings", amount).unwrap();
            let withdrawal = portfolio.withdraw("Acme Holdings", None).unwrap();

            prop_assert!(withdrawal.closed);
            prop_assert!((withdrawal.amount - amount).abs() < 1e-9);
            prop_assert!((portfolio.balance() - 100_000.0).abs() < 1e-9);
            prop_assert!(portfolio.total_invested().abs() < 1e-9);
            prop_assert!(portfolio.total_profit_loss().abs() < 1e-9);
        }

        #[test]
        fn partial_withdrawal_preserves_the_profit_mix(
            principal in 100.0f64..50_000.0,
            pnl_fraction in -0.5f64..2.0,
            withdraw_fraction in 0.05f64..0.95,
        ) {
            let mut portfolio = Portfolio::new(100_000.0).unwrap();
            portfolio.invest("Acme Holdings", principal).unwrap();
            let pnl = principal * pnl_fraction;
            portfolio.position_mut("Acme Holdings").unwrap().profit_loss = pnl;

            let current = principal + pnl;
            prop_assume!(current > 1.0);
            let requested = current * withdraw_fraction;

            let before_ratio = pnl / principal;
            portfolio.withdraw("Acme Holdings", Some(requested)).unwrap();

            let pos = portfolio.position("Acme Holdings").unwrap();
            // Proportional scale-down keeps profit-to-principal constant.
            prop_assert!((pos.profit_loss / pos.amount - before_ratio).abs() < 1e-9);
            prop_assert!(
                (pos.current_value() - (current - requested)).abs() < 1e-6
            );
        }
    }
}

mod config_driven_game {
    use super::*;

    #[test]
    fn ini_file_drives_roster_and_balance() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            "[game]\nnum_companies = 4\ninitial_balance = 2500\n\
             min_value = 1000\nmax_value = 2000\nmin_income = 100\nmax_income = 200\n\n\
             [simulation]\nnews_probability = 1.0\n"
        )
        .unwrap();

        let adapter = FileConfigAdapter::from_file(file.path()).unwrap();
        let config = GameConfig::from_port(&adapter).unwrap();
        assert_eq!(config.num_companies, 4);

        let mut rng = StdRng::seed_from_u64(5);
        let mut names = RandomNameAdapter::new(StdRng::seed_from_u64(6));
        let mut companies = build_companies(&config, &mut names, &mut rng).unwrap();
        let mut portfolio = Portfolio::new(config.initial_balance).unwrap();
        assert!((portfolio.balance() - 2_500.0).abs() < f64::EPSILON);

        market::simulate(&mut companies, &mut portfolio, &config.simulation, &mut rng).unwrap();
        // news_probability = 1.0 guarantees a headline everywhere.
        assert!(companies.iter().all(|c| c.news().len() == 1));
    }
}

mod standings_over_ticks {
    use super::*;

    #[test]
    fn standings_stay_consistent_across_ticks() {
        let mut companies = small_market();
        let mut portfolio = Portfolio::new(100_000.0).unwrap();
        let mut rng = StdRng::seed_from_u64(31);
        let mut standings = Standings::new();
        let params = SimulationParams::default();

        let first = standings.update(&companies);
        assert_eq!(first.len(), 3);
        assert_eq!(first[0].company, "Keystone Labs");

        for _ in 0..10 {
            market::simulate(&mut companies, &mut portfolio, &params, &mut rng).unwrap();
            let rows = standings.update(&companies);
            assert_eq!(rows.len(), 3);
            for window in rows.windows(2) {
                assert!(window[0].value >= window[1].value);
            }
            let ranks: Vec<usize> = rows.iter().map(|r| r.rank).collect();
            assert_eq!(ranks, vec![1, 2, 3]);
        }
    }
}
