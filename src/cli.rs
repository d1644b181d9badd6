//! CLI definition, dispatch, and the interactive game loop.

use clap::{Parser, Subcommand};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use crate::adapters::console;
use crate::adapters::file_config_adapter::FileConfigAdapter;
use crate::adapters::name_gen_adapter::RandomNameAdapter;
use crate::domain::company::Company;
use crate::domain::config::GameConfig;
use crate::domain::error::GameError;
use crate::domain::market;
use crate::domain::portfolio::Portfolio;
use crate::domain::ranking::Standings;
use crate::ports::name_port::NamePort;

/// How many headlines the activity feed shows.
const NEWS_FEED_LIMIT: usize = 5;

#[derive(Parser, Debug)]
#[command(name = "profitplay", about = "Terminal investment simulation game")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play the interactive game
    Play {
        #[arg(short, long)]
        config: Option<PathBuf>,
        /// Seed for reproducible runs
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Advance the market a fixed number of ticks and show the outcome
    Simulate {
        #[arg(short, long)]
        config: Option<PathBuf>,
        #[arg(long)]
        seed: Option<u64>,
        #[arg(short, long, default_value_t = 10)]
        ticks: u32,
    },
}

pub fn run(cli: Cli) -> ExitCode {
    let result = match cli.command {
        Command::Play { config, seed } => run_play(config.as_ref(), seed),
        Command::Simulate {
            config,
            seed,
            ticks,
        } => run_simulate(config.as_ref(), seed, ticks),
    };
    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            (&e).into()
        }
    }
}

/// One turn's worth of user intent, parsed from the action prompt.
/// Anything that is not a recognized command advances the market, matching
/// the original "( ) Simulate" behavior.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Invest,
    Withdraw,
    Summary,
    News,
    Quit,
    Tick,
}

impl Action {
    pub fn parse(input: &str) -> Action {
        match input.trim() {
            "1" => Action::Invest,
            "2" => Action::Withdraw,
            "3" => Action::Summary,
            "4" => Action::News,
            "5" => Action::Quit,
            _ => Action::Tick,
        }
    }
}

/// Parse a 1-based menu choice against a list of `len` entries.
pub fn choose_index(input: &str, len: usize) -> Option<usize> {
    let choice: usize = input.trim().parse().ok()?;
    if choice >= 1 && choice <= len {
        Some(choice - 1)
    } else {
        None
    }
}

/// Parse a cash amount; only finite values make sense downstream.
pub fn parse_amount(input: &str) -> Option<f64> {
    input.trim().parse::<f64>().ok().filter(|a| a.is_finite())
}

pub fn load_game_config(path: Option<&PathBuf>) -> Result<GameConfig, GameError> {
    match path {
        Some(path) => {
            let adapter =
                FileConfigAdapter::from_file(path).map_err(|e| GameError::ConfigParse {
                    file: path.display().to_string(),
                    reason: e.to_string(),
                })?;
            GameConfig::from_port(&adapter)
        }
        None => Ok(GameConfig::default()),
    }
}

pub fn build_companies<R: Rng>(
    config: &GameConfig,
    names: &mut dyn NamePort,
    rng: &mut R,
) -> Result<Vec<Company>, GameError> {
    (0..config.num_companies)
        .map(|_| {
            let value = rng.gen_range(config.min_value..=config.max_value);
            let income = rng.gen_range(config.min_income..=config.max_income);
            Company::new(names.next_name(), value, income)
        })
        .collect()
}

fn make_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    }
}

fn run_play(config_path: Option<&PathBuf>, seed: Option<u64>) -> Result<(), GameError> {
    console::print_banner();

    let config = load_game_config(config_path)?;
    let mut rng = make_rng(seed);
    let mut names = RandomNameAdapter::new(StdRng::seed_from_u64(rng.r#gen()));
    let mut companies = build_companies(&config, &mut names, &mut rng)?;
    let mut portfolio = Portfolio::new(config.initial_balance)?;
    let mut standings = Standings::new();

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        let rows = standings.update(&companies);
        console::print_standings(&rows);
        println!("\nYour balance: {}", console::money(portfolio.balance()));

        let Some(input) = prompt(
            &mut lines,
            "Choose an action: (1) Invest, (2) Withdraw, (3) Show Investments, \
             (4) Show Recent Activities, (5) Exit, ( ) Simulate: ",
        )?
        else {
            break;
        };

        match Action::parse(&input) {
            Action::Invest => handle_invest(&mut lines, &rows, &mut portfolio)?,
            Action::Withdraw => handle_withdraw(&mut lines, &mut portfolio)?,
            Action::Summary => console::print_summary(&portfolio.summary()),
            Action::News => {
                console::print_news(&market::recent_news(&companies, NEWS_FEED_LIMIT))
            }
            Action::Quit => {
                println!("See you! o/");
                break;
            }
            Action::Tick => {
                println!("\nSimulating market changes...");
                market::simulate(&mut companies, &mut portfolio, &config.simulation, &mut rng)?;
                println!("\nMarket simulation complete.");
            }
        }
    }

    Ok(())
}

fn run_simulate(
    config_path: Option<&PathBuf>,
    seed: Option<u64>,
    ticks: u32,
) -> Result<(), GameError> {
    let config = load_game_config(config_path)?;
    let mut rng = make_rng(seed);
    let mut names = RandomNameAdapter::new(StdRng::seed_from_u64(rng.r#gen()));
    let mut companies = build_companies(&config, &mut names, &mut rng)?;
    let mut portfolio = Portfolio::new(config.initial_balance)?;
    let mut standings = Standings::new();
    standings.update(&companies);

    for _ in 0..ticks {
        market::simulate(&mut companies, &mut portfolio, &config.simulation, &mut rng)?;
    }

    println!("Simulated {ticks} ticks across {} companies.", companies.len());
    console::print_standings(&standings.update(&companies));
    console::print_news(&market::recent_news(&companies, NEWS_FEED_LIMIT));
    Ok(())
}

type Lines<'a> = io::Lines<io::StdinLock<'a>>;

/// Print a prompt and read one line. `None` means stdin closed, which the
/// game loop treats as quitting.
fn prompt(lines: &mut Lines<'_>, text: &str) -> Result<Option<String>, GameError> {
    print!("{text}");
    io::stdout().flush()?;
    match lines.next() {
        Some(line) => Ok(Some(line?)),
        None => Ok(None),
    }
}

fn handle_invest(
    lines: &mut Lines<'_>,
    rows: &[crate::domain::ranking::StandingRow],
    portfolio: &mut Portfolio,
) -> Result<(), GameError> {
    let Some(input) = prompt(lines, "Choose a company index to invest in: ")? else {
        return Ok(());
    };
    let Some(index) = choose_index(&input, rows.len()) else {
        println!("Please enter a company number between 1 and {}.", rows.len());
        return Ok(());
    };

    let Some(input) = prompt(lines, "Enter the amount to invest: ")? else {
        return Ok(());
    };
    let Some(amount) = parse_amount(&input) else {
        println!("Please enter a valid amount.");
        return Ok(());
    };

    let company = &rows[index].company;
    match portfolio.invest(company, amount) {
        Ok(new_balance) => {
            println!(
                "Successfully invested {} in {}.",
                console::money(amount),
                company
            );
            println!("New balance: {}", console::money(new_balance));
        }
        Err(e) => console::print_trade_error(&e),
    }
    Ok(())
}

fn handle_withdraw(lines: &mut Lines<'_>, portfolio: &mut Portfolio) -> Result<(), GameError> {
    let summary = portfolio.summary();
    console::print_summary(&summary);
    if summary.holdings.is_empty() {
        return Ok(());
    }

    for (idx, holding) in summary.holdings.iter().enumerate() {
        println!("{}. {}", idx + 1, holding.company);
    }

    let Some(input) = prompt(lines, "Choose a company index to withdraw from: ")? else {
        return Ok(());
    };
    let Some(index) = choose_index(&input, summary.holdings.len()) else {
        println!(
            "Please enter a company number between 1 and {}.",
            summary.holdings.len()
        );
        return Ok(());
    };
    let company = summary.holdings[index].company.clone();

    let Some(answer) = prompt(lines, "Withdraw all? (y/n): ")? else {
        return Ok(());
    };
    let requested = if answer.trim().eq_ignore_ascii_case("y") {
        None
    } else {
        let Some(input) = prompt(lines, "Enter the amount to withdraw: ")? else {
            return Ok(());
        };
        match parse_amount(&input) {
            Some(amount) => Some(amount),
            None => {
                println!("Please enter a valid amount.");
                return Ok(());
            }
        }
    };

    match portfolio.withdraw(&company, requested) {
        Ok(withdrawal) => {
            println!(
                "Withdrew {} from {}.",
                console::money(withdrawal.amount),
                company
            );
            println!("New balance: {}", console::money(withdrawal.new_balance));
        }
        Err(e) => console::print_trade_error(&e),
    }
    Ok(())
}
