use clap::Parser;
use profitplay::cli::{Cli, run};

fn main() -> std::process::ExitCode {
    run(Cli::parse())
}
