//! Terminal rendering: standings table, investment summary, news feed.

use crossterm::style::Stylize;

use crate::domain::company::IncomeDirection;
use crate::domain::error::TradeError;
use crate::domain::portfolio::PortfolioSummary;
use crate::domain::ranking::{RankDelta, StandingRow};

pub fn arrow(delta: RankDelta) -> &'static str {
    match delta {
        RankDelta::Up => "↑",
        RankDelta::Down => "↓",
        RankDelta::Flat => "―",
        RankDelta::New => " ",
    }
}

pub fn money(value: f64) -> String {
    format!("${value:.2}")
}

pub fn print_banner() {
    let text = "Welcome to ProfitPlay";
    println!("     {}", "╔══════════════════════════════╗".cyan().bold());
    println!(
        "     {}{}{}",
        "║ ".cyan().bold(),
        format!("{text:<29}").green().bold(),
        "║".cyan().bold()
    );
    println!("     {}", "╚══════════════════════════════╝".cyan().bold());
    println!("     {}", "Let's start investing wisely!".yellow().bold());
}

pub fn print_standings(rows: &[StandingRow]) {
    println!(
        "\n{}",
        "Companies sorted by value (highest to lowest):".yellow()
    );
    for row in rows {
        let income = money(row.income);
        let income = match row.income_direction {
            IncomeDirection::Up => income.green(),
            IncomeDirection::Down => income.red(),
            IncomeDirection::Flat => income.stylize(),
        };
        println!(
            "{}. {} - Value: {} - Income: {} {}",
            row.rank,
            row.company,
            money(row.value),
            income,
            arrow(row.delta)
        );
    }
}

pub fn print_summary(summary: &PortfolioSummary) {
    if summary.holdings.is_empty() {
        println!("{}", "You have no current investments.".yellow());
        return;
    }
    println!("{}", "Your current investments:".bold());
    for holding in &summary.holdings {
        let pnl = money(holding.profit_loss);
        let pnl = if holding.profit_loss >= 0.0 {
            pnl.green()
        } else {
            pnl.red()
        };
        println!(
            "{}: Invested: {}, Current Value: {}, Profit/Loss: {}",
            holding.company,
            money(holding.invested),
            money(holding.current_value),
            pnl
        );
    }
    println!(
        "Total value of your investments: {}",
        money(summary.total_value)
    );
    let realized = money(summary.total_realized_profit_loss);
    let realized = if summary.total_realized_profit_loss >= 0.0 {
        realized.green()
    } else {
        realized.red()
    };
    println!("Total profit/loss: {realized}");
}

pub fn print_news(feed: &[String]) {
    println!("\n{}", "Recent Company Activities:".cyan());
    if feed.is_empty() {
        println!("No recent activities available.");
        return;
    }
    for headline in feed {
        println!("- {headline}");
    }
}

pub fn print_trade_error(err: &TradeError) {
    println!("{}", err.to_string().red());
}
