//! asynclab — asynchronous patterns demo CLI.
//!
//! Entry point and error handling boundary. Uses `anyhow` for
//! ergonomic error propagation and user-facing messages.

mod cli;

use std::process;

use anyhow::{Context, Result};
use clap::Parser;

use asynclab::report::Reporter;
use asynclab::{api, constants, fizzbuzz, loader, math, products, runner, users, words};

use cli::args::{Cli, Command, RunArgs};

#[tokio::main]
async fn main() {
    if let Err(err) = run().await {
        eprintln!("Error: {err:#}");
        process::exit(1);
    }
}

async fn run() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Command::Run(args) => run_demos(args).await,
        Command::Lookup { id } => run_lookup(id).await,
        Command::Sum { a, b } => run_sum(a, b).await,
        Command::Fetch { url } => run_fetch(url).await,
        Command::Load { id } => run_load(id).await,
        Command::Product { id } => run_product(id).await,
        Command::Words { words } => run_words(words),
        Command::Fizzbuzz { n } => run_fizzbuzz(n),
        Command::Squares { nums } => run_squares(nums),
        Command::Version => run_version(),
    }
}

/// Print version information.
fn run_version() -> Result<()> {
    use colored::Colorize;

    println!(
        "{} {}",
        constants::APP_NAME.bold(),
        env!("CARGO_PKG_VERSION").green().bold(),
    );
    Ok(())
}

/// Run every demonstration against the fixed sample data.
async fn run_demos(args: RunArgs) -> Result<()> {
    cli::print_banner();
    let report = Reporter::stdout();
    runner::run_all(args.url.as_deref(), &report).await;
    Ok(())
}

async fn run_lookup(id: u32) -> Result<()> {
    let report = Reporter::stdout();
    let user = users::find_user(id).await.context("lookup failed")?;
    report.success(&format!("User found: {user}"));
    Ok(())
}

async fn run_sum(a: f64, b: f64) -> Result<()> {
    let report = Reporter::stdout();
    let total = math::delayed_sum(a, b).await;
    report.success(&format!("Sum result: {total}"));
    Ok(())
}

async fn run_fetch(url: String) -> Result<()> {
    let report = Reporter::stdout();
    let client = api::client().context("failed to build HTTP client")?;
    let data = api::fetch_json(&client, &url, &report)
        .await
        .context("fetch failed")?;
    println!("{}", serde_json::to_string_pretty(&data)?);
    Ok(())
}

async fn run_load(id: u32) -> Result<()> {
    let report = Reporter::stdout();
    loader::load_user(id, &report).await.context("load failed")?;
    Ok(())
}

async fn run_product(id: i64) -> Result<()> {
    let report = Reporter::stdout();
    let product = products::fetch_product(id)
        .await
        .context("product fetch failed")?;
    report.success(&format!("Product received: {product}"));
    Ok(())
}

fn run_words(words: Vec<String>) -> Result<()> {
    let input = if words.is_empty() {
        constants::SAMPLE_WORDS
            .iter()
            .map(|w| (*w).to_string())
            .collect()
    } else {
        words
    };

    let groups = words::group_by_length(&input);
    println!("{}", serde_json::to_string_pretty(&groups)?);
    Ok(())
}

fn run_fizzbuzz(n: u32) -> Result<()> {
    println!("{}", serde_json::to_string(&fizzbuzz::sequence(n))?);
    Ok(())
}

fn run_squares(nums: Vec<f64>) -> Result<()> {
    let input = if nums.is_empty() {
        constants::SAMPLE_NUMBERS.to_vec()
    } else {
        nums
    };

    println!("Sum of squares: {}", math::sum_of_squares(&input));
    Ok(())
}
