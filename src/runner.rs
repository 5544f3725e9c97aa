//! Demo runner: one invocation exercises every demonstration.
//!
//! The delayed demonstrations are spawned as concurrent tasks and the
//! pure ones run while those timers are pending, so completion order
//! follows delay durations rather than invocation order. The 1 s sum
//! finishes before the 2 s lookup even though the lookup starts first.

use serde::Serialize;

use crate::report::Reporter;
use crate::{api, constants, fizzbuzz, loader, math, products, users, words};

/// Run every demonstration. Each call site catches and reports its own
/// failure, so one failing demonstration never aborts the run.
pub async fn run_all(url: Option<&str>, report: &Reporter) {
    let lookup = tokio::spawn(lookup_demo(report.clone()));
    let sum = tokio::spawn(sum_demo(report.clone()));
    let fetch = tokio::spawn(fetch_demo(url.map(str::to_string), report.clone()));
    let load = tokio::spawn(load_demo(report.clone()));
    let product = tokio::spawn(product_demo(report.clone()));

    // Pure demonstrations run while the timers above are pending.
    words_demo(report);
    fizzbuzz_demo(report);
    squares_demo(report);

    let _ = tokio::join!(lookup, sum, fetch, load, product);
}

async fn lookup_demo(report: Reporter) {
    report.section("Delayed user lookup");
    match users::find_user(1).await {
        Ok(user) => report.success(&format!("User found: {user}")),
        Err(err) => report.error(&err.to_string()),
    }
}

async fn sum_demo(report: Reporter) {
    report.section("Delayed sum");
    let total = math::delayed_sum(5.0, 7.0).await;
    report.success(&format!("Sum result: {total}"));
}

async fn fetch_demo(url: Option<String>, report: Reporter) {
    report.section("Remote data fetch");

    let Some(url) = url else {
        report.info("no URL configured, skipping (pass --url to exercise the fetch)");
        return;
    };

    let client = match api::client() {
        Ok(client) => client,
        Err(err) => {
            report.error(&format!("could not build HTTP client: {err}"));
            return;
        }
    };

    // fetch_json reports its own failures before re-raising them.
    if let Ok(data) = api::fetch_json(&client, &url, &report).await {
        report.success(&format!("Fetched data: {data}"));
    }
}

async fn load_demo(report: Reporter) {
    report.section("Load with lifecycle");
    // load_user reports both outcomes itself.
    let _ = loader::load_user(2, &report).await;
}

async fn product_demo(report: Reporter) {
    report.section("Product fetch with validation");
    products::demo(&report).await;
}

fn words_demo(report: &Reporter) {
    report.section("Group words by length");
    let groups = words::group_by_length(constants::SAMPLE_WORDS);
    report.info(&render_json(&groups));
}

fn fizzbuzz_demo(report: &Reporter) {
    report.section("FizzBuzz");
    report.info(&render_json(&fizzbuzz::sequence(15)));
}

fn squares_demo(report: &Reporter) {
    report.section("Sum of squares");
    let total = math::sum_of_squares(constants::SAMPLE_NUMBERS);
    report.success(&format!("Sum of squares: {total}"));
}

fn render_json<T: Serialize>(value: &T) -> String {
    serde_json::to_string(value).unwrap_or_else(|_| "<unserializable>".to_string())
}
