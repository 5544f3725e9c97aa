//! Integration test driving the full demo runner.
//!
//! Uses a capturing reporter and a paused clock, so the simulated
//! delays cost no wall-clock time.

use pretty_assertions::assert_eq;

use asynclab::report::Reporter;
use asynclab::runner;

#[tokio::test(start_paused = true)]
async fn run_all_reports_every_demonstration() {
    let report = Reporter::capture();
    runner::run_all(None, &report).await;

    let lines = report.lines();
    let joined = lines.join("\n");

    for section in [
        "--- Delayed user lookup ---",
        "--- Delayed sum ---",
        "--- Remote data fetch ---",
        "--- Load with lifecycle ---",
        "--- Product fetch with validation ---",
        "--- Group words by length ---",
        "--- FizzBuzz ---",
        "--- Sum of squares ---",
    ] {
        assert!(joined.contains(section), "missing section: {section}");
    }

    // Delayed lookup resolves user 1 to the exact record.
    assert!(joined.contains("User found: João <joao@email.com> (id 1)"));

    // Delayed sum of the fixed inputs.
    assert!(joined.contains("Sum result: 12"));

    // The fetch demonstration is skipped without a URL.
    assert!(joined.contains("skipping"));

    // Lifecycle completion fires exactly once.
    assert_eq!(
        lines
            .iter()
            .filter(|line| line.contains("Data load finished"))
            .count(),
        1,
    );

    // Product fetch: one success, one independent failure.
    assert!(joined.contains("Product received: Notebook (id 101), price 3500"));
    assert!(joined.contains("invalid product id: -1"));

    // Pure demonstrations print their full results.
    assert!(joined.contains(r#"{"5":["apple","grape"],"6":["banana"],"4":["pear","kiwi"]}"#));
    assert!(joined.contains(
        r#"[1,2,"Fizz",4,"Buzz","Fizz",7,8,"Fizz","Buzz",11,"Fizz",13,14,"FizzBuzz"]"#
    ));
    assert!(joined.contains("Sum of squares: 30"));
}

#[tokio::test(start_paused = true)]
async fn shorter_delay_completes_first() {
    let report = Reporter::capture();
    runner::run_all(None, &report).await;

    let lines = report.lines();
    let sum_at = lines
        .iter()
        .position(|line| line.contains("Sum result"))
        .expect("sum completion line");
    let lookup_at = lines
        .iter()
        .position(|line| line.contains("User found"))
        .expect("lookup completion line");

    // The lookup is started first but its delay is longer, so the sum
    // completes first.
    assert!(sum_at < lookup_at);
}

#[tokio::test(start_paused = true)]
async fn pure_results_arrive_before_delayed_completions() {
    let report = Reporter::capture();
    runner::run_all(None, &report).await;

    let lines = report.lines();
    let squares_at = lines
        .iter()
        .position(|line| line.contains("Sum of squares"))
        .expect("squares line");
    let lookup_at = lines
        .iter()
        .position(|line| line.contains("User found"))
        .expect("lookup completion line");

    // Pure demonstrations run while the delay timers are still pending.
    assert!(squares_at < lookup_at);
}
