//! App-wide constants.
//!
//! Centralises the tool name, the simulated delays, and the fixed sample
//! datasets so every demonstration reads from a single source of truth.

use std::time::Duration;

/// Display name of the tool (lowercase).
pub const APP_NAME: &str = "asynclab";

// ── Simulated delays ────────────────────────────────────────────────

/// Latency of the user directory lookup.
pub const USER_LOOKUP_DELAY: Duration = Duration::from_secs(2);

/// Latency of the delayed sum. Shorter than the lookup, so the sum
/// completes first when both run concurrently.
pub const SUM_DELAY: Duration = Duration::from_secs(1);

/// Latency of the product fetch.
pub const PRODUCT_DELAY: Duration = Duration::from_secs(2);

/// Maximum time we'll wait for the remote fetch before giving up.
pub const FETCH_TIMEOUT: Duration = Duration::from_secs(10);

// ── Fixed sample data ───────────────────────────────────────────────

/// Name of the one product the catalog knows about.
pub const PRODUCT_NAME: &str = "Notebook";

/// Its price.
pub const PRODUCT_PRICE: f64 = 3500.0;

/// Default input for the word-grouping demonstration.
pub const SAMPLE_WORDS: &[&str] = &["apple", "banana", "pear", "kiwi", "grape"];

/// Default input for the sum-of-squares demonstration.
pub const SAMPLE_NUMBERS: &[f64] = &[1.0, 2.0, 3.0, 4.0];
