//! Product catalog fetch with input validation.
//!
//! Simulates an API that rejects bad input: after the fixed latency an
//! id below 1 fails, anything else yields the synthesized catalog
//! record.

use thiserror::Error;
use tokio::time::sleep;

use crate::constants::{PRODUCT_DELAY, PRODUCT_NAME, PRODUCT_PRICE};
use crate::models::Product;
use crate::report::Reporter;

/// Errors from the product fetch.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ProductError {
    #[error("invalid product id: {0}")]
    InvalidId(i64),
}

/// Fetch a product by id after the simulated latency.
///
/// Ids below 1 fail with [`ProductError::InvalidId`].
pub async fn fetch_product(id: i64) -> Result<Product, ProductError> {
    sleep(PRODUCT_DELAY).await;

    if id < 1 {
        return Err(ProductError::InvalidId(id));
    }

    Ok(Product {
        id,
        name: PRODUCT_NAME.to_string(),
        price: PRODUCT_PRICE,
    })
}

/// Exercise the fetch twice, once with a valid id and once with an
/// invalid one. Each outcome is inspected and logged on its own; a
/// failure in one call never unwinds past its own `match`.
pub async fn demo(report: &Reporter) {
    for id in [101, -1] {
        match fetch_product(id).await {
            Ok(product) => report.success(&format!("Product received: {product}")),
            Err(err) => report.error(&err.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[tokio::test(start_paused = true)]
    async fn valid_id_yields_the_catalog_record() {
        let product = fetch_product(101).await.unwrap();
        assert_eq!(
            product,
            Product {
                id: 101,
                name: "Notebook".to_string(),
                price: 3500.0,
            },
        );
    }

    #[tokio::test(start_paused = true)]
    async fn ids_below_one_are_rejected() {
        assert_eq!(fetch_product(0).await, Err(ProductError::InvalidId(0)));
        assert_eq!(fetch_product(-1).await, Err(ProductError::InvalidId(-1)));
    }

    #[tokio::test(start_paused = true)]
    async fn demo_reports_both_outcomes_independently() {
        let report = Reporter::capture();
        demo(&report).await;

        let lines = report.lines();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].contains("Notebook (id 101)"));
        assert!(lines[1].contains("invalid product id: -1"));
    }
}
