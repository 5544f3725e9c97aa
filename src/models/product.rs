//! Product record type.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A product record synthesized by the catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    /// Requested identifier. Signed so invalid negative ids can be
    /// expressed at the call site and rejected by validation.
    pub id: i64,
    /// Product name.
    pub name: String,
    /// Unit price.
    pub price: f64,
}

impl fmt::Display for Product {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (id {}), price {}", self.name, self.id, self.price)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn display_is_compact() {
        let product = Product {
            id: 101,
            name: "Notebook".to_string(),
            price: 3500.0,
        };
        assert_eq!(product.to_string(), "Notebook (id 101), price 3500");
    }

    #[test]
    fn serde_roundtrip() {
        let product = Product {
            id: 7,
            name: "Notebook".to_string(),
            price: 3500.0,
        };
        let json = serde_json::to_value(&product).unwrap();
        assert_eq!(json["id"], 7);
        assert_eq!(json["name"], "Notebook");
        assert_eq!(json["price"], 3500.0);
    }
}
