//! Transaction direction model for line-item-editor.

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Which side of the business a document faces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum TransactionDirection {
    Sale,
    Offer,
    Purchase,
}

impl TransactionDirection {
    pub fn as_str(&self) -> &'static str {
        match self {
            TransactionDirection::Sale => "sale",
            TransactionDirection::Offer => "offer",
            TransactionDirection::Purchase => "purchase",
        }
    }

    /// Catalog price that is authoritative for this direction.
    pub fn price_field(&self) -> PriceField {
        match self {
            TransactionDirection::Sale | TransactionDirection::Offer => PriceField::SalePrice,
            TransactionDirection::Purchase => PriceField::PurchasePrice,
        }
    }

    /// Whether a discount edit recomputes the unit price.
    ///
    /// Supplier purchases keep the percentage as entered but never derive a
    /// price from it.
    pub fn allows_discount(&self) -> bool {
        !matches!(self, TransactionDirection::Purchase)
    }
}

/// Price column of a catalog entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PriceField {
    SalePrice,
    PurchasePrice,
}

impl PriceField {
    pub fn as_str(&self) -> &'static str {
        match self {
            PriceField::SalePrice => "sale_price",
            PriceField::PurchasePrice => "purchase_price",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_direction_parses_only_known_names() {
        for direction in [
            TransactionDirection::Sale,
            TransactionDirection::Offer,
            TransactionDirection::Purchase,
        ] {
            assert_eq!(
                TransactionDirection::from_str(direction.as_str(), false),
                Ok(direction)
            );
        }
        assert!(TransactionDirection::from_str("purchas", false).is_err());
        assert!(TransactionDirection::from_str("unknown", false).is_err());
    }

    #[test]
    fn test_price_field_and_discount_policy() {
        assert_eq!(TransactionDirection::Sale.price_field(), PriceField::SalePrice);
        assert_eq!(TransactionDirection::Offer.price_field(), PriceField::SalePrice);
        assert_eq!(
            TransactionDirection::Purchase.price_field(),
            PriceField::PurchasePrice
        );
        assert!(TransactionDirection::Sale.allows_discount());
        assert!(TransactionDirection::Offer.allows_discount());
        assert!(!TransactionDirection::Purchase.allows_discount());
    }
}
