//! Informational stock display for the selected product and warehouse.

use std::fmt;

use rust_decimal::Decimal;
use serde::Serialize;

use crate::models::{ProductCatalogEntry, WarehouseId};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "status", content = "quantity", rename_all = "snake_case")]
pub enum StockLevel {
    InStock(Decimal),
    OutOfStock(Decimal),
    NoData,
}

impl StockLevel {
    pub fn lookup(product: &ProductCatalogEntry, warehouse_id: WarehouseId) -> Self {
        match product.stock_in(warehouse_id) {
            Some(quantity) if quantity > Decimal::ZERO => StockLevel::InStock(quantity),
            Some(quantity) => StockLevel::OutOfStock(quantity),
            None => StockLevel::NoData,
        }
    }

    pub fn is_out_of_stock(&self) -> bool {
        matches!(self, StockLevel::OutOfStock(_))
    }
}

impl fmt::Display for StockLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StockLevel::InStock(q) => write!(f, "{} in stock", q.normalize()),
            StockLevel::OutOfStock(q) => write!(f, "out of stock ({})", q.normalize()),
            StockLevel::NoData => f.write_str("no data"),
        }
    }
}
