//! Product catalog and warehouse models for line-item-editor.

use std::collections::BTreeMap;
use std::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize};

use super::PriceField;

pub type ProductId = i64;
pub type WarehouseId = i64;

/// Read-only product entry as served by the catalog API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductCatalogEntry {
    pub id: ProductId,
    pub name: String,
    #[serde(default)]
    pub sku: Option<String>,
    #[serde(default, deserialize_with = "optional_price")]
    pub sale_price: Option<Decimal>,
    #[serde(default, deserialize_with = "optional_price")]
    pub purchase_price: Option<Decimal>,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub stock_by_warehouse: BTreeMap<WarehouseId, Decimal>,
}

impl ProductCatalogEntry {
    pub fn price(&self, field: PriceField) -> Option<Decimal> {
        match field {
            PriceField::SalePrice => self.sale_price,
            PriceField::PurchasePrice => self.purchase_price,
        }
    }

    /// Base price for `field`, falling back to the sale price and then zero.
    pub fn resolve_base_price(&self, field: PriceField) -> Decimal {
        self.price(field)
            .or(self.sale_price)
            .unwrap_or(Decimal::ZERO)
    }

    pub fn stock_in(&self, warehouse_id: WarehouseId) -> Option<Decimal> {
        self.stock_by_warehouse.get(&warehouse_id).copied()
    }
}

/// Read-only warehouse reference.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WarehouseRef {
    pub id: WarehouseId,
    pub name: String,
}

/// Fully loaded, ordered product catalog.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Catalog {
    products: Vec<ProductCatalogEntry>,
}

impl Catalog {
    pub fn new(products: Vec<ProductCatalogEntry>) -> Self {
        Self { products }
    }

    pub fn products(&self) -> &[ProductCatalogEntry] {
        &self.products
    }

    pub fn find(&self, id: ProductId) -> Option<&ProductCatalogEntry> {
        self.products.iter().find(|p| p.id == id)
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawPrice {
    Amount(Decimal),
    Text(String),
}

/// Prices arrive as numbers, numeric strings, empty strings or null.
/// Anything that is not a usable number counts as absent.
fn optional_price<'de, D>(deserializer: D) -> Result<Option<Decimal>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<RawPrice>::deserialize(deserializer)?;
    Ok(match raw {
        Some(RawPrice::Amount(amount)) => Some(amount),
        Some(RawPrice::Text(text)) => {
            let text = text.trim();
            if text.is_empty() {
                None
            } else {
                Decimal::from_str(text).ok()
            }
        }
        None => None,
    })
}
