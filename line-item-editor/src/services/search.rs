//! Product picker search over a loaded catalog.

use rust_decimal::Decimal;
use serde::Serialize;
use service_core::config::AppContext;

use crate::models::{Catalog, PriceField, ProductCatalogEntry, ProductId};

/// Upper bound on picker suggestions.
pub const MAX_SEARCH_RESULTS: usize = 8;

impl Catalog {
    /// Case-insensitive substring match on name or SKU, in catalog order.
    pub fn search(&self, query: &str) -> Vec<&ProductCatalogEntry> {
        let needle = query.trim().to_lowercase();

        self.products()
            .iter()
            .filter(|p| {
                needle.is_empty()
                    || p.name.to_lowercase().contains(&needle)
                    || p
                        .sku
                        .as_deref()
                        .is_some_and(|sku| sku.to_lowercase().contains(&needle))
            })
            .take(MAX_SEARCH_RESULTS)
            .collect()
    }
}

/// Picker row as shown to the user.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SearchHit {
    pub id: ProductId,
    pub name: String,
    pub sku: Option<String>,
    pub price: Decimal,
    pub image_url: Option<String>,
}

impl SearchHit {
    pub fn from_entry(entry: &ProductCatalogEntry, field: PriceField, ctx: &AppContext) -> Self {
        Self {
            id: entry.id,
            name: entry.name.clone(),
            sku: entry.sku.clone(),
            price: entry.resolve_base_price(field),
            image_url: ctx.resolve_image_url(entry.image.as_deref()),
        }
    }
}
