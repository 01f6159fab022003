//! Domain models for line-item-editor.

mod catalog;
mod direction;
mod document;
mod line_item;

pub use catalog::{Catalog, ProductCatalogEntry, ProductId, WarehouseId, WarehouseRef};
pub use direction::{PriceField, TransactionDirection};
pub use document::{EditTarget, LineItemDocument};
pub use line_item::LineItemDraft;
