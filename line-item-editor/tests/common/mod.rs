//! Common test utilities for line-item-editor integration tests.
#![allow(dead_code)]

use line_item_editor::models::{Catalog, ProductCatalogEntry, WarehouseRef};
use std::sync::Once;

static INIT: Once = Once::new();

/// Initialize tracing for tests (only once).
pub fn init_tracing() {
    INIT.call_once(|| {
        tracing_subscriber::fmt()
            .with_env_filter("info,line_item_editor=debug")
            .with_test_writer()
            .try_init()
            .ok();
    });
}

pub const WIDGET_ID: i64 = 1;
pub const GADGET_ID: i64 = 2;
pub const BOLT_ID: i64 = 3;

pub const MAIN_WAREHOUSE: i64 = 1;
pub const OVERFLOW_WAREHOUSE: i64 = 2;

/// Catalog fixture in the shape the products endpoint returns.
pub const CATALOG_JSON: &str = r#"[
    {
        "id": 1,
        "name": "Widget",
        "sku": "WDG-1",
        "sale_price": 100,
        "purchase_price": "60.00",
        "image": "/media/products/widget.png",
        "stock_by_warehouse": { "1": 12, "2": 0 }
    },
    {
        "id": 2,
        "name": "Gadget",
        "sku": "GDG-2",
        "sale_price": "19.99",
        "purchase_price": "",
        "image": null,
        "stock_by_warehouse": { "1": "3" }
    },
    {
        "id": 3,
        "name": "Bolt",
        "sku": null,
        "sale_price": "0.40",
        "purchase_price": 0.25
    }
]"#;

pub const WAREHOUSES_JSON: &str = r#"[
    { "id": 1, "name": "Main" },
    { "id": 2, "name": "Overflow" }
]"#;

pub fn catalog() -> Catalog {
    serde_json::from_str(CATALOG_JSON).expect("catalog fixture")
}

pub fn warehouses() -> Vec<WarehouseRef> {
    serde_json::from_str(WAREHOUSES_JSON).expect("warehouse fixture")
}

pub fn single_warehouse() -> Vec<WarehouseRef> {
    vec![WarehouseRef {
        id: MAIN_WAREHOUSE,
        name: "Main".to_string(),
    }]
}

pub fn product(catalog: &Catalog, id: i64) -> &ProductCatalogEntry {
    catalog.find(id).expect("product fixture")
}
