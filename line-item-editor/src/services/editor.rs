//! Line item editor: product selection, pricing and discount reconciliation.
//!
//! One editor serves sale, offer and purchase documents. The transaction
//! direction picks the authoritative catalog price and decides whether a
//! discount edit derives a new unit price.

use rust_decimal::Decimal;
use service_core::error::AppError;
use thiserror::Error;
use tracing::{debug, info, warn};

use super::metrics::{
    DISCOUNTS_APPLIED_TOTAL, EDITOR_SESSIONS_TOTAL, PRICE_OVERRIDES_TOTAL, REJECTED_SAVES_TOTAL,
};
use super::pricing::{clamp_non_negative, clamp_percent, discounted_price, parse_amount};
use super::stock::StockLevel;
use crate::models::{
    Catalog, LineItemDraft, ProductCatalogEntry, TransactionDirection, WarehouseId, WarehouseRef,
};

/// Lifecycle misuse of the editor.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EditorError {
    #[error("line item editor is already open")]
    AlreadyOpen,

    #[error("line item editor is not open")]
    NotOpen,

    #[error("line item {0} does not exist")]
    LineNotFound(usize),
}

impl From<EditorError> for AppError {
    fn from(err: EditorError) -> Self {
        AppError::BadRequest(anyhow::Error::new(err))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditorState {
    Closed,
    Creating,
    Editing,
}

/// Non-fatal notice shown alongside the editor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Advisory {
    /// No warehouse exists; lines can still be committed without one.
    NoWarehouses,
}

#[derive(Debug)]
pub struct LineItemEditor<'a> {
    direction: TransactionDirection,
    catalog: &'a Catalog,
    state: EditorState,
    draft: LineItemDraft,
    warehouses: Vec<WarehouseRef>,
    selected: Option<&'a ProductCatalogEntry>,
}

impl<'a> LineItemEditor<'a> {
    pub fn new(direction: TransactionDirection, catalog: &'a Catalog) -> Self {
        Self {
            direction,
            catalog,
            state: EditorState::Closed,
            draft: LineItemDraft::default(),
            warehouses: Vec::new(),
            selected: None,
        }
    }

    pub fn direction(&self) -> TransactionDirection {
        self.direction
    }

    pub fn state(&self) -> EditorState {
        self.state
    }

    pub fn is_open(&self) -> bool {
        self.state != EditorState::Closed
    }

    /// Current draft, if the editor is open.
    pub fn draft(&self) -> Option<&LineItemDraft> {
        self.is_open().then_some(&self.draft)
    }

    pub fn warehouses(&self) -> &[WarehouseRef] {
        &self.warehouses
    }

    pub fn selected_product(&self) -> Option<&'a ProductCatalogEntry> {
        self.selected
    }

    /// Start editing. `None` creates a fresh line, `Some` edits a copy of a
    /// committed one.
    pub fn open(
        &mut self,
        seed: Option<LineItemDraft>,
        warehouses: Vec<WarehouseRef>,
    ) -> Result<(), EditorError> {
        if self.is_open() {
            warn!(direction = self.direction.as_str(), "Editor open requested while already open");
            return Err(EditorError::AlreadyOpen);
        }

        let first_warehouse = warehouses.first().map(|w| w.id);
        let (state, draft) = match seed {
            None => (
                EditorState::Creating,
                LineItemDraft {
                    warehouse_id: first_warehouse,
                    ..LineItemDraft::default()
                },
            ),
            Some(seed) => (
                EditorState::Editing,
                LineItemDraft {
                    quantity: clamp_non_negative(seed.quantity),
                    unit_price: clamp_non_negative(seed.unit_price),
                    discount_percent: clamp_percent(seed.discount_percent),
                    warehouse_id: seed.warehouse_id.or(first_warehouse),
                    ..seed
                },
            ),
        };

        let catalog = self.catalog;
        self.selected = draft.product_id.and_then(|id| catalog.find(id));
        if draft.product_id.is_some() && self.selected.is_none() {
            debug!(
                product_id = ?draft.product_id,
                "Seeded product is not in the catalog; discounts will not reprice"
            );
        }

        self.state = state;
        self.draft = draft;
        self.warehouses = warehouses;

        debug!(
            direction = self.direction.as_str(),
            state = ?self.state,
            warehouses = self.warehouses.len(),
            "Editor opened"
        );

        Ok(())
    }

    pub fn select_product(
        &mut self,
        product: Option<&'a ProductCatalogEntry>,
    ) -> Result<(), EditorError> {
        self.ensure_open()?;

        match product {
            None => {
                self.selected = None;
                self.draft.product_id = None;
                self.draft.unit_price = Decimal::ZERO;
                self.draft.discount_percent = Decimal::ZERO;
            }
            Some(product) => {
                self.selected = Some(product);
                self.draft.product_id = Some(product.id);
                self.draft.unit_price = product.resolve_base_price(self.direction.price_field());
                self.draft.discount_percent = Decimal::ZERO;
                if self.draft.quantity.is_zero() {
                    self.draft.quantity = Decimal::ONE;
                }
                if self.draft.warehouse_id.is_none() {
                    self.draft.warehouse_id = self.warehouses.first().map(|w| w.id);
                }
            }
        }

        debug!(
            product_id = ?self.draft.product_id,
            unit_price = %self.draft.unit_price,
            "Product selected"
        );

        Ok(())
    }

    pub fn set_quantity(&mut self, value: Decimal) -> Result<(), EditorError> {
        self.ensure_open()?;
        self.draft.quantity = clamp_non_negative(value);
        Ok(())
    }

    pub fn set_quantity_input(&mut self, input: &str) -> Result<(), EditorError> {
        self.set_quantity(parse_amount(input))
    }

    pub fn set_discount_percent(&mut self, value: Decimal) -> Result<(), EditorError> {
        self.ensure_open()?;

        let percent = clamp_percent(value);
        self.draft.discount_percent = percent;

        if let Some(product) = self.selected.filter(|_| self.direction.allows_discount()) {
            let base_price = product.resolve_base_price(self.direction.price_field());
            self.draft.unit_price = discounted_price(base_price, percent);

            DISCOUNTS_APPLIED_TOTAL
                .with_label_values(&[self.direction.as_str()])
                .inc();

            debug!(
                base_price = %base_price,
                discount_percent = %percent,
                unit_price = %self.draft.unit_price,
                "Discount applied"
            );
        }

        Ok(())
    }

    pub fn set_discount_percent_input(&mut self, input: &str) -> Result<(), EditorError> {
        self.set_discount_percent(parse_amount(input))
    }

    /// Manual price entry replaces any discount framing.
    pub fn set_unit_price(&mut self, value: Decimal) -> Result<(), EditorError> {
        self.ensure_open()?;
        self.draft.unit_price = clamp_non_negative(value);
        self.draft.discount_percent = Decimal::ZERO;

        PRICE_OVERRIDES_TOTAL
            .with_label_values(&[self.direction.as_str()])
            .inc();

        Ok(())
    }

    pub fn set_unit_price_input(&mut self, input: &str) -> Result<(), EditorError> {
        self.set_unit_price(parse_amount(input))
    }

    pub fn set_warehouse(&mut self, id: Option<WarehouseId>) -> Result<(), EditorError> {
        self.ensure_open()?;
        self.draft.warehouse_id = id;
        Ok(())
    }

    pub fn set_note(&mut self, note: Option<String>) -> Result<(), EditorError> {
        self.ensure_open()?;
        self.draft.note = note;
        Ok(())
    }

    pub fn line_total(&self) -> Decimal {
        self.draft.line_total()
    }

    pub fn can_save(&self) -> bool {
        self.is_open()
            && self.draft.product_id.is_some()
            && self.draft.quantity > Decimal::ZERO
            && self.draft.unit_price >= Decimal::ZERO
            && self.draft.checked_line_total().is_some()
            && (self.draft.warehouse_id.is_some() || self.warehouses.is_empty())
    }

    /// Commit the draft. Returns `Ok(None)` and stays open when the draft is
    /// incomplete.
    pub fn save(&mut self) -> Result<Option<LineItemDraft>, EditorError> {
        self.ensure_open()?;

        if !self.can_save() {
            REJECTED_SAVES_TOTAL
                .with_label_values(&[self.direction.as_str()])
                .inc();
            debug!(draft = ?self.draft, "Save refused for incomplete draft");
            return Ok(None);
        }

        let draft = std::mem::take(&mut self.draft);
        let item = LineItemDraft {
            quantity: clamp_non_negative(draft.quantity),
            unit_price: clamp_non_negative(draft.unit_price),
            discount_percent: clamp_percent(draft.discount_percent),
            note: draft.note.filter(|n| !n.trim().is_empty()),
            ..draft
        };

        info!(
            direction = self.direction.as_str(),
            product_id = ?item.product_id,
            quantity = %item.quantity,
            unit_price = %item.unit_price,
            line_total = %item.line_total(),
            "Line item saved"
        );

        self.close("saved");
        Ok(Some(item))
    }

    pub fn cancel(&mut self) -> Result<(), EditorError> {
        self.ensure_open()?;
        info!(direction = self.direction.as_str(), "Line item edit cancelled");
        self.close("cancelled");
        Ok(())
    }

    /// Stock for the selected product in the selected warehouse.
    pub fn stock_level(&self) -> Option<StockLevel> {
        let product = self.selected?;
        let warehouse_id = self.draft.warehouse_id?;
        self.is_open()
            .then(|| StockLevel::lookup(product, warehouse_id))
    }

    pub fn advisory(&self) -> Option<Advisory> {
        (self.is_open() && self.warehouses.is_empty()).then_some(Advisory::NoWarehouses)
    }

    fn ensure_open(&self) -> Result<(), EditorError> {
        if self.is_open() {
            Ok(())
        } else {
            warn!(direction = self.direction.as_str(), "Editor operation while closed");
            Err(EditorError::NotOpen)
        }
    }

    fn close(&mut self, outcome: &str) {
        EDITOR_SESSIONS_TOTAL
            .with_label_values(&[self.direction.as_str(), outcome])
            .inc();

        self.state = EditorState::Closed;
        self.draft = LineItemDraft::default();
        self.warehouses.clear();
        self.selected = None;
    }
}
