//! Line item draft model for line-item-editor.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::{ProductId, WarehouseId};

/// Editable line item, either in progress or committed to a document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineItemDraft {
    #[serde(default)]
    pub product_id: Option<ProductId>,
    #[serde(default = "default_quantity")]
    pub quantity: Decimal,
    #[serde(default)]
    pub unit_price: Decimal,
    #[serde(default)]
    pub warehouse_id: Option<WarehouseId>,
    #[serde(default)]
    pub discount_percent: Decimal,
    #[serde(default)]
    pub note: Option<String>,
}

fn default_quantity() -> Decimal {
    Decimal::ONE
}

impl Default for LineItemDraft {
    fn default() -> Self {
        Self {
            product_id: None,
            quantity: default_quantity(),
            unit_price: Decimal::ZERO,
            warehouse_id: None,
            discount_percent: Decimal::ZERO,
            note: None,
        }
    }
}

impl LineItemDraft {
    /// Quantity times unit price, `None` when the product does not fit in a
    /// `Decimal`.
    pub fn checked_line_total(&self) -> Option<Decimal> {
        self.quantity.checked_mul(self.unit_price)
    }

    /// Quantity times unit price. Never stored on the draft.
    ///
    /// Saturates at `Decimal::MAX` (or `MIN` for a negative product) instead
    /// of overflowing.
    pub fn line_total(&self) -> Decimal {
        self.checked_line_total().unwrap_or_else(|| {
            if self.quantity.is_sign_negative() != self.unit_price.is_sign_negative() {
                Decimal::MIN
            } else {
                Decimal::MAX
            }
        })
    }
}
