//! Parent document model for line-item-editor.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::{LineItemDraft, TransactionDirection};

/// Where an editor result lands in the document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EditTarget {
    New,
    Existing(usize),
}

/// Sale, offer or purchase document owning its committed line items.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineItemDocument {
    pub direction: TransactionDirection,
    pub currency: String,
    #[serde(default)]
    lines: Vec<LineItemDraft>,
}

impl LineItemDocument {
    pub fn new(direction: TransactionDirection, currency: impl Into<String>) -> Self {
        Self {
            direction,
            currency: currency.into(),
            lines: Vec::new(),
        }
    }

    pub fn lines(&self) -> &[LineItemDraft] {
        &self.lines
    }

    pub fn line(&self, index: usize) -> Option<&LineItemDraft> {
        self.lines.get(index)
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Replace the line at an existing index, append anything else.
    /// Returns the index the item ended up at.
    pub fn merge(&mut self, target: EditTarget, item: LineItemDraft) -> usize {
        match target {
            EditTarget::Existing(index) if index < self.lines.len() => {
                self.lines[index] = item;
                index
            }
            _ => {
                self.lines.push(item);
                self.lines.len() - 1
            }
        }
    }

    pub fn remove(&mut self, index: usize) -> Option<LineItemDraft> {
        if index < self.lines.len() {
            Some(self.lines.remove(index))
        } else {
            None
        }
    }

    /// Sum of line totals, `None` on overflow.
    pub fn checked_subtotal(&self) -> Option<Decimal> {
        self.lines
            .iter()
            .try_fold(Decimal::ZERO, |acc, line| acc.checked_add(line.checked_line_total()?))
    }

    /// Sum of line totals, saturating at `Decimal::MAX`.
    pub fn subtotal(&self) -> Decimal {
        self.checked_subtotal().unwrap_or(Decimal::MAX)
    }

    pub fn total_quantity(&self) -> Decimal {
        self.lines
            .iter()
            .try_fold(Decimal::ZERO, |acc, line| acc.checked_add(line.quantity))
            .unwrap_or(Decimal::MAX)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn line(quantity: Decimal, unit_price: Decimal) -> LineItemDraft {
        LineItemDraft {
            product_id: Some(1),
            quantity,
            unit_price,
            ..LineItemDraft::default()
        }
    }

    #[test]
    fn test_subtotal_sums_line_totals() {
        let mut document = LineItemDocument::new(TransactionDirection::Sale, "USD");
        document.merge(EditTarget::New, line(dec!(3), dec!(75)));
        document.merge(EditTarget::New, line(dec!(2), dec!(19.99)));

        assert_eq!(document.checked_subtotal(), Some(dec!(264.98)));
        assert_eq!(document.subtotal(), dec!(264.98));
        assert_eq!(document.total_quantity(), dec!(5));
    }

    #[test]
    fn test_subtotal_saturates_on_overflow() {
        let half = Decimal::MAX / dec!(2) + Decimal::ONE;
        let mut document = LineItemDocument::new(TransactionDirection::Sale, "USD");
        document.merge(EditTarget::New, line(half, Decimal::ONE));
        document.merge(EditTarget::New, line(half, Decimal::ONE));

        assert_eq!(document.checked_subtotal(), None);
        assert_eq!(document.subtotal(), Decimal::MAX);
        assert_eq!(document.total_quantity(), Decimal::MAX);
    }
}
