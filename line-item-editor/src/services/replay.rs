//! Scripted editor sessions: load fixtures, replay user actions, summarise.

use std::path::Path;

use rust_decimal::Decimal;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use service_core::error::AppError;
use tracing::{debug, instrument};

use super::format::format_amount;
use super::pricing::parse_amount;
use super::session::EditSession;
use crate::models::{
    Catalog, LineItemDocument, LineItemDraft, ProductId, TransactionDirection, WarehouseId,
    WarehouseRef,
};

/// Number as typed by a user: JSON number or free text.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum NumericInput {
    Number(Decimal),
    Text(String),
}

impl NumericInput {
    pub fn to_decimal(&self) -> Decimal {
        match self {
            NumericInput::Number(n) => *n,
            NumericInput::Text(s) => parse_amount(s),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum Action {
    Add,
    Edit { index: usize },
    SelectProduct { product_id: Option<ProductId> },
    SetQuantity { value: NumericInput },
    SetDiscountPercent { value: NumericInput },
    SetUnitPrice { value: NumericInput },
    SetWarehouse { warehouse_id: Option<WarehouseId> },
    SetNote { note: Option<String> },
    Save,
    Cancel,
    Remove { index: usize },
}

impl Action {
    pub fn name(&self) -> &'static str {
        match self {
            Action::Add => "add",
            Action::Edit { .. } => "edit",
            Action::SelectProduct { .. } => "select_product",
            Action::SetQuantity { .. } => "set_quantity",
            Action::SetDiscountPercent { .. } => "set_discount_percent",
            Action::SetUnitPrice { .. } => "set_unit_price",
            Action::SetWarehouse { .. } => "set_warehouse",
            Action::SetNote { .. } => "set_note",
            Action::Save => "save",
            Action::Cancel => "cancel",
            Action::Remove { .. } => "remove",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Script {
    pub direction: TransactionDirection,
    #[serde(default)]
    pub currency: Option<String>,
    #[serde(default)]
    pub actions: Vec<Action>,
}

/// Editor state after one replayed action.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StepRecord {
    pub step: usize,
    pub action: &'static str,
    pub draft: Option<LineItemDraft>,
    pub line_total: Option<Decimal>,
    pub can_save: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LineSummary {
    #[serde(flatten)]
    pub item: LineItemDraft,
    pub line_total: Decimal,
}

/// Document as printed by the command line.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DocumentSummary {
    pub direction: TransactionDirection,
    pub currency: String,
    pub lines: Vec<LineSummary>,
    pub total_quantity: Decimal,
    pub subtotal: Decimal,
    pub subtotal_display: String,
}

impl From<&LineItemDocument> for DocumentSummary {
    fn from(document: &LineItemDocument) -> Self {
        let subtotal = document.subtotal();
        Self {
            direction: document.direction,
            currency: document.currency.clone(),
            lines: document
                .lines()
                .iter()
                .map(|item| LineSummary {
                    item: item.clone(),
                    line_total: item.line_total(),
                })
                .collect(),
            total_quantity: document.total_quantity(),
            subtotal,
            subtotal_display: format_amount(subtotal, &document.currency),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ReplayOutcome {
    pub document: LineItemDocument,
    pub steps: Vec<StepRecord>,
}

/// Run `script` against a fresh document. Stops at the first failing action.
#[instrument(skip_all, fields(direction = script.direction.as_str(), actions = script.actions.len()))]
pub fn replay(
    script: &Script,
    catalog: &Catalog,
    warehouses: &[WarehouseRef],
    default_currency: &str,
) -> Result<ReplayOutcome, AppError> {
    let currency = script
        .currency
        .clone()
        .unwrap_or_else(|| default_currency.to_string());
    let document = LineItemDocument::new(script.direction, currency.trim().to_uppercase());
    let mut session = EditSession::new(document, catalog, warehouses.to_vec());
    let mut steps = Vec::with_capacity(script.actions.len());

    for (step, action) in script.actions.iter().enumerate() {
        debug!(step, action = action.name(), "Replaying action");
        apply(&mut session, catalog, action)
            .and_then(|()| ensure_representable(&session))
            .map_err(|e| match e {
                AppError::BadRequest(err) => AppError::BadRequest(anyhow::anyhow!(
                    "step {} ({}): {:#}",
                    step,
                    action.name(),
                    err
                )),
                AppError::NotFound(err) => AppError::NotFound(anyhow::anyhow!(
                    "step {} ({}): {:#}",
                    step,
                    action.name(),
                    err
                )),
                other => other,
            })?;

        let editor = session.editor();
        steps.push(StepRecord {
            step,
            action: action.name(),
            draft: editor.draft().cloned(),
            line_total: editor.draft().and_then(LineItemDraft::checked_line_total),
            can_save: editor.can_save(),
        });
    }

    Ok(ReplayOutcome {
        document: session.into_document(),
        steps,
    })
}

fn apply<'a>(
    session: &mut EditSession<'a>,
    catalog: &'a Catalog,
    action: &Action,
) -> Result<(), AppError> {
    match action {
        Action::Add => session.add()?,
        Action::Edit { index } => session.edit(*index)?,
        Action::SelectProduct { product_id } => {
            let product = match product_id {
                Some(id) => Some(catalog.find(*id).ok_or_else(|| {
                    AppError::NotFound(anyhow::anyhow!("product {} is not in the catalog", id))
                })?),
                None => None,
            };
            session.editor_mut().select_product(product)?;
        }
        Action::SetQuantity { value } => session.editor_mut().set_quantity(value.to_decimal())?,
        Action::SetDiscountPercent { value } => session
            .editor_mut()
            .set_discount_percent(value.to_decimal())?,
        Action::SetUnitPrice { value } => {
            session.editor_mut().set_unit_price(value.to_decimal())?
        }
        Action::SetWarehouse { warehouse_id } => {
            session.editor_mut().set_warehouse(*warehouse_id)?
        }
        Action::SetNote { note } => session.editor_mut().set_note(note.clone())?,
        Action::Save => {
            if session.save()?.is_none() {
                debug!("Save skipped, draft incomplete");
            }
        }
        Action::Cancel => session.cancel()?,
        Action::Remove { index } => {
            session.remove(*index)?;
        }
    }
    Ok(())
}

/// Reject states whose totals no longer fit in a `Decimal`.
fn ensure_representable(session: &EditSession<'_>) -> Result<(), AppError> {
    if let Some(draft) = session.editor().draft() {
        if draft.checked_line_total().is_none() {
            return Err(AppError::BadRequest(anyhow::anyhow!(
                "line total overflows: quantity {} at unit price {}",
                draft.quantity,
                draft.unit_price
            )));
        }
    }
    if session.document().checked_subtotal().is_none() {
        return Err(AppError::BadRequest(anyhow::anyhow!(
            "document subtotal overflows"
        )));
    }
    Ok(())
}

pub fn load_json<T: DeserializeOwned>(path: &Path) -> Result<T, AppError> {
    let raw = std::fs::read_to_string(path).map_err(|e| {
        AppError::NotFound(anyhow::anyhow!("cannot read {}: {}", path.display(), e))
    })?;
    serde_json::from_str(&raw).map_err(|e| {
        AppError::BadRequest(anyhow::anyhow!("invalid JSON in {}: {}", path.display(), e))
    })
}

pub fn load_catalog(path: &Path) -> Result<Catalog, AppError> {
    load_json(path)
}

pub fn load_warehouses(path: &Path) -> Result<Vec<WarehouseRef>, AppError> {
    load_json(path)
}

pub fn load_script(path: &Path) -> Result<Script, AppError> {
    load_json(path)
}
