//! Document editing session tests for line-item-editor.

mod common;

use common::{catalog, init_tracing, product, warehouses, GADGET_ID, WIDGET_ID};
use line_item_editor::models::{EditTarget, LineItemDocument, TransactionDirection};
use line_item_editor::services::{get_metrics, init_metrics, EditSession, EditorError};
use rust_decimal_macros::dec;

fn sale_document() -> LineItemDocument {
    LineItemDocument::new(TransactionDirection::Sale, "USD")
}

#[test]
fn add_and_save_appends_line() {
    init_tracing();
    let catalog = catalog();
    let mut session = EditSession::new(sale_document(), &catalog, warehouses());

    session.add().unwrap();
    assert_eq!(session.target(), Some(EditTarget::New));
    session
        .editor_mut()
        .select_product(Some(product(&catalog, WIDGET_ID)))
        .unwrap();
    session.editor_mut().set_quantity(dec!(2)).unwrap();

    assert_eq!(session.save().unwrap(), Some(0));
    assert_eq!(session.target(), None);

    session.add().unwrap();
    session
        .editor_mut()
        .select_product(Some(product(&catalog, GADGET_ID)))
        .unwrap();
    assert_eq!(session.save().unwrap(), Some(1));

    let document = session.document();
    assert_eq!(document.len(), 2);
    assert_eq!(document.subtotal(), dec!(219.99));
    assert_eq!(document.total_quantity(), dec!(3));
}

#[test]
fn edit_replaces_line_in_place() {
    let catalog = catalog();
    let mut session = EditSession::new(sale_document(), &catalog, warehouses());
    for id in [WIDGET_ID, GADGET_ID] {
        session.add().unwrap();
        session
            .editor_mut()
            .select_product(Some(product(&catalog, id)))
            .unwrap();
        session.save().unwrap();
    }

    session.edit(0).unwrap();
    assert_eq!(session.target(), Some(EditTarget::Existing(0)));
    assert_eq!(
        session.editor().draft().unwrap().product_id,
        Some(WIDGET_ID)
    );
    session
        .editor_mut()
        .set_discount_percent(dec!(25))
        .unwrap();
    assert_eq!(session.save().unwrap(), Some(0));

    let document = session.document();
    assert_eq!(document.len(), 2);
    assert_eq!(document.line(0).unwrap().unit_price, dec!(75));
    assert_eq!(document.line(0).unwrap().discount_percent, dec!(25));
    assert_eq!(document.line(1).unwrap().product_id, Some(GADGET_ID));
}

#[test]
fn cancel_leaves_document_untouched() {
    let catalog = catalog();
    let mut session = EditSession::new(sale_document(), &catalog, warehouses());
    session.add().unwrap();
    session
        .editor_mut()
        .select_product(Some(product(&catalog, WIDGET_ID)))
        .unwrap();
    session.save().unwrap();

    session.edit(0).unwrap();
    session.editor_mut().set_unit_price(dec!(1)).unwrap();
    session.cancel().unwrap();

    assert_eq!(session.document().line(0).unwrap().unit_price, dec!(100));
    assert_eq!(session.target(), None);
    assert!(!session.editor().is_open());
}

#[test]
fn incomplete_save_keeps_editor_open() {
    let catalog = catalog();
    let mut session = EditSession::new(sale_document(), &catalog, warehouses());
    session.add().unwrap();

    assert_eq!(session.save().unwrap(), None);
    assert!(session.editor().is_open());
    assert_eq!(session.target(), Some(EditTarget::New));
    assert!(session.document().is_empty());
}

#[test]
fn lifecycle_misuse_is_rejected() {
    let catalog = catalog();
    let mut session = EditSession::new(sale_document(), &catalog, warehouses());

    assert_eq!(session.edit(0), Err(EditorError::LineNotFound(0)));
    assert_eq!(session.remove(0), Err(EditorError::LineNotFound(0)));
    assert_eq!(session.save(), Err(EditorError::NotOpen));

    session.add().unwrap();
    assert_eq!(session.add(), Err(EditorError::AlreadyOpen));
    assert_eq!(session.remove(0), Err(EditorError::AlreadyOpen));
}

#[test]
fn remove_deletes_committed_line() {
    let catalog = catalog();
    let mut session = EditSession::new(sale_document(), &catalog, warehouses());
    for id in [WIDGET_ID, GADGET_ID] {
        session.add().unwrap();
        session
            .editor_mut()
            .select_product(Some(product(&catalog, id)))
            .unwrap();
        session.save().unwrap();
    }

    let removed = session.remove(0).unwrap();
    assert_eq!(removed.product_id, Some(WIDGET_ID));

    let document = session.into_document();
    assert_eq!(document.len(), 1);
    assert_eq!(document.line(0).unwrap().product_id, Some(GADGET_ID));
}

#[test]
fn merge_out_of_range_appends() {
    let catalog = catalog();
    let mut document = sale_document();
    let mut session = EditSession::new(sale_document(), &catalog, warehouses());
    session.add().unwrap();
    session
        .editor_mut()
        .select_product(Some(product(&catalog, WIDGET_ID)))
        .unwrap();
    let item = session.editor_mut().save().unwrap().unwrap();

    assert_eq!(document.merge(EditTarget::Existing(5), item.clone()), 0);
    assert_eq!(document.merge(EditTarget::New, item.clone()), 1);
    assert_eq!(document.merge(EditTarget::Existing(0), item), 0);
    assert_eq!(document.len(), 2);
}

#[test]
fn saved_sessions_are_counted() {
    init_metrics();
    let catalog = catalog();
    let mut session = EditSession::new(
        LineItemDocument::new(TransactionDirection::Offer, "EUR"),
        &catalog,
        warehouses(),
    );
    session.add().unwrap();
    session
        .editor_mut()
        .select_product(Some(product(&catalog, WIDGET_ID)))
        .unwrap();
    session.save().unwrap();

    let metrics = get_metrics();
    assert!(metrics.contains("line_item_editor_sessions_total"));
    assert!(metrics.contains("direction=\"offer\""));
}
