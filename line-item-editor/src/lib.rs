//! Line Item Editor - pricing and discount reconciliation for document lines.

pub mod config;
pub mod models;
pub mod services;
