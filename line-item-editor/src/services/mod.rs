//! Services module for line-item-editor.

pub mod editor;
pub mod format;
pub mod metrics;
pub mod pricing;
pub mod replay;
pub mod search;
pub mod session;
pub mod stock;

pub use editor::{Advisory, EditorError, EditorState, LineItemEditor};
pub use format::format_amount;
pub use metrics::{get_metrics, init_metrics};
pub use replay::{replay, Action, DocumentSummary, ReplayOutcome, Script};
pub use search::{SearchHit, MAX_SEARCH_RESULTS};
pub use session::EditSession;
pub use stock::StockLevel;
