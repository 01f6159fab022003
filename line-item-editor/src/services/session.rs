//! Pairs an editor with the document it commits into.

use tracing::info;

use super::editor::{EditorError, LineItemEditor};
use crate::models::{Catalog, EditTarget, LineItemDocument, LineItemDraft, WarehouseRef};

#[derive(Debug)]
pub struct EditSession<'a> {
    editor: LineItemEditor<'a>,
    document: LineItemDocument,
    warehouses: Vec<WarehouseRef>,
    target: Option<EditTarget>,
}

impl<'a> EditSession<'a> {
    pub fn new(
        document: LineItemDocument,
        catalog: &'a Catalog,
        warehouses: Vec<WarehouseRef>,
    ) -> Self {
        Self {
            editor: LineItemEditor::new(document.direction, catalog),
            document,
            warehouses,
            target: None,
        }
    }

    pub fn editor(&self) -> &LineItemEditor<'a> {
        &self.editor
    }

    pub fn editor_mut(&mut self) -> &mut LineItemEditor<'a> {
        &mut self.editor
    }

    pub fn document(&self) -> &LineItemDocument {
        &self.document
    }

    pub fn into_document(self) -> LineItemDocument {
        self.document
    }

    pub fn target(&self) -> Option<EditTarget> {
        self.target
    }

    /// Open the editor on a blank line.
    pub fn add(&mut self) -> Result<(), EditorError> {
        self.editor.open(None, self.warehouses.clone())?;
        self.target = Some(EditTarget::New);
        Ok(())
    }

    /// Open the editor on a copy of a committed line.
    pub fn edit(&mut self, index: usize) -> Result<(), EditorError> {
        let seed = self
            .document
            .line(index)
            .cloned()
            .ok_or(EditorError::LineNotFound(index))?;
        self.editor.open(Some(seed), self.warehouses.clone())?;
        self.target = Some(EditTarget::Existing(index));
        Ok(())
    }

    /// Save and merge into the document. Returns the index of the merged
    /// line, or `None` when the draft was incomplete and the editor stays open.
    pub fn save(&mut self) -> Result<Option<usize>, EditorError> {
        let Some(item) = self.editor.save()? else {
            return Ok(None);
        };

        let target = self.target.take().unwrap_or(EditTarget::New);
        let index = self.document.merge(target, item);
        info!(index, lines = self.document.len(), "Line merged into document");
        Ok(Some(index))
    }

    pub fn cancel(&mut self) -> Result<(), EditorError> {
        self.editor.cancel()?;
        self.target = None;
        Ok(())
    }

    /// Remove a committed line. Refused while the editor is open.
    pub fn remove(&mut self, index: usize) -> Result<LineItemDraft, EditorError> {
        if self.editor.is_open() {
            return Err(EditorError::AlreadyOpen);
        }
        self.document
            .remove(index)
            .ok_or(EditorError::LineNotFound(index))
    }
}
