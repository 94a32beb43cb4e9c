//! Drag gesture state machine
//!
//! A gesture starts on pointer-down over a palette item or a canvas item and
//! ends on release or cancel. Reordering is live: every hover over a new
//! canvas index moves the dragged field immediately, and the tracked index
//! follows it so later hovers are measured from the new position.
//!
//! ```text
//! Idle --begin--> Dragging --drop/cancel--> Idle
//!                    |  ^
//!                    +--+ hover (canvas payload, index changed: move_field)
//! ```

use super::catalog::FieldType;
use super::document::{FieldId, FormDocument};
use super::error::Result;

/// What the pointer is carrying
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DragPayload {
    /// A field type picked up from the palette; only ever inserted
    Palette {
        field_type: FieldType,
        palette_label: String,
    },
    /// A placed field being reordered; `index` is its current position
    Canvas { id: FieldId, index: usize },
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum GestureState {
    #[default]
    Idle,
    Dragging(DragPayload),
}

/// Converts pointer gestures into document operations
#[derive(Debug, Default)]
pub struct DragController {
    state: GestureState,
}

impl DragController {
    pub fn state(&self) -> &GestureState {
        &self.state
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self.state, GestureState::Dragging(_))
    }

    pub fn payload(&self) -> Option<&DragPayload> {
        match &self.state {
            GestureState::Dragging(payload) => Some(payload),
            GestureState::Idle => None,
        }
    }

    /// Start a gesture, replacing any gesture already in progress
    pub fn begin(&mut self, payload: DragPayload) {
        tracing::debug!(?payload, "drag started");
        self.state = GestureState::Dragging(payload);
    }

    /// Pointer is over the canvas item at `hover_index`.
    ///
    /// Returns whether the document was reordered. A failed move ends the
    /// gesture; moves already applied by earlier hovers stay in place.
    pub fn hover(&mut self, document: &mut FormDocument, hover_index: usize) -> Result<bool> {
        let drag_index = match &self.state {
            GestureState::Dragging(DragPayload::Canvas { index, .. }) => *index,
            _ => return Ok(false),
        };

        if drag_index == hover_index {
            return Ok(false);
        }

        if let Err(err) = document.move_field(drag_index, hover_index) {
            tracing::warn!(%err, drag_index, hover_index, "hover reorder failed, ending drag");
            self.state = GestureState::Idle;
            return Err(err);
        }

        if let GestureState::Dragging(DragPayload::Canvas { index, .. }) = &mut self.state {
            *index = hover_index;
        }

        Ok(true)
    }

    /// Pointer released over the canvas.
    ///
    /// A palette payload inserts a new field (at `drop_index` when given,
    /// otherwise at the end) and returns its id. A canvas payload has already
    /// done its work while hovering, so dropping it only ends the gesture.
    pub fn drop_on_canvas(
        &mut self,
        document: &mut FormDocument,
        drop_index: Option<usize>,
    ) -> Result<Option<FieldId>> {
        match std::mem::take(&mut self.state) {
            GestureState::Dragging(DragPayload::Palette {
                field_type,
                palette_label,
            }) => {
                let id = document.insert(field_type, &palette_label, drop_index)?;
                tracing::debug!(%id, "palette drop inserted field");
                Ok(Some(id))
            }
            GestureState::Dragging(DragPayload::Canvas { id, index }) => {
                tracing::debug!(%id, index, "reorder drag finished");
                Ok(None)
            }
            GestureState::Idle => Ok(None),
        }
    }

    /// End the gesture without touching the document
    pub fn cancel(&mut self) {
        if self.is_dragging() {
            tracing::debug!("drag cancelled");
        }
        self.state = GestureState::Idle;
    }
}
