//! Form document domain layer
//!
//! This module holds everything the builder needs that is independent of the
//! terminal:
//! - `catalog`: field types, their defaults and preview rules
//! - `document`: the ordered, id-keyed collection of placed fields
//! - `drag`: the drag gesture state machine that turns pointer events into
//!   document operations
//! - `preview`: pure projection of a document snapshot into preview nodes

mod catalog;
mod document;
mod drag;
mod error;
mod preview;

pub use catalog::{
    entries, lookup, FieldType, PropertyValue, Properties, LABEL_KEY, OPTIONS_KEY,
};
pub use document::{FieldDescriptor, FieldId, FormDocument};
pub use drag::{DragController, DragPayload, GestureState};
pub use error::{FormError, Result};
pub use preview::{canvas_summary, render, PreviewNode};
