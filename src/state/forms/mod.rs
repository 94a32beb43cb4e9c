//! Property editing layer
//!
//! Text buffers and focus handling for editing the properties of the
//! selected canvas field.

mod field;
mod property_editor;

pub use field::FormField;
pub use property_editor::{Form, PropertyEditor};
