//! Property editor for the selected canvas field

use super::field::{FieldKind, FormField};
use crate::form::{self, FieldDescriptor, FieldId, Properties, PropertyValue};

/// Trait for common form operations
pub trait Form {
    fn field_count(&self) -> usize;
    fn active_field(&self) -> usize;
    fn set_active_field(&mut self, index: usize);
    fn next_field(&mut self) {
        let count = self.field_count();
        let current = self.active_field();
        self.set_active_field((current + 1) % count);
    }
    fn prev_field(&mut self) {
        let count = self.field_count();
        let current = self.active_field();
        if current == 0 {
            self.set_active_field(count - 1);
        } else {
            self.set_active_field(current - 1);
        }
    }
    fn get_active_field_mut(&mut self) -> &mut FormField;
    fn get_field(&self, index: usize) -> Option<&FormField>;
}

/// Edits the label (and options, for choice fields) of one descriptor.
///
/// The editor keeps its own text buffers and, after every keystroke, produces
/// the complete property map to hand to `FormDocument::update_properties`:
/// the field's current properties with the edited keys overwritten.
#[derive(Debug, Clone)]
pub struct PropertyEditor {
    pub field_id: FieldId,
    fields: Vec<FormField>,
    active_field_index: usize,
}

impl PropertyEditor {
    /// Open an editor on `descriptor`
    pub fn open(descriptor: &FieldDescriptor) -> form::Result<Self> {
        let entry = form::lookup(descriptor.field_type)?;

        let mut fields = vec![FormField::text_with_value(
            form::LABEL_KEY,
            "Label",
            descriptor.label(),
        )];
        if entry.required.contains(&form::OPTIONS_KEY) {
            fields.push(FormField::list_with_value(
                form::OPTIONS_KEY,
                "Options (comma separated)",
                descriptor.options(),
            ));
        }

        Ok(Self {
            field_id: descriptor.id,
            fields,
            active_field_index: 0,
        })
    }

    pub fn push_char(&mut self, c: char) {
        self.get_active_field_mut().push_char(c);
    }

    pub fn pop_char(&mut self) {
        self.get_active_field_mut().pop_char();
    }

    /// Full property map for the edited field.
    ///
    /// Only buffers the user has edited are written back; every other key is
    /// copied from `current` unchanged. A list buffer with no items leaves the
    /// current list in place so choice fields never lose their last option.
    pub fn merged_properties(&self, current: &Properties) -> Properties {
        let mut properties = current.clone();

        for field in self.fields.iter().filter(|f| f.is_dirty()) {
            match field.kind {
                FieldKind::Text => {
                    properties.insert(field.key.to_string(), field.as_text().into());
                }
                FieldKind::CommaList => {
                    let items = field.items();
                    if !items.is_empty() {
                        properties.insert(field.key.to_string(), PropertyValue::List(items));
                    }
                }
            }
        }

        properties
    }
}

impl Form for PropertyEditor {
    fn field_count(&self) -> usize {
        self.fields.len()
    }

    fn active_field(&self) -> usize {
        self.active_field_index
    }

    fn set_active_field(&mut self, index: usize) {
        self.active_field_index = index;
    }

    fn get_active_field_mut(&mut self) -> &mut FormField {
        &mut self.fields[self.active_field_index]
    }

    fn get_field(&self, index: usize) -> Option<&FormField> {
        self.fields.get(index)
    }
}
