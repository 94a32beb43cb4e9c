//! Editable property fields

/// How the text buffer maps onto a property value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// Stored as a single string
    Text,
    /// Stored as a list, edited as comma-separated text
    CommaList,
}

/// One editable property of the selected field
#[derive(Debug, Clone)]
pub struct FormField {
    /// Property key this field writes to
    pub key: &'static str,
    /// Title shown on the field border
    pub label: &'static str,
    pub kind: FieldKind,
    value: String,
    /// Set once the buffer has been edited
    dirty: bool,
}

impl FormField {
    /// Create a new single-string field with initial value
    pub fn text_with_value(key: &'static str, label: &'static str, value: &str) -> Self {
        Self {
            key,
            label,
            kind: FieldKind::Text,
            value: value.to_string(),
            dirty: false,
        }
    }

    /// Create a new list field, joining the items with ", "
    pub fn list_with_value(key: &'static str, label: &'static str, items: &[String]) -> Self {
        Self {
            key,
            label,
            kind: FieldKind::CommaList,
            value: items.join(", "),
            dirty: false,
        }
    }

    pub fn as_text(&self) -> &str {
        &self.value
    }

    /// Whether the user has changed the buffer since it was opened
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Items of a list field: split on commas, trimmed, blanks dropped
    pub fn items(&self) -> Vec<String> {
        self.value
            .split(',')
            .map(str::trim)
            .filter(|item| !item.is_empty())
            .map(str::to_string)
            .collect()
    }

    /// Push a character to the field value
    pub fn push_char(&mut self, c: char) {
        self.value.push(c);
        self.dirty = true;
    }

    /// Remove the last character from the field value
    pub fn pop_char(&mut self) {
        self.value.pop();
        self.dirty = true;
    }

    /// Clear the field value
    pub fn clear(&mut self) {
        self.value.clear();
        self.dirty = true;
    }
}
