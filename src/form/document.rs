//! Form document: the ordered collection of placed fields

use super::catalog::{self, FieldType, Properties};
use super::error::{FormError, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;
use uuid::Uuid;

/// Unique identifier of a placed field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FieldId(Uuid);

impl FieldId {
    fn generate() -> Self {
        Self(Uuid::new_v4())
    }
}

impl fmt::Display for FieldId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// One placed field
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FieldDescriptor {
    pub id: FieldId,
    #[serde(rename = "type")]
    pub field_type: FieldType,
    pub properties: Properties,
}

impl FieldDescriptor {
    /// Text value of the `label` property, empty if absent
    pub fn label(&self) -> &str {
        self.properties
            .get(catalog::LABEL_KEY)
            .and_then(|v| v.as_text())
            .unwrap_or_default()
    }

    /// Choice list of the `options` property, empty if absent
    pub fn options(&self) -> &[String] {
        self.properties
            .get(catalog::OPTIONS_KEY)
            .and_then(|v| v.as_list())
            .unwrap_or_default()
    }
}

/// Serialized record as read back from JSON, before validation
#[derive(Deserialize)]
struct RawDescriptor {
    id: FieldId,
    #[serde(rename = "type")]
    field_type: String,
    properties: Properties,
}

/// Ordered, id-unique collection of field descriptors.
///
/// Order is display and serialization order. Descriptors are only created by
/// [`FormDocument::insert`] (or by loading a serialized document), so every
/// descriptor starts out with the properties its type requires. Later
/// [`FormDocument::update_properties`] calls replace the map wholesale and
/// are trusted to keep those keys.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct FormDocument {
    fields: Vec<FieldDescriptor>,
}

impl FormDocument {
    /// Insert a new field with default properties.
    ///
    /// Appends when `at_index` is `None`; otherwise inserts at `at_index`
    /// clamped to the current length.
    pub fn insert(
        &mut self,
        field_type: FieldType,
        palette_label: &str,
        at_index: Option<usize>,
    ) -> Result<FieldId> {
        let properties = catalog::default_properties(field_type, palette_label)?;

        let mut id = FieldId::generate();
        while self.index_of(id).is_some() {
            id = FieldId::generate();
        }

        let index = at_index.map_or(self.fields.len(), |i| i.min(self.fields.len()));
        self.fields.insert(
            index,
            FieldDescriptor {
                id,
                field_type,
                properties,
            },
        );

        tracing::debug!(%id, %field_type, index, "inserted field");
        Ok(id)
    }

    /// Move the field at `from` to `to`, shifting everything in between by one.
    pub fn move_field(&mut self, from: usize, to: usize) -> Result<()> {
        let len = self.fields.len();
        for index in [from, to] {
            if index >= len {
                return Err(FormError::IndexOutOfRange { index, len });
            }
        }

        if from == to {
            return Ok(());
        }

        let field = self.fields.remove(from);
        self.fields.insert(to, field);

        tracing::debug!(from, to, "moved field");
        Ok(())
    }

    /// Replace the whole property map of the field with `id`.
    ///
    /// Callers merge unchanged keys themselves; required keys are not
    /// re-checked here.
    pub fn update_properties(&mut self, id: FieldId, properties: Properties) -> Result<()> {
        let field = self
            .fields
            .iter_mut()
            .find(|f| f.id == id)
            .ok_or(FormError::UnknownId(id))?;

        field.properties = properties;

        tracing::debug!(%id, "updated field properties");
        Ok(())
    }

    /// Current fields in order
    pub fn snapshot(&self) -> &[FieldDescriptor] {
        &self.fields
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn get(&self, id: FieldId) -> Option<&FieldDescriptor> {
        self.fields.iter().find(|f| f.id == id)
    }

    pub fn index_of(&self, id: FieldId) -> Option<usize> {
        self.fields.iter().position(|f| f.id == id)
    }

    /// Serialize to the canonical pretty-printed JSON form
    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Load a document from its canonical JSON form, preserving ids and order
    pub fn from_json(json: &str) -> Result<Self> {
        let raw: Vec<RawDescriptor> = serde_json::from_str(json)?;

        let mut seen = HashSet::with_capacity(raw.len());
        let mut fields = Vec::with_capacity(raw.len());

        for record in raw {
            let field_type = catalog::lookup_tag(&record.field_type)?.field_type;

            if !seen.insert(record.id) {
                return Err(FormError::DuplicateId(record.id));
            }

            if let Some(key) = catalog::missing_properties(field_type, &record.properties)?
                .into_iter()
                .next()
            {
                return Err(FormError::MissingProperty { id: record.id, key });
            }

            fields.push(FieldDescriptor {
                id: record.id,
                field_type,
                properties: record.properties,
            });
        }

        Ok(Self { fields })
    }
}
