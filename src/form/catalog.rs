//! Field type catalog
//!
//! A static table describing every field type the builder can place: its
//! palette label, the properties a descriptor of that type must carry, and the
//! rule that projects those properties into a preview node.

use super::error::{FormError, Result};
use super::preview::{self, PreviewNode};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

/// Property key present on every field
pub const LABEL_KEY: &str = "label";

/// Property key for the choice list of choice-bearing fields
pub const OPTIONS_KEY: &str = "options";

/// Placeholder prefix for the label of a freshly inserted field
const NEW_LABEL_PREFIX: &str = "新しい";

/// Kind of form control a descriptor represents
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FieldType {
    /// Single-line text input
    TextInput,
    /// Multi-line text input
    TextArea,
    /// Boolean toggle
    Checkbox,
    /// Single-choice group
    RadioGroup,
}

impl FieldType {
    /// Wire tag used in the serialized document
    pub fn tag(&self) -> &'static str {
        match self {
            Self::TextInput => "TEXT_INPUT",
            Self::TextArea => "TEXT_AREA",
            Self::Checkbox => "CHECKBOX",
            Self::RadioGroup => "RADIO_GROUP",
        }
    }

    /// Catalog entry for this type; every variant has one
    pub fn entry(self) -> &'static CatalogEntry {
        let index = match self {
            Self::TextInput => 0,
            Self::TextArea => 1,
            Self::Checkbox => 2,
            Self::RadioGroup => 3,
        };
        &CATALOG[index]
    }
}

impl fmt::Display for FieldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl FromStr for FieldType {
    type Err = FormError;

    fn from_str(tag: &str) -> Result<Self> {
        lookup_tag(tag).map(|entry| entry.field_type)
    }
}

/// A single property value
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PropertyValue {
    Text(String),
    List(Vec<String>),
}

impl PropertyValue {
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            Self::List(_) => None,
        }
    }

    pub fn as_list(&self) -> Option<&[String]> {
        match self {
            Self::List(items) => Some(items),
            Self::Text(_) => None,
        }
    }
}

impl From<&str> for PropertyValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for PropertyValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<Vec<String>> for PropertyValue {
    fn from(value: Vec<String>) -> Self {
        Self::List(value)
    }
}

/// Property map of a field descriptor
pub type Properties = BTreeMap<String, PropertyValue>;

/// Catalog row for one field type
pub struct CatalogEntry {
    pub field_type: FieldType,
    /// Label shown on the palette
    pub palette_label: &'static str,
    /// Helper text shown under the field on the canvas
    pub description: &'static str,
    /// Properties every descriptor of this type must carry
    pub required: &'static [&'static str],
    /// Options seeded into a new field (choice-bearing types only)
    pub default_options: &'static [&'static str],
    /// Preview projection for this type
    pub render: fn(&Properties) -> PreviewNode,
}

impl fmt::Debug for CatalogEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CatalogEntry")
            .field("field_type", &self.field_type)
            .field("palette_label", &self.palette_label)
            .field("required", &self.required)
            .finish_non_exhaustive()
    }
}

static CATALOG: [CatalogEntry; 4] = [
    CatalogEntry {
        field_type: FieldType::TextInput,
        palette_label: "テキスト入力",
        description: "テキスト入力のプレビュー",
        required: &[LABEL_KEY],
        default_options: &[],
        render: preview::render_text_input,
    },
    CatalogEntry {
        field_type: FieldType::TextArea,
        palette_label: "テキストエリア",
        description: "テキストエリアのプレビュー",
        required: &[LABEL_KEY],
        default_options: &[],
        render: preview::render_text_area,
    },
    CatalogEntry {
        field_type: FieldType::Checkbox,
        palette_label: "チェックボックス",
        description: "チェックボックスのプレビュー",
        required: &[LABEL_KEY],
        default_options: &[],
        render: preview::render_checkbox,
    },
    CatalogEntry {
        field_type: FieldType::RadioGroup,
        palette_label: "ラジオボタン",
        description: "ラジオボタンのプレビュー",
        required: &[LABEL_KEY, OPTIONS_KEY],
        default_options: &["選択肢1", "選択肢2"],
        render: preview::render_radio_group,
    },
];

/// All catalog entries in palette order
pub fn entries() -> &'static [CatalogEntry] {
    &CATALOG
}

/// Look up the catalog entry for a field type
pub fn lookup(field_type: FieldType) -> Result<&'static CatalogEntry> {
    Ok(field_type.entry())
}

/// Look up the catalog entry for a wire tag
pub fn lookup_tag(tag: &str) -> Result<&'static CatalogEntry> {
    CATALOG
        .iter()
        .find(|entry| entry.field_type.tag() == tag)
        .ok_or_else(|| FormError::UnknownType(tag.to_string()))
}

/// Build the baseline properties for a newly inserted field
pub fn default_properties(field_type: FieldType, palette_label: &str) -> Result<Properties> {
    let entry = lookup(field_type)?;

    let mut properties = Properties::new();
    properties.insert(
        LABEL_KEY.to_string(),
        PropertyValue::Text(format!("{NEW_LABEL_PREFIX}{palette_label}")),
    );
    if entry.required.contains(&OPTIONS_KEY) {
        properties.insert(
            OPTIONS_KEY.to_string(),
            PropertyValue::List(entry.default_options.iter().map(|o| o.to_string()).collect()),
        );
    }

    Ok(properties)
}

/// Required keys that are absent or have the wrong shape for `field_type`
pub fn missing_properties(
    field_type: FieldType,
    properties: &Properties,
) -> Result<Vec<&'static str>> {
    let entry = lookup(field_type)?;

    let missing = entry
        .required
        .iter()
        .copied()
        .filter(|key| {
            let value = properties.get(*key);
            if *key == OPTIONS_KEY {
                !value
                    .and_then(PropertyValue::as_list)
                    .is_some_and(|options| !options.is_empty())
            } else {
                value.and_then(PropertyValue::as_text).is_none()
            }
        })
        .collect();

    Ok(missing)
}
