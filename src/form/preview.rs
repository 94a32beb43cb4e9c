//! Preview projection of a form document
//!
//! Turns a document snapshot into a sequence of [`PreviewNode`]s, one per
//! field, by dispatching to each field type's catalog render rule. The
//! terminal layer draws these nodes; nothing here knows about ratatui.

use super::catalog::{FieldType, Properties, PropertyValue, LABEL_KEY, OPTIONS_KEY};
use super::document::FieldDescriptor;

/// Text shown when the document has no fields
pub const EMPTY_PREVIEW_TEXT: &str = "プレビューするフォームがありません。";

/// Rows of a rendered multi-line text input
const TEXT_AREA_ROWS: u16 = 4;

/// Displayable representation of one form control
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PreviewNode {
    /// Stand-in shown for an empty form
    Placeholder(String),
    TextInput {
        label: String,
    },
    TextArea {
        label: String,
        rows: u16,
    },
    Checkbox {
        label: String,
    },
    RadioGroup {
        label: String,
        options: Vec<String>,
    },
}

impl PreviewNode {
    /// Number of terminal rows the node occupies when drawn
    pub fn height(&self) -> u16 {
        match self {
            Self::Placeholder(_) | Self::Checkbox { .. } => 1,
            Self::TextInput { .. } => 3,
            Self::TextArea { rows, .. } => rows.saturating_add(2),
            Self::RadioGroup { options, .. } => u16::try_from(options.len())
                .unwrap_or(u16::MAX)
                .saturating_add(1),
        }
    }
}

/// Project a document snapshot into preview nodes.
///
/// An empty snapshot yields a single placeholder node.
pub fn render(fields: &[FieldDescriptor]) -> Vec<PreviewNode> {
    if fields.is_empty() {
        return vec![PreviewNode::Placeholder(EMPTY_PREVIEW_TEXT.to_string())];
    }

    fields
        .iter()
        .map(|field| (field.field_type.entry().render)(&field.properties))
        .collect()
}

/// One-line helper text shown under a field on the canvas
pub fn canvas_summary(field: &FieldDescriptor) -> String {
    let entry = field.field_type.entry();
    match field.field_type {
        FieldType::RadioGroup => {
            format!("{} (選択肢: {})", entry.description, field.options().join(", "))
        }
        _ => entry.description.to_string(),
    }
}

fn label_of(properties: &Properties) -> String {
    properties
        .get(LABEL_KEY)
        .and_then(PropertyValue::as_text)
        .unwrap_or_default()
        .to_string()
}

pub(super) fn render_text_input(properties: &Properties) -> PreviewNode {
    PreviewNode::TextInput {
        label: label_of(properties),
    }
}

pub(super) fn render_text_area(properties: &Properties) -> PreviewNode {
    PreviewNode::TextArea {
        label: label_of(properties),
        rows: TEXT_AREA_ROWS,
    }
}

pub(super) fn render_checkbox(properties: &Properties) -> PreviewNode {
    PreviewNode::Checkbox {
        label: label_of(properties),
    }
}

pub(super) fn render_radio_group(properties: &Properties) -> PreviewNode {
    let options = properties
        .get(OPTIONS_KEY)
        .and_then(PropertyValue::as_list)
        .map(<[String]>::to_vec)
        .unwrap_or_default();

    PreviewNode::RadioGroup {
        label: label_of(properties),
        options,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::form::FormDocument;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_empty_document_renders_placeholder() {
        let doc = FormDocument::default();
        assert_eq!(
            render(doc.snapshot()),
            vec![PreviewNode::Placeholder(EMPTY_PREVIEW_TEXT.to_string())]
        );
    }

    #[test]
    fn test_renders_one_node_per_field_in_order() {
        let mut doc = FormDocument::default();
        doc.insert(FieldType::TextInput, "テキスト入力", None).unwrap();
        doc.insert(FieldType::TextArea, "テキストエリア", None).unwrap();
        doc.insert(FieldType::Checkbox, "チェックボックス", None).unwrap();
        doc.insert(FieldType::RadioGroup, "ラジオボタン", None).unwrap();

        assert_eq!(
            render(doc.snapshot()),
            vec![
                PreviewNode::TextInput {
                    label: "新しいテキスト入力".to_string()
                },
                PreviewNode::TextArea {
                    label: "新しいテキストエリア".to_string(),
                    rows: 4
                },
                PreviewNode::Checkbox {
                    label: "新しいチェックボックス".to_string()
                },
                PreviewNode::RadioGroup {
                    label: "新しいラジオボタン".to_string(),
                    options: vec!["選択肢1".to_string(), "選択肢2".to_string()]
                },
            ]
        );
    }

    #[test]
    fn test_render_follows_reorder() {
        let mut doc = FormDocument::default();
        doc.insert(FieldType::TextInput, "a", None).unwrap();
        doc.insert(FieldType::Checkbox, "b", None).unwrap();
        doc.move_field(1, 0).unwrap();

        let nodes = render(doc.snapshot());
        assert!(matches!(nodes[0], PreviewNode::Checkbox { .. }));
        assert!(matches!(nodes[1], PreviewNode::TextInput { .. }));
    }

    #[test]
    fn test_missing_label_renders_empty() {
        let mut doc = FormDocument::default();
        let id = doc.insert(FieldType::Checkbox, "x", None).unwrap();
        doc.update_properties(id, Properties::new()).unwrap();

        assert_eq!(
            render(doc.snapshot()),
            vec![PreviewNode::Checkbox {
                label: String::new()
            }]
        );
    }

    #[test]
    fn test_node_heights() {
        let radio = PreviewNode::RadioGroup {
            label: "x".to_string(),
            options: vec!["a".to_string(), "b".to_string(), "c".to_string()],
        };
        assert_eq!(radio.height(), 4);
        assert_eq!(
            PreviewNode::TextArea {
                label: String::new(),
                rows: 4
            }
            .height(),
            6
        );
    }

    #[test]
    fn test_radio_height_saturates_for_huge_option_lists() {
        let radio = PreviewNode::RadioGroup {
            label: String::new(),
            options: vec![String::new(); 70_000],
        };
        assert_eq!(radio.height(), u16::MAX);
        let area = PreviewNode::TextArea {
            label: String::new(),
            rows: u16::MAX,
        };
        assert_eq!(area.height(), u16::MAX);
    }

    #[test]
    fn test_canvas_summary_lists_options() {
        let mut doc = FormDocument::default();
        doc.insert(FieldType::RadioGroup, "ラジオボタン", None).unwrap();
        doc.insert(FieldType::TextArea, "テキストエリア", None).unwrap();

        let fields = doc.snapshot();
        assert_eq!(
            canvas_summary(&fields[0]),
            "ラジオボタンのプレビュー (選択肢: 選択肢1, 選択肢2)"
        );
        assert_eq!(canvas_summary(&fields[1]), "テキストエリアのプレビュー");
    }
}
