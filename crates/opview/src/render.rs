//! Output contract shared with the console renderer.
//!
//! Everything the pipeline produces is one of two forms: a plaintext string
//! shown verbatim, or a list of table blocks (headers + rows + title). The
//! serde representation here is the binding wire schema; the renderer itself
//! is an external collaborator and sees nothing else.

use std::collections::BTreeMap;

use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

/// How the renderer should treat a column's cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ColumnKind {
    String,
    Number,
    Size,
    Button,
}

/// One column of a table block.
///
/// `width: None` means the column expands to fill remaining space
/// (serialized as `fillWidth: true`); `Some(px)` is a fixed pixel width.
#[derive(Debug, Clone, PartialEq)]
pub struct Column {
    pub key: String,
    pub label: String,
    pub kind: ColumnKind,
    pub width: Option<u32>,
    /// Cells in this column get a copy-to-clipboard affordance.
    pub copy: bool,
    /// The renderer offers client-side sorting on this column.
    pub sortable: bool,
}

impl Column {
    pub fn text(key: &str) -> Self {
        Self {
            key: key.to_string(),
            label: key.to_string(),
            kind: ColumnKind::String,
            width: None,
            copy: false,
            sortable: false,
        }
    }

    pub fn number(key: &str) -> Self {
        Self {
            kind: ColumnKind::Number,
            ..Self::text(key)
        }
    }

    pub fn size(key: &str) -> Self {
        Self {
            kind: ColumnKind::Size,
            ..Self::text(key)
        }
    }

    pub fn label(mut self, label: &str) -> Self {
        self.label = label.to_string();
        self
    }

    pub fn width(mut self, px: u32) -> Self {
        self.width = Some(px);
        self
    }

    pub fn copy(mut self) -> Self {
        self.copy = true;
        self
    }

    pub fn sortable(mut self) -> Self {
        self.sortable = true;
        self
    }
}

impl Serialize for Column {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        // width and fillWidth are mutually exclusive on the wire
        let mut map = serializer.serialize_map(None)?;
        map.serialize_entry("plaintext", &self.label)?;
        map.serialize_entry("type", &self.kind)?;
        match self.width {
            Some(px) => map.serialize_entry("width", &px)?,
            None => map.serialize_entry("fillWidth", &true)?,
        }
        // absent means unsortable, keeping non-sortable headers unchanged
        if self.sortable {
            map.serialize_entry("sortable", &true)?;
        }
        map.end()
    }
}

/// One rendered cell.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Cell {
    pub plaintext: String,
    #[serde(rename = "copyIcon", skip_serializing_if = "is_false")]
    pub copy_icon: bool,
    /// Structured payload for `ColumnKind::Button` columns.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub button: Option<serde_json::Value>,
}

impl Cell {
    pub fn new(plaintext: String) -> Self {
        Self {
            plaintext,
            copy_icon: false,
            button: None,
        }
    }
}

fn is_false(value: &bool) -> bool {
    !*value
}

/// Per-row visual annotation. Absent means the neutral, untinted style.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RowStyle {
    #[serde(rename = "backgroundColor", skip_serializing_if = "Option::is_none")]
    pub background_color: Option<String>,
}

impl RowStyle {
    pub fn tinted(color: &str) -> Self {
        Self {
            background_color: Some(color.to_string()),
        }
    }
}

/// One table row: column key → cell, plus an optional style.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Row {
    #[serde(flatten)]
    pub cells: BTreeMap<String, Cell>,
    #[serde(rename = "rowStyle", skip_serializing_if = "Option::is_none")]
    pub style: Option<RowStyle>,
}

/// One self-contained table: headers, rows, computed title.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TableBlock {
    pub headers: Vec<Column>,
    pub rows: Vec<Row>,
    pub title: String,
}

/// The pipeline's only output type: plaintext shown verbatim, or one or
/// more table blocks. Always renderable; `render` never fails.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RenderedOutput {
    Plaintext(String),
    Table(Vec<TableBlock>),
}

impl RenderedOutput {
    pub fn plaintext(text: impl Into<String>) -> Self {
        RenderedOutput::Plaintext(text.into())
    }

    pub fn as_plaintext(&self) -> Option<&str> {
        match self {
            RenderedOutput::Plaintext(text) => Some(text),
            RenderedOutput::Table(_) => None,
        }
    }

    pub fn as_table(&self) -> Option<&[TableBlock]> {
        match self {
            RenderedOutput::Plaintext(_) => None,
            RenderedOutput::Table(blocks) => Some(blocks),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_column_serializes_width_xor_fill_width() {
        let fixed = serde_json::to_value(Column::number("pid").width(80)).unwrap();
        assert_eq!(fixed["plaintext"], "pid");
        assert_eq!(fixed["type"], "number");
        assert_eq!(fixed["width"], 80);
        assert!(fixed.get("fillWidth").is_none(), "fixed column must not fill");

        let fill = serde_json::to_value(Column::text("name")).unwrap();
        assert_eq!(fill["fillWidth"], true);
        assert!(fill.get("width").is_none(), "fill column must not carry width");
    }

    #[test]
    fn test_column_serializes_sortable_only_when_set() {
        let sortable = serde_json::to_value(Column::number("pid").sortable()).unwrap();
        assert_eq!(sortable["sortable"], true);

        let plain = serde_json::to_value(Column::text("name")).unwrap();
        assert!(
            plain.get("sortable").is_none(),
            "non-sortable headers must not carry the key"
        );
    }

    #[test]
    fn test_cell_omits_copy_icon_when_false() {
        let plain = serde_json::to_value(Cell::new("x".into())).unwrap();
        assert!(plain.get("copyIcon").is_none());

        let mut copied = Cell::new("x".into());
        copied.copy_icon = true;
        let copied = serde_json::to_value(copied).unwrap();
        assert_eq!(copied["copyIcon"], true);
    }

    #[test]
    fn test_button_cells_carry_structured_payload() {
        let column = serde_json::to_value(Column {
            kind: ColumnKind::Button,
            ..Column::text("actions")
        })
        .unwrap();
        assert_eq!(column["type"], "button");

        let mut cell = Cell::new("download".into());
        cell.button = Some(serde_json::json!({"file_id": 7}));
        let cell = serde_json::to_value(cell).unwrap();
        assert_eq!(cell["button"]["file_id"], 7);
    }

    #[test]
    fn test_output_is_externally_tagged() {
        let text = serde_json::to_value(RenderedOutput::plaintext("hi")).unwrap();
        assert_eq!(text, serde_json::json!({"plaintext": "hi"}));

        let table = serde_json::to_value(RenderedOutput::Table(vec![])).unwrap();
        assert_eq!(table, serde_json::json!({"table": []}));
    }
}
