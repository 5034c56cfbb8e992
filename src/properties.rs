//! Property-sheet field descriptors.
//!
//! Declarative per-field presentation metadata for the host's generic
//! property-sheet UI: which column fields are shown, in what order, and
//! whether they are editable or rendered multi-line. This is configuration
//! consumed by the host, not executable logic.

use crate::column::TableColumn;

/// Presentation metadata for one column field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldDescriptor {
    /// Stable field identifier.
    pub id: &'static str,
    /// Display order within the property sheet.
    pub order: u32,
    /// Shown in the default (table) view, not only the full sheet.
    pub viewable: bool,
    /// Editable through the property sheet.
    pub editable: bool,
    /// Rendered as a multi-line text area.
    pub multiline: bool,
}

/// Descriptor table for `TableColumn` fields, in display order.
pub const COLUMN_FIELDS: &[FieldDescriptor] = &[
    FieldDescriptor {
        id: "name",
        order: 10,
        viewable: true,
        editable: true,
        multiline: false,
    },
    FieldDescriptor {
        id: "full_type_name",
        order: 20,
        viewable: true,
        editable: true,
        multiline: false,
    },
    FieldDescriptor {
        id: "nullable",
        order: 50,
        viewable: true,
        editable: true,
        multiline: false,
    },
    FieldDescriptor {
        id: "auto_generated",
        order: 51,
        viewable: true,
        editable: true,
        multiline: false,
    },
    FieldDescriptor {
        id: "default_value",
        order: 70,
        viewable: true,
        editable: true,
        multiline: false,
    },
    FieldDescriptor {
        id: "collation_name",
        order: 75,
        viewable: false,
        editable: false,
        multiline: false,
    },
    FieldDescriptor {
        id: "hidden",
        order: 80,
        viewable: false,
        editable: false,
        multiline: false,
    },
    FieldDescriptor {
        id: "comment",
        order: 100,
        viewable: true,
        editable: true,
        multiline: true,
    },
];

/// Find a descriptor by field id.
pub fn find_field(id: &str) -> Option<&'static FieldDescriptor> {
    COLUMN_FIELDS.iter().find(|d| d.id == id)
}

impl TableColumn {
    /// Stringified value of a described field, for property-sheet display.
    /// `None` for ids not present in [`COLUMN_FIELDS`].
    pub fn field_text(&self, id: &str) -> Option<String> {
        find_field(id)?;
        let text = match id {
            "name" => self.name().to_string(),
            "full_type_name" => self.full_type_name(),
            "nullable" => self.is_nullable().to_string(),
            "auto_generated" => self.is_auto_generated().to_string(),
            "default_value" => self.default_value().unwrap_or_default().to_string(),
            "collation_name" => self.collation_name().unwrap_or_default().to_string(),
            "hidden" => self.is_hidden().to_string(),
            "comment" => self.comment().unwrap_or_default().to_string(),
            _ => return None,
        };
        Some(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_descriptor_table_ordered_and_unique() {
        let orders: Vec<u32> = COLUMN_FIELDS.iter().map(|d| d.order).collect();
        let mut sorted = orders.clone();
        sorted.sort_unstable();
        sorted.dedup();
        assert_eq!(orders, sorted);
    }

    #[test]
    fn test_find_field() {
        let comment = find_field("comment").unwrap();
        assert!(comment.multiline);
        assert_eq!(comment.order, 100);

        let collation = find_field("collation_name").unwrap();
        assert!(!collation.viewable);

        assert!(find_field("no_such_field").is_none());
    }
}
