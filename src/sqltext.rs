//! Shared SQL text utilities: default-value normalization, dialect type
//! modifiers, and column DDL rendering.

use crate::column::TableColumn;
use crate::datatype::SqlServerDataType;

/// Remove all redundant fully-enclosing parenthesis pairs.
///
/// Catalog default definitions arrive wrapped, often multiply ("((0))",
/// "(getdate())"). A layer is removed only when the leading "(" actually
/// matches the trailing ")", so "(a)+(b)" stays intact.
pub fn strip_enclosing_parens(text: &str) -> &str {
    let mut s = text;
    while has_enclosing_pair(s) {
        s = &s[1..s.len() - 1];
    }
    s
}

fn has_enclosing_pair(s: &str) -> bool {
    if s.len() < 2 || !s.starts_with('(') || !s.ends_with(')') {
        return false;
    }
    let mut depth = 0usize;
    for (i, ch) in s.char_indices() {
        match ch {
            '(' => depth += 1,
            ')' => {
                depth -= 1;
                if depth == 0 {
                    // The opening paren closes here; enclosing only if this
                    // is the final character.
                    return i == s.len() - 1;
                }
            }
            _ => {}
        }
    }
    false
}

/// Dialect-specific type modifier suffix for a column, e.g. "(50)",
/// "(max)", "(18,2)". `None` when the type takes no modifiers.
///
/// `max_length` is the storage length in bytes as reported by the catalog
/// (-1 for the (max) variants); character lengths for the n-prefixed UTF-16
/// types are half the byte length.
pub fn column_type_modifiers(
    data_type: &SqlServerDataType,
    max_length: i64,
    precision: Option<i32>,
    scale: Option<i32>,
) -> Option<String> {
    match data_type.name() {
        "char" | "varchar" | "binary" | "varbinary" => sized_modifier(max_length, 1),
        "nchar" | "nvarchar" => sized_modifier(max_length, 2),
        "decimal" | "numeric" => match (precision, scale) {
            (Some(p), Some(s)) => Some(format!("({},{})", p, s)),
            (Some(p), None) => Some(format!("({})", p)),
            _ => None,
        },
        "time" | "datetime2" | "datetimeoffset" => match scale {
            // Scale 7 is the dialect default and is omitted.
            Some(s) if s != 7 => Some(format!("({})", s)),
            _ => None,
        },
        _ => None,
    }
}

fn sized_modifier(max_length: i64, bytes_per_char: i64) -> Option<String> {
    if max_length < 0 {
        Some("(max)".to_string())
    } else if max_length > 0 {
        Some(format!("({})", max_length / bytes_per_char))
    } else {
        None
    }
}

/// Quote an identifier with brackets, doubling any embedded "]".
pub fn quote_identifier(name: &str) -> String {
    format!("[{}]", name.replace(']', "]]"))
}

/// Render one column definition fragment for DDL generation, e.g.
/// `[price] decimal(18,2) NOT NULL DEFAULT 0`.
pub fn column_ddl(column: &TableColumn) -> String {
    let mut ddl = format!(
        "{} {}",
        quote_identifier(column.name()),
        column.full_type_name()
    );
    if let Some(collation) = column.collation_name() {
        ddl.push_str(" COLLATE ");
        ddl.push_str(collation);
    }
    if column.is_auto_generated() {
        ddl.push_str(" IDENTITY");
    }
    ddl.push_str(if column.is_nullable() {
        " NULL"
    } else {
        " NOT NULL"
    });
    if let Some(default) = column.default_value() {
        ddl.push_str(" DEFAULT ");
        ddl.push_str(default);
    }
    ddl
}
