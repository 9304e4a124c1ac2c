//! # User table columns
//!
//! The table renders a declared list of columns ([`COLUMNS`]) rather than
//! whatever keys the first fetched record happens to carry. Each [`Column`]
//! pairs a record key with a [`CellKind`] telling the UI how to draw the cell;
//! the header label is derived from the key by [`column_label`].
//!
//! The helpers used by the special cells live here too so they can be tested
//! without rendering: [`avatar_glyph`] for the name column and
//! [`BadgeCategory::for_value`] for the gender column.

use std::fmt;

/// How a cell is drawn.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CellKind {
    /// Plain text.
    Text,
    /// Avatar glyph followed by the text.
    Avatar,
    /// Outlined badge coloured by [`BadgeCategory`].
    Badge,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Column {
    pub key: &'static str,
    pub kind: CellKind,
}

impl Column {
    const fn new(key: &'static str, kind: CellKind) -> Self {
        Self { key, kind }
    }

    /// Header text.
    pub fn label(&self) -> String {
        column_label(self.key)
    }
}

/// Columns of the user table, in display order.
pub const COLUMNS: &[Column] = &[
    Column::new("id", CellKind::Text),
    Column::new("name", CellKind::Avatar),
    Column::new("age", CellKind::Text),
    Column::new("gender", CellKind::Badge),
    Column::new("address", CellKind::Text),
    Column::new("pincode", CellKind::Text),
];

/// Header label for a camelCase record key: the first letter is uppercased
/// and a space goes before every other capital (`confirmPassword` →
/// `Confirm Password`).
pub fn column_label(key: &str) -> String {
    let mut label = String::with_capacity(key.len() + 4);
    for (i, c) in key.chars().enumerate() {
        if i == 0 {
            label.extend(c.to_uppercase());
        } else {
            if c.is_uppercase() {
                label.push(' ');
            }
            label.push(c);
        }
    }
    label
}

/// First letter of `name`, uppercased. Empty for an empty name.
pub fn avatar_glyph(name: &str) -> String {
    name.trim_start()
        .chars()
        .next()
        .map(|c| c.to_uppercase().collect())
        .unwrap_or_default()
}

/// Visual category of a gender badge.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BadgeCategory {
    Primary,
    Secondary,
    Default,
}

impl BadgeCategory {
    /// `male` is primary, `female` secondary, anything else default.
    pub fn for_value(value: &str) -> Self {
        let value = value.trim();
        if value.eq_ignore_ascii_case("male") {
            BadgeCategory::Primary
        } else if value.eq_ignore_ascii_case("female") {
            BadgeCategory::Secondary
        } else {
            BadgeCategory::Default
        }
    }

    /// CSS modifier class.
    pub fn class(self) -> &'static str {
        match self {
            BadgeCategory::Primary => "badge badge--primary",
            BadgeCategory::Secondary => "badge badge--secondary",
            BadgeCategory::Default => "badge badge--default",
        }
    }
}

impl fmt::Display for BadgeCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            BadgeCategory::Primary => "primary",
            BadgeCategory::Secondary => "secondary",
            BadgeCategory::Default => "default",
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_badge_category_ignores_case() {
        for v in ["Female", "female", "FEMALE"] {
            assert_eq!(BadgeCategory::for_value(v), BadgeCategory::Secondary);
        }
        for v in ["Male", "male", "mAlE"] {
            assert_eq!(BadgeCategory::for_value(v), BadgeCategory::Primary);
        }
        for v in ["other", "", "femalee"] {
            assert_eq!(BadgeCategory::for_value(v), BadgeCategory::Default);
        }
    }

    #[test]
    fn test_avatar_glyph() {
        assert_eq!(avatar_glyph("asha"), "A");
        assert_eq!(avatar_glyph("Ünal"), "Ü");
        assert_eq!(avatar_glyph("  ravi"), "R");
        assert_eq!(avatar_glyph(""), "");
    }

    #[test]
    fn test_column_label() {
        assert_eq!(column_label("name"), "Name");
        assert_eq!(column_label("confirmPassword"), "Confirm Password");
        assert_eq!(column_label(""), "");
    }

    #[test]
    fn test_declared_headers() {
        let headers: Vec<String> = COLUMNS.iter().map(Column::label).collect();
        assert_eq!(headers, ["Id", "Name", "Age", "Gender", "Address", "Pincode"]);
        assert_eq!(COLUMNS.iter().filter(|c| c.kind == CellKind::Avatar).count(), 1);
        assert!(COLUMNS.iter().all(|c| c.key != "password"));
    }
}
