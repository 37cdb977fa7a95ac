//! Column definitions of the generic data table.

use chrono::{DateTime, NaiveDate, Utc};
use contracts::shared::enums::StatusTone;

use crate::shared::date_utils::{format_date_value, format_datetime_value};

/// Placeholder for absent values.
pub const EMPTY_CELL: &str = "-";

/// Typed value of one cell; the renderer decides how it looks.
#[derive(Debug, Clone, PartialEq)]
pub enum Cell {
    Text(String),
    Badge { label: String, tone: StatusTone },
    Date(Option<NaiveDate>),
    DateTime(Option<DateTime<Utc>>),
    Number(Option<f64>),
    Empty,
}

impl Cell {
    pub fn text(value: impl Into<String>) -> Self {
        Cell::Text(value.into())
    }

    /// `Empty` for a missing or blank value.
    pub fn opt_text(value: Option<&str>) -> Self {
        match value.map(str::trim).filter(|v| !v.is_empty()) {
            Some(v) => Cell::Text(v.to_string()),
            None => Cell::Empty,
        }
    }

    pub fn badge(label: &str, tone: StatusTone) -> Self {
        Cell::Badge {
            label: label.to_string(),
            tone,
        }
    }

    pub fn number(value: impl Into<f64>) -> Self {
        Cell::Number(Some(value.into()))
    }

    /// Plain text of the cell, as shown in tooltips and CSV export.
    pub fn display_text(&self) -> String {
        match self {
            Cell::Text(text) => text.clone(),
            Cell::Badge { label, .. } => label.clone(),
            Cell::Date(Some(date)) => format_date_value(*date),
            Cell::DateTime(Some(dt)) => format_datetime_value(*dt),
            Cell::Number(Some(n)) => format_number(*n),
            Cell::Date(None) | Cell::DateTime(None) | Cell::Number(None) | Cell::Empty => {
                EMPTY_CELL.to_string()
            }
        }
    }

    pub fn is_numeric(&self) -> bool {
        matches!(self, Cell::Number(_))
    }
}

fn format_number(n: f64) -> String {
    if n.fract() == 0.0 && n.abs() < 1e15 {
        format!("{}", n as i64)
    } else {
        format!("{:.2}", n)
    }
}

/// Column width constraints in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ColumnWidth {
    pub fixed: Option<u32>,
    pub min: Option<u32>,
    pub max: Option<u32>,
}

impl ColumnWidth {
    /// Inline style for the header cell. A fixed width pins min and max too.
    pub fn style(&self) -> String {
        let mut style = String::new();
        if let Some(w) = self.fixed {
            style.push_str(&format!("width: {w}px; min-width: {w}px; max-width: {w}px;"));
            return style;
        }
        if let Some(min) = self.min {
            style.push_str(&format!("min-width: {min}px;"));
        }
        if let Some(max) = self.max {
            if !style.is_empty() {
                style.push(' ');
            }
            style.push_str(&format!("max-width: {max}px;"));
        }
        style
    }
}

pub struct ColumnDef<T> {
    pub key: &'static str,
    pub label: &'static str,
    pub accessor: fn(&T) -> Cell,
    /// Server-side sort field; `None` for columns that cannot be sorted.
    pub sort_field: Option<&'static str>,
    pub width: ColumnWidth,
    /// Maximum number of characters before the text is cut with an ellipsis.
    pub truncate: Option<usize>,
}

impl<T> Clone for ColumnDef<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for ColumnDef<T> {}

impl<T> ColumnDef<T> {
    pub fn new(key: &'static str, label: &'static str, accessor: fn(&T) -> Cell) -> Self {
        Self {
            key,
            label,
            accessor,
            sort_field: None,
            width: ColumnWidth::default(),
            truncate: None,
        }
    }

    /// Sortable by the column key.
    pub fn sortable(self) -> Self {
        Self {
            sort_field: Some(self.key),
            ..self
        }
    }

    pub fn sort_by(self, field: &'static str) -> Self {
        Self {
            sort_field: Some(field),
            ..self
        }
    }

    pub fn width(mut self, px: u32) -> Self {
        self.width.fixed = Some(px);
        self
    }

    pub fn min_width(mut self, px: u32) -> Self {
        self.width.min = Some(px);
        self
    }

    pub fn max_width(mut self, px: u32) -> Self {
        self.width.max = Some(px);
        self
    }

    pub fn truncate(self, max_chars: usize) -> Self {
        Self {
            truncate: Some(max_chars),
            ..self
        }
    }

    pub fn cell(&self, row: &T) -> Cell {
        (self.accessor)(row)
    }
}

/// Cuts `text` to `max` characters (ellipsis included). Returns the shown
/// text and, when something was cut, the full text for the tooltip.
pub fn truncate_text(text: &str, max: usize) -> (String, Option<String>) {
    if max == 0 || text.chars().count() <= max {
        return (text.to_string(), None);
    }
    let mut shown: String = text.chars().take(max.saturating_sub(1)).collect();
    shown.push('…');
    (shown, Some(text.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Row {
        name: &'static str,
        notes: Option<&'static str>,
    }

    #[test]
    fn test_truncate() {
        assert_eq!(truncate_text("short", 10), ("short".to_string(), None));
        assert_eq!(
            truncate_text("Introduction to Rust", 10),
            ("Introduct…".to_string(), Some("Introduction to Rust".to_string()))
        );
        // Character based, not byte based.
        let (shown, full) = truncate_text("Программирование", 5);
        assert_eq!(shown, "Прог…");
        assert!(full.is_some());
    }

    #[test]
    fn test_width_style() {
        assert_eq!(ColumnWidth::default().style(), "");
        let fixed = ColumnWidth {
            fixed: Some(120),
            min: Some(10),
            max: None,
        };
        assert_eq!(fixed.style(), "width: 120px; min-width: 120px; max-width: 120px;");
        let bounded = ColumnWidth {
            fixed: None,
            min: Some(80),
            max: Some(300),
        };
        assert_eq!(bounded.style(), "min-width: 80px; max-width: 300px;");
    }

    #[test]
    fn test_display_text() {
        assert_eq!(Cell::opt_text(Some("  ")), Cell::Empty);
        assert_eq!(Cell::Empty.display_text(), EMPTY_CELL);
        assert_eq!(Cell::number(12).display_text(), "12");
        assert_eq!(Cell::number(1499.5).display_text(), "1499.50");
        let date = NaiveDate::from_ymd_opt(2024, 3, 15);
        assert_eq!(Cell::Date(date).display_text(), "15.03.2024");
        assert_eq!(Cell::badge("Active", StatusTone::Success).display_text(), "Active");
    }

    #[test]
    fn test_builder() {
        let column = ColumnDef::new("notes", "Notes", |r: &Row| Cell::opt_text(r.notes))
            .min_width(80)
            .max_width(240)
            .truncate(40);
        assert_eq!(column.sort_field, None);
        assert_eq!(column.truncate, Some(40));
        assert_eq!(column.cell(&Row { name: "x", notes: None }), Cell::Empty);

        let name = ColumnDef::new("name", "Name", |r: &Row| Cell::text(r.name)).sortable();
        assert_eq!(name.sort_field, Some("name"));
        let by_last = ColumnDef::new("fullName", "Name", |r: &Row| Cell::text(r.name))
            .sort_by("lastName");
        assert_eq!(by_last.sort_field, Some("lastName"));
    }
}
