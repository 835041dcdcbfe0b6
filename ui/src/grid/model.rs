//! Column definitions, row records and sorting for the grid.

use std::cmp::Ordering;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColumnKind {
    #[default]
    Text,
    Number,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnSpec {
    pub field: String,
    pub header_name: String,
    /// Pixel width of the column.
    pub width: u32,
    pub kind: ColumnKind,
}

impl ColumnSpec {
    pub fn text(field: &str, header_name: &str, width: u32) -> Self {
        Self {
            field: field.to_string(),
            header_name: header_name.to_string(),
            width,
            kind: ColumnKind::Text,
        }
    }

    pub fn number(field: &str, header_name: &str, width: u32) -> Self {
        Self {
            kind: ColumnKind::Number,
            ..Self::text(field, header_name, width)
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    Number(f64),
    Text(String),
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) if n.fract() == 0.0 && n.is_finite() => write!(f, "{n:.0}"),
            Self::Number(n) => write!(f, "{n}"),
            Self::Text(s) => f.write_str(s),
        }
    }
}

impl From<&str> for CellValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<f64> for CellValue {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<i32> for CellValue {
    fn from(value: i32) -> Self {
        Self::Number(value.into())
    }
}

/// One grid row. `id` keys the row; cells are looked up by column field.
#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    pub id: u64,
    pub cells: Vec<(String, CellValue)>,
}

impl Record {
    pub fn new(id: u64) -> Self {
        Self {
            id,
            cells: Vec::new(),
        }
    }

    pub fn with(mut self, field: &str, value: impl Into<CellValue>) -> Self {
        self.cells.push((field.to_string(), value.into()));
        self
    }

    /// Cell for `field`; the `id` field is synthesized from the row id.
    pub fn value(&self, field: &str) -> Option<CellValue> {
        self.cells
            .iter()
            .find(|(name, _)| name == field)
            .map(|(_, value)| value.clone())
            .or_else(|| (field == "id").then(|| CellValue::Number(self.id as f64)))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Ascending,
    Descending,
}

/// Active sort, if any.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortModel {
    pub field: String,
    pub direction: SortDirection,
}

impl SortModel {
    /// Header-click cycle for `field`: ascending → descending → unsorted.
    /// Clicking a different column starts again at ascending.
    pub fn cycle(current: Option<&SortModel>, field: &str) -> Option<SortModel> {
        let direction = match current {
            Some(sort) if sort.field == field => match sort.direction {
                SortDirection::Ascending => SortDirection::Descending,
                SortDirection::Descending => return None,
            },
            _ => SortDirection::Ascending,
        };
        Some(SortModel {
            field: field.to_string(),
            direction,
        })
    }
}

/// Stable sort of `rows` by `sort`; missing cells order first.
pub fn sort_rows(rows: &mut [Record], sort: &SortModel) {
    rows.sort_by(|a, b| {
        let ordering = compare_cells(a.value(&sort.field), b.value(&sort.field));
        match sort.direction {
            SortDirection::Ascending => ordering,
            SortDirection::Descending => ordering.reverse(),
        }
    });
}

fn compare_cells(a: Option<CellValue>, b: Option<CellValue>) -> Ordering {
    match (a, b) {
        (None, None) => Ordering::Equal,
        (None, Some(_)) => Ordering::Less,
        (Some(_), None) => Ordering::Greater,
        (Some(CellValue::Number(x)), Some(CellValue::Number(y))) => x.total_cmp(&y),
        (Some(x), Some(y)) => x.to_string().to_lowercase().cmp(&y.to_string().to_lowercase()),
    }
}
