//! Tabular display for records: columns, rows, localized text and a
//! pagination model go in; nothing comes back out.

mod model;
mod pagination;
pub mod text;
mod view;

pub use model::{sort_rows, CellValue, ColumnKind, ColumnSpec, Record, SortDirection, SortModel};
pub use pagination::Pagination;
pub use text::GridText;
pub use view::DataGrid;
