//! Sample columns and rows shown by the demo grid.

use crate::grid::{ColumnSpec, Pagination, Record};

pub fn columns() -> Vec<ColumnSpec> {
    vec![
        ColumnSpec::number("id", "ID", 70),
        ColumnSpec::text("name", "Name", 130),
        ColumnSpec::text("email", "Email", 200),
        ColumnSpec::number("age", "Age", 90),
    ]
}

pub fn rows() -> Vec<Record> {
    let people: [(u64, &str, &str, i32); 5] = [
        (1, "John Doe", "john@example.com", 35),
        (2, "Jane Smith", "jane@example.com", 28),
        (3, "Bob Johnson", "bob@example.com", 45),
        (4, "Alice Brown", "alice@example.com", 32),
        (5, "Charlie Wilson", "charlie@example.com", 29),
    ];
    people
        .into_iter()
        .map(|(id, name, email, age)| {
            Record::new(id)
                .with("name", name)
                .with("email", email)
                .with("age", age)
        })
        .collect()
}

pub fn initial_pagination() -> Pagination {
    Pagination::new(0, 5)
}

pub const PAGE_SIZE_OPTIONS: [usize; 2] = [5, 10];
