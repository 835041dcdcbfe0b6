use dioxus::prelude::*;

use crate::locale::LocaleBundle;

use super::model::{sort_rows, ColumnKind, ColumnSpec, Record, SortDirection, SortModel};
use super::pagination::Pagination;
use super::text::{
    GridText, NEXT_PAGE, NO_ROWS, PREVIOUS_PAGE, ROWS_PER_PAGE, SORT_ASC, SORT_DESC, SORT_ICON,
    TOTAL_ROWS, UNSORT,
};

/// Paginated, sortable table rendered with localized grid text.
///
/// `pagination` is only the initial model; page and page-size changes are
/// kept inside the grid. `locale_text` may be partial (see [`GridText`]).
#[component]
pub fn DataGrid(
    columns: Vec<ColumnSpec>,
    rows: Vec<Record>,
    locale_text: LocaleBundle,
    #[props(default)] pagination: Pagination,
    #[props(default = vec![5, 10])] page_size_options: Vec<usize>,
) -> Element {
    let text = GridText::new(locale_text);
    let mut model = use_signal(move || pagination);
    let sort = use_signal(|| Option::<SortModel>::None);

    let total = rows.len();
    let current = model().clamped(total);

    let mut ordered = rows;
    if let Some(active) = sort() {
        sort_rows(&mut ordered, &active);
    }
    let visible = ordered[current.window(total)].to_vec();

    let (from, to) = current.displayed_bounds(total);
    let summary = text.displayed_rows(from, to, total);
    let no_rows = text.get(NO_ROWS).to_string();
    let rows_per_page = text.get(ROWS_PER_PAGE).to_string();
    let total_rows = text.get(TOTAL_ROWS).to_string();
    let previous_label = text.get(PREVIOUS_PAGE).to_string();
    let next_label = text.get(NEXT_PAGE).to_string();
    let column_count = columns.len();

    rsx! {
        div { class: "data-grid", role: "grid",
            table { class: "data-grid__table",
                thead {
                    tr {
                        for column in columns.iter() {
                            {render_header(column, &text, sort)}
                        }
                    }
                }
                tbody {
                    if visible.is_empty() {
                        tr {
                            td { class: "data-grid__overlay", colspan: "{column_count}", "{no_rows}" }
                        }
                    } else {
                        for row in visible.iter() {
                            tr { key: "{row.id}", class: "data-grid__row",
                                for column in columns.iter() {
                                    td { class: cell_class(column.kind), {cell_text(row, column)} }
                                }
                            }
                        }
                    }
                }
            }

            div { class: "data-grid__footer",
                span { class: "data-grid__total", "{total_rows} {total}" }
                label { class: "data-grid__page-size",
                    span { "{rows_per_page}" }
                    select {
                        value: "{current.page_size}",
                        onchange: move |evt: Event<FormData>| {
                            if let Ok(size) = evt.value().parse::<usize>() {
                                model.set(current.with_page_size(size));
                            }
                        },
                        for size in page_size_options.iter().copied() {
                            option {
                                value: "{size}",
                                selected: size == current.page_size,
                                "{size}"
                            }
                        }
                    }
                }
                span { class: "data-grid__displayed", "{summary}" }
                button {
                    r#type: "button",
                    class: "data-grid__nav",
                    title: "{previous_label}",
                    "aria-label": "{previous_label}",
                    disabled: !current.has_previous(),
                    onclick: move |_| model.set(current.previous()),
                    "‹"
                }
                button {
                    r#type: "button",
                    class: "data-grid__nav",
                    title: "{next_label}",
                    "aria-label": "{next_label}",
                    disabled: !current.has_next(total),
                    onclick: move |_| model.set(current.next(total)),
                    "›"
                }
            }
        }
    }
}

fn render_header(
    column: &ColumnSpec,
    text: &GridText,
    mut sort: Signal<Option<SortModel>>,
) -> Element {
    let active = sort
        .read()
        .as_ref()
        .filter(|s| s.field == column.field)
        .map(|s| s.direction);

    let (indicator, aria_sort, hint) = match active {
        Some(SortDirection::Ascending) => ("▲", "ascending", text.get(SORT_DESC)),
        Some(SortDirection::Descending) => ("▼", "descending", text.get(UNSORT)),
        None => ("", "none", text.get(SORT_ASC)),
    };
    let hint = hint.to_string();
    let icon_label = text.get(SORT_ICON).to_string();
    let field = column.field.clone();
    let key = field.clone();
    let header = column.header_name.clone();
    let width = column.width;

    rsx! {
        th {
            key: "{key}",
            class: cell_class(column.kind),
            style: "width: {width}px",
            "aria-sort": aria_sort,
            button {
                r#type: "button",
                class: "data-grid__header",
                title: "{hint}",
                onclick: move |_| {
                    let next = SortModel::cycle(sort.read().as_ref(), &field);
                    sort.set(next);
                },
                "{header}"
                span {
                    class: "data-grid__sort-indicator",
                    "aria-label": "{icon_label}",
                    "{indicator}"
                }
            }
        }
    }
}

fn cell_class(kind: ColumnKind) -> &'static str {
    match kind {
        ColumnKind::Text => "data-grid__cell",
        ColumnKind::Number => "data-grid__cell data-grid__cell--number",
    }
}

fn cell_text(row: &Record, column: &ColumnSpec) -> String {
    row.value(&column.field)
        .map(|value| value.to_string())
        .unwrap_or_default()
}
