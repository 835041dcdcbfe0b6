//! Localized grid strings.
//!
//! A resolved [`LocaleBundle`] may be partial; [`GridText`] layers it over the
//! grid's built-in English strings so every identifier renders something.

use crate::locale::LocaleBundle;

pub const NO_ROWS: &str = "noRowsLabel";
pub const SORT_ASC: &str = "columnMenuSortAsc";
pub const SORT_DESC: &str = "columnMenuSortDesc";
pub const UNSORT: &str = "columnMenuUnsort";
pub const SORT_ICON: &str = "columnHeaderSortIconLabel";
pub const TOTAL_ROWS: &str = "footerTotalRows";
pub const ROWS_PER_PAGE: &str = "paginationRowsPerPage";
pub const DISPLAYED_ROWS: &str = "paginationDisplayedRows";
pub const PREVIOUS_PAGE: &str = "paginationPreviousPage";
pub const NEXT_PAGE: &str = "paginationNextPage";

/// Built-in English strings, used for any identifier a bundle lacks.
pub const DEFAULT_GRID_TEXT: &[(&str, &str)] = &[
    (NO_ROWS, "No rows"),
    (SORT_ASC, "Sort by ASC"),
    (SORT_DESC, "Sort by DESC"),
    (UNSORT, "Unsort"),
    (SORT_ICON, "Sort"),
    (TOTAL_ROWS, "Total Rows:"),
    (ROWS_PER_PAGE, "Rows per page:"),
    (DISPLAYED_ROWS, "{from}–{to} of {count}"),
    (PREVIOUS_PAGE, "Go to previous page"),
    (NEXT_PAGE, "Go to next page"),
];

#[derive(Debug, Clone, PartialEq)]
pub struct GridText {
    bundle: LocaleBundle,
}

impl GridText {
    pub fn new(bundle: LocaleBundle) -> Self {
        Self { bundle }
    }

    /// Localized text for `id`, then the built-in default, then `id` itself.
    pub fn get<'a>(&'a self, id: &'a str) -> &'a str {
        self.bundle
            .get(id)
            .or_else(|| {
                DEFAULT_GRID_TEXT
                    .iter()
                    .find(|(default_id, _)| *default_id == id)
                    .map(|(_, text)| *text)
            })
            .unwrap_or(id)
    }

    /// Localized text for `id` with `{name}` placeholders filled from `args`.
    pub fn format(&self, id: &str, args: &[(&str, &str)]) -> String {
        interpolate(self.get(id), args)
    }

    /// `"{from}–{to} of {count}"` for the current page window.
    pub fn displayed_rows(&self, from: usize, to: usize, count: usize) -> String {
        let (from, to, count) = (from.to_string(), to.to_string(), count.to_string());
        self.format(
            DISPLAYED_ROWS,
            &[
                ("from", from.as_str()),
                ("to", to.as_str()),
                ("count", count.as_str()),
            ],
        )
    }
}

/// Replace `{name}` tokens with values from `args`.
///
/// Unknown tokens and unclosed braces are kept verbatim; substituted values
/// are not scanned again.
pub fn interpolate(template: &str, args: &[(&str, &str)]) -> String {
    let mut result = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(open) = rest.find('{') {
        result.push_str(&rest[..open]);
        let after = &rest[open + 1..];
        match after.find('}') {
            Some(close) => {
                let token = &after[..close];
                match args.iter().find(|(name, _)| *name == token) {
                    Some((_, value)) => result.push_str(value),
                    None => {
                        result.push('{');
                        result.push_str(token);
                        result.push('}');
                    }
                }
                rest = &after[close + 1..];
            }
            None => {
                result.push_str(&rest[open..]);
                rest = "";
            }
        }
    }
    result.push_str(rest);
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bundle_text_wins_over_defaults() {
        let text = GridText::new(LocaleBundle::from_entries([(NO_ROWS, "Pas de résultats")]));
        assert_eq!(text.get(NO_ROWS), "Pas de résultats");
    }

    #[test]
    fn partial_bundle_falls_back_per_identifier() {
        let text = GridText::new(LocaleBundle::from_entries([(NO_ROWS, "Sin filas")]));
        assert_eq!(text.get(ROWS_PER_PAGE), "Rows per page:");
        assert_eq!(text.get("unknownLabel"), "unknownLabel");
    }

    #[test]
    fn displayed_rows_uses_localized_template() {
        let text = GridText::new(LocaleBundle::from_entries([(
            DISPLAYED_ROWS,
            "{from}–{to} sur {count}",
        )]));
        assert_eq!(text.displayed_rows(1, 5, 12), "1–5 sur 12");
    }

    #[test]
    fn interpolation_keeps_unknown_and_unclosed_tokens() {
        assert_eq!(interpolate("{a} and {b}", &[("a", "x")]), "x and {b}");
        assert_eq!(interpolate("open {brace", &[("brace", "x")]), "open {brace");
        assert_eq!(interpolate("no tokens", &[]), "no tokens");
    }

    #[test]
    fn interpolation_does_not_recurse() {
        assert_eq!(interpolate("{a}", &[("a", "{b}"), ("b", "x")]), "{b}");
    }
}
