// Sort and filter logic for the site's column tables. Pure: the DOM layer
// in `ui` feeds cell text in and applies the resulting row order.

use std::cmp::Ordering;

/// Owned sort/filter state for one table. Handlers receive it explicitly
/// instead of sharing a module-level current-dataset global.
#[derive(Clone, Debug, Default)]
pub struct TableState {
    pub sort_column: Option<usize>,
    pub ascending: bool,
    pub filter: String,
}

impl TableState {
    /// A click on a column header: the same column flips direction, a new
    /// column starts ascending.
    pub fn on_header_click(&mut self, column: usize) {
        if self.sort_column == Some(column) {
            self.ascending = !self.ascending;
        } else {
            self.sort_column = Some(column);
            self.ascending = true;
        }
    }

    pub fn on_filter_input(&mut self, text: &str) {
        self.filter = text.trim().to_lowercase();
    }

    /// Row order for the current state: indices into `rows`, filtered then
    /// sorted. Rows failing the filter are absent from the result.
    pub fn apply(&self, rows: &[Vec<String>]) -> Vec<usize> {
        let mut order: Vec<usize> = (0..rows.len()).filter(|&i| self.matches(&rows[i])).collect();
        if let Some(col) = self.sort_column {
            order.sort_by(|&a, &b| {
                let lhs = rows[a].get(col).map(String::as_str).unwrap_or("");
                let rhs = rows[b].get(col).map(String::as_str).unwrap_or("");
                let ord = compare_cells(lhs, rhs);
                if self.ascending {
                    ord
                } else {
                    ord.reverse()
                }
            });
        }
        order
    }

    fn matches(&self, row: &[String]) -> bool {
        if self.filter.is_empty() {
            return true;
        }
        row.iter()
            .any(|cell| cell.to_lowercase().contains(&self.filter))
    }
}

/// Numeric-aware cell comparison: two numbers compare numerically, anything
/// else falls back to a case-insensitive string compare.
pub fn compare_cells(a: &str, b: &str) -> Ordering {
    match (parse_numeric(a), parse_numeric(b)) {
        (Some(x), Some(y)) => x.partial_cmp(&y).unwrap_or(Ordering::Equal),
        _ => a.to_lowercase().cmp(&b.to_lowercase()),
    }
}

fn parse_numeric(cell: &str) -> Option<f64> {
    cell.trim()
        .trim_start_matches('$')
        .replace(',', "")
        .parse()
        .ok()
}

/// Undo the reversed-text obfuscation used for addresses in the page
/// source.
pub fn decode_reversed(text: &str) -> String {
    text.chars().rev().collect()
}
