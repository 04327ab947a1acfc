//! Plain-text rendering of list rows.

use trash_store::{Entry, TabularStore};

/// Cells wider than this are truncated.
const MAX_CELL_WIDTH: usize = 32;

/// Renders `rows` of `store` as an aligned table with a header line.
pub fn render(store: &TabularStore, rows: &[&Entry]) -> String {
    let header: Vec<String> = std::iter::once(store.index_header())
        .chain(store.columns().iter().map(String::as_str))
        .map(|h| truncate(h, MAX_CELL_WIDTH))
        .collect();

    let body: Vec<Vec<String>> = rows
        .iter()
        .map(|entry| {
            let mut cells = vec![truncate(entry.name(), MAX_CELL_WIDTH)];
            cells.extend(
                (0..store.columns().len())
                    .map(|i| truncate(entry.value(i).unwrap_or(""), MAX_CELL_WIDTH)),
            );
            cells
        })
        .collect();

    let mut widths: Vec<usize> = header.iter().map(|h| h.chars().count()).collect();
    for cells in &body {
        for (width, cell) in widths.iter_mut().zip(cells) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let mut out = String::new();
    out.push_str(&format_line(&header, &widths));
    for cells in &body {
        out.push('\n');
        out.push_str(&format_line(cells, &widths));
    }
    out.push_str(&format!("\n\n{} of {} entries", rows.len(), store.len()));
    out
}

fn format_line(cells: &[String], widths: &[usize]) -> String {
    cells
        .iter()
        .zip(widths)
        .map(|(cell, &width)| format!("{:<width$}", cell, width = width))
        .collect::<Vec<_>>()
        .join("  ")
        .trim_end()
        .to_string()
}

/// Truncates a string to `max_len` characters, adding "..." if truncated.
fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{}...", kept)
    }
}
