use healthsplit_engine::Table;

/// Render a table as fixed-width text with a leading row index column.
///
/// Every column is as wide as its widest cell; trailing padding is trimmed.
pub fn render_text(table: &Table) -> String {
    let header: Vec<String> = std::iter::once(String::new())
        .chain(table.columns().into_iter().map(str::to_string))
        .collect();

    let body: Vec<Vec<String>> = table
        .rows
        .iter()
        .enumerate()
        .map(|(index, row)| {
            std::iter::once(index.to_string())
                .chain(row.values().into_iter().map(str::to_string))
                .collect()
        })
        .collect();

    let mut widths: Vec<usize> = header.iter().map(|h| h.chars().count()).collect();
    for cells in &body {
        for (width, cell) in widths.iter_mut().zip(cells) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let mut out = String::new();
    for cells in std::iter::once(&header).chain(body.iter()) {
        let line = cells
            .iter()
            .zip(&widths)
            .map(|(cell, width)| format!("{:<width$}", cell, width = *width))
            .collect::<Vec<_>>()
            .join("  ");
        out.push_str(line.trim_end());
        out.push('\n');
    }
    out
}
