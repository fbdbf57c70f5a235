/// Plain-text table for deal listings, rendered inside a Discord code block
pub struct Table {
    headers: Vec<&'static str>,
    rows: Vec<Vec<String>>,
}

impl Table {
    pub fn new(headers: Vec<&'static str>) -> Self {
        Table {
            headers,
            rows: Vec::new(),
        }
    }

    pub fn add_row(&mut self, row: Vec<String>) {
        self.rows.push(row);
    }

    /// Render with every column padded to its widest cell
    pub fn render(&self) -> String {
        let mut widths: Vec<usize> = self.headers.iter().map(|h| h.len()).collect();
        for row in &self.rows {
            for (i, cell) in row.iter().enumerate() {
                if i < widths.len() {
                    widths[i] = widths[i].max(cell.len());
                }
            }
        }

        let mut out = String::from("```\n");
        out.push_str(&render_line(
            &self.headers.iter().map(|h| h.to_string()).collect::<Vec<_>>(),
            &widths,
        ));
        out.push('\n');

        let separator: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
        out.push_str(&render_line(&separator, &widths));
        out.push('\n');

        for row in &self.rows {
            out.push_str(&render_line(row, &widths));
            out.push('\n');
        }
        out.push_str("```");
        out
    }
}

fn render_line(cells: &[String], widths: &[usize]) -> String {
    let mut line = String::new();
    for (i, cell) in cells.iter().enumerate() {
        if i < widths.len() {
            line.push_str(&format!("{:<width$}", cell, width = widths[i]));
            if i + 1 < cells.len() {
                line.push_str(" | ");
            }
        }
    }
    line.trim_end().to_string()
}
