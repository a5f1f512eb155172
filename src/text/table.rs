use std::fmt;

use serde::Serialize;

/// Column-aligned view of the word sequences: one header per chosen-sentence
/// symbol, one row per derived form (partial, tokenized).
#[derive(Clone, Debug, Serialize)]
pub struct SequenceTable {
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl SequenceTable {
    pub fn new(headers: Vec<String>, rows: Vec<Vec<String>>) -> Self {
        Self { headers, rows }
    }

    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    fn column_widths(&self) -> Vec<usize> {
        let mut widths: Vec<usize> = self.headers.iter().map(String::len).collect();
        for row in &self.rows {
            for (i, cell) in row.iter().enumerate() {
                if i < widths.len() {
                    widths[i] = widths[i].max(cell.len());
                }
            }
        }
        widths
    }
}

impl fmt::Display for SequenceTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let widths = self.column_widths();
        let line = |cells: &[String], f: &mut fmt::Formatter<'_>| -> fmt::Result {
            for (i, cell) in cells.iter().enumerate() {
                let width = widths.get(i).copied().unwrap_or(cell.len());
                write!(f, "{cell:width$}  ")?;
            }
            writeln!(f)
        };
        line(&self.headers, f)?;
        for row in &self.rows {
            line(row, f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cells(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn columns_align_to_the_widest_cell() {
        let table = SequenceTable::new(
            cells(&["fox", "jumps"]),
            vec![cells(&["_____", "x"]), cells(&["a", "b"])],
        );
        let rendered = table.to_string();
        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with("fox    jumps"));
        assert!(lines[1].starts_with("_____  x"));
    }

    #[test]
    fn accessors_expose_shape() {
        let table = SequenceTable::new(cells(&["a"]), vec![cells(&["b"])]);
        assert_eq!(table.headers(), &["a".to_string()]);
        assert_eq!(table.rows().len(), 1);
    }
}
