//! Delimited-text codec used by the users import/export.
//!
//! Writing quotes every field and joins rows with `\n`. Reading works line
//! by line over non-blank lines (`\n`, `\r\n` and a lone `\r` all end a
//! line), so row numbers are positions among those lines (header = row 1).

use std::collections::HashMap;

use csv::{QuoteStyle, ReaderBuilder, Terminator, WriterBuilder};

/// Serialize a header row plus data rows. Every field is quoted.
pub fn write_table<H, R>(headers: &[H], rows: R) -> anyhow::Result<String>
where
    H: AsRef<str>,
    R: IntoIterator<Item = Vec<String>>,
{
    let mut writer = WriterBuilder::new()
        .quote_style(QuoteStyle::Always)
        .terminator(Terminator::Any(b'\n'))
        .flexible(false)
        .from_writer(Vec::new());

    writer.write_record(headers.iter().map(|h| h.as_ref()))?;
    for row in rows {
        // Line-based reading cannot see embedded newlines
        let row: Vec<String> = row.into_iter().map(|cell| flatten_newlines(&cell)).collect();
        writer.write_record(&row)?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| anyhow::anyhow!("Failed to flush CSV writer: {}", e))?;
    let mut text = String::from_utf8(bytes)?;
    if text.ends_with('\n') {
        text.pop();
    }
    Ok(text)
}

fn flatten_newlines(cell: &str) -> String {
    if cell.contains(&['\r', '\n'][..]) {
        cell.replace("\r\n", " ").replace(&['\r', '\n'][..], " ")
    } else {
        cell.to_string()
    }
}

/// One parsed data row keyed by normalized header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    /// 1-based line number among non-blank lines, header included
    pub row: usize,
    values: HashMap<String, String>,
}

impl Record {
    pub fn new(row: usize, values: HashMap<String, String>) -> Self {
        Self { row, values }
    }

    /// Cell value, empty string when the column is absent
    pub fn get(&self, column: &str) -> &str {
        self.values.get(column).map(String::as_str).unwrap_or("")
    }
}

/// Parsed table: raw header cells plus data rows.
#[derive(Debug, Clone)]
pub struct Table {
    pub headers: Vec<String>,
    pub rows: Vec<TableRow>,
}

#[derive(Debug, Clone)]
pub struct TableRow {
    pub row: usize,
    pub cells: Vec<String>,
}

impl Table {
    /// Zip every row with the given (already normalized) column names.
    /// Missing trailing cells become empty strings, surplus cells are dropped.
    pub fn records(&self, columns: &[String]) -> Vec<Record> {
        self.rows
            .iter()
            .map(|row| {
                let values = columns
                    .iter()
                    .enumerate()
                    .map(|(idx, column)| {
                        let value = row.cells.get(idx).cloned().unwrap_or_default();
                        (column.clone(), value)
                    })
                    .collect();
                Record::new(row.row, values)
            })
            .collect()
    }
}

/// Split text into non-blank lines and parse each one.
/// Returns `None` when nothing but whitespace is left.
pub fn read_table(content: &str) -> Option<Table> {
    let text = content.trim_start_matches('\u{FEFF}');

    let mut lines = text
        .split(&['\r', '\n'][..])
        .filter(|line| !line.trim().is_empty())
        .enumerate()
        .map(|(idx, line)| TableRow {
            row: idx + 1,
            cells: parse_line(line),
        });

    let header = lines.next()?;
    Some(Table {
        headers: header.cells,
        rows: lines.collect(),
    })
}

/// Parse one delimited line: quote-aware split, then trim. Quotes the
/// reader left in place (a field like ` "x"` with space before the quote)
/// are stripped once more.
fn parse_line(line: &str) -> Vec<String> {
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .terminator(Terminator::Any(b'\n'))
        .from_reader(line.as_bytes());

    let cells: Vec<String> = match reader.records().next() {
        Some(Ok(record)) => record.iter().map(String::from).collect(),
        Some(Err(e)) => {
            tracing::warn!("Falling back to plain split for malformed CSV line: {}", e);
            line.split(',').map(String::from).collect()
        }
        None => Vec::new(),
    };

    let quoted = quoted_fields(line);
    cells
        .iter()
        .enumerate()
        .map(|(idx, cell)| {
            if quoted.get(idx).copied().unwrap_or(false) {
                cell.trim().to_string()
            } else {
                strip_literal_quotes(cell)
            }
        })
        .collect()
}

/// Per field: does it open with `"` right at the field start, i.e. did
/// the reader already unquote it
fn quoted_fields(line: &str) -> Vec<bool> {
    let mut flags = Vec::new();
    let mut at_field_start = true;
    let mut in_quotes = false;
    let mut chars = line.chars().peekable();

    while let Some(ch) = chars.next() {
        if at_field_start {
            at_field_start = false;
            flags.push(ch == '"');
            if ch == '"' {
                in_quotes = true;
                continue;
            }
        }
        if in_quotes {
            if ch == '"' {
                if chars.peek() == Some(&'"') {
                    chars.next();
                } else {
                    in_quotes = false;
                }
            }
        } else if ch == ',' {
            at_field_start = true;
        }
    }
    if at_field_start {
        flags.push(false);
    }
    flags
}

fn strip_literal_quotes(cell: &str) -> String {
    let trimmed = cell.trim();
    let unquoted = trimmed
        .strip_prefix('"')
        .and_then(|inner| inner.strip_suffix('"'))
        .unwrap_or(trimmed);
    unquoted.trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn write_quotes_every_field() {
        let text = write_table(
            &["name", "email"],
            vec![vec!["Rajesh Kumar".to_string(), "rajesh@innovatetech.in".to_string()]],
        )
        .unwrap();
        assert_eq!(text, "\"name\",\"email\"\n\"Rajesh Kumar\",\"rajesh@innovatetech.in\"");
    }

    #[test]
    fn write_escapes_embedded_quotes_and_commas() {
        let text = write_table(&["company"], vec![vec!["Acme, \"Ltd\"".to_string()]]).unwrap();
        let table = read_table(&text).unwrap();
        assert_eq!(table.rows[0].cells, vec!["Acme, \"Ltd\"".to_string()]);
    }

    #[test]
    fn write_flattens_newlines() {
        let text = write_table(&["company"], vec![vec!["Line one\nLine two".to_string()]]).unwrap();
        assert_eq!(text.lines().count(), 2);
        let table = read_table(&text).unwrap();
        assert_eq!(table.rows[0].cells[0], "Line one Line two");
    }

    #[test]
    fn read_skips_blank_lines_and_numbers_rows() {
        let table = read_table("name,email\n\n  \nA,a@b.co\r\n\nB,b@b.co\n").unwrap();
        assert_eq!(table.headers, vec!["name", "email"]);
        let rows: Vec<usize> = table.rows.iter().map(|r| r.row).collect();
        assert_eq!(rows, vec![2, 3]);
    }

    #[test]
    fn read_empty_input_returns_none() {
        assert!(read_table("").is_none());
        assert!(read_table(" \n\t\n").is_none());
        assert!(read_table("\u{FEFF}").is_none());
    }

    #[test]
    fn parse_line_strips_quotes_and_whitespace() {
        assert_eq!(
            parse_line(r#" "Name" , "Email" ,Role"#),
            vec!["Name", "Email", "Role"]
        );
    }

    #[test]
    fn records_pad_missing_cells() {
        let table = read_table("name,email,role\nOnly Name").unwrap();
        let columns: Vec<String> = table.headers.clone();
        let records = table.records(&columns);
        assert_eq!(records[0].get("name"), "Only Name");
        assert_eq!(records[0].get("role"), "");
        assert_eq!(records[0].get("status"), "");
    }

    #[test]
    fn quoted_value_that_is_itself_quotes_survives() {
        let text = write_table(
            &["name", "company"],
            vec![vec!["\"\"".to_string(), "\"Acme\"".to_string()]],
        )
        .unwrap();
        assert!(text.ends_with("\n\"\"\"\"\"\",\"\"\"Acme\"\"\""));

        let table = read_table(&text).unwrap();
        assert_eq!(table.rows[0].cells, vec!["\"\"".to_string(), "\"Acme\"".to_string()]);
    }

    #[test]
    fn lone_carriage_return_ends_a_line() {
        let table = read_table("name,email\nA,a@b.co\rB,b@b.co\r\nC,c@b.co").unwrap();
        let rows: Vec<(usize, String)> = table
            .rows
            .iter()
            .map(|r| (r.row, r.cells[0].clone()))
            .collect();
        assert_eq!(
            rows,
            vec![(2, "A".to_string()), (3, "B".to_string()), (4, "C".to_string())]
        );
    }

    #[test]
    fn quoted_fields_follow_reader_rules() {
        assert_eq!(quoted_fields(r#""a","b,c",d"#), vec![true, true, false]);
        assert_eq!(quoted_fields(r#" "a","""",x"#), vec![false, true, false]);
        assert_eq!(quoted_fields("a,"), vec![false, false]);
    }
}
