use std::collections::HashMap;

use crate::roster::errors::RosterError;

/// One data row, keyed by trimmed header name.
pub type SheetRow = HashMap<String, String>;

/// Parse a published-sheet CSV blob: first line is the header, the rest are
/// data rows. Fields may be double-quoted to carry literal commas, and a
/// doubled quote inside a quoted field decodes to one quote.
///
/// Policy choices: blank body lines are skipped, columns beyond the header
/// are ignored, and rows shorter than the header fill the missing trailing
/// fields with the empty string.
pub fn parse_csv(csv: &str) -> Result<Vec<SheetRow>, RosterError> {
    let mut lines = csv.trim().lines();
    let header_line = lines
        .next()
        .filter(|l| !l.trim().is_empty())
        .ok_or_else(|| RosterError::Parse("missing header row".to_string()))?;

    let headers: Vec<String> = header_line.split(',').map(|h| h.trim().to_string()).collect();

    let mut rows = Vec::new();
    for line in lines {
        if line.trim().is_empty() {
            continue;
        }
        let fields = split_fields(line);
        let mut row = SheetRow::with_capacity(headers.len());
        for (i, header) in headers.iter().enumerate() {
            let value = fields.get(i).map(|f| f.trim()).unwrap_or("");
            row.insert(header.clone(), value.to_string());
        }
        rows.push(row);
    }
    Ok(rows)
}

// Split one line on commas outside quotes, decoding "" to a literal quote.
fn split_fields(line: &str) -> Vec<String> {
    let mut out = Vec::new();
    let mut cur = String::new();
    let mut in_quotes = false;
    let mut chars = line.chars().peekable();

    while let Some(ch) = chars.next() {
        match ch {
            '"' => {
                if in_quotes && chars.peek() == Some(&'"') {
                    cur.push('"');
                    chars.next();
                } else {
                    in_quotes = !in_quotes;
                }
            }
            ',' if !in_quotes => {
                out.push(std::mem::take(&mut cur));
            }
            _ => cur.push(ch),
        }
    }
    out.push(cur);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_plain_rows() {
        let rows = parse_csv("name,category\nSophia Price,Fashion\nZophia,Lifestyle").unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0]["name"], "Sophia Price");
        assert_eq!(rows[1]["category"], "Lifestyle");
    }

    #[test]
    fn quoted_fields_keep_commas_and_escaped_quotes() {
        let rows = parse_csv("name,followers\n\"Jane \"\"J\"\" Doe\",100").unwrap();
        assert_eq!(rows[0]["name"], "Jane \"J\" Doe");
        assert_eq!(rows[0]["followers"], "100");

        let rows = parse_csv("name,location\n\"Price, Sophia\",Thailand").unwrap();
        assert_eq!(rows[0]["name"], "Price, Sophia");
    }

    #[test]
    fn short_rows_fill_missing_fields_with_empty() {
        let rows = parse_csv("name,category,location\nZophia").unwrap();
        assert_eq!(rows[0]["name"], "Zophia");
        assert_eq!(rows[0]["category"], "");
        assert_eq!(rows[0]["location"], "");
    }

    #[test]
    fn blank_body_lines_are_skipped() {
        let rows = parse_csv("name\nSophia Price\n\n   \nZophia\n").unwrap();
        assert_eq!(rows.len(), 2);
    }

    #[test]
    fn extra_columns_are_ignored() {
        let rows = parse_csv("name\nSophia Price,Fashion,Thailand").unwrap();
        assert_eq!(rows[0].len(), 1);
        assert_eq!(rows[0]["name"], "Sophia Price");
    }

    #[test]
    fn values_and_headers_are_trimmed() {
        let rows = parse_csv(" name , category \n Sophia Price , Fashion ").unwrap();
        assert_eq!(rows[0]["name"], "Sophia Price");
        assert_eq!(rows[0]["category"], "Fashion");
    }

    #[test]
    fn empty_input_is_a_parse_error() {
        assert!(matches!(parse_csv(""), Err(RosterError::Parse(_))));
        assert!(matches!(parse_csv("   \n  "), Err(RosterError::Parse(_))));
    }

    #[test]
    fn header_only_yields_no_rows() {
        let rows = parse_csv("name,category").unwrap();
        assert!(rows.is_empty());
    }
}
