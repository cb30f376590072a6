/// Cell separator of a delimited text export.
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::Display)]
#[strum(serialize_all = "lowercase")]
pub enum Delimiter {
    Comma,
    Tab,
}

impl Delimiter {
    pub fn as_char(self) -> char {
        match self {
            Delimiter::Comma => ',',
            Delimiter::Tab => '\t',
        }
    }

    /// Picks tab if the line has strictly more tabs than commas, else comma.
    pub fn detect(line: &str) -> Self {
        let commas = line.matches(',').count();
        let tabs = line.matches('\t').count();
        if tabs > commas {
            Delimiter::Tab
        } else {
            Delimiter::Comma
        }
    }

    /// Splits one line into trimmed cells.
    ///
    /// A double quote toggles quoted mode and is itself dropped; the delimiter
    /// only separates cells outside quoted mode. Lines are split before
    /// tokenizing, so a quoted cell cannot span lines.
    pub fn tokenize(self, line: &str) -> Vec<String> {
        let delimiter = self.as_char();
        let mut cells = Vec::new();
        let mut cell = String::new();
        let mut quoted = false;
        for c in line.chars() {
            if c == '"' {
                quoted = !quoted;
            } else if c == delimiter && !quoted {
                cells.push(std::mem::take(&mut cell));
            } else {
                cell.push(c);
            }
        }
        cells.push(cell);
        cells.into_iter().map(|c| c.trim().to_string()).collect()
    }
}

/// A header row plus at least one data row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Table {
    pub header: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl Table {
    /// Builds a table from a grid whose first row is the header. Returns
    /// `None` unless there is a header and at least one data row.
    pub fn from_grid(mut grid: Vec<Vec<String>>) -> Option<Self> {
        if grid.len() < 2 {
            return None;
        }
        let rows = grid.split_off(1);
        let header = grid.pop()?;
        Some(Self { header, rows })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("expected a header and at least one data row, found {0} non-blank line(s)")]
pub struct ParseError(pub usize);

/// Parses comma- or tab-delimited text. The delimiter is detected from the
/// first non-blank line and used for every line. Blank lines are ignored.
///
/// Data lines are trimmed before tokenizing but the header line is not, so a
/// header that starts with an empty cell keeps it.
pub fn parse(text: &str) -> Result<Table, ParseError> {
    let lines = text
        .split('\n')
        .filter(|l| !l.trim().is_empty())
        .collect::<Vec<_>>();
    let (header_line, data_lines) = match lines.split_first() {
        Some((first, rest)) if !rest.is_empty() => (first, rest),
        _ => return Err(ParseError(lines.len())),
    };

    let delimiter = Delimiter::detect(header_line);
    tracing::debug!(%delimiter, rows = data_lines.len(), "parsing delimited text");
    Ok(Table {
        header: delimiter.tokenize(header_line),
        rows: data_lines
            .iter()
            .map(|l| delimiter.tokenize(l.trim()))
            .collect(),
    })
}

#[cfg(test)]
mod tests {
    use indoc::indoc;
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case("a,b,c", Delimiter::Comma)]
    #[case("a\tb\tc", Delimiter::Tab)]
    #[case("a\tb,c", Delimiter::Comma)]
    #[case("a\tb\tc,d", Delimiter::Tab)]
    #[case("abc", Delimiter::Comma)]
    fn test_detect(#[case] line: &str, #[case] want: Delimiter) {
        assert_eq!(Delimiter::detect(line), want)
    }

    #[rstest]
    #[case(Delimiter::Comma, "a,b,c", &["a", "b", "c"])]
    #[case(Delimiter::Comma, " a , b ,c ", &["a", "b", "c"])]
    #[case(Delimiter::Comma, r#""a, b",c"#, &["a, b", "c"])]
    #[case(Delimiter::Comma, r#"  "a"  ,"""#, &["a", ""])]
    #[case(Delimiter::Comma, "a,,", &["a", "", ""])]
    #[case(Delimiter::Comma, "", &[""])]
    #[case(Delimiter::Tab, "a, b\tc", &["a, b", "c"])]
    #[case(Delimiter::Tab, "\"x\ty\"\tz", &["x\ty", "z"])]
    fn test_tokenize(#[case] delimiter: Delimiter, #[case] line: &str, #[case] want: &[&str]) {
        assert_eq!(delimiter.tokenize(line), want)
    }

    #[test]
    fn test_parse() {
        let text = indoc! {r#"
            Date,Supplier Name,Message

            2025-01-01,Acme,"Hello, world"

            2025-01-02,Parisi,Bye
        "#};
        let table = parse(text).unwrap();
        assert_eq!(table.header, ["Date", "Supplier Name", "Message"]);
        assert_eq!(
            table.rows,
            [
                ["2025-01-01", "Acme", "Hello, world"],
                ["2025-01-02", "Parisi", "Bye"],
            ]
        );
    }

    #[test]
    fn test_parse_crlf_tabs() {
        let text = "Date\tLabel\r\n2025-01-01\tPricing, misc\r\n";
        let table = parse(text).unwrap();
        assert_eq!(table.header, ["Date", "Label"]);
        assert_eq!(table.rows, [["2025-01-01", "Pricing, misc"]]);
    }

    #[test]
    fn test_parse_keeps_leading_empty_header_cell() {
        let text = "\tDate\tLabel\n0\t2025-01-01\tPricing\n";
        let table = parse(text).unwrap();
        assert_eq!(table.header, ["", "Date", "Label"]);
        assert_eq!(table.rows, [["0", "2025-01-01", "Pricing"]]);
    }

    #[rstest]
    #[case("", 0)]
    #[case("\n \n\t\n", 0)]
    #[case("Date,Label\n\n", 1)]
    fn test_parse_failing(#[case] text: &str, #[case] lines: usize) {
        assert_eq!(parse(text), Err(ParseError(lines)))
    }

    #[rstest]
    #[case(vec![], None)]
    #[case(vec![vec!["h".to_string()]], None)]
    #[case(
        vec![vec!["h".to_string()], vec!["v".to_string()]],
        Some(Table { header: vec!["h".to_string()], rows: vec![vec!["v".to_string()]] })
    )]
    fn test_from_grid(#[case] grid: Vec<Vec<String>>, #[case] want: Option<Table>) {
        assert_eq!(Table::from_grid(grid), want)
    }
}
