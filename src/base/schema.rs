use strum::IntoEnumIterator;

/// Canonical feedback fields that columns are mapped onto.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::EnumIter, strum::EnumCount)]
pub enum Field {
    Date,
    Supplier,
    Label,
    SubLabel,
    MicroLabel,
    Price,
    Message,
    Link,
}

impl Field {
    /// Column title written when saving.
    pub fn header(self) -> &'static str {
        match self {
            Field::Date => "Date",
            Field::Supplier => "Supplier Name",
            Field::Label => "Label",
            Field::SubLabel => "Sub Label",
            Field::MicroLabel => "Micro Label",
            Field::Price => "Price",
            Field::Message => "Message",
            Field::Link => "Link",
        }
    }

    /// Lower-case header names accepted for this field.
    pub fn aliases(self) -> &'static [&'static str] {
        match self {
            Field::Date => &["date (utc)", "date", "feedback date"],
            Field::Supplier => &[
                "supplier name (filled)",
                "report company (matched)",
                "supplier name",
                "supplier",
                "company",
            ],
            Field::Label => &["label", "theme", "category"],
            Field::SubLabel => &["sub label", "sub-label", "sub-theme", "sub theme", "sub"],
            Field::MicroLabel => &["micro label", "micro-label", "micro-theme", "micro theme", "micro"],
            Field::Price => &[
                "subscription amount (converted) aud sum (matched)",
                "price",
                "value",
                "amount",
            ],
            Field::Message => &["message", "feedback", "verbatim"],
            Field::Link => &["message link", "link", "url", "hyperlink"],
        }
    }

    /// Order in which fields claim columns by substring. Fields whose headers
    /// contain another field's alias ("sub label" contains "label", "message
    /// link" contains "message", "subscription amount" contains "sub") go
    /// first.
    const SUBSTRING_ORDER: [Field; 8] = [
        Field::Date,
        Field::Supplier,
        Field::Price,
        Field::MicroLabel,
        Field::SubLabel,
        Field::Label,
        Field::Link,
        Field::Message,
    ];
}

/// Where a table came from. Only file imports get index column detection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Source {
    File,
    Remote,
}

/// Resolved column index for each [`Field`], plus an offset applied to every
/// index when the data rows carry an unlabeled leading index column.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Columns {
    indices: [Option<usize>; <Field as strum::EnumCount>::COUNT],
    offset: usize,
}

impl Columns {
    /// Resolves columns from a header row. Matching is case-insensitive and
    /// happens in two passes: first every field looks for a header equal to
    /// one of its aliases, then unresolved fields look for a header containing
    /// one of their aliases. A column is claimed by at most one field.
    pub fn resolve<S>(header: &[S]) -> Self
    where
        S: AsRef<str>,
    {
        let header = header
            .iter()
            .map(|h| h.as_ref().trim().to_lowercase())
            .collect::<Vec<_>>();
        let mut cols = Self::default();
        let mut claimed = vec![false; header.len()];

        for field in Field::iter() {
            let found = header
                .iter()
                .enumerate()
                .find(|(i, h)| !claimed[*i] && field.aliases().contains(&h.as_str()));
            if let Some((i, _)) = found {
                claimed[i] = true;
                cols.indices[field as usize] = Some(i);
            }
        }
        for field in Field::SUBSTRING_ORDER {
            if cols.indices[field as usize].is_some() {
                continue;
            }
            let found = header.iter().enumerate().find(|(i, h)| {
                !claimed[*i] && field.aliases().iter().any(|a| h.contains(*a))
            });
            if let Some((i, _)) = found {
                claimed[i] = true;
                cols.indices[field as usize] = Some(i);
            }
        }

        for field in Field::iter().filter(|f| cols.indices[*f as usize].is_none()) {
            tracing::debug!(?field, "no column found, values will be defaulted");
        }
        cols
    }

    /// Returns the resolved, unshifted column index of `field`.
    pub fn index(&self, field: Field) -> Option<usize> {
        self.indices[field as usize]
    }

    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Shifts every column right by one if `first_row` looks like it starts
    /// with an unlabeled index column: the cell under the date header is a
    /// bare non-negative integer and the cell after it looks like a date.
    pub fn detect_offset<S>(mut self, first_row: &[S]) -> Self
    where
        S: AsRef<str>,
    {
        let Some(i) = self.index(Field::Date) else {
            return self;
        };
        let cell = first_row.get(i).map(|s| s.as_ref()).unwrap_or_default();
        let next = first_row.get(i + 1).map(|s| s.as_ref()).unwrap_or_default();
        let is_index = !cell.is_empty() && cell.bytes().all(|b| b.is_ascii_digit());
        let next_is_date = next.contains("202") || next.contains('/');
        if is_index && next_is_date {
            tracing::info!("detected leading index column, shifting columns by one");
            self.offset = 1;
        }
        self
    }

    /// Returns the non-empty cell holding `field` in `row`.
    pub fn get<'a, S>(&self, field: Field, row: &'a [S]) -> Option<&'a str>
    where
        S: AsRef<str>,
    {
        let i = self.index(field)? + self.offset;
        row.get(i)
            .map(|s| s.as_ref())
            .filter(|s| !s.is_empty())
    }
}

/// Resolves columns for a table from `source`.
pub fn map<S>(header: &[S], first_row: Option<&[S]>, source: Source) -> Columns
where
    S: AsRef<str>,
{
    let cols = Columns::resolve(header);
    match (source, first_row) {
        (Source::File, Some(row)) => cols.detect_offset(row),
        _ => cols,
    }
}
