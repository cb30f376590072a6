use strum::IntoEnumIterator;

use crate::base;
use crate::base::schema::Field;

/// Remote spreadsheet the collection is loaded from and mirrored to. The
/// table is a grid of strings whose first row is the header.
pub trait Gateway {
    fn fetch(&self, token: &str) -> Result<Vec<Vec<String>>, GatewayError>;

    /// Replaces the whole remote table with `records` under the fixed header.
    fn save(&self, token: &str, records: &base::Recordlist) -> Result<(), GatewayError>;
}

#[derive(Debug, thiserror::Error)]
pub enum GatewayError {
    #[error("missing or invalid access token")]
    Unauthorized,
    #[error("failed to fetch sheet")]
    Fetch(#[source] Box<dyn std::error::Error + Send + Sync>),
    #[error("failed to save sheet")]
    Save(#[source] Box<dyn std::error::Error + Send + Sync>),
}

/// Lays out records for saving: the fixed header row, then one row per
/// record. Prices are plain numbers and a missing date or link is blank.
pub fn to_rows(rl: &base::Recordlist) -> Vec<Vec<String>> {
    let header = Field::iter().map(|f| f.header().to_string()).collect();
    let rows = rl.iter().map(|r| {
        Field::iter()
            .map(|f| match f {
                Field::Date => r.date().map(|d| d.to_string()).unwrap_or_default(),
                Field::Supplier => r.supplier().to_string(),
                Field::Label => r.category().label().to_string(),
                Field::SubLabel => r.category().sub_label().to_string(),
                Field::MicroLabel => r.category().micro_label().to_string(),
                Field::Price => r.price().to_plain_string(),
                Field::Message => r.message().to_string(),
                Field::Link => r.link().unwrap_or_default().to_string(),
            })
            .collect()
    });
    std::iter::once(header).chain(rows).collect()
}

/// A spreadsheet kept as a CSV file.
#[derive(Debug, Clone, Default, PartialEq, Eq, derive_more::From, derive_more::Into)]
pub struct Sheet(pub Vec<Vec<String>>);

impl std::fmt::Display for Sheet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut w = csv::WriterBuilder::new()
            .flexible(true)
            .from_writer(Vec::new());
        for row in self.0.iter() {
            w.write_record(row).map_err(|_| std::fmt::Error)?;
        }
        let bytes = w.into_inner().map_err(|_| std::fmt::Error)?;
        let s = std::str::from_utf8(&bytes).map_err(|_| std::fmt::Error)?;
        f.write_str(s)
    }
}

impl std::str::FromStr for Sheet {
    type Err = csv::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        csv::ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .from_reader(s.as_bytes())
            .records()
            .map(|rec| rec.map(|r| r.iter().map(str::to_string).collect()))
            .collect::<Result<_, _>>()
            .map(Self)
    }
}

impl TryFrom<&str> for Sheet {
    type Error = <Self as std::str::FromStr>::Err;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        value.parse::<Self>()
    }
}

/// The sheet is a file in the repository directory. Any non-empty token is
/// accepted.
impl Gateway for base::Fs {
    fn fetch(&self, token: &str) -> Result<Vec<Vec<String>>, GatewayError> {
        if token.trim().is_empty() {
            return Err(GatewayError::Unauthorized);
        }
        let sheet = self
            .read::<Sheet>()
            .map_err(|e| GatewayError::Fetch(Box::new(e)))?;
        Ok(sheet.into())
    }

    fn save(&self, token: &str, records: &base::Recordlist) -> Result<(), GatewayError> {
        if token.trim().is_empty() {
            return Err(GatewayError::Unauthorized);
        }
        self.write(&Sheet::from(to_rows(records)))
            .map_err(|e| GatewayError::Save(Box::new(e)))
    }
}
