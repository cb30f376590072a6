use crate::base;

/// A single normalized feedback item. Immutable once built.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Record {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    date: Option<base::Date>,
    supplier: String,
    #[serde(flatten)]
    category: base::Category,
    #[serde(default)]
    price: base::Price,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    link: Option<String>,
}

impl Record {
    pub const UNKNOWN_SUPPLIER: &str = "Unknown";

    /// Builds a record. A blank supplier becomes [`Self::UNKNOWN_SUPPLIER`] and
    /// a blank link is dropped.
    pub fn new(
        date: Option<base::Date>,
        supplier: &str,
        category: base::Category,
        price: base::Price,
        message: String,
        link: Option<String>,
    ) -> Self {
        let supplier = match supplier.trim() {
            "" => Self::UNKNOWN_SUPPLIER.to_string(),
            s => s.to_string(),
        };
        Self {
            date,
            supplier,
            category,
            price,
            message,
            link: link.filter(|s| !s.trim().is_empty()),
        }
    }

    pub fn date(&self) -> Option<base::Date> {
        self.date
    }

    pub fn supplier(&self) -> &str {
        &self.supplier
    }

    pub fn category(&self) -> &base::Category {
        &self.category
    }

    pub fn price(&self) -> base::Price {
        self.price
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn link(&self) -> Option<&str> {
        self.link.as_deref()
    }
}

impl std::fmt::Display for Record {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = serde_json::to_string(self).map_err(|_| std::fmt::Error)?;
        f.write_str(&s)
    }
}

impl std::str::FromStr for Record {
    type Err = serde_json::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        serde_json::from_str(s)
    }
}

impl TryFrom<&str> for Record {
    type Error = <Self as std::str::FromStr>::Err;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        value.parse::<Self>()
    }
}
