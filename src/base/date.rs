/// A calendar day without time or timezone information. Always formats as
/// `yyyy-mm-dd`, so ordering dates is equivalent to ordering their string
/// representations.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, serde::Serialize, serde::Deserialize,
)]
#[serde(try_from = "String", into = "String")]
pub struct Date(time::Date);

impl Date {
    pub const fn new(inner: time::Date) -> Self {
        Self(inner)
    }

    pub fn from_ymd(year: i32, month: u8, day: u8) -> Option<Self> {
        let month = time::Month::try_from(month).ok()?;
        time::Date::from_calendar_date(year, month, day)
            .ok()
            .map(Self)
    }

    pub fn year(self) -> i32 {
        self.0.year()
    }

    pub fn month(self) -> u8 {
        self.0.month().into()
    }

    pub fn day(self) -> u8 {
        self.0.day()
    }

    /// One-based day of the year.
    pub fn ordinal(self) -> u16 {
        self.0.ordinal()
    }

    /// Zero for Sunday through six for Saturday.
    pub fn weekday_from_sunday(self) -> u8 {
        self.0.weekday().number_days_from_sunday()
    }

    /// Returns January 1st of this date's year.
    pub fn first_of_year(self) -> Self {
        Self(time::Date::from_ordinal_date(self.0.year(), 1).unwrap_or(self.0))
    }

    /// Parses the day portion of a timestamp. Anything from the first space
    /// or `T` onwards is ignored, so `2025-01-01T10:00:00Z` and
    /// `2025-01-01 10:00` both yield `2025-01-01`.
    pub fn from_timestamp(s: &str) -> Result<Self, ParseError> {
        let day = s.split([' ', 'T']).next().unwrap_or_default();
        day.parse()
    }
}

impl std::fmt::Display for Date {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let fmt = time::macros::format_description!("[year]-[month]-[day]");
        let s = self.0.format(fmt).map_err(|_| std::fmt::Error)?;
        f.write_str(&s)
    }
}

#[derive(Debug, thiserror::Error)]
#[error("invalid date '{input}', expected yyyy-mm-dd")]
pub struct ParseError {
    input: String,
    source: time::error::Parse,
}

impl std::str::FromStr for Date {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let fmt = time::macros::format_description!("[year]-[month]-[day]");
        time::Date::parse(s, fmt).map(Self).map_err(|e| ParseError {
            input: s.to_string(),
            source: e,
        })
    }
}

impl TryFrom<&str> for Date {
    type Error = <Self as std::str::FromStr>::Err;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        value.parse::<Self>()
    }
}

impl TryFrom<String> for Date {
    type Error = <Self as std::str::FromStr>::Err;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse::<Self>()
    }
}

impl From<Date> for String {
    fn from(value: Date) -> Self {
        value.to_string()
    }
}
