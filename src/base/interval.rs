use crate::base;

/// Date range with optional inclusive bounds. An unset bound does not
/// constrain anything.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Interval {
    pub start: Option<base::Date>,
    pub end: Option<base::Date>,
}

impl Interval {
    /// The unbounded interval.
    pub const ALL: Self = Self {
        start: None,
        end: None,
    };

    pub fn is_all(self) -> bool {
        self == Self::ALL
    }

    /// Checks a possibly-missing date against the bounds. A missing date
    /// sorts before every real date: it never satisfies a start bound but
    /// always satisfies an end bound, the same as comparing `""` against
    /// `yyyy-mm-dd` strings.
    pub fn contains(self, dt: Option<base::Date>) -> bool {
        self.start.is_none_or(|s| dt >= Some(s)) && self.end.is_none_or(|e| dt <= Some(e))
    }
}

impl std::fmt::Display for Interval {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if let Some(s) = self.start {
            write!(f, "{}", s)?;
        }
        f.write_str(":")?;
        if let Some(e) = self.end {
            write!(f, "{}", e)?;
        }
        Ok(())
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    #[error(transparent)]
    Date(#[from] base::date::ParseError),
    #[error("invalid left side")]
    Left(#[source] base::date::ParseError),
    #[error("invalid right side")]
    Right(#[source] base::date::ParseError),
}

impl std::str::FromStr for Interval {
    type Err = ParseError;

    /// Accepts `A:B`, where either side may be empty, or a single date `A`
    /// meaning `A:A`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.split_once(':') {
            Some((left, right)) => Ok(Self {
                start: match left {
                    "" => None,
                    _ => Some(left.parse().map_err(Self::Err::Left)?),
                },
                end: match right {
                    "" => None,
                    _ => Some(right.parse().map_err(Self::Err::Right)?),
                },
            }),
            None => {
                let dt = s.parse::<base::Date>()?;
                Ok(Self {
                    start: Some(dt),
                    end: Some(dt),
                })
            }
        }
    }
}

impl TryFrom<&str> for Interval {
    type Error = <Self as std::str::FromStr>::Err;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        value.parse::<Self>()
    }
}
