use crate::base;

/// Width of a timeline bucket.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    strum::EnumString,
    strum::Display,
    serde::Serialize,
    serde::Deserialize,
)]
#[strum(ascii_case_insensitive, serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum Granularity {
    Day,
    Week,
    #[default]
    Month,
    Quarter,
}

/// A span of dates that records are counted under. Buckets of the same
/// granularity order chronologically.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Bucket {
    Day(base::Date),
    Week { year: i32, week: u8 },
    Month { year: i32, month: u8 },
    Quarter { year: i32, quarter: u8 },
}

impl Bucket {
    pub fn new(dt: base::Date, granularity: Granularity) -> Self {
        match granularity {
            Granularity::Day => Bucket::Day(dt),
            Granularity::Week => Bucket::Week {
                year: dt.year(),
                week: week_of_year(dt),
            },
            Granularity::Month => Bucket::Month {
                year: dt.year(),
                month: dt.month(),
            },
            Granularity::Quarter => Bucket::Quarter {
                year: dt.year(),
                quarter: (dt.month() - 1) / 3 + 1,
            },
        }
    }
}

/// Week number counting Sunday-started weeks, where the week holding January
/// 1st is week 1.
fn week_of_year(dt: base::Date) -> u8 {
    let days = dt.ordinal() + dt.first_of_year().weekday_from_sunday() as u16;
    days.div_ceil(7) as u8
}

impl std::fmt::Display for Bucket {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Bucket::Day(dt) => write!(f, "{}", dt),
            Bucket::Week { year, week } => write!(f, "W{:02} {:02}", week, year.rem_euclid(100)),
            Bucket::Month { year, month } => write!(f, "{:04}-{:02}", year, month),
            Bucket::Quarter { year, quarter } => {
                write!(f, "Q{} {:02}", quarter, year.rem_euclid(100))
            }
        }
    }
}

/// Counts the filtered records per bucket, earliest bucket first. Records
/// without a date are left out.
pub fn timeline(filtered: &base::Recordlist, granularity: Granularity) -> Vec<(Bucket, usize)> {
    let agg = filtered
        .iter()
        .filter_map(base::Record::date)
        .map(|dt| (Bucket::new(dt, granularity), 1))
        .collect::<base::Aggregate<_, usize>>();
    let mut v = agg.iter().collect::<Vec<_>>();
    v.sort_by_key(|(b, _)| *b);
    v
}
