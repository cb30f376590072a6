/// Non-negative monetary amount held as integral cents. Decimal places beyond
/// the second are discarded when parsing. Addition saturates at the largest
/// representable amount.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    serde::Serialize,
    serde::Deserialize,
)]
#[serde(from = "f64", into = "f64")]
pub struct Price(u64);

impl Price {
    pub const ZERO: Self = Self(0);

    pub const fn from_cents(cents: u64) -> Self {
        Self(cents)
    }

    /// Best-effort coercion of a spreadsheet cell. Every character other than
    /// a digit, `.` or `-` is dropped, then the longest leading decimal number
    /// is read. Anything unreadable, and any negative amount, yields zero.
    ///
    /// `"$1,234.50 AUD"` -> 1234.50, `"1.2.3"` -> 1.20, `"-5"` -> 0.
    pub fn coerce(s: &str) -> Self {
        let cleaned = s
            .chars()
            .filter(|c| c.is_ascii_digit() || *c == '.' || *c == '-')
            .collect::<String>();
        let (negative, rest) = match cleaned.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, cleaned.as_str()),
        };
        let whole_len = rest.find(|c: char| !c.is_ascii_digit()).unwrap_or(rest.len());
        let (whole, rest) = rest.split_at(whole_len);
        let frac = match rest.strip_prefix('.') {
            Some(tail) => {
                let frac_len = tail.find(|c: char| !c.is_ascii_digit()).unwrap_or(tail.len());
                &tail[..frac_len]
            }
            None => "",
        };
        if whole.is_empty() && frac.is_empty() {
            return Self::ZERO;
        }
        if negative {
            return Self::ZERO;
        }

        let mut cents = 0u64;
        for c in whole.bytes() {
            cents = match cents.checked_mul(10).and_then(|x| x.checked_add((c - b'0') as u64)) {
                Some(x) => x,
                None => return Self::ZERO,
            };
        }
        for c in frac.bytes().chain(std::iter::repeat(b'0')).take(2) {
            cents = match cents.checked_mul(10).and_then(|x| x.checked_add((c - b'0') as u64)) {
                Some(x) => x,
                None => return Self::ZERO,
            };
        }
        Self(cents)
    }

    /// Formats as a plain decimal number with no separators and no trailing
    /// zeros, e.g. `100`, `12.5`, `0.05`.
    pub fn to_plain_string(self) -> String {
        let whole = self.0 / 100;
        let frac = self.0 % 100;
        match (frac, frac % 10) {
            (0, _) => whole.to_string(),
            (_, 0) => format!("{}.{}", whole, frac / 10),
            _ => format!("{}.{:02}", whole, frac),
        }
    }
}

impl std::ops::Add for Price {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self(self.0.saturating_add(rhs.0))
    }
}

impl std::ops::AddAssign for Price {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl std::iter::Sum for Price {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, std::ops::Add::add)
    }
}

impl std::fmt::Display for Price {
    /// Formats with two decimal places and thousands separators.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut cents = self.0;
        let mut bytes = Vec::<u8>::new();
        macro_rules! pop_digit {
            () => {
                bytes.push(b'0' + (cents % 10) as u8);
                cents /= 10
            };
        }

        pop_digit!();
        pop_digit!();
        bytes.push(b'.');
        pop_digit!();
        let mut i = 1;
        while cents > 0 {
            if i % 3 == 0 {
                bytes.push(b',');
            }
            i += 1;
            pop_digit!();
        }
        bytes.reverse();
        let s = std::str::from_utf8(&bytes).map_err(|_| std::fmt::Error)?;
        f.write_str(s)
    }
}

impl From<f64> for Price {
    /// Rounds to the nearest cent. Negative and non-finite values become zero.
    fn from(value: f64) -> Self {
        if !value.is_finite() || value <= 0.0 {
            return Self::ZERO;
        }
        Self((value * 100.0).round() as u64)
    }
}

impl From<Price> for f64 {
    fn from(value: Price) -> Self {
        value.0 as f64 / 100.0
    }
}
