use crate::base;

/// Repository config.
#[derive(Debug, Clone, PartialEq, Eq, Default, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Config {
    pub use_colored_output: bool,
    pub use_unicode_symbols: bool,
    pub granularity: base::Granularity,
}

impl std::fmt::Display for Config {
    /// Writes a terminating newline.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = serde_json::to_string_pretty(self).map_err(|_| std::fmt::Error)?;
        writeln!(f, "{}", s)
    }
}

impl std::str::FromStr for Config {
    type Err = serde_json::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        serde_json::from_str(s)
    }
}

impl TryFrom<&str> for Config {
    type Error = <Self as std::str::FromStr>::Err;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        value.parse::<Self>()
    }
}

#[cfg(test)]
mod tests {
    use indoc::indoc;
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case("{}", Config::default())]
    #[case(
        r#"{"useUnicodeSymbols": true, "granularity": "quarter"}"#,
        Config {
            use_unicode_symbols: true,
            granularity: base::Granularity::Quarter,
            ..Default::default()
        }
    )]
    fn test_from_str(#[case] s: &str, #[case] want: Config) {
        assert_eq!(s.parse::<Config>().unwrap(), want);
    }

    #[test]
    fn test_display() {
        assert_eq!(
            Config::default().to_string(),
            indoc! {r#"
                {
                  "useColoredOutput": false,
                  "useUnicodeSymbols": false,
                  "granularity": "month"
                }
            "#}
        );
    }

    #[test]
    fn test_from_str_failing() {
        assert!(r#"{"granularity": "year"}"#.parse::<Config>().is_err());
    }
}
