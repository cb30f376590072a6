pub const BOUNDING_SPACES_COUNT: usize = 2;
pub const MIN_TERM_WIDTH: usize = 60;
/// Longest chart label before it gets cut short.
pub const MAX_LABEL_CHARLEN: usize = 32;

pub const fn count_digits(n: u64) -> usize {
    if n >= 10000000000000000000 {
        return 20;
    }
    let mut count = 1;
    let mut ceil = 10;
    while n >= ceil {
        ceil *= 10;
        count += 1;
    }
    count
}

/// Cuts `s` down to at most `max` chars, ending it with `ellipsis` if
/// anything was dropped.
pub fn truncate(s: &str, max: usize, ellipsis: &str) -> String {
    if s.chars().count() <= max {
        return s.to_string();
    }
    let keep = max.saturating_sub(ellipsis.chars().count());
    let mut out = s.chars().take(keep).collect::<String>();
    out.push_str(ellipsis);
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(0, 1)]
    #[case(9, 1)]
    #[case(10, 2)]
    #[case(1234, 4)]
    #[case(u64::MAX, 20)]
    #[case(u64::MAX / 10, 19)]
    fn test_count_digits(#[case] n: u64, #[case] want: usize) {
        assert_eq!(count_digits(n), want)
    }

    #[rstest]
    #[case("Pricing", 10, "...", "Pricing")]
    #[case("Picking & Warehouse", 10, "...", "Picking...")]
    #[case("Picking & Warehouse", 10, "\u{2026}", "Picking &\u{2026}")]
    #[case("abc", 2, "...", "...")]
    fn test_truncate(#[case] s: &str, #[case] max: usize, #[case] ellipsis: &str, #[case] want: &str) {
        assert_eq!(truncate(s, max, ellipsis), want)
    }
}
