use crate::base;

/// Horizontal bar chart of counts, one labeled row per entry.
pub struct Barchart {
    charset: base::Charset,
    rows: Vec<(String, usize)>,
    label_charlen: usize,
    max_val: usize,
    max_barlen: usize,
}

#[derive(Debug, PartialEq, Eq)]
pub struct Config {
    pub charset: base::Charset,
    pub term_width: usize,
    pub rows: Vec<(String, usize)>,
}

impl Config {
    pub fn to_barchart(&self) -> Barchart {
        let rows = self
            .rows
            .iter()
            .map(|(label, n)| {
                let label =
                    base::util::truncate(label, base::util::MAX_LABEL_CHARLEN, self.charset.ellipsis);
                (label, *n)
            })
            .collect::<Vec<_>>();
        let label_charlen = rows
            .iter()
            .map(|(label, _)| label.chars().count())
            .max()
            .unwrap_or_default();
        let max_val = rows.iter().map(|(_, n)| *n).max().unwrap_or_default();
        let max_barlen = self.term_width.max(base::util::MIN_TERM_WIDTH)
            - label_charlen // max 32
            - base::util::BOUNDING_SPACES_COUNT
            - 1 // vertical divider just before bar
            - base::util::count_digits(max_val as u64); // max 20

        Barchart {
            charset: self.charset.clone(),
            rows,
            label_charlen,
            max_val,
            max_barlen,
        }
    }
}

impl Barchart {
    fn barlen(&self, val: usize) -> usize {
        if self.max_val == 0 {
            return 0;
        }
        let x = (val as f64) / (self.max_val as f64) * (self.max_barlen as f64);
        self.max_barlen.min(x.round() as usize)
    }

    fn draw(&self, w: &mut impl std::fmt::Write, label: &str, val: usize) -> std::fmt::Result {
        let pad = self.label_charlen - label.chars().count();
        write!(w, "{}{} {}", label, " ".repeat(pad), self.charset.chart_axis)?;
        let barlen = self.barlen(val);
        if barlen > 0 {
            let mut bars = self.charset.chart_bar.to_string().repeat(barlen);
            if self.charset.color {
                bars = colored::Colorize::green(bars.as_str()).to_string();
            }
            w.write_str(&bars)?;
            w.write_char(' ')?;
        }
        writeln!(w, "{}", val)
    }
}

impl std::fmt::Display for Barchart {
    /// Writes a terminating newline after every row. Writes nothing when
    /// there are no rows.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (label, val) in self.rows.iter() {
            self.draw(f, label, *val)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use indoc::indoc;
    use rstest::rstest;

    use super::*;

    fn rows(v: &[(&str, usize)]) -> Vec<(String, usize)> {
        v.iter().map(|(s, n)| (s.to_string(), *n)).collect()
    }

    #[rstest]
    #[case(&[], "")]
    #[case(&[("Pricing", 4), ("Picking & Warehouse", 2), ("Logistics", 1)], indoc!("
        Pricing             |##################################### 4
        Picking & Warehouse |################### 2
        Logistics           |######### 1
    "))]
    #[case(&[("Q1 25", 10), ("Q2 25", 0)], indoc!("
        Q1 25 |################################################## 10
        Q2 25 |0
    "))]
    #[case(&[("Logistics (Delivery & Runs) - Multiple", 1)], indoc!("
        Logistics (Delivery & Runs) -... |######################## 1
    "))]
    fn test_barchart(#[case] data: &[(&str, usize)], #[case] want: &str) {
        let config = Config {
            charset: base::Charset::default(),
            term_width: 60,
            rows: rows(data),
        };
        assert_eq!(config.to_barchart().to_string(), want)
    }

    #[test]
    fn test_unicode() {
        let config = Config {
            charset: base::Charset::default().with_unicode(),
            term_width: 0,
            rows: rows(&[("a", 2), ("bb", 1)]),
        };
        let got = config.to_barchart().to_string();
        let first = got.lines().next().unwrap();
        assert!(first.starts_with("a  \u{2502}\u{2588}"));
        assert!(first.ends_with("\u{2588} 2"));
    }
}
