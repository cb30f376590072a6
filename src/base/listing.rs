use crate::base;

const INDENT: &str = "  ";

/// Detail list of the records on one page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Listing {
    pub charset: base::Charset,
    pub records: base::Recordlist,
    pub pager: base::Pager,
}

impl Listing {
    fn draw(&self, w: &mut impl std::fmt::Write, r: &base::Record) -> std::fmt::Result {
        let date = match r.date() {
            Some(dt) => dt.to_string(),
            None => self.charset.dash.to_string().repeat(10),
        };
        let supplier = match self.charset.color {
            true => colored::Colorize::bold(r.supplier()).to_string(),
            false => r.supplier().to_string(),
        };
        writeln!(w, "{}  {}  {}", date, supplier, r.price())?;

        let cat = r.category();
        writeln!(
            w,
            "{}{}{}{}{}{}",
            INDENT,
            cat.label(),
            self.charset.crumb_sep,
            cat.sub_label(),
            self.charset.crumb_sep,
            cat.micro_label()
        )?;
        for line in r.message().lines().filter(|l| !l.trim().is_empty()) {
            writeln!(w, "{}{}", INDENT, line.trim_end())?;
        }
        if let Some(link) = r.link() {
            writeln!(w, "{}{}", INDENT, link)?;
        }
        Ok(())
    }
}

impl std::fmt::Display for Listing {
    /// Records are separated by a blank line and followed by the page
    /// position. Writes a terminating newline.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.records.is_empty() {
            return writeln!(f, "No feedback matches the current filters.");
        }
        for r in self.records.iter() {
            self.draw(f, r)?;
            writeln!(f)?;
        }
        writeln!(f, "{}", self.pager)
    }
}
