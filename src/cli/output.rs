use crate::base;

/// Output of a successful command invocation, to be written to stdout.
#[derive(Debug, PartialEq, Eq)]
pub enum Output {
    Str(String),
    Kpis(base::stats::Kpis),
    Barchart(base::barchart::Config),
    Listing(base::Listing),
    /// Several outputs, written in order.
    Many(Vec<Output>),
}

impl std::fmt::Display for Output {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Output::Str(s) => {
                if s.ends_with('\n') {
                    write!(f, "{}", s)
                } else {
                    writeln!(f, "{}", s)
                }
            }
            Output::Kpis(kpis) => write!(f, "{}", kpis),
            Output::Barchart(config) => {
                if config.rows.is_empty() {
                    writeln!(f, "No feedback.")
                } else {
                    write!(f, "{}", config.to_barchart())
                }
            }
            Output::Listing(listing) => write!(f, "{}", listing),
            Output::Many(outputs) => outputs.iter().try_for_each(|o| write!(f, "{}", o)),
        }
    }
}
