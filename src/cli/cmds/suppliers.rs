use crate::base;
use crate::cli;
use crate::cli::util;

/// View unique suppliers
#[derive(clap::Parser)]
pub struct Suppliers {
    /// Wildcard patterns to match suppliers of interest
    ///
    /// If multiple patterns are provided, include suppliers that match any
    /// pattern. Matching is case-sensitive.
    #[arg(default_value = "*")]
    patterns: Vec<String>,
}

impl Suppliers {
    pub fn run(&self, db: base::session::Dashboard) -> anyhow::Result<cli::Output> {
        let patterns = self
            .patterns
            .iter()
            .map(|s| wildmatch::WildMatch::new(s))
            .collect::<Vec<_>>();
        let names = db
            .records()
            .suppliers()
            .into_iter()
            .filter(|name| patterns.iter().any(|p| p.matches(name)))
            .collect::<Vec<_>>();
        let list = if names.is_empty() {
            cli::Output::Str("No suppliers.".to_string())
        } else {
            cli::Output::Str(names.join("\n"))
        };
        Ok(cli::Output::Many(
            util::banner(&db).into_iter().chain([list]).collect(),
        ))
    }
}
