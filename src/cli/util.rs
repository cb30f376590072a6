use crate::base;
use crate::base::drilldown::{FilterState, Supplier, Tab};
use crate::cli::Output;

pub fn charset_from_config(config: &base::Config) -> base::Charset {
    let mut charset = base::Charset::default();
    if config.use_unicode_symbols {
        charset = charset.with_unicode()
    }
    if config.use_colored_output {
        charset = charset.with_color()
    }
    charset
}

pub fn term_width() -> usize {
    terminal_size::terminal_size()
        .map(|(w, _)| w.0)
        .unwrap_or_default() as usize
}

pub const DEMO_BANNER: &str =
    "Demo mode: showing sample data. Import a file or set an access token to load the sheet.";

/// Returns the demo banner if the dashboard is still showing sample data.
pub fn banner(db: &base::session::Dashboard) -> Option<Output> {
    db.is_demo().then(|| Output::Str(DEMO_BANNER.to_string()))
}

/// Describes where the filter state sits, e.g. `All suppliers > Pricing >
/// Price History`.
pub fn breadcrumb(st: &FilterState, charset: &base::Charset) -> String {
    let supplier = match st.supplier() {
        Supplier::All => "All suppliers".to_string(),
        Supplier::Named(s) => s.clone(),
    };
    let rest = match st.tab() {
        Tab::Suppliers => vec!["Supplier ranking"],
        Tab::Categories => match st.path() {
            path if path.is_empty() => vec!["All labels"],
            path => path,
        },
    };
    std::iter::once(supplier.as_str())
        .chain(rest)
        .collect::<Vec<_>>()
        .join(charset.crumb_sep)
}
