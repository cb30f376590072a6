use crate::base;
use crate::base::drilldown::{Event, Supplier, Tab};

pub const INTERVAL_HELP: &str = "Date interval of interest";
pub const INTERVAL_HELP_LONG: &str = "Date interval of interest

Must be in the format 'A:B'. Each of 'A' or 'B' is an ISO 8601 date (yyyy-mm-dd) and both are inclusive. Either side may be left empty to leave it unbounded. A single date 'A' is shorthand for 'A:A'.

Feedback without a date is never inside an interval with a start date.";

#[derive(clap::Args)]
pub struct FilterOpts {
    #[arg(
        default_value = ":",
        help = INTERVAL_HELP,
        long_help = INTERVAL_HELP_LONG,
    )]
    pub interval: base::Interval,

    /// Only include feedback from this supplier
    #[arg(short, long, value_name = "NAME")]
    pub supplier: Option<String>,

    /// Drill into a label, then a sub label, then a micro label
    ///
    /// Repeat to go deeper. Each occurrence selects a bar of the chart shown
    /// at the current depth.
    #[arg(short = 'D', long, value_name = "NAME")]
    pub drill: Vec<String>,

    /// Rank suppliers instead of charting labels
    #[arg(long)]
    pub by_supplier: bool,
}

#[derive(clap::Args)]
pub struct PageOpts {
    /// Page of the feedback list to show, starting at 1
    ///
    /// Pages past the last one show the last page.
    #[arg(short, long, default_value_t = 1)]
    pub page: usize,
}

impl FilterOpts {
    /// Returns the dashboard events these options stand for, in the order a
    /// user would click through them.
    pub fn events(&self) -> Vec<Event> {
        let supplier = self
            .supplier
            .as_deref()
            .map(|s| Event::SelectSupplier(Supplier::from(s)));
        let drill = self.drill.iter().map(|s| Event::SelectBar(s.clone()));
        let tab = self.by_supplier.then_some(Event::SwitchTab(Tab::Suppliers));
        supplier
            .into_iter()
            .chain(drill)
            .chain(tab)
            .chain(std::iter::once(Event::SetInterval(self.interval)))
            .collect()
    }
}
