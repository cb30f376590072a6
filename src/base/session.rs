use crate::base;
use crate::base::drilldown::{Event, FilterState};

/// What happened to the remote mirror after an import.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mirror {
    /// No gateway or token was available.
    Skipped,
    Saved,
    /// The local import stands regardless.
    Failed(String),
}

/// Outcome of a successful import.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Imported {
    pub count: usize,
    pub mirror: Mirror,
}

/// Everything derived from the collection and filter state for one render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct View {
    pub filtered: base::Recordlist,
    pub bars: Vec<base::stats::Bar>,
    pub timeline: Vec<(base::Bucket, usize)>,
    pub kpis: base::stats::Kpis,
    pub pager: base::Pager,
    /// Records on the current page.
    pub page: base::Recordlist,
    /// Suppliers of the whole collection, ignoring the filter.
    pub suppliers: Vec<String>,
}

/// One user's dashboard: the collection, the filter state, and the current
/// page. Derived data is recomputed from these by [`Dashboard::view`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dashboard {
    records: base::Recordlist,
    demo: bool,
    state: FilterState,
    page: usize,
}

impl Default for Dashboard {
    fn default() -> Self {
        Self::new()
    }
}

impl Dashboard {
    /// Starts in demo mode on the embedded sample.
    pub fn new() -> Self {
        Self {
            records: base::sample::sample(),
            demo: true,
            state: FilterState::default(),
            page: 1,
        }
    }

    pub fn records(&self) -> &base::Recordlist {
        &self.records
    }

    pub fn state(&self) -> &FilterState {
        &self.state
    }

    pub fn is_demo(&self) -> bool {
        self.demo
    }

    /// Replaces the collection with the records in a delimited `text`. On
    /// success the filter state and page are reset and, when `mirror` is
    /// given, the new collection is saved through it. A failed save is
    /// reported but does not undo the import.
    ///
    /// Text without a header and a data row is rejected and leaves the
    /// dashboard untouched.
    pub fn import_text(
        &mut self,
        text: &str,
        mirror: Option<(&dyn base::Gateway, &str)>,
    ) -> Result<Imported, base::parser::ParseError> {
        let table = base::parser::parse(text)?;
        let rl = base::normalize::normalize_table(&table, base::Source::File);
        let count = rl.len();
        if rl.is_empty() {
            tracing::info!("import produced no records, keeping current collection");
            return Ok(Imported {
                count,
                mirror: Mirror::Skipped,
            });
        }
        self.replace(rl);
        self.state = FilterState::default();
        self.page = 1;

        let mirror = match mirror {
            None => Mirror::Skipped,
            Some((gw, token)) => match gw.save(token, &self.records) {
                Ok(()) => Mirror::Saved,
                Err(e) => {
                    tracing::warn!(error = %e, "failed to mirror import");
                    Mirror::Failed(error_chain(&e))
                }
            },
        };
        Ok(Imported { count, mirror })
    }

    /// Replaces the collection with the gateway's table. The filter state is
    /// kept. A failed fetch, or a table with no records, leaves the current
    /// collection in place; the number of records loaded is returned.
    pub fn load_remote(
        &mut self,
        gw: &dyn base::Gateway,
        token: &str,
    ) -> Result<usize, base::GatewayError> {
        let rows = gw.fetch(token).inspect_err(|e| {
            tracing::error!(error = %e, "failed to fetch remote sheet");
        })?;
        let rl = match base::Table::from_grid(rows) {
            Some(table) => base::normalize::normalize_table(&table, base::Source::Remote),
            None => base::Recordlist::new(),
        };
        let count = rl.len();
        if count > 0 {
            self.replace(rl);
            self.page = 1;
        } else {
            tracing::info!("remote sheet is empty, keeping current collection");
        }
        Ok(count)
    }

    /// Applies a filter event and returns to the first page.
    pub fn dispatch(&mut self, event: Event) {
        self.state = std::mem::take(&mut self.state).apply(event);
        self.page = 1;
    }

    pub fn next_page(&mut self) {
        self.page = self.pager().next().page();
    }

    pub fn prev_page(&mut self) {
        self.page = self.pager().prev().page();
    }

    /// Moves to `page`, clamped to the pages that exist.
    pub fn goto_page(&mut self, page: usize) {
        self.page = self.pager().goto(page).page();
    }

    /// Recomputes the filtered set, then the charts, the KPIs, and the
    /// current page, in that order.
    pub fn view(&self, granularity: base::Granularity) -> View {
        let filtered = base::filter::filter(&self.records, &self.state);
        let bars = base::stats::bars(&filtered, &self.state);
        let timeline = base::timeline::timeline(&filtered, granularity);
        let kpis = base::stats::Kpis::new(&filtered);
        let pager = base::Pager::new(filtered.len()).goto(self.page);
        let page = pager.slice(filtered.as_slice()).iter().collect();
        let suppliers = self
            .records
            .suppliers()
            .into_iter()
            .map(str::to_string)
            .collect();
        View {
            filtered,
            bars,
            timeline,
            kpis,
            pager,
            page,
            suppliers,
        }
    }

    fn pager(&self) -> base::Pager {
        let count = base::filter::filter(&self.records, &self.state).len();
        base::Pager::new(count).goto(self.page)
    }

    fn replace(&mut self, rl: base::Recordlist) {
        tracing::info!(records = rl.len(), "replacing collection");
        self.records = rl;
        self.demo = false;
    }
}

fn error_chain(e: &dyn std::error::Error) -> String {
    let mut s = e.to_string();
    let mut cause = e.source();
    while let Some(c) = cause {
        s.push_str(": ");
        s.push_str(&c.to_string());
        cause = c.source();
    }
    s
}
