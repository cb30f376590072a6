use crate::base;
use crate::base::Level;

/// Supplier selector value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub enum Supplier {
    #[default]
    All,
    Named(String),
}

impl Supplier {
    pub fn matches(&self, name: &str) -> bool {
        match self {
            Supplier::All => true,
            Supplier::Named(s) => s == name,
        }
    }
}

impl std::fmt::Display for Supplier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Supplier::All => f.write_str("All"),
            Supplier::Named(s) => f.write_str(s),
        }
    }
}

impl From<&str> for Supplier {
    /// `"All"` selects every supplier, anything else names one.
    fn from(value: &str) -> Self {
        match value {
            "All" => Supplier::All,
            s => Supplier::Named(s.to_string()),
        }
    }
}

/// Which chart is shown: the category drill-down or the supplier ranking.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, strum::Display, strum::EnumString,
)]
#[strum(ascii_case_insensitive, serialize_all = "kebab-case")]
pub enum Tab {
    #[default]
    Categories,
    Suppliers,
}

/// Everything that narrows the collection down to what is on screen.
///
/// Selections are only ever populated as deep as [`FilterState::level`]: a sub
/// label is selected only under a selected label, a micro label only under a
/// selected sub label. The fields are private so that only [`Event`]s move the
/// state.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterState {
    supplier: Supplier,
    tab: Tab,
    level: Level,
    label: Option<String>,
    sub_label: Option<String>,
    micro_label: Option<String>,
    interval: base::Interval,
}

/// User action on the dashboard.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// A bar was clicked in the current chart.
    SelectBar(String),
    /// One level up the hierarchy.
    Back,
    /// Breadcrumb click: straight to a shallower level.
    JumpTo(Level),
    SwitchTab(Tab),
    SelectSupplier(Supplier),
    SetInterval(base::Interval),
}

impl FilterState {
    pub fn supplier(&self) -> &Supplier {
        &self.supplier
    }

    pub fn tab(&self) -> Tab {
        self.tab
    }

    pub fn level(&self) -> Level {
        self.level
    }

    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    pub fn sub_label(&self) -> Option<&str> {
        self.sub_label.as_deref()
    }

    pub fn micro_label(&self) -> Option<&str> {
        self.micro_label.as_deref()
    }

    pub fn interval(&self) -> base::Interval {
        self.interval
    }

    /// Returns the selected keys from the root down to the current level.
    pub fn path(&self) -> Vec<&str> {
        [self.label(), self.sub_label(), self.micro_label()]
            .into_iter()
            .map_while(|x| x)
            .collect()
    }

    /// Applies one event. Events that make no sense in the current state
    /// leave it unchanged.
    pub fn apply(mut self, event: Event) -> Self {
        tracing::debug!(?event, level = %self.level, tab = %self.tab, "applying event");
        match event {
            Event::SelectBar(name) => match self.tab {
                Tab::Suppliers => {
                    self.supplier = Supplier::Named(name);
                    self.tab = Tab::Categories;
                    self.truncate(Level::Root);
                }
                Tab::Categories => {
                    let Some(next) = self.level.deeper() else {
                        return self;
                    };
                    match self.level {
                        Level::Root => self.label = Some(name),
                        Level::Label => self.sub_label = Some(name),
                        _ => self.micro_label = Some(name),
                    }
                    self.level = next;
                }
            },
            Event::Back => {
                if let Some(level) = self.level.shallower() {
                    self.truncate(level);
                }
            }
            Event::JumpTo(level) => {
                if level < self.level {
                    self.truncate(level);
                }
            }
            Event::SwitchTab(tab) => self.tab = tab,
            Event::SelectSupplier(supplier) => self.supplier = supplier,
            Event::SetInterval(interval) => self.interval = interval,
        }
        self
    }

    /// Moves to `level` and clears every selection below it.
    fn truncate(&mut self, level: Level) {
        self.level = level;
        if level < Level::MicroLabel {
            self.micro_label = None;
        }
        if level < Level::SubLabel {
            self.sub_label = None;
        }
        if level < Level::Label {
            self.label = None;
        }
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    fn bar(s: &str) -> Event {
        Event::SelectBar(s.to_string())
    }

    fn run(events: impl IntoIterator<Item = Event>) -> FilterState {
        events
            .into_iter()
            .fold(FilterState::default(), FilterState::apply)
    }

    fn check_invariant(st: &FilterState) {
        let depth = st.path().len();
        assert_eq!(st.label().is_some(), st.level() >= Level::Label);
        assert_eq!(st.sub_label().is_some(), st.level() >= Level::SubLabel);
        assert_eq!(st.micro_label().is_some(), st.level() >= Level::MicroLabel);
        if st.sub_label().is_some() {
            assert!(st.label().is_some());
        }
        if st.micro_label().is_some() {
            assert!(st.sub_label().is_some());
        }
        assert_eq!(
            depth,
            <Level as strum::IntoEnumIterator>::iter()
                .position(|l| l == st.level())
                .unwrap()
        );
    }

    #[test]
    fn test_initial() {
        let st = FilterState::default();
        assert_eq!(st.supplier(), &Supplier::All);
        assert_eq!(st.tab(), Tab::Categories);
        assert_eq!(st.level(), Level::Root);
        assert!(st.path().is_empty());
        assert!(st.interval().is_all());
    }

    #[test]
    fn test_drill_down_and_back() {
        let st = run([bar("Pricing")]);
        assert_eq!(st.level(), Level::Label);
        assert_eq!(st.label(), Some("Pricing"));

        let st = st.apply(bar("Price History")).apply(bar("History"));
        assert_eq!(st.level(), Level::MicroLabel);
        assert_eq!(st.path(), ["Pricing", "Price History", "History"]);

        let same = st.clone().apply(bar("Other"));
        assert_eq!(same, st);

        let st = st.apply(Event::Back);
        assert_eq!(st.level(), Level::SubLabel);
        assert_eq!(st.path(), ["Pricing", "Price History"]);

        let st = st.apply(Event::Back).apply(Event::Back).apply(Event::Back);
        assert_eq!(st, FilterState::default());
    }

    #[test]
    fn test_select_supplier_bar() {
        let st = run([
            bar("Pricing"),
            bar("Price History"),
            Event::SwitchTab(Tab::Suppliers),
            bar("Parisi"),
        ]);
        assert_eq!(st.supplier(), &Supplier::Named("Parisi".to_string()));
        assert_eq!(st.tab(), Tab::Categories);
        assert_eq!(st.level(), Level::Root);
        assert!(st.path().is_empty());
    }

    #[test]
    fn test_tab_and_supplier_keep_level() {
        let st = run([
            bar("Pricing"),
            Event::SwitchTab(Tab::Suppliers),
            Event::SelectSupplier("Acme".into()),
            Event::SwitchTab(Tab::Categories),
        ]);
        assert_eq!(st.level(), Level::Label);
        assert_eq!(st.label(), Some("Pricing"));
        assert_eq!(st.supplier(), &Supplier::Named("Acme".to_string()));
    }

    #[rstest]
    #[case(Level::Root, &[])]
    #[case(Level::Label, &["a"])]
    #[case(Level::SubLabel, &["a", "b"])]
    #[case(Level::MicroLabel, &["a", "b", "c"])]
    fn test_jump_to(#[case] level: Level, #[case] want: &[&str]) {
        let st = run([bar("a"), bar("b"), bar("c"), Event::JumpTo(level)]);
        assert_eq!(st.level(), level);
        assert_eq!(st.path(), want);
    }

    #[test]
    fn test_jump_deeper_is_noop() {
        let st = run([bar("a"), Event::JumpTo(Level::MicroLabel)]);
        assert_eq!(st, run([bar("a")]));
    }

    #[test]
    fn test_invariant_over_event_sequences() {
        let alphabet = [
            bar("x"),
            Event::Back,
            Event::JumpTo(Level::Root),
            Event::JumpTo(Level::Label),
            Event::SwitchTab(Tab::Suppliers),
            Event::SwitchTab(Tab::Categories),
            Event::SelectSupplier(Supplier::All),
        ];
        let mut frontier = vec![FilterState::default()];
        for _ in 0..5 {
            frontier = frontier
                .into_iter()
                .flat_map(|st| alphabet.iter().map(move |e| st.clone().apply(e.clone())))
                .collect();
            frontier.iter().for_each(check_invariant);
        }
    }

    #[rstest]
    #[case("All", Supplier::All)]
    #[case("Parisi", Supplier::Named("Parisi".to_string()))]
    fn test_supplier_from(#[case] s: &str, #[case] want: Supplier) {
        assert_eq!(Supplier::from(s), want);
        assert_eq!(want.to_string(), s);
    }
}
