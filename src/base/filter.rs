use crate::base;
use crate::base::drilldown::{FilterState, Tab};

/// Returns the records visible under `st`, in collection order. Supplier is
/// applied first, then the hierarchy selection (category tab only), then the
/// date interval.
pub fn filter(rl: &base::Recordlist, st: &FilterState) -> base::Recordlist {
    let path = match st.tab() {
        Tab::Categories => st.path(),
        Tab::Suppliers => Vec::new(),
    };
    let interval = st.interval();
    rl.iter()
        .filter(|r| st.supplier().matches(r.supplier()))
        .filter(|r| in_path(r.category(), &path))
        .filter(|r| interval.contains(r.date()))
        .collect()
}

fn in_path(cat: &base::Category, path: &[&str]) -> bool {
    [cat.label(), cat.sub_label(), cat.micro_label()]
        .iter()
        .zip(path)
        .all(|(a, b)| a == b)
}
