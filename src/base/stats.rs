use crate::base;
use crate::base::drilldown::{FilterState, Tab};

/// Bars kept in a category chart.
pub const TOP_CATEGORIES: usize = 10;
/// Bars kept in the supplier ranking.
pub const TOP_SUPPLIERS: usize = 15;

/// One bar of a chart: a group key and how many records fall under it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bar {
    pub name: String,
    pub count: usize,
}

/// Counts the filtered records per chart key and keeps the largest groups,
/// largest first. Groups with equal counts stay in the order their key was
/// first seen in the collection.
///
/// The supplier tab groups by supplier. The category tab groups by the child
/// of the current level; at micro label depth there is nothing left to group
/// and the chart is empty.
pub fn bars(filtered: &base::Recordlist, st: &FilterState) -> Vec<Bar> {
    let (agg, limit) = match st.tab() {
        Tab::Suppliers => (
            filtered
                .iter()
                .map(|r| (r.supplier(), 1))
                .collect::<base::Aggregate<_, usize>>(),
            TOP_SUPPLIERS,
        ),
        Tab::Categories => (
            filtered
                .iter()
                .filter_map(|r| r.category().child_key(st.level()))
                .map(|k| (k, 1))
                .collect::<base::Aggregate<_, usize>>(),
            TOP_CATEGORIES,
        ),
    };
    agg.ranked(limit)
        .into_iter()
        .map(|(name, count)| Bar {
            name: name.to_string(),
            count,
        })
        .collect()
}

/// Headline figures for the filtered set.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Kpis {
    pub count: usize,
    pub revenue: base::Price,
    pub suppliers: usize,
}

impl Kpis {
    pub fn new(filtered: &base::Recordlist) -> Self {
        Self {
            count: filtered.len(),
            revenue: filtered.iter().map(base::Record::price).sum(),
            suppliers: filtered.suppliers().len(),
        }
    }
}

impl std::fmt::Display for Kpis {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Feedback   {}", self.count)?;
        writeln!(f, "Revenue    {}", self.revenue)?;
        writeln!(f, "Suppliers  {}", self.suppliers)
    }
}
