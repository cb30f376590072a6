use time::macros::date;

use crate::base;

/// Records a fresh session shows before anything is imported or loaded.
pub fn sample() -> base::Recordlist {
    fn entry(
        dt: time::Date,
        supplier: &str,
        category: [&str; 3],
        cents: u64,
        message: &str,
    ) -> base::Record {
        base::Record::new(
            Some(base::Date::new(dt)),
            supplier,
            base::Category::new(category[0], category[1], category[2]),
            base::Price::from_cents(cents),
            message.to_string(),
            None,
        )
    }

    [
        entry(
            date!(2025 - 11 - 07),
            "Longman's Cheese",
            ["Picking & Warehouse", "Picking Slips", "Customer code"],
            0,
            "Wants customer codes printed on invoices so account queries can be located quickly.",
        ),
        entry(
            date!(2025 - 11 - 07),
            "First Choice",
            ["", "", ""],
            0,
            "Supplier: First Choice\nType: Goods In Process\nPriority: Medium\nComment:",
        ),
        entry(
            date!(2025 - 11 - 07),
            "Imran Brothers",
            ["Pricing", "Price History", "Per_customer history"],
            0,
            "Would like last sold price and last purchase date per product per customer on order entry.",
        ),
        entry(
            date!(2025 - 11 - 06),
            "Parisi",
            ["Logistics (Delivery & Runs)", "Delivery Runs", "Multiple runs per customer"],
            259000,
            "Needs separate logins for each venue department.",
        ),
        entry(
            date!(2025 - 11 - 06),
            "Box Fresh",
            ["Buying (Procurement)", "Purchase Orders", "Partial orders"],
            0,
            "Has two distinct product groups that should be ordered separately.",
        ),
        entry(
            date!(2025 - 11 - 06),
            "Sher Wagyu",
            ["Picking & Warehouse", "Picking Slips", "Customer code"],
            0,
            "Would like the product code visible when picking.",
        ),
    ]
    .into_iter()
    .collect()
}
