// Allow dead_code because these helpers are used across different test files
// which are compiled separately
#![allow(dead_code)]

use tally::{Bill, Quantity};

/// Items seeded by `initial_bill`, with their quantities.
pub const INITIAL_ITEMS: [(&str, Quantity); 6] = [
    ("peas", 3),
    ("tomato", 6),
    ("chili", 12),
    ("cucumber", 120),
    ("potato", 144),
    ("zucchini", 1728),
];

/// Test fixture: one item for every unit in the table
pub fn initial_bill() -> Bill {
    let mut bill = Bill::new();
    for (item, unit) in [
        ("peas", "quarter_of_a_dozen"),
        ("tomato", "half_of_a_dozen"),
        ("chili", "dozen"),
        ("cucumber", "small_gross"),
        ("potato", "gross"),
        ("zucchini", "great_gross"),
    ] {
        assert!(bill.add_item(item, unit), "fixture add {item} {unit}");
    }
    bill
}
