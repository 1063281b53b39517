use crate::domain::{Quantity, Receipt, Unit};

/// A single register operation, as typed by a cashier or read from a script.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Add { item: String, unit: String },
    Remove { item: String, unit: String },
    Get { item: String },
    Show,
    Units,
    Checkout,
}

/// What a successfully executed command produced.
#[derive(Debug, Clone)]
pub enum Outcome {
    /// New quantity of the item after an add or remove (0 = removed from bill).
    Updated { item: String, quantity: Quantity },
    /// Result of a lookup.
    Found {
        item: String,
        quantity: Option<Quantity>,
    },
    /// Current bill lines, sorted by item name.
    Lines(Vec<(String, Quantity)>),
    Units(Vec<Unit>),
    CheckedOut(Receipt),
}
