use std::collections::HashMap;

use thiserror::Error;

use super::{Quantity, Unit};

/// Why a bill refused a change. The bill is never modified when one of these is returned.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BillError {
    #[error("Unknown measurement unit: {0:?}")]
    UnknownUnit(String),

    #[error("Item not on bill: {0}")]
    ItemNotOnBill(String),

    #[error("Cannot remove {requested} of {item}: only {on_bill} on bill")]
    InsufficientQuantity {
        item: String,
        on_bill: Quantity,
        requested: Quantity,
    },

    #[error("Quantity of {item} would overflow")]
    QuantityOverflow { item: String },
}

/// The items of a single customer transaction.
///
/// Only positive quantities are stored: an item whose quantity drops to
/// zero is removed from the bill.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Bill {
    items: HashMap<String, Quantity>,
}

impl Bill {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one unit's worth of `name` to the bill.
    /// Returns false, leaving the bill untouched, if the unit is unknown.
    pub fn add_item(&mut self, name: &str, unit: &str) -> bool {
        self.try_add_item(name, unit).is_ok()
    }

    /// Take one unit's worth of `name` off the bill.
    /// Returns false, leaving the bill untouched, if the item is not on the bill,
    /// the unit is unknown, or the bill holds less than the unit's quantity.
    pub fn remove_item(&mut self, name: &str, unit: &str) -> bool {
        self.try_remove_item(name, unit).is_ok()
    }

    /// Current quantity of `name`, or `None` if it is not on the bill.
    pub fn get_item(&self, name: &str) -> Option<Quantity> {
        self.items.get(name).copied()
    }

    /// Current quantity of `name`, treating an absent item as zero.
    pub fn quantity_of(&self, name: &str) -> Quantity {
        self.get_item(name).unwrap_or(0)
    }

    /// End the transaction: every item is dropped.
    pub fn checkout(&mut self) {
        self.items.clear();
    }

    /// Add one unit's worth of `name` and return the item's new quantity.
    pub fn try_add_item(&mut self, name: &str, unit: &str) -> Result<Quantity, BillError> {
        let unit = parse_unit(unit)?;
        let new_qty = self
            .quantity_of(name)
            .checked_add(unit.quantity())
            .ok_or_else(|| BillError::QuantityOverflow {
                item: name.to_string(),
            })?;

        self.items.insert(name.to_string(), new_qty);
        Ok(new_qty)
    }

    /// Take one unit's worth of `name` off and return the item's new quantity.
    /// A result of 0 means the item was removed from the bill.
    pub fn try_remove_item(&mut self, name: &str, unit: &str) -> Result<Quantity, BillError> {
        // Absence is checked before the unit so an unknown item always reports as such.
        let on_bill = self
            .get_item(name)
            .ok_or_else(|| BillError::ItemNotOnBill(name.to_string()))?;
        let unit = parse_unit(unit)?;
        let requested = unit.quantity();

        let new_qty =
            on_bill
                .checked_sub(requested)
                .ok_or_else(|| BillError::InsufficientQuantity {
                    item: name.to_string(),
                    on_bill,
                    requested,
                })?;

        if new_qty == 0 {
            self.items.remove(name);
        } else {
            self.items.insert(name.to_string(), new_qty);
        }
        Ok(new_qty)
    }

    /// Number of distinct items on the bill.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Sum of all item quantities.
    pub fn total_quantity(&self) -> Quantity {
        self.items.values().sum()
    }

    /// Items and quantities, sorted by item name.
    pub fn items(&self) -> Vec<(&str, Quantity)> {
        let mut items: Vec<(&str, Quantity)> = self
            .items
            .iter()
            .map(|(name, qty)| (name.as_str(), *qty))
            .collect();
        items.sort_by(|a, b| a.0.cmp(b.0));
        items
    }
}

fn parse_unit(unit: &str) -> Result<Unit, BillError> {
    Unit::from_str(unit).ok_or_else(|| BillError::UnknownUnit(unit.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_bill_is_empty() {
        let bill = Bill::new();
        assert!(bill.is_empty());
        assert_eq!(bill.get_item("chili"), None);
        assert_eq!(bill.quantity_of("chili"), 0);
    }

    #[test]
    fn test_add_accumulates() {
        let mut bill = Bill::new();
        assert!(bill.add_item("chili", "dozen"));
        assert!(bill.add_item("chili", "quarter_of_a_dozen"));
        assert_eq!(bill.get_item("chili"), Some(15));
    }

    #[test]
    fn test_add_unknown_unit_leaves_bill_untouched() {
        let mut bill = Bill::new();
        bill.add_item("onion", "gross");

        assert!(!bill.add_item("onion", "pound"));
        assert!(!bill.add_item("pasta", ""));

        assert_eq!(bill.get_item("onion"), Some(144));
        assert_eq!(bill.get_item("pasta"), None);
        assert_eq!(bill.len(), 1);
    }

    #[test]
    fn test_try_add_reports_unknown_unit() {
        let mut bill = Bill::new();
        assert_eq!(
            bill.try_add_item("pasta", "pound"),
            Err(BillError::UnknownUnit("pound".into()))
        );
    }

    #[test]
    fn test_add_overflow_is_rejected() {
        let mut bill = Bill::new();
        bill.items.insert("rice".into(), Quantity::MAX - 1);

        assert_eq!(
            bill.try_add_item("rice", "quarter_of_a_dozen"),
            Err(BillError::QuantityOverflow {
                item: "rice".into()
            })
        );
        assert_eq!(bill.get_item("rice"), Some(Quantity::MAX - 1));
    }

    #[test]
    fn test_remove_absent_item_fails_before_unit_check() {
        let mut bill = Bill::new();
        assert_eq!(
            bill.try_remove_item("papaya", "not_a_unit"),
            Err(BillError::ItemNotOnBill("papaya".into()))
        );
    }

    #[test]
    fn test_remove_more_than_on_bill() {
        let mut bill = Bill::new();
        bill.add_item("peas", "quarter_of_a_dozen");

        assert_eq!(
            bill.try_remove_item("peas", "half_of_a_dozen"),
            Err(BillError::InsufficientQuantity {
                item: "peas".into(),
                on_bill: 3,
                requested: 6,
            })
        );
        assert_eq!(bill.get_item("peas"), Some(3));
    }

    #[test]
    fn test_remove_to_zero_deletes_entry() {
        let mut bill = Bill::new();
        bill.add_item("potato", "gross");

        assert_eq!(bill.try_remove_item("potato", "gross"), Ok(0));
        assert_eq!(bill.get_item("potato"), None);
        assert!(bill.is_empty());
    }

    #[test]
    fn test_checkout_clears_everything() {
        let mut bill = Bill::new();
        bill.add_item("peas", "dozen");
        bill.add_item("tomato", "gross");

        bill.checkout();

        assert!(bill.is_empty());
        assert_eq!(bill.get_item("peas"), None);
        assert_eq!(bill.get_item("tomato"), None);
    }

    #[test]
    fn test_items_are_sorted_and_totalled() {
        let mut bill = Bill::new();
        bill.add_item("zucchini", "dozen");
        bill.add_item("chili", "half_of_a_dozen");
        bill.add_item("peas", "quarter_of_a_dozen");

        assert_eq!(
            bill.items(),
            vec![("chili", 6), ("peas", 3), ("zucchini", 12)]
        );
        assert_eq!(bill.total_quantity(), 21);
    }
}
