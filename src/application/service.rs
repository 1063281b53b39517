use chrono::Utc;
use tracing::{debug, info};

use crate::domain::{Bill, Quantity, Receipt, Unit};

use super::{AppError, Command, Outcome};

/// A cashier session around one customer bill.
/// This is the primary interface for any front end (CLI, POS terminal, tests).
#[derive(Debug, Default)]
pub struct Register {
    bill: Bill,
}

impl Register {
    /// Open a register on an empty bill.
    pub fn new() -> Self {
        Self::default()
    }

    /// Open a register on an existing bill.
    pub fn with_bill(bill: Bill) -> Self {
        Self { bill }
    }

    pub fn bill(&self) -> &Bill {
        &self.bill
    }

    /// Scan one unit of an item onto the bill. Returns the item's new quantity.
    pub fn add(&mut self, item: &str, unit: &str) -> Result<Quantity, AppError> {
        match self.bill.try_add_item(item, unit) {
            Ok(quantity) => {
                debug!(item, unit, quantity, "item added");
                Ok(quantity)
            }
            Err(e) => {
                debug!(item, unit, error = %e, "add rejected");
                Err(e.into())
            }
        }
    }

    /// Take one unit of an item off the bill. Returns the item's new quantity.
    pub fn remove(&mut self, item: &str, unit: &str) -> Result<Quantity, AppError> {
        match self.bill.try_remove_item(item, unit) {
            Ok(quantity) => {
                let removed = quantity == 0;
                debug!(item, unit, quantity, removed, "item removed");
                Ok(quantity)
            }
            Err(e) => {
                debug!(item, unit, error = %e, "remove rejected");
                Err(e.into())
            }
        }
    }

    pub fn lookup(&self, item: &str) -> Option<Quantity> {
        self.bill.get_item(item)
    }

    /// Close the transaction: snapshot the bill into a receipt, then clear it.
    pub fn checkout(&mut self) -> Receipt {
        let receipt = Receipt::from_bill(&self.bill, Utc::now());
        self.bill.checkout();

        info!(
            receipt = %receipt.id,
            lines = receipt.lines.len(),
            total = receipt.total_quantity,
            "checkout"
        );
        receipt
    }

    /// Run a parsed command against this register.
    pub fn execute(&mut self, command: Command) -> Result<Outcome, AppError> {
        let outcome = match command {
            Command::Add { item, unit } => {
                let quantity = self.add(&item, &unit)?;
                Outcome::Updated { item, quantity }
            }
            Command::Remove { item, unit } => {
                let quantity = self.remove(&item, &unit)?;
                Outcome::Updated { item, quantity }
            }
            Command::Get { item } => {
                let quantity = self.lookup(&item);
                Outcome::Found { item, quantity }
            }
            Command::Show => Outcome::Lines(
                self.bill
                    .items()
                    .into_iter()
                    .map(|(item, qty)| (item.to_string(), qty))
                    .collect(),
            ),
            Command::Units => Outcome::Units(Unit::ALL.to_vec()),
            Command::Checkout => Outcome::CheckedOut(self.checkout()),
        };
        Ok(outcome)
    }
}

#[cfg(test)]
mod tests {
    use crate::domain::BillError;

    use super::*;

    #[test]
    fn test_add_and_lookup() {
        let mut register = Register::new();
        assert_eq!(register.add("chili", "dozen").unwrap(), 12);
        assert_eq!(register.lookup("chili"), Some(12));
    }

    #[test]
    fn test_rejections_surface_bill_errors() {
        let mut register = Register::new();

        let err = register.add("pasta", "pound").unwrap_err();
        assert!(err.is_rejection());
        assert!(matches!(err, AppError::Bill(BillError::UnknownUnit(_))));

        let err = register.remove("papaya", "gross").unwrap_err();
        assert!(matches!(err, AppError::Bill(BillError::ItemNotOnBill(_))));
    }

    #[test]
    fn test_checkout_returns_receipt_and_clears() {
        let mut bill = Bill::new();
        bill.add_item("peas", "quarter_of_a_dozen");
        bill.add_item("potato", "gross");
        let mut register = Register::with_bill(bill);

        let receipt = register.checkout();

        assert_eq!(receipt.lines.len(), 2);
        assert_eq!(receipt.total_quantity, 147);
        assert!(register.bill().is_empty());
    }

    #[test]
    fn test_execute_dispatches_commands() {
        let mut register = Register::new();

        let outcome = register
            .execute(Command::Add {
                item: "tomato".into(),
                unit: "half_of_a_dozen".into(),
            })
            .unwrap();
        assert!(matches!(outcome, Outcome::Updated { quantity: 6, .. }));

        let outcome = register
            .execute(Command::Get {
                item: "tomato".into(),
            })
            .unwrap();
        assert!(matches!(
            outcome,
            Outcome::Found {
                quantity: Some(6),
                ..
            }
        ));

        let outcome = register.execute(Command::Units).unwrap();
        assert!(matches!(outcome, Outcome::Units(units) if units.len() == 6));

        let outcome = register.execute(Command::Checkout).unwrap();
        assert!(matches!(outcome, Outcome::CheckedOut(r) if r.total_quantity == 6));
        assert!(register.bill().is_empty());
    }
}
