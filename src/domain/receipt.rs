use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{Bill, Quantity};

pub type ReceiptId = Uuid;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReceiptLine {
    pub item: String,
    pub quantity: Quantity,
}

/// Snapshot of a bill at checkout. Lines are sorted by item name.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Receipt {
    pub id: ReceiptId,
    pub closed_at: DateTime<Utc>,
    pub lines: Vec<ReceiptLine>,
    pub total_quantity: Quantity,
}

impl Receipt {
    pub fn from_bill(bill: &Bill, closed_at: DateTime<Utc>) -> Self {
        let lines = bill
            .items()
            .into_iter()
            .map(|(item, quantity)| ReceiptLine {
                item: item.to_string(),
                quantity,
            })
            .collect();

        Self {
            id: Uuid::new_v4(),
            closed_at,
            lines,
            total_quantity: bill.total_quantity(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}
