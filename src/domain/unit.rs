use serde::{Deserialize, Serialize};

/// Item counts are whole, non-negative numbers of pieces.
pub type Quantity = u64;

/// Named measurement units accepted at the register.
/// Each one stands for a fixed number of pieces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Unit {
    QuarterOfADozen,
    HalfOfADozen,
    Dozen,
    SmallGross,
    Gross,
    GreatGross,
}

impl Unit {
    pub const ALL: [Unit; 6] = [
        Unit::QuarterOfADozen,
        Unit::HalfOfADozen,
        Unit::Dozen,
        Unit::SmallGross,
        Unit::Gross,
        Unit::GreatGross,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Unit::QuarterOfADozen => "quarter_of_a_dozen",
            Unit::HalfOfADozen => "half_of_a_dozen",
            Unit::Dozen => "dozen",
            Unit::SmallGross => "small_gross",
            Unit::Gross => "gross",
            Unit::GreatGross => "great_gross",
        }
    }

    /// Exact, case-sensitive match against the unit names.
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "quarter_of_a_dozen" => Some(Unit::QuarterOfADozen),
            "half_of_a_dozen" => Some(Unit::HalfOfADozen),
            "dozen" => Some(Unit::Dozen),
            "small_gross" => Some(Unit::SmallGross),
            "gross" => Some(Unit::Gross),
            "great_gross" => Some(Unit::GreatGross),
            _ => None,
        }
    }

    /// Number of pieces this unit adds to or takes off a bill.
    pub fn quantity(&self) -> Quantity {
        match self {
            Unit::QuarterOfADozen => 3,
            Unit::HalfOfADozen => 6,
            Unit::Dozen => 12,
            Unit::SmallGross => 120,
            Unit::Gross => 144,
            Unit::GreatGross => 1728,
        }
    }
}

impl std::fmt::Display for Unit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Look up a unit name in the unit table.
/// Returns `None` for anything that is not a known unit, including "".
pub fn lookup_unit(name: &str) -> Option<Quantity> {
    Unit::from_str(name).map(|unit| unit.quantity())
}
