mod bill;
mod receipt;
mod unit;

pub use bill::*;
pub use receipt::*;
pub use unit::*;
