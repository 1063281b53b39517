// Application layer - the cashier session wrapped around a bill.

pub mod command;
pub mod error;
pub mod service;

pub use command::*;
pub use error::*;
pub use service::*;
