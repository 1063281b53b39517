pub mod export;
pub mod script;

pub use export::*;
pub use script::*;
