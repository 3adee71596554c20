pub mod calculations;
pub mod models;

pub use calculations::engine::{EngineError, TaxEngine};
pub use models::*;
