pub mod criteria;
pub mod error;
pub mod schedule;
pub mod types;

pub use criteria::CreditCriteria;
pub use error::{CreditError, Violation};
pub use types::*;

/// Standard result type for all credit-calculator operations
pub type CreditResult<T> = Result<T, CreditError>;
