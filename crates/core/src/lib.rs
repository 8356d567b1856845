//! `stockdate-core` — domain foundation building blocks.
//!
//! This crate contains **pure domain** primitives (no infrastructure concerns).

pub mod clock;
pub mod error;
pub mod value_object;

pub use clock::{Clock, FixedClock, SystemClock, Zone};
pub use error::{DomainError, DomainResult};
pub use value_object::ValueObject;
