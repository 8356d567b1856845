//! Products domain module.
//!
//! Product records and the outdated-product filter, implemented purely as
//! deterministic domain logic (no IO, no HTTP, no storage). The only ambient
//! input is "today", and that comes from an injected [`stockdate_core::Clock`].

pub mod outdated;
pub mod product;

pub use outdated::{OutdatedProductFilter, outdated_products, outdated_products_as_of};
pub use product::{ProductRecord, RawProductRecord, parse_product_records};
