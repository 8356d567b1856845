//! Outdated-product filter.
//!
//! A product is outdated when its expiration date is strictly before "today".
//! The filter keeps input order, never sorts or deduplicates, and cannot fail.

use chrono::NaiveDate;

use stockdate_core::{Clock, SystemClock};

use crate::product::ProductRecord;

/// Names of the products that expired before `today`, in input order.
pub fn outdated_products_as_of<'a, I>(products: I, today: NaiveDate) -> Vec<String>
where
    I: IntoIterator<Item = &'a ProductRecord>,
{
    products
        .into_iter()
        .filter(|product| product.is_outdated_as_of(today))
        .map(|product| product.name().to_owned())
        .collect()
}

/// Names of the products that expired before the system clock's today.
///
/// Shorthand for `OutdatedProductFilter::system().outdated_products(products)`.
pub fn outdated_products<'a, I>(products: I) -> Vec<String>
where
    I: IntoIterator<Item = &'a ProductRecord>,
{
    OutdatedProductFilter::system().outdated_products(products)
}

/// Outdated-product filter bound to a clock.
///
/// Holds no state besides the clock; "today" is read once per call.
#[derive(Debug, Clone)]
pub struct OutdatedProductFilter<C: Clock> {
    clock: C,
}

impl<C: Clock> OutdatedProductFilter<C> {
    pub fn new(clock: C) -> Self {
        Self { clock }
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }

    /// Reads "today" once, then filters. Emits one debug event per call.
    pub fn outdated_products<'a, I>(&self, products: I) -> Vec<String>
    where
        I: IntoIterator<Item = &'a ProductRecord>,
    {
        let today = self.clock.today();
        let mut checked = 0usize;
        let counted = products.into_iter().inspect(|_| checked += 1);
        let names = outdated_products_as_of(counted, today);

        tracing::debug!(
            %today,
            checked,
            outdated = names.len(),
            "filtered outdated products"
        );

        names
    }
}

impl OutdatedProductFilter<SystemClock> {
    pub fn system() -> Self {
        Self::new(SystemClock::local())
    }
}

impl Default for OutdatedProductFilter<SystemClock> {
    fn default() -> Self {
        Self::system()
    }
}
