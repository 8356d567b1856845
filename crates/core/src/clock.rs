//! Injected source of "today".
//!
//! Domain logic never reads the system clock directly; it asks a [`Clock`].
//! Production code passes a [`SystemClock`], tests pass a [`FixedClock`].

use std::sync::Arc;

use chrono::{Local, NaiveDate, Utc};

/// Provides the current calendar date.
pub trait Clock: Send + Sync {
    /// Returns today's date.
    fn today(&self) -> NaiveDate;
}

impl<C: Clock + ?Sized> Clock for &C {
    fn today(&self) -> NaiveDate {
        (**self).today()
    }
}

impl<C: Clock + ?Sized> Clock for Box<C> {
    fn today(&self) -> NaiveDate {
        (**self).today()
    }
}

impl<C: Clock + ?Sized> Clock for Arc<C> {
    fn today(&self) -> NaiveDate {
        (**self).today()
    }
}

/// Time zone a [`SystemClock`] resolves "today" in.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum Zone {
    /// Process-local time zone.
    #[default]
    Local,
    Utc,
}

/// Reads the ambient system clock on every call.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub struct SystemClock {
    zone: Zone,
}

impl SystemClock {
    pub fn local() -> Self {
        Self { zone: Zone::Local }
    }

    pub fn utc() -> Self {
        Self { zone: Zone::Utc }
    }

    pub fn zone(&self) -> Zone {
        self.zone
    }
}

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        match self.zone {
            Zone::Local => Local::now().date_naive(),
            Zone::Utc => Utc::now().date_naive(),
        }
    }
}

/// Always reports the same date.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct FixedClock {
    date: NaiveDate,
}

impl FixedClock {
    pub fn new(date: NaiveDate) -> Self {
        Self { date }
    }
}

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.date
    }
}
