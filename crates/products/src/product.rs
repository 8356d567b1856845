use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use stockdate_core::{DomainError, DomainResult, ValueObject};

/// A product as seen by the expiry check: a name and the last day it is good.
///
/// Immutable once built. Deserializing goes through [`RawProductRecord`], so a
/// record missing either field is rejected rather than half-built.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawProductRecord")]
pub struct ProductRecord {
    name: String,
    expiration_date: NaiveDate,
}

impl ProductRecord {
    pub fn new(name: impl Into<String>, expiration_date: NaiveDate) -> Self {
        Self {
            name: name.into(),
            expiration_date,
        }
    }

    /// Parse a single record from a JSON object.
    pub fn from_json(json: &str) -> DomainResult<Self> {
        let raw: RawProductRecord = serde_json::from_str(json)
            .map_err(|e| DomainError::validation(format!("malformed product record: {e}")))?;
        Self::try_from(raw)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn expiration_date(&self) -> NaiveDate {
        self.expiration_date
    }

    /// Expired strictly before `today`. A product expiring today is still good.
    pub fn is_outdated_as_of(&self, today: NaiveDate) -> bool {
        self.expiration_date < today
    }
}

impl ValueObject for ProductRecord {}

/// Loosely-typed product mapping, as it arrives from callers that build
/// records by hand or from JSON. Any field may be absent; extra fields are
/// ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawProductRecord {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub expiration_date: Option<NaiveDate>,
}

impl TryFrom<RawProductRecord> for ProductRecord {
    type Error = DomainError;

    fn try_from(raw: RawProductRecord) -> Result<Self, Self::Error> {
        let name = raw
            .name
            .ok_or_else(|| DomainError::validation("name is required"))?;
        let expiration_date = raw
            .expiration_date
            .ok_or_else(|| DomainError::validation("expiration_date is required"))?;
        Ok(Self {
            name,
            expiration_date,
        })
    }
}

impl From<ProductRecord> for RawProductRecord {
    fn from(record: ProductRecord) -> Self {
        Self {
            name: Some(record.name),
            expiration_date: Some(record.expiration_date),
        }
    }
}

/// Parse a JSON array of product records.
///
/// Fails on the first malformed element; the error names its index.
pub fn parse_product_records(json: &str) -> DomainResult<Vec<ProductRecord>> {
    let raw: Vec<RawProductRecord> = serde_json::from_str(json)
        .map_err(|e| DomainError::validation(format!("malformed product records: {e}")))?;

    raw.into_iter()
        .enumerate()
        .map(|(index, raw)| {
            ProductRecord::try_from(raw).map_err(|e| match e {
                DomainError::Validation(msg) => {
                    DomainError::validation(format!("product record {index}: {msg}"))
                }
            })
        })
        .collect()
}
