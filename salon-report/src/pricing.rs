//! Service price table
//!
//! Maps normalized service names to a unit price. Services without an entry
//! price at zero. Config overrides are normalized on load, so
//! `"Hidratação" = 55.0` and `"hidratacao" = 55.0` address the same entry.

use std::collections::BTreeMap;

use crate::error::{ReportError, Result};
use crate::normalize::normalize_service;

/// Built-in prices, keyed by normalized service name
pub const DEFAULT_PRICES: &[(&str, f64)] = &[
    ("corte de cabelo", 35.0),
    ("hidratacao", 50.0),
    ("manicure", 25.0),
    ("pedicure", 30.0),
    ("escova", 40.0),
    ("coloracao", 90.0),
    ("design de sobrancelha", 30.0),
];

#[derive(Debug, Clone, PartialEq)]
pub struct PriceTable {
    prices: BTreeMap<String, f64>,
}

impl Default for PriceTable {
    fn default() -> Self {
        let prices = DEFAULT_PRICES
            .iter()
            .map(|(service, price)| (service.to_string(), *price))
            .collect();
        Self { prices }
    }
}

impl PriceTable {
    /// Table with no entries; every service prices at zero
    #[cfg(test)]
    pub(crate) fn empty() -> Self {
        Self {
            prices: BTreeMap::new(),
        }
    }

    /// Built-in prices with config overrides applied on top
    pub fn with_overrides(overrides: &BTreeMap<String, f64>) -> Result<Self> {
        let mut table = Self::default();
        for (service, price) in overrides {
            table.insert(service, *price)?;
        }
        Ok(table)
    }

    /// Set the price for a service label (normalized before storing)
    ///
    /// Negative and non-finite prices are rejected.
    pub fn insert(&mut self, service: &str, price: f64) -> Result<()> {
        if !price.is_finite() || price < 0.0 {
            return Err(ReportError::InvalidPrice {
                service: service.to_string(),
                price,
            });
        }
        self.prices.insert(normalize_service(service), price);
        Ok(())
    }

    /// Unit price for an already-normalized service name (0 when unknown)
    pub fn price_of(&self, normalized_service: &str) -> f64 {
        self.prices.get(normalized_service).copied().unwrap_or(0.0)
    }

    pub fn len(&self) -> usize {
        self.prices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.prices.is_empty()
    }
}
