//! Offer table keyed by offer code.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

use crate::models::{Bounds, Offer, OfferConditions};

/// Errors raised while loading an offer table.
#[derive(Debug, Error)]
pub enum OfferError {
    /// The offer file could not be read.
    #[error("failed to read offer table {path:?}: {source}")]
    Read {
        /// Path that was read.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
    /// The offer document is not valid JSON of the expected shape.
    #[error("failed to parse offer table: {0}")]
    Parse(#[from] serde_json::Error),
    /// An offer has a discount outside `[0, 1]` or an inverted range.
    #[error("offer {code:?} is invalid: discount must be within [0, 1] and ranges must satisfy min <= max")]
    InvalidOffer {
        /// Offending offer code.
        code: String,
    },
}

/// An immutable snapshot of the available offers.
///
/// Lookups are pure reads; an unknown code is not an error and simply yields
/// no discount.
///
/// # Examples
///
/// ```
/// use u_courier::pricing::OfferTable;
///
/// let offers = OfferTable::standard();
/// assert!(offers.get_offer("OFR003").is_some());
/// assert!(offers.get_offer("NA").is_none());
///
/// // 5% of 700, package within OFR003's ranges
/// assert!((offers.discount_for(Some("OFR003"), 700.0, 10.0, 100.0) - 35.0).abs() < 1e-9);
/// assert_eq!(offers.discount_for(Some("NA"), 700.0, 10.0, 100.0), 0.0);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(transparent)]
pub struct OfferTable {
    offers: HashMap<String, Offer>,
}

impl OfferTable {
    /// Creates an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// The standard offer set: OFR001, OFR002 and OFR003.
    pub fn standard() -> Self {
        let offer = |discount, weight: (f64, f64), distance: (f64, f64)| {
            Offer::new(
                discount,
                OfferConditions {
                    weight: Bounds::inclusive(weight.0, weight.1),
                    distance: Bounds::inclusive(distance.0, distance.1),
                },
            )
        };
        Self::new()
            .with_offer("OFR001", offer(0.10, (70.0, 200.0), (0.0, 200.0)))
            .with_offer("OFR002", offer(0.07, (100.0, 250.0), (50.0, 150.0)))
            .with_offer("OFR003", offer(0.05, (10.0, 150.0), (50.0, 250.0)))
    }

    /// Adds or replaces an offer.
    pub fn with_offer(mut self, code: impl Into<String>, offer: Offer) -> Self {
        self.offers.insert(code.into(), offer);
        self
    }

    /// Parses a table from its JSON representation and validates every offer.
    pub fn from_json(json: &str) -> Result<Self, OfferError> {
        let table: Self = serde_json::from_str(json)?;
        table.validate()?;
        Ok(table)
    }

    /// Reads and parses a JSON offer table from disk.
    pub fn load(path: &Path) -> Result<Self, OfferError> {
        let json = fs::read_to_string(path).map_err(|source| OfferError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&json)
    }

    fn validate(&self) -> Result<(), OfferError> {
        match self.offers.iter().find(|(_, offer)| !offer.is_valid()) {
            Some((code, _)) => Err(OfferError::InvalidOffer { code: code.clone() }),
            None => Ok(()),
        }
    }

    /// Looks up an offer by code.
    pub fn get_offer(&self, code: &str) -> Option<&Offer> {
        self.offers.get(code)
    }

    /// Discount amount for a package, or 0 if the code is absent, unknown,
    /// or the package falls outside the offer's ranges.
    pub fn discount_for(
        &self,
        code: Option<&str>,
        total_cost: f64,
        weight: f64,
        distance: f64,
    ) -> f64 {
        let Some(code) = code else {
            return 0.0;
        };
        match self.get_offer(code) {
            Some(offer) if offer.applies_to(weight, distance) => offer.discount() * total_cost,
            Some(_) => 0.0,
            None => {
                log::debug!("unknown offer code {code:?}; no discount applied");
                0.0
            }
        }
    }

    /// Number of offers in the table.
    pub fn len(&self) -> usize {
        self.offers.len()
    }

    /// Returns `true` if the table holds no offers.
    pub fn is_empty(&self) -> bool {
        self.offers.is_empty()
    }
}
