//! Delivery cost estimation.
//!
//! Cost model: `base + weight × 10 + distance × 5`, less any applicable
//! offer discount. Both figures are rounded to two decimal places.

use crate::models::Package;
use crate::precision::{round_to, DECIMAL_PLACES};

use super::OfferTable;

/// Cost per kilogram of package weight.
pub const COST_PER_KG: f64 = 10.0;

/// Cost per kilometre of delivery distance.
pub const COST_PER_KM: f64 = 5.0;

/// Discount and final cost for one package.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CostEstimate {
    /// Discount amount, rounded to two decimals.
    pub discount: f64,
    /// Cost after discount, rounded to two decimals.
    pub total_cost: f64,
}

/// Delivery cost before any discount.
///
/// # Examples
///
/// ```
/// use u_courier::pricing::delivery_cost_before_discount;
///
/// assert_eq!(delivery_cost_before_discount(100.0, 5.0, 5.0), 175.0);
/// ```
pub fn delivery_cost_before_discount(base_delivery_cost: f64, weight: f64, distance: f64) -> f64 {
    base_delivery_cost + weight * COST_PER_KG + distance * COST_PER_KM
}

/// Computes package delivery costs against a fixed base cost and offer table.
///
/// Estimation is pure: the same inputs always produce the same estimate.
///
/// # Examples
///
/// ```
/// use u_courier::pricing::{CostEstimator, OfferTable};
///
/// let offers = OfferTable::standard();
/// let estimator = CostEstimator::new(100.0, &offers);
///
/// let est = estimator.calculate_delivery_cost(10.0, 100.0, Some("OFR003"));
/// assert_eq!(est.discount, 35.0);
/// assert_eq!(est.total_cost, 665.0);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct CostEstimator<'a> {
    base_delivery_cost: f64,
    offers: &'a OfferTable,
}

impl<'a> CostEstimator<'a> {
    /// Creates an estimator for the given base delivery cost.
    pub fn new(base_delivery_cost: f64, offers: &'a OfferTable) -> Self {
        Self {
            base_delivery_cost,
            offers,
        }
    }

    /// Base delivery cost applied to every package.
    pub fn base_delivery_cost(&self) -> f64 {
        self.base_delivery_cost
    }

    /// Estimates discount and total cost for a package's attributes.
    ///
    /// An absent or unknown offer code yields a zero discount.
    pub fn calculate_delivery_cost(
        &self,
        weight: f64,
        distance: f64,
        offer_code: Option<&str>,
    ) -> CostEstimate {
        let before_discount =
            delivery_cost_before_discount(self.base_delivery_cost, weight, distance);
        let discount = self
            .offers
            .discount_for(offer_code, before_discount, weight, distance);
        CostEstimate {
            discount: round_to(discount, DECIMAL_PLACES),
            total_cost: round_to(before_discount - discount, DECIMAL_PLACES),
        }
    }

    /// Estimates the cost of delivering a package.
    pub fn estimate(&self, package: &Package) -> CostEstimate {
        self.calculate_delivery_cost(package.weight(), package.distance(), package.offer_code())
    }
}
