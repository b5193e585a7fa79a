//! Delivery pricing: offer lookup and cost estimation.
//!
//! - [`OfferTable`]: Offer codes mapped to discount rules, loadable from JSON
//! - [`CostEstimator`]: Linear cost model with offer discounts

mod cost;
mod offers;

pub use cost::{delivery_cost_before_discount, CostEstimate, CostEstimator, COST_PER_KG, COST_PER_KM};
pub use offers::{OfferError, OfferTable};
