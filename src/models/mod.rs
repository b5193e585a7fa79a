//! Domain model types for courier delivery.
//!
//! Provides the core abstractions: packages with weights and distances,
//! offers with applicability ranges, a homogeneous fleet, vehicles that track
//! their next departure, and shipment records for completed trips.

mod fleet;
mod offer;
mod package;
mod shipment;
mod vehicle;

pub use fleet::Fleet;
pub use offer::{Bounds, Offer, OfferConditions};
pub use package::{DeliveryOutcome, Package};
pub use shipment::Shipment;
pub use vehicle::Vehicle;
