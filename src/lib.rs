//! # u-courier
//!
//! Courier delivery cost estimation and fleet trip scheduling.
//!
//! Packages are priced from a base cost plus weight and distance charges,
//! less any applicable offer discount. Deliveries are arranged by repeatedly
//! loading the first free vehicle with the best subset of pending packages
//! (most packages, then heaviest, then nearest) chosen by an exact 0/1
//! knapsack, and advancing a simulated clock to the next vehicle return.
//!
//! ## Modules
//!
//! - [`models`]: Domain types (Package, Vehicle, Fleet, Offer, Shipment)
//! - [`pricing`]: Offer table and delivery cost estimation
//! - [`selection`]: Knapsack solver and next-trip package selection
//! - [`scheduling`]: Discrete-event delivery scheduler
//! - [`input`]: Text input parsing and validation
//! - [`report`]: Text and JSON result rows
//! - [`precision`]: Two-decimal rounding helpers
//! - `cli`: The `courier` command (feature `cli`)
//!
//! ## Example
//!
//! ```
//! use u_courier::models::{Fleet, Package};
//! use u_courier::pricing::{CostEstimator, OfferTable};
//! use u_courier::scheduling::DeliveryScheduler;
//!
//! let offers = OfferTable::standard();
//! let fleet = Fleet::new(2, 70.0, 200.0).unwrap();
//! let scheduler = DeliveryScheduler::new(fleet, CostEstimator::new(100.0, &offers));
//!
//! let mut packages = vec![
//!     Package::new("PKG1", 50.0, 30.0).with_offer_code("OFR001"),
//!     Package::new("PKG2", 75.0, 125.0).with_offer_code("OFR008"),
//! ];
//! scheduler.schedule(&mut packages).unwrap();
//! assert!(packages.iter().all(|p| p.outcome().is_some()));
//! ```

#[cfg(feature = "cli")]
pub mod cli;
pub mod input;
pub mod models;
pub mod precision;
pub mod pricing;
pub mod report;
pub mod scheduling;
pub mod selection;
