//! Package selection for a single trip.
//!
//! - [`knapsack`]: Exact 0/1 knapsack, O(n × C)
//! - [`select_packages`] / [`pick_packages_to_deliver`]: Priority-scored
//!   selection of the next shipment within a weight capacity

mod knapsack;
mod selector;

use thiserror::Error;

pub use knapsack::{knapsack, KnapsackResult, MAX_TABLE_CELLS};
pub use selector::{fits_capacity, pick_packages_to_deliver, select_packages, PriorityScale};

/// Invalid input handed to the selector or its optimizer.
///
/// These indicate a caller bug; validated input never produces them.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SelectionError {
    /// Capacity is negative, NaN or infinite.
    #[error("invalid capacity {capacity}: must be a finite non-negative number")]
    InvalidCapacity {
        /// The rejected capacity.
        capacity: f64,
    },
    /// A package weight is negative, NaN or infinite.
    #[error("invalid weight {weight} for package {id:?}")]
    InvalidWeight {
        /// Package identifier.
        id: String,
        /// The rejected weight.
        weight: f64,
    },
    /// Weight and value arrays differ in length.
    #[error("weights and values differ in length ({weights} vs {values})")]
    LengthMismatch {
        /// Number of weights.
        weights: usize,
        /// Number of values.
        values: usize,
    },
    /// The optimization table would be too large to allocate.
    #[error("knapsack table for {items} items at capacity {capacity} exceeds the table size limit")]
    TableTooLarge {
        /// Number of items.
        items: usize,
        /// Integral capacity.
        capacity: usize,
    },
}
