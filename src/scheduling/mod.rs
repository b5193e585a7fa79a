//! Fleet trip scheduling over simulated time.

mod scheduler;

use thiserror::Error;

use crate::selection::SelectionError;

pub use scheduler::DeliveryScheduler;

/// Errors that abort a scheduling run.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SchedulingError {
    /// No vehicle was free when the clock said one should be.
    #[error("no vehicle available at t={time}; scheduler clock invariant violated")]
    NoVehicleAvailable {
        /// Simulated time of the failed dispatch.
        time: f64,
    },
    /// Pending packages remain but none fits the fleet's weight limit.
    #[error("packages {ids:?} exceed the maximum carriable weight and can never ship")]
    UndeliverablePackages {
        /// Identifiers of the stranded packages.
        ids: Vec<String>,
    },
    /// A package was selected for a second delivery.
    #[error("package {id:?} already has a recorded delivery")]
    AlreadyDelivered {
        /// Package identifier.
        id: String,
    },
    /// Package selection rejected its input.
    #[error(transparent)]
    Selection(#[from] SelectionError),
}
