//! Text input parsing and validation.
//!
//! Turns the cost-estimation and delivery-arrangement text formats into
//! validated [`Package`](crate::models::Package) lists and a
//! [`Fleet`](crate::models::Fleet).

mod error;
mod parser;

pub use error::InputError;
pub use parser::{parse_arrangement_input, parse_estimation_input, ArrangementInput, EstimationInput};
