//! Next-trip package selection.
//!
//! Picks the subset of pending packages to load onto a vehicle, optimizing
//! in strict order: most packages, then heaviest load, then shortest
//! distances. The tiers are folded into a single per-package score whose
//! components live on separated scales, and the best-scoring subset within
//! capacity is found with [`knapsack`].
//!
//! Weights are measured in whole units of 1, 0.1 or 0.01 kg, the coarsest
//! that represents every weight and the capacity exactly.

use crate::models::Package;
use crate::precision::snap;

use super::{knapsack, SelectionError, MAX_TABLE_CELLS};

/// Candidate weight units per kilogram, coarsest first.
const UNIT_SCALES: [f64; 3] = [1.0, 10.0, 100.0];

/// Tier divisors for scoring the packages of one trip.
///
/// A package scores `1 + weight / w − distance / d`. With `w` just above the
/// capacity and `d` above the combined distance times the weight resolution,
/// the weight terms of any feasible subset sum to less than one package and
/// the distance terms to less than one weight unit, so a higher total score
/// means more packages, then more weight, then less distance.
///
/// # Examples
///
/// ```
/// use u_courier::models::Package;
/// use u_courier::selection::PriorityScale;
///
/// let scale = PriorityScale::new(200, 1.0, 1001.0);
/// let heavy = Package::new("A", 100.0, 1.0);
/// let light_near = Package::new("B", 99.0, 1000.0);
/// assert!(scale.score(&heavy) > scale.score(&light_near));
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PriorityScale {
    weight_divisor: f64,
    distance_divisor: f64,
}

impl PriorityScale {
    /// Creates the scale for a capacity of `capacity_units` weight units,
    /// `units_per_kg` units to the kilogram, over packages whose distances
    /// sum to `total_distance` km.
    pub fn new(capacity_units: usize, units_per_kg: f64, total_distance: f64) -> Self {
        let slots = capacity_units as f64 + 1.0;
        Self {
            weight_divisor: slots / units_per_kg,
            distance_divisor: (total_distance.max(0.0) + 1.0) * slots,
        }
    }

    /// Priority score of a package.
    pub fn score(&self, package: &Package) -> f64 {
        1.0 + package.weight() / self.weight_divisor - package.distance() / self.distance_divisor
    }
}

/// Selects the packages for the next trip, returning indexes into `pending`
/// in ascending order.
///
/// Weights and capacity are expressed in the coarsest unit of 1, 0.1 or
/// 0.01 kg that makes all of them whole, dropping to a coarser unit if the
/// optimization table would be too large. Weights that are not whole in the
/// chosen unit round up and the capacity rounds down, so the real total
/// weight of the selection never exceeds `capacity`.
///
/// # Errors
///
/// [`SelectionError::InvalidCapacity`] for a negative or non-finite capacity,
/// [`SelectionError::InvalidWeight`] for a negative or non-finite weight,
/// [`SelectionError::TableTooLarge`] if even whole kilograms need too large
/// a table.
pub fn select_packages(pending: &[&Package], capacity: f64) -> Result<Vec<usize>, SelectionError> {
    if pending.is_empty() {
        return Ok(Vec::new());
    }
    if !capacity.is_finite() || capacity < 0.0 {
        return Err(SelectionError::InvalidCapacity { capacity });
    }
    let weights = pending
        .iter()
        .map(|p| checked_weight(p))
        .collect::<Result<Vec<_>, _>>()?;

    let unit_scale = units_per_kg(&weights, capacity);
    let capacity_units = snap(capacity * unit_scale).floor() as usize;
    let weight_units: Vec<usize> = weights
        .iter()
        .map(|w| snap(w * unit_scale).ceil() as usize)
        .collect();

    let total_distance: f64 = pending.iter().map(|p| p.distance()).sum();
    let scale = PriorityScale::new(capacity_units, unit_scale, total_distance);
    let scores: Vec<f64> = pending.iter().map(|p| scale.score(p)).collect();

    Ok(knapsack(capacity_units, &weight_units, &scores)?.selected)
}

/// Picks the identifiers of the packages to ship on the next trip.
///
/// # Examples
///
/// ```
/// use u_courier::models::Package;
/// use u_courier::selection::pick_packages_to_deliver;
///
/// let packages = vec![
///     Package::new("A", 50.0, 10.0),
///     Package::new("B", 75.0, 10.0),
///     Package::new("C", 100.0, 10.0),
/// ];
/// let pending: Vec<&Package> = packages.iter().collect();
///
/// // Any two fit in 200, all three do not: the heaviest pair wins.
/// let ids = pick_packages_to_deliver(&pending, 200.0).unwrap();
/// assert_eq!(ids, vec!["B", "C"]);
/// ```
pub fn pick_packages_to_deliver<'p>(
    pending: &[&'p Package],
    capacity: f64,
) -> Result<Vec<&'p str>, SelectionError> {
    let selected = select_packages(pending, capacity)?;
    Ok(selected.into_iter().map(|i| pending[i].id()).collect())
}

/// Returns `true` if a single package of this weight fits under `capacity`.
///
/// # Examples
///
/// ```
/// use u_courier::selection::fits_capacity;
///
/// assert!(fits_capacity(200.0, 200.0));
/// assert!(fits_capacity(200.5, 200.9));
/// assert!(!fits_capacity(200.01, 200.0));
/// ```
pub fn fits_capacity(weight: f64, capacity: f64) -> bool {
    weight <= capacity
}

/// Coarsest unit scale that makes every value whole and keeps the table
/// within [`MAX_TABLE_CELLS`].
fn units_per_kg(weights: &[f64], capacity: f64) -> f64 {
    let is_whole = |scale: f64| {
        std::iter::once(capacity)
            .chain(weights.iter().copied())
            .all(|value| snap(value * scale).fract() == 0.0)
    };
    let exact = UNIT_SCALES
        .iter()
        .position(|&scale| is_whole(scale))
        .unwrap_or(UNIT_SCALES.len() - 1);

    let items = weights.len() as f64;
    UNIT_SCALES[..=exact]
        .iter()
        .rev()
        .copied()
        .find(|&scale| (snap(capacity * scale).floor() + 1.0) * items <= MAX_TABLE_CELLS as f64)
        .unwrap_or(UNIT_SCALES[0])
}

fn checked_weight(package: &Package) -> Result<f64, SelectionError> {
    let weight = package.weight();
    if !weight.is_finite() || weight < 0.0 {
        return Err(SelectionError::InvalidWeight {
            id: package.id().to_string(),
            weight,
        });
    }
    Ok(weight)
}
