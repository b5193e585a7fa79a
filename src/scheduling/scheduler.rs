//! Discrete-event delivery scheduler.
//!
//! Simulated time only moves forward. At each step the first free vehicle
//! takes the best next shipment from the pending packages; when no vehicle is
//! free, the clock jumps to the earliest return. The run ends once every
//! package has a delivery outcome.

use crate::models::{DeliveryOutcome, Fleet, Package, Shipment, Vehicle};
use crate::precision::{floor_to, DECIMAL_PLACES};
use crate::pricing::CostEstimator;
use crate::selection::select_packages;

use super::SchedulingError;

/// Assigns packages to vehicle trips and records cost and delivery time.
///
/// # Examples
///
/// ```
/// use u_courier::models::{Fleet, Package};
/// use u_courier::pricing::{CostEstimator, OfferTable};
/// use u_courier::scheduling::DeliveryScheduler;
///
/// let offers = OfferTable::standard();
/// let fleet = Fleet::new(1, 50.0, 200.0).unwrap();
/// let scheduler = DeliveryScheduler::new(fleet, CostEstimator::new(100.0, &offers));
///
/// let mut packages = vec![
///     Package::new("FAR", 10.0, 100.0),
///     Package::new("NEAR", 10.0, 50.0),
/// ];
/// let shipments = scheduler.schedule(&mut packages).unwrap();
///
/// // Both ship together; the vehicle is back after the longest round trip.
/// assert_eq!(shipments.len(), 1);
/// assert_eq!(shipments[0].return_time, 4.0);
/// assert_eq!(packages[0].outcome().unwrap().delivery_time, 2.0);
/// assert_eq!(packages[1].outcome().unwrap().delivery_time, 1.0);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct DeliveryScheduler<'a> {
    fleet: Fleet,
    estimator: CostEstimator<'a>,
}

impl<'a> DeliveryScheduler<'a> {
    /// Creates a scheduler for the given fleet and cost estimator.
    pub fn new(fleet: Fleet, estimator: CostEstimator<'a>) -> Self {
        Self { fleet, estimator }
    }

    /// The fleet being scheduled.
    pub fn fleet(&self) -> &Fleet {
        &self.fleet
    }

    /// Runs the simulation until every pending package is delivered.
    ///
    /// Packages that already carry an outcome are left untouched. Returns the
    /// trip log in dispatch order.
    ///
    /// # Errors
    ///
    /// - [`SchedulingError::NoVehicleAvailable`] if the clock reaches a point
    ///   with no free vehicle (an internal invariant violation)
    /// - [`SchedulingError::UndeliverablePackages`] if pending packages remain
    ///   but none fits within the fleet's weight limit
    /// - [`SchedulingError::Selection`] if a package weight is invalid
    pub fn schedule(&self, packages: &mut [Package]) -> Result<Vec<Shipment>, SchedulingError> {
        let mut vehicles: Vec<Vehicle> = (0..self.fleet.vehicle_count()).map(Vehicle::new).collect();
        let mut shipments = Vec::new();
        let mut now = 0.0;

        loop {
            let pending: Vec<usize> = packages
                .iter()
                .enumerate()
                .filter(|(_, p)| p.is_pending())
                .map(|(i, _)| i)
                .collect();
            if pending.is_empty() {
                break;
            }

            let vehicle_idx = vehicles
                .iter()
                .position(|v| v.is_available_at(now))
                .ok_or(SchedulingError::NoVehicleAvailable { time: now })?;

            let picked = self.next_shipment(packages, &pending)?;
            let shipment = self.ship(packages, &picked, vehicles[vehicle_idx].id(), now)?;
            vehicles[vehicle_idx].dispatch(shipment.return_time);
            log::debug!(
                "t={now}: vehicle {} departs with {:?} ({} kg), back at {}",
                shipment.vehicle_id,
                shipment.package_ids,
                shipment.total_weight,
                shipment.return_time
            );
            shipments.push(shipment);

            if !vehicles.iter().any(|v| v.is_available_at(now)) {
                now = vehicles
                    .iter()
                    .map(Vehicle::available_after)
                    .fold(f64::INFINITY, f64::min);
                log::trace!("clock advances to t={now}");
            }
        }

        Ok(shipments)
    }

    /// Chooses the next shipment, as indexes into `packages`.
    fn next_shipment(
        &self,
        packages: &[Package],
        pending: &[usize],
    ) -> Result<Vec<usize>, SchedulingError> {
        let candidates: Vec<&Package> = pending.iter().map(|&i| &packages[i]).collect();
        let selected = select_packages(&candidates, self.fleet.max_carriable_weight())?;
        if selected.is_empty() {
            return Err(SchedulingError::UndeliverablePackages {
                ids: candidates.iter().map(|p| p.id().to_string()).collect(),
            });
        }
        Ok(selected.into_iter().map(|k| pending[k]).collect())
    }

    /// Records delivery outcomes for a shipment departing at `now`.
    fn ship(
        &self,
        packages: &mut [Package],
        picked: &[usize],
        vehicle_id: usize,
        now: f64,
    ) -> Result<Shipment, SchedulingError> {
        let mut package_ids = Vec::with_capacity(picked.len());
        let mut total_weight = 0.0;
        let mut longest_leg = 0.0f64;

        for &i in picked {
            let package = &mut packages[i];
            let leg = self.fleet.travel_time(package.distance());
            longest_leg = longest_leg.max(floor_to(leg, DECIMAL_PLACES));

            let cost = self.estimator.estimate(package);
            let outcome = DeliveryOutcome {
                delivery_time: floor_to(leg + now, DECIMAL_PLACES),
                discount: cost.discount,
                total_cost: cost.total_cost,
            };
            if !package.record_delivery(outcome) {
                return Err(SchedulingError::AlreadyDelivered {
                    id: package.id().to_string(),
                });
            }
            package_ids.push(package.id().to_string());
            total_weight += package.weight();
        }

        Ok(Shipment {
            vehicle_id,
            departure_time: now,
            return_time: now + 2.0 * longest_leg,
            package_ids,
            total_weight,
        })
    }
}
