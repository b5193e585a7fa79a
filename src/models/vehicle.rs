//! Vehicle type tracking when it is free to depart.

/// A delivery vehicle in the fleet.
///
/// Each vehicle carries at most one shipment at a time and becomes available
/// again once it has returned from its last round trip.
///
/// # Examples
///
/// ```
/// use u_courier::models::Vehicle;
///
/// let v = Vehicle::new(0);
/// assert_eq!(v.id(), 0);
/// assert!(v.is_available_at(0.0));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Vehicle {
    id: usize,
    available_after: f64,
}

impl Vehicle {
    /// Creates a vehicle that is available from time zero.
    pub fn new(id: usize) -> Self {
        Self {
            id,
            available_after: 0.0,
        }
    }

    /// Vehicle ID.
    pub fn id(&self) -> usize {
        self.id
    }

    /// Simulated time (hours) at which the vehicle may depart again.
    pub fn available_after(&self) -> f64 {
        self.available_after
    }

    /// Returns `true` if the vehicle can depart at the given time.
    pub fn is_available_at(&self, time: f64) -> bool {
        self.available_after <= time
    }

    /// Marks the vehicle busy until it returns at `return_time`.
    pub(crate) fn dispatch(&mut self, return_time: f64) {
        self.available_after = return_time;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vehicle_new() {
        let v = Vehicle::new(3);
        assert_eq!(v.id(), 3);
        assert_eq!(v.available_after(), 0.0);
    }

    #[test]
    fn test_vehicle_dispatch() {
        let mut v = Vehicle::new(0);
        v.dispatch(3.56);
        assert!(!v.is_available_at(0.0));
        assert!(!v.is_available_at(3.55));
        assert!(v.is_available_at(3.56));
        assert!(v.is_available_at(10.0));
    }
}
