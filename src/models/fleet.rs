//! Fleet parameters shared by every vehicle.

/// A homogeneous fleet: vehicle count, speed, and per-trip weight limit.
///
/// # Examples
///
/// ```
/// use u_courier::models::Fleet;
///
/// let fleet = Fleet::new(2, 70.0, 200.0).unwrap();
/// assert_eq!(fleet.vehicle_count(), 2);
/// assert!(Fleet::new(0, 70.0, 200.0).is_none());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Fleet {
    vehicle_count: usize,
    max_speed: f64,
    max_carriable_weight: f64,
}

impl Fleet {
    /// Creates a fleet.
    ///
    /// Returns `None` if there are no vehicles, or if speed or weight limit is
    /// not a finite positive number.
    pub fn new(vehicle_count: usize, max_speed: f64, max_carriable_weight: f64) -> Option<Self> {
        let positive = |x: f64| x.is_finite() && x > 0.0;
        if vehicle_count == 0 || !positive(max_speed) || !positive(max_carriable_weight) {
            return None;
        }
        Some(Self {
            vehicle_count,
            max_speed,
            max_carriable_weight,
        })
    }

    /// Number of vehicles.
    pub fn vehicle_count(&self) -> usize {
        self.vehicle_count
    }

    /// Speed of every vehicle in km/h.
    pub fn max_speed(&self) -> f64 {
        self.max_speed
    }

    /// Maximum total weight per trip in kilograms.
    pub fn max_carriable_weight(&self) -> f64 {
        self.max_carriable_weight
    }

    /// One-way travel time in hours for the given distance.
    pub fn travel_time(&self, distance: f64) -> f64 {
        distance / self.max_speed
    }
}
