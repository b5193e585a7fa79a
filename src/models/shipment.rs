//! Shipment record for a single round trip.

/// One vehicle's round trip carrying a selected group of packages.
///
/// # Examples
///
/// ```
/// use u_courier::models::Shipment;
///
/// let s = Shipment {
///     vehicle_id: 0,
///     departure_time: 0.0,
///     return_time: 3.56,
///     package_ids: vec!["PKG2".to_string(), "PKG4".to_string()],
///     total_weight: 185.0,
/// };
/// assert_eq!(s.len(), 2);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Shipment {
    /// Vehicle that made the trip.
    pub vehicle_id: usize,
    /// Simulated departure time in hours.
    pub departure_time: f64,
    /// Simulated time the vehicle is back and free again.
    pub return_time: f64,
    /// Packages carried, in selection order.
    pub package_ids: Vec<String>,
    /// Sum of the package weights.
    pub total_weight: f64,
}

impl Shipment {
    /// Number of packages in this shipment.
    pub fn len(&self) -> usize {
        self.package_ids.len()
    }

    /// Returns `true` if the shipment carries nothing.
    pub fn is_empty(&self) -> bool {
        self.package_ids.is_empty()
    }

    /// Round-trip duration in hours.
    pub fn duration(&self) -> f64 {
        self.return_time - self.departure_time
    }
}
