//! Package type and its recorded delivery outcome.

/// Cost and timing recorded for a package once it has shipped.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DeliveryOutcome {
    /// Estimated delivery time in hours from the start of the run.
    pub delivery_time: f64,
    /// Discount applied to the delivery cost.
    pub discount: f64,
    /// Delivery cost after discount.
    pub total_cost: f64,
}

/// A package to be priced and delivered.
///
/// Weight is in kilograms, distance in kilometres. The delivery outcome is
/// empty until the scheduler ships the package.
///
/// # Examples
///
/// ```
/// use u_courier::models::Package;
///
/// let pkg = Package::new("PKG1", 50.0, 30.0).with_offer_code("OFR001");
/// assert_eq!(pkg.id(), "PKG1");
/// assert_eq!(pkg.offer_code(), Some("OFR001"));
/// assert!(pkg.is_pending());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Package {
    id: String,
    weight: f64,
    distance: f64,
    offer_code: Option<String>,
    outcome: Option<DeliveryOutcome>,
}

impl Package {
    /// Creates a pending package without an offer code.
    pub fn new(id: impl Into<String>, weight: f64, distance: f64) -> Self {
        Self {
            id: id.into(),
            weight,
            distance,
            offer_code: None,
            outcome: None,
        }
    }

    /// Sets the offer code for this package.
    pub fn with_offer_code(mut self, code: impl Into<String>) -> Self {
        self.offer_code = Some(code.into());
        self
    }

    /// Package identifier.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Weight in kilograms.
    pub fn weight(&self) -> f64 {
        self.weight
    }

    /// Distance to destination in kilometres.
    pub fn distance(&self) -> f64 {
        self.distance
    }

    /// Offer code, if any.
    pub fn offer_code(&self) -> Option<&str> {
        self.offer_code.as_deref()
    }

    /// Delivery outcome, once shipped.
    pub fn outcome(&self) -> Option<&DeliveryOutcome> {
        self.outcome.as_ref()
    }

    /// Returns `true` if no delivery has been recorded yet.
    pub fn is_pending(&self) -> bool {
        self.outcome.is_none()
    }

    /// Records the delivery outcome.
    ///
    /// Returns `false` and leaves the package untouched if an outcome was
    /// already recorded.
    pub(crate) fn record_delivery(&mut self, outcome: DeliveryOutcome) -> bool {
        if self.outcome.is_some() {
            return false;
        }
        self.outcome = Some(outcome);
        true
    }
}
