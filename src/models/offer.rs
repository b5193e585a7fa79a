//! Offer and applicability range types.

use serde::Deserialize;

/// An inclusive `[min, max]` range used by offer conditions.
///
/// # Examples
///
/// ```
/// use u_courier::models::Bounds;
///
/// let b = Bounds::new(70.0, 200.0).unwrap();
/// assert!(b.contains(70.0));
/// assert!(b.contains(200.0));
/// assert!(!b.contains(69.9));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct Bounds {
    min: f64,
    max: f64,
}

impl Bounds {
    /// Creates a new range.
    ///
    /// Returns `None` if `min > max` or either value is non-finite.
    pub fn new(min: f64, max: f64) -> Option<Self> {
        let bounds = Self { min, max };
        bounds.is_valid().then_some(bounds)
    }

    // Unchecked; callers pass known-good constants.
    pub(crate) const fn inclusive(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// Lower bound (inclusive).
    pub fn min(&self) -> f64 {
        self.min
    }

    /// Upper bound (inclusive).
    pub fn max(&self) -> f64 {
        self.max
    }

    /// Returns `true` if the value lies within the range.
    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }

    pub(crate) fn is_valid(&self) -> bool {
        self.min.is_finite() && self.max.is_finite() && self.min <= self.max
    }
}

/// Weight and distance ranges a package must fall within for an offer.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct OfferConditions {
    /// Accepted package weight in kilograms.
    pub weight: Bounds,
    /// Accepted delivery distance in kilometres.
    pub distance: Bounds,
}

/// A named discount rule.
///
/// # Examples
///
/// ```
/// use u_courier::models::{Bounds, Offer, OfferConditions};
///
/// let offer = Offer::new(
///     0.1,
///     OfferConditions {
///         weight: Bounds::new(70.0, 200.0).unwrap(),
///         distance: Bounds::new(0.0, 200.0).unwrap(),
///     },
/// );
/// assert!(offer.applies_to(100.0, 50.0));
/// assert!(!offer.applies_to(50.0, 50.0));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct Offer {
    discount: f64,
    conditions: OfferConditions,
}

impl Offer {
    /// Creates an offer with the given discount fraction (0 to 1).
    pub fn new(discount: f64, conditions: OfferConditions) -> Self {
        Self {
            discount,
            conditions,
        }
    }

    /// Discount as a fraction of the pre-discount cost.
    pub fn discount(&self) -> f64 {
        self.discount
    }

    /// Applicability conditions.
    pub fn conditions(&self) -> &OfferConditions {
        &self.conditions
    }

    /// Returns `true` if the weight lies within the offer's weight range.
    pub fn is_discountable_weight(&self, weight: f64) -> bool {
        self.conditions.weight.contains(weight)
    }

    /// Returns `true` if the distance lies within the offer's distance range.
    pub fn is_discountable_distance(&self, distance: f64) -> bool {
        self.conditions.distance.contains(distance)
    }

    /// Returns `true` if both weight and distance satisfy the conditions.
    pub fn applies_to(&self, weight: f64, distance: f64) -> bool {
        self.is_discountable_weight(weight) && self.is_discountable_distance(distance)
    }

    pub(crate) fn is_valid(&self) -> bool {
        (0.0..=1.0).contains(&self.discount)
            && self.conditions.weight.is_valid()
            && self.conditions.distance.is_valid()
    }
}
