//! Per-package result rows and their text and JSON renderings.

use serde::Serialize;

use crate::models::Package;
use crate::pricing::CostEstimator;

/// Result row for one package.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PackageReport {
    /// Package identifier.
    pub id: String,
    /// Discount applied.
    pub discount: f64,
    /// Cost after discount.
    pub total_cost: f64,
    /// Estimated delivery time in hours, for arranged deliveries.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub delivery_time: Option<f64>,
}

impl PackageReport {
    /// Renders the row as space-separated fields.
    ///
    /// Numbers use their shortest exact form, so `750.0` prints as `750`.
    ///
    /// # Examples
    ///
    /// ```
    /// use u_courier::report::PackageReport;
    ///
    /// let row = PackageReport {
    ///     id: "PKG4".to_string(),
    ///     discount: 105.0,
    ///     total_cost: 1395.0,
    ///     delivery_time: Some(0.85),
    /// };
    /// assert_eq!(row.to_line(), "PKG4 105 1395 0.85");
    /// ```
    pub fn to_line(&self) -> String {
        match self.delivery_time {
            Some(time) => format!("{} {} {} {}", self.id, self.discount, self.total_cost, time),
            None => format!("{} {} {}", self.id, self.discount, self.total_cost),
        }
    }
}

/// Prices every package without scheduling, in input order.
pub fn estimation_report(estimator: &CostEstimator<'_>, packages: &[Package]) -> Vec<PackageReport> {
    packages
        .iter()
        .map(|package| {
            let cost = estimator.estimate(package);
            PackageReport {
                id: package.id().to_string(),
                discount: cost.discount,
                total_cost: cost.total_cost,
                delivery_time: None,
            }
        })
        .collect()
}

/// Reports delivered packages in input order. Pending packages are omitted.
pub fn arrangement_report(packages: &[Package]) -> Vec<PackageReport> {
    packages
        .iter()
        .filter_map(|package| {
            package.outcome().map(|outcome| PackageReport {
                id: package.id().to_string(),
                discount: outcome.discount,
                total_cost: outcome.total_cost,
                delivery_time: Some(outcome.delivery_time),
            })
        })
        .collect()
}

/// Renders rows one per line, without a trailing newline.
pub fn render_text(rows: &[PackageReport]) -> String {
    rows.iter()
        .map(PackageReport::to_line)
        .collect::<Vec<_>>()
        .join("\n")
}

/// Renders rows as a pretty-printed JSON array.
pub fn render_json(rows: &[PackageReport]) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(rows)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{DeliveryOutcome, Fleet};
    use crate::pricing::OfferTable;
    use crate::scheduling::DeliveryScheduler;

    #[test]
    fn test_estimation_report() {
        let offers = OfferTable::standard();
        let estimator = CostEstimator::new(100.0, &offers);
        let packages = vec![
            Package::new("PKG1", 5.0, 5.0).with_offer_code("OFR001"),
            Package::new("PKG2", 15.0, 5.0).with_offer_code("OFR002"),
            Package::new("PKG3", 10.0, 100.0).with_offer_code("OFR003"),
        ];
        let text = render_text(&estimation_report(&estimator, &packages));
        assert_eq!(text, "PKG1 0 175\nPKG2 0 275\nPKG3 35 665");
    }

    #[test]
    fn test_arrangement_report_skips_pending() {
        let mut delivered = Package::new("A", 1.0, 1.0);
        assert!(delivered.record_delivery(DeliveryOutcome {
            delivery_time: 0.5,
            discount: 0.0,
            total_cost: 115.0,
        }));
        let rows = arrangement_report(&[delivered, Package::new("B", 1.0, 1.0)]);
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].to_line(), "A 0 115 0.5");
    }

    #[test]
    fn test_arrangement_report_after_schedule() {
        let offers = OfferTable::standard();
        let fleet = Fleet::new(1, 50.0, 200.0).expect("valid");
        let scheduler = DeliveryScheduler::new(fleet, CostEstimator::new(100.0, &offers));
        let mut packages = vec![Package::new("A", 10.0, 100.0), Package::new("B", 10.0, 50.0)];
        scheduler.schedule(&mut packages).expect("schedulable");
        let text = render_text(&arrangement_report(&packages));
        assert_eq!(text, "A 0 700 2\nB 0 450 1");
    }

    #[test]
    fn test_render_json() {
        let rows = vec![
            PackageReport {
                id: "PKG1".to_string(),
                discount: 0.0,
                total_cost: 175.0,
                delivery_time: None,
            },
            PackageReport {
                id: "PKG2".to_string(),
                discount: 70.0,
                total_cost: 630.0,
                delivery_time: Some(1.42),
            },
        ];
        let json = render_json(&rows).expect("serializable");
        let value: serde_json::Value = serde_json::from_str(&json).expect("valid json");
        assert_eq!(value[0]["id"], "PKG1");
        assert!(value[0].get("delivery_time").is_none());
        assert_eq!(value[1]["total_cost"], 630.0);
        assert_eq!(value[1]["delivery_time"], 1.42);
    }

    #[test]
    fn test_render_text_empty() {
        assert_eq!(render_text(&[]), "");
    }
}
