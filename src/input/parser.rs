//! Line-oriented parser for the estimation and arrangement input formats.
//!
//! ```text
//! base_delivery_cost no_of_packages
//! pkg_id weight_kg distance_km [offer_code]
//! ...
//! no_of_vehicles max_speed max_carriable_weight   (arrangement only)
//! ```
//!
//! Blank lines and surrounding whitespace are ignored; fields are separated by
//! any run of whitespace.

use std::collections::HashSet;

use crate::models::{Fleet, Package};
use crate::selection::fits_capacity;

use super::InputError;

/// Validated input for cost estimation.
#[derive(Debug, Clone, PartialEq)]
pub struct EstimationInput {
    /// Base delivery cost applied to every package.
    pub base_delivery_cost: f64,
    /// Packages in input order.
    pub packages: Vec<Package>,
}

/// Validated input for delivery arrangement.
#[derive(Debug, Clone, PartialEq)]
pub struct ArrangementInput {
    /// Base delivery cost applied to every package.
    pub base_delivery_cost: f64,
    /// Packages in input order.
    pub packages: Vec<Package>,
    /// Fleet described by the footer line.
    pub fleet: Fleet,
}

/// A non-blank input line with its 1-based number.
#[derive(Debug, Clone, Copy)]
struct Line<'a> {
    number: usize,
    fields: &'a str,
}

impl<'a> Line<'a> {
    fn fields(&self) -> Vec<&'a str> {
        self.fields.split_whitespace().collect()
    }
}

/// Parses and validates cost-estimation input.
///
/// # Examples
///
/// ```
/// use u_courier::input::parse_estimation_input;
///
/// let input = "100 3\nPKG1 5 5 OFR001\nPKG2 15 5 OFR002\nPKG3 10 100 OFR003\n";
/// let parsed = parse_estimation_input(input).unwrap();
/// assert_eq!(parsed.base_delivery_cost, 100.0);
/// assert_eq!(parsed.packages.len(), 3);
/// assert_eq!(parsed.packages[2].offer_code(), Some("OFR003"));
/// ```
pub fn parse_estimation_input(input: &str) -> Result<EstimationInput, InputError> {
    let lines = non_blank_lines(input)?;
    let (header, package_lines) = lines.split_first().ok_or(InputError::Empty)?;
    let (base_delivery_cost, declared) = parse_header(header)?;
    let packages = parse_packages(package_lines, declared)?;
    Ok(EstimationInput {
        base_delivery_cost,
        packages,
    })
}

/// Parses and validates delivery-arrangement input.
///
/// Rejects any package heavier than the fleet's maximum carriable weight,
/// since such a package could never be shipped.
///
/// # Examples
///
/// ```
/// use u_courier::input::parse_arrangement_input;
///
/// let input = "100 2\nPKG1 50 30 OFR001\nPKG2 75 125 OFFR0008\n2 70 200\n";
/// let parsed = parse_arrangement_input(input).unwrap();
/// assert_eq!(parsed.packages.len(), 2);
/// assert_eq!(parsed.fleet.vehicle_count(), 2);
/// assert_eq!(parsed.fleet.max_carriable_weight(), 200.0);
/// ```
pub fn parse_arrangement_input(input: &str) -> Result<ArrangementInput, InputError> {
    let lines = non_blank_lines(input)?;
    let (header, rest) = lines.split_first().ok_or(InputError::Empty)?;
    let (footer, package_lines) = rest.split_last().ok_or(InputError::MissingLine {
        expected: "fleet line (no_of_vehicles max_speed max_carriable_weight)",
    })?;
    if package_lines.is_empty() {
        return Err(InputError::MissingLine {
            expected: "package lines",
        });
    }

    let (base_delivery_cost, declared) = parse_header(header)?;
    let fleet = parse_fleet(footer)?;
    let packages = parse_packages(package_lines, declared)?;

    for (line, package) in package_lines.iter().zip(&packages) {
        if !fits_capacity(package.weight(), fleet.max_carriable_weight()) {
            return Err(InputError::PackageTooHeavy {
                line: line.number,
                id: package.id().to_string(),
                weight: package.weight(),
                max: fleet.max_carriable_weight(),
            });
        }
    }

    Ok(ArrangementInput {
        base_delivery_cost,
        packages,
        fleet,
    })
}

fn non_blank_lines(input: &str) -> Result<Vec<Line<'_>>, InputError> {
    let lines: Vec<Line<'_>> = input
        .lines()
        .enumerate()
        .map(|(i, text)| Line {
            number: i + 1,
            fields: text.trim(),
        })
        .filter(|line| !line.fields.is_empty())
        .collect();
    if lines.is_empty() {
        return Err(InputError::Empty);
    }
    Ok(lines)
}

fn parse_header(line: &Line<'_>) -> Result<(f64, usize), InputError> {
    let fields = line.fields();
    let [cost, count] = fields.as_slice() else {
        return Err(InputError::FieldCount {
            line: line.number,
            expected: "2 fields (base_delivery_cost no_of_packages)",
            found: fields.len(),
        });
    };
    let base_delivery_cost = positive(line.number, "base_delivery_cost", cost)?;
    let declared = whole(line.number, "no_of_packages", count)?;
    Ok((base_delivery_cost, declared))
}

fn parse_fleet(line: &Line<'_>) -> Result<Fleet, InputError> {
    let fields = line.fields();
    let [vehicles, speed, max_weight] = fields.as_slice() else {
        return Err(InputError::FieldCount {
            line: line.number,
            expected: "3 fields (no_of_vehicles max_speed max_carriable_weight)",
            found: fields.len(),
        });
    };
    let vehicle_count = whole(line.number, "no_of_vehicles", vehicles)?;
    let max_speed = positive(line.number, "max_speed", speed)?;
    let max_carriable_weight = positive(line.number, "max_carriable_weight", max_weight)?;
    // Unreachable: every field was checked above.
    Fleet::new(vehicle_count, max_speed, max_carriable_weight).ok_or(InputError::NotPositive {
        line: line.number,
        field: "no_of_vehicles",
        value: 0.0,
    })
}

fn parse_packages(lines: &[Line<'_>], declared: usize) -> Result<Vec<Package>, InputError> {
    if declared != lines.len() {
        return Err(InputError::PackageCountMismatch {
            declared,
            found: lines.len(),
        });
    }

    let mut seen = HashSet::with_capacity(lines.len());
    let mut packages = Vec::with_capacity(lines.len());
    for line in lines {
        let package = parse_package(line)?;
        if !seen.insert(package.id().to_string()) {
            return Err(InputError::DuplicatePackageId {
                line: line.number,
                id: package.id().to_string(),
            });
        }
        packages.push(package);
    }
    Ok(packages)
}

fn parse_package(line: &Line<'_>) -> Result<Package, InputError> {
    let fields = line.fields();
    let (id, weight, distance, offer_code) = match fields.as_slice() {
        [id, weight, distance] => (id, weight, distance, None),
        [id, weight, distance, code] => (id, weight, distance, Some(*code)),
        _ => {
            return Err(InputError::FieldCount {
                line: line.number,
                expected: "3 or 4 fields (pkg_id weight distance [offer_code])",
                found: fields.len(),
            })
        }
    };
    let weight = positive(line.number, "package weight", weight)?;
    let distance = positive(line.number, "package distance", distance)?;

    let package = Package::new(*id, weight, distance);
    Ok(match offer_code {
        Some(code) => package.with_offer_code(code),
        None => package,
    })
}

fn number(line: usize, field: &'static str, raw: &str) -> Result<f64, InputError> {
    raw.parse::<f64>().map_err(|_| InputError::InvalidNumber {
        line,
        field,
        value: raw.to_string(),
    })
}

fn positive(line: usize, field: &'static str, raw: &str) -> Result<f64, InputError> {
    let value = number(line, field, raw)?;
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(InputError::NotPositive { line, field, value })
    }
}

fn whole(line: usize, field: &'static str, raw: &str) -> Result<usize, InputError> {
    let value = positive(line, field, raw)?;
    if value.fract() != 0.0 || value > usize::MAX as f64 {
        return Err(InputError::NotInteger { line, field, value });
    }
    Ok(value as usize)
}
