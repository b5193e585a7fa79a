//! Property-based tests for package selection, scheduling and pricing.
//!
//! # Invariants tested
//!
//! - **Capacity:** A selected shipment never exceeds the weight limit.
//! - **Optimality:** No subset fits with more packages, or with the same
//!   count and more weight, for heavy loads and fractional weights alike.
//! - **Completeness:** A full run delivers every package exactly once.
//! - **Travel time:** No package arrives before its one-way travel time.
//! - **Pricing:** Estimates are idempotent and discounts never exceed the
//!   pre-discount cost.

use std::collections::HashSet;

use proptest::prelude::*;
use u_courier::models::{Fleet, Package};
use u_courier::precision::{floor_to, DECIMAL_PLACES};
use u_courier::pricing::{delivery_cost_before_discount, CostEstimator, OfferTable};
use u_courier::scheduling::DeliveryScheduler;
use u_courier::selection::select_packages;

const OFFER_CODES: [&str; 5] = ["OFR001", "OFR002", "OFR003", "NA", "OFR999"];

/// Packages with whole-kilogram weights up to `max_weight`.
fn package_strategy(max_weight: u32, max_len: usize) -> impl Strategy<Value = Vec<Package>> {
    prop::collection::vec(
        (1..=max_weight, 1_u32..=500, 0..OFFER_CODES.len()),
        1..=max_len,
    )
    .prop_map(|specs| {
        specs
            .into_iter()
            .enumerate()
            .map(|(i, (weight, distance, code))| {
                Package::new(format!("PKG{}", i + 1), f64::from(weight), f64::from(distance))
                    .with_offer_code(OFFER_CODES[code])
            })
            .collect()
    })
}

/// Best (count, total units) over every subset within `capacity` units, by
/// brute force.
fn best_count_and_units(units: &[u64], capacity: u64) -> (usize, u64) {
    let mut best = (0, 0);
    for mask in 0_u32..(1 << units.len()) {
        let chosen = (0..units.len()).filter(|i| mask & (1 << i) != 0);
        let (count, total) = chosen.fold((0, 0), |(c, t), i| (c + 1, t + units[i]));
        if total <= capacity && (count, total) > best {
            best = (count, total);
        }
    }
    best
}

/// Asserts the selection fits and matches the brute-force optimum, with
/// weights and capacity given in integer units.
fn assert_optimal(
    units: &[u64],
    capacity: u64,
    packages: &[Package],
    capacity_kg: f64,
) -> Result<(), TestCaseError> {
    let pending: Vec<&Package> = packages.iter().collect();
    let selected = select_packages(&pending, capacity_kg).expect("valid input");

    let total: u64 = selected.iter().map(|&i| units[i]).sum();
    prop_assert!(total <= capacity, "selected {} units over capacity {}", total, capacity);
    prop_assert!(selected.windows(2).all(|w| w[0] < w[1]), "indexes not ascending: {:?}", selected);
    prop_assert_eq!((selected.len(), total), best_count_and_units(units, capacity));
    Ok(())
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// Property: the selection fits and no feasible subset beats it on
    /// count, or on weight at equal count.
    #[test]
    fn selection_is_feasible_and_optimal(
        packages in package_strategy(120, 8),
        capacity in 1_u32..=300,
    ) {
        let units: Vec<u64> = packages.iter().map(|p| p.weight() as u64).collect();
        assert_optimal(&units, u64::from(capacity), &packages, f64::from(capacity))?;
    }

    /// Property: loads far above ten tonnes still rank count before weight.
    #[test]
    fn selection_is_optimal_for_heavy_loads(
        weights in prop::collection::vec(1_000_u32..=40_000, 1..=6),
        capacity in 10_000_u32..=60_000,
    ) {
        let packages: Vec<Package> = weights
            .iter()
            .enumerate()
            .map(|(i, &w)| Package::new(format!("PKG{}", i + 1), f64::from(w), 10.0))
            .collect();
        let units: Vec<u64> = weights.iter().map(|&w| u64::from(w)).collect();
        assert_optimal(&units, u64::from(capacity), &packages, f64::from(capacity))?;
    }

    /// Property: weights and capacities in hundredths of a kilogram are
    /// packed exactly, without rounding to whole kilograms.
    #[test]
    fn selection_is_optimal_for_hundredths(
        hundredths in prop::collection::vec(1_u32..=10_000, 1..=6),
        capacity in 1_u32..=20_000,
    ) {
        let packages: Vec<Package> = hundredths
            .iter()
            .enumerate()
            .map(|(i, &h)| Package::new(format!("PKG{}", i + 1), f64::from(h) / 100.0, 10.0))
            .collect();
        let units: Vec<u64> = hundredths.iter().map(|&h| u64::from(h)).collect();
        assert_optimal(&units, u64::from(capacity), &packages, f64::from(capacity) / 100.0)?;
    }

    /// Property: every package is delivered exactly once, no earlier than its
    /// travel time, and every trip respects the weight limit.
    #[test]
    fn schedule_delivers_everything_once(
        (max_weight, packages) in (50_u32..=300).prop_flat_map(|max| {
            (Just(max), package_strategy(max, 12))
        }),
        vehicles in 1_usize..=4,
        speed in 10_u32..=100,
    ) {
        let offers = OfferTable::standard();
        let fleet = Fleet::new(vehicles, f64::from(speed), f64::from(max_weight)).expect("valid fleet");
        let scheduler = DeliveryScheduler::new(fleet, CostEstimator::new(100.0, &offers));

        let mut packages = packages;
        let shipments = scheduler.schedule(&mut packages).expect("schedulable");

        let mut seen = HashSet::new();
        for shipment in &shipments {
            prop_assert!(shipment.total_weight <= f64::from(max_weight));
            prop_assert!(shipment.vehicle_id < vehicles);
            for id in &shipment.package_ids {
                prop_assert!(seen.insert(id.clone()), "package {} shipped twice", id);
            }
        }
        prop_assert_eq!(seen.len(), packages.len());

        for package in &packages {
            let outcome = package.outcome().expect("delivered");
            let earliest = floor_to(package.distance() / f64::from(speed), DECIMAL_PLACES);
            prop_assert!(
                outcome.delivery_time >= earliest - 1e-9,
                "{} arrives at {} before {}",
                package.id(),
                outcome.delivery_time,
                earliest
            );
        }
    }

    /// Property: estimates are stable and the discount is bounded by the
    /// pre-discount cost.
    #[test]
    fn estimate_is_idempotent_and_bounded(
        base in 0_u32..=1000,
        weight in 0.0_f64..=300.0,
        distance in 0.0_f64..=300.0,
        code in 0..OFFER_CODES.len(),
    ) {
        let offers = OfferTable::standard();
        let estimator = CostEstimator::new(f64::from(base), &offers);
        let code = Some(OFFER_CODES[code]);

        let first = estimator.calculate_delivery_cost(weight, distance, code);
        let second = estimator.calculate_delivery_cost(weight, distance, code);
        prop_assert_eq!(first, second);

        let before = delivery_cost_before_discount(f64::from(base), weight, distance);
        prop_assert!(first.discount >= 0.0);
        prop_assert!(first.discount <= before + 0.005);
        prop_assert!((first.total_cost + first.discount - before).abs() <= 0.011);
    }
}
