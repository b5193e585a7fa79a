//! Exact 0/1 knapsack by dynamic programming.
//!
//! # Algorithm
//!
//! `best[w]` holds the highest total value achievable with total weight at
//! most `w` using the items seen so far. Items are processed one at a time,
//! sweeping `w` downward so each item is used at most once. A keep table
//! records which items improved which cell; walking it backward from the full
//! capacity recovers the optimal subset.
//!
//! # Complexity
//!
//! O(n × C) time. Space is one `f64` row plus an n × C flag table, where
//! n = number of items and C = capacity.

use super::SelectionError;

/// Upper bound on keep-table cells (items × (capacity + 1)).
pub const MAX_TABLE_CELLS: usize = 1 << 28;

/// Result of a knapsack optimization.
#[derive(Debug, Clone, PartialEq)]
pub struct KnapsackResult {
    /// Indexes of the selected items, ascending.
    pub selected: Vec<usize>,
    /// Sum of the selected items' values.
    pub max_value: f64,
}

/// Solves the 0/1 knapsack problem exactly.
///
/// Ties are resolved in favour of the subset found first, so with equal
/// values earlier items win over later ones.
///
/// # Errors
///
/// [`SelectionError::LengthMismatch`] if `weights` and `values` differ in
/// length; [`SelectionError::TableTooLarge`] if the DP table would exceed
/// [`MAX_TABLE_CELLS`].
///
/// # Examples
///
/// ```
/// use u_courier::selection::knapsack;
///
/// let result = knapsack(50, &[10, 20, 30], &[60.0, 100.0, 120.0]).unwrap();
/// assert_eq!(result.selected, vec![1, 2]);
/// assert_eq!(result.max_value, 220.0);
/// ```
pub fn knapsack(
    capacity: usize,
    weights: &[usize],
    values: &[f64],
) -> Result<KnapsackResult, SelectionError> {
    if weights.len() != values.len() {
        return Err(SelectionError::LengthMismatch {
            weights: weights.len(),
            values: values.len(),
        });
    }

    let n = weights.len();
    if n == 0 {
        return Ok(KnapsackResult {
            selected: Vec::new(),
            max_value: 0.0,
        });
    }

    let width = capacity.saturating_add(1);
    match n.checked_mul(width) {
        Some(cells) if cells <= MAX_TABLE_CELLS => {}
        _ => return Err(SelectionError::TableTooLarge { items: n, capacity }),
    }

    let mut best = vec![0.0f64; width];
    // Row-major: keep[i * width + sz] is set when item i improved cell sz.
    let mut keep = vec![false; n * width];

    for (i, (&w, &v)) in weights.iter().zip(values).enumerate() {
        if w > capacity {
            continue;
        }
        let row = &mut keep[i * width..(i + 1) * width];
        for sz in (w..=capacity).rev() {
            let with_item = best[sz - w] + v;
            if with_item > best[sz] {
                best[sz] = with_item;
                row[sz] = true;
            }
        }
    }

    // Backtrack through the keep table
    let mut selected = Vec::new();
    let mut sz = capacity;
    for i in (0..n).rev() {
        if keep[i * width + sz] {
            selected.push(i);
            sz -= weights[i];
        }
    }
    selected.reverse();

    Ok(KnapsackResult {
        selected,
        max_value: best[capacity],
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_knapsack_classic() {
        let result = knapsack(50, &[10, 20, 30], &[60.0, 100.0, 120.0]).expect("valid");
        assert_eq!(result.max_value, 220.0);
        assert_eq!(result.selected, vec![1, 2]);
    }

    #[test]
    fn test_knapsack_empty() {
        let result = knapsack(50, &[], &[]).expect("valid");
        assert_eq!(result.max_value, 0.0);
        assert!(result.selected.is_empty());
    }

    #[test]
    fn test_knapsack_length_mismatch() {
        let err = knapsack(50, &[10, 20, 30], &[60.0, 100.0]).expect_err("mismatch");
        assert!(matches!(
            err,
            SelectionError::LengthMismatch {
                weights: 3,
                values: 2
            }
        ));
    }

    #[test]
    fn test_knapsack_nothing_fits() {
        let result = knapsack(1, &[5, 3, 2], &[1.0, 1.0, 1.0]).expect("valid");
        assert!(result.selected.is_empty());
        assert_eq!(result.max_value, 0.0);
    }

    #[test]
    fn test_knapsack_exact_fill() {
        let result = knapsack(10, &[5, 3, 2], &[1.0, 1.0, 1.0]).expect("valid");
        assert_eq!(result.selected, vec![0, 1, 2]);
        assert_eq!(result.max_value, 3.0);
    }

    #[test]
    fn test_knapsack_zero_capacity() {
        let result = knapsack(0, &[1, 2], &[5.0, 5.0]).expect("valid");
        assert!(result.selected.is_empty());
    }

    #[test]
    fn test_knapsack_tie_prefers_earlier() {
        let result = knapsack(5, &[5, 5], &[1.0, 1.0]).expect("valid");
        assert_eq!(result.selected, vec![0]);
    }

    #[test]
    fn test_knapsack_backtracks_across_rows() {
        // Item 2 alone scores 5, items 0 and 3 together score 6.
        let result = knapsack(7, &[3, 6, 7, 4], &[3.0, 4.0, 5.0, 3.0]).expect("valid");
        assert_eq!(result.selected, vec![0, 3]);
        assert_eq!(result.max_value, 6.0);
    }

    #[test]
    fn test_knapsack_just_over_table_limit() {
        // Two items at this capacity need exactly two cells too many.
        let err = knapsack(MAX_TABLE_CELLS / 2, &[1, 1], &[1.0, 1.0]).expect_err("too large");
        assert!(matches!(err, SelectionError::TableTooLarge { items: 2, .. }));
    }

    #[test]
    fn test_knapsack_table_too_large() {
        let err = knapsack(usize::MAX, &[1, 2], &[1.0, 1.0]).expect_err("too large");
        assert!(matches!(err, SelectionError::TableTooLarge { items: 2, .. }));
    }
}
