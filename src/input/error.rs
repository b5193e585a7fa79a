//! Errors raised while parsing and validating input text.

use thiserror::Error;

/// A problem with the input text. Line numbers are 1-based.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum InputError {
    /// The input has no non-blank lines.
    #[error("input is empty")]
    Empty,
    /// A required line is absent.
    #[error("invalid input: missing {expected}")]
    MissingLine {
        /// What was expected, e.g. "package lines".
        expected: &'static str,
    },
    /// A line has the wrong number of fields.
    #[error("invalid input: line {line}: expected {expected}, found {found} field(s)")]
    FieldCount {
        /// Line number.
        line: usize,
        /// Description of the expected layout.
        expected: &'static str,
        /// Number of fields found.
        found: usize,
    },
    /// A field is not a number.
    #[error("invalid input: line {line}: {field} {value:?} is not a number")]
    InvalidNumber {
        /// Line number.
        line: usize,
        /// Field name.
        field: &'static str,
        /// Raw field text.
        value: String,
    },
    /// A numeric field is zero, negative or non-finite.
    #[error("invalid input: line {line}: {field} must be a positive number, got {value}")]
    NotPositive {
        /// Line number.
        line: usize,
        /// Field name.
        field: &'static str,
        /// Parsed value.
        value: f64,
    },
    /// A count field is not a whole number.
    #[error("invalid input: line {line}: {field} must be a whole number, got {value}")]
    NotInteger {
        /// Line number.
        line: usize,
        /// Field name.
        field: &'static str,
        /// Parsed value.
        value: f64,
    },
    /// The header's package count disagrees with the package lines.
    #[error("invalid input: header declares {declared} package(s) but {found} package line(s) follow")]
    PackageCountMismatch {
        /// Count from the header.
        declared: usize,
        /// Package lines present.
        found: usize,
    },
    /// Two package lines share an identifier.
    #[error("invalid input: line {line}: package id {id:?} must be unique")]
    DuplicatePackageId {
        /// Line number of the repeat.
        line: usize,
        /// Repeated identifier.
        id: String,
    },
    /// A package is heavier than any vehicle can carry.
    #[error("invalid input: line {line}: package {id:?} weighs {weight} kg, more than the maximum carriable weight {max}")]
    PackageTooHeavy {
        /// Line number.
        line: usize,
        /// Package identifier.
        id: String,
        /// Package weight.
        weight: f64,
        /// Fleet weight limit.
        max: f64,
    },
}
