//! # Error Types
//!
//! Domain-specific error types for kiosk-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  kiosk-core errors (this file)                                         │
//! │  ├── CoreError        - Stock, recipe, order and payment failures      │
//! │  └── ValidationError  - Input validation failures                      │
//! │                                                                         │
//! │  kiosk-store errors (separate crate)                                   │
//! │  └── StoreError       - Order log failures                             │
//! │                                                                         │
//! │  kiosk-cli errors (in app)                                             │
//! │  └── AppError         - What the console operator sees                 │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → AppError → Console                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include context in error messages (ingredient id, amounts)
//! 3. Errors are enum variants, never String

use thiserror::Error;

use crate::money::Money;

// =============================================================================
// Core Error
// =============================================================================

/// Core business logic errors.
///
/// All of these are recoverable at the scope of a single order: the
/// console reports them and the kiosk keeps running.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CoreError {
    /// Ingredient identifier is not part of the inventory.
    #[error("Unknown ingredient: {0}")]
    UnknownIngredient(String),

    /// Not enough units left to satisfy a consumption.
    ///
    /// ## User Workflow
    /// ```text
    /// Build "Spicy"
    ///      │
    ///      ▼
    /// jalapeno: available=0
    ///      │
    ///      ▼
    /// OutOfStock { ingredient: "jalapeno", available: 0, requested: 1 }
    ///      │
    ///      ▼
    /// Console shows the error, the half-built hot dog is discarded
    /// ```
    #[error("Out of stock: {ingredient} (available {available}, requested {requested})")]
    OutOfStock {
        ingredient: String,
        available: u32,
        requested: u32,
    },

    /// Recipe name is not one of the standard recipes.
    #[error("Unknown recipe: {0}")]
    UnknownRecipe(String),

    /// Settlement was attempted for a zero or negative amount.
    #[error("Invalid payment amount: {amount}")]
    InvalidAmount { amount: Money },

    /// An order without hot dogs cannot be finalized.
    #[error("Order has no items")]
    EmptyOrder,

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// These errors occur when operator input or static configuration doesn't
/// meet requirements. Used for early validation before business logic runs.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Numeric value is out of range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: i64, max: i64 },

    /// Value must not be negative.
    #[error("{field} must not be negative")]
    MustNotBeNegative { field: String },

    /// Invalid format (e.g., not a number).
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },

    /// Duplicate value (e.g., duplicate ingredient id).
    #[error("{field} '{value}' already exists")]
    Duplicate { field: String, value: String },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = CoreError::OutOfStock {
            ingredient: "bun".to_string(),
            available: 0,
            requested: 1,
        };
        assert_eq!(
            err.to_string(),
            "Out of stock: bun (available 0, requested 1)"
        );

        let err = CoreError::UnknownIngredient("nonexistent".to_string());
        assert_eq!(err.to_string(), "Unknown ingredient: nonexistent");

        let err = CoreError::InvalidAmount {
            amount: Money::from_minor(-100),
        };
        assert_eq!(err.to_string(), "Invalid payment amount: -1.00₽");
    }

    #[test]
    fn test_validation_error_messages() {
        let err = ValidationError::Required {
            field: "ingredients".to_string(),
        };
        assert_eq!(err.to_string(), "ingredients is required");

        let err = ValidationError::OutOfRange {
            field: "recipe number".to_string(),
            min: 1,
            max: 3,
        };
        assert_eq!(err.to_string(), "recipe number must be between 1 and 3");
    }

    #[test]
    fn test_validation_converts_to_core_error() {
        let validation_err = ValidationError::Required {
            field: "ingredients".to_string(),
        };
        let core_err: CoreError = validation_err.into();
        assert!(matches!(core_err, CoreError::Validation(_)));
    }
}
