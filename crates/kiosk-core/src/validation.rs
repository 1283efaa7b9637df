//! # Validation Module
//!
//! Input validation utilities for the kiosk.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Console (kiosk-cli)                                           │
//! │  └── Menu routing: unknown choices re-prompt                            │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: THIS MODULE                                                   │
//! │  ├── Recipe number parsing (numeric, in range)                          │
//! │  ├── Custom ingredient list parsing                                     │
//! │  └── Stock table checks (ids, prices)                                   │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: Domain operations                                             │
//! │  └── UnknownIngredient / OutOfStock / InvalidAmount                     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use kiosk_core::validation::{parse_ingredient_list, parse_menu_index};
//!
//! assert_eq!(parse_menu_index("2", 3).unwrap(), 1);
//! assert_eq!(
//!     parse_ingredient_list("bun, sausage ,ketchup").unwrap(),
//!     vec!["bun", "sausage", "ketchup"],
//! );
//! ```

use crate::error::ValidationError;
use crate::money::Money;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// Menu Input
// =============================================================================

/// Parses a 1-based menu number and returns the 0-based index.
///
/// ## Rules
/// - Must be an integer after trimming
/// - Must be between 1 and `count`
///
/// ## Example
/// ```rust
/// use kiosk_core::validation::parse_menu_index;
///
/// assert_eq!(parse_menu_index(" 1 ", 3).unwrap(), 0);
/// assert!(parse_menu_index("abc", 3).is_err());
/// assert!(parse_menu_index("4", 3).is_err());
/// ```
pub fn parse_menu_index(input: &str, count: usize) -> ValidationResult<usize> {
    let input = input.trim();

    if input.is_empty() {
        return Err(ValidationError::Required {
            field: "recipe number".to_string(),
        });
    }

    let number: i64 = input.parse().map_err(|_| ValidationError::InvalidFormat {
        field: "recipe number".to_string(),
        reason: format!("'{}' is not a number", input),
    })?;

    if number < 1 || number > count as i64 {
        return Err(ValidationError::OutOfRange {
            field: "recipe number".to_string(),
            min: 1,
            max: count as i64,
        });
    }

    Ok((number - 1) as usize)
}

/// Splits a comma-separated list of ingredient identifiers.
///
/// ## Rules
/// - Entries are trimmed
/// - Empty entries (`"bun,,sausage"`, trailing comma) are skipped
/// - At least one identifier is required
pub fn parse_ingredient_list(line: &str) -> ValidationResult<Vec<String>> {
    let ids: Vec<String> = line
        .split(',')
        .map(str::trim)
        .filter(|id| !id.is_empty())
        .map(str::to_string)
        .collect();

    if ids.is_empty() {
        return Err(ValidationError::Required {
            field: "ingredients".to_string(),
        });
    }

    Ok(ids)
}

// =============================================================================
// Stock Table Validators
// =============================================================================

/// Validates an ingredient identifier.
///
/// ## Rules
/// - Must not be empty
/// - Only lowercase ASCII letters, digits and underscores
///
/// ## Example
/// ```rust
/// use kiosk_core::validation::validate_ingredient_id;
///
/// assert!(validate_ingredient_id("sweet_onion").is_ok());
/// assert!(validate_ingredient_id("").is_err());
/// assert!(validate_ingredient_id("Sweet Onion").is_err());
/// ```
pub fn validate_ingredient_id(id: &str) -> ValidationResult<()> {
    if id.is_empty() {
        return Err(ValidationError::Required {
            field: "ingredient id".to_string(),
        });
    }

    if !id
        .chars()
        .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_')
    {
        return Err(ValidationError::InvalidFormat {
            field: "ingredient id".to_string(),
            reason: "must contain only lowercase letters, digits, and underscores".to_string(),
        });
    }

    Ok(())
}

/// Validates a unit price. Zero is allowed (free toppings).
pub fn validate_unit_price(price: Money) -> ValidationResult<()> {
    if price.is_negative() {
        return Err(ValidationError::MustNotBeNegative {
            field: "unit price".to_string(),
        });
    }

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================
