//! # Application Error Type
//!
//! Unified error type for the console commands.
//!
//! ## Error Handling Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Flow in the Kiosk                              │
//! │                                                                         │
//! │  Operator input                                                         │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  ┌──────────────────────────────────────────────────────────────────┐  │
//! │  │  Command Function                                                │  │
//! │  │  Result<T, AppError>                                             │  │
//! │  │         │                                                        │  │
//! │  │         ▼                                                        │  │
//! │  │  Stock Error? ─── CoreError::OutOfStock ───────────┐            │  │
//! │  │         │                                          │            │  │
//! │  │         ▼                                          ▼            │  │
//! │  │  Log Error? ─── StoreError::Write ──────────── AppError ───────►│  │
//! │  │         │                                                        │  │
//! │  │         ▼                                                        │  │
//! │  │  Success ──────────────────────────────────────────────────────►│  │
//! │  └──────────────────────────────────────────────────────────────────┘  │
//! │                                                                         │
//! │  Console: "Error: Out of stock: jalapeno (available 0, requested 1)"    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Core and store errors are recoverable: the command reports them and the
//! loop continues. Only console I/O failures end the session.

use std::io;

use kiosk_core::CoreError;
use kiosk_store::StoreError;

/// Error surfaced to the console operator.
///
/// Printed as `Error: <message>`.
#[derive(Debug, Clone)]
pub struct AppError {
    /// Machine-readable error code
    pub code: ErrorCode,

    /// Human-readable error message for display
    pub message: String,
}

/// Error categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    /// Unknown ingredient or recipe
    NotFound,

    /// Operator input failed validation
    ValidationError,

    /// Not enough stock to build a hot dog
    InsufficientStock,

    /// Settlement rejected
    PaymentError,

    /// Order rule violated (e.g. empty order)
    BusinessLogic,

    /// Order log could not be written
    StorageError,

    /// Console input/output failed
    Io,
}

impl AppError {
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        AppError {
            code,
            message: message.into(),
        }
    }

    pub fn validation(message: impl Into<String>) -> Self {
        AppError::new(ErrorCode::ValidationError, message)
    }
}

/// Result type for console commands.
pub type AppResult<T> = Result<T, AppError>;

/// Converts core errors to application errors.
impl From<CoreError> for AppError {
    fn from(err: CoreError) -> Self {
        let code = match &err {
            CoreError::UnknownIngredient(_) | CoreError::UnknownRecipe(_) => ErrorCode::NotFound,
            CoreError::OutOfStock { .. } => ErrorCode::InsufficientStock,
            CoreError::InvalidAmount { .. } => ErrorCode::PaymentError,
            CoreError::EmptyOrder => ErrorCode::BusinessLogic,
            CoreError::Validation(inner) => {
                return AppError::validation(inner.to_string());
            }
        };
        AppError::new(code, err.to_string())
    }
}

impl From<kiosk_core::ValidationError> for AppError {
    fn from(err: kiosk_core::ValidationError) -> Self {
        AppError::validation(err.to_string())
    }
}

/// Converts order log errors to application errors.
impl From<StoreError> for AppError {
    fn from(err: StoreError) -> Self {
        tracing::error!(error = %err, "Order log failure");
        AppError::new(ErrorCode::StorageError, err.to_string())
    }
}

impl From<io::Error> for AppError {
    fn from(err: io::Error) -> Self {
        AppError::new(ErrorCode::Io, format!("Console I/O failed: {}", err))
    }
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{:?}] {}", self.code, self.message)
    }
}

impl std::error::Error for AppError {}
