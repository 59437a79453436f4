//! Unified error codes for the QE.SPACE content layer
//!
//! Error codes are organized by category:
//! - 0xxx: General errors
//! - 1xxx: Authentication errors
//! - 2xxx: Permission errors
//! - 3xxx: Lead errors
//! - 4xxx: Catalog errors
//! - 8xxx: Admin account errors
//! - 9xxx: System / storage errors

use serde::{Deserialize, Serialize};
use std::fmt;

/// Unified error code enum
///
/// All error codes are represented as u16 values so they serialize the same
/// way for the admin frontend and for logs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u16", try_from = "u16")]
#[repr(u16)]
pub enum ErrorCode {
    // ==================== 0xxx: General ====================
    /// Validation failed
    ValidationFailed = 2,
    /// Invalid format
    InvalidFormat = 6,
    /// Required field missing
    RequiredField = 7,
    /// Value out of range
    ValueOutOfRange = 8,

    // ==================== 1xxx: Auth ====================
    /// No admin session
    NotAuthenticated = 1001,
    /// Invalid phone/password pair
    InvalidCredentials = 1002,

    // ==================== 2xxx: Permission ====================
    /// The master account cannot be created or changed through the panel
    CannotModifyMaster = 2004,
    /// The master account cannot be deleted
    CannotDeleteMaster = 2005,
    /// The logged in account cannot delete itself
    CannotDeleteSelf = 2006,

    // ==================== 3xxx: Lead ====================
    /// Lead not found
    LeadNotFound = 3001,
    /// Lead filter date range is longer than allowed
    LeadDateRangeTooLong = 3002,

    // ==================== 4xxx: Catalog ====================
    /// Product not found
    ProductNotFound = 4001,
    /// Product id already used in another category
    ProductIdExists = 4002,
    /// Category not found
    CategoryNotFound = 4101,

    // ==================== 8xxx: Admin ====================
    /// Admin account not found
    AdminNotFound = 8001,
    /// Admin phone number already registered
    AdminPhoneExists = 8002,

    // ==================== 9xxx: System ====================
    /// Internal error
    InternalError = 9001,
    /// Durable storage error
    StorageError = 9002,
    /// Storage quota exceeded
    StorageFull = 9401,
}

impl ErrorCode {
    /// Get the numeric code value
    #[inline]
    pub const fn code(&self) -> u16 {
        *self as u16
    }

    /// Get the developer-facing English message for this error code
    pub const fn message(&self) -> &'static str {
        match self {
            // General
            ErrorCode::ValidationFailed => "Validation failed",
            ErrorCode::InvalidFormat => "Invalid format",
            ErrorCode::RequiredField => "Required field is missing",
            ErrorCode::ValueOutOfRange => "Value is out of range",

            // Auth
            ErrorCode::NotAuthenticated => "Admin is not logged in",
            ErrorCode::InvalidCredentials => "Invalid phone or password",

            // Permission
            ErrorCode::CannotModifyMaster => "The master account cannot be modified",
            ErrorCode::CannotDeleteMaster => "The master account cannot be deleted",
            ErrorCode::CannotDeleteSelf => "Cannot delete the account currently logged in",

            // Lead
            ErrorCode::LeadNotFound => "Lead not found",
            ErrorCode::LeadDateRangeTooLong => "Date range cannot exceed 3 months",

            // Catalog
            ErrorCode::ProductNotFound => "Product not found",
            ErrorCode::ProductIdExists => "Product id already exists",
            ErrorCode::CategoryNotFound => "Category not found",

            // Admin
            ErrorCode::AdminNotFound => "Admin account not found",
            ErrorCode::AdminPhoneExists => "Phone number already registered",

            // System
            ErrorCode::InternalError => "Internal error",
            ErrorCode::StorageError => "Storage error",
            ErrorCode::StorageFull => "Local storage quota exceeded",
        }
    }
}

impl From<ErrorCode> for u16 {
    #[inline]
    fn from(code: ErrorCode) -> Self {
        code.code()
    }
}

/// Error when converting from an invalid u16 to ErrorCode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidErrorCode(pub u16);

impl fmt::Display for InvalidErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid error code: {}", self.0)
    }
}

impl std::error::Error for InvalidErrorCode {}

impl TryFrom<u16> for ErrorCode {
    type Error = InvalidErrorCode;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        match value {
            // General
            2 => Ok(ErrorCode::ValidationFailed),
            6 => Ok(ErrorCode::InvalidFormat),
            7 => Ok(ErrorCode::RequiredField),
            8 => Ok(ErrorCode::ValueOutOfRange),

            // Auth
            1001 => Ok(ErrorCode::NotAuthenticated),
            1002 => Ok(ErrorCode::InvalidCredentials),

            // Permission
            2004 => Ok(ErrorCode::CannotModifyMaster),
            2005 => Ok(ErrorCode::CannotDeleteMaster),
            2006 => Ok(ErrorCode::CannotDeleteSelf),

            // Lead
            3001 => Ok(ErrorCode::LeadNotFound),
            3002 => Ok(ErrorCode::LeadDateRangeTooLong),

            // Catalog
            4001 => Ok(ErrorCode::ProductNotFound),
            4002 => Ok(ErrorCode::ProductIdExists),
            4101 => Ok(ErrorCode::CategoryNotFound),

            // Admin
            8001 => Ok(ErrorCode::AdminNotFound),
            8002 => Ok(ErrorCode::AdminPhoneExists),

            // System
            9001 => Ok(ErrorCode::InternalError),
            9002 => Ok(ErrorCode::StorageError),
            9401 => Ok(ErrorCode::StorageFull),

            _ => Err(InvalidErrorCode(value)),
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_code_values() {
        assert_eq!(ErrorCode::ValidationFailed.code(), 2);
        assert_eq!(ErrorCode::NotAuthenticated.code(), 1001);
        assert_eq!(ErrorCode::CannotDeleteMaster.code(), 2005);
        assert_eq!(ErrorCode::LeadNotFound.code(), 3001);
        assert_eq!(ErrorCode::ProductIdExists.code(), 4002);
        assert_eq!(ErrorCode::AdminPhoneExists.code(), 8002);
        assert_eq!(ErrorCode::StorageFull.code(), 9401);
    }

    #[test]
    fn test_error_code_round_trip_through_u16() {
        let all = [
            ErrorCode::RequiredField,
            ErrorCode::InvalidCredentials,
            ErrorCode::CannotDeleteSelf,
            ErrorCode::LeadDateRangeTooLong,
            ErrorCode::CategoryNotFound,
            ErrorCode::AdminNotFound,
            ErrorCode::StorageFull,
        ];
        for code in all {
            assert_eq!(ErrorCode::try_from(code.code()), Ok(code));
        }
    }

    #[test]
    fn test_invalid_code() {
        assert_eq!(ErrorCode::try_from(0), Err(InvalidErrorCode(0)));
        assert_eq!(ErrorCode::try_from(6001), Err(InvalidErrorCode(6001)));
        assert_eq!(
            InvalidErrorCode(42).to_string(),
            "invalid error code: 42"
        );
    }

    #[test]
    fn test_serialize_as_number() {
        let json = serde_json::to_string(&ErrorCode::AdminPhoneExists).unwrap();
        assert_eq!(json, "8002");
        let code: ErrorCode = serde_json::from_str("2005").unwrap();
        assert_eq!(code, ErrorCode::CannotDeleteMaster);
        assert!(serde_json::from_str::<ErrorCode>("7777").is_err());
    }
}
