//! Machine-readable error codes.
//!
//! Every CrewDesk error type implements [`ErrorCode`] so that the
//! boundary (an HTTP handler, the CLI) can map failures without
//! matching on display strings.
//!
//! # Example
//!
//! ```
//! use crewdesk_types::ErrorCode;
//!
//! #[derive(Debug)]
//! enum LookupError {
//!     MissingTicket,
//!     StoreOffline,
//! }
//!
//! impl ErrorCode for LookupError {
//!     fn code(&self) -> &'static str {
//!         match self {
//!             Self::MissingTicket => "LOOKUP_MISSING_TICKET",
//!             Self::StoreOffline => "LOOKUP_STORE_OFFLINE",
//!         }
//!     }
//!
//!     fn is_recoverable(&self) -> bool {
//!         matches!(self, Self::StoreOffline)
//!     }
//! }
//!
//! assert_eq!(LookupError::StoreOffline.code(), "LOOKUP_STORE_OFFLINE");
//! assert!(!LookupError::MissingTicket.is_recoverable());
//! ```

/// Unified error code interface.
///
/// # Code Format
///
/// - UPPER_SNAKE_CASE, prefixed by the owning domain (`AUTH_`, `CONFIG_`)
/// - Stable once published; callers match on them
///
/// # Recoverability
///
/// An error is recoverable when retrying or a user action can fix it.
/// An access denial is never recoverable: the same inputs always
/// produce the same answer.
pub trait ErrorCode {
    /// Returns a machine-readable error code.
    fn code(&self) -> &'static str;

    /// Returns whether retrying or user action may succeed.
    fn is_recoverable(&self) -> bool;
}

/// Asserts that an error code follows the naming convention.
///
/// # Checks
///
/// 1. Code is UPPER_SNAKE_CASE
/// 2. Code starts with expected prefix
/// 3. Code is not empty
///
/// # Panics
///
/// Panics with descriptive message if validation fails.
///
/// # Example
///
/// ```
/// use crewdesk_types::{ErrorCode, assert_error_code};
///
/// #[derive(Debug)]
/// struct Denied;
///
/// impl ErrorCode for Denied {
///     fn code(&self) -> &'static str { "AUTH_DENIED" }
///     fn is_recoverable(&self) -> bool { false }
/// }
///
/// assert_error_code(&Denied, "AUTH_");
/// ```
pub fn assert_error_code<E: ErrorCode>(err: &E, expected_prefix: &str) {
    let code = err.code();

    // Check not empty
    assert!(!code.is_empty(), "Error code must not be empty");

    // Check prefix
    assert!(
        code.starts_with(expected_prefix),
        "Error code '{}' must start with prefix '{}'",
        code,
        expected_prefix
    );

    // Check UPPER_SNAKE_CASE
    assert!(
        is_upper_snake_case(code),
        "Error code '{}' must be UPPER_SNAKE_CASE",
        code
    );
}

/// Validates multiple error codes at once.
///
/// Use this to verify all variants of an error enum.
///
/// # Example
///
/// ```
/// use crewdesk_types::{ErrorCode, assert_error_codes};
///
/// #[derive(Debug)]
/// enum ConfigFault { Read, Parse }
///
/// impl ErrorCode for ConfigFault {
///     fn code(&self) -> &'static str {
///         match self {
///             Self::Read => "CONFIG_READ",
///             Self::Parse => "CONFIG_PARSE",
///         }
///     }
///     fn is_recoverable(&self) -> bool { true }
/// }
///
/// assert_error_codes(&[ConfigFault::Read, ConfigFault::Parse], "CONFIG_");
/// ```
pub fn assert_error_codes<E: ErrorCode>(errors: &[E], expected_prefix: &str) {
    for err in errors {
        assert_error_code(err, expected_prefix);
    }
}

/// Checks if a string is UPPER_SNAKE_CASE.
fn is_upper_snake_case(s: &str) -> bool {
    if s.is_empty() {
        return false;
    }

    // Must not start or end with underscore
    if s.starts_with('_') || s.ends_with('_') {
        return false;
    }

    // Must not have consecutive underscores
    if s.contains("__") {
        return false;
    }

    // All chars must be uppercase letters, digits, or underscore
    s.chars()
        .all(|c| c.is_ascii_uppercase() || c.is_ascii_digit() || c == '_')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug)]
    enum StoreError {
        Offline,
        Corrupt,
    }

    impl ErrorCode for StoreError {
        fn code(&self) -> &'static str {
            match self {
                Self::Offline => "STORE_OFFLINE",
                Self::Corrupt => "STORE_CORRUPT",
            }
        }

        fn is_recoverable(&self) -> bool {
            matches!(self, Self::Offline)
        }
    }

    #[test]
    fn codes_and_recoverability() {
        assert_eq!(StoreError::Offline.code(), "STORE_OFFLINE");
        assert!(StoreError::Offline.is_recoverable());
        assert!(!StoreError::Corrupt.is_recoverable());
    }

    #[test]
    fn all_variants_pass_convention() {
        assert_error_codes(&[StoreError::Offline, StoreError::Corrupt], "STORE_");
    }

    #[test]
    #[should_panic(expected = "must start with prefix")]
    fn wrong_prefix_panics() {
        assert_error_code(&StoreError::Offline, "AUTH_");
    }

    #[test]
    fn upper_snake_case_detection() {
        assert!(is_upper_snake_case("AUTH_DENIED"));
        assert!(is_upper_snake_case("CONFIG_ENV_2"));
        assert!(!is_upper_snake_case(""));
        assert!(!is_upper_snake_case("auth_denied"));
        assert!(!is_upper_snake_case("_AUTH"));
        assert!(!is_upper_snake_case("AUTH_"));
        assert!(!is_upper_snake_case("AUTH__DENIED"));
    }
}
