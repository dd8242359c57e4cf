//! Prebuilt regular expressions for common field formats.
//!
//! These back the built-in checks (the email rule) and double as a
//! convenience library for `validation.pattern` authors who would rather
//! reference a vetted expression than write their own.

use std::sync::LazyLock;

use regex::Regex;

/// A loose email shape: something, an `@`, something, a dot, something.
/// Deliberately permissive; real verification happens out of band.
pub const EMAIL: &str = r"^[^\s@]+@[^\s@]+\.[^\s@]+$";

/// An Iranian mobile number: optional `+98` or `0` prefix, then `9` and
/// nine more digits.
pub const PHONE: &str = r"^(\+98|0)?9\d{9}$";

/// An Iranian national identity number: exactly ten digits.
pub const NATIONAL_ID: &str = r"^\d{10}$";

/// An Iranian postal code: exactly ten digits.
pub const POSTAL_CODE: &str = r"^\d{10}$";

/// An http or https URL.
pub const URL: &str = r"^https?://.+";

/// Arabic-script letters and spaces only.
pub const PERSIAN_TEXT: &str = r"^[\u{0600}-\u{06FF}\s]+$";

/// ASCII letters and spaces only.
pub const ENGLISH_TEXT: &str = r"^[a-zA-Z\s]+$";

/// ASCII letters and digits, no separators.
pub const ALPHANUMERIC: &str = r"^[a-zA-Z0-9]+$";

/// Digits only.
pub const NUMERIC: &str = r"^\d+$";

macro_rules! compiled {
    ($(#[$doc:meta])* $fn_name:ident, $pattern:expr) => {
        $(#[$doc])*
        #[must_use]
        pub fn $fn_name() -> &'static Regex {
            static RE: LazyLock<Regex> = LazyLock::new(|| {
                Regex::new($pattern).unwrap_or_else(|err| {
                    // Patterns above are constants verified by the tests
                    // below; a failure here is a crate bug.
                    panic!("builtin pattern failed to compile: {err}")
                })
            });
            &RE
        }
    };
}

compiled!(
    /// The compiled [`EMAIL`] pattern.
    email,
    EMAIL
);
compiled!(
    /// The compiled [`PHONE`] pattern.
    phone,
    PHONE
);
compiled!(
    /// The compiled [`NATIONAL_ID`] pattern.
    national_id,
    NATIONAL_ID
);
compiled!(
    /// The compiled [`POSTAL_CODE`] pattern.
    postal_code,
    POSTAL_CODE
);
compiled!(
    /// The compiled [`URL`] pattern.
    url,
    URL
);
compiled!(
    /// The compiled [`PERSIAN_TEXT`] pattern.
    persian_text,
    PERSIAN_TEXT
);
compiled!(
    /// The compiled [`ENGLISH_TEXT`] pattern.
    english_text,
    ENGLISH_TEXT
);
compiled!(
    /// The compiled [`ALPHANUMERIC`] pattern.
    alphanumeric,
    ALPHANUMERIC
);
compiled!(
    /// The compiled [`NUMERIC`] pattern.
    numeric,
    NUMERIC
);
