//! Error types for the uncertain-value library.
//!
//! Arithmetic on uncertain values never fails. Errors only come out of the
//! runtime-typed entry points (`try_new`, `try_binary`, `try_pow`) when an
//! argument is neither an exact number nor an uncertain value.

use std::fmt;
use thiserror::Error;

/// The field of an uncertain value an argument was bound to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    /// The nominal value
    Value,
    /// The absolute uncertainty
    Delta,
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Field::Value => f.write_str("value"),
            Field::Delta => f.write_str("delta"),
        }
    }
}

/// The main error type for the uncertain-value library.
///
/// Both variants are type errors: something other than an exact real number
/// (or an uncertain value, for operators) was supplied.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum UncertainError {
    /// A constructor argument was not an exact real number.
    #[error("unsupported {field} type: '{type_name}'")]
    UnsupportedField {
        /// The field the argument was bound to
        field: Field,
        /// Short name of the rejected argument's type
        type_name: String,
    },

    /// An operator was applied to an operand it cannot combine with.
    #[error("unsupported operand types for {operator}: '{left}' and '{right}'")]
    UnsupportedOperands {
        /// The operator symbol, e.g. `+` or `**`
        operator: &'static str,
        /// Short name of the left operand's type
        left: String,
        /// Short name of the right operand's type
        right: String,
    },
}

/// A specialized `Result` type for uncertain-value operations.
pub type Result<T> = std::result::Result<T, UncertainError>;

impl UncertainError {
    /// Create an error for a constructor argument of the wrong type.
    ///
    /// # Example
    /// ```
    /// use uncertain_value::error::{Field, UncertainError};
    ///
    /// let error = UncertainError::unsupported_field(Field::Delta, "String");
    /// assert_eq!(error.to_string(), "unsupported delta type: 'String'");
    /// ```
    pub fn unsupported_field(field: Field, type_name: impl Into<String>) -> Self {
        Self::UnsupportedField {
            field,
            type_name: type_name.into(),
        }
    }

    /// Create an error for an operator applied to unsupported operand types.
    ///
    /// # Example
    /// ```
    /// use uncertain_value::error::UncertainError;
    ///
    /// let error = UncertainError::unsupported_operands("*", "UncertainValue", "bool");
    /// assert!(error.to_string().contains("for *"));
    /// ```
    pub fn unsupported_operands(
        operator: &'static str,
        left: impl Into<String>,
        right: impl Into<String>,
    ) -> Self {
        Self::UnsupportedOperands {
            operator,
            left: left.into(),
            right: right.into(),
        }
    }
}

/// Returns the name of `T` with module paths stripped from every segment,
/// so `alloc::string::String` becomes `String` and
/// `core::option::Option<alloc::string::String>` becomes `Option<String>`.
pub(crate) fn short_type_name<T: ?Sized>() -> String {
    let full = std::any::type_name::<T>();
    let mut short = String::with_capacity(full.len());
    let mut path = String::new();

    for ch in full.chars() {
        if ch.is_alphanumeric() || ch == '_' || ch == ':' {
            path.push(ch);
        } else {
            short.push_str(path.rsplit("::").next().unwrap_or_default());
            path.clear();
            short.push(ch);
        }
    }
    short.push_str(path.rsplit("::").next().unwrap_or_default());
    short
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unsupported_value_error() {
        let error = UncertainError::unsupported_field(Field::Value, "&str");
        assert_eq!(error.to_string(), "unsupported value type: '&str'");
    }

    #[test]
    fn test_unsupported_delta_error() {
        let error = UncertainError::unsupported_field(Field::Delta, "Vec<u8>");
        assert_eq!(error.to_string(), "unsupported delta type: 'Vec<u8>'");
    }

    #[test]
    fn test_unsupported_operands_error() {
        let error = UncertainError::unsupported_operands("+", "UncertainValue", "&str");
        assert_eq!(
            error.to_string(),
            "unsupported operand types for +: 'UncertainValue' and '&str'"
        );
    }

    #[test]
    fn test_error_partial_eq() {
        let error1 = UncertainError::unsupported_operands("/", "i32", "i32");
        let error2 = UncertainError::unsupported_operands("/", "i32", "i32");
        let error3 = UncertainError::unsupported_operands("//", "i32", "i32");

        assert_eq!(error1, error2);
        assert_ne!(error1, error3);
    }

    #[test]
    fn test_short_type_name_strips_paths() {
        assert_eq!(short_type_name::<String>(), "String");
        assert_eq!(short_type_name::<&str>(), "&str");
        assert_eq!(short_type_name::<f64>(), "f64");
        assert_eq!(short_type_name::<Option<String>>(), "Option<String>");
        assert_eq!(short_type_name::<Vec<u8>>(), "Vec<u8>");
    }
}
