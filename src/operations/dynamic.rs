//! Operands whose types are only known at runtime.
//!
//! The `std::ops` impls cover every well-typed combination at compile time.
//! This module serves callers holding values of arbitrary `'static` types,
//! e.g. from a scripting layer or a heterogeneous collection: each argument is
//! resolved once into an [`Operand`], and anything that is neither an exact
//! number nor an [`UncertainValue`] is rejected with a type error.

use crate::UncertainValue;
use crate::error::{Result, UncertainError, short_type_name};
use crate::operations::arithmetic::BinaryOperation;
use crate::traits::{Exact, with_exact_types};
use std::any::Any;

/// Either side of an arithmetic operation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Operand {
    /// An exact number with no uncertainty
    Exact(f64),
    /// A value carrying an absolute uncertainty
    Uncertain(UncertainValue),
}

impl Operand {
    /// Resolves a value of any type into an operand.
    ///
    /// Returns `None` for types that are neither a numeric primitive, an
    /// [`UncertainValue`], nor an `Operand`.
    ///
    /// # Example
    /// ```rust
    /// use uncertain_value::{Operand, UncertainValue};
    ///
    /// assert_eq!(Operand::from_any(&3_u8), Some(Operand::Exact(3.0)));
    /// assert_eq!(Operand::from_any(&"3"), None);
    /// ```
    #[must_use]
    pub fn from_any<T: Any>(value: &T) -> Option<Self> {
        let any = value as &dyn Any;
        if let Some(operand) = any.downcast_ref::<Operand>() {
            return Some(*operand);
        }
        if let Some(uncertain) = any.downcast_ref::<UncertainValue>() {
            return Some(Operand::Uncertain(*uncertain));
        }
        exact_from_any(value).map(Operand::Exact)
    }
}

impl From<UncertainValue> for Operand {
    fn from(value: UncertainValue) -> Self {
        Operand::Uncertain(value)
    }
}

macro_rules! impl_exact_operand {
    ($($t:ty),*) => {
        $(
            impl From<$t> for Operand {
                fn from(value: $t) -> Self {
                    Operand::Exact(value.to_f64())
                }
            }
        )*

        /// Downcasts a value to `f64` if its type is a numeric primitive.
        pub(crate) fn exact_from_any<T: Any>(value: &T) -> Option<f64> {
            let any = value as &dyn Any;
            $(
                if let Some(number) = any.downcast_ref::<$t>() {
                    return Some(number.to_f64());
                }
            )*
            None
        }
    };
}

with_exact_types!(impl_exact_operand!());

/// Applies a binary operator to operands of any type.
///
/// # Errors
/// Returns [`UncertainError::UnsupportedOperands`] naming the operator and
/// both operand types when either operand is not operable, or when both are
/// exact numbers (that is ordinary arithmetic, not uncertainty propagation).
///
/// # Example
/// ```rust
/// use uncertain_value::{try_binary, BinaryOperation, UncertainValue};
///
/// let x = UncertainValue::new(10, 1);
/// assert_eq!(
///     try_binary(BinaryOperation::Sub, &5, &x).unwrap(),
///     UncertainValue::new(-5, 1)
/// );
///
/// let err = try_binary(BinaryOperation::Add, &x, &"x").unwrap_err();
/// assert_eq!(
///     err.to_string(),
///     "unsupported operand types for +: 'UncertainValue' and '&str'"
/// );
/// ```
pub fn try_binary<L: Any, R: Any>(
    operation: BinaryOperation,
    left: &L,
    right: &R,
) -> Result<UncertainValue> {
    let combined = match (Operand::from_any(left), Operand::from_any(right)) {
        (Some(left), Some(right)) => operation.apply(left, right),
        _ => None,
    };
    combined.ok_or_else(|| rejected_operands::<L, R>(operation.symbol()))
}

impl UncertainValue {
    /// Raises the uncertain value to a power whose type is only known at
    /// runtime.
    ///
    /// # Errors
    /// Returns [`UncertainError::UnsupportedOperands`] for `**` unless `power`
    /// is an exact number. An uncertain exponent is not supported.
    ///
    /// # Example
    /// ```rust
    /// use uncertain_value::UncertainValue;
    ///
    /// let x = UncertainValue::new(10, 1);
    /// assert_eq!(x.try_pow(&2).unwrap(), x.pow(2));
    /// assert!(x.try_pow(&x).is_err());
    /// ```
    pub fn try_pow<P: Any>(&self, power: &P) -> Result<UncertainValue> {
        match Operand::from_any(power) {
            Some(Operand::Exact(power)) => Ok(self.pow(power)),
            _ => Err(rejected_operands::<UncertainValue, P>("**")),
        }
    }
}

fn rejected_operands<L, R>(operator: &'static str) -> UncertainError {
    let left = short_type_name::<L>();
    let right = short_type_name::<R>();
    tracing::debug!(operator, %left, %right, "rejected operand types");
    UncertainError::unsupported_operands(operator, left, right)
}
