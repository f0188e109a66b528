use crate::UncertainValue;
use crate::operations::dynamic::Operand;
use crate::traits::{Exact, FloorDiv, with_exact_types};
use std::ops::{Add, Div, Mul, Sub};

/// Binary operators understood by the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOperation {
    Add,
    Sub,
    Mul,
    Div,
    /// Alias of [`BinaryOperation::Div`]; performs true division.
    FloorDiv,
}

impl BinaryOperation {
    /// The operator's symbol, as used in error messages.
    #[must_use]
    pub fn symbol(self) -> &'static str {
        match self {
            BinaryOperation::Add => "+",
            BinaryOperation::Sub => "-",
            BinaryOperation::Mul => "*",
            BinaryOperation::Div => "/",
            BinaryOperation::FloorDiv => "//",
        }
    }

    /// Combines two operands.
    ///
    /// Returns `None` when both operands are exact: that is plain numeric
    /// arithmetic and has no uncertainty to propagate.
    ///
    /// # Example
    /// ```rust
    /// use uncertain_value::{BinaryOperation, Operand, UncertainValue};
    ///
    /// let x = UncertainValue::new(10, 1);
    /// let sum = BinaryOperation::Add.apply(Operand::from(5), Operand::from(x));
    /// assert_eq!(sum, Some(UncertainValue::new(15, 1)));
    /// ```
    #[must_use]
    pub fn apply(self, left: Operand, right: Operand) -> Option<UncertainValue> {
        match (left, right) {
            (Operand::Uncertain(a), Operand::Uncertain(b)) => Some(self.both_uncertain(a, b)),
            (Operand::Exact(certain), Operand::Uncertain(u)) => Some(self.certain_left(certain, u)),
            (Operand::Uncertain(u), Operand::Exact(certain)) => Some(self.certain_right(u, certain)),
            (Operand::Exact(_), Operand::Exact(_)) => None,
        }
    }

    /// Plain arithmetic on two numbers, respecting operand order.
    fn combine(self, left: f64, right: f64) -> f64 {
        match self {
            BinaryOperation::Add => left + right,
            BinaryOperation::Sub => left - right,
            BinaryOperation::Mul => left * right,
            BinaryOperation::Div | BinaryOperation::FloorDiv => left / right,
        }
    }

    /// Sums absolute deltas for `+`/`-`, relative errors for `*`/`/`.
    fn both_uncertain(self, a: UncertainValue, b: UncertainValue) -> UncertainValue {
        let value = self.combine(a.value(), b.value());
        let delta = match self {
            BinaryOperation::Add | BinaryOperation::Sub => a.delta() + b.delta(),
            BinaryOperation::Mul | BinaryOperation::Div | BinaryOperation::FloorDiv => {
                value * (a.relative_error() + b.relative_error())
            }
        };
        UncertainValue::from_parts(value, delta)
    }

    // The certain operand adds no uncertainty and does not rescale the delta.
    fn certain_left(self, certain: f64, u: UncertainValue) -> UncertainValue {
        UncertainValue::from_parts(self.combine(certain, u.value()), u.delta())
    }

    fn certain_right(self, u: UncertainValue, certain: f64) -> UncertainValue {
        UncertainValue::from_parts(self.combine(u.value(), certain), u.delta())
    }
}

impl UncertainValue {
    /// Raises the uncertain value to an exact power.
    ///
    /// The delta follows the first-order power rule:
    /// `value^p * p * relative_error()`.
    ///
    /// # Example
    /// ```rust
    /// use uncertain_value::UncertainValue;
    ///
    /// let side = UncertainValue::new(10, 1);
    /// assert_eq!(side.pow(2), UncertainValue::new(100, 20));
    /// ```
    #[must_use]
    pub fn pow<P: Exact>(&self, power: P) -> UncertainValue {
        let power = power.to_f64();
        let value = self.value().powf(power);
        UncertainValue::from_parts(value, value * power * self.relative_error())
    }
}

macro_rules! impl_binary_operation {
    ($trait:ident, $method:ident, $op:expr) => {
        impl $trait for UncertainValue {
            type Output = UncertainValue;

            fn $method(self, rhs: UncertainValue) -> Self::Output {
                $op.both_uncertain(self, rhs)
            }
        }

        with_exact_types!(impl_binary_operation!(@exact $trait, $method, $op,));
    };
    (@exact $trait:ident, $method:ident, $op:expr, $($t:ty),*) => {
        $(
            impl $trait<$t> for UncertainValue {
                type Output = UncertainValue;

                fn $method(self, rhs: $t) -> Self::Output {
                    $op.certain_right(self, rhs.to_f64())
                }
            }

            impl $trait<UncertainValue> for $t {
                type Output = UncertainValue;

                fn $method(self, rhs: UncertainValue) -> Self::Output {
                    $op.certain_left(self.to_f64(), rhs)
                }
            }
        )*
    };
}

impl_binary_operation!(Add, add, BinaryOperation::Add);
impl_binary_operation!(Sub, sub, BinaryOperation::Sub);
impl_binary_operation!(Mul, mul, BinaryOperation::Mul);
impl_binary_operation!(Div, div, BinaryOperation::Div);
impl_binary_operation!(FloorDiv, floor_div, BinaryOperation::FloorDiv);

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn assert_close(actual: UncertainValue, value: f64, delta: f64) {
        assert_relative_eq!(actual.value(), value, epsilon = 1e-12);
        assert_relative_eq!(actual.delta(), delta, epsilon = 1e-12);
    }

    #[test]
    fn test_addition() {
        let sum = UncertainValue::new(10, 1) + UncertainValue::new(5, 2);
        assert_close(sum, 15.0, 3.0);
    }

    #[test]
    fn test_subtraction_sums_deltas() {
        let difference = UncertainValue::new(10, 1) - UncertainValue::new(5, 2);
        assert_close(difference, 5.0, 3.0);
    }

    #[test]
    fn test_scalar_addition() {
        assert_close(UncertainValue::new(10, 1) + 5, 15.0, 1.0);
        assert_close(5 + UncertainValue::new(10, 1), 15.0, 1.0);
        assert_close(2.5_f32 + UncertainValue::new(10, 1), 12.5, 1.0);
    }

    #[test]
    fn test_scalar_subtraction_respects_order() {
        assert_close(5 - UncertainValue::new(10, 1), -5.0, 1.0);
        assert_close(UncertainValue::new(10, 1) - 5, 5.0, 1.0);
    }

    #[test]
    fn test_multiplication_combines_relative_errors() {
        let product = UncertainValue::new(10, 1) * UncertainValue::new(5, 1);
        assert_close(product, 50.0, 15.0);
    }

    #[test]
    fn test_division_combines_relative_errors() {
        let quotient = UncertainValue::new(10, 1) / UncertainValue::new(5, 1);
        assert_close(quotient, 2.0, 0.6);
    }

    #[test]
    fn test_negative_product_keeps_delta_positive() {
        let product = UncertainValue::new(-10, 1) * UncertainValue::new(5, 1);
        assert_close(product, -50.0, 5.0);
    }

    // Scaling by an exact factor leaves the absolute delta as it was.
    #[test]
    fn test_scalar_multiplication_does_not_rescale_delta() {
        assert_close(UncertainValue::new(10, 1) * 5, 50.0, 1.0);
        assert_close(5 * UncertainValue::new(10, 1), 50.0, 1.0);
    }

    #[test]
    fn test_scalar_division_respects_order() {
        assert_close(UncertainValue::new(10, 1) / 4, 2.5, 1.0);
        assert_close(20 / UncertainValue::new(10, 1), 2.0, 1.0);
    }

    #[test]
    fn test_floor_div_is_true_division() {
        let a = UncertainValue::new(7, 1);
        let b = UncertainValue::new(2, 0.5);
        assert_eq!(a.floor_div(b), a / b);
        assert_eq!(a.floor_div(2), a / 2);
        assert_eq!(7_i32.floor_div(b), 7 / b);
        assert_close(a.floor_div(2), 3.5, 1.0);
    }

    #[test]
    fn test_pow() {
        assert_close(UncertainValue::new(10, 1).pow(2), 100.0, 20.0);
        assert_close(UncertainValue::new(4, 0.4).pow(0.5), 2.0, 0.1);
    }

    #[test]
    fn test_negative_pow_keeps_delta_positive() {
        assert_close(UncertainValue::new(2, 0.2).pow(-1), 0.5, 0.05);
    }

    #[test]
    fn test_apply_both_exact() {
        assert_eq!(
            BinaryOperation::Mul.apply(Operand::from(2), Operand::from(3)),
            None
        );
    }

    #[test]
    fn test_apply_matches_operators() {
        let a = UncertainValue::new(8, 0.5);
        let b = UncertainValue::new(2, 0.25);
        assert_eq!(
            BinaryOperation::Sub.apply(Operand::from(a), Operand::from(b)),
            Some(a - b)
        );
        assert_eq!(
            BinaryOperation::Div.apply(Operand::from(3), Operand::from(b)),
            Some(3 / b)
        );
    }

    #[test]
    fn test_complex_expression() {
        let x = UncertainValue::new(2, 0.1);
        let y = UncertainValue::new(3, 0.2);
        let result = (x + y) * 2 - 1;
        assert_close(result, 9.0, 0.3);
    }

    #[test]
    fn test_symbols() {
        assert_eq!(BinaryOperation::Add.symbol(), "+");
        assert_eq!(BinaryOperation::FloorDiv.symbol(), "//");
    }
}
