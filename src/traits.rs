#![allow(clippy::cast_precision_loss, clippy::cast_lossless)]

/// An exact (certain) real number: any Rust integer or floating-point primitive.
///
/// Exact numbers carry no uncertainty of their own. They can build an
/// [`UncertainValue`](crate::UncertainValue) and appear on either side of its
/// arithmetic operators.
pub trait Exact: Copy + 'static {
    /// Converts the number to the `f64` the engine computes with.
    fn to_f64(self) -> f64;
}

/// Invokes `$callback!` with the given leading tokens followed by every
/// primitive that implements [`Exact`].
macro_rules! with_exact_types {
    ($callback:ident!($($args:tt)*)) => {
        $callback! { $($args)* i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64 }
    };
}

pub(crate) use with_exact_types;

macro_rules! impl_exact {
    ($($t:ty),*) => {
        $(
            impl Exact for $t {
                #[inline]
                fn to_f64(self) -> f64 {
                    self as f64
                }
            }
        )*
    };
}

with_exact_types!(impl_exact!());

/// The floor-division operator (`//`).
///
/// For uncertain values this is a naming alias of true division: it applies
/// the division rules and does not floor or truncate the quotient.
pub trait FloorDiv<Rhs = Self> {
    /// The resulting type after applying `//`.
    type Output;

    /// Performs the `//` operation.
    #[must_use]
    fn floor_div(self, rhs: Rhs) -> Self::Output;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_integer_conversion() {
        assert!((42_i32.to_f64() - 42.0).abs() < f64::EPSILON);
        assert!((-7_i64.to_f64() + 7.0).abs() < f64::EPSILON);
        assert!((3_usize.to_f64() - 3.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_float_conversion() {
        assert!((0.5_f32.to_f64() - 0.5).abs() < f64::EPSILON);
        assert!((2.25_f64.to_f64() - 2.25).abs() < f64::EPSILON);
    }
}
