use crate::error::{Field, Result, UncertainError, short_type_name};
use crate::operations::dynamic::exact_from_any;
use crate::traits::Exact;
use std::any::Any;
use std::fmt;

/// A measurement paired with its absolute uncertainty.
///
/// `UncertainValue` holds a nominal `value` and a non-negative `delta` (the
/// error bound, in the same units as the value). The delta is tracked
/// automatically through arithmetic with other uncertain values and with
/// exact numbers. Instances are immutable: every operation returns a new one.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(from = "RawUncertainValue"))]
pub struct UncertainValue {
    value: f64,
    delta: f64,
}

impl UncertainValue {
    /// Creates an uncertain value with the given value and delta.
    ///
    /// A negative delta is stored as its absolute magnitude.
    ///
    /// # Example
    /// ```rust
    /// use uncertain_value::UncertainValue;
    ///
    /// let length = UncertainValue::new(10, -1);
    /// assert_eq!(length.value(), 10.0);
    /// assert_eq!(length.delta(), 1.0);
    /// ```
    #[must_use]
    pub fn new<V: Exact, D: Exact>(value: V, delta: D) -> Self {
        Self::from_parts(value.to_f64(), delta.to_f64())
    }

    /// Creates an uncertain value from arguments whose types are only known at
    /// runtime.
    ///
    /// # Errors
    /// Returns [`UncertainError::UnsupportedField`] naming the field and the
    /// argument's type if `value` or `delta` is not an exact real number.
    /// `value` is checked first.
    ///
    /// # Example
    /// ```rust
    /// use uncertain_value::UncertainValue;
    ///
    /// let ok = UncertainValue::try_new(2.5_f32, 1_u8).unwrap();
    /// assert_eq!(ok, UncertainValue::new(2.5, 1));
    ///
    /// let err = UncertainValue::try_new("2.5", 1).unwrap_err();
    /// assert_eq!(err.to_string(), "unsupported value type: '&str'");
    /// ```
    pub fn try_new<V: Any, D: Any>(value: V, delta: D) -> Result<Self> {
        let Some(value) = exact_from_any(&value) else {
            return Err(rejected_field::<V>(Field::Value));
        };
        let Some(delta) = exact_from_any(&delta) else {
            return Err(rejected_field::<D>(Field::Delta));
        };
        Ok(Self::from_parts(value, delta))
    }

    /// Internal constructor shared by every operation; normalizes the delta.
    #[inline]
    pub(crate) fn from_parts(value: f64, delta: f64) -> Self {
        Self {
            value,
            delta: delta.abs(),
        }
    }

    /// The nominal value.
    #[must_use]
    pub fn value(&self) -> f64 {
        self.value
    }

    /// The absolute uncertainty, always non-negative.
    #[must_use]
    pub fn delta(&self) -> f64 {
        self.delta
    }

    /// Returns the relative error `delta / value`.
    ///
    /// A zero value is not special-cased: the result follows IEEE division
    /// (`inf` for a non-zero delta, `NaN` when the delta is zero too).
    ///
    /// # Example
    /// ```rust
    /// use uncertain_value::UncertainValue;
    ///
    /// let reading = UncertainValue::new(10, 1);
    /// assert!((reading.relative_error() - 0.1).abs() < f64::EPSILON);
    /// ```
    #[must_use]
    pub fn relative_error(&self) -> f64 {
        self.delta / self.value
    }

    /// Rounds the value and delta to the given numbers of decimal places.
    ///
    /// Ties round to even. Negative place counts round to the left of the
    /// decimal point.
    ///
    /// # Example
    /// ```rust
    /// use uncertain_value::UncertainValue;
    ///
    /// let pi = UncertainValue::new(3.14159, 0.00234);
    /// assert_eq!(pi.round(2, 3), UncertainValue::new(3.14, 0.002));
    /// ```
    #[must_use]
    pub fn round(&self, value_places: i32, delta_places: i32) -> Self {
        Self::from_parts(
            round_half_even(self.value, value_places),
            round_half_even(self.delta, delta_places),
        )
    }

    /// Rounds both the value and the delta to the nearest integer.
    #[must_use]
    pub fn round_whole(&self) -> Self {
        self.round(0, 0)
    }

    /// Lower end of the error bound, `value - delta`.
    #[must_use]
    pub fn lower(&self) -> f64 {
        self.value - self.delta
    }

    /// Upper end of the error bound, `value + delta`.
    #[must_use]
    pub fn upper(&self) -> f64 {
        self.value + self.delta
    }

    /// Checks whether `x` lies within `[value - delta, value + delta]`.
    ///
    /// # Example
    /// ```rust
    /// use uncertain_value::UncertainValue;
    ///
    /// let temperature = UncertainValue::new(20, 0.5);
    /// assert!(temperature.contains(20.4));
    /// assert!(!temperature.contains(21));
    /// ```
    #[must_use]
    pub fn contains<X: Exact>(&self, x: X) -> bool {
        let x = x.to_f64();
        self.lower() <= x && x <= self.upper()
    }
}

fn rejected_field<T>(field: Field) -> UncertainError {
    let type_name = short_type_name::<T>();
    tracing::debug!(%field, %type_name, "rejected uncertain value argument");
    UncertainError::unsupported_field(field, type_name)
}

fn round_half_even(x: f64, places: i32) -> f64 {
    if !x.is_finite() {
        return x;
    }

    if places >= 0 {
        // The formatter rounds the exact binary value, so 2.675 (stored just
        // below the tie) becomes 2.67 instead of picking up scaling error.
        let digits = places.unsigned_abs() as usize;
        return format!("{x:.digits$}").parse().unwrap_or(x);
    }

    let factor = 10_f64.powi(places.saturating_abs());
    if !factor.is_finite() {
        return 0.0_f64.copysign(x);
    }
    (x / factor).round_ties_even() * factor
}

impl fmt::Display for UncertainValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match f.precision() {
            Some(places) => write!(f, "{:.places$} ± {:.places$}", self.value, self.delta),
            None => write!(f, "{} ± {}", self.value, self.delta),
        }
    }
}

/// Wire shape for deserialization; routed through the constructor so a
/// negative delta is normalized like any other.
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RawUncertainValue {
    value: f64,
    delta: f64,
}

#[cfg(feature = "serde")]
impl From<RawUncertainValue> for UncertainValue {
    fn from(raw: RawUncertainValue) -> Self {
        Self::from_parts(raw.value, raw.delta)
    }
}
