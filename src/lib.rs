//! # uncertain-value
//!
//! Scalar measurements that carry an absolute error bound, with the bound
//! propagated automatically through arithmetic.
//!
//! ```rust
//! use uncertain_value::UncertainValue;
//!
//! let length = UncertainValue::new(10, 1); // 10 ± 1
//! let width = UncertainValue::new(5, 1); // 5 ± 1
//!
//! // Absolute errors add under addition and subtraction
//! assert_eq!((length + width).to_string(), "15 ± 2");
//!
//! // Relative errors add under multiplication and division
//! let area = length * width;
//! assert_eq!(area.value(), 50.0);
//! assert!((area.delta() - 15.0).abs() < 1e-9);
//! ```
//!
//! ## Propagation rules
//!
//! - **Two uncertain operands**: `+`/`-` sum the deltas; `*`/`/` sum the
//!   relative errors and scale by the result.
//! - **Uncertain and exact operand**: the exact number only shifts or scales
//!   the value. The delta is carried over unchanged, including for `*` and `/`.
//! - **Powers**: `x.pow(p)` has delta `x^p * p * relative_error`.
//! - **Floor division**: [`FloorDiv::floor_div`] is true division under the
//!   division rules.
//!
//! Operands whose types are only known at runtime go through
//! [`UncertainValue::try_new`], [`try_binary`] and [`UncertainValue::try_pow`],
//! which report unsupported types as [`UncertainError`].

pub mod error;
pub mod operations;
pub mod traits;
pub mod uncertain;

pub use error::{Result, UncertainError};
pub use operations::{BinaryOperation, Operand, try_binary};
pub use traits::{Exact, FloorDiv};
pub use uncertain::UncertainValue;
