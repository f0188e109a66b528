pub mod arithmetic;
pub mod dynamic;

pub use arithmetic::BinaryOperation;
pub use dynamic::{Operand, try_binary};
