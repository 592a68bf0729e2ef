//! Domain layer: the value types a deposit calculation is made of.
//!
//! Nothing in here performs I/O. A [`deposit::DepositRequest`] can only exist
//! in a fully valid state, so the engine never has to re-check its inputs.

pub mod deposit;
pub mod frequency;
pub mod validation;
