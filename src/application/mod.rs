//! Application layer: the two core operations and their composition.
//!
//! [`validator::validate`] turns raw input into a [`DepositRequest`] or a full
//! list of reasons it was rejected; [`engine::compute`] turns a request into a
//! [`DepositResult`]. Both are pure and hold no state between calls, so they
//! can be called from any number of threads without coordination.
//!
//! [`DepositRequest`]: crate::domain::deposit::DepositRequest
//! [`DepositResult`]: crate::domain::deposit::DepositResult

pub mod engine;
pub mod validator;
