//! Game implementations.

pub mod knockout;
