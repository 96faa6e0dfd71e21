//! Command implementations.

pub mod corrupt;
pub mod run;
