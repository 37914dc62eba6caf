//! Core domain types and the analysis engine.

pub mod market;
pub mod input;
pub mod catalyst;
pub mod horizon;
pub mod trap;
pub mod strategy_fit;
pub mod verdict;
pub mod macro_context;
pub mod analysis;
pub mod config_validation;
pub mod error;
