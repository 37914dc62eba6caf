//! tradelab: a multi-horizon trade analysis engine.
//!
//! Hexagonal architecture: the pure analysis engine lives in [`domain`], port
//! traits in [`ports`], file and report implementations in [`adapters`].

pub mod domain;
pub mod ports;
pub mod adapters;
pub mod cli;
