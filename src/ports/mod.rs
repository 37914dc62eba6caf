//! Port traits the domain and CLI depend on.

pub mod config_port;
pub mod report_port;
