//! Core types: cells, configuration, RNG, errors.
//!
//! These are independent of the inference rules and shared by every
//! other module.

pub mod cell;
pub mod config;
pub mod rng;
pub mod error;

pub use cell::Cell;
pub use config::AgentConfig;
pub use rng::{AgentRng, AgentRngState};
pub use error::{ConfigError, StateError};
