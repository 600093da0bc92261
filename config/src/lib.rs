//! # Config Crate
//!
//! Centralized configuration constants for the spring mesh generator.
//! All magic numbers and tunable parameters are defined here so the
//! generator crates never scatter literals.
//!
//! ## Usage
//!
//! ```rust
//! use config::constants::{approx_zero, DEFAULT_SPLITS, EPSILON_TOLERANCE, MIN_SPLITS};
//!
//! // Use EPSILON_TOLERANCE for floating-point comparisons
//! let value: f64 = 1e-12;
//! assert!(value.abs() < EPSILON_TOLERANCE);
//! assert!(approx_zero(value));
//!
//! // Ring resolution defaults
//! let requested: Option<u32> = None;
//! let splits = requested.unwrap_or(DEFAULT_SPLITS);
//! assert!(splits >= MIN_SPLITS);
//! ```
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: All constants defined once, used everywhere
//! - **Browser-Safe**: No platform-specific values
//! - **Well-Documented**: Every constant has clear documentation

pub mod constants;

#[cfg(test)]
mod tests;
