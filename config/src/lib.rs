//! # Config Crate
//!
//! Shared numbers for the ring mesh workspace: ring tessellation counts,
//! buffer limits, the float tolerance and the demo camera defaults.
//!
//! ## Usage
//!
//! ```rust
//! use config::constants::{DEFAULT_RING_SEGMENTS, EPSILON, MIN_RING_SEGMENTS};
//!
//! assert!(1e-11 < EPSILON);
//!
//! let requested: Option<u32> = None;
//! let segments = requested.unwrap_or(DEFAULT_RING_SEGMENTS);
//! assert!(segments >= MIN_RING_SEGMENTS);
//! ```
//!
//! The crate has no dependencies.

pub mod constants;

#[cfg(test)]
mod tests;
