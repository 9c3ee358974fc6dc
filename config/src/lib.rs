//! # Config Crate
//!
//! Centralized configuration constants for the circle contour kernel and the
//! trunk profile builder. All magic numbers and tunable parameters are defined
//! here so the geometry crates never carry literals of their own.
//!
//! ## Usage
//!
//! ```rust
//! use config::constants::{BOUNDS_MARGIN, DEFAULT_GRID_CELLS};
//!
//! // A circle of radius 2 contributes a half-extent of 2.4 to the bounds.
//! let half_extent = 2.0 * BOUNDS_MARGIN;
//! assert!(half_extent > 2.0);
//! assert!(DEFAULT_GRID_CELLS > 0);
//! ```
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: All constants defined once, used everywhere
//! - **Engine-Free**: No rendering or platform specific values
//! - **Validated Snapshots**: `KernelDefaults::new` rejects unusable values

pub mod constants;
