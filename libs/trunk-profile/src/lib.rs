//! # Trunk Profile
//!
//! Builds the cross-section ring of a trunk at any height. The trunk and its
//! roots are each one circle whose center and radius follow a
//! [`ProgressiveBranch`] descriptor; the ring is the outline of their union.
//!
//! ## Architecture
//!
//! ```text
//! ProgressiveBranch list (index 0 = trunk)
//!       ↓ evaluate at normalized height
//! full ContourPipeline  ← every circle
//! ctrl ContourPipeline  ← trunk circle only
//!       ↓
//! ring samples scaled by ctrl_factor
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use trunk_profile::{EasingCurve, ProfileBuilder, ProfileSettings, ProgressiveBranch, Vec2};
//!
//! let trunk = ProgressiveBranch::trunk(Vec2::ZERO, Vec2::ZERO, 1.0, 0.5, EasingCurve::Linear);
//! let mut builder = ProfileBuilder::new(trunk, 10.0, ProfileSettings::default()).unwrap();
//!
//! let segment = builder.get_segment(0.0, 16).unwrap();
//! assert_eq!(segment.samples.len(), 17);
//! assert!((segment.samples[0].point.length() - 1.0).abs() < 1e-9);
//! ```

pub mod branch;
pub mod builder;
pub mod curve;
pub mod error;
pub mod roots;
pub mod settings;

pub use branch::{BranchKind, BranchState, ProgressiveBranch};
pub use builder::{ProfileBuilder, ProfileSegment, RingSample};
pub use contour_kernel::Vec2;
pub use curve::EasingCurve;
pub use error::{ProfileError, ProfileResult};
pub use roots::{simulate_roots, RootGeometry, RootSource};
pub use settings::ProfileSettings;
