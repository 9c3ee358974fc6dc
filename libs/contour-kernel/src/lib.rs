//! # Contour Kernel
//!
//! Extracts the outline of a union of circles with marching squares and
//! resamples it by arc length.
//!
//! ## Architecture
//!
//! ```text
//! CircleSet (circles + bounds)
//!       ↓
//! field   (in/out per grid point, rayon)
//!       ↓
//! cells   (4-bit case per grid cell)
//!       ↓
//! tracer  (closed boundary walks)
//!       ↓
//! post    (smoothing, cardinal shift, normals)
//!       ↓
//! sampler (arc-length lookup)
//! ```
//!
//! `ContourPipeline` owns every stage's buffers and reruns the chain on
//! demand. Nothing is shared between pipeline instances.
//!
//! ## Usage
//!
//! ```rust
//! use contour_kernel::{ContourPipeline, PipelineSettings, Vec2};
//!
//! let mut pipeline = ContourPipeline::new(PipelineSettings::default());
//! pipeline.add_circle(Vec2::ZERO, 1.0, false);
//! pipeline.add_circle(Vec2::new(1.2, 0.0), 1.0, false);
//! pipeline.rebuild();
//!
//! assert_eq!(pipeline.paths().len(), 1);
//! let sample = pipeline.get_point(0, 0.5, true).unwrap();
//! assert!(sample.point.length() > 0.5);
//! ```

pub mod cells;
pub mod circle_set;
pub mod error;
pub mod field;
pub mod geometry;
pub mod path;
pub mod pipeline;
pub mod post;
pub mod processors;
pub mod sampler;
pub mod settings;
pub mod tracer;

pub use cells::CellTable;
pub use circle_set::CircleSet;
pub use error::{ContourError, ContourResult};
pub use field::{Grid, PointField};
pub use geometry::{Bounds, Circle, Vec2};
pub use path::Path;
pub use pipeline::ContourPipeline;
pub use post::{cardinal_shift, compute_normals, smooth_path};
pub use processors::{PathProcessor, ProcessContext, ProcessorRegistry};
pub use sampler::{analyze_paths, get_point, PathSample};
pub use settings::{Cardinal, NormalMode, PipelineSettings};
pub use tracer::{trace_paths, Direction};
