//! # Path Processors
//!
//! Post-processing steps behind a common trait, plus a registry that maps
//! processor names to factories. The registry is filled explicitly at
//! construction; there is no runtime discovery.
//!
//! ## Built-in processors
//!
//! | Name             | Effect                                   |
//! |------------------|------------------------------------------|
//! | `smooth`         | [`smooth_path`] with the context's passes |
//! | `cardinal_shift` | [`cardinal_shift`] when a cardinal is set |
//! | `normals`        | [`compute_normals`] in the context's mode |

use crate::error::{ContourError, ContourResult};
use crate::geometry::{Bounds, Vec2};
use crate::path::Path;
use crate::post::{cardinal_shift, compute_normals, smooth_path};
use crate::settings::{Cardinal, NormalMode, PipelineSettings};
use std::collections::BTreeMap;

/// Per-run inputs shared by every processor in a chain.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProcessContext {
    /// Bounds of the circle set the path was traced from.
    pub bounds: Bounds,
    /// Smoothing passes.
    pub smooth_iterations: u32,
    /// Cardinal anchor, if any.
    pub cardinal: Option<Cardinal>,
    /// Origin for the cardinal axis and center normals.
    pub reference_center: Vec2,
    /// Normal estimation mode.
    pub normal_mode: NormalMode,
}

impl ProcessContext {
    /// Builds a context from pipeline settings and the current bounds.
    pub fn from_settings(settings: &PipelineSettings, bounds: Bounds) -> Self {
        Self {
            bounds,
            smooth_iterations: settings.smooth_iterations,
            cardinal: settings.cardinal,
            reference_center: settings.reference_center,
            normal_mode: settings.normal_mode,
        }
    }
}

/// A single in-place path transformation.
pub trait PathProcessor: Send + Sync {
    /// Registry name of the processor.
    fn name(&self) -> &'static str;

    /// Transforms `path` in place.
    fn process(&self, path: &mut Path, ctx: &ProcessContext);
}

/// Neighbor-averaging smoother.
#[derive(Debug, Clone, Copy, Default)]
pub struct Smooth;

impl PathProcessor for Smooth {
    fn name(&self) -> &'static str {
        "smooth"
    }

    fn process(&self, path: &mut Path, ctx: &ProcessContext) {
        smooth_path(path, ctx.smooth_iterations);
    }
}

/// Rotates the path onto the configured cardinal axis.
#[derive(Debug, Clone, Copy, Default)]
pub struct CardinalShift;

impl PathProcessor for CardinalShift {
    fn name(&self) -> &'static str {
        "cardinal_shift"
    }

    fn process(&self, path: &mut Path, ctx: &ProcessContext) {
        if let Some(cardinal) = ctx.cardinal {
            cardinal_shift(path, &ctx.bounds, cardinal, ctx.reference_center);
        }
    }
}

/// Fills per-point normals.
#[derive(Debug, Clone, Copy, Default)]
pub struct Normals;

impl PathProcessor for Normals {
    fn name(&self) -> &'static str {
        "normals"
    }

    fn process(&self, path: &mut Path, ctx: &ProcessContext) {
        compute_normals(path, ctx.normal_mode, ctx.reference_center);
    }
}

/// Factory producing a fresh processor.
pub type ProcessorFactory = fn() -> Box<dyn PathProcessor>;

/// Name → factory table.
///
/// # Examples
/// ```
/// use contour_kernel::ProcessorRegistry;
///
/// let registry = ProcessorRegistry::with_defaults();
/// let smooth = registry.create("smooth").unwrap();
/// assert_eq!(smooth.name(), "smooth");
/// assert!(registry.create("twist").is_err());
/// ```
#[derive(Debug, Clone, Default)]
pub struct ProcessorRegistry {
    factories: BTreeMap<&'static str, ProcessorFactory>,
}

impl ProcessorRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a registry holding the built-in processors.
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        registry.register("smooth", || Box::new(Smooth));
        registry.register("cardinal_shift", || Box::new(CardinalShift));
        registry.register("normals", || Box::new(Normals));
        registry
    }

    /// Registers `factory` under `name`, returning any factory it replaced.
    pub fn register(
        &mut self,
        name: &'static str,
        factory: ProcessorFactory,
    ) -> Option<ProcessorFactory> {
        self.factories.insert(name, factory)
    }

    /// Instantiates the processor registered under `name`.
    pub fn create(&self, name: &str) -> ContourResult<Box<dyn PathProcessor>> {
        self.factories
            .get(name)
            .map(|factory| factory())
            .ok_or_else(|| ContourError::unknown_processor(name))
    }

    /// Instantiates a chain of processors in the given order.
    pub fn chain(&self, names: &[&str]) -> ContourResult<Vec<Box<dyn PathProcessor>>> {
        names.iter().map(|name| self.create(name)).collect()
    }

    /// Built-in chain the pipeline runs for `settings`, in order.
    pub fn default_chain(settings: &PipelineSettings) -> Vec<Box<dyn PathProcessor>> {
        let mut chain: Vec<Box<dyn PathProcessor>> = Vec::with_capacity(3);
        if settings.apply_smooth_path {
            chain.push(Box::new(Smooth));
        }
        if settings.cardinal.is_some() {
            chain.push(Box::new(CardinalShift));
        }
        chain.push(Box::new(Normals));
        chain
    }

    /// Registered names in sorted order.
    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.factories.keys().copied()
    }
}
