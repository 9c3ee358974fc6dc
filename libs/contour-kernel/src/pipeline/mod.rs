//! # Contour Pipeline
//!
//! Owns a circle set and every derived buffer, and reruns the whole chain on
//! [`ContourPipeline::rebuild`]:
//!
//! 1. Recompute bounds
//! 2. Build the grid and sample the point field
//! 3. Classify cells
//! 4. Trace boundary loops
//! 5. Run the processor chain on each loop, then refresh its distance table
//!
//! Nothing is cached between rebuilds. Two pipelines never share buffers, so
//! callers that need several contours simply own several pipelines.

use crate::cells::CellTable;
use crate::circle_set::CircleSet;
use crate::error::ContourResult;
use crate::field::{Grid, PointField};
use crate::geometry::Vec2;
use crate::path::Path;
use crate::processors::{PathProcessor, ProcessContext, ProcessorRegistry};
use crate::sampler::{analyze_paths, get_point, PathSample};
use crate::settings::PipelineSettings;
use crate::tracer::trace_paths;
use tracing::{debug, trace};

/// Circle set plus the buffers of every pipeline stage.
///
/// # Examples
/// ```
/// use contour_kernel::{ContourPipeline, PipelineSettings, Vec2};
///
/// let mut pipeline = ContourPipeline::new(PipelineSettings::default());
/// pipeline.add_circle(Vec2::ZERO, 1.0, true);
/// assert_eq!(pipeline.paths().len(), 1);
///
/// pipeline.clear_circles(true);
/// assert!(pipeline.paths().is_empty());
/// assert!(pipeline.get_point(0, 0.5, true).is_none());
/// ```
pub struct ContourPipeline {
    settings: PipelineSettings,
    processors: Vec<Box<dyn PathProcessor>>,
    circles: CircleSet,
    grid: Option<Grid>,
    field: PointField,
    cells: CellTable,
    paths: Vec<Path>,
}

impl ContourPipeline {
    /// Creates an empty pipeline running the built-in processor chain for
    /// `settings`.
    pub fn new(settings: PipelineSettings) -> Self {
        let processors = ProcessorRegistry::default_chain(&settings);
        Self::with_processors(settings, processors)
    }

    /// Creates an empty pipeline running a caller-supplied processor chain.
    pub fn with_processors(
        settings: PipelineSettings,
        processors: Vec<Box<dyn PathProcessor>>,
    ) -> Self {
        Self {
            settings,
            processors,
            circles: CircleSet::new(),
            grid: None,
            field: PointField::default(),
            cells: CellTable::default(),
            paths: Vec::new(),
        }
    }

    /// Creates an empty pipeline whose chain is looked up by name.
    pub fn from_registry(
        settings: PipelineSettings,
        registry: &ProcessorRegistry,
        names: &[&str],
    ) -> ContourResult<Self> {
        settings.validate()?;
        let processors = registry.chain(names)?;
        Ok(Self::with_processors(settings, processors))
    }

    /// Current settings.
    #[inline]
    pub fn settings(&self) -> &PipelineSettings {
        &self.settings
    }

    /// Replaces the settings and the built-in processor chain. Takes effect on
    /// the next rebuild.
    pub fn set_settings(&mut self, settings: PipelineSettings) {
        self.processors = ProcessorRegistry::default_chain(&settings);
        self.settings = settings;
    }

    // =========================================================================
    // CIRCLE EDITING
    // =========================================================================

    /// Appends a circle, optionally rebuilding, and returns its index.
    pub fn add_circle(&mut self, center: Vec2, radius: f64, rebuild: bool) -> usize {
        let index = self.circles.add_circle(center, radius, true);
        if rebuild {
            self.rebuild();
        }
        index
    }

    /// Replaces circle `index`. Returns false (and skips the rebuild) when the
    /// index is out of range.
    pub fn modify_circle(
        &mut self,
        index: usize,
        center: Vec2,
        radius: f64,
        rebuild: bool,
    ) -> bool {
        let modified = self.circles.modify_circle(index, center, radius, true);
        if modified && rebuild {
            self.rebuild();
        }
        modified
    }

    /// Removes circle `index`. Returns false when the index is out of range.
    pub fn remove_circle(&mut self, index: usize, rebuild: bool) -> bool {
        let removed = self.circles.remove_circle(index, true);
        if removed && rebuild {
            self.rebuild();
        }
        removed
    }

    /// Removes every circle.
    pub fn clear_circles(&mut self, rebuild: bool) {
        self.circles.clear_circles();
        if rebuild {
            self.rebuild();
        }
    }

    /// The circle set.
    #[inline]
    pub fn circles(&self) -> &CircleSet {
        &self.circles
    }

    // =========================================================================
    // PIPELINE
    // =========================================================================

    /// Reruns every stage from the current circles.
    pub fn rebuild(&mut self) {
        self.paths.clear();
        self.grid = None;
        self.field = PointField::default();
        self.cells = CellTable::default();

        self.circles.recompute_bounds();
        let Some(bounds) = self.circles.bounds() else {
            debug!("no finite circles, skipping grid");
            return;
        };
        let Some(grid) = Grid::from_bounds(&bounds, self.settings.grid_cells) else {
            debug!(grid_cells = self.settings.grid_cells, "no usable grid, skipping");
            return;
        };

        let parallel = self.settings.parallel_field;
        self.field = PointField::sample(&grid, self.circles.circles(), parallel);
        self.cells = CellTable::classify(&grid, &self.field, self.circles.circles());
        let traced = trace_paths(&mut self.cells, &grid);

        let ctx = ProcessContext::from_settings(&self.settings, bounds);
        for mut path in traced {
            for processor in &self.processors {
                processor.process(&mut path, &ctx);
            }
            path.analyze();
            trace!(points = path.len(), length = path.closed_distance, "path ready");
            self.paths.push(path);
        }
        self.grid = Some(grid);

        debug!(
            circles = self.circles.len(),
            rows = grid.rows,
            cols = grid.cols,
            paths = self.paths.len(),
            "pipeline rebuilt"
        );
    }

    /// Recomputes the distance tables of every path, for callers that edited
    /// path points through [`ContourPipeline::paths_mut`].
    pub fn analyze_paths(&mut self) {
        analyze_paths(&mut self.paths);
    }

    /// Samples path `path_index` by fractional arc length.
    pub fn get_point(
        &self,
        path_index: usize,
        position: f64,
        is_closed: bool,
    ) -> Option<PathSample> {
        get_point(&self.paths, path_index, position, is_closed)
    }

    // =========================================================================
    // ACCESSORS
    // =========================================================================

    /// Grid of the last rebuild, `None` when it was skipped.
    #[inline]
    pub fn grid(&self) -> Option<&Grid> {
        self.grid.as_ref()
    }

    /// Point field of the last rebuild.
    #[inline]
    pub fn field(&self) -> &PointField {
        &self.field
    }

    /// Cell table of the last rebuild.
    #[inline]
    pub fn cells(&self) -> &CellTable {
        &self.cells
    }

    /// Paths of the last rebuild.
    #[inline]
    pub fn paths(&self) -> &[Path] {
        &self.paths
    }

    /// Mutable paths. Call [`ContourPipeline::analyze_paths`] after moving
    /// points.
    #[inline]
    pub fn paths_mut(&mut self) -> &mut [Path] {
        &mut self.paths
    }
}

impl std::fmt::Debug for ContourPipeline {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let names: Vec<_> = self.processors.iter().map(|p| p.name()).collect();
        f.debug_struct("ContourPipeline")
            .field("settings", &self.settings)
            .field("processors", &names)
            .field("circles", &self.circles.len())
            .field("grid", &self.grid)
            .field("paths", &self.paths.len())
            .finish()
    }
}
