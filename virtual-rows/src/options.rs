use alloc::sync::Arc;

use crate::pixel::{non_negative, pixel_align};
use crate::pool::DEFAULT_POOL_LIMIT;

/// Rows bound past the last fully visible one, so small scrolls never need a new row.
pub const DEFAULT_OVERSCAN: usize = 2;

/// Resolves one of two heights, depending on the argument:
///
/// - `None`: the per-row height.
/// - `Some(viewport_height)`: the aligned height the rows should fill. The window size is this
///   value divided by the `None` result; it is not a row height.
///
/// It is queried at every reconciliation and must be pure.
pub type ItemHeightResolver = Arc<dyn Fn(Option<f32>) -> f32 + Send + Sync>;

/// Configuration for [`crate::VirtualizationController`].
///
/// Cheap to clone: the resolver is stored in an `Arc`.
#[derive(Clone)]
pub struct ControllerOptions {
    /// Fixed row height in points.
    pub item_height: f32,
    /// Device pixels per point, used to pixel-align resolved heights.
    pub pixels_per_point: f32,
    pub overscan: usize,
    /// Maximum number of idle rows kept by the row pool.
    pub pool_limit: usize,
    /// Scroll offset restored at the first `resize`.
    pub initial_offset: f32,
    /// Overrides the default pixel-aligned resolution. See [`ItemHeightResolver`].
    pub resolve_item_height: Option<ItemHeightResolver>,
}

impl ControllerOptions {
    pub fn new(item_height: f32) -> Self {
        debug_assert!(
            item_height.is_finite(),
            "ControllerOptions: item_height must be finite"
        );
        Self {
            item_height,
            pixels_per_point: 1.0,
            overscan: DEFAULT_OVERSCAN,
            pool_limit: DEFAULT_POOL_LIMIT,
            initial_offset: 0.0,
            resolve_item_height: None,
        }
    }

    pub fn with_pixels_per_point(mut self, pixels_per_point: f32) -> Self {
        self.pixels_per_point = pixels_per_point;
        self
    }

    pub fn with_overscan(mut self, overscan: usize) -> Self {
        self.overscan = overscan;
        self
    }

    pub fn with_pool_limit(mut self, pool_limit: usize) -> Self {
        self.pool_limit = pool_limit;
        self
    }

    pub fn with_initial_offset(mut self, initial_offset: f32) -> Self {
        self.initial_offset = initial_offset;
        self
    }

    pub fn with_resolve_item_height(
        mut self,
        resolve: Option<impl Fn(Option<f32>) -> f32 + Send + Sync + 'static>,
    ) -> Self {
        self.resolve_item_height = resolve.map(|f| Arc::new(f) as _);
        self
    }

    /// Resolves the row height (`None`) or the fillable viewport height (`Some(viewport_height)`).
    ///
    /// Without a custom resolver this pixel-aligns `hint`, or `item_height` when no hint is
    /// given.
    pub fn resolve_item_height(&self, hint: Option<f32>) -> f32 {
        if let Some(resolve) = &self.resolve_item_height {
            return non_negative(resolve(hint));
        }
        pixel_align(hint.unwrap_or(self.item_height), self.pixels_per_point)
    }
}

impl core::fmt::Debug for ControllerOptions {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("ControllerOptions")
            .field("item_height", &self.item_height)
            .field("pixels_per_point", &self.pixels_per_point)
            .field("overscan", &self.overscan)
            .field("pool_limit", &self.pool_limit)
            .field("initial_offset", &self.initial_offset)
            .field(
                "resolve_item_height",
                &self.resolve_item_height.as_ref().map(|_| ".."),
            )
            .finish()
    }
}
