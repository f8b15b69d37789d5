use alloc::vec::Vec;
use core::fmt;

use crate::pixel::{index_at, non_negative};
use crate::pool::RecyclingPool;
use crate::{
    ControllerOptions, FrameState, Row, RowId, ScrollState, ScrollTarget, Viewport, ViewportState,
};

/// A fixed-height row virtualization controller.
///
/// The controller keeps a small sequence of pooled rows bound to the contiguous index window
/// implied by the scroll offset and viewport height:
/// - slot `i` of [`Self::rows`] represents index `first_visible_index() + i`;
/// - slots past `items_count` are kept but unbound (overscan running past the end);
/// - rows leave the sequence only when the window shrinks, and go back to the pool.
///
/// It is driven by three events: [`Self::resize`], [`Self::scroll`] and
/// [`Self::scroll_to_item`]. Each one runs to completion and leaves every row bound to its
/// final index.
pub struct VirtualizationController<V: Viewport> {
    options: ControllerOptions,
    viewport: V,
    pool: RecyclingPool<Row<V::Row>>,

    rows: Vec<Row<V::Row>>,
    paint_order: Vec<RowId>,

    items_count: usize,
    first_visible_index: usize,
    scroll_offset: f32,
    viewport_height: f32,

    dragged: Option<RowId>,
}

#[derive(Clone, Copy)]
enum Stack {
    Back,
    Front,
}

impl<V: Viewport> VirtualizationController<V> {
    /// Creates a controller that owns `viewport`.
    ///
    /// `create` builds the visual handle of a new row on a pool miss. `reset` runs on a
    /// recycled handle before it is reused; the controller clears the row binding itself.
    pub fn new(
        options: ControllerOptions,
        viewport: V,
        mut create: impl FnMut() -> V::Row + 'static,
        mut reset: impl FnMut(&mut V::Row) + 'static,
    ) -> Self
    where
        V::Row: 'static,
    {
        let mut next_id = 0u32;
        let pool = RecyclingPool::new(
            move || {
                let id = RowId(next_id);
                next_id = next_id.wrapping_add(1);
                Row::new(id, create())
            },
            move |row: &mut Row<V::Row>| {
                row.set_index(None);
                reset(row.handle_mut());
            },
            options.pool_limit,
        );
        vdebug!(
            item_height = options.item_height,
            overscan = options.overscan,
            pool_limit = options.pool_limit,
            "VirtualizationController::new"
        );
        Self {
            scroll_offset: non_negative(options.initial_offset),
            options,
            viewport,
            pool,
            rows: Vec::new(),
            paint_order: Vec::new(),
            items_count: 0,
            first_visible_index: 0,
            viewport_height: 0.0,
            dragged: None,
        }
    }

    pub fn options(&self) -> &ControllerOptions {
        &self.options
    }

    pub fn viewport(&self) -> &V {
        &self.viewport
    }

    /// Mutable access to the viewport, for host-side state the controller does not manage.
    pub fn viewport_mut(&mut self) -> &mut V {
        &mut self.viewport
    }

    pub fn pool(&self) -> &RecyclingPool<Row<V::Row>> {
        &self.pool
    }

    /// The bound-row sequence, in layout order.
    pub fn rows(&self) -> &[Row<V::Row>] {
        &self.rows
    }

    /// Row identities from back (painted first) to front.
    ///
    /// Rows are stacked in layout order, so this always mirrors [`Self::rows`]; it is
    /// maintained in the same sweep that moves rows between the ends of the window.
    pub fn paint_order(&self) -> &[RowId] {
        &self.paint_order
    }

    /// Collects the indexes of bound rows into `out` (clears `out` first).
    pub fn collect_bound_indices(&self, out: &mut Vec<usize>) {
        out.clear();
        out.extend(self.rows.iter().filter_map(Row::index));
    }

    pub fn bound_indices(&self) -> Vec<usize> {
        let mut out = Vec::with_capacity(self.rows.len());
        self.collect_bound_indices(&mut out);
        out
    }

    pub fn row_for_index(&self, index: usize) -> Option<&Row<V::Row>> {
        let slot = index.checked_sub(self.first_visible_index)?;
        self.rows.get(slot).filter(|row| row.index() == Some(index))
    }

    /// Number of rows in the bound-row sequence (including unbound tail slots).
    pub fn visible_item_count(&self) -> usize {
        self.rows.len()
    }

    pub fn first_visible_index(&self) -> usize {
        self.first_visible_index
    }

    pub fn scroll_offset(&self) -> f32 {
        self.scroll_offset
    }

    /// Viewport height from the last `resize`.
    pub fn viewport_height(&self) -> f32 {
        self.viewport_height
    }

    pub fn items_count(&self) -> usize {
        self.items_count
    }

    /// Updates the total number of rows.
    ///
    /// Bindings are not reconciled here: until the next `resize` or `scroll`, rows may stay
    /// bound to indexes computed for the previous count.
    pub fn set_items_count(&mut self, items_count: usize) {
        self.items_count = items_count;
    }

    /// Takes effect at the next `resize`.
    pub fn set_item_height(&mut self, item_height: f32) {
        self.options.item_height = item_height;
    }

    /// Takes effect at the next `resize`.
    pub fn set_overscan(&mut self, overscan: usize) {
        self.options.overscan = overscan;
    }

    pub fn resolved_item_height(&self) -> f32 {
        self.options.resolve_item_height(None)
    }

    pub fn index_from_position(&self, y: f32) -> usize {
        index_at(y, self.resolved_item_height())
    }

    pub fn expected_item_height(&self, _index: usize) -> f32 {
        self.resolved_item_height()
    }

    /// Offset of the top edge of `index`.
    pub fn item_offset(&self, index: usize) -> f32 {
        index as f32 * self.resolved_item_height()
    }

    pub fn expected_content_height(&self) -> f32 {
        self.items_count as f32 * self.resolved_item_height()
    }

    /// Maximum scroll offset for the current content and viewport heights.
    pub fn scrollable_range(&self) -> f32 {
        non_negative(self.expected_content_height() - self.viewport_height)
    }

    pub fn clamp_scroll_offset(&self, offset: f32) -> f32 {
        non_negative(offset).min(self.scrollable_range())
    }

    /// Applies a new viewport height.
    ///
    /// Writes the content height and scroll range, clamps the persisted offset, grows or
    /// shrinks the bound-row sequence at its tail, then reconciles every binding against the
    /// final window.
    pub fn resize(&mut self, viewport_height: f32) {
        self.viewport_height = non_negative(viewport_height);
        let item_height = self.resolved_item_height();
        let content_height = self.expected_content_height();
        self.viewport.set_content_height(content_height);

        let scrollable = self.scrollable_range();
        let offset = self.scroll_offset.min(scrollable);
        self.viewport.set_scroll_range_without_notify(scrollable);
        self.viewport.set_scroll_offset_without_notify(offset);

        let desired = self.desired_row_count(item_height);
        let current = self.rows.len();
        if desired != current {
            vdebug!(
                current,
                desired,
                items_count = self.items_count,
                viewport_height = self.viewport_height,
                "VirtualizationController::resize"
            );
        }
        if desired < current {
            for _ in desired..current {
                if let Some(row) = self.rows.pop() {
                    self.release_row(row);
                }
            }
        } else {
            for i in 0..desired - current {
                let index = self.first_visible_index + current + i;
                self.push_row(index, item_height);
            }
        }

        self.reconcile(offset, item_height, true);
    }

    /// Handles a scroll offset change.
    ///
    /// The offset is clamped into `[0, scrollable_range()]`. Rows are only rebound when the
    /// first visible index changes; moving within a row only updates the padding.
    pub fn scroll(&mut self, offset: f32) {
        let item_height = self.resolved_item_height();
        let offset = self.clamp_scroll_offset(offset);
        self.reconcile(offset, item_height, false);
    }

    /// Computes the offset `scroll_to_item` would apply, before clamping.
    ///
    /// Returns `None` when the request is a no-op: no rows are bound, the index is out of
    /// range, or the index is already within the fully visible rows.
    ///
    /// [`ScrollTarget::Last`] targets one item height past the last item when the list does
    /// not fit the viewport; applying it clamps to the end of the scroll range.
    pub fn scroll_to_item_offset(&self, target: ScrollTarget) -> Option<f32> {
        if self.rows.is_empty() {
            return None;
        }
        let item_height = self.resolved_item_height();
        if !(item_height > 0.0) {
            return None;
        }
        let fully_visible = index_at(self.viewport_height, item_height);

        match target {
            ScrollTarget::Last => {
                if self.items_count < fully_visible {
                    Some(0.0)
                } else {
                    Some((self.items_count + 1) as f32 * item_height)
                }
            }
            ScrollTarget::Index(index) if index >= self.items_count => None,
            ScrollTarget::Index(index) if index <= self.first_visible_index => {
                Some(item_height * index as f32)
            }
            ScrollTarget::Index(index) => {
                if index < self.first_visible_index + fully_visible {
                    return None;
                }
                // +1 so the target ends up fully visible, not just its top edge.
                let d = index + 1 - fully_visible;
                let partial =
                    item_height - (self.viewport_height - fully_visible as f32 * item_height);
                Some(item_height * d as f32 + partial)
            }
        }
    }

    /// Scrolls so that `target` is visible.
    ///
    /// Returns the applied (clamped) offset, or `None` for a no-op.
    pub fn scroll_to_item(&mut self, target: ScrollTarget) -> Option<f32> {
        let target_offset = self.scroll_to_item_offset(target)?;
        let offset = self.clamp_scroll_offset(target_offset);
        vtrace!(?target, target_offset, offset, "scroll_to_item");
        self.scroll(offset);
        Some(self.scroll_offset)
    }

    /// Marks the row bound to `index` as the one being dragged.
    ///
    /// Returns `false` when no bound row has that index.
    pub fn begin_drag(&mut self, index: usize) -> bool {
        self.dragged = self.row_for_index(index).map(Row::id);
        self.dragged.is_some()
    }

    pub fn dragged_row(&self) -> Option<&Row<V::Row>> {
        let id = self.dragged?;
        self.rows.iter().find(|row| row.id() == id)
    }

    /// Applies a transient height to the dragged row.
    pub fn set_dragged_row_height(&mut self, height: f32) {
        let Some(id) = self.dragged else {
            return;
        };
        if let Some(row) = self.rows.iter_mut().find(|row| row.id() == id) {
            row.set_height(height);
            self.viewport.set_row_height(row.handle_mut(), height);
        }
    }

    /// Ends a drag.
    ///
    /// The dragged row gets its regular height back. When the drop lands above the first
    /// visible row, the offset moves up by one row to keep the view stable.
    pub fn end_drag(&mut self, drop_index: usize) {
        let item_height = self.resolved_item_height();
        if let Some(id) = self.dragged.take() {
            if let Some(row) = self.rows.iter_mut().find(|row| row.id() == id) {
                row.set_height(item_height);
                self.viewport.set_row_height(row.handle_mut(), item_height);
            }
        }

        if drop_index < self.first_visible_index {
            let offset = self.clamp_scroll_offset(self.scroll_offset - item_height);
            vtrace!(drop_index, offset, "end_drag: nudging scroll offset");
            self.scroll(offset);
        }
    }

    /// Returns every row to the pool.
    pub fn release_all(&mut self) {
        vdebug!(rows = self.rows.len(), "VirtualizationController::release_all");
        while let Some(row) = self.rows.pop() {
            self.release_row(row);
        }
    }

    /// Releases every row and returns the viewport.
    pub fn into_viewport(mut self) -> V {
        self.release_all();
        self.viewport
    }

    pub fn scroll_state(&self) -> ScrollState {
        ScrollState {
            offset: self.scroll_offset,
        }
    }

    pub fn viewport_state(&self) -> ViewportState {
        ViewportState {
            height: self.viewport_height,
        }
    }

    pub fn frame_state(&self) -> FrameState {
        FrameState {
            viewport: self.viewport_state(),
            scroll: self.scroll_state(),
        }
    }

    /// Restores a persisted offset. It is clamped and applied by the next `resize`.
    pub fn restore_scroll_state(&mut self, scroll: ScrollState) {
        self.scroll_offset = non_negative(scroll.offset);
    }

    /// Restores a persisted offset and viewport height, then resizes.
    pub fn restore_frame_state(&mut self, frame: FrameState) {
        self.restore_scroll_state(frame.scroll);
        self.resize(frame.viewport.height);
    }

    fn desired_row_count(&self, item_height: f32) -> usize {
        if !(item_height > 0.0) {
            vwarn!(item_height, "non-positive item height, no rows will be bound");
            return 0;
        }
        let fitting = self
            .options
            .resolve_item_height(Some(self.viewport_height));
        let mut count = index_at(fitting, item_height);
        if count > 0 {
            count = count.saturating_add(self.options.overscan);
        }
        count.min(self.items_count)
    }

    fn push_row(&mut self, index: usize, item_height: f32) {
        let mut row = self.pool.acquire();
        row.set_height(item_height);
        self.viewport.set_row_height(row.handle_mut(), item_height);
        bind_slot(&mut self.viewport, &mut row, index, self.items_count);
        self.paint_order.push(row.id());
        self.rows.push(row);
    }

    fn release_row(&mut self, mut row: Row<V::Row>) {
        if row.index().is_some() {
            row.set_index(None);
            self.viewport.unbind_row(row.handle_mut());
        }
        let id = row.id();
        self.paint_order.retain(|&other| other != id);
        if self.dragged == Some(id) {
            self.dragged = None;
        }
        self.pool.release(row);
    }

    fn reconcile(&mut self, offset: f32, item_height: f32, force: bool) {
        let first = index_at(offset, item_height);
        self.viewport.set_padding_top(first as f32 * item_height);
        self.viewport
            .set_content_height(self.items_count as f32 * item_height);
        self.viewport.set_scroll_offset_without_notify(offset);
        self.scroll_offset = offset;

        let previous = self.first_visible_index;
        if first == previous && !force {
            return;
        }
        self.first_visible_index = first;
        if self.rows.is_empty() {
            return;
        }

        let len = self.rows.len();
        if first < previous {
            // Scrolling up: tail rows move to the front and to the back of the paint order.
            let moved = (previous - first).min(len);
            self.rows.rotate_right(moved);
            restack(&mut self.paint_order, &self.rows[..moved], Stack::Back);
            vtrace!(first, previous, moved, "reconcile: scrolled up");
        } else if first > previous {
            let moved = (first - previous).min(len);
            self.rows.rotate_left(moved);
            restack(&mut self.paint_order, &self.rows[len - moved..], Stack::Front);
            vtrace!(first, previous, moved, "reconcile: scrolled down");
        }

        let items_count = self.items_count;
        for (slot, row) in self.rows.iter_mut().enumerate() {
            bind_slot(&mut self.viewport, row, first + slot, items_count);
            row.set_height(item_height);
            self.viewport.set_row_height(row.handle_mut(), item_height);
        }
    }
}

/// Binds `row` to `index`, or unbinds it when `index` is past the end.
///
/// The viewport is only told about actual changes, so rows that keep their index across a
/// reconciliation are not rebound.
fn bind_slot<V: Viewport>(
    viewport: &mut V,
    row: &mut Row<V::Row>,
    index: usize,
    items_count: usize,
) {
    if index < items_count {
        if row.index() != Some(index) {
            row.set_index(Some(index));
            viewport.bind_row(row.handle_mut(), index);
        }
    } else if row.index().is_some() {
        row.set_index(None);
        viewport.unbind_row(row.handle_mut());
    }
}

fn restack<H>(paint_order: &mut Vec<RowId>, moved: &[Row<H>], to: Stack) {
    paint_order.retain(|id| moved.iter().all(|row| row.id() != *id));
    let ids = moved.iter().map(Row::id);
    match to {
        Stack::Back => {
            paint_order.splice(0..0, ids);
        }
        Stack::Front => paint_order.extend(ids),
    }
}

impl<V> fmt::Debug for VirtualizationController<V>
where
    V: Viewport + fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("VirtualizationController")
            .field("options", &self.options)
            .field("viewport", &self.viewport)
            .field("pool", &self.pool)
            .field("rows", &self.rows.len())
            .field("items_count", &self.items_count)
            .field("first_visible_index", &self.first_visible_index)
            .field("scroll_offset", &self.scroll_offset)
            .field("viewport_height", &self.viewport_height)
            .finish_non_exhaustive()
    }
}
