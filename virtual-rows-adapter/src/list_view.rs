use virtual_rows::{ControllerOptions, Row, ScrollTarget, VirtualizationController};

use crate::{Easing, RowElement, ScrollView, Tween};

/// A framework-neutral list view that wires a [`ScrollView`] to a
/// [`virtual_rows::VirtualizationController`].
///
/// This type does not hold any UI objects. Adapters drive it by calling:
/// - `on_viewport_height` when the layout height changes
/// - `on_user_scroll` when the user scrolls
/// - `tick(now_ms)` each frame/timer tick while a tween is running
///
/// Scroll notifications from the scroll view are forwarded to the controller; the controller's
/// own writes are notify-free, so nothing loops back.
#[derive(Debug)]
pub struct ListView {
    controller: VirtualizationController<ScrollView>,
    tween: Option<Tween>,
}

impl ListView {
    pub fn new(options: ControllerOptions, items_count: usize) -> Self {
        let mut controller = VirtualizationController::new(
            options,
            ScrollView::default(),
            RowElement::default,
            RowElement::reset,
        );
        controller.set_items_count(items_count);
        Self {
            controller,
            tween: None,
        }
    }

    pub fn from_controller(controller: VirtualizationController<ScrollView>) -> Self {
        Self {
            controller,
            tween: None,
        }
    }

    pub fn controller(&self) -> &VirtualizationController<ScrollView> {
        &self.controller
    }

    pub fn controller_mut(&mut self) -> &mut VirtualizationController<ScrollView> {
        &mut self.controller
    }

    pub fn into_controller(self) -> VirtualizationController<ScrollView> {
        self.controller
    }

    pub fn scroll_view(&self) -> &ScrollView {
        self.controller.viewport()
    }

    pub fn rows(&self) -> &[Row<RowElement>] {
        self.controller.rows()
    }

    pub fn is_animating(&self) -> bool {
        self.tween.is_some()
    }

    pub fn cancel_animation(&mut self) {
        self.tween = None;
    }

    pub fn on_viewport_height(&mut self, height: f32) {
        self.controller.viewport_mut().set_viewport_height(height);
        let height = self.controller.viewport().viewport_height();
        self.controller.resize(height);
        self.pump();
    }

    /// Updates the number of items and re-lays out the list.
    pub fn set_items_count(&mut self, items_count: usize) {
        self.controller.set_items_count(items_count);
        let height = self.controller.viewport().viewport_height();
        self.controller.resize(height);
        self.pump();
    }

    /// Call this when the UI reports a scroll offset change (e.g. user wheel/drag).
    ///
    /// This cancels any active tween. Returns the applied offset.
    pub fn on_user_scroll(&mut self, offset: f32) -> f32 {
        self.cancel_animation();
        self.controller.viewport_mut().set_scroll_offset(offset);
        self.pump();
        self.controller.scroll_offset()
    }

    /// Scrolls to an item immediately (no animation).
    ///
    /// Returns the applied offset, or `None` when the request is a no-op.
    pub fn scroll_to_item(&mut self, target: ScrollTarget) -> Option<f32> {
        self.cancel_animation();
        self.controller.scroll_to_item(target)
    }

    /// Starts a tween towards the offset `scroll_to_item` would apply.
    ///
    /// Returns the clamped target offset, or `None` when the request is a no-op.
    pub fn start_tween_to_item(
        &mut self,
        target: ScrollTarget,
        now_ms: u64,
        duration_ms: u64,
        easing: Easing,
    ) -> Option<f32> {
        let to = self.controller.scroll_to_item_offset(target)?;
        Some(self.start_tween_to_offset(to, now_ms, duration_ms, easing))
    }

    /// Starts a tween to an offset.
    ///
    /// Returns the clamped target offset.
    pub fn start_tween_to_offset(
        &mut self,
        offset: f32,
        now_ms: u64,
        duration_ms: u64,
        easing: Easing,
    ) -> f32 {
        let to = self.controller.clamp_scroll_offset(offset);
        let from = self.controller.scroll_offset();
        vdebug!(from, to, duration_ms, "ListView::start_tween_to_offset");
        self.tween = Some(Tween::new(from, to, now_ms, duration_ms, easing));
        to
    }

    /// Advances the active tween.
    ///
    /// Returns the new offset, or `None` when no tween is active.
    pub fn tick(&mut self, now_ms: u64) -> Option<f32> {
        let tween = self.tween?;

        let offset = tween.sample(now_ms);
        self.controller.viewport_mut().set_scroll_offset(offset);
        self.pump();

        if tween.is_done(now_ms) {
            self.tween = None;
        }

        Some(self.controller.scroll_offset())
    }

    /// Starts dragging the row bound to `index`.
    pub fn begin_drag(&mut self, index: usize) -> bool {
        self.cancel_animation();
        self.controller.begin_drag(index)
    }

    /// Applies a transient height to the dragged row (e.g. a drop placeholder).
    pub fn drag_height_override(&mut self, height: f32) {
        self.controller.set_dragged_row_height(height);
    }

    pub fn end_drag(&mut self, drop_index: usize) {
        self.controller.end_drag(drop_index);
    }

    /// Forwards queued scroll notifications to the controller.
    fn pump(&mut self) {
        while let Some(offset) = self.controller.viewport_mut().take_scroll_notification() {
            vtrace!(offset, "ListView: forwarding scroll notification");
            self.controller.scroll(offset);
        }
    }
}
