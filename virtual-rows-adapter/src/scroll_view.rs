use virtual_rows::Viewport;

/// The visual state of one pooled row inside a [`ScrollView`].
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RowElement {
    bound: Option<usize>,
    height: f32,
    hidden: bool,
    bind_count: u32,
}

impl RowElement {
    /// The index this element currently displays.
    pub fn bound(&self) -> Option<usize> {
        self.bound
    }

    pub fn height(&self) -> f32 {
        self.height
    }

    /// Unbound elements stay in the tree but are not displayed.
    pub fn is_hidden(&self) -> bool {
        self.hidden
    }

    /// How many times this element has been bound since it was created or reset.
    pub fn bind_count(&self) -> u32 {
        self.bind_count
    }

    /// Clears an element coming back out of the row pool.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// A headless scroll container.
///
/// It stands in for a UI toolkit's scroll view: content height, top padding, a scroll range and
/// a scroll offset. Writes through [`ScrollView::set_scroll_offset`] behave like user or
/// programmatic scrolling and queue a notification for the owner to forward to the controller;
/// the `*_without_notify` writes used by the controller never do, which keeps the two from
/// feeding back into each other.
#[derive(Clone, Debug, Default)]
pub struct ScrollView {
    viewport_height: f32,
    content_height: f32,
    padding_top: f32,
    scroll_range: f32,
    scroll_offset: f32,

    pending: Option<f32>,
    notifications: u64,
    binds: u64,
    unbinds: u64,
}

impl ScrollView {
    pub fn new(viewport_height: f32) -> Self {
        Self {
            viewport_height,
            ..Self::default()
        }
    }

    pub fn viewport_height(&self) -> f32 {
        self.viewport_height
    }

    /// Records a new layout height. The owner is responsible for resizing the controller.
    pub fn set_viewport_height(&mut self, height: f32) {
        self.viewport_height = height.max(0.0);
    }

    pub fn content_height(&self) -> f32 {
        self.content_height
    }

    pub fn padding_top(&self) -> f32 {
        self.padding_top
    }

    pub fn scroll_range(&self) -> f32 {
        self.scroll_range
    }

    pub fn scroll_offset(&self) -> f32 {
        self.scroll_offset
    }

    /// Sets the offset, clamped into the scroll range, and queues a notification if it changed.
    ///
    /// Returns `true` when a notification was queued.
    pub fn set_scroll_offset(&mut self, offset: f32) -> bool {
        let offset = offset.max(0.0).min(self.scroll_range);
        if offset == self.scroll_offset {
            return false;
        }
        self.scroll_offset = offset;
        self.pending = Some(offset);
        self.notifications += 1;
        true
    }

    /// Takes the queued scroll notification, if any.
    ///
    /// Notifications coalesce: only the latest offset is kept.
    pub fn take_scroll_notification(&mut self) -> Option<f32> {
        self.pending.take()
    }

    pub fn has_pending_notification(&self) -> bool {
        self.pending.is_some()
    }

    /// Number of notifications queued so far.
    pub fn notification_count(&self) -> u64 {
        self.notifications
    }

    pub fn bind_count(&self) -> u64 {
        self.binds
    }

    pub fn unbind_count(&self) -> u64 {
        self.unbinds
    }
}

impl Viewport for ScrollView {
    type Row = RowElement;

    fn set_content_height(&mut self, height: f32) {
        self.content_height = height;
    }

    fn set_padding_top(&mut self, padding: f32) {
        self.padding_top = padding;
    }

    fn set_scroll_range_without_notify(&mut self, range: f32) {
        self.scroll_range = range;
    }

    fn set_scroll_offset_without_notify(&mut self, offset: f32) {
        self.scroll_offset = offset;
    }

    fn bind_row(&mut self, row: &mut RowElement, index: usize) {
        row.bound = Some(index);
        row.hidden = false;
        row.bind_count += 1;
        self.binds += 1;
    }

    fn unbind_row(&mut self, row: &mut RowElement) {
        row.bound = None;
        row.hidden = true;
        self.unbinds += 1;
    }

    fn set_row_height(&mut self, row: &mut RowElement, height: f32) {
        row.height = height;
    }
}
