/// The scrollable surface a [`crate::VirtualizationController`] writes its layout to.
///
/// The controller never reads scroll state back from the viewport: the adapter forwards scroll
/// events by calling [`crate::VirtualizationController::scroll`], and every write the
/// controller makes goes through the `*_without_notify` setters so it cannot re-enter that
/// handler.
///
/// Rows are not re-parented or re-stacked through this trait. The controller keeps the paint
/// order itself (see [`crate::VirtualizationController::paint_order`]).
pub trait Viewport {
    /// The visual handle carried by each pooled row.
    type Row;

    /// Sets the height of the scrollable content.
    fn set_content_height(&mut self, height: f32);

    /// Sets the padding above the first bound row.
    fn set_padding_top(&mut self, padding: f32);

    /// Sets the maximum scroll offset without firing scroll notifications.
    fn set_scroll_range_without_notify(&mut self, range: f32);

    /// Sets the scroll offset without firing scroll notifications.
    fn set_scroll_offset_without_notify(&mut self, offset: f32);

    /// Binds a row's visual to a collection index.
    fn bind_row(&mut self, row: &mut Self::Row, index: usize);

    /// Called when a bound row loses its binding (released, or parked past the end).
    fn unbind_row(&mut self, row: &mut Self::Row) {
        let _ = row;
    }

    fn set_row_height(&mut self, row: &mut Self::Row, height: f32);
}
