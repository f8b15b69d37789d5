// Example: drive the controller with a minimal viewport and watch rows get reused.
use virtual_rows::{ControllerOptions, ScrollTarget, VirtualizationController, Viewport};

#[derive(Default)]
struct Console {
    padding_top: f32,
    content_height: f32,
}

impl Viewport for Console {
    type Row = String;

    fn set_content_height(&mut self, height: f32) {
        self.content_height = height;
    }

    fn set_padding_top(&mut self, padding: f32) {
        self.padding_top = padding;
    }

    fn set_scroll_range_without_notify(&mut self, _range: f32) {}

    fn set_scroll_offset_without_notify(&mut self, _offset: f32) {}

    fn bind_row(&mut self, row: &mut String, index: usize) {
        *row = format!("item #{index}");
    }

    fn set_row_height(&mut self, _row: &mut String, _height: f32) {}
}

fn main() {
    let mut c = VirtualizationController::new(
        ControllerOptions::new(20.0),
        Console::default(),
        String::new,
        String::clear,
    );
    c.set_items_count(1_000_000);
    c.resize(200.0);

    println!("content_height={}", c.viewport().content_height);
    println!("rows={} bound={:?}", c.rows().len(), c.bound_indices());

    c.scroll(123_456.0);
    println!(
        "after scroll: first={} padding_top={} created={}",
        c.first_visible_index(),
        c.viewport().padding_top,
        c.pool().created()
    );

    let applied = c.scroll_to_item(ScrollTarget::Last);
    println!("after scroll_to_item(Last): offset={applied:?}");
    for row in c.rows().iter().filter(|r| r.is_bound()) {
        println!("  {:?} -> {}", row.id(), row.handle());
    }
}
