use virtual_rows::ControllerOptions;
use virtual_rows_adapter::ListView;

fn main() {
    // Example: a drag session that expands the dragged row into a drop placeholder and drops it
    // above the visible window.
    let mut lv = ListView::new(ControllerOptions::new(24.0), 500);
    lv.on_viewport_height(240.0);
    lv.on_user_scroll(24.0 * 40.0);

    if !lv.begin_drag(42) {
        println!("row 42 is not bound");
        return;
    }
    lv.drag_height_override(48.0);
    if let Some(row) = lv.controller().dragged_row() {
        println!("dragging {:?} height={}", row.id(), row.handle().height());
    }

    lv.end_drag(3);
    println!(
        "dropped: offset={} first={}",
        lv.controller().scroll_offset(),
        lv.controller().first_visible_index()
    );
}
