use virtual_rows::{ControllerOptions, ScrollTarget};
use virtual_rows_adapter::{Easing, ListView};

fn main() {
    // Example: a headless list view driving a smooth scroll-to-item.
    //
    // An adapter would:
    // - start a tween (e.g. in response to a "scroll to item" command)
    // - call tick(now_ms) in a frame loop / timer
    // - forward user scrolling via on_user_scroll, which cancels the tween
    // - render the rows from `rows()` using each element's bound index
    let mut lv = ListView::new(ControllerOptions::new(18.0), 10_000);
    lv.on_viewport_height(360.0);

    let Some(target) =
        lv.start_tween_to_item(ScrollTarget::Index(2_000), 0, 240, Easing::SmoothStep)
    else {
        println!("item already visible");
        return;
    };
    println!("target_offset={target}");

    let mut now_ms = 0u64;
    while let Some(off) = lv.tick(now_ms) {
        if now_ms % 80 == 0 {
            println!(
                "t={now_ms} off={off} first={}",
                lv.controller().first_visible_index()
            );
        }
        now_ms += 16;
    }

    println!(
        "done: off={} bound={:?} notifications={}",
        lv.controller().scroll_offset(),
        lv.controller().bound_indices(),
        lv.scroll_view().notification_count()
    );
}
