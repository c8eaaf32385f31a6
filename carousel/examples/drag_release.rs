// Example: a host feeding pointer moves and re-measuring the strip each frame.
use carousel::{Carousel, CarouselOptions, FixedGeometry};

const WIDTH: f64 = 400.0;

fn main() {
    let mut c = Carousel::new(
        CarouselOptions::new(5)
            .with_on_drag_start(Some(|| println!("drag start")))
            .with_on_drag_end(Some(|| println!("drag end"))),
    );
    c.mount(&FixedGeometry::centered(WIDTH));

    // The renderer places the strip where the presentation says; emulate that.
    let measure = |c: &Carousel| {
        let p = c.presentation(&FixedGeometry::centered(WIDTH));
        FixedGeometry::new(WIDTH, p.offset_px(WIDTH))
    };

    c.begin_drag(&measure(&c), 300.0, None);
    for x in [280.0, 240.0, 150.0, 60.0] {
        c.update_drag(&measure(&c), None, x);
        println!(
            "x={x} index={} pos={:.2}",
            c.current_index(),
            c.current_slide_position(&measure(&c))
        );
    }
    c.end_drag(&measure(&c), None);
    println!(
        "released: target={} direction={:?} transitioning={}",
        c.target_index(),
        c.slide_direction(),
        c.is_transitioning()
    );

    c.on_transition_complete();
    println!("settled at {}", c.current_index());
}
