// Example: minimal usage, controlled position and the render window.
use carousel::{Carousel, CarouselOptions, FixedGeometry, display_window_keyed};

fn main() {
    let items = ["sunrise", "harbor", "forest", "dunes"];
    let mut c = Carousel::new(
        CarouselOptions::new(items.len())
            .with_on_position_change(Some(|i: usize| println!("position -> {i}")))
            .with_on_stable(Some(|i: usize| println!("stable at {i}"))),
    );
    let geometry = FixedGeometry::centered(320.0);
    c.mount(&geometry);

    // One step forward animates; the renderer reports when it is done.
    c.set_position(1);
    println!("presentation={:?}", c.presentation(&geometry));
    c.on_transition_complete();

    // Jumping further snaps immediately.
    c.set_position(3);

    let window = display_window_keyed(&items, c.current_index(), |s| Some(*s));
    for d in &window {
        println!("slot index={} key={:?}", d.slot.index, d.key);
    }
}
