use carousel::CarouselOptions;
use carousel_adapter::{Controller, InputEvent};

fn main() {
    // Example: a host without CSS transitions. It forwards mouse input, calls tick(now_ms) from
    // its frame loop, and draws the strip at `strip().offset_percent()`.
    let mut c = Controller::new(
        CarouselOptions::new(6)
            .with_transition_duration(Some("240ms"))
            .with_on_stable(Some(|i: usize| println!("stable at {i}"))),
    );
    c.on_viewport_width(480.0);

    let mut now_ms = 0u64;
    c.handle(InputEvent::MouseDown { x: 400.0 }, now_ms);
    for x in [380.0, 350.0, 330.0] {
        now_ms += 16;
        c.handle(InputEvent::MouseMove { x }, now_ms);
    }
    c.handle(InputEvent::MouseUp, now_ms);
    println!("released: {:?}", c.presentation());

    while c.is_animating() {
        now_ms += 16;
        c.tick(now_ms);
        println!("t={now_ms} offset={:.1}%", c.strip().offset_percent());
    }

    println!("done: index={}", c.carousel().current_index());
}
