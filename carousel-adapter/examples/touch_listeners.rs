use carousel::CarouselOptions;
use carousel_adapter::{Controller, GestureListeners, InputEvent, Touch};

/// Stands in for a DOM binding that adds/removes touchmove/touchend/touchcancel handlers.
#[derive(Debug, Default)]
struct ElementListeners {
    attached: Vec<&'static str>,
}

impl GestureListeners for ElementListeners {
    type Target = &'static str;

    fn attach(&mut self, target: &&'static str) {
        println!("attach listeners to {target}");
        self.attached.push(target);
    }

    fn detach(&mut self, target: &&'static str) {
        println!("detach listeners from {target}");
        self.attached.retain(|t| t != target);
    }
}

fn main() {
    let mut c = Controller::with_listeners(CarouselOptions::new(3), ElementListeners::default());
    c.on_viewport_width(300.0);

    let finger = [Touch { id: 11, x: 200.0 }];
    c.handle(InputEvent::TouchStart { target: "slide-1", touches: &finger }, 0);

    // A second finger lands but the first one keeps the gesture.
    let thumb = [Touch { id: 12, x: 20.0 }];
    let stolen = c.handle(InputEvent::TouchStart { target: "slide-1", touches: &thumb }, 5);
    println!("second touch accepted: {stolen}");

    let moved = [Touch { id: 12, x: 25.0 }, Touch { id: 11, x: 90.0 }];
    c.handle(InputEvent::TouchMove(&moved), 16);
    c.handle(InputEvent::TouchEnd(&[Touch { id: 11, x: 90.0 }]), 32);

    println!(
        "target={} listeners still attached: {:?}",
        c.carousel().target_index(),
        c.listeners().attached
    );
}
