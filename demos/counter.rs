//! Counter component re-rendering from two shared stores

use tincan_controller::{use_stores, Element, Store, WithStores};

#[derive(Clone, Debug)]
struct CounterState {
    count: i32,
    step: i32,
}

impl CounterState {
    fn new() -> Self {
        Self { count: 0, step: 1 }
    }

    fn increment(&mut self) {
        self.count += self.step;
    }
}

type Counter = WithStores<Element, (Store<CounterState>, Store<String>)>;

fn render(name: &str, counter: &Counter) {
    counter.update(|| {
        let (state, label) = counter.values();
        println!("   [{}] {}: {} (step {})", name, label, state.count, state.step);
    });
}

fn main() {
    println!("=== Counter Components ===\n");

    let state = Store::new(CounterState::new());
    let label = Store::new("Count".to_string());

    println!("1. Decorating the counter constructor");
    let new_counter = use_stores((state.clone(), label.clone())).decorate(|_: ()| Element::new());
    let left = new_counter(());
    let right = new_counter(());

    println!("\n2. Mounting both counters");
    left.connect().expect("left counter mounts once");
    right.connect().expect("right counter mounts once");

    println!("\n3. Incrementing");
    state.update(CounterState::increment);
    state.update(|s| s.step = 5);
    state.update(CounterState::increment);
    println!("   requests: left={}, right={}", left.update_requests(), right.update_requests());
    render("left", &left);
    render("right", &right);

    println!("\n4. Unmounting the right counter");
    right.disconnect().expect("right counter is mounted");
    label.set("Total".to_string());
    render("left", &left);
    render("right", &right);
    println!("   right still reads: {:?}", right.values().1);
}
