//! Counter application driven entirely by dispatched actions

use rill::create_store;

#[derive(Debug)]
enum Action {
    Increment,
    Decrement,
    SetStep(i32),
    Reset,
}

#[derive(Clone, Debug)]
struct CounterState {
    count: i32,
    step: i32,
}

fn reducer(state: CounterState, action: Action) -> CounterState {
    match action {
        Action::Increment => CounterState {
            count: state.count + state.step,
            ..state
        },
        Action::Decrement => CounterState {
            count: state.count - state.step,
            ..state
        },
        Action::SetStep(step) => CounterState { step, ..state },
        Action::Reset => CounterState { count: 0, ..state },
    }
}

fn main() {
    println!("=== Counter Example ===\n");

    println!("1. Creating store with initial state");
    let store = create_store(reducer, CounterState { count: 0, step: 1 });

    // Log every transition
    store.subscribe({
        let store = store.clone();
        move || {
            let state = store.get();
            println!("   [State] Count: {}, Step: {}", state.count, state.step);
        }
    });

    println!("\n2. Incrementing three times");
    store.dispatch(Action::Increment);
    store.dispatch(Action::Increment);
    store.dispatch(Action::Increment);

    println!("\n3. Switching to step 10");
    store.dispatch(Action::SetStep(10));
    store.dispatch(Action::Increment);

    println!("\n4. Stepping back down");
    store.dispatch(Action::Decrement);

    println!("\n5. Resetting");
    store.dispatch(Action::Reset);

    println!("\nFinal count: {}", store.get().count);
}
