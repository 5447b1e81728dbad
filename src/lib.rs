//! # Rill
//!
//! A minimal unidirectional state-management library for Rust.
//!
//! Rill is built around a single primitive:
//!
//! - `Store<Reducer, State>` - A container that owns one state value and one
//!   pure reducer function `(State, Event) -> State`
//! - `dispatch` - The only way state changes: apply the reducer, commit the
//!   result, then notify subscribers in registration order
//! - `subscribe` - Register a callback invoked after every dispatch
//!
//! State is replaced wholesale on each dispatch, never mutated in place, and
//! reads hand out snapshots, so the state a reducer produced is the state
//! every observer sees.
//!
//! ```
//! use rill::create_store;
//!
//! let store = create_store(
//!     |count: i32, event: &str| match event {
//!         "inc" => count + 1,
//!         "dec" => count - 1,
//!         _ => count,
//!     },
//!     0,
//! );
//!
//! store.subscribe({
//!     let store = store.clone();
//!     move || println!("count is now {}", store.get())
//! });
//!
//! store.dispatch("inc");
//! assert_eq!(store.get(), 1);
//! ```

pub mod store;

// Re-export main types for convenience
pub use store::{create_store, Store};
