//! Unidirectional state management with stores.
//!
//! Stores hold a single application state value, funnel every change through
//! a pure reducer function, and notify subscribers after each transition.

mod store;

pub use store::{create_store, Store};
