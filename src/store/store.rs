use std::cell::RefCell;
use std::rc::Rc;

type Listener = Box<dyn FnMut()>;

/// A store for managing application state through a reducer.
///
/// The store owns a single state value and a pure reducer function.
/// Every change flows through [`dispatch`](Store::dispatch), which applies
/// the reducer to the current state and an event, commits the result, and
/// then notifies subscribers in registration order.
///
/// Stores are single-threaded. Cloning a store produces a cheap handle to
/// the same underlying state and subscriber list, so listeners can capture
/// a handle and read the state from inside their callbacks.
///
/// # Examples
///
/// ```
/// use rill::create_store;
///
/// let store = create_store(|count: i32, step: i32| count + step, 0);
/// assert_eq!(store.get(), 0);
///
/// store.dispatch(5);
/// assert_eq!(store.get(), 5);
/// ```
pub struct Store<Reducer, State> {
    reducer: Rc<Reducer>,
    state: Rc<RefCell<State>>,
    listeners: Rc<RefCell<Vec<Listener>>>,
}

impl<Reducer, State: Clone> Store<Reducer, State> {
    /// Create a new store from a reducer and an initial state.
    ///
    /// Both values are moved into the store; the reducer is fixed for the
    /// store's lifetime and the state is only ever replaced via `dispatch`.
    pub fn new(reducer: Reducer, initial: State) -> Self {
        Self {
            reducer: Rc::new(reducer),
            state: Rc::new(RefCell::new(initial)),
            listeners: Rc::new(RefCell::new(Vec::new())),
        }
    }

    /// Get a clone of the current state.
    ///
    /// The returned value is a snapshot; mutating it has no effect on the
    /// store. Safe to call from inside a listener, where it reflects the
    /// state committed by the dispatch in progress.
    pub fn get(&self) -> State {
        self.state.borrow().clone()
    }

    /// Dispatch an event, advancing the state through the reducer.
    ///
    /// The reducer's result is committed before any listener runs, so a
    /// listener that reads the store observes the new state, never the old
    /// one. Listeners fire unconditionally on every dispatch, in the order
    /// they subscribed, synchronously on the caller's stack.
    ///
    /// A panic in the reducer propagates to the caller; the previous state
    /// is retained and no listener is invoked for that call. A panic in a
    /// listener also propagates, skipping any listeners subscribed after
    /// the failing one for that dispatch.
    ///
    /// Calling `dispatch` or [`subscribe`](Store::subscribe) from inside a
    /// listener panics before the re-entrant call can run its reducer, so a
    /// rejected dispatch never changes the state. Reading via
    /// [`get`](Store::get) or [`read`](Store::read) is fine.
    pub fn dispatch<Event>(&self, event: Event)
    where
        Reducer: Fn(State, Event) -> State,
    {
        // The listener borrow is held for the whole call, so a re-entrant
        // dispatch fails here, before its reducer runs.
        let mut listeners = self.listeners.borrow_mut();
        // Run the reducer on a snapshot so a panic leaves the state as-is.
        let current = self.state.borrow().clone();
        let next = (self.reducer)(current, event);
        *self.state.borrow_mut() = next;
        for listener in listeners.iter_mut() {
            listener();
        }
    }

    /// Subscribe to state changes.
    ///
    /// The callback is appended to the subscriber list and invoked once per
    /// subsequent dispatch, after the state has been updated. There is no
    /// unsubscribe and no deduplication: subscribing N times yields N
    /// invocations per dispatch, for the lifetime of the store.
    pub fn subscribe<F>(&self, listener: F)
    where
        F: FnMut() + 'static,
    {
        self.listeners.borrow_mut().push(Box::new(listener));
    }

    /// Read the state through a borrow without cloning.
    pub fn read<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&State) -> R,
    {
        let state = self.state.borrow();
        f(&state)
    }
}

impl<Reducer, State> Clone for Store<Reducer, State> {
    fn clone(&self) -> Self {
        Self {
            reducer: Rc::clone(&self.reducer),
            state: Rc::clone(&self.state),
            listeners: Rc::clone(&self.listeners),
        }
    }
}

/// Create a store from a reducer and an initial state.
///
/// Equivalent to [`Store::new`]; provided for symmetry with the usual
/// `create_*` constructor style.
pub fn create_store<Reducer, State: Clone>(
    reducer: Reducer,
    initial: State,
) -> Store<Reducer, State> {
    Store::new(reducer, initial)
}
