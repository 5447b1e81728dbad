//! Todo application demonstrating a store with structured state and events

use rill::create_store;

#[derive(Clone, Debug)]
struct TodoItem {
    id: usize,
    title: String,
    completed: bool,
}

#[derive(Clone, Debug)]
struct AppState {
    todos: Vec<TodoItem>,
    filter: TodoFilter,
}

#[derive(Clone, Debug, PartialEq)]
enum TodoFilter {
    All,
    Active,
    Completed,
}

#[derive(Debug)]
enum Event {
    AddTodo(String),
    ToggleTodo(usize),
    SetFilter(TodoFilter),
}

impl AppState {
    fn new() -> Self {
        Self {
            todos: Vec::new(),
            filter: TodoFilter::All,
        }
    }

    fn filtered_todos(&self) -> Vec<&TodoItem> {
        match self.filter {
            TodoFilter::All => self.todos.iter().collect(),
            TodoFilter::Active => self.todos.iter().filter(|t| !t.completed).collect(),
            TodoFilter::Completed => self.todos.iter().filter(|t| t.completed).collect(),
        }
    }

    fn stats(&self) -> (usize, usize, usize) {
        let total = self.todos.len();
        let completed = self.todos.iter().filter(|t| t.completed).count();
        let active = total - completed;
        (total, active, completed)
    }
}

fn reducer(state: AppState, event: Event) -> AppState {
    match event {
        Event::AddTodo(title) => {
            let mut todos = state.todos;
            let id = todos.len();
            todos.push(TodoItem {
                id,
                title,
                completed: false,
            });
            AppState { todos, ..state }
        }
        Event::ToggleTodo(id) => {
            let todos = state
                .todos
                .into_iter()
                .map(|todo| {
                    if todo.id == id {
                        TodoItem {
                            completed: !todo.completed,
                            ..todo
                        }
                    } else {
                        todo
                    }
                })
                .collect();
            AppState { todos, ..state }
        }
        Event::SetFilter(filter) => AppState { filter, ..state },
    }
}

fn main() {
    println!("=== Store Example: Todo App ===\n");

    // Create store with initial state
    let store = create_store(reducer, AppState::new());

    // Subscribe to state changes
    println!("1. Setting up subscriber");
    store.subscribe({
        let store = store.clone();
        move || {
            let (total, active, completed) = store.read(|state| state.stats());
            println!(
                "   [Store Update] Total: {}, Active: {}, Completed: {}",
                total, active, completed
            );
        }
    });

    // Add todos
    println!("\n2. Adding todos");
    store.dispatch(Event::AddTodo("Learn Rust".to_string()));
    store.dispatch(Event::AddTodo("Build a reducer".to_string()));
    store.dispatch(Event::AddTodo("Write documentation".to_string()));

    // Display current todos
    println!("\n3. Current todos:");
    store.read(|state| {
        for todo in &state.todos {
            let status = if todo.completed { "✓" } else { " " };
            println!("   [{}] {}", status, todo.title);
        }
    });

    // Complete a todo
    println!("\n4. Completing first todo");
    store.dispatch(Event::ToggleTodo(0));

    // Filter to active items
    println!("\n5. Active todos:");
    store.dispatch(Event::SetFilter(TodoFilter::Active));
    store.read(|state| {
        for todo in state.filtered_todos() {
            println!("   [ ] {}", todo.title);
        }
    });

    let (total, active, completed) = store.read(|state| state.stats());
    println!(
        "\nFinal stats - Total: {}, Active: {}, Completed: {}",
        total, active, completed
    );
}
