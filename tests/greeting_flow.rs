//! Container-level scenarios for the greeting screen.

use greetly::ui::greeting::{GreetingIntent, GreetingReducer};
use greetly::ui::mvi::StateStore;
use std::sync::mpsc::TryRecvError;

fn make_store() -> StateStore<GreetingReducer> {
    StateStore::default()
}

#[test]
fn fresh_container_starts_with_the_default_greeting() {
    let mut store = make_store();
    let rx = store.subscribe();

    let initial = rx.try_recv().unwrap();
    assert_eq!(initial.name, "Android");
    assert_eq!(initial.greeting_message, "Hello Android!");
}

#[test]
fn update_name_updates_name_and_greeting() {
    let mut store = make_store();
    let rx = store.subscribe();
    rx.try_recv().unwrap();

    store.dispatch(GreetingIntent::UpdateName("John".to_string()));

    let updated = rx.try_recv().unwrap();
    assert_eq!(updated.name, "John");
    assert_eq!(updated.greeting_message, "Hello John!");
}

#[test]
fn empty_name_is_accepted_not_rejected() {
    let mut store = make_store();
    store.dispatch(GreetingIntent::UpdateName(String::new()));

    assert_eq!(store.state().name, "");
    assert_eq!(store.state().greeting_message, "Hello !");
}

#[test]
fn sequential_updates_emit_in_order_without_coalescing() {
    let mut store = make_store();
    let rx = store.subscribe();
    rx.try_recv().unwrap();

    store.dispatch(GreetingIntent::UpdateName("Alice".to_string()));
    store.dispatch(GreetingIntent::UpdateName("Bob".to_string()));

    let first = rx.try_recv().unwrap();
    assert_eq!(first.name, "Alice");
    assert_eq!(first.greeting_message, "Hello Alice!");

    let second = rx.try_recv().unwrap();
    assert_eq!(second.name, "Bob");
    assert_eq!(second.greeting_message, "Hello Bob!");

    assert_eq!(rx.try_recv().err(), Some(TryRecvError::Empty));
}

#[test]
fn repeating_an_update_settles_on_the_same_state() {
    let mut store = make_store();
    store.dispatch(GreetingIntent::UpdateName("Alice".to_string()));
    let once = store.state().clone();

    store.dispatch(GreetingIntent::UpdateName("Alice".to_string()));
    assert_eq!(store.state(), &once);
}

#[test]
fn greeting_is_never_out_of_sync_with_the_name() {
    let mut store = make_store();
    let rx = store.subscribe();

    for name in ["a", "ab", "abc", "", "final"] {
        store.dispatch(GreetingIntent::UpdateName(name.to_string()));
    }

    while let Ok(state) = rx.try_recv() {
        assert_eq!(state.greeting_message, format!("Hello {}!", state.name));
    }
}
