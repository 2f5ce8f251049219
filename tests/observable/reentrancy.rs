//! Listeners that touch the registry while a notification is in flight.

use std::sync::{Arc, Mutex, OnceLock};

use babel_core::observable::{Listener, Observable};

use super::entity::{Person, AGE, NAME};

fn call_log() -> Arc<Mutex<Vec<String>>> {
    Arc::new(Mutex::new(Vec::new()))
}

#[test]
fn listener_removed_mid_emit_still_runs_in_that_round() {
    let person = Arc::new(Person::new());
    let log = call_log();

    // Registered second, but removed by the first before its turn.
    let victim = {
        let log = Arc::clone(&log);
        Listener::new(move |_| log.lock().unwrap().push("victim".to_owned()))
    };
    {
        let person_clone = Arc::clone(&person);
        let victim = victim.clone();
        let log = Arc::clone(&log);
        person.on(move |_| {
            log.lock().unwrap().push("remover".to_owned());
            person_clone.remove_listener(&victim);
        });
    }
    person.add_listener(&victim);

    person.set_age(1);
    assert_eq!(*log.lock().unwrap(), vec!["remover", "victim"]);

    log.lock().unwrap().clear();
    person.set_age(2);
    assert_eq!(*log.lock().unwrap(), vec!["remover"]);
}

#[test]
fn listener_added_mid_emit_waits_for_the_next_round() {
    let person = Arc::new(Person::new());
    let log = call_log();
    {
        let person_clone = Arc::clone(&person);
        let log = Arc::clone(&log);
        person.on_property(AGE, move |_| {
            log.lock().unwrap().push("adder".to_owned());
            let log = Arc::clone(&log);
            person_clone.on_property(AGE, move |_| log.lock().unwrap().push("late".to_owned()));
        });
    }

    person.set_age(1);
    assert_eq!(*log.lock().unwrap(), vec!["adder"]);

    log.lock().unwrap().clear();
    person.set_age(2);
    assert_eq!(*log.lock().unwrap(), vec!["adder", "late"]);
}

#[test]
fn listener_removing_itself_during_nested_emit() {
    let person = Arc::new(Person::new());
    let log = call_log();
    let own_handle: Arc<OnceLock<Listener>> = Arc::new(OnceLock::new());

    // On an age change, set the name: a nested emission on the same entity.
    {
        let person_clone = Arc::clone(&person);
        person.on_property(AGE, move |_| person_clone.set_name(Some("nested")));
    }

    // Global listener that unregisters itself when it sees the nested name
    // change, then keeps receiving the outer age change it was captured for.
    let listener = {
        let person_clone = Arc::clone(&person);
        let own_handle = Arc::clone(&own_handle);
        let log = Arc::clone(&log);
        Listener::new(move |event| {
            let name = event.property_name().unwrap_or("*").to_owned();
            log.lock().unwrap().push(name.clone());
            if name == NAME {
                if let Some(me) = own_handle.get() {
                    person_clone.remove_listener(me);
                }
            }
        })
    };
    own_handle.set(listener.clone()).ok();
    person.add_listener(&listener);

    person.set_age(1);

    // Global listeners run before scoped ones, so the self-remover sees the
    // age change first, then the nested name change (where it removes itself).
    assert_eq!(*log.lock().unwrap(), vec![AGE, NAME]);
    assert!(person.listeners().is_empty());

    log.lock().unwrap().clear();
    person.set_age(2);
    person.set_name(Some("again"));
    assert!(log.lock().unwrap().is_empty());
}

#[test]
fn nested_emission_from_a_listener_does_not_deadlock() {
    let person = Arc::new(Person::new());
    let log = call_log();
    {
        let person_clone = Arc::clone(&person);
        person.on_property(NAME, move |_| {
            // Reads and writes the registry from inside a callback.
            let _ = person_clone.listeners();
            person_clone.set_age(99);
        });
    }
    {
        let log = Arc::clone(&log);
        person.on_property(AGE, move |e| {
            log.lock().unwrap().push(format!("{:?}", e.new_value()));
        });
    }

    person.set_name(Some("Carol"));

    assert_eq!(*log.lock().unwrap(), vec!["Some(Int(99))"]);
}
