//! A small observable entity used across the observable tests.

use std::sync::{Arc, Mutex};

use babel_core::observable::{values_equal, ChangeEvent, ChangeSupport, Observable};

pub const NAME: &str = "name";
pub const AGE: &str = "age";

#[derive(Default)]
pub struct Person {
    name: Mutex<Option<String>>,
    age: Mutex<i32>,
    changes: ChangeSupport,
}

impl Person {
    pub fn new() -> Self {
        Self::default()
    }

    /// Emits only when the name actually changes.
    pub fn set_name(&self, name: Option<&str>) {
        let old = {
            let mut guard = self.name.lock().unwrap();
            let old = guard.clone();
            *guard = name.map(str::to_owned);
            old
        };
        if !values_equal(old.as_deref(), name) {
            self.emit_optional_change(NAME, old, name.map(str::to_owned));
        }
    }

    /// Emits on every call, even when the age is unchanged.
    pub fn set_age(&self, age: i32) {
        let old = std::mem::replace(&mut *self.age.lock().unwrap(), age);
        self.emit_change(AGE, old, age);
    }
}

impl Observable for Person {
    type Value = babel_core::observable::PropertyValue;

    fn change_support(&self) -> &ChangeSupport {
        &self.changes
    }
}

pub type EventLog = Arc<Mutex<Vec<ChangeEvent>>>;

pub fn make_log() -> EventLog {
    Arc::new(Mutex::new(Vec::new()))
}

/// Register a global listener that records every event into a fresh log.
pub fn record_all(entity: &impl Observable<Value = babel_core::observable::PropertyValue>) -> EventLog {
    let log = make_log();
    let log_clone = Arc::clone(&log);
    entity.on(move |event| log_clone.lock().unwrap().push(event.clone()));
    log
}
