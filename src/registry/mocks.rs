//! Record-and-stub stand-ins for tests
//!
//! [`Registry::mock`](super::Registry::mock) installs a [`StandIn`] when no
//! substitute is supplied. A stand-in records every call made on it and
//! answers with whatever was stubbed for that method, so tests can assert
//! on how a consumer used its dependency.
//!
//! # Example
//!
//! ```
//! use serde_json::json;
//! use syringe::Registry;
//!
//! let registry = Registry::new();
//! let oracle = registry.mock("oracle");
//! oracle.returns("ask", json!(42));
//!
//! let resolved = registry.get::<syringe::StandIn>("oracle").unwrap();
//! let answer = resolved.call("ask", [json!("the answer?")]);
//!
//! assert_eq!(answer, json!(42));
//! oracle.assert_called_once_with("ask", [json!("the answer?")]);
//! ```

use serde_json::Value;
use std::collections::HashMap;
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Mutex, MutexGuard, PoisonError};

static NEXT_ID: AtomicU64 = AtomicU64::new(1);

/// A single recorded invocation
#[derive(Debug, Clone, PartialEq)]
pub struct Call {
    pub method: String,
    pub args: Vec<Value>,
}

/// Stand-in installed by `mock` when no substitute object is given.
///
/// To stand in for a trait, implement the trait for a wrapper (or for
/// `StandIn` in your own crate) and forward each method to
/// [`StandIn::call`].
pub struct StandIn {
    id: u64,
    name: String,
    calls: Mutex<Vec<Call>>,
    returns: Mutex<HashMap<String, Value>>,
}

impl StandIn {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: NEXT_ID.fetch_add(1, Ordering::Relaxed),
            name: name.into(),
            calls: Mutex::new(Vec::new()),
            returns: Mutex::new(HashMap::new()),
        }
    }

    /// Capability name this stand-in was created for
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Process-unique id, distinguishing stand-ins created for the same name
    pub fn id(&self) -> u64 {
        self.id
    }

    /// Record a call to `method` and return its stubbed value
    /// (`Value::Null` if nothing was stubbed).
    pub fn call<I>(&self, method: &str, args: I) -> Value
    where
        I: IntoIterator<Item = Value>,
    {
        lock(&self.calls).push(Call {
            method: method.to_string(),
            args: args.into_iter().collect(),
        });

        lock(&self.returns)
            .get(method)
            .cloned()
            .unwrap_or(Value::Null)
    }

    /// Stub the value returned by calls to `method`
    pub fn returns(&self, method: &str, value: Value) {
        lock(&self.returns).insert(method.to_string(), value);
    }

    /// All recorded calls, oldest first
    pub fn calls(&self) -> Vec<Call> {
        lock(&self.calls).clone()
    }

    /// Recorded calls to `method`, oldest first
    pub fn calls_to(&self, method: &str) -> Vec<Call> {
        lock(&self.calls)
            .iter()
            .filter(|call| call.method == method)
            .cloned()
            .collect()
    }

    pub fn call_count(&self, method: &str) -> usize {
        lock(&self.calls)
            .iter()
            .filter(|call| call.method == method)
            .count()
    }

    pub fn was_called(&self, method: &str) -> bool {
        self.call_count(method) > 0
    }

    /// Forget recorded calls and stubbed values
    pub fn reset(&self) {
        lock(&self.calls).clear();
        lock(&self.returns).clear();
    }

    /// # Panics
    ///
    /// Panics unless `method` was called exactly once, with `args`.
    pub fn assert_called_once_with<I>(&self, method: &str, args: I)
    where
        I: IntoIterator<Item = Value>,
    {
        let expected: Vec<Value> = args.into_iter().collect();
        let calls = self.calls_to(method);

        match calls.as_slice() {
            [call] if call.args == expected => {}
            [call] => panic!(
                "Expected [{}].{} to be called with {:?}, was called with {:?}",
                self.name, method, expected, call.args
            ),
            _ => panic!(
                "Expected [{}].{} to be called once, was called {} times",
                self.name,
                method,
                calls.len()
            ),
        }
    }

    /// # Panics
    ///
    /// Panics if `method` was called.
    pub fn assert_not_called(&self, method: &str) {
        let count = self.call_count(method);
        if count > 0 {
            panic!(
                "Expected [{}].{} not to be called, was called {} times",
                self.name, method, count
            );
        }
    }
}

impl fmt::Debug for StandIn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StandIn")
            .field("id", &self.id)
            .field("name", &self.name)
            .field("calls", &lock(&self.calls).len())
            .finish()
    }
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}
