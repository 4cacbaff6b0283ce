//! Deferred resolution through `Inject`

use super::common::{setup, ConnPool};
use serial_test::serial;
use std::sync::Arc;
use syringe::Inject;

struct Dependant {
    dependency: Inject<ConnPool>,
}

impl Dependant {
    const DEPENDENCY: Inject<ConnPool> = Inject::new("db");

    fn new() -> Self {
        Self {
            dependency: Self::DEPENDENCY,
        }
    }
}

#[test]
#[serial]
fn test_no_candidate() {
    setup();

    let dependant = Dependant::new();
    let err = dependant.dependency.get().unwrap_err();
    assert!(err.is_no_candidate());
    assert_eq!(err.to_string(), "No provider found for [db]");
}

#[test]
#[serial]
fn test_inject() {
    setup();

    // Consumer built before the provider exists.
    let dependant = Dependant::new();

    let pool = syringe::provides::<ConnPool>("db")
        .construct(|| ConnPool::new("postgres://localhost"))
        .unwrap();

    let resolved = dependant.dependency.get().unwrap();
    assert!(Arc::ptr_eq(&pool, &resolved));
}

#[test]
#[serial]
fn test_inject_free_function() {
    setup();

    let binding = syringe::inject::<ConnPool>("db");
    assert_eq!(binding.name(), "db");

    let pool = syringe::mock_with("db", Arc::new(ConnPool::new("mocked")));
    assert!(Arc::ptr_eq(&pool, &binding.get().unwrap()));
}

#[test]
#[serial]
fn test_inject_sees_clear() {
    setup();

    let dependant = Dependant::new();
    syringe::provides::<ConnPool>("db")
        .construct(|| ConnPool::new("first"))
        .unwrap();
    assert!(dependant.dependency.get().is_ok());

    syringe::clear();
    assert!(dependant.dependency.get().unwrap_err().is_no_candidate());

    let second = syringe::provides::<ConnPool>("db")
        .construct(|| ConnPool::new("second"))
        .unwrap();
    assert!(Arc::ptr_eq(&second, &dependant.dependency.get().unwrap()));
}

#[test]
#[serial]
fn test_type_level_binding() {
    setup();

    assert_eq!(Dependant::DEPENDENCY.name(), "db");
    assert!(Dependant::DEPENDENCY.get().is_err());
}
