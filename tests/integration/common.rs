//! Common utilities for integration tests

use std::sync::Once;
use tracing_subscriber::EnvFilter;

static TRACING: Once = Once::new();

/// Install a test log subscriber (once) and start from an empty registry.
pub fn setup() {
    TRACING.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();
    });

    syringe::clear();
}

/// A provider type used across tests
#[derive(Debug)]
pub struct ConnPool {
    pub url: String,
}

impl ConnPool {
    pub fn new(url: &str) -> Self {
        Self {
            url: url.to_string(),
        }
    }
}
