//! Core types shared by the Syringe registry crates.

pub mod error;

pub use error::{SyringeError, SyringeResult};
