//! Two small demos of trait-based polymorphism.
//!
//! `vehicle` dispatches `move` through `dyn Vehicle`, `superhero` shows a
//! subtype built by composition that overrides one behavior and adds another.
//! Every demo writes into an `io::Write` so the binaries print to stdout and
//! the tests read back a buffer.

pub mod error;
pub mod superhero;
pub mod vehicle;

pub use error::DemoError;
