//! Harness around the mock driver: manifest generation and a loader-style probe.

pub mod manifest;
pub mod probe;
